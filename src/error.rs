//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use crate::options::GenerationType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Please describe your idea.")]
    EmptyIdea,

    #[error("{0}")]
    Credential(String),

    #[error("Received an empty response from the AI.")]
    EmptyResponse,

    #[error("The AI returned an invalid response. Please try again.")]
    InvalidResponse,

    #[error("Failed to generate {kind} prompt. The AI service may be temporarily unavailable.")]
    Upstream {
        kind: GenerationType,
        /// Underlying failure text, logged but never shown to users.
        detail: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
