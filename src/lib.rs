//! Prompt generator for microstock AI content
//!
//! Expands a short idea into detailed, keyword-rich prompts for AI video
//! and image tools via Gemini, with user-selectable style, background,
//! and audio handling.

pub mod ai;
pub mod app;
pub mod config;
pub mod error;
pub mod instruction;
pub mod options;
pub mod prompts;

pub use error::{Error, Result};
