//! Environment-backed configuration.

use crate::{Error, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_KEY_VAR: &str = "GEMINI_API_KEY";
const MODEL_VAR: &str = "GEMINI_MODEL";

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: require_non_blank(std::env::var(API_KEY_VAR).ok(), API_KEY_VAR)?,
            model: std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}

/// The credential must be present and non-blank. The message names the
/// variable, never its value.
fn require_non_blank(value: Option<String>, var: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Credential(format!(
            "{} is not set. Add it to the environment or an .env file.",
            var
        ))),
    }
}
