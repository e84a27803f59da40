//! AI service integration for prompt generation
//!
//! Provides the service seam between the application and the Gemini
//! backend, plus a mock implementation for tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiPromptClient;
pub use mock::MockPromptClient;

use crate::options::GenerationOptions;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PromptService: Send + Sync {
    /// Expand the idea in `options` into ready-to-use prompt strings,
    /// preserving the order the backend returned them in.
    async fn generate_prompts(&self, options: &GenerationOptions) -> Result<Vec<String>>;
}
