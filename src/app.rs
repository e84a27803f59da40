//! Application orchestration for a single generation run.

use crate::ai::{GeminiPromptClient, PromptService};
use crate::config::Config;
use crate::options::{GenerationOptions, GenerationType};
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Coordinates prompt generation and local output for one run.
pub struct App {
    service: Box<dyn PromptService>,
}

impl App {
    /// Build an app from a concrete service dependency.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_service(service: Box<dyn PromptService>) -> Self {
        Self { service }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        info!("Prompt provider: Gemini (model: {})", config.model);
        let service = Box::new(GeminiPromptClient::new(config.gemini_api_key, config.model));

        Ok(Self::with_service(service))
    }

    /// Generate prompts for `options`, saving them under `out_dir` when given.
    pub async fn run(
        &self,
        options: &GenerationOptions,
        out_dir: Option<&Path>,
    ) -> Result<Vec<String>> {
        info!(
            "Generating {} {} prompt(s) for: {}",
            options.count.get(),
            options.generation_type,
            options.idea
        );

        let prompts = self.service.generate_prompts(options).await?;
        info!("Received {} prompt(s)", prompts.len());

        if let Some(dir) = out_dir {
            let path = save_prompts(&prompts, options.generation_type, dir)?;
            info!("Saved prompts to {}", path.display());
        }

        Ok(prompts)
    }
}

/// Write prompts as a plain-text file, one blank line between entries.
fn save_prompts(prompts: &[String], kind: GenerationType, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}-prompts.txt", kind));
    fs::write(&path, prompts.join("\n\n"))?;
    Ok(path)
}
