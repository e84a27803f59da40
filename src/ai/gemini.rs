//! Gemini-backed prompt generation.
//!
//! Calls the `generateContent` REST endpoint with a JSON response schema
//! and strictly decodes the reply into a list of prompt strings.

use crate::ai::PromptService;
use crate::instruction::build_instruction;
use crate::options::{GenerationOptions, GenerationType};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const TEMPERATURE: f64 = 0.9;
const TOP_P: f64 = 0.95;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    response_mime_type: &'static str,
    response_schema: Schema,
}

/// Subset of the Gemini schema language needed for an array-of-strings reply.
#[derive(Debug, Serialize)]
struct Schema {
    #[serde(rename = "type")]
    schema_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Schema {
    fn string_array(item_description: String) -> Self {
        Self {
            schema_type: "ARRAY",
            items: Some(Box::new(Self {
                schema_type: "STRING",
                items: None,
                description: Some(item_description),
            })),
            description: None,
        }
    }
}

// Lenient envelope decoding: a reply without candidates, content, or text
// is an empty response, not a malformed one.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for Gemini's `generateContent` endpoint.
pub struct GeminiPromptClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiPromptClient {
    /// Construct a client.
    ///
    /// `model` should be the bare model ID (for example `gemini-2.5-flash`),
    /// not a `models/...`-prefixed path segment.
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, Client::new())
    }

    /// Construct a client around a caller-provided HTTP client. Timeout and
    /// proxy policy belong to that client; none is imposed here.
    pub fn new_with_client(api_key: String, model: String, client: Client) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn generate_content(
        &self,
        kind: GenerationType,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                call_failure(kind, e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error (status {}): {}", status, error_text);
            return Err(call_failure(
                kind,
                format!("Gemini API error (status {}): {}", status, error_text),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| call_failure(kind, format!("Failed to read Gemini response: {}", e)))?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            call_failure(kind, format!("Failed to parse Gemini response: {}", e))
        })
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.iter().find(|p| !p.text.trim().is_empty()))
            .map(|p| p.text.clone())
    }
}

/// Classify a failed `generateContent` call. A credential complaint from the
/// service surfaces as a configuration problem, not a transient failure.
fn call_failure(kind: GenerationType, detail: String) -> Error {
    if detail.contains("API key") {
        Error::Credential(
            "API key is invalid or missing. Please check your configuration.".to_string(),
        )
    } else {
        Error::Upstream { kind, detail }
    }
}

/// Strictly decode reply text as a JSON array of strings.
fn parse_prompt_list(text: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(text).map_err(|e| {
        tracing::error!("Failed to parse prompt list: {}\nBody: {}", e, text);
        Error::InvalidResponse
    })
}

#[async_trait]
impl PromptService for GeminiPromptClient {
    async fn generate_prompts(&self, options: &GenerationOptions) -> Result<Vec<String>> {
        if options.idea.trim().is_empty() {
            return Err(Error::EmptyIdea);
        }

        let instruction = build_instruction(options);
        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: instruction.system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: instruction.user_content,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                response_mime_type: "application/json",
                response_schema: Schema::string_array(format!(
                    "A single, detailed, keyword-rich {} prompt.",
                    options.generation_type
                )),
            },
        };

        tracing::debug!(
            "Requesting {} {} prompt(s) from {}",
            options.count.get(),
            options.generation_type,
            self.model
        );

        let response = self
            .generate_content(options.generation_type, &request)
            .await?;

        let text = Self::extract_text(&response).ok_or(Error::EmptyResponse)?;
        parse_prompt_list(&text)
    }
}
