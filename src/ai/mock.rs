use super::PromptService;
use crate::options::GenerationOptions;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockPromptClient {
    responses: Arc<Mutex<Vec<Vec<String>>>>,
    errors: Arc<Mutex<Vec<Error>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockPromptClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            errors: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_prompts_response(self, response: Vec<String>) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Queue an error returned (once each) ahead of any canned responses.
    pub fn with_error(self, error: Error) -> Self {
        self.errors.lock().unwrap().push(error);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockPromptClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptService for MockPromptClient {
    async fn generate_prompts(&self, options: &GenerationOptions) -> Result<Vec<String>> {
        // Mirrors the real client's precondition: no call happens for a
        // blank idea, so it must not count.
        if options.idea.trim().is_empty() {
            return Err(Error::EmptyIdea);
        }

        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let mut errors = self.errors.lock().unwrap();
        if !errors.is_empty() {
            return Err(errors.remove(0));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok((1..=options.count.get())
                .map(|i| format!("{}, microstock variation {}", options.idea.trim(), i))
                .collect())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
