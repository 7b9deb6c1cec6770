// Test doubles for kernel infrastructure traits
//
// Injected into ServerDeps by integration tests in place of the OpenAI client.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseAI, CompletionOptions};

// =============================================================================
// Mock AI
// =============================================================================

/// A prompt pair captured by [`MockAI`]
#[derive(Debug, Clone)]
pub struct PromptCall {
    pub system_prompt: String,
    pub user_prompt: String,
    pub options: CompletionOptions,
}

enum MockReply {
    Content(String),
    Failure(String),
}

#[derive(Clone)]
pub struct MockAI {
    responses: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<PromptCall>>>,
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a raw text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.push(MockReply::Content(response.into()));
        self
    }

    /// Add a JSON response to the queue (will be serialized)
    pub fn with_json_response<T: serde::Serialize>(self, data: &T) -> Self {
        let json = serde_json::to_string(data).expect("Failed to serialize mock response");
        self.push(MockReply::Content(json));
        self
    }

    /// Make the next call fail, as an unreachable API would
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(MockReply::Failure(message.into()));
        self
    }

    /// Get all prompts that were sent to the AI
    pub fn calls(&self) -> Vec<PromptCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last user prompt sent to the AI
    pub fn last_prompt(&self) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|c| c.user_prompt.clone())
    }

    /// Check if a user prompt containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.user_prompt.contains(text))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn push(&self, reply: MockReply) {
        self.responses.lock().unwrap().push(reply);
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: CompletionOptions,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(PromptCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            options,
        });

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok("{}".to_string());
        }
        match responses.remove(0) {
            MockReply::Content(content) => Ok(content),
            MockReply::Failure(message) => Err(anyhow!(message)),
        }
    }
}
