// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Prompt content and response reshaping live in the domains.
//
// Naming convention: Base* for trait names (e.g., BaseAI)

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

/// Sampling settings for a single completion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a system + user prompt pair expecting a JSON object back.
    /// Returns the raw reply; parse with [`generate_json`] in calling code.
    async fn complete_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: CompletionOptions,
    ) -> Result<String>;
}

/// Run a JSON completion and deserialize the reply into `T`.
///
/// Markdown code fences around the reply are tolerated.
pub async fn generate_json<T: DeserializeOwned>(
    ai: &dyn BaseAI,
    system_prompt: &str,
    user_prompt: &str,
    options: CompletionOptions,
) -> Result<T> {
    let raw = ai.complete_json(system_prompt, user_prompt, options).await?;
    serde_json::from_str(openai_client::strip_code_blocks(&raw))
        .context("LLM reply was not the expected JSON shape")
}
