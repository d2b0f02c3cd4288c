// AI implementation using Google Gemini
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use gemini_client::{GeminiClient, GenerateRequest};

use super::BaseAI;

/// Gemini implementation of AI capabilities
#[derive(Clone)]
pub struct GeminiAI {
    client: GeminiClient,
}

impl GeminiAI {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key).with_model(model),
        }
    }

    pub fn from_client(client: GeminiClient) -> Self {
        Self { client }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[async_trait]
impl BaseAI for GeminiAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.complete_with_model(prompt, None).await
    }

    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        let model = model.unwrap_or(self.client.model());
        let response = self
            .client
            .generate_content_with_model(model, GenerateRequest::prompt(prompt))
            .await
            .with_context(|| format!("Gemini completion failed (model {})", model))?;

        tracing::info!(
            model = %model,
            finish_reason = ?response.finish_reason,
            total_tokens = response.usage.as_ref().map(|u| u.total_token_count),
            "Gemini completion"
        );

        Ok(response.text)
    }
}
