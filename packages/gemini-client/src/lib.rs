//! Pure Google Gemini REST API client
//!
//! A small client for the Gemini `generateContent` endpoint with no
//! domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateRequest};
//!
//! let client = GeminiClient::from_env()?;
//!
//! let response = client
//!     .generate_content(GenerateRequest::prompt("Hello!").temperature(0.2))
//!     .await?;
//! println!("{}", response.text);
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        if api_key.trim().is_empty() {
            return Err(GeminiError::Config("GEMINI_API_KEY is empty".into()));
        }
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, test servers, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model used by [`generate_content`](Self::generate_content).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured model.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Generate content with the configured model.
    pub async fn generate_content(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.generate_content_with_model(&self.model, request).await
    }

    /// Generate content with an explicit model.
    pub async fn generate_content_with_model(
        &self,
        model: &str,
        request: GenerateRequest,
    ) -> Result<GenerateResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<types::ApiErrorBody>(&error_text) {
                Ok(body) => format!(
                    "{} {} ({})",
                    body.error.code, body.error.status, body.error.message
                ),
                Err(_) => format!("{} {}", status, error_text),
            };
            warn!(status = %status, error = %message, "Gemini API error");
            return Err(GeminiError::Api(format!("Gemini API error: {}", message)));
        }

        let raw: types::GenerateResponseRaw = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        let generated = raw.into_response().map_err(GeminiError::Empty)?;

        debug!(
            model = %model,
            duration_ms = start.elapsed().as_millis(),
            finish_reason = ?generated.finish_reason,
            "Gemini generateContent"
        );

        Ok(generated)
    }
}
