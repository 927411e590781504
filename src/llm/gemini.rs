//! Gemini `generateContent` client.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::GeminiConfig;
use crate::error::LlmError;
use crate::reply::{GeneratedPrompt, GenerationConfig};

use super::provider::GenerationBackend;

const PROVIDER: &str = "gemini";
const API_KEY_HEADER: &str = "X-goog-api-key";

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

impl<'a> GeminiRequest<'a> {
    pub fn new(prompt: &'a GeneratedPrompt) -> Self {
        Self {
            contents: [Content {
                parts: [Part { text: &prompt.text }],
            }],
            generation_config: prompt.generation_config(),
        }
    }
}

/// HTTP client for a configured Gemini endpoint.
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: format!("Failed to build HTTP client: {e}"),
            })?;
        info!(url = %config.api_url, key = %config.masked_key(), "Gemini client configured");
        Ok(Self { config, client })
    }

    fn transport_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout {
                provider: PROVIDER.to_string(),
                timeout: self.config.timeout,
            }
        } else {
            LlmError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn generate(&self, prompt: &GeneratedPrompt) -> Result<String, LlmError> {
        let body = GeminiRequest::new(prompt);

        debug!(url = %self.config.api_url, temperature = prompt.temperature, "Sending request to Gemini");

        let resp = self
            .client
            .post(&self.config.api_url)
            .header(API_KEY_HEADER, self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            if text.trim().is_empty() {
                return Err(LlmError::EmptyResponse {
                    provider: PROVIDER.to_string(),
                    status: status.as_u16(),
                });
            }
            // Error bodies still carry `{"error": {...}}` for the extractor.
            warn!(status = status.as_u16(), "Gemini returned an error status");
        }

        Ok(text)
    }
}
