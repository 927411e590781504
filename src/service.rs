//! Reply service — prompt, upstream call, extraction.

use std::sync::Arc;

use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::error::LlmError;
use crate::llm::GenerationBackend;
use crate::reply::{self, ReplyRequest, UpstreamResult, display_tone};

/// Sample email used by the upstream diagnostic endpoint.
pub const DIAGNOSTIC_EMAIL: &str =
    "Hello, can we schedule a meeting tomorrow? I want to discuss the new project requirements.";

/// Generates email replies through a [`GenerationBackend`].
pub struct ReplyService {
    backend: Arc<dyn GenerationBackend>,
}

impl ReplyService {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Generate a reply. `Err` means the upstream call produced no payload;
    /// every payload, good or bad, comes back as an [`UpstreamResult`].
    pub async fn generate_reply(&self, request: &ReplyRequest) -> Result<UpstreamResult, LlmError> {
        let request_id = Uuid::new_v4();
        let tone = display_tone(request.tone.as_deref());
        let span = info_span!("generate_reply", %request_id, tone = %tone);

        async {
            info!(provider = self.backend.name(), "Starting email generation");
            debug!(content = %request.email_content, "Email content");

            let prompt = reply::build_for(request);
            debug!(prompt = %prompt.text, temperature = prompt.temperature, "Prompt built");

            let raw = self.backend.generate(&prompt).await.inspect_err(|e| {
                error!(error = %e, "Upstream call failed");
            })?;

            let result = reply::extract(&raw);
            match &result {
                UpstreamResult::Success { reply_text } => {
                    info!(chars = reply_text.len(), "Reply generated");
                }
                UpstreamResult::UpstreamError { message } => {
                    warn!(message = %message, "API error");
                }
                UpstreamResult::MalformedResponse { message } => {
                    warn!(message = %message, "Error parsing response");
                }
            }
            Ok::<_, LlmError>(result)
        }
        .instrument(span)
        .await
    }

    /// Run a fixed professional-tone request against the live backend.
    pub async fn diagnose(&self) -> Result<UpstreamResult, LlmError> {
        let request = ReplyRequest::new(DIAGNOSTIC_EMAIL, Some("professional"));
        self.generate_reply(&request).await
    }
}

/// Body returned when the upstream call fails before any payload arrives.
pub fn transport_failure_message(tone: Option<&str>, cause: &LlmError) -> String {
    format!(
        "Sorry, I encountered an error while generating your {} reply: {}",
        display_tone(tone),
        cause
    )
}
