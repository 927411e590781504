//! Prompt construction for reply generation.

use serde::{Deserialize, Serialize};

use super::tone::Tone;

const PREAMBLE: &str = "You are a professional email assistant. \
    Write an email reply to the following message. \
    Do not include a subject line. \
    Keep it concise (2-3 sentences).\n\n";

const TOP_K: u32 = 40;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Incoming reply request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub email_content: String,
    #[serde(default)]
    pub tone: Option<String>,
}

impl ReplyRequest {
    pub fn new(email_content: impl Into<String>, tone: Option<&str>) -> Self {
        Self {
            email_content: email_content.into(),
            tone: tone.map(str::to_string),
        }
    }
}

/// Sampling parameters sent alongside every prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

/// Prompt text plus the tone's sampling temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPrompt {
    pub text: String,
    pub temperature: f64,
}

impl GeneratedPrompt {
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

/// Build the instruction prompt for an email and a requested tone label.
///
/// Never fails. The email content is embedded verbatim.
pub fn build(email_content: &str, tone: Option<&str>) -> GeneratedPrompt {
    let tone = Tone::resolve(tone);
    let instructions = tone.instructions().render();

    let mut text = String::with_capacity(
        PREAMBLE.len() + instructions.len() + email_content.len() + 32,
    );
    text.push_str(PREAMBLE);
    text.push_str(&instructions);
    text.push_str("\nOriginal email:\n");
    text.push_str(email_content);
    text.push_str("\n\nReply:");

    GeneratedPrompt {
        text,
        temperature: tone.temperature(),
    }
}

/// Convenience wrapper over [`build`] for a parsed request.
pub fn build_for(request: &ReplyRequest) -> GeneratedPrompt {
    build(&request.email_content, request.tone.as_deref())
}
