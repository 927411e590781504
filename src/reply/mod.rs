//! Reply core: tone profiles, prompt construction and response extraction.
//!
//! Everything here is pure and synchronous. The upstream call lives in
//! [`crate::llm`] and the orchestration in [`crate::service`].

pub mod extract;
pub mod prompt;
pub mod tone;

pub use extract::{UpstreamResult, extract};
pub use prompt::{GeneratedPrompt, GenerationConfig, ReplyRequest, build, build_for};
pub use tone::{Tone, ToneInstructions, ToneProfile, display_tone};
