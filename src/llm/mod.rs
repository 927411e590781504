//! Upstream generation backend.
//!
//! The service talks to a [`GenerationBackend`], which returns the raw
//! response body for the extractor to classify. [`GeminiClient`] is the
//! only production implementation.

pub mod gemini;
pub mod provider;

pub use gemini::GeminiClient;
pub use provider::GenerationBackend;
