//! Backend trait for the upstream generation API.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::reply::GeneratedPrompt;

/// Sends a prompt upstream and hands back the raw payload.
///
/// Implementations return `Err` only when no payload is available
/// (connection failure, timeout, error status with an empty body).
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Short provider name used in logs and errors.
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &GeneratedPrompt) -> Result<String, LlmError>;
}
