use async_trait::async_trait;

/// Seam to the external completion service. One system instruction, one
/// user message, one string back. Implementations hold their own model
/// identifier and credentials.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, anyhow::Error>;
}
