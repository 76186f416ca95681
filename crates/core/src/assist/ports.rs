//! Port interface for the prompt relay function

use async_trait::async_trait;
use autocrm_domain::Result;

/// Trait for a text-generation relay
#[async_trait]
pub trait PromptRelay: Send + Sync {
    /// Send one prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String>;
}
