use async_trait::async_trait;

use crate::error::Error;

pub mod openai;

pub use openai::OpenAiProvider;

/// A text-generation backend that answers one system + user message exchange.
///
/// Shared across requests as `Arc<dyn ChatProvider>`, hence `Send + Sync`.
/// Implementations return the raw text of the reply; interpreting it is the
/// caller's job. Any failure (network, auth, quota, unexpected reply format)
/// is an `Error::Provider` carrying the underlying message.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Error>;
}
