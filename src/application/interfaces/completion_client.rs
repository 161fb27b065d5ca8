use async_trait::async_trait;

use crate::domain::{ChatMessage, DomainError, SamplingParams};

/// An interface for sending a chat-completion request to an LLM and receiving
/// the text of the first choice.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::ConsultationService`]) stay
/// decoupled from any particular provider or HTTP client library.
///
/// Implementations hold only immutable configuration, so a single instance is
/// shared across concurrent calls.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `messages` in order with the given sampling parameters and return
    /// `choices[0].message.content`.
    ///
    /// Exactly one request is attempted; failures are never retried.
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        sampling: SamplingParams,
    ) -> Result<String, DomainError>;
}
