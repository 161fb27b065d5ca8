use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::application::CompletionClient;
use crate::domain::{ChatMessage, DomainError, Role, SamplingParams};

/// Offline [`CompletionClient`] that echoes the last user message.
///
/// Useful for exercising the MCP surface without credentials and for tests
/// that need to count outbound calls.
pub struct MockCompletion {
    calls: AtomicUsize,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completions requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn render(messages: &[ChatMessage], sampling: &SamplingParams) -> String {
        let prompt = messages
            .iter()
            .rev()
            .find(|m| m.role() == Role::User)
            .map(ChatMessage::content)
            .unwrap_or_default();

        format!(
            "[mock completion | temperature={} top_p={} max_tokens={}]\n{}",
            sampling.temperature(),
            sampling.top_p(),
            sampling.max_tokens(),
            prompt
        )
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        sampling: SamplingParams,
    ) -> Result<String, DomainError> {
        if messages.is_empty() {
            return Err(DomainError::EmptyCompletion);
        }

        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Generated mock completion #{} for {} messages", n, messages.len());

        Ok(Self::render(&messages, &sampling))
    }
}
