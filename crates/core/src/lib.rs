pub mod interview;
pub mod llm_client;
pub mod service;
pub mod store;
pub mod topic;

use std::time::Duration;

/// Errors surfaced by the question-generation capability.
///
/// These propagate out of the session relay uncaught: a failed generation
/// call terminates the connection rather than being retried.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The LLM provider rejected or failed the chat completion request.
    #[error("LLM provider request failed: {0}")]
    Provider(#[from] async_openai::error::OpenAIError),
    /// Transport-level failure talking to a remote orchestration service.
    #[error("orchestration request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider did not answer within the configured request timeout.
    #[error("generation request timed out after {0:?}")]
    Timeout(Duration),
    /// The upstream responded, but not with anything usable.
    #[error("malformed generation response: {0}")]
    MalformedResponse(String),
}
