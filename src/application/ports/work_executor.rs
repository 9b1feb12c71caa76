use async_trait::async_trait;

use crate::domain::{TranscriptionRequest, TranscriptionResult};

/// The downstream service that downloads, transcribes and translates media.
/// One call is one attempt; implementations never retry.
#[async_trait]
pub trait WorkExecutor: Send + Sync {
    async fn invoke(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, ExecutorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("failed to connect to work executor: {0}")]
    ConnectionFailed(String),
    #[error("failed to read response body: {0}")]
    BodyReadFailed(String),
    /// Rendered as the raw downstream body, which is the only diagnostic available.
    #[error("{body}")]
    NonSuccessStatus { status: u16, body: String },
    #[error("failed to parse JSON response: {0}")]
    UnparseableResponse(String),
}

impl ExecutorError {
    pub fn kind(&self) -> &'static str {
        match self {
            ExecutorError::ConnectionFailed(_) | ExecutorError::BodyReadFailed(_) => "connection",
            ExecutorError::NonSuccessStatus { .. } => "non_success_status",
            ExecutorError::UnparseableResponse(_) => "unparseable_response",
        }
    }
}
