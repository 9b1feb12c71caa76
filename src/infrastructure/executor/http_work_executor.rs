use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ExecutorError, WorkExecutor};
use crate::domain::{TranscriptionRequest, TranscriptionResult};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Calls the transcription service over HTTP: one JSON `POST`, one attempt,
/// bounded by the client timeout.
pub struct HttpWorkExecutor {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpWorkExecutor {
    pub fn new(base_url: &str, endpoint_path: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let endpoint = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            endpoint_path.trim_start_matches('/'),
        );
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Serialize)]
struct ExecutorRequest<'a> {
    url: &'a str,
    language: &'a str,
    translate: bool,
}

#[derive(Deserialize)]
struct ExecutorResponse {
    transcription: String,
    #[serde(default)]
    translation: Option<String>,
}

#[async_trait]
impl WorkExecutor for HttpWorkExecutor {
    async fn invoke(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, ExecutorError> {
        let payload = ExecutorRequest {
            url: &request.url,
            language: &request.language,
            translate: request.translate,
        };

        tracing::debug!(endpoint = %self.endpoint, "Sending job to work executor");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ExecutorError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExecutorError::BodyReadFailed(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Work executor returned an error status");
            return Err(ExecutorError::NonSuccessStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ExecutorResponse = serde_json::from_str(&body)
            .map_err(|e| ExecutorError::UnparseableResponse(e.to_string()))?;

        tracing::debug!(
            chars = parsed.transcription.len(),
            has_translation = parsed.translation.is_some(),
            "Work executor responded"
        );

        Ok(TranscriptionResult::new(
            parsed.transcription,
            parsed.translation,
        ))
    }
}
