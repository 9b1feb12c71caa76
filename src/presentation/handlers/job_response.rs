use serde::Serialize;

use crate::domain::Job;

/// Wire form of a job. Result and error fields are omitted until the job has them.
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub id: String,
    pub status: String,
    pub url: String,
    pub language: String,
    pub translate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.to_string(),
            status: job.status.as_str().to_string(),
            url: job.request.url,
            language: job.request.language,
            translate: job.request.translate,
            transcription: job.transcription,
            translation: job.translation,
            error: job.error,
            created_at: job.created_at.to_rfc3339(),
            updated_at: job.updated_at.to_rfc3339(),
        }
    }
}
