use chrono::{DateTime, Utc};

use super::{JobId, JobStatus, TranscriptionRequest, TranscriptionResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    pub request: TranscriptionRequest,
    pub transcription: Option<String>,
    pub translation: Option<String>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid job transition from {from} to {to}")]
pub struct JobTransitionError {
    pub from: JobStatus,
    pub to: JobStatus,
}

impl Job {
    pub fn new(request: TranscriptionRequest) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            status: JobStatus::Queued,
            request,
            transcription: None,
            translation: None,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn start_processing(&mut self) -> Result<(), JobTransitionError> {
        self.transition(JobStatus::Processing)
    }

    /// Records a successful result. The translation is dropped when it was not
    /// requested or came back empty.
    pub fn complete(&mut self, result: TranscriptionResult) -> Result<(), JobTransitionError> {
        self.transition(JobStatus::Completed)?;
        let translate = self.request.translate;
        self.transcription = Some(result.transcription);
        self.translation = result
            .translation
            .filter(|t| translate && !t.is_empty());
        self.error = None;
        Ok(())
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), JobTransitionError> {
        self.transition(JobStatus::Failed)?;
        self.transcription = None;
        self.translation = None;
        self.error = Some(message.into());
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    fn transition(&mut self, next: JobStatus) -> Result<(), JobTransitionError> {
        if !self.status.can_transition_to(next) {
            return Err(JobTransitionError {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}
