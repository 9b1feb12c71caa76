use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::application::ports::{
    ExecutorError, JobMutation, JobRepository, RepositoryError, WorkExecutor,
};
use crate::domain::{
    Job, JobId, MediaUrlError, TranscriptionRequest, TranscriptionResult, validate_media_url,
};

/// A freshly queued job and the task driving it to a terminal state.
pub struct SubmittedJob {
    pub job: Job,
    pub handle: JoinHandle<()>,
}

/// Accepts transcription requests and runs each one as its own tokio task.
///
/// A run marks the job `processing`, validates the URL, calls the work
/// executor once and records either the result or a categorized error. A
/// panicking executor is caught and recorded as a failure, so no job is left
/// in `processing` once its task ends.
#[derive(Clone)]
pub struct JobDispatcher {
    job_repository: Arc<dyn JobRepository>,
    work_executor: Arc<dyn WorkExecutor>,
}

impl JobDispatcher {
    pub fn new(job_repository: Arc<dyn JobRepository>, work_executor: Arc<dyn WorkExecutor>) -> Self {
        Self {
            job_repository,
            work_executor,
        }
    }

    /// Stores the job as `queued` before spawning its run, so the returned id
    /// is always visible to readers.
    pub async fn submit(
        &self,
        request: TranscriptionRequest,
    ) -> Result<SubmittedJob, RepositoryError> {
        let job = Job::new(request.clone());
        self.job_repository.create(&job).await?;

        let handle = self.dispatch(job.id, request);

        tracing::info!(
            job_id = %job.id,
            language = %job.request.language,
            translate = job.request.translate,
            "Transcription job queued"
        );

        Ok(SubmittedJob { job, handle })
    }

    fn dispatch(&self, job_id: JobId, request: TranscriptionRequest) -> JoinHandle<()> {
        let dispatcher = self.clone();
        let span = tracing::info_span!("transcription_job", job_id = %job_id);
        tokio::spawn(async move { dispatcher.run(job_id, request).await }.instrument(span))
    }

    async fn run(&self, job_id: JobId, request: TranscriptionRequest) {
        let started = Instant::now();

        if let Err(e) = self
            .update(job_id, Box::new(|job| job.start_processing()))
            .await
        {
            tracing::error!(error = %e, "Failed to mark job as processing");
            return;
        }

        let outcome = AssertUnwindSafe(self.execute(&request))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(DispatchError::Panicked(panic_message(payload))));

        let elapsed_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(result) => {
                let chars = result.transcription.chars().count();
                match self
                    .update(job_id, Box::new(move |job| job.complete(result)))
                    .await
                {
                    Ok(_) => tracing::info!(elapsed_ms, chars, "Transcription job completed"),
                    Err(e) => tracing::error!(error = %e, "Failed to record job result"),
                }
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(
                    error = %message,
                    kind = e.kind(),
                    elapsed_ms,
                    "Transcription job failed"
                );
                if let Err(repo_err) = self
                    .update(job_id, Box::new(move |job| job.fail(message)))
                    .await
                {
                    tracing::error!(error = %repo_err, "Failed to record job failure");
                }
            }
        }
    }

    async fn execute(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, DispatchError> {
        let media_url = validate_media_url(&request.url)?;
        tracing::debug!(host = %media_url.host(), "Media URL accepted");

        let validated = TranscriptionRequest {
            url: media_url.to_string(),
            ..request.clone()
        };
        let result = self.work_executor.invoke(&validated).await?;
        Ok(result)
    }

    async fn update(&self, job_id: JobId, mutation: JobMutation) -> Result<Job, RepositoryError> {
        let job = self.job_repository.mutate(job_id, mutation).await?;
        tracing::debug!(status = %job.status, "Job status transition");
        Ok(job)
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] MediaUrlError),
    #[error(transparent)]
    Executor(#[from] ExecutorError),
    #[error("work executor panicked: {0}")]
    Panicked(String),
}

impl DispatchError {
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::Validation(_) => "validation",
            DispatchError::Executor(e) => e.kind(),
            DispatchError::Panicked(_) => "panic",
        }
    }
}
