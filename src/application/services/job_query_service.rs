use std::sync::Arc;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{Job, JobId, JobStatus};

/// Read-only view over the job store. Never waits on in-flight runs.
pub struct JobQueryService {
    job_repository: Arc<dyn JobRepository>,
}

impl JobQueryService {
    pub fn new(job_repository: Arc<dyn JobRepository>) -> Self {
        Self { job_repository }
    }

    pub async fn list_all(&self) -> Result<Vec<Job>, JobQueryError> {
        Ok(self.job_repository.list_all().await?)
    }

    pub async fn list_by_status(&self, status: JobStatus) -> Result<Vec<Job>, JobQueryError> {
        Ok(self.job_repository.list_by_status(status).await?)
    }

    pub async fn get_by_id(&self, id: JobId) -> Result<Job, JobQueryError> {
        self.job_repository
            .get_by_id(id)
            .await?
            .ok_or(JobQueryError::NotFound(id))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobQueryError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
