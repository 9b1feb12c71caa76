use crate::domain::{Job, JobId, JobStatus, JobTransitionError};
use async_trait::async_trait;

use super::RepositoryError;

/// An in-place transition applied to a single stored job.
pub type JobMutation = Box<dyn FnOnce(&mut Job) -> Result<(), JobTransitionError> + Send>;

/// Owns every job record. Reads of a record may overlap; a mutation excludes
/// all other access to that record, but never to other records.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &Job) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;

    async fn list_all(&self) -> Result<Vec<Job>, RepositoryError>;

    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<Job>, RepositoryError>;

    /// Applies `mutation` atomically and returns the updated record. A rejected
    /// mutation leaves the stored record untouched.
    async fn mutate(&self, id: JobId, mutation: JobMutation) -> Result<Job, RepositoryError>;
}
