use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::application::ports::{JobMutation, JobRepository, RepositoryError};
use crate::domain::{Job, JobId, JobStatus};

type JobCell = Arc<RwLock<Job>>;

/// Process-lifetime job store. The index lock is only held to insert or look
/// up a record; each record has its own lock, so a mutation blocks readers and
/// writers of that job alone.
#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: RwLock<HashMap<JobId, JobCell>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn cell(&self, id: JobId) -> Option<JobCell> {
        self.jobs.read().await.get(&id).cloned()
    }

    /// Consistent per record, not across records.
    async fn snapshot(&self) -> Vec<Job> {
        let cells: Vec<JobCell> = self.jobs.read().await.values().cloned().collect();

        let mut jobs = Vec::with_capacity(cells.len());
        for cell in cells {
            jobs.push(cell.read().await.clone());
        }
        jobs.sort_by_key(|job| (job.created_at, job.id));
        jobs
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    #[instrument(skip(self, job), fields(job_id = %job.id))]
    async fn create(&self, job: &Job) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        match jobs.entry(job.id) {
            Entry::Occupied(_) => Err(RepositoryError::ConstraintViolation(format!(
                "job {} already exists",
                job.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(RwLock::new(job.clone())));
                Ok(())
            }
        }
    }

    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        match self.cell(id).await {
            Some(cell) => Ok(Some(cell.read().await.clone())),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Job>, RepositoryError> {
        Ok(self.snapshot().await)
    }

    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<Job>, RepositoryError> {
        let mut jobs = self.snapshot().await;
        jobs.retain(|job| job.status == status);
        Ok(jobs)
    }

    #[instrument(skip(self, mutation), fields(job_id = %id))]
    async fn mutate(&self, id: JobId, mutation: JobMutation) -> Result<Job, RepositoryError> {
        let cell = self
            .cell(id)
            .await
            .ok_or_else(|| RepositoryError::NotFound(format!("job {}", id)))?;

        let mut current = cell.write().await;
        let mut next = current.clone();
        mutation(&mut next)?;
        *current = next.clone();

        Ok(next)
    }
}

