use std::sync::Arc;

use crate::application::ports::{JobRepository, WorkExecutor};
use crate::application::services::{JobDispatcher, JobQueryService};

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<JobDispatcher>,
    pub job_queries: Arc<JobQueryService>,
}

impl AppState {
    /// Wires the dispatcher and the query surface to the same job store.
    pub fn new(job_repository: Arc<dyn JobRepository>, work_executor: Arc<dyn WorkExecutor>) -> Self {
        Self {
            dispatcher: Arc::new(JobDispatcher::new(
                Arc::clone(&job_repository),
                work_executor,
            )),
            job_queries: Arc::new(JobQueryService::new(job_repository)),
        }
    }
}
