mod job_repository;
mod repository_error;
mod work_executor;

pub use job_repository::{JobMutation, JobRepository};
pub use repository_error::RepositoryError;
pub use work_executor::{ExecutorError, WorkExecutor};
