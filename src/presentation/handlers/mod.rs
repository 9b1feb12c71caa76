mod error_response;
mod health;
mod job_response;
mod job_result;
mod jobs;
mod process;

pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use job_response::JobResponse;
pub use job_result::job_result_handler;
pub use jobs::list_jobs_handler;
pub use process::{ProcessRequest, ProcessResponse, process_handler};
