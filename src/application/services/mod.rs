mod job_dispatcher;
mod job_query_service;

pub use job_dispatcher::{DispatchError, JobDispatcher, SubmittedJob};
pub use job_query_service::{JobQueryError, JobQueryService};
