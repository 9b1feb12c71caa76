mod http_work_executor;

pub use http_work_executor::{DEFAULT_TIMEOUT, HttpWorkExecutor};
