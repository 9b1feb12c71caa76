mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{ExecutorSettings, LoggingSettings, ServerSettings, Settings};
