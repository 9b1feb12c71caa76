use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::observability::DEFAULT_FILTER;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub executor: ExecutorSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExecutorSettings {
    pub base_url: String,
    pub endpoint_path: String,
    pub timeout_secs: u64,
}

impl ExecutorSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers, lowest precedence first: built-in defaults, `appsettings.<env>.toml`,
    /// `APP__SECTION__KEY` variables, then `PORT` and `LOG_FORMAT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_with(environment, |key| std::env::var(key).ok())
    }

    /// Same as [`Settings::load`], with `PORT` and `LOG_FORMAT` read through `lookup`.
    pub fn load_with(
        environment: Environment,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file_name = format!("appsettings.{}", environment.as_str().to_lowercase());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("executor.base_url", "http://whisper_service:8000")?
            .set_default("executor.endpoint_path", "/transcribe")?
            .set_default("executor.timeout_secs", 30)?
            .set_default("logging.level", DEFAULT_FILTER)?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", lookup("PORT"))?
            .set_override_option(
                "logging.enable_json",
                lookup("LOG_FORMAT").map(|format| format.eq_ignore_ascii_case("json")),
            )?
            .build()?
            .try_deserialize()
    }
}
