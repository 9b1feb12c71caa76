use std::time::Duration;

use media_transcriber::presentation::{Environment, Settings};

#[test]
fn given_known_names_when_parsing_environment_then_maps_case_insensitively() {
    assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_no_settings_file_when_loading_then_built_in_defaults_apply() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.executor.base_url, "http://whisper_service:8000");
    assert_eq!(settings.executor.endpoint_path, "/transcribe");
    assert_eq!(settings.executor.timeout(), Duration::from_secs(30));
}

#[test]
fn given_log_format_json_when_loading_then_json_logging_is_enabled() {
    let settings = Settings::load_with(Environment::Test, |key| {
        (key == "LOG_FORMAT").then(|| "json".to_string())
    })
    .unwrap();

    assert!(settings.logging.enable_json);
}

#[test]
fn given_log_format_text_when_loading_then_json_logging_stays_off() {
    let settings = Settings::load_with(Environment::Test, |key| {
        (key == "LOG_FORMAT").then(|| "text".to_string())
    })
    .unwrap();

    assert!(!settings.logging.enable_json);
}

#[test]
fn given_port_variable_when_loading_then_it_overrides_the_default_port() {
    let settings = Settings::load_with(Environment::Test, |key| {
        (key == "PORT").then(|| "9000".to_string())
    })
    .unwrap();

    assert_eq!(settings.server.port, 9000);
}
