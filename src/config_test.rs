use super::*;

#[test]
fn defaults_apply_when_values_missing() {
    let config = ClientConfig::from_values(None, None, None);
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ClientConfig::from_values(Some("   "), Some(""), Some(" "));
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.profile_id, DEFAULT_PROFILE_ID);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn api_url_trailing_slashes_are_trimmed() {
    let config = ClientConfig::from_values(Some("http://localhost:3000//"), None, None);
    assert_eq!(config.api_url, "http://localhost:3000");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ClientConfig::from_values(Some("http://localhost:3000/"), None, None);
    assert_eq!(config.endpoint("/check-auth"), "http://localhost:3000/check-auth");
    assert_eq!(config.endpoint("get-patients"), "http://localhost:3000/get-patients");
}

#[test]
fn log_level_parses_case_insensitively() {
    assert_eq!(ClientConfig::from_values(None, None, Some("DEBUG")).log_level, LogLevel::Debug);
    assert_eq!(ClientConfig::from_values(None, None, Some("warning")).log_level, LogLevel::Warn);
    assert_eq!(ClientConfig::from_values(None, None, Some("error")).log_level, LogLevel::Error);
    assert_eq!(ClientConfig::from_values(None, None, Some("loud")).log_level, LogLevel::Info);
}

#[test]
fn profile_id_is_trimmed() {
    let config = ClientConfig::from_values(None, Some("  abc123 "), None);
    assert_eq!(config.profile_id, "abc123");
}

#[test]
fn log_level_maps_onto_log_facade() {
    assert_eq!(LogLevel::Error.as_log_level(), log::Level::Error);
    assert_eq!(LogLevel::default().as_log_level(), log::Level::Info);
    assert_eq!(LogLevel::Debug.as_log_level(), log::Level::Debug);
}
