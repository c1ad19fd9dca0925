use rstest::rstest;
use clinic_api::config::{parse_log_level, ApiConfig};
use tracing::Level;

#[test]
fn test_server_addr() {
    let config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        database_url: "postgres://localhost/clinic".to_string(),
        log_level: Level::INFO,
        cors_origins: None,
        request_timeout: 30,
        generation_horizon_days: 30,
    };

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case("warn", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}
