use super::*;

// =============================================================
// ApiConfig::parse
// =============================================================

#[test]
fn parse_strips_whitespace_and_trailing_slashes() {
    let config = ApiConfig::parse("  https://api.example.com//  ").unwrap();
    assert_eq!(config.base_url(), "https://api.example.com");
}

#[test]
fn parse_rejects_empty_value() {
    assert_eq!(ApiConfig::parse("   "), Err(ConfigError::EmptyApiUrl));
    assert_eq!(ApiConfig::parse("/"), Err(ConfigError::EmptyApiUrl));
}

#[test]
fn parse_rejects_non_http_scheme() {
    assert_eq!(
        ApiConfig::parse("ftp://files.example.com"),
        Err(ConfigError::UnsupportedScheme("ftp://files.example.com".to_owned()))
    );
}

#[test]
fn url_joins_base_and_path() {
    let config = ApiConfig::parse("http://localhost:8000/").unwrap();
    assert_eq!(config.url("/auth/login"), "http://localhost:8000/auth/login");
}

#[test]
fn from_raw_falls_back_to_default() {
    assert_eq!(ApiConfig::from_raw(None).base_url(), DEFAULT_API_URL);
    assert_eq!(ApiConfig::from_raw(Some("not a url")).base_url(), DEFAULT_API_URL);
    assert_eq!(ApiConfig::from_raw(Some("https://os.example.com")).base_url(), "https://os.example.com");
}

// =============================================================
// parse_port
// =============================================================

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some(" ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_valid_port() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("eighty")), Err(ConfigError::InvalidPort("eighty".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}
