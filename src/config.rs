//! Deployment-time configuration.
//!
//! The backend base URL is baked into the WASM bundle from the `API_URL`
//! environment variable at build time. The SSR host additionally reads its
//! listen port from `PORT` at start-up.

use leptos::logging::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API_URL is empty")]
    EmptyApiUrl,
    #[error("API_URL must start with http:// or https://, got `{0}`")]
    UnsupportedScheme(String),
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
}

/// Backend location used to build every request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Parse and normalize a base URL: surrounding whitespace and trailing
    /// slashes are dropped, and the scheme must be `http` or `https`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty value or an unsupported scheme.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_owned()));
        }
        Ok(Self { base_url: trimmed.to_owned() })
    }

    /// Configuration captured from `API_URL` when the crate was compiled.
    ///
    /// Falls back to [`DEFAULT_API_URL`] when unset or invalid.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("API_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(Self::parse) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                warn!("ignoring API_URL: {e}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/auth/login`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Parse the SSR host's `PORT` value, defaulting to [`DEFAULT_PORT`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] when the value is not a valid port.
pub fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
