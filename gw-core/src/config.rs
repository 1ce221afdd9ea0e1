//! Backend location, resolved once at startup.

/// Environment variable holding the stats backend base URL.
pub const API_URL_ENV: &str = "GAMERWRAPPED_API_URL";

/// Local development backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_url: String,
}

impl Config {
    /// Read `GAMERWRAPPED_API_URL` from the process environment.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_ENV).ok())
    }

    /// Use the value `GAMERWRAPPED_API_URL` had at compile time.
    ///
    /// Browser builds have no process environment, so the URL is baked in.
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("GAMERWRAPPED_API_URL").map(str::to_string))
    }

    /// Resolve an optional setting, falling back to [`DEFAULT_API_URL`] when
    /// it is absent or blank.
    pub fn from_value(value: Option<String>) -> Self {
        let api_url = value
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }

    /// Override the base URL (e.g. from a `--api-url` flag).
    pub fn with_api_url(self, api_url: Option<String>) -> Self {
        match api_url {
            Some(url) => Self::from_value(Some(url)),
            None => self,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_value(None)
    }
}
