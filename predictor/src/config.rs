use std::{env, fmt};

use reqwest::Url;

use crate::error::PredictError;

/// Environment variable holding the prediction service base URL.
pub const API_URL_VAR: &str = "CHURN_API_URL";
/// Base URL used when [`API_URL_VAR`] is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

const PREDICT_PATH: &str = "/predict";

/// Settings for a [`PredictionClient`](crate::PredictionClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads the base URL from `CHURN_API_URL`, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        let base_url = env::var(API_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { base_url }
    }

    /// Resolves the `/predict` endpoint under the base URL.
    ///
    /// # Errors
    /// Returns `PredictError::InvalidConfig` if the base URL cannot be used.
    pub fn predict_endpoint(&self) -> Result<Endpoint, PredictError> {
        Endpoint::parse(&self.base_url, PREDICT_PATH)
    }
}

/// A resolved `http(s)://host[:port]/prefix/path` target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    /// Parses `base_url` and appends `path` to whatever prefix it carries.
    ///
    /// # Arguments
    /// * `base_url` - An `http://` or `https://` URL, optionally with port and path prefix.
    /// * `path` - The route to append, starting with `/`.
    ///
    /// # Errors
    /// Returns `PredictError::InvalidConfig` for other schemes, a missing host,
    /// credentials, or query/fragment parts in the base URL.
    pub fn parse(base_url: &str, path: &str) -> Result<Self, PredictError> {
        let invalid = |msg: &str| PredictError::InvalidConfig(format!("{msg}: '{base_url}'"));

        let mut url = Url::parse(base_url.trim()).map_err(|e| invalid(&e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("base URL must start with http:// or https://"));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("base URL has no host"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("base URL must not carry a query or fragment"));
        }
        if !url.username().is_empty() || url.password().is_some() {
            return Err(invalid("base URL must not carry credentials"));
        }

        let full = format!("{}{path}", url.path().trim_end_matches('/'));
        url.set_path(&full);

        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
