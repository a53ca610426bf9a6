//! Viewer configuration.
//!
//! The customer API base URL is resolved once at startup from, in order:
//! an explicit override (CLI flag), the `API_ENDPOINT` process variable,
//! and finally a `.env` file. The resolved value is then passed down
//! explicitly; nothing reads the environment after startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{API_ENDPOINT_VAR, BACK_LABEL, DEFAULT_REQUEST_TIMEOUT_SECS, ENV_FILE};
use crate::error::{CustviewError, Result};

/// Root configuration for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Base URL of the customer API, without a trailing slash.
    pub api_endpoint: Option<String>,
    /// Timeout applied to each fetch, in seconds.
    pub request_timeout_secs: u64,
    /// Label of the back navigation control.
    pub back_label: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_endpoint: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            back_label: BACK_LABEL.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Resolves the configuration from the process environment and the
    /// `.env` file in the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but cannot be parsed, or
    /// if the resolved endpoint is not an HTTP(S) URL.
    pub fn resolve(endpoint_override: Option<&str>) -> Result<Self> {
        let from_env = std::env::var(API_ENDPOINT_VAR).ok();
        Self::resolve_with(endpoint_override, from_env.as_deref(), Path::new(ENV_FILE))
    }

    /// Resolves the configuration from explicit sources.
    ///
    /// `env_value` stands in for the process variable; `env_file` is only
    /// read when neither the override nor the variable holds a value. A
    /// blank value counts as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the env file is malformed or the endpoint is invalid.
    pub fn resolve_with(
        endpoint_override: Option<&str>,
        env_value: Option<&str>,
        env_file: &Path,
    ) -> Result<Self> {
        let mut endpoint = endpoint_override
            .and_then(normalize)
            .or_else(|| env_value.and_then(normalize));
        if endpoint.is_none() {
            endpoint = read_env_file(env_file, API_ENDPOINT_VAR)?
                .as_deref()
                .and_then(normalize);
        }

        let config = Self {
            api_endpoint: endpoint,
            ..Self::default()
        };
        config.validate()?;
        tracing::debug!(endpoint = ?config.api_endpoint, "resolved viewer configuration");
        Ok(config)
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Returns the API endpoint, failing if none was configured.
    ///
    /// # Errors
    ///
    /// Returns `CustviewError::Config` when `API_ENDPOINT` was never set.
    pub fn endpoint(&self) -> Result<&str> {
        self.api_endpoint
            .as_deref()
            .ok_or_else(|| CustviewError::Config {
                message: format!("{API_ENDPOINT_VAR} is not set (use the environment or {ENV_FILE})"),
            })
    }

    /// Checks that the configured values are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an `http://` or `https://`
    /// URL, or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.api_endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(CustviewError::Config {
                    message: format!("{API_ENDPOINT_VAR} must be an http(s) URL, got {endpoint}"),
                });
            }
        }
        if self.request_timeout_secs == 0 {
            return Err(CustviewError::Config {
                message: "request timeout must be at least one second".into(),
            });
        }
        Ok(())
    }
}

/// Trims an endpoint and drops its trailing slashes; blank means unset.
fn normalize(endpoint: &str) -> Option<String> {
    let endpoint = endpoint.trim().trim_end_matches('/');
    (!endpoint.is_empty()).then(|| endpoint.to_string())
}

/// Looks up a single key in an env file without touching the process env.
fn read_env_file(path: &Path, key: &str) -> Result<Option<String>> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(None),
        Err(e) => {
            return Err(CustviewError::Config {
                message: format!("cannot read {}: {e}", path.display()),
            });
        }
    };

    for item in iter {
        let (name, value) = item.map_err(|e| CustviewError::Config {
            message: format!("malformed {}: {e}", path.display()),
        })?;
        if name == key {
            return Ok(Some(value));
        }
    }
    Ok(None)
}
