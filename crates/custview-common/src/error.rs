//! Unified error types for the custview workspace.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CustviewError {
    /// A configuration value is missing or invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// The customer API could not be reached or answered with a failure status.
    #[error("request to {url} failed: {message}")]
    Http {
        /// URL of the failed request.
        url: String,
        /// HTTP status, when the server answered.
        status: Option<u16>,
        /// Description of the failure.
        message: String,
    },

    /// The customer API answered with a body that is not a customer record.
    #[error("unexpected response from {url}: {message}")]
    Decode {
        /// URL whose response failed to decode.
        url: String,
        /// Description of the decode failure.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CustviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_kind_and_id() {
        let err = CustviewError::NotFound {
            kind: "customer",
            id: "C110".into(),
        };
        assert_eq!(err.to_string(), "customer not found: C110");
    }

    #[test]
    fn http_display_includes_url() {
        let err = CustviewError::Http {
            url: "http://localhost:8000/customers".into(),
            status: Some(500),
            message: "HTTP 500".into(),
        };
        assert!(err.to_string().contains("http://localhost:8000/customers"));
    }
}
