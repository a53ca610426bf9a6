//! HTTP fetcher backed by the customer API.
//!
//! Issues `GET {API_ENDPOINT}/customers?customer_id={id}`, parses the JSON
//! body, and reduces it with [`decode_customer`](crate::decode::decode_customer). One
//! request per call; no retries.

use std::time::Duration;

use custview_common::config::ViewerConfig;
use custview_common::constants::{CUSTOMERS_RESOURCE, CUSTOMER_ID_PARAM};
use custview_common::error::{CustviewError, Result};
use custview_common::types::{CustomerId, CustomerRecord};
use reqwest::StatusCode;
use serde_json::Value;

use crate::decode::decode_customer;
use crate::fetcher::CustomerFetcher;

/// Fetcher that talks to the customer API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCustomerFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCustomerFetcher {
    /// Builds a fetcher from the resolved viewer configuration.
    ///
    /// # Errors
    ///
    /// Returns `CustviewError::Config` if no endpoint is configured or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        let endpoint = config.endpoint()?.to_string();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CustviewError::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client, endpoint })
    }

    /// URL of the customer collection on the configured API.
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("{}/{CUSTOMERS_RESOURCE}", self.endpoint)
    }
}

impl CustomerFetcher for HttpCustomerFetcher {
    async fn fetch_customer(&self, id: &CustomerId) -> Result<CustomerRecord> {
        let url = self.collection_url();
        tracing::debug!(%id, url = %url, "fetching customer");

        let response = self
            .client
            .get(&url)
            .query(&[(CUSTOMER_ID_PARAM, id.as_str())])
            .send()
            .await
            .map_err(|e| CustviewError::Http {
                url: url.clone(),
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CustviewError::NotFound {
                kind: "customer",
                id: id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(CustviewError::Http {
                url,
                status: Some(status.as_u16()),
                message: format!("HTTP {status}"),
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| CustviewError::Decode {
                url: url.clone(),
                message: format!("invalid JSON: {e}"),
            })?;

        let record = decode_customer(&url, id, body)?;
        tracing::debug!(%id, fields = record.len(), "customer fetched");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_without_endpoint_is_config_error() {
        let result = HttpCustomerFetcher::new(&ViewerConfig::default());
        assert!(matches!(result, Err(CustviewError::Config { .. })));
    }

    #[test]
    fn collection_url_joins_resource() {
        let config = ViewerConfig {
            api_endpoint: Some("http://127.0.0.1:8000".into()),
            ..ViewerConfig::default()
        };
        let fetcher = HttpCustomerFetcher::new(&config).expect("build failed");
        assert_eq!(fetcher.collection_url(), "http://127.0.0.1:8000/customers");
    }
}
