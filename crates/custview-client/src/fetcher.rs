//! The fetch seam between the page controller and the customer API.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use custview_common::error::{CustviewError, Result};
use custview_common::types::{CustomerId, CustomerRecord};

/// Retrieves one customer record by identifier.
///
/// The identifier is passed through untouched; whatever the backend does
/// with a malformed one decides the outcome.
pub trait CustomerFetcher: Send + Sync {
    /// Fetches the record for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be retrieved or decoded.
    fn fetch_customer(&self, id: &CustomerId) -> impl Future<Output = Result<CustomerRecord>> + Send;
}

/// In-memory fetcher serving records from a fixed table.
///
/// Every call is recorded, which lets callers assert how many fetches a
/// page issued and with which identifiers.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    records: HashMap<CustomerId, CustomerRecord>,
    failures: HashMap<CustomerId, String>,
    calls: Mutex<Vec<CustomerId>>,
}

impl StaticFetcher {
    /// Creates a fetcher with no records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record served for `id`.
    #[must_use]
    pub fn with_record(mut self, id: impl Into<String>, record: CustomerRecord) -> Self {
        let _ = self.records.insert(CustomerId::new(id), record);
        self
    }

    /// Makes fetches for `id` fail with an HTTP-style error.
    #[must_use]
    pub fn with_failure(mut self, id: impl Into<String>, message: impl Into<String>) -> Self {
        let _ = self.failures.insert(CustomerId::new(id), message.into());
        self
    }

    /// Returns the identifiers fetched so far, in call order.
    pub fn calls(&self) -> Vec<CustomerId> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn lookup(&self, id: &CustomerId) -> Result<CustomerRecord> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(id.clone());

        if let Some(message) = self.failures.get(id) {
            return Err(CustviewError::Http {
                url: format!("static://customers/{id}"),
                status: None,
                message: message.clone(),
            });
        }
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| CustviewError::NotFound {
                kind: "customer",
                id: id.to_string(),
            })
    }
}

impl CustomerFetcher for StaticFetcher {
    async fn fetch_customer(&self, id: &CustomerId) -> Result<CustomerRecord> {
        self.lookup(id)
    }
}
