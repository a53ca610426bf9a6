//! Page-local view state.

use std::fmt;

use custview_common::error::CustviewError;
use custview_common::types::{CustomerId, CustomerRecord};
use serde::{Deserialize, Serialize};

/// Why the last fetch did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    /// Identifier the failed fetch was issued for.
    pub id: CustomerId,
    /// Human-readable cause.
    pub message: String,
}

impl FetchFailure {
    /// Captures a fetch error for display.
    #[must_use]
    pub fn from_error(id: CustomerId, error: &CustviewError) -> Self {
        Self {
            id,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// State of the read page.
///
/// `Empty` until a fetch resolves; then `Populated` or `Failed`. A record
/// is replaced wholesale, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum PageState {
    /// No record yet.
    #[default]
    Empty,
    /// The fetch resolved with a record.
    Populated(CustomerRecord),
    /// The fetch failed.
    Failed(FetchFailure),
}

impl PageState {
    /// The record to show, if any.
    #[must_use]
    pub const fn record(&self) -> Option<&CustomerRecord> {
        match self {
            Self::Populated(record) => Some(record),
            _ => None,
        }
    }

    /// The failure to show, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Short state name for logs and status lines.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Populated(_) => "populated",
            Self::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty() {
        let state = PageState::default();
        assert_eq!(state, PageState::Empty);
        assert!(state.record().is_none());
        assert!(state.failure().is_none());
    }

    #[test]
    fn failure_keeps_error_message() {
        let error = CustviewError::NotFound {
            kind: "customer",
            id: "C9".into(),
        };
        let failure = FetchFailure::from_error(CustomerId::new("C9"), &error);
        assert_eq!(failure.to_string(), "customer not found: C9");
        assert_eq!(PageState::Failed(failure).label(), "failed");
    }
}
