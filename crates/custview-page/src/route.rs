//! Route table and path matching.

use std::fmt;

use custview_common::constants::{LIST_ROUTE, READ_ROUTE_PATTERN, READ_ROUTE_PREFIX};
use custview_common::error::{CustviewError, Result};
use custview_common::types::CustomerId;
use serde::{Deserialize, Serialize};

/// Parameters extracted from a matched read-page path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    /// Value of the `{id}` segment.
    pub id: CustomerId,
}

impl RouteParams {
    /// Creates parameters for the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(id),
        }
    }
}

/// A location the viewer can display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Application root.
    Home,
    /// The customer list.
    CustomerList,
    /// The read page for one customer.
    CustomerRead(RouteParams),
}

impl Route {
    /// Matches a URL path against the route table.
    ///
    /// Query strings and fragments are ignored. The `{id}` segment is taken
    /// verbatim; any non-empty segment without a `/` matches.
    ///
    /// # Errors
    ///
    /// Returns `CustviewError::NotFound` when no route matches.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        if trimmed.is_empty() || trimmed == "/" {
            return Ok(Self::Home);
        }
        if trimmed == LIST_ROUTE {
            return Ok(Self::CustomerList);
        }
        if let Some(id) = trimmed.strip_prefix(READ_ROUTE_PREFIX) {
            if !id.is_empty() && !id.contains('/') {
                return Ok(Self::CustomerRead(RouteParams::new(id)));
            }
        }
        Err(CustviewError::NotFound {
            kind: "route",
            id: path.to_string(),
        })
    }

    /// Interprets a command-line argument as either a path or a bare identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the argument looks like a path that matches no route.
    pub fn from_arg(arg: &str) -> Result<Self> {
        if arg.starts_with('/') {
            Self::parse(arg)
        } else {
            Ok(Self::CustomerRead(RouteParams::new(arg)))
        }
    }

    /// Returns the read-page route for `id`.
    #[must_use]
    pub fn read(id: impl Into<String>) -> Self {
        Self::CustomerRead(RouteParams::new(id))
    }

    /// Canonical path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::CustomerList => LIST_ROUTE.to_string(),
            Self::CustomerRead(params) => format!("{READ_ROUTE_PREFIX}{}", params.id),
        }
    }

    /// Read-page parameters, if this is a read route.
    #[must_use]
    pub const fn params(&self) -> Option<&RouteParams> {
        match self {
            Self::CustomerRead(params) => Some(params),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern.
    pub pattern: &'static str,
    /// What the route shows.
    pub description: &'static str,
}

/// Returns the routes the viewer understands.
#[must_use]
pub const fn route_table() -> [RouteEntry; 3] {
    [
        RouteEntry {
            pattern: "/",
            description: "application root",
        },
        RouteEntry {
            pattern: LIST_ROUTE,
            description: "customer list",
        },
        RouteEntry {
            pattern: READ_ROUTE_PATTERN,
            description: "customer read page",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_read_path_extracts_id() {
        let route = Route::parse("/customers/read/C110").expect("parse failed");
        assert_eq!(route, Route::read("C110"));
        assert_eq!(route.params().map(|p| p.id.as_str()), Some("C110"));
    }

    #[test]
    fn parse_ignores_query_and_trailing_slash() {
        assert_eq!(
            Route::parse("/customers/read/C110/?tab=info").expect("parse failed"),
            Route::read("C110")
        );
    }

    #[test]
    fn parse_keeps_identifier_verbatim() {
        let route = Route::parse("/customers/read/%20x").expect("parse failed");
        assert_eq!(route, Route::read("%20x"));
    }

    #[test]
    fn parse_empty_id_does_not_match() {
        assert!(Route::parse("/customers/read/").is_err());
    }

    #[test]
    fn parse_nested_segment_does_not_match() {
        assert!(Route::parse("/customers/read/C110/edit").is_err());
    }

    #[test]
    fn parse_root_and_list() {
        assert_eq!(Route::parse("/").expect("parse failed"), Route::Home);
        assert_eq!(
            Route::parse("/customers").expect("parse failed"),
            Route::CustomerList
        );
    }

    #[test]
    fn from_arg_treats_bare_value_as_id() {
        assert_eq!(Route::from_arg("C1111").expect("parse failed"), Route::read("C1111"));
    }

    #[test]
    fn path_round_trips_through_parse() {
        let route = Route::read("C110");
        assert_eq!(Route::parse(&route.path()).expect("parse failed"), route);
    }

    #[test]
    fn route_table_lists_read_pattern() {
        assert!(route_table().iter().any(|r| r.pattern == "/customers/read/{id}"));
    }
}
