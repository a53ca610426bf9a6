//! # custview-client
//!
//! Fetch collaborator for the customer read page.
//!
//! Provides:
//! - [`CustomerFetcher`](fetcher::CustomerFetcher): the async seam the page
//!   controller depends on.
//! - [`HttpCustomerFetcher`](http::HttpCustomerFetcher): the implementation
//!   backed by the customer API at `API_ENDPOINT`.
//! - [`StaticFetcher`](fetcher::StaticFetcher): an in-memory fetcher for
//!   offline rendering and tests.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod decode;
pub mod fetcher;
pub mod http;

pub use fetcher::{CustomerFetcher, StaticFetcher};
pub use http::HttpCustomerFetcher;
