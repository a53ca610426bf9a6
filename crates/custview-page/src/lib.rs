//! # custview-page
//!
//! The customer read page and everything it composes.
//!
//! Handles:
//! - **Routing**: `/customers/read/{id}` to [`RouteParams`](route::RouteParams).
//! - **Controller**: the [`ReadPage`](controller::ReadPage) state machine
//!   (`Empty`, `Populated`, `Failed`) with generation-guarded fetch results.
//! - **Runtime**: [`PageRuntime`](runtime::PageRuntime) runs fetches as tokio
//!   tasks and feeds their outcomes back to the controller.
//! - **Rendering**: dioxus components rendered with `dioxus-ssr` in a
//!   server or client pass; the customer card is client-only and appears
//!   as a placeholder in the server pass.
//! - **History**: back navigation over previously visited routes.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod controller;
pub mod history;
pub mod render;
pub mod route;
pub mod runtime;
pub mod state;
