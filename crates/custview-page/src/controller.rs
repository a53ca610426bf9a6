//! Read page controller.
//!
//! Owns the route identifier and the page-local [`PageState`]. The
//! controller never performs I/O itself: operations that need a fetch
//! hand back a [`FetchTicket`], and the caller reports the outcome
//! through [`ReadPage::resolve`]. Each ticket carries the generation it
//! was issued under; outcomes for an older generation, or arriving after
//! unmount, are dropped.

use custview_common::constants::{APP_NAME, BACK_LABEL};
use custview_common::error::Result;
use custview_common::types::{CustomerId, CustomerRecord};

use crate::render::document::render_document;
use crate::render::page::{ReadPageProps, ReadPageView};
use crate::render::{RenderPass, render_to_string};
use crate::route::RouteParams;
use crate::state::{FetchFailure, PageState};

/// Permission to run one fetch on behalf of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    id: CustomerId,
}

impl FetchTicket {
    /// Identifier to fetch.
    #[must_use]
    pub const fn id(&self) -> &CustomerId {
        &self.id
    }
}

/// What happened to a reported fetch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome replaced the page state.
    Applied,
    /// The outcome belonged to an earlier identifier and was dropped.
    Stale,
    /// The page was no longer mounted; the outcome was dropped.
    Unmounted,
}

/// Controller of the customer read page.
#[derive(Debug, Clone)]
pub struct ReadPage {
    id: Option<CustomerId>,
    state: PageState,
    generation: u64,
    pending: bool,
    mounted: bool,
    back_label: String,
}

impl ReadPage {
    /// Creates an unmounted page whose back control shows `back_label`.
    #[must_use]
    pub fn new(back_label: impl Into<String>) -> Self {
        Self {
            id: None,
            state: PageState::Empty,
            generation: 0,
            pending: false,
            mounted: false,
            back_label: back_label.into(),
        }
    }

    /// Mounts the page for the given route parameters.
    ///
    /// Returns the ticket for the page's single initial fetch. Mounting an
    /// already-mounted page does nothing and returns `None`.
    pub fn mount(&mut self, params: RouteParams) -> Option<FetchTicket> {
        if self.mounted {
            tracing::debug!(id = ?self.id, "page already mounted");
            return None;
        }
        self.mounted = true;
        self.id = Some(params.id.clone());
        self.state = PageState::Empty;
        Some(self.issue(params.id))
    }

    /// Points a mounted page at a new identifier.
    ///
    /// A different identifier resets the page to `Empty` and issues a new
    /// fetch; results still in flight for the old identifier become stale.
    /// The same identifier, or an unmounted page, yields `None`.
    pub fn set_identifier(&mut self, params: RouteParams) -> Option<FetchTicket> {
        if !self.mounted || self.id.as_ref() == Some(&params.id) {
            return None;
        }
        tracing::debug!(from = ?self.id, to = %params.id, "identifier changed");
        self.id = Some(params.id.clone());
        self.state = PageState::Empty;
        Some(self.issue(params.id))
    }

    /// Re-issues the fetch after a failure. Only valid in the `Failed` state.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if !self.mounted || !matches!(self.state, PageState::Failed(_)) {
            return None;
        }
        let id = self.id.clone()?;
        self.state = PageState::Empty;
        Some(self.issue(id))
    }

    /// Reports the outcome of a fetch issued under `ticket`.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<CustomerRecord>) -> Resolution {
        if !self.mounted {
            tracing::debug!(id = %ticket.id, "dropping fetch result after unmount");
            return Resolution::Unmounted;
        }
        if ticket.generation != self.generation {
            tracing::debug!(
                id = %ticket.id,
                ticket = ticket.generation,
                current = self.generation,
                "dropping stale fetch result"
            );
            return Resolution::Stale;
        }

        self.pending = false;
        self.state = match result {
            Ok(record) => PageState::Populated(record),
            Err(e) => {
                tracing::warn!(id = %ticket.id, error = %e, "customer fetch failed");
                PageState::Failed(FetchFailure::from_error(ticket.id, &e))
            }
        };
        Resolution::Applied
    }

    /// Unmounts the page, discarding its state.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.pending = false;
        self.id = None;
        self.state = PageState::Empty;
        self.generation += 1;
    }

    /// Current page state.
    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    /// Identifier of the mounted page.
    #[must_use]
    pub const fn identifier(&self) -> Option<&CustomerId> {
        self.id.as_ref()
    }

    /// Returns `true` between mount and unmount.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns `true` while the latest issued fetch has not resolved.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Label of the back control.
    #[must_use]
    pub fn back_label(&self) -> &str {
        &self.back_label
    }

    /// Inputs of the page view for `pass`.
    #[must_use]
    pub fn props(&self, pass: RenderPass) -> ReadPageProps {
        ReadPageProps {
            state: self.state.clone(),
            back_label: self.back_label.clone(),
            pass,
        }
    }

    /// Renders the page fragment.
    #[must_use]
    pub fn render(&self, pass: RenderPass) -> String {
        render_to_string(ReadPageView, self.props(pass))
    }

    /// Renders the page as a complete HTML document.
    #[must_use]
    pub fn render_document(&self, pass: RenderPass) -> String {
        render_document(APP_NAME, self.props(pass))
    }

    fn issue(&mut self, id: CustomerId) -> FetchTicket {
        self.generation += 1;
        self.pending = true;
        tracing::debug!(%id, generation = self.generation, "issuing customer fetch");
        FetchTicket {
            generation: self.generation,
            id,
        }
    }
}

impl Default for ReadPage {
    fn default() -> Self {
        Self::new(BACK_LABEL)
    }
}
