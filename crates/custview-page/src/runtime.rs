//! Async driver for the read page.
//!
//! Fetches run as tokio tasks so issuing one never blocks rendering. Each
//! task sends its outcome over a channel; the owner of the runtime applies
//! outcomes to the controller, which stays the only writer of page state.

use std::future::IntoFuture;
use std::sync::Arc;

use custview_client::CustomerFetcher;
use custview_common::error::Result;
use custview_common::types::CustomerRecord;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::controller::{FetchTicket, ReadPage, Resolution};
use crate::route::RouteParams;

/// A finished fetch, waiting to be applied.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Ticket the fetch ran under.
    pub ticket: FetchTicket,
    /// Fetch result.
    pub result: Result<CustomerRecord>,
}

/// Runs the read page against a fetcher.
pub struct PageRuntime<F> {
    fetcher: Arc<F>,
    page: ReadPage,
    tx: mpsc::UnboundedSender<FetchOutcome>,
    rx: mpsc::UnboundedReceiver<FetchOutcome>,
    in_flight: Vec<JoinHandle<()>>,
}

impl<F> PageRuntime<F>
where
    F: CustomerFetcher + 'static,
{
    /// Creates a runtime around an unmounted page.
    pub fn new(fetcher: Arc<F>, page: ReadPage) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            fetcher,
            page,
            tx,
            rx,
            in_flight: Vec::new(),
        }
    }

    /// The page being driven.
    pub const fn page(&self) -> &ReadPage {
        &self.page
    }

    /// Awaits the route parameters, mounts the page, and starts its fetch.
    ///
    /// Returns `false` if the page was already mounted.
    pub async fn mount<P>(&mut self, params: P) -> bool
    where
        P: IntoFuture<Output = RouteParams>,
    {
        let params = params.await;
        self.page.mount(params).map(|t| self.spawn(t)).is_some()
    }

    /// Points the mounted page at new route parameters.
    ///
    /// Returns `true` when a new fetch was started.
    pub fn navigate(&mut self, params: RouteParams) -> bool {
        self.page.set_identifier(params).map(|t| self.spawn(t)).is_some()
    }

    /// Retries after a failed fetch. Returns `true` when a fetch was started.
    pub fn retry(&mut self) -> bool {
        self.page.retry().map(|t| self.spawn(t)).is_some()
    }

    /// Unmounts the page and aborts fetches still in flight.
    pub fn unmount(&mut self) {
        self.page.unmount();
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
    }

    /// Applies every outcome that has already arrived, without waiting.
    ///
    /// Returns the number of outcomes that changed page state.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.rx.try_recv() {
            if self.apply(outcome) == Resolution::Applied {
                applied += 1;
            }
        }
        applied
    }

    /// Waits until the latest fetch has been applied.
    ///
    /// Returns immediately when nothing is pending.
    pub async fn settle(&mut self) {
        while self.page.is_pending() {
            match self.rx.recv().await {
                Some(outcome) => {
                    let _ = self.apply(outcome);
                }
                None => break,
            }
        }
    }

    /// Waits for the next outcome of any generation and applies it.
    pub async fn next_outcome(&mut self) -> Option<Resolution> {
        let outcome = self.rx.recv().await?;
        Some(self.apply(outcome))
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Resolution {
        self.page.resolve(outcome.ticket, outcome.result)
    }

    fn spawn(&mut self, ticket: FetchTicket) {
        self.in_flight.retain(|h| !h.is_finished());

        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let result = fetcher.fetch_customer(ticket.id()).await;
            let _ = tx.send(FetchOutcome { ticket, result });
        });
        self.in_flight.push(handle);
    }
}
