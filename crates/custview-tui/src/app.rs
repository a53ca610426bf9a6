//! TUI application state machine.
//!
//! Holds the navigation history and the read page runtime, and turns
//! actions into route changes. The read page stays mounted while the user
//! moves between customers, so switching customers goes through the
//! identifier-change path rather than a remount.

use std::sync::Arc;

use custview_client::CustomerFetcher;
use custview_page::controller::ReadPage;
use custview_page::history::History;
use custview_page::route::{Route, RouteParams};
use custview_page::runtime::PageRuntime;

use crate::event::Action;

/// Which view the TUI is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Prompt asking for a customer ID.
    Prompt,
    /// The customer read page.
    Customer,
}

/// Root application state for the TUI.
pub struct App<F> {
    /// Whether the app should continue running.
    pub running: bool,
    history: History,
    runtime: PageRuntime<F>,
    input: String,
}

impl<F> App<F>
where
    F: CustomerFetcher + 'static,
{
    /// Creates the app positioned at `initial`.
    ///
    /// A read route opened directly still gets the customer list as its
    /// prior view, so back always has somewhere to go.
    pub fn new(fetcher: Arc<F>, page: ReadPage, initial: Route) -> Self {
        let mut history = History::new(Route::CustomerList);
        if matches!(initial, Route::CustomerRead(_)) {
            history.push(initial);
        }
        Self {
            running: true,
            history,
            runtime: PageRuntime::new(fetcher, page),
            input: String::new(),
        }
    }

    /// Shows the initial route.
    pub async fn start(&mut self) {
        let route = self.history.current().clone();
        self.show(route).await;
    }

    /// Current view.
    pub fn view(&self) -> View {
        match self.history.current() {
            Route::CustomerRead(_) => View::Customer,
            Route::Home | Route::CustomerList => View::Prompt,
        }
    }

    /// The read page.
    pub const fn page(&self) -> &ReadPage {
        self.runtime.page()
    }

    /// Navigation history.
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Text typed into the ID prompt.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns `true` while the ID prompt has focus.
    pub fn editing(&self) -> bool {
        self.view() == View::Prompt
    }

    /// Applies fetch results that have arrived since the last tick.
    pub fn tick(&mut self) -> usize {
        self.runtime.poll()
    }

    /// Performs an action.
    pub async fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::Back => self.back().await,
            Action::Retry => {
                let _ = self.runtime.retry();
            }
            Action::Submit => {
                let id = self.input.trim().to_string();
                if !id.is_empty() {
                    self.input.clear();
                    self.open(Route::read(id)).await;
                }
            }
            Action::Input(c) => self.input.push(c),
            Action::DeleteChar => {
                let _ = self.input.pop();
            }
            Action::None => {}
        }
    }

    /// Navigates to `route`, recording it in history.
    pub async fn open(&mut self, route: Route) {
        self.history.push(route.clone());
        self.show(route).await;
    }

    /// Returns to the immediately prior view, if any.
    pub async fn back(&mut self) {
        if let Some(route) = self.history.back().cloned() {
            self.show(route).await;
        }
    }

    /// Signals the app to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Waits for the in-flight fetch, if any, to be applied.
    pub async fn settle(&mut self) {
        self.runtime.settle().await;
    }

    async fn show(&mut self, route: Route) {
        tracing::debug!(route = %route, "showing route");
        match route {
            Route::CustomerRead(params) => self.show_customer(params).await,
            Route::Home | Route::CustomerList => self.runtime.unmount(),
        }
    }

    async fn show_customer(&mut self, params: RouteParams) {
        if self.runtime.page().is_mounted() {
            let _ = self.runtime.navigate(params);
        } else {
            let _ = self.runtime.mount(std::future::ready(params)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use custview_client::StaticFetcher;
    use custview_common::types::{CustomerId, CustomerRecord};
    use serde_json::json;

    fn record(name: &str) -> CustomerRecord {
        serde_json::from_value(json!({ "customer_name": name })).unwrap()
    }

    fn fetcher() -> Arc<StaticFetcher> {
        Arc::new(
            StaticFetcher::new()
                .with_record("C1", record("Alice"))
                .with_record("C2", record("Bob")),
        )
    }

    #[tokio::test]
    async fn start_on_read_route_mounts_and_fetches() {
        let fetcher = fetcher();
        let mut app = App::new(Arc::clone(&fetcher), ReadPage::default(), Route::read("C1"));
        app.start().await;
        app.settle().await;

        assert_eq!(app.view(), View::Customer);
        assert_eq!(app.page().state().record(), Some(&record("Alice")));
        assert_eq!(fetcher.calls(), vec![CustomerId::new("C1")]);
    }

    #[tokio::test]
    async fn typing_an_id_and_submitting_opens_it() {
        let mut app = App::new(fetcher(), ReadPage::default(), Route::CustomerList);
        app.start().await;
        assert!(app.editing());

        for c in "C2".chars() {
            app.apply(Action::Input(c)).await;
        }
        app.apply(Action::Submit).await;
        app.settle().await;

        assert_eq!(app.view(), View::Customer);
        assert_eq!(app.page().state().record(), Some(&record("Bob")));
        assert!(app.input().is_empty());
    }

    #[tokio::test]
    async fn back_from_read_page_returns_to_prompt_and_unmounts() {
        let mut app = App::new(fetcher(), ReadPage::default(), Route::read("C1"));
        app.start().await;
        app.settle().await;

        app.apply(Action::Back).await;
        assert_eq!(app.view(), View::Prompt);
        assert!(!app.page().is_mounted());

        app.apply(Action::Back).await;
        assert_eq!(app.history().current(), &Route::CustomerList);
    }

    #[tokio::test]
    async fn moving_between_customers_refetches() {
        let fetcher = fetcher();
        let mut app = App::new(Arc::clone(&fetcher), ReadPage::default(), Route::read("C1"));
        app.start().await;
        app.settle().await;

        app.open(Route::read("C2")).await;
        app.settle().await;
        assert_eq!(app.page().state().record(), Some(&record("Bob")));

        app.back().await;
        app.settle().await;
        assert_eq!(app.page().state().record(), Some(&record("Alice")));
        assert_eq!(fetcher.calls().len(), 3);
    }

    #[tokio::test]
    async fn quit_stops_the_app() {
        let mut app = App::new(fetcher(), ReadPage::default(), Route::CustomerList);
        app.apply(Action::Quit).await;
        assert!(!app.running);
    }
}
