//! `cvw read` — Open a customer's read page in the terminal.

use std::sync::Arc;

use clap::Args;
use custview_client::HttpCustomerFetcher;
use custview_common::config::ViewerConfig;
use custview_page::controller::ReadPage;
use custview_page::route::Route;
use custview_tui::app::App;

/// Arguments for the `read` command.
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Customer ID, or a path such as `/customers/read/C110`.
    /// Omit to start at the ID prompt.
    pub target: Option<String>,
}

/// Executes the `read` command.
///
/// # Errors
///
/// Returns an error if the endpoint is not configured, the target matches
/// no route, or the terminal fails.
pub async fn execute(args: ReadArgs, config: &ViewerConfig) -> anyhow::Result<()> {
    let route = match args.target.as_deref() {
        Some(target) => Route::from_arg(target)?,
        None => Route::CustomerList,
    };
    let fetcher = Arc::new(HttpCustomerFetcher::new(config)?);
    tracing::info!(route = %route, endpoint = %fetcher.collection_url(), "opening viewer");

    let app = App::new(fetcher, ReadPage::new(config.back_label.clone()), route);
    custview_tui::run(app).await?;
    Ok(())
}
