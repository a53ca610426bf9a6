//! `cvw fetch` — Fetch one customer record and print it.

use clap::Args;
use custview_client::{CustomerFetcher, HttpCustomerFetcher};
use custview_common::config::ViewerConfig;
use custview_common::types::CustomerId;
use custview_page::render::info_card::{InfoCardProps, field_rows};

use crate::output::format_rows;

/// Arguments for the `fetch` command.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Customer ID, passed to the API as-is.
    pub id: String,

    /// Print the raw record as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `fetch` command.
///
/// # Errors
///
/// Returns an error if the endpoint is not configured or the fetch fails.
pub async fn execute(args: FetchArgs, config: &ViewerConfig) -> anyhow::Result<()> {
    let fetcher = HttpCustomerFetcher::new(config)?;
    let record = fetcher.fetch_customer(&CustomerId::new(&args.id)).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        let rows = field_rows(&InfoCardProps::spread(Some(&record)));
        print!("{}", format_rows(&rows));
    }
    Ok(())
}
