//! `cvw render` — Print the read page as HTML.
//!
//! `--server` prints the document the server sends first: the shell with
//! a placeholder where the customer card goes. No fetch is made. Without
//! it, the page is mounted, the fetch awaited, and the client render
//! printed.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use custview_client::{CustomerFetcher, HttpCustomerFetcher};
use custview_common::config::ViewerConfig;
use custview_page::controller::ReadPage;
use custview_page::render::RenderPass;
use custview_page::route::Route;
use custview_page::runtime::PageRuntime;

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Customer ID, or a path such as `/customers/read/C110`.
    pub target: String,

    /// Print the server pass instead of the client render.
    #[arg(long)]
    pub server: bool,

    /// Print only the page fragment, without the surrounding document.
    #[arg(long)]
    pub fragment: bool,
}

/// Executes the `render` command.
///
/// # Errors
///
/// Returns an error if the target is not a read route, or, for the client
/// pass, if the endpoint is not configured.
pub async fn execute(args: RenderArgs, config: &ViewerConfig) -> anyhow::Result<()> {
    let html = render_html(&args, &config.back_label, || {
        Ok(HttpCustomerFetcher::new(config)?)
    })
    .await?;
    print!("{html}");
    Ok(())
}

/// Produces the markup `args` asks for.
///
/// `make_fetcher` is only called for the client pass.
///
/// # Errors
///
/// Returns an error if the target is not a read route or the fetcher
/// cannot be built.
pub async fn render_html<F, B>(
    args: &RenderArgs,
    back_label: &str,
    make_fetcher: B,
) -> anyhow::Result<String>
where
    F: CustomerFetcher + 'static,
    B: FnOnce() -> anyhow::Result<F>,
{
    let route = Route::from_arg(&args.target)?;
    let params = route
        .params()
        .cloned()
        .with_context(|| format!("{route} is not a customer read page"))?;
    let page = ReadPage::new(back_label.to_string());

    let (page, pass) = if args.server {
        (page, RenderPass::Server)
    } else {
        let mut runtime = PageRuntime::new(Arc::new(make_fetcher()?), page);
        let _ = runtime.mount(std::future::ready(params)).await;
        runtime.settle().await;
        tracing::info!(state = runtime.page().state().label(), "page settled");
        (runtime.page().clone(), RenderPass::Client)
    };

    Ok(if args.fragment {
        format!("{}\n", page.render(pass))
    } else {
        page.render_document(pass)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use custview_client::StaticFetcher;
    use custview_common::types::CustomerId;
    use serde_json::json;

    fn args(target: &str, server: bool, fragment: bool) -> RenderArgs {
        RenderArgs {
            target: target.to_string(),
            server,
            fragment,
        }
    }

    fn unconfigured() -> anyhow::Result<HttpCustomerFetcher> {
        Ok(HttpCustomerFetcher::new(&ViewerConfig::default())?)
    }

    fn momotaro() -> StaticFetcher {
        StaticFetcher::new().with_record(
            "C110",
            serde_json::from_value(json!({"customer_id": "C110", "customer_name": "桃太郎"}))
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn server_pass_needs_no_endpoint() {
        let html = render_html(&args("C110", true, false), "戻る", unconfigured)
            .await
            .expect("server render failed");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div data-client-only="one-customer-info-card"></div>"#));
    }

    #[tokio::test]
    async fn client_pass_without_endpoint_fails() {
        let result = render_html(&args("C110", false, false), "戻る", unconfigured).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn fragment_omits_document_shell() {
        let fetcher = momotaro();
        let html = render_html(&args("/customers/read/C110", false, true), "戻る", || Ok(fetcher))
            .await
            .expect("client render failed");
        assert!(html.starts_with(r#"<div class="card bordered">"#));
        assert!(html.ends_with('\n'));
        assert!(!html.contains("<!DOCTYPE html>"));
        assert!(html.contains("桃太郎"));
    }

    #[tokio::test]
    async fn client_document_fetches_once() {
        let fetcher = Arc::new(momotaro());
        let shared = Arc::clone(&fetcher);
        let html = render_html(&args("C110", false, false), "戻る", move || {
            Ok(SharedFetcher(shared))
        })
        .await
        .expect("client render failed");
        assert!(html.contains("<main>"));
        assert!(html.contains("桃太郎"));
        assert_eq!(fetcher.calls(), vec![CustomerId::new("C110")]);
    }

    #[tokio::test]
    async fn non_read_route_is_rejected() {
        let err = render_html(&args("/customers", true, false), "戻る", unconfigured)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("is not a customer read page"));
    }

    struct SharedFetcher(Arc<StaticFetcher>);

    impl CustomerFetcher for SharedFetcher {
        async fn fetch_customer(
            &self,
            id: &CustomerId,
        ) -> custview_common::error::Result<custview_common::types::CustomerRecord> {
            self.0.fetch_customer(id).await
        }
    }
}
