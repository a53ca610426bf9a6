//! CLI command definitions and dispatch.

pub mod fetch;
pub mod read;
pub mod render;
pub mod routes;

use clap::{Parser, Subcommand};
use custview_common::config::ViewerConfig;
use custview_common::constants::{API_ENDPOINT_VAR, BIN_NAME, DEFAULT_REQUEST_TIMEOUT_SECS};

/// custview — customer read page viewer.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the customer API (falls back to `.env`).
    #[arg(long, global = true, env = API_ENDPOINT_VAR)]
    pub api_endpoint: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a customer's read page in the terminal.
    Read(read::ReadArgs),
    /// Print the read page as HTML.
    Render(render::RenderArgs),
    /// Fetch one customer record and print it.
    Fetch(fetch::FetchArgs),
    /// List the routes the viewer understands.
    Routes,
}

impl Cli {
    /// Resolves the viewer configuration once, from flags, env, and `.env`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn config(&self) -> anyhow::Result<ViewerConfig> {
        let config =
            ViewerConfig::resolve(self.api_endpoint.as_deref())?.with_timeout_secs(self.timeout);
        config.validate()?;
        Ok(config)
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config()?;
    match cli.command {
        Command::Read(args) => read::execute(args, &config).await,
        Command::Render(args) => render::execute(args, &config).await,
        Command::Fetch(args) => fetch::execute(args, &config).await,
        Command::Routes => {
            routes::execute();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn render_server_flag_parses() {
        let cli = Cli::try_parse_from(["cvw", "render", "C110", "--server"]).unwrap();
        assert!(matches!(cli.command, Command::Render(ref args) if args.server));
    }
}
