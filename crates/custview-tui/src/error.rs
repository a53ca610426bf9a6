//! TUI error type.

use thiserror::Error;

/// Errors raised while driving the terminal.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Drawing to or configuring the terminal failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
