//! # custview-tui
//!
//! Interactive terminal client for the customer read page.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - A customer ID prompt standing in for the customer list.
//! - The read page card, filled in once the fetch resolves.
//! - Back navigation, retry after failure, and customer switching.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod app;
pub mod error;
pub mod event;
pub mod ui;

use std::time::Duration;

use custview_client::CustomerFetcher;

use crate::app::App;
use crate::error::TuiError;
use crate::event::{EventSource, TerminalEvent, action_for};

/// Interval at which fetch results are applied and the screen redrawn.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be drawn to.
pub async fn run<F>(mut app: App<F>) -> Result<(), TuiError>
where
    F: CustomerFetcher + 'static,
{
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app).await;
    ratatui::restore();
    result
}

async fn event_loop<F>(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App<F>,
) -> Result<(), TuiError>
where
    F: CustomerFetcher + 'static,
{
    let mut events = EventSource::new(TICK_RATE);
    app.start().await;

    while app.running {
        let _ = terminal.draw(|frame| ui::render(frame, app))?;

        match events.next().await {
            Some(TerminalEvent::Key(key)) => {
                let action = action_for(key, app.editing());
                app.apply(action).await;
            }
            Some(TerminalEvent::Tick) => {
                let _ = app.tick();
            }
            Some(TerminalEvent::Resize(..)) => {}
            None => break,
        }
    }
    Ok(())
}
