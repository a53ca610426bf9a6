//! Frame layout: the active view above a one-line key help footer.

pub mod customer;
pub mod prompt;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::app::{App, View};

/// Renders the whole frame for the current view.
pub fn render<F>(frame: &mut Frame, app: &App<F>)
where
    F: custview_client::CustomerFetcher + 'static,
{
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    match app.view() {
        View::Prompt => prompt::render_prompt(frame, body, app.input()),
        View::Customer => customer::render_customer(frame, body, app.page()),
    }

    let help = match app.view() {
        View::Prompt => "Enter open  Esc quit",
        View::Customer => "b back  r retry  q quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(help)).style(Style::default().add_modifier(Modifier::DIM)),
        footer,
    );
}
