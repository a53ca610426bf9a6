//! Customer ID prompt.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

/// Renders the ID prompt with the text typed so far.
pub fn render_prompt(frame: &mut Frame, area: Rect, input: &str) {
    let lines = vec![
        Line::from("Customer ID:"),
        Line::from(vec![Span::raw("> "), Span::raw(input.to_string()), Span::raw("_")]),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" customers ")),
        area,
    );
}
