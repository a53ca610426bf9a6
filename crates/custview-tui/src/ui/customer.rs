//! Customer read page view.
//!
//! Mirrors the HTML card: a bordered block with the customer's rows, or
//! the failure message with a retry hint, and the back label underneath.

use custview_page::controller::ReadPage;
use custview_page::render::info_card::{InfoCardProps, field_rows};
use custview_page::state::PageState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Row, Table};

/// Renders the read page into `area`.
pub fn render_customer(frame: &mut Frame, area: Rect, page: &ReadPage) {
    let title = page
        .identifier()
        .map_or_else(|| " customer ".to_string(), |id| format!(" customer {id} "));
    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content, back] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    match page.state() {
        PageState::Failed(failure) => {
            let lines = vec![
                Line::from(Span::styled(
                    failure.message.clone(),
                    Style::default().fg(Color::Red),
                )),
                Line::from("[r] retry"),
            ];
            frame.render_widget(Paragraph::new(lines), content);
        }
        PageState::Empty | PageState::Populated(_) => {
            let props = InfoCardProps::spread(page.state().record());
            let rows = field_rows(&props)
                .into_iter()
                .map(|row| Row::new(vec![row.label, row.value]));
            let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(0)]);
            frame.render_widget(table, content);
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(format!("[b] {}", page.back_label())))
            .style(Style::default().add_modifier(Modifier::BOLD)),
        back,
    );
}
