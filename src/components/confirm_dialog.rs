use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::calendar::EventRow;
use crate::theme;

/// "Are you sure?" popup shown before a delete is sent.
pub struct ConfirmDialog;

impl ConfirmDialog {
    pub fn render(frame: &mut Frame, area: Rect, row: Option<&EventRow>) {
        let popup_w = area.width.clamp(30, 48).min(area.width);
        let popup_h = area.height.min(7);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Delete Event ")
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let subject = row
            .map(|row| format!("{} ({} {})", row.name, row.date_label, row.time_label()))
            .unwrap_or_else(|| "this event".to_string());

        let key = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from("Are you sure you want to delete"),
            Line::from(Span::styled(subject, theme::current().header)),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", key),
                Span::styled(":Delete  ", theme::current().dim),
                Span::styled("n", key),
                Span::styled("/", theme::current().dim),
                Span::styled("Esc", key),
                Span::styled(":Keep", theme::current().dim),
            ]),
        ];

        let para = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(para, inner);
    }
}
