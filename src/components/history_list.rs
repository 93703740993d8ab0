use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

use super::event_list::{render_empty, render_rows};
use crate::calendar::EventRow;
use crate::theme;

/// Past events, most recent first, with the count in the title.
pub struct HistoryList;

impl HistoryList {
    pub fn render(frame: &mut Frame, area: Rect, rows: &[EventRow], selected: Option<usize>) {
        let block = Block::default()
            .title(format!(" History ({}) ", rows.len()))
            .title_style(theme::current().header)
            .title_bottom(Line::from(Span::styled(" newest first ", theme::current().dim)))
            .borders(Borders::ALL)
            .border_style(theme::current().border);

        if rows.is_empty() {
            render_empty(frame, area, block, "No past events yet.");
            return;
        }

        render_rows(frame, area, block, rows, selected, false);
    }
}
