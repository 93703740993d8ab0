use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::event_list::{badge_spans, render_empty};
use crate::calendar::EventRow;
use crate::theme;

const CARD_W: u16 = 30;
const CARD_H: u16 = 6;

/// Upcoming events as a grid of cards, one per event.
pub struct CardGrid;

impl CardGrid {
    pub fn render(frame: &mut Frame, area: Rect, rows: &[EventRow], selected: Option<usize>) {
        let block = Block::default()
            .title(" Calendar ")
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(theme::current().border);

        if rows.is_empty() {
            render_empty(frame, area, block, "No upcoming events");
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width < 10 || inner.height < CARD_H {
            return;
        }

        let columns = (inner.width / CARD_W).max(1) as usize;
        let card_w = inner.width / columns as u16;
        let visible_lines = (inner.height / CARD_H).max(1) as usize;

        // Scroll by whole lines of cards so the selected one stays on screen
        let selected_line = selected.map(|i| i / columns).unwrap_or(0);
        let first_line = selected_line.saturating_sub(visible_lines - 1);

        for (i, row) in rows.iter().enumerate().skip(first_line * columns) {
            let line = i / columns - first_line;
            if line >= visible_lines {
                break;
            }
            let col = i % columns;
            let card = Rect::new(
                inner.x + col as u16 * card_w,
                inner.y + line as u16 * CARD_H,
                card_w,
                CARD_H,
            );
            render_card(frame, card, row, selected == Some(i));
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, row: &EventRow, is_selected: bool) {
    let theme = theme::current();
    let color = theme.category_color(&row.category_key);

    let title_style = if is_selected {
        theme.selected
    } else {
        theme.highlight(row.highlight()).add_modifier(Modifier::BOLD)
    };
    let border_type = if is_selected {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", row.name), title_style))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(color));

    let mut badges = vec![Span::styled(row.category.clone(), Style::default().fg(color))];
    badges.extend(badge_spans(row, true));

    let lines = vec![
        Line::from(badges),
        Line::from(row.date_label.clone()),
        Line::from(Span::styled(
            format!("{} ({} min)", row.time_label(), row.duration),
            theme.dim,
        )),
        Line::from(Span::styled(row.user.clone(), theme.dim)),
    ];

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}
