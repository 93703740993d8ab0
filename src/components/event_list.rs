use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::calendar::{EventRow, Highlight, Timing};
use crate::theme;

/// Upcoming events, soonest first.
pub struct EventList;

impl EventList {
    pub fn render(frame: &mut Frame, area: Rect, rows: &[EventRow], selected: Option<usize>) {
        let block = Block::default()
            .title(" Upcoming ")
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(theme::current().border);

        if rows.is_empty() {
            render_empty(frame, area, block, "No upcoming events");
            return;
        }

        render_rows(frame, area, block, rows, selected, true);
    }
}

pub(crate) fn render_empty(frame: &mut Frame, area: Rect, block: Block, message: &str) {
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(message).style(theme::current().dim), inner);
}

/// Draw one line per row. `with_timing` is off for history, which never
/// carries today/tomorrow badges.
pub(crate) fn render_rows(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    rows: &[EventRow],
    selected: Option<usize>,
    with_timing: bool,
) {
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(format_row(row, with_timing)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::current().selected)
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn format_row(row: &EventRow, with_timing: bool) -> Line<'static> {
    let theme = theme::current();
    let color = theme.category_color(&row.category_key);
    let highlight = if with_timing {
        row.highlight()
    } else if row.weekend {
        Highlight::Weekend
    } else {
        Highlight::None
    };

    let mut spans = vec![
        Span::styled("  ", Style::default().bg(color)),
        Span::styled(
            format!(" {} {} ", row.date_label, row.time_label()),
            theme.dim,
        ),
        Span::styled(
            row.name.clone(),
            theme.highlight(highlight).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" [{}]", row.category), Style::default().fg(color)),
    ];
    spans.extend(badge_spans(row, with_timing));
    spans.push(Span::styled(
        format!(" {} min \u{2022} {}", row.duration, row.user),
        theme.dim,
    ));

    Line::from(spans)
}

/// Today/Tomorrow and Weekend badges for a row.
pub(crate) fn badge_spans(row: &EventRow, with_timing: bool) -> Vec<Span<'static>> {
    let theme = theme::current();
    let mut spans = Vec::new();
    if with_timing {
        if let Some(timing) = row.timing {
            let style = match timing {
                Timing::Today => theme.today,
                Timing::Tomorrow => theme.tomorrow,
            };
            spans.push(Span::styled(format!(" {}", timing.label()), style));
        }
    }
    if row.weekend {
        spans.push(Span::styled(" Weekend", theme.weekend));
    }
    spans
}
