use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::calendar::EventsApi;
use crate::components::{CardGrid, ConfirmDialog, EventForm, EventList, HistoryList, StatusBar};
use crate::theme;

/// Draw the whole screen for the current app state.
pub fn draw<A: EventsApi>(frame: &mut Frame, app: &App<A>) {
    let area = frame.area();

    // Main layout: content + status bar
    let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
    let content = layout[0];

    let history_h = if content.height >= 24 { content.height / 3 } else { content.height / 2 };
    let sections =
        Layout::vertical([Constraint::Min(3), Constraint::Length(history_h)]).split(content);
    let (upcoming_area, history_area) = (sections[0], sections[1]);

    let board = &app.board;
    let upcoming_len = board.upcoming.len();
    let selected_upcoming = (app.selected < upcoming_len && upcoming_len > 0).then_some(app.selected);
    let selected_history = app
        .selected
        .checked_sub(upcoming_len)
        .filter(|i| *i < board.history.len());

    match (app.view.shows_list(), app.view.shows_cards()) {
        (true, true) => {
            let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(upcoming_area);
            EventList::render(frame, halves[0], &board.upcoming, selected_upcoming);
            CardGrid::render(frame, halves[1], &board.upcoming, selected_upcoming);
        }
        (false, _) => CardGrid::render(frame, upcoming_area, &board.upcoming, selected_upcoming),
        (true, false) => EventList::render(frame, upcoming_area, &board.upcoming, selected_upcoming),
    }
    HistoryList::render(frame, history_area, &board.history, selected_history);

    if let Some(form) = &app.form {
        EventForm::render(frame, area, form);
    }

    if let Some(id) = app.pending_delete {
        let row = board
            .upcoming
            .iter()
            .chain(board.history.iter())
            .find(|row| row.id == id);
        ConfirmDialog::render(frame, area, row);
    }

    if app.show_help {
        render_help(frame, area);
    }

    StatusBar::render(frame, layout[1], &app.view, app.input_mode(), app.toast.as_ref());
}

fn render_help(frame: &mut Frame, area: Rect) {
    let popup_w = area.width.clamp(30, 52).min(area.width);
    let popup_h = area.height.clamp(12, 20).min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let binding = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<10}"), key_style),
            Span::raw(desc),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Events", section_style)),
        binding("j/k", "Move selection"),
        binding("Enter", "Edit selected event"),
        binding("n", "New event"),
        binding("d", "Delete selected event"),
        binding("r", "Reload from server"),
        Line::from(""),
        Line::from(Span::styled("View", section_style)),
        binding("a / m", "All events / only mine"),
        binding("1 / 2", "List / cards"),
        Line::from(""),
        binding("q", "Quit"),
        Line::from(Span::styled("  Esc or ? closes this help", theme::current().dim)),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
