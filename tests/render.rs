mod common;

use common::{day, event, household, started_app, MockApi};
use family_calendar::app::{App, ToastKind};
use family_calendar::calendar::Tab;
use family_calendar::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Render one frame and return the screen as text, one line per row.
fn screen(app: &App<MockApi>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[tokio::test]
async fn shows_list_cards_and_history() {
    let app = started_app(MockApi::new("alice", household())).await;
    let text = screen(&app, 140, 40);

    assert!(text.contains("Upcoming"));
    assert!(text.contains("Calendar"));
    assert!(text.contains("History (1)"));
    for name in ["Dentist", "Football", "Piano", "Groceries"] {
        assert!(text.contains(name), "{name} missing from\n{text}");
    }
    assert!(text.contains("Today"));
    assert!(text.contains("Tomorrow"));
    assert!(text.contains("@alice"));
}

#[tokio::test]
async fn empty_states() {
    let app = started_app(MockApi::new("alice", Vec::new())).await;
    let text = screen(&app, 120, 30);

    assert!(text.contains("No upcoming events"));
    assert!(text.contains("No past events yet."));
    assert!(text.contains("History (0)"));
}

#[tokio::test]
async fn cards_tab_hides_the_list() {
    let mut app = started_app(MockApi::new("alice", household())).await;
    app.switch_tab(Tab::Cards);
    let text = screen(&app, 120, 30);

    assert!(text.contains("Calendar"));
    assert!(!text.contains("Upcoming"));
    assert!(text.contains("[2]Cards"));
}

#[tokio::test]
async fn toast_replaces_key_hints() {
    let mut app = started_app(MockApi::new("alice", household())).await;
    app.notify(ToastKind::Error, "bad date");
    let text = screen(&app, 120, 30);

    let status = text.lines().last().unwrap();
    assert!(status.contains("bad date"));
    assert!(!status.contains("q:Quit"));
}

#[tokio::test]
async fn confirm_popup_names_the_event() {
    let mut app = started_app(MockApi::new("alice", vec![event(5, "Vet", "bob", day(3), "11:15")])).await;
    app.request_delete(5);
    let text = screen(&app, 100, 30);

    assert!(text.contains("Delete Event"));
    assert!(text.contains("Vet"));
    assert!(text.contains("y:Delete"));
}

#[tokio::test]
async fn edit_form_is_prefilled() {
    let mut app = started_app(MockApi::new("alice", household())).await;
    app.open_edit(4);
    let text = screen(&app, 100, 30);

    assert!(text.contains("Edit Event"));
    assert!(text.contains("Piano"));
    assert!(text.contains("16:00"));
    assert!(text.contains("< Family >"));
}
