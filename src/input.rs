use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};
use crate::calendar::{EventsApi, FilterMode, Tab};
use crate::components::event_form::FormField;

/// Apply one key press to the app. Network calls triggered by the key are
/// awaited before returning, so keys are handled strictly one after another.
pub async fn handle_key<A: EventsApi>(app: &mut App<A>, key: KeyEvent) {
    // Help overlay takes priority
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return;
    }

    match app.input_mode() {
        InputMode::Confirm => handle_confirm_input(app, key.code).await,
        InputMode::Form => handle_form_input(app, key.code).await,
        InputMode::Normal => handle_normal_input(app, key.code, key.modifiers).await,
    }
}

async fn handle_normal_input<A: EventsApi>(app: &mut App<A>, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Char('a'), _) => app.set_user_filter(FilterMode::All).await,
        (KeyCode::Char('m'), _) => app.set_user_filter(FilterMode::Mine).await,
        (KeyCode::Char('1'), _) => app.switch_tab(Tab::List),
        (KeyCode::Char('2'), _) => app.switch_tab(Tab::Cards),
        (KeyCode::Char('r'), _) => app.load_events().await,
        (KeyCode::Char('n'), _) => app.open_create_form(),
        (KeyCode::Char('d'), _) | (KeyCode::Delete, _) => app.request_delete_selected(),
        (KeyCode::Enter, _) => app.open_edit_selected(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.select_next(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.select_prev(),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => {}
    }
}

async fn handle_form_input<A: EventsApi>(app: &mut App<A>, code: KeyCode) {
    match code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => app.submit_form().await,
        KeyCode::Tab => app.form_tab(),
        KeyCode::BackTab => app.form_backtab(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(' ') => {
            // Space cycles the category, otherwise it is just a space
            let on_category = app
                .form
                .as_ref()
                .is_some_and(|form| form.active_field == FormField::Category);
            if on_category {
                app.form_next_category();
            } else {
                app.form_input_char(' ');
            }
        }
        KeyCode::Char(c) => app.form_input_char(c),
        _ => {}
    }
}

async fn handle_confirm_input<A: EventsApi>(app: &mut App<A>, code: KeyCode) {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete().await,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
}
