use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{InputMode, Toast, ToastKind};
use crate::calendar::{FilterMode, Tab, ViewState};
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    /// Filter, tab and user on the left; the toast or key hints on the right.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        view: &ViewState,
        mode: InputMode,
        toast: Option<&Toast>,
    ) {
        let theme = theme::current();
        let w = area.width as usize;

        let filter = match view.filter_mode() {
            FilterMode::All => "[a]All",
            FilterMode::Mine => "[m]Mine",
        };
        let tab = match view.active_tab {
            None => "List+Cards",
            Some(Tab::List) => "[1]List",
            Some(Tab::Cards) => "[2]Cards",
        };
        let user = view.current_user.as_deref().unwrap_or("?");
        let left = format!(" {filter} {tab} @{user} ");

        let (right, right_style) = match toast {
            Some(toast) => {
                let style = match toast.kind {
                    ToastKind::Success => theme.toast_success,
                    ToastKind::Error => theme.toast_error,
                };
                (format!(" {} ", toast.message), style)
            }
            None => (hints(mode, w).to_string(), theme.status),
        };

        let padding = " ".repeat(w.saturating_sub(left.chars().count() + right.chars().count()));

        let line = Line::from(vec![
            Span::styled(left, theme.status),
            Span::styled(padding, theme.status),
            Span::styled(right, right_style),
        ]);
        frame.render_widget(Paragraph::new(line).style(theme.status), area);
    }
}

fn hints(mode: InputMode, w: usize) -> &'static str {
    match mode {
        InputMode::Form => " Tab:Next Enter:Save Esc:Cancel ",
        InputMode::Confirm => " y:Delete n:Keep ",
        InputMode::Normal if w >= 90 => {
            " jk:Move Enter:Edit n:New d:Del a/m:Filter 1/2:Tab r:Reload ?:Help q:Quit "
        }
        InputMode::Normal if w >= 50 => " n:New d:Del a/m:Filter ?:Help q:Quit ",
        InputMode::Normal => " ?:Help q:Quit ",
    }
}
