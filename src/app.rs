use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

use crate::calendar::{build_board, Board, Event, EventId, EventInput, EventsApi, FilterMode, Tab, ViewState};
use crate::components::event_form::{EventFormState, FormMode};
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Single-slot notification. A newer toast replaces the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Form,
    Confirm,
}

pub struct App<A: EventsApi> {
    pub running: bool,
    pub today: NaiveDate,
    pub view: ViewState,
    pub board: Board,
    /// Cursor into `board.visible_ids()`.
    pub selected: usize,
    pub form: Option<EventFormState>,
    pub pending_delete: Option<EventId>,
    pub toast: Option<Toast>,
    pub show_help: bool,
    pub categories: Vec<String>,
    /// Create form contents kept between openings until a create succeeds.
    create_draft: Option<EventFormState>,
    cache: Vec<Event>,
    toast_duration: Duration,
    api: A,
}

impl<A: EventsApi> App<A> {
    pub fn new(api: A, config: &Config) -> Self {
        Self {
            running: true,
            today: Local::now().date_naive(),
            view: ViewState::default(),
            board: Board::default(),
            selected: 0,
            form: None,
            pending_delete: None,
            toast: None,
            show_help: false,
            categories: config.ui.categories.clone(),
            create_draft: None,
            cache: Vec::new(),
            toast_duration: Duration::from_secs(config.ui.toast_secs),
            api,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Last successfully loaded events, in server order.
    pub fn cached_events(&self) -> &[Event] {
        &self.cache
    }

    pub fn input_mode(&self) -> InputMode {
        if self.pending_delete.is_some() {
            InputMode::Confirm
        } else if self.form.is_some() {
            InputMode::Form
        } else {
            InputMode::Normal
        }
    }

    /// Resolve who we are, then do the first load.
    pub async fn start(&mut self) {
        match self.api.current_user().await {
            Ok(username) => {
                info!(%username, "signed in");
                self.view.current_user = Some(username);
            }
            Err(err) => warn!(error = %err, "could not fetch current user"),
        }
        self.load_events().await;
    }

    /// Replace the cache with the server's events and rebuild every view.
    /// Failures are logged and leave the previous views on screen.
    pub async fn load_events(&mut self) {
        match self.api.list_events().await {
            Ok(events) => {
                info!(count = events.len(), "loaded events");
                self.cache = events;
                self.today = Local::now().date_naive();
                self.rebuild();
            }
            Err(err) => error!(error = %err, "failed to load events"),
        }
    }

    fn rebuild(&mut self) {
        self.board = build_board(&self.cache, &self.view, self.today);
        let visible = self.board.visible_ids().len();
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    pub async fn create_event(&mut self, input: EventInput) {
        match self.api.create_event(&input).await {
            Ok(event) => {
                info!(id = event.id, name = %event.name, "event created");
                let user = match self.api.current_user().await {
                    Ok(username) => Some(username),
                    Err(err) => {
                        warn!(error = %err, "could not refresh current user");
                        self.view.current_user.clone()
                    }
                };
                let now = Local::now();
                self.create_draft = Some(EventFormState::create(
                    now.date_naive(),
                    now.time(),
                    user.as_deref(),
                ));
                self.form = None;
                self.load_events().await;
                self.notify(ToastKind::Success, "Event added successfully");
            }
            Err(err) => {
                error!(error = %err, "failed to create event");
                self.notify(ToastKind::Error, err.user_message("Failed to add event"));
            }
        }
    }

    pub async fn update_event(&mut self, id: EventId, input: EventInput) {
        match self.api.update_event(id, &input).await {
            Ok(()) => {
                info!(id, "event updated");
                self.form = None;
                self.load_events().await;
                self.notify(ToastKind::Success, "Event updated");
            }
            Err(err) => {
                error!(id, error = %err, "failed to update event");
                self.notify(ToastKind::Error, err.user_message("Failed to update event"));
            }
        }
    }

    /// Ask for confirmation before deleting. Nothing is sent yet.
    pub fn request_delete(&mut self, id: EventId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Send the delete the user just confirmed. The cache is only refreshed
    /// by the reload that follows a successful delete.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        match self.api.delete_event(id).await {
            Ok(()) => {
                info!(id, "event deleted");
                self.load_events().await;
                self.notify(ToastKind::Success, "Event deleted");
            }
            Err(err) => {
                error!(id, error = %err, "failed to delete event");
                self.notify(ToastKind::Error, err.user_message("Failed to delete event"));
            }
        }
    }

    pub async fn set_user_filter(&mut self, mode: FilterMode) {
        self.view.filter_mine = mode == FilterMode::Mine;
        self.load_events().await;
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.view.active_tab = Some(tab);
    }

    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Drop the toast once it has been visible for the configured time.
    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = &self.toast {
            if now.saturating_duration_since(toast.shown_at) >= self.toast_duration {
                self.toast = None;
            }
        }
    }

    // ── Selection ──

    pub fn selected_id(&self) -> Option<EventId> {
        self.board.visible_ids().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let visible = self.board.visible_ids().len();
        if self.selected + 1 < visible {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    // ── Forms ──

    pub fn open_create_form(&mut self) {
        let form = self.create_draft.take().unwrap_or_else(|| {
            let now = Local::now();
            EventFormState::create(now.date_naive(), now.time(), self.view.current_user.as_deref())
        });
        self.form = Some(form);
    }

    /// Open the edit form for `id`, looked up in the last loaded events.
    pub fn open_edit(&mut self, id: EventId) {
        match self.cache.iter().find(|event| event.id == id) {
            Some(event) => self.form = Some(EventFormState::edit(event)),
            None => warn!(id, "edit requested for an event that is not loaded"),
        }
    }

    pub fn open_edit_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.open_edit(id);
        }
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.request_delete(id);
        }
    }

    /// Esc: an unfinished create form is kept for next time, an edit is dropped.
    pub fn close_form(&mut self) {
        if let Some(form) = self.form.take() {
            if form.mode == FormMode::Create {
                self.create_draft = Some(form);
            }
        }
    }

    pub async fn submit_form(&mut self) {
        let Some(form) = &self.form else {
            return;
        };
        let mode = form.mode;
        match form.to_input() {
            Ok(input) => match mode {
                FormMode::Create => self.create_event(input).await,
                FormMode::Edit(id) => self.update_event(id, input).await,
            },
            Err(err) => self.notify(ToastKind::Error, err.to_string()),
        }
    }

    pub fn form_input_char(&mut self, c: char) {
        if let Some(form) = &mut self.form {
            form.input_char(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = &mut self.form {
            form.backspace();
        }
    }

    pub fn form_tab(&mut self) {
        if let Some(form) = &mut self.form {
            form.active_field = form.active_field.next();
        }
    }

    pub fn form_backtab(&mut self) {
        if let Some(form) = &mut self.form {
            form.active_field = form.active_field.prev();
        }
    }

    pub fn form_next_category(&mut self) {
        if let Some(form) = &mut self.form {
            form.next_category(&self.categories);
        }
    }
}
