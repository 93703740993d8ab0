use chrono::{NaiveDate, NaiveTime};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use thiserror::Error;

use crate::calendar::event::{hh_mm, DEFAULT_CATEGORY, DEFAULT_DURATION_MINUTES};
use crate::calendar::{Event, EventId, EventInput};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    User,
    Date,
    Time,
    Duration,
    Category,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::User,
            FormField::User => FormField::Date,
            FormField::Date => FormField::Time,
            FormField::Time => FormField::Duration,
            FormField::Duration => FormField::Category,
            FormField::Category => FormField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Category,
            FormField::User => FormField::Name,
            FormField::Date => FormField::User,
            FormField::Time => FormField::Date,
            FormField::Duration => FormField::Time,
            FormField::Category => FormField::Duration,
        }
    }
}

/// Whether the form creates a new event or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EventId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,
    #[error("Date must be YYYY-MM-DD")]
    InvalidDate,
    #[error("Time must be HH:MM")]
    InvalidTime,
    #[error("Duration must be a whole number of minutes")]
    InvalidDuration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFormState {
    pub mode: FormMode,
    pub name: String,
    pub user: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub category: String,
    pub created_at: Option<String>,
    pub active_field: FormField,
}

impl EventFormState {
    /// Blank create form: today, the current minute, an hour long.
    pub fn create(date: NaiveDate, time: NaiveTime, user: Option<&str>) -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            user: user.unwrap_or_default().to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            time: time.format(hh_mm::FORMAT).to_string(),
            duration: DEFAULT_DURATION_MINUTES.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            created_at: None,
            active_field: FormField::Name,
        }
    }

    pub fn edit(event: &Event) -> Self {
        Self {
            mode: FormMode::Edit(event.id),
            name: event.name.clone(),
            user: event.user.clone().unwrap_or_default(),
            date: event.date.format("%Y-%m-%d").to_string(),
            time: event.time.format(hh_mm::FORMAT).to_string(),
            duration: event.duration.to_string(),
            category: event.category_label().to_string(),
            created_at: event.created_at.clone(),
            active_field: FormField::Name,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => " New Event ",
            FormMode::Edit(_) => " Edit Event ",
        }
    }

    pub fn input_char(&mut self, c: char) {
        match self.active_field {
            FormField::Name => self.name.push(c),
            FormField::User => self.user.push(c),
            FormField::Date => self.date.push(c),
            FormField::Time => self.time.push(c),
            FormField::Duration => {
                if c.is_ascii_digit() {
                    self.duration.push(c)
                }
            }
            FormField::Category => {}
        }
    }

    pub fn backspace(&mut self) {
        let field = match self.active_field {
            FormField::Name => &mut self.name,
            FormField::User => &mut self.user,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::Duration => &mut self.duration,
            FormField::Category => return,
        };
        field.pop();
    }

    /// Advance to the next configured category. A category the list does not
    /// know (set on the server by someone else) restarts from the first.
    pub fn next_category(&mut self, categories: &[String]) {
        if categories.is_empty() {
            return;
        }
        let next = categories
            .iter()
            .position(|c| c == &self.category)
            .map(|i| (i + 1) % categories.len())
            .unwrap_or(0);
        self.category = categories[next].clone();
    }

    pub fn to_input(&self) -> Result<EventInput, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate)?;
        let time = hh_mm::parse(&self.time).ok_or(FormError::InvalidTime)?;
        let duration = self
            .duration
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidDuration)?;

        Ok(EventInput {
            name: name.to_string(),
            user: self.user.trim().to_string(),
            date,
            time,
            duration,
            category: self.category.clone(),
        })
    }
}

pub struct EventForm;

impl EventForm {
    pub fn render(frame: &mut Frame, area: Rect, state: &EventFormState) {
        // Center the form popup
        let form_w = area.width.clamp(30, 52).min(area.width);
        let form_h = area.height.clamp(11, 13).min(area.height);
        let x = area.x + (area.width.saturating_sub(form_w)) / 2;
        let y = area.y + (area.height.saturating_sub(form_h)) / 2;
        let form_area = Rect::new(x, y, form_w, form_h);

        frame.render_widget(Clear, form_area);

        let block = Block::default()
            .title(state.title())
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));

        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // name
            Constraint::Length(1), // user
            Constraint::Length(1), // date
            Constraint::Length(1), // time
            Constraint::Length(1), // duration
            Constraint::Length(1), // category
            Constraint::Length(1), // created
            Constraint::Length(1), // spacer
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        let active = state.active_field;
        render_field(frame, rows[0], "Name:", &state.name, active == FormField::Name);
        render_field(frame, rows[1], "User:", &state.user, active == FormField::User);
        render_field(frame, rows[2], "Date:", &state.date, active == FormField::Date);
        render_field(frame, rows[3], "Time:", &state.time, active == FormField::Time);
        render_field(frame, rows[4], "Mins:", &state.duration, active == FormField::Duration);
        render_field(
            frame,
            rows[5],
            "Cat:",
            &format!("< {} >", state.category),
            active == FormField::Category,
        );

        if let Some(created) = &state.created_at {
            let line = Line::from(Span::styled(format!("Added {created}"), theme::current().dim));
            frame.render_widget(Paragraph::new(line), rows[6]);
        }

        let key = Style::default().add_modifier(Modifier::BOLD);
        let help = Line::from(vec![
            Span::styled("Tab", key),
            Span::styled(":Next ", theme::current().dim),
            Span::styled("Space", key),
            Span::styled(":Category ", theme::current().dim),
            Span::styled("Enter", key),
            Span::styled(":Save ", theme::current().dim),
            Span::styled("Esc", key),
            Span::styled(":Cancel", theme::current().dim),
        ]);
        frame.render_widget(Paragraph::new(help), rows[8]);
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let cursor = if active { "_" } else { "" };
    let style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let spans = vec![
        Span::styled(format!("{label:<7}"), theme::current().dim),
        Span::styled(format!("{value}{cursor}"), style),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
