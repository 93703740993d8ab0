#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate, NaiveTime};
use family_calendar::app::App;
use family_calendar::calendar::{ApiError, Event, EventId, EventInput, EventsApi};
use family_calendar::config::Config;

/// Every request the app made, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(EventInput),
    Update(EventId, EventInput),
    Delete(EventId),
    Me,
}

/// Canned server error: status plus optional `{error}` message.
#[derive(Debug, Clone)]
pub struct Failure {
    pub status: u16,
    pub message: Option<String>,
}

impl Failure {
    pub fn new(status: u16, message: Option<&str>) -> Self {
        Self {
            status,
            message: message.map(str::to_string),
        }
    }

    fn to_error(&self) -> ApiError {
        ApiError::Server {
            status: self.status,
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct MockState {
    pub events: Vec<Event>,
    pub username: Option<String>,
    pub calls: Vec<Call>,
    pub fail_list: Option<Failure>,
    pub fail_create: Option<Failure>,
    pub fail_update: Option<Failure>,
    pub fail_delete: Option<Failure>,
    next_id: EventId,
}

/// In-memory stand-in for the calendar server.
#[derive(Debug, Default)]
pub struct MockApi {
    pub state: Mutex<MockState>,
}

impl MockApi {
    pub fn new(username: &str, events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(MockState {
                events,
                username: Some(username.to_string()),
                next_id,
                ..Default::default()
            }),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|&c| pred(c)).count()
    }

    pub fn list_count(&self) -> usize {
        self.count(|c| matches!(c, Call::List))
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }
}

#[async_trait]
impl EventsApi for MockApi {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::List);
        match &state.fail_list {
            Some(failure) => Err(failure.to_error()),
            None => Ok(state.events.clone()),
        }
    }

    async fn create_event(&self, input: &EventInput) -> Result<Event, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create(input.clone()));
        if let Some(failure) = &state.fail_create {
            return Err(failure.to_error());
        }
        let event = Event {
            id: state.next_id,
            name: input.name.clone(),
            user: Some(input.user.clone()),
            date: input.date,
            time: input.time,
            duration: input.duration,
            category: Some(input.category.clone()),
            created_at: None,
        };
        state.next_id += 1;
        state.events.push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: EventId, input: &EventInput) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Update(id, input.clone()));
        if let Some(failure) = &state.fail_update {
            return Err(failure.to_error());
        }
        if let Some(event) = state.events.iter_mut().find(|e| e.id == id) {
            event.name = input.name.clone();
            event.user = Some(input.user.clone());
            event.date = input.date;
            event.time = input.time;
            event.duration = input.duration;
            event.category = Some(input.category.clone());
        }
        Ok(())
    }

    async fn delete_event(&self, id: EventId) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete(id));
        if let Some(failure) = &state.fail_delete {
            return Err(failure.to_error());
        }
        state.events.retain(|e| e.id != id);
        Ok(())
    }

    async fn current_user(&self) -> Result<String, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Me);
        state
            .username
            .clone()
            .ok_or_else(|| ApiError::Server {
                status: 401,
                message: Some("not logged in".into()),
            })
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A date `days` away from today.
pub fn day(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

pub fn event(id: EventId, name: &str, user: &str, date: NaiveDate, time: &str) -> Event {
    Event {
        id,
        name: name.to_string(),
        user: Some(user.to_string()),
        date,
        time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        duration: 60,
        category: Some("Family".to_string()),
        created_at: None,
    }
}

/// yesterday (bob), today (alice), tomorrow (bob), next week (alice)
pub fn household() -> Vec<Event> {
    vec![
        event(1, "Groceries", "bob", day(-1), "18:00"),
        event(2, "Dentist", "alice", day(0), "09:30"),
        event(3, "Football", "bob", day(1), "17:00"),
        event(4, "Piano", "alice", day(7), "16:00"),
    ]
}

pub fn input(name: &str, date: NaiveDate) -> EventInput {
    EventInput {
        name: name.to_string(),
        user: "alice".to_string(),
        date,
        time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        duration: 45,
        category: "Work".to_string(),
    }
}

pub async fn started_app(api: MockApi) -> App<MockApi> {
    let mut app = App::new(api, &Config::default());
    app.start().await;
    app
}
