use std::borrow::Borrow;

use chrono::{Datelike, NaiveDate, Weekday};

use super::event::Event;

/// Badge for events happening today or tomorrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    Today,
    Tomorrow,
}

impl Timing {
    pub fn label(&self) -> &'static str {
        match self {
            Timing::Today => "Today",
            Timing::Tomorrow => "Tomorrow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

pub fn classify_timing(date: NaiveDate, today: NaiveDate) -> Option<Timing> {
    if date == today {
        Some(Timing::Today)
    } else if today.succ_opt() == Some(date) {
        Some(Timing::Tomorrow)
    } else {
        None
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Split into (upcoming, past). Anything dated today or later is upcoming.
pub fn partition(events: &[Event], today: NaiveDate) -> (Vec<&Event>, Vec<&Event>) {
    events.iter().partition(|event| event.date >= today)
}

/// Order by date then time. The sort is stable, so equal keys keep the
/// order they arrived in for either direction.
pub fn sort_chronological<E: Borrow<Event>>(events: &mut [E], order: SortOrder) {
    events.sort_by(|a, b| {
        let (a, b) = (a.borrow(), b.borrow());
        let key_a = (a.date, a.time);
        let key_b = (b.date, b.time);
        match order {
            SortOrder::Ascending => key_a.cmp(&key_b),
            SortOrder::Descending => key_b.cmp(&key_a),
        }
    });
}

/// Keep only the events owned by `username`, or everything when the filter
/// is off or no identity is known yet.
pub fn filter_mine<'a>(
    events: Vec<&'a Event>,
    filter_mine: bool,
    username: Option<&str>,
) -> Vec<&'a Event> {
    match username {
        Some(username) if filter_mine && !username.is_empty() => events
            .into_iter()
            .filter(|event| event.is_owned_by(username))
            .collect(),
        _ => events,
    }
}
