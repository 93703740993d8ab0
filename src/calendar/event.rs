use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Server-assigned event identifier.
pub type EventId = u64;

pub const NO_USER_LABEL: &str = "\u{2014}";
pub const DEFAULT_CATEGORY: &str = "Other";
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// An event as returned by `GET /api/events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(default)]
    pub user: Option<String>,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub duration: u32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Event {
    /// Owner name for display, an em dash when the event has none.
    pub fn user_label(&self) -> &str {
        match self.user.as_deref() {
            Some(user) if !user.is_empty() => user,
            _ => NO_USER_LABEL,
        }
    }

    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// Lowercased category used to pick a colour. Never sent back to the server.
    pub fn category_key(&self) -> String {
        category_key(self.category.as_deref())
    }

    pub fn is_owned_by(&self, username: &str) -> bool {
        self.user.as_deref() == Some(username)
    }
}

pub fn category_key(category: Option<&str>) -> String {
    match category {
        Some(category) if !category.is_empty() => category.to_lowercase(),
        _ => DEFAULT_CATEGORY.to_lowercase(),
    }
}

/// Request body shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInput {
    pub name: String,
    pub user: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub duration: u32,
    pub category: String,
}

/// Create responses come back either bare or wrapped with a message.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CreatedEvent {
    Wrapped { event: Event },
    Bare(Event),
}

impl CreatedEvent {
    pub(crate) fn into_event(self) -> Event {
        match self {
            CreatedEvent::Wrapped { event } | CreatedEvent::Bare(event) => event,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Identity {
    pub username: String,
}

/// Times travel as `HH:MM`; seconds are tolerated on the way in.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid time of day: {raw:?}")))
    }

    pub fn parse(raw: &str) -> Option<NaiveTime> {
        let raw = raw.trim();
        NaiveTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_user_and_category_fall_back_for_display() {
        let event: Event = serde_json::from_str(
            r#"{"id":3,"name":"Dentist","date":"2024-06-01","time":"09:30","duration":45}"#,
        )
        .unwrap();

        assert_eq!(event.user_label(), "\u{2014}");
        assert_eq!(event.category_label(), "Other");
        assert_eq!(event.category_key(), "other");
        assert_eq!(event.time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn category_key_is_lowercase_and_leaves_label_alone() {
        let event = Event {
            id: 1,
            name: "Match".into(),
            user: Some("alice".into()),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            duration: 90,
            category: Some("Sports".into()),
            created_at: None,
        };

        assert_eq!(event.category_key(), "sports");
        assert_eq!(event.category_label(), "Sports");
    }

    #[test]
    fn input_serializes_time_without_seconds() {
        let input = EventInput {
            name: "Piano".into(),
            user: "bob".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            time: NaiveTime::from_hms_opt(17, 5, 0).unwrap(),
            duration: 30,
            category: "School".into(),
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["time"], "17:05");
        assert_eq!(json["date"], "2024-01-31");
        assert_eq!(json["duration"], 30);
    }

    #[test]
    fn created_event_accepts_wrapped_and_bare_bodies() {
        let bare = r#"{"id":7,"name":"Swim","user":"alice","date":"2024-06-02","time":"08:00","duration":60,"category":"Sports"}"#;
        let wrapped = format!(r#"{{"message":"Event added successfully","event":{bare}}}"#);

        let a: CreatedEvent = serde_json::from_str(bare).unwrap();
        let b: CreatedEvent = serde_json::from_str(&wrapped).unwrap();
        assert_eq!(a.into_event().id, 7);
        assert_eq!(b.into_event().id, 7);
    }

    #[test]
    fn time_parse_accepts_seconds() {
        assert_eq!(hh_mm::parse("07:15:00"), NaiveTime::from_hms_opt(7, 15, 0));
        assert_eq!(hh_mm::parse("7:15pm"), None);
    }
}
