//! Pure view model: turns the cached events and the view flags into the rows
//! the terminal draws. Nothing here touches the terminal or the network.

use chrono::{NaiveDate, NaiveTime};

use super::event::{Event, EventId};
use super::timing::{self, SortOrder, Timing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    All,
    Mine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    List,
    Cards,
}

/// View flags owned by the app. Nothing here survives a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub current_user: Option<String>,
    pub filter_mine: bool,
    /// `None` until the user picks a tab; both views are shown until then.
    pub active_tab: Option<Tab>,
}

impl ViewState {
    pub fn filter_mode(&self) -> FilterMode {
        if self.filter_mine {
            FilterMode::Mine
        } else {
            FilterMode::All
        }
    }

    pub fn shows_list(&self) -> bool {
        self.active_tab != Some(Tab::Cards)
    }

    pub fn shows_cards(&self) -> bool {
        self.active_tab != Some(Tab::List)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Today,
    Tomorrow,
    Weekend,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub id: EventId,
    pub name: String,
    pub category: String,
    pub category_key: String,
    pub user: String,
    pub date: NaiveDate,
    pub date_label: String,
    pub time: NaiveTime,
    pub duration: u32,
    pub timing: Option<Timing>,
    pub weekend: bool,
}

impl EventRow {
    fn new(event: &Event, timing: Option<Timing>) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            category: event.category_label().to_string(),
            category_key: event.category_key(),
            user: event.user_label().to_string(),
            date: event.date,
            date_label: format_date(event.date),
            time: event.time,
            duration: event.duration,
            timing,
            weekend: timing::is_weekend(event.date),
        }
    }

    /// Timing wins over the weekend highlight.
    pub fn highlight(&self) -> Highlight {
        match (self.timing, self.weekend) {
            (Some(Timing::Today), _) => Highlight::Today,
            (Some(Timing::Tomorrow), _) => Highlight::Tomorrow,
            (None, true) => Highlight::Weekend,
            (None, false) => Highlight::None,
        }
    }

    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Upcoming events, soonest first. Shared by the list and the cards.
    pub upcoming: Vec<EventRow>,
    /// Past events, most recent first.
    pub history: Vec<EventRow>,
}

impl Board {
    /// Ids in on-screen order: upcoming, then history.
    pub fn visible_ids(&self) -> Vec<EventId> {
        self.upcoming
            .iter()
            .chain(self.history.iter())
            .map(|row| row.id)
            .collect()
    }
}

pub fn build_board(events: &[Event], view: &ViewState, today: NaiveDate) -> Board {
    let (upcoming, past) = timing::partition(events, today);
    let user = view.current_user.as_deref();

    let mut upcoming = timing::filter_mine(upcoming, view.filter_mine, user);
    let mut past = timing::filter_mine(past, view.filter_mine, user);

    timing::sort_chronological(&mut upcoming, SortOrder::Ascending);
    timing::sort_chronological(&mut past, SortOrder::Descending);

    Board {
        upcoming: upcoming
            .into_iter()
            .map(|event| EventRow::new(event, timing::classify_timing(event.date, today)))
            .collect(),
        history: past.into_iter().map(|event| EventRow::new(event, None)).collect(),
    }
}

/// "Sat, Jun 1, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: u64, day: NaiveDate, time: &str, user: Option<&str>) -> Event {
        Event {
            id,
            name: format!("event {id}"),
            user: user.map(str::to_string),
            date: day,
            time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            duration: 30,
            category: Some("Family".into()),
            created_at: None,
        }
    }

    fn fixture() -> Vec<Event> {
        vec![
            event(1, date(2024, 6, 5), "10:00", Some("alice")),
            event(2, date(2024, 6, 3), "18:00", Some("bob")),
            event(3, date(2024, 6, 4), "07:30", Some("alice")),
            event(4, date(2024, 5, 20), "12:00", Some("bob")),
            event(5, date(2024, 6, 1), "09:00", Some("alice")),
            event(6, date(2024, 6, 3), "08:00", None),
        ]
    }

    #[test]
    fn upcoming_ascending_history_descending() {
        let board = build_board(&fixture(), &ViewState::default(), date(2024, 6, 3));

        let upcoming: Vec<_> = board.upcoming.iter().map(|r| r.id).collect();
        let history: Vec<_> = board.history.iter().map(|r| r.id).collect();
        assert_eq!(upcoming, vec![6, 2, 3, 1]);
        assert_eq!(history, vec![5, 4]);
        assert_eq!(board.visible_ids(), vec![6, 2, 3, 1, 5, 4]);
    }

    #[test]
    fn badges_and_highlights() {
        let board = build_board(&fixture(), &ViewState::default(), date(2024, 6, 3));

        let row = |id| board.upcoming.iter().find(|r| r.id == id).unwrap();
        assert_eq!(row(2).timing, Some(Timing::Today));
        assert_eq!(row(2).highlight(), Highlight::Today);
        assert_eq!(row(3).highlight(), Highlight::Tomorrow);
        assert_eq!(row(1).highlight(), Highlight::None);
        assert_eq!(row(6).user, "\u{2014}");

        // 2024-06-01 is a Saturday; history never gets timing badges
        let saturday = &board.history[0];
        assert_eq!(saturday.id, 5);
        assert_eq!(saturday.timing, None);
        assert!(saturday.weekend);
        assert_eq!(saturday.highlight(), Highlight::Weekend);
        assert_eq!(saturday.date_label, "Sat, Jun 1, 2024");
    }

    #[test]
    fn timing_beats_weekend() {
        let saturday = date(2024, 6, 1);
        let events = vec![event(1, saturday, "10:00", None)];
        let board = build_board(&events, &ViewState::default(), saturday);
        assert!(board.upcoming[0].weekend);
        assert_eq!(board.upcoming[0].highlight(), Highlight::Today);
    }

    #[test]
    fn mine_filter_applies_to_both_partitions() {
        let view = ViewState {
            current_user: Some("alice".into()),
            filter_mine: true,
            active_tab: None,
        };
        let board = build_board(&fixture(), &view, date(2024, 6, 3));

        assert_eq!(board.upcoming.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(board.history.iter().map(|r| r.id).collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn tabs_default_to_both() {
        let mut view = ViewState::default();
        assert!(view.shows_list() && view.shows_cards());
        view.active_tab = Some(Tab::Cards);
        assert!(!view.shows_list() && view.shows_cards());
        view.active_tab = Some(Tab::List);
        assert!(view.shows_list() && !view.shows_cards());
    }
}
