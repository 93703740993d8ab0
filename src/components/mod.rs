pub mod card_grid;
pub mod confirm_dialog;
pub mod event_form;
pub mod event_list;
pub mod history_list;
pub mod status_bar;

pub use card_grid::CardGrid;
pub use confirm_dialog::ConfirmDialog;
pub use event_form::EventForm;
pub use event_list::EventList;
pub use history_list::HistoryList;
pub use status_bar::StatusBar;
