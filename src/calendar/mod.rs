pub mod board;
pub mod client;
pub mod error;
pub mod event;
pub mod timing;

pub use board::{build_board, Board, EventRow, FilterMode, Highlight, Tab, ViewState};
pub use client::{EventsApi, HttpClient};
pub use error::ApiError;
pub use event::{Event, EventId, EventInput};
pub use timing::{classify_timing, is_weekend, sort_chronological, SortOrder, Timing};
