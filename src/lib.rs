//! Terminal client for a shared family calendar served over a small REST API.

pub mod app;
pub mod calendar;
pub mod cli;
pub mod components;
pub mod config;
pub mod input;
pub mod logging;
pub mod theme;
pub mod tui;
pub mod ui;
