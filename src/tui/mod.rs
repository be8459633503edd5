//! Terminal User Interface module
//!
//! An interactive calendar popover built on ratatui for `daystep pick`.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::PickerApp;
pub use terminal::run_picker;
