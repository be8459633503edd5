//! daystep - calendar date picker and onboarding tutorial for the terminal
//!
//! This library provides a headless date picker state machine with range
//! highlighting and bounded selection, and a linear step wizard that walks a
//! user through providing an analysis token and choosing a build tool.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Calendar months, ranges, day modifiers, tokens and build tools
//! - `picker`: Date navigation state machine and label formatting
//! - `wizard`: Step flow, tutorial steps and the prompt session
//! - `tokens`: Token collaborator trait with memory and file-backed stores
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `display`: Plain-text output formatting
//! - `tui`: Interactive calendar popover
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use daystep::picker::{DateNavigator, PickerOptions};
//!
//! let mut navigator = DateNavigator::new(PickerOptions::new(), today);
//! navigator.open();
//! let change = navigator.on_day_click(today, navigator.day_meta(today));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod picker;
pub mod storage;
pub mod tokens;
pub mod tui;
pub mod wizard;

pub use error::DaystepError;
