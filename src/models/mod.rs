//! Core data models for daystep
//!
//! This module contains the data structures shared by the date picker and the
//! tutorial wizard: calendar months, highlight ranges, day modifiers, tokens
//! and build selections.

pub mod build;
pub mod day;
pub mod ids;
pub mod month;
pub mod range;
pub mod token;

pub use build::{BuildTool, OsFamily};
pub use day::DayMeta;
pub use ids::TokenId;
pub use month::{month_from_index, CalendarMonth};
pub use range::{DateRange, HighlightBoundary};
pub use token::{is_valid_token_format, GeneratedToken, TokenExpiry, TokenType, UserToken};
