//! Display formatting for terminal output
//!
//! Plain-text renderings of the calendar grid and token tables used by the
//! non-interactive commands.

pub mod calendar;
pub mod token;

pub use calendar::{format_calendar, format_day};
pub use token::{format_token_created, format_token_list};
