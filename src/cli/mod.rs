//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the library.

pub mod args;
pub mod audit;
pub mod calendar;
pub mod pick;
pub mod token;
pub mod tutorial;

pub use args::PickerArgs;
pub use audit::{handle_audit_command, AuditArgs};
pub use calendar::{handle_calendar_command, CalendarArgs};
pub use pick::{handle_pick_command, PickArgs};
pub use token::{handle_token_command, TokenCommands};
pub use tutorial::{handle_tutorial_command, TutorialArgs};

use crate::audit::AuditLogger;
use crate::config::{DaystepPaths, Settings};

/// The audit logger, when auditing is enabled
pub fn audit_logger(paths: &DaystepPaths, settings: &Settings) -> Option<AuditLogger> {
    settings
        .audit_enabled
        .then(|| AuditLogger::new(paths.audit_log()))
}
