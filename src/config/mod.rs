//! Configuration module for daystep
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DaystepPaths;
pub use settings::{FirstDayOfWeek, LabelStyle, Settings};
