//! Date picker
//!
//! Headless calendar navigation, selection and range highlighting, plus the
//! label formatting used for navigation announcements.

pub mod labels;
pub mod navigator;

pub use labels::{formatter_for, EnglishFormatter, KeyFormatter, LabelFormatter};
pub use navigator::{DateChange, DateNavigator, PickerOptions};
