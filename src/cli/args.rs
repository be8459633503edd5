//! Picker arguments shared by `pick` and `calendar`

use chrono::NaiveDate;
use clap::Args;

use crate::error::DaystepResult;
use crate::models::CalendarMonth;
use crate::picker::PickerOptions;

/// Initial picker configuration from the command line
#[derive(Args, Debug, Clone, Default)]
pub struct PickerArgs {
    /// Month to show first (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Pre-selected day (YYYY-MM-DD)
    #[arg(long)]
    pub value: Option<NaiveDate>,

    /// Earliest selectable day (YYYY-MM-DD)
    #[arg(long)]
    pub min: Option<NaiveDate>,

    /// Latest selectable day (YYYY-MM-DD)
    #[arg(long)]
    pub max: Option<NaiveDate>,

    /// Highlight from this day to the hovered day
    #[arg(long, conflicts_with = "highlight_to")]
    pub highlight_from: Option<NaiveDate>,

    /// Highlight from the hovered day to this day
    #[arg(long)]
    pub highlight_to: Option<NaiveDate>,
}

impl PickerArgs {
    pub fn to_options(&self) -> DaystepResult<PickerOptions> {
        let mut options = PickerOptions::new();
        if let Some(month) = &self.month {
            options = options.current_month(CalendarMonth::parse(month)?);
        }
        if let Some(value) = self.value {
            options = options.value(value);
        }
        if let Some(min) = self.min {
            options = options.min_date(min);
        }
        if let Some(max) = self.max {
            options = options.max_date(max);
        }
        if let Some(from) = self.highlight_from {
            options = options.highlight_from(from);
        }
        if let Some(to) = self.highlight_to {
            options = options.highlight_to(to);
        }
        Ok(options)
    }
}
