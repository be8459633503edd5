//! Non-interactive calendar rendering

use chrono::NaiveDate;
use clap::Args;

use super::args::PickerArgs;
use crate::config::Settings;
use crate::display::format_calendar;
use crate::error::DaystepResult;
use crate::picker::{formatter_for, DateNavigator};

/// Arguments of `daystep calendar`
#[derive(Args, Debug)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub picker: PickerArgs,

    /// Day under the pointer, for the highlight range (YYYY-MM-DD)
    #[arg(long)]
    pub hover: Option<NaiveDate>,
}

/// Print the month grid, navigation labels and highlighted range
pub fn handle_calendar_command(
    args: CalendarArgs,
    settings: &Settings,
    today: NaiveDate,
) -> DaystepResult<()> {
    let mut navigator = DateNavigator::new(args.picker.to_options()?, today);
    navigator.open();
    if let Some(day) = args.hover {
        navigator.on_day_hover(day, navigator.day_meta(day));
    }

    let formatter = formatter_for(settings.label_style);
    print!(
        "{}",
        format_calendar(
            &navigator,
            settings.first_day_of_week.weekday(),
            formatter.as_ref()
        )
    );

    Ok(())
}
