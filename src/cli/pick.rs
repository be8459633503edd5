//! Interactive date picking

use anyhow::Result;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use clap::Args;

use super::args::PickerArgs;
use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::picker::{formatter_for, DateNavigator};
use crate::tui::{run_picker, PickerApp};

/// Arguments of `daystep pick`
#[derive(Args, Debug)]
pub struct PickArgs {
    #[command(flatten)]
    pub picker: PickerArgs,
}

/// Open the calendar popover and print the chosen day
pub fn handle_pick_command(
    args: PickArgs,
    settings: &Settings,
    audit: Option<AuditLogger>,
    today: NaiveDate,
) -> Result<()> {
    let navigator = DateNavigator::new(args.picker.to_options()?, today);
    let formatter = formatter_for(settings.label_style);

    let mut app = PickerApp::new(navigator, settings, formatter.as_ref(), today);
    if let Some(logger) = audit {
        app = app.with_audit(logger);
    }

    run_picker(&mut app)?;

    if let Some(value) = app.result() {
        println!("{}", format_value(value, &settings.date_format));
    }

    Ok(())
}

/// Format with the configured strftime pattern, falling back to ISO 8601
fn format_value(value: NaiveDate, date_format: &str) -> String {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return value.to_string();
    }
    value.format(date_format).to_string()
}
