//! Calendar display formatting
//!
//! Renders a navigator's current month as a text grid, followed by the
//! navigation labels and the highlighted range.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::DayMeta;
use crate::picker::{DateNavigator, LabelFormatter};

const CELL_WIDTH: usize = 4;

/// Format the month grid with its navigation labels
pub fn format_calendar(
    navigator: &DateNavigator,
    week_start: Weekday,
    formatter: &dyn LabelFormatter,
) -> String {
    let month = navigator.current_month();
    let width = CELL_WIDTH * 7;
    let mut output = String::new();

    let title = format!("{} {}", month.month_name(), month.year());
    output.push_str(format!("{:^width$}", title, width = width).trim_end());
    output.push('\n');

    let mut weekday = week_start;
    for _ in 0..7 {
        output.push_str(&format!(" {:<2} ", &weekday.to_string()[..2]));
        weekday = weekday.succ();
    }
    output.push('\n');

    for week in navigator.visible_weeks(week_start) {
        let row: String = week
            .iter()
            .map(|day| format_day(*day, navigator.day_meta(*day)))
            .collect();
        output.push_str(row.trim_end());
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format!(
        "Previous: {}\n",
        navigator.previous_month_label(formatter)
    ));
    output.push_str(&format!("Next:     {}\n", navigator.next_month_label(formatter)));

    if let Some(value) = navigator.value() {
        output.push_str(&format!("Selected: {}\n", value));
    }
    if let Some(range) = navigator.highlighted() {
        output.push_str(&format!("Highlighted: {} .. {}\n", range.from, range.to));
    }

    output
}

/// One grid cell: `[17]` selected, `(17)` disabled, `*17*` highlighted
///
/// Days of neighbouring months are left blank.
pub fn format_day(day: NaiveDate, meta: DayMeta) -> String {
    if meta.outside {
        return " ".repeat(CELL_WIDTH);
    }

    let number = day.day();
    if meta.selected {
        format!("[{:>2}]", number)
    } else if meta.disabled {
        format!("({:>2})", number)
    } else if meta.highlighted {
        format!("*{:>2}*", number)
    } else {
        format!(" {:>2} ", number)
    }
}
