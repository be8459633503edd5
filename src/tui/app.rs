//! Application state for the picker TUI
//!
//! Wraps a `DateNavigator` with a day cursor. The cursor doubles as the
//! hover point, so moving it drives the highlight range.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::audit::{Action, AuditEntry, AuditLogger, Source};
use crate::config::Settings;
use crate::error::DaystepResult;
use crate::models::CalendarMonth;
use crate::picker::{DateChange, DateNavigator, LabelFormatter};

/// Main application state
pub struct PickerApp<'a> {
    pub navigator: DateNavigator,

    /// Day under the cursor, always inside the displayed month
    pub cursor: NaiveDate,

    pub week_start: Weekday,

    pub formatter: &'a dyn LabelFormatter,

    pub today: NaiveDate,

    /// Years the year keys cycle through
    pub year_span: u32,

    pub should_quit: bool,

    pub status_message: Option<String>,

    /// Last change emitted by a click or a reset
    pub last_change: Option<DateChange>,

    audit: Option<AuditLogger>,
}

impl<'a> PickerApp<'a> {
    /// Open the popover with the cursor on the selected day, today, or the
    /// first of the displayed month
    pub fn new(
        mut navigator: DateNavigator,
        settings: &Settings,
        formatter: &'a dyn LabelFormatter,
        today: NaiveDate,
    ) -> Self {
        navigator.open();
        let month = navigator.current_month();
        let cursor = [navigator.value(), Some(today)]
            .into_iter()
            .flatten()
            .find(|day| month.contains(*day))
            .unwrap_or_else(|| month.first_day());

        let mut app = Self {
            navigator,
            cursor,
            week_start: settings.first_day_of_week.weekday(),
            formatter,
            today,
            year_span: settings.year_span,
            should_quit: false,
            status_message: None,
            last_change: None,
            audit: None,
        };
        app.hover_cursor();
        app
    }

    /// Record selections and navigation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Move the cursor by `days`, following it into neighbouring months
    pub fn move_cursor(&mut self, days: i64) -> DaystepResult<()> {
        let Some(target) = self.cursor.checked_add_signed(Duration::days(days)) else {
            return Ok(());
        };
        let before = self.navigator.current_month();
        let month = CalendarMonth::from_date(target);
        if month != before {
            self.navigator.set_year(month.year());
            self.navigator.set_month(month.month());
            if self.navigator.current_month() != month {
                // clamped at the supported year range
                return Ok(());
            }
        }
        self.cursor = target;
        self.hover_cursor();
        self.record_navigation(before)
    }

    pub fn previous_month(&mut self) -> DaystepResult<()> {
        let before = self.navigator.current_month();
        self.navigator.previous_month();
        self.after_month_change(before)
    }

    pub fn next_month(&mut self) -> DaystepResult<()> {
        let before = self.navigator.current_month();
        self.navigator.next_month();
        self.after_month_change(before)
    }

    /// Step to the neighbouring entry of the year selector
    ///
    /// `forward` picks the next later year.
    pub fn step_year(&mut self, forward: bool) -> DaystepResult<()> {
        let years = self.navigator.year_options(self.today, self.year_span);
        let shown = self.navigator.current_month().year();
        let target = if forward {
            years.iter().copied().find(|y| *y > shown)
        } else {
            years.iter().rev().copied().find(|y| *y < shown)
        };

        match target {
            Some(year) => {
                let before = self.navigator.current_month();
                self.navigator.set_year(year);
                self.after_month_change(before)
            }
            None => {
                let side = if forward { "after" } else { "before" };
                self.status_message = Some(format!("No year {} {}", side, shown));
                Ok(())
            }
        }
    }

    /// Click the day under the cursor
    pub fn select(&mut self) -> DaystepResult<()> {
        let meta = self.navigator.day_meta(self.cursor);
        match self.navigator.on_day_click(self.cursor, meta) {
            Some(change) => {
                self.last_change = Some(change);
                self.record(Action::Select, self.cursor.to_string())?;
                self.should_quit = true;
            }
            None => {
                self.status_message = Some(format!("{} is not selectable", self.cursor));
            }
        }
        Ok(())
    }

    /// Clear the selected value
    pub fn reset(&mut self) -> DaystepResult<()> {
        self.last_change = Some(self.navigator.on_reset());
        self.status_message = Some("Selection cleared".to_string());
        self.record(Action::Reset, "value")
    }

    pub fn quit(&mut self) {
        self.navigator.close();
        self.should_quit = true;
    }

    /// The value to report when the picker exits
    pub fn result(&self) -> Option<NaiveDate> {
        self.navigator.value()
    }

    fn after_month_change(&mut self, before: CalendarMonth) -> DaystepResult<()> {
        let month = self.navigator.current_month();
        let day = self.cursor.day().min(month.days_in_month());
        self.cursor = month.first_day() + Duration::days(i64::from(day) - 1);
        self.hover_cursor();
        self.record_navigation(before)
    }

    fn hover_cursor(&mut self) {
        let meta = self.navigator.day_meta(self.cursor);
        self.navigator.on_day_hover(self.cursor, meta);
    }

    fn record_navigation(&self, before: CalendarMonth) -> DaystepResult<()> {
        let month = self.navigator.current_month();
        if month == before {
            return Ok(());
        }
        self.record(Action::Navigate, month.to_string())
    }

    fn record(&self, action: Action, subject: impl Into<String>) -> DaystepResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::new(Source::Picker, action, subject)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{KeyFormatter, PickerOptions};
    use chrono::Month;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app(options: PickerOptions) -> PickerApp<'static> {
        let today = date(2018, 1, 17);
        PickerApp::new(
            DateNavigator::new(options, today),
            &Settings::default(),
            &KeyFormatter,
            today,
        )
    }

    #[test]
    fn test_cursor_starts_on_value() {
        let app = app(PickerOptions::new().value(date(2018, 1, 5)));
        assert!(app.navigator.is_open());
        assert_eq!(app.cursor, date(2018, 1, 5));
        assert_eq!(app.navigator.hover(), Some(date(2018, 1, 5)));
    }

    #[test]
    fn test_cursor_starts_on_today_or_first_day() {
        assert_eq!(app(PickerOptions::new()).cursor, date(2018, 1, 17));

        let march = PickerOptions::new().current_month(CalendarMonth::new(2018, Month::March));
        assert_eq!(app(march).cursor, date(2018, 3, 1));
    }

    #[test]
    fn test_cursor_crosses_month() {
        let mut app = app(PickerOptions::new().value(date(2018, 1, 30)));
        app.move_cursor(7).unwrap();
        assert_eq!(app.cursor, date(2018, 2, 6));
        assert_eq!(app.navigator.current_month(), CalendarMonth::new(2018, Month::February));

        app.move_cursor(-7).unwrap();
        assert_eq!(app.navigator.current_month(), CalendarMonth::new(2018, Month::January));
    }

    #[test]
    fn test_month_change_clamps_cursor_day() {
        let mut app = app(PickerOptions::new().value(date(2018, 1, 31)));
        app.next_month().unwrap();
        assert_eq!(app.cursor, date(2018, 2, 28));
        app.previous_month().unwrap();
        assert_eq!(app.cursor, date(2018, 1, 28));
    }

    #[test]
    fn test_cursor_drives_highlight() {
        let mut app = app(PickerOptions::new().highlight_to(date(2018, 1, 20)));
        app.move_cursor(-2).unwrap();
        let range = app.navigator.highlighted().unwrap();
        assert_eq!(range.from, date(2018, 1, 15));
        assert_eq!(range.to, date(2018, 1, 20));
    }

    #[test]
    fn test_select_quits_with_value() {
        let mut app = app(PickerOptions::new());
        app.select().unwrap();
        assert!(app.should_quit);
        assert_eq!(app.result(), Some(date(2018, 1, 17)));
        assert_eq!(app.last_change, Some(DateChange(Some(date(2018, 1, 17)))));
    }

    #[test]
    fn test_disabled_select_is_ignored() {
        let mut app = app(PickerOptions::new().max_date(date(2018, 1, 10)));
        app.select().unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.result(), None);
        assert_eq!(app.last_change, None);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_reset_clears_value() {
        let mut app = app(PickerOptions::new().value(date(2018, 1, 5)));
        app.reset().unwrap();
        assert_eq!(app.result(), None);
        assert_eq!(app.last_change, Some(DateChange(None)));
    }

    #[test]
    fn test_year_steps_follow_options() {
        let mut app = app(PickerOptions::new().min_date(date(2017, 6, 1)));
        app.step_year(true).unwrap();
        assert_eq!(app.navigator.current_month().year(), 2018);
        assert!(app.status_message.is_some());

        app.step_year(false).unwrap();
        assert_eq!(app.navigator.current_month().year(), 2017);
        app.step_year(false).unwrap();
        assert_eq!(app.navigator.current_month().year(), 2017);
    }

    #[test]
    fn test_navigation_and_selection_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut app = app(PickerOptions::new()).with_audit(logger.clone());

        app.next_month().unwrap();
        app.move_cursor(1).unwrap();
        app.select().unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, Action::Navigate);
        assert_eq!(entries[0].subject, "2018-02");
        assert_eq!(entries[1].action, Action::Select);
        assert_eq!(entries[1].subject, "2018-02-18");
    }
}
