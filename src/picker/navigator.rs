//! Date picker state machine
//!
//! `DateNavigator` owns everything a calendar popover needs: the displayed
//! month, the selected value, popover visibility, selection bounds and the
//! hover-driven highlight. Each user event maps to one method; rendering only
//! reads state.

use chrono::{Datelike, Month, NaiveDate, Weekday};

use super::labels::{LabelFormatter, MONTH_NAVIGATION_KEY};
use crate::models::{CalendarMonth, DateRange, DayMeta, HighlightBoundary};

/// A change of the selected value, emitted by selection and reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateChange(pub Option<NaiveDate>);

impl DateChange {
    pub fn value(&self) -> Option<NaiveDate> {
        self.0
    }
}

/// Initial configuration of a date picker
#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
    /// Month shown first; defaults to the value's month, then today's
    pub current_month: Option<CalendarMonth>,
    /// Pre-selected value
    pub value: Option<NaiveDate>,
    /// Earliest selectable day (inclusive)
    pub min_date: Option<NaiveDate>,
    /// Latest selectable day (inclusive)
    pub max_date: Option<NaiveDate>,
    /// Fixed endpoint of the hover highlight
    pub highlight: Option<HighlightBoundary>,
}

impl PickerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_month(mut self, month: CalendarMonth) -> Self {
        self.current_month = Some(month);
        self
    }

    pub fn value(mut self, value: NaiveDate) -> Self {
        self.value = Some(value);
        self
    }

    pub fn min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    pub fn max_date(mut self, max_date: NaiveDate) -> Self {
        self.max_date = Some(max_date);
        self
    }

    pub fn highlight_from(mut self, from: NaiveDate) -> Self {
        self.highlight = Some(HighlightBoundary::From(from));
        self
    }

    pub fn highlight_to(mut self, to: NaiveDate) -> Self {
        self.highlight = Some(HighlightBoundary::To(to));
        self
    }
}

/// Most years the year selector reaches back from today's year
pub const MAX_YEAR_SPAN: u32 = 200;

/// Calendar navigation and selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateNavigator {
    current_month: CalendarMonth,
    value: Option<NaiveDate>,
    open: bool,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    highlight: Option<HighlightBoundary>,
    hover: Option<NaiveDate>,
}

impl DateNavigator {
    /// Create a closed picker from its options
    ///
    /// `today` decides the initial month when neither a month nor a value is
    /// configured.
    pub fn new(options: PickerOptions, today: NaiveDate) -> Self {
        let current_month = options
            .current_month
            .or_else(|| options.value.map(CalendarMonth::from_date))
            .unwrap_or_else(|| CalendarMonth::from_date(today));

        Self {
            current_month,
            value: options.value,
            open: false,
            min_date: options.min_date,
            max_date: options.max_date,
            highlight: options.highlight,
            hover: None,
        }
    }

    pub fn current_month(&self) -> CalendarMonth {
        self.current_month
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn hover(&self) -> Option<NaiveDate> {
        self.hover
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max_date
    }

    pub fn highlight_boundary(&self) -> Option<HighlightBoundary> {
        self.highlight
    }

    // Navigation is never bounded by min/max; only selection is.

    pub fn previous_month(&mut self) {
        self.current_month = self.current_month.previous();
    }

    pub fn next_month(&mut self) {
        self.current_month = self.current_month.next();
    }

    pub fn set_month(&mut self, month: Month) {
        self.current_month = self.current_month.with_month(month);
    }

    pub fn set_year(&mut self, year: i32) {
        self.current_month = self.current_month.with_year(year);
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.hover = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Handle a click on a day cell
    ///
    /// Disabled days are ignored entirely: no change is emitted and the
    /// popover stays as it is.
    pub fn on_day_click(&mut self, day: NaiveDate, meta: DayMeta) -> Option<DateChange> {
        if meta.disabled {
            return None;
        }
        self.value = Some(day);
        self.close();
        Some(DateChange(Some(day)))
    }

    /// Clear the selected value
    pub fn on_reset(&mut self) -> DateChange {
        self.value = None;
        DateChange(None)
    }

    /// Track the day under the pointer while the popover is open
    pub fn on_day_hover(&mut self, day: NaiveDate, _meta: DayMeta) {
        if self.open {
            self.hover = Some(day);
        }
    }

    /// The pointer left the grid
    pub fn on_day_leave(&mut self) {
        self.hover = None;
    }

    /// The range between the configured boundary and the hovered day
    pub fn highlighted(&self) -> Option<DateRange> {
        let boundary = self.highlight?;
        let hover = self.hover?;
        Some(boundary.range_with(hover))
    }

    /// Whether `day` can be selected
    pub fn is_disabled(&self, day: NaiveDate) -> bool {
        self.min_date.is_some_and(|min| day < min) || self.max_date.is_some_and(|max| day > max)
    }

    /// Modifiers of a day cell in the current view
    pub fn day_meta(&self, day: NaiveDate) -> DayMeta {
        DayMeta {
            disabled: self.is_disabled(day),
            selected: self.value == Some(day),
            outside: !self.current_month.contains(day),
            highlighted: self.highlighted().is_some_and(|range| range.covers(day)),
        }
    }

    /// Label announcing the month `previous_month` would show
    pub fn previous_month_label(&self, formatter: &dyn LabelFormatter) -> String {
        month_label(formatter, self.current_month.previous())
    }

    /// Label announcing the month `next_month` would show
    pub fn next_month_label(&self, formatter: &dyn LabelFormatter) -> String {
        month_label(formatter, self.current_month.next())
    }

    /// Years offered by the year selector
    ///
    /// The `span` years before `today`'s year through `today`'s year, cut to
    /// the selection bounds. The displayed year is always included. `span` is
    /// capped at `MAX_YEAR_SPAN`.
    pub fn year_options(&self, today: NaiveDate, span: u32) -> Vec<i32> {
        let last = today.year();
        let span = i32::try_from(span.min(MAX_YEAR_SPAN)).unwrap_or(0);
        let first = last.saturating_sub(span);
        let low = self.min_date.map_or(first, |min| first.max(min.year()));
        let high = self.max_date.map_or(last, |max| last.min(max.year()));

        let mut years: Vec<i32> = (low..=high).collect();
        let shown = self.current_month.year();
        if !years.contains(&shown) {
            years.push(shown);
            years.sort_unstable();
        }
        years
    }

    /// The visible grid for the current month
    pub fn visible_weeks(&self, week_start: Weekday) -> Vec<[NaiveDate; 7]> {
        self.current_month.weeks(week_start)
    }
}

fn month_label(formatter: &dyn LabelFormatter, month: CalendarMonth) -> String {
    let year = month.year().to_string();
    formatter.format_label(MONTH_NAVIGATION_KEY, &[month.month_name(), &year])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::month_from_index;
    use crate::picker::labels::KeyFormatter;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn date_a() -> NaiveDate {
        date(2018, 1, 17)
    }

    fn date_b() -> NaiveDate {
        date(2018, 2, 5)
    }

    fn navigator(options: PickerOptions) -> DateNavigator {
        let options = PickerOptions {
            current_month: Some(CalendarMonth::from_date(date_a())),
            min_date: Some(date_a()),
            max_date: Some(date_b()),
            ..options
        };
        DateNavigator::new(options, date(2018, 6, 1))
    }

    #[test]
    fn test_initial_month_fallbacks() {
        let today = date(2018, 6, 1);
        let from_value = DateNavigator::new(PickerOptions::new().value(date_b()), today);
        assert_eq!(from_value.current_month(), CalendarMonth::from_date(date_b()));

        let from_today = DateNavigator::new(PickerOptions::new(), today);
        assert_eq!(from_today.current_month(), CalendarMonth::from_date(today));
        assert!(!from_today.is_open());
    }

    #[test]
    fn test_change_current_month() {
        let mut nav = navigator(PickerOptions::new());
        let start = CalendarMonth::from_date(date_a());
        assert_eq!(nav.current_month(), start);

        nav.previous_month();
        assert_eq!(nav.current_month(), start.previous());
        assert_eq!(nav.current_month().to_string(), "2017-12");

        nav.next_month();
        assert_eq!(nav.current_month(), start);

        nav.set_month(month_from_index(5).unwrap());
        assert_eq!(nav.current_month().to_string(), "2018-06");

        nav.set_year(2015);
        assert_eq!(nav.current_month().to_string(), "2015-06");
    }

    #[test]
    fn test_navigation_ignores_bounds() {
        let mut nav = navigator(PickerOptions::new());
        for _ in 0..3 {
            nav.previous_month();
        }
        assert_eq!(nav.current_month().to_string(), "2017-10");
    }

    #[test]
    fn test_disabled_day_click_is_ignored() {
        let mut nav = navigator(PickerOptions::new());
        nav.open();

        assert_eq!(nav.on_day_click(date_a(), DayMeta::disabled()), None);
        assert!(nav.is_open());
        assert_eq!(nav.value(), None);
    }

    #[test]
    fn test_day_click_selects_and_closes() {
        let mut nav = navigator(PickerOptions::new());
        nav.open();

        let change = nav.on_day_click(date_a(), DayMeta::default());
        assert_eq!(change, Some(DateChange(Some(date_a()))));
        assert_eq!(nav.value(), Some(date_a()));
        assert!(!nav.is_open());

        assert_eq!(nav.on_reset(), DateChange(None));
        assert_eq!(nav.value(), None);
    }

    #[test]
    fn test_reset_without_selection_still_emits() {
        let mut nav = navigator(PickerOptions::new());
        assert_eq!(nav.on_reset().value(), None);
    }

    #[test]
    fn test_highlight_from_range() {
        let mut nav = navigator(PickerOptions::new().highlight_from(date_a()));
        nav.open();

        let hovered = date(2018, 1, 20);
        nav.on_day_hover(hovered, DayMeta::default());
        assert_eq!(
            nav.highlighted(),
            Some(DateRange {
                from: date_a(),
                to: hovered
            })
        );
    }

    #[test]
    fn test_highlight_to_range() {
        let mut nav = navigator(PickerOptions::new().highlight_to(date_b()));
        assert_eq!(nav.highlight_boundary(), Some(HighlightBoundary::To(date_b())));
        nav.open();

        let hovered = date(2018, 1, 31);
        nav.on_day_hover(hovered, DayMeta::default());
        assert_eq!(
            nav.highlighted(),
            Some(DateRange {
                from: hovered,
                to: date_b()
            })
        );
    }

    #[test]
    fn test_hover_requires_open_popover() {
        let mut nav = navigator(PickerOptions::new().highlight_from(date_a()));
        nav.on_day_hover(date(2018, 1, 20), DayMeta::default());
        assert_eq!(nav.hover(), None);
        assert_eq!(nav.highlighted(), None);
    }

    #[test]
    fn test_no_boundary_no_highlight() {
        let mut nav = navigator(PickerOptions::new());
        nav.open();
        nav.on_day_hover(date(2018, 1, 20), DayMeta::default());
        assert_eq!(nav.hover(), Some(date(2018, 1, 20)));
        assert_eq!(nav.highlighted(), None);
    }

    #[test]
    fn test_leave_and_close_clear_hover() {
        let mut nav = navigator(PickerOptions::new().highlight_from(date_a()));
        nav.open();
        nav.on_day_hover(date(2018, 1, 20), DayMeta::default());
        nav.on_day_leave();
        assert_eq!(nav.highlighted(), None);

        nav.on_day_hover(date(2018, 1, 21), DayMeta::default());
        nav.toggle();
        assert!(!nav.is_open());
        assert_eq!(nav.hover(), None);
    }

    #[test]
    fn test_day_meta() {
        let mut nav = navigator(PickerOptions::new().highlight_from(date_a()));
        nav.open();
        nav.on_day_hover(date(2018, 1, 20), DayMeta::default());
        nav.on_day_click(date(2018, 1, 18), DayMeta::default());

        let before_min = nav.day_meta(date(2018, 1, 16));
        assert!(before_min.disabled);

        let selected = nav.day_meta(date(2018, 1, 18));
        assert!(selected.selected);
        assert!(!selected.disabled);
        assert!(!selected.outside);

        assert!(nav.day_meta(date(2018, 2, 1)).outside);
        assert!(nav.day_meta(date(2018, 2, 6)).disabled);
    }

    #[test]
    fn test_day_meta_highlighted() {
        let mut nav = navigator(PickerOptions::new().highlight_from(date_a()));
        nav.open();
        nav.on_day_hover(date(2018, 1, 20), DayMeta::default());

        assert!(nav.day_meta(date(2018, 1, 17)).highlighted);
        assert!(nav.day_meta(date(2018, 1, 19)).highlighted);
        assert!(!nav.day_meta(date(2018, 1, 21)).highlighted);
    }

    #[test]
    fn test_navigation_labels() {
        let mut nav = navigator(PickerOptions::new());
        assert_eq!(
            nav.previous_month_label(&KeyFormatter),
            "show_month_x_of_year_y.December.2017"
        );
        assert_eq!(
            nav.next_month_label(&KeyFormatter),
            "show_month_x_of_year_y.February.2018"
        );

        nav.set_month(month_from_index(11).unwrap());
        assert_eq!(
            nav.previous_month_label(&KeyFormatter),
            "show_month_x_of_year_y.November.2018"
        );
        assert_eq!(
            nav.next_month_label(&KeyFormatter),
            "show_month_x_of_year_y.January.2019"
        );
        assert_eq!(nav.current_month().to_string(), "2018-12");
    }

    #[test]
    fn test_year_options() {
        let nav = DateNavigator::new(
            PickerOptions::new().current_month(CalendarMonth::from_date(date_a())),
            date(2018, 6, 1),
        );
        let years = nav.year_options(date(2018, 6, 1), 10);
        assert_eq!(years.first(), Some(&2008));
        assert_eq!(years.last(), Some(&2018));
        assert_eq!(years.len(), 11);
    }

    #[test]
    fn test_year_options_respect_bounds() {
        let nav = navigator(PickerOptions::new());
        assert_eq!(nav.year_options(date(2020, 6, 1), 10), vec![2018]);

        let mut far = navigator(PickerOptions::new());
        far.set_year(2001);
        assert_eq!(far.year_options(date(2020, 6, 1), 10), vec![2001, 2018]);
    }

    #[test]
    fn test_year_options_cap_huge_span() {
        let today = date(2018, 6, 1);
        let nav = DateNavigator::new(PickerOptions::new(), today);

        let years = nav.year_options(today, u32::MAX);
        assert_eq!(years.len(), MAX_YEAR_SPAN as usize + 1);
        assert_eq!(years.first(), Some(&(2018 - MAX_YEAR_SPAN as i32)));
        assert_eq!(years.last(), Some(&2018));

        assert_eq!(nav.year_options(today, 1_000_000_000), years);
    }
}
