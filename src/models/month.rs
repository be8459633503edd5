//! Calendar month representation
//!
//! A year plus a month, with the day-of-month implicitly normalised to 1.
//! This is the unit the date picker navigates in.

use chrono::{Datelike, Duration, Month, NaiveDate, Weekday};
use std::fmt;

use crate::error::{DaystepError, DaystepResult};

/// Earliest year chrono can represent a full month for
pub fn min_year() -> i32 {
    NaiveDate::MIN.year()
}

/// Latest year chrono can represent a full month for
pub fn max_year() -> i32 {
    NaiveDate::MAX.year()
}

/// A calendar month (e.g., "2018-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    year: i32,
    month: Month,
}

impl CalendarMonth {
    /// Create a month, clamping the year into chrono's date range
    pub fn new(year: i32, month: Month) -> Self {
        Self {
            year: year.clamp(min_year(), max_year()),
            month,
        }
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), month_from_number(date.month()))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// 0-based month index (January = 0), as used by the month selector
    pub fn month_index(&self) -> u32 {
        self.month.number_from_month() - 1
    }

    /// English month name ("January")
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(
            self.year,
            self.month.number_from_month(),
            self.days_in_month(),
        )
        .unwrap_or(NaiveDate::MIN)
    }

    /// Number of days in this month
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            Month::February if is_leap_year(self.year) => 29,
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month.number_from_month()
    }

    /// The month before this one
    ///
    /// January of `min_year()` has no predecessor chrono can represent and
    /// returns itself.
    pub fn previous(&self) -> Self {
        if self.month == Month::January {
            if self.year == min_year() {
                return *self;
            }
            Self::new(self.year - 1, Month::December)
        } else {
            Self::new(self.year, self.month.pred())
        }
    }

    /// The month after this one
    ///
    /// December of `max_year()` returns itself.
    pub fn next(&self) -> Self {
        if self.month == Month::December {
            if self.year == max_year() {
                return *self;
            }
            Self::new(self.year + 1, Month::January)
        } else {
            Self::new(self.year, self.month.succ())
        }
    }

    /// Same year, different month
    pub fn with_month(&self, month: Month) -> Self {
        Self::new(self.year, month)
    }

    /// Same month, different year
    pub fn with_year(&self, year: i32) -> Self {
        Self::new(year, self.month)
    }

    /// The weeks shown for this month, padded with neighbouring days
    ///
    /// Every row starts on `week_start`. The first row contains the 1st of the
    /// month and the last row contains its last day. Padding that would fall
    /// outside chrono's range is pinned to `NaiveDate::MIN`/`NaiveDate::MAX`.
    pub fn weeks(&self, week_start: Weekday) -> Vec<[NaiveDate; 7]> {
        let first = self.first_day();
        let last = self.last_day();

        let lead = (first.weekday().num_days_from_monday() + 7
            - week_start.num_days_from_monday())
            % 7;
        let mut row_start = first
            .checked_sub_signed(Duration::days(i64::from(lead)))
            .unwrap_or(NaiveDate::MIN);

        let mut weeks = Vec::with_capacity(6);
        loop {
            let mut row = [row_start; 7];
            for (offset, cell) in row.iter_mut().enumerate() {
                *cell = row_start
                    .checked_add_signed(Duration::days(offset as i64))
                    .unwrap_or(NaiveDate::MAX);
            }
            weeks.push(row);

            match row_start.checked_add_signed(Duration::days(7)) {
                Some(next) if next <= last => row_start = next,
                _ => break,
            }
        }
        weeks
    }

    /// Parse a month string in "YYYY-MM" format
    pub fn parse(s: &str) -> DaystepResult<Self> {
        let s = s.trim();
        // The year may carry a sign, the month never does
        let (year, month) = s
            .rsplit_once('-')
            .ok_or_else(|| DaystepError::Validation(format!("Invalid month format: {}", s)))?;

        let year: i32 = year
            .parse()
            .map_err(|_| DaystepError::Validation(format!("Invalid month format: {}", s)))?;
        let month: u32 = month
            .parse()
            .map_err(|_| DaystepError::Validation(format!("Invalid month format: {}", s)))?;

        if !(1..=12).contains(&month) {
            return Err(DaystepError::Validation(format!("Invalid month: {}", month)));
        }

        Ok(Self::new(year, month_from_number(month)))
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number_from_month())
    }
}

impl Ord for CalendarMonth {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month.number_from_month())
            .cmp(&(other.year, other.month.number_from_month()))
    }
}

impl PartialOrd for CalendarMonth {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Month from a 0-based index (January = 0)
pub fn month_from_index(index: u32) -> DaystepResult<Month> {
    if index > 11 {
        return Err(DaystepError::Validation(format!(
            "Invalid month index: {}",
            index
        )));
    }
    Ok(month_from_number(index + 1))
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Month from a 1-based number; values are reduced into 1..=12
fn month_from_number(number: u32) -> Month {
    MONTHS[(number.saturating_sub(1) % 12) as usize]
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
