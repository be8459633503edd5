//! Highlight ranges for the date picker
//!
//! A highlight is built from a fixed boundary date and the day the pointer is
//! over. The boundary's role, not chronology, decides which end it fills.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fixed endpoint of a highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightBoundary {
    /// The boundary is the start of the range (`highlightFrom`)
    From(NaiveDate),
    /// The boundary is the end of the range (`highlightTo`)
    To(NaiveDate),
}

impl HighlightBoundary {
    /// The boundary date itself
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::From(date) | Self::To(date) => *date,
        }
    }

    /// Pair the boundary with a hovered day
    ///
    /// The pair is not reordered: `From(b)` always yields `{ from: b, to: hover }`
    /// even when `hover` is earlier than `b`.
    pub fn range_with(&self, hover: NaiveDate) -> DateRange {
        match self {
            Self::From(from) => DateRange {
                from: *from,
                to: hover,
            },
            Self::To(to) => DateRange {
                from: hover,
                to: *to,
            },
        }
    }
}

/// A highlighted span of days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Whether the endpoints are in chronological order
    pub fn is_ordered(&self) -> bool {
        self.from <= self.to
    }

    /// Whether `date` lies between the endpoints, inclusive, in either order
    pub fn covers(&self, date: NaiveDate) -> bool {
        let (start, end) = if self.is_ordered() {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        date >= start && date <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_boundary_is_start() {
        let range = HighlightBoundary::From(date(2018, 1, 17)).range_with(date(2018, 1, 20));
        assert_eq!(
            range,
            DateRange {
                from: date(2018, 1, 17),
                to: date(2018, 1, 20)
            }
        );
    }

    #[test]
    fn test_to_boundary_is_end() {
        let range = HighlightBoundary::To(date(2018, 2, 5)).range_with(date(2018, 1, 31));
        assert_eq!(
            range,
            DateRange {
                from: date(2018, 1, 31),
                to: date(2018, 2, 5)
            }
        );
    }

    #[test]
    fn test_inverted_hover_is_not_reordered() {
        let range = HighlightBoundary::From(date(2018, 1, 17)).range_with(date(2018, 1, 10));
        assert_eq!(range.from, date(2018, 1, 17));
        assert_eq!(range.to, date(2018, 1, 10));
        assert!(!range.is_ordered());
    }

    #[test]
    fn test_covers_either_order() {
        let range = DateRange {
            from: date(2018, 1, 20),
            to: date(2018, 1, 17),
        };
        assert!(range.covers(date(2018, 1, 17)));
        assert!(range.covers(date(2018, 1, 18)));
        assert!(range.covers(date(2018, 1, 20)));
        assert!(!range.covers(date(2018, 1, 21)));
    }

    #[test]
    fn test_boundary_date() {
        assert_eq!(HighlightBoundary::To(date(2018, 2, 5)).date(), date(2018, 2, 5));
    }
}
