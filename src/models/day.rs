//! Day cell modifiers

/// Modifiers of a single day cell in the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayMeta {
    /// Outside `[min_date, max_date]`; clicks are ignored
    pub disabled: bool,
    /// The currently selected value
    pub selected: bool,
    /// Belongs to a neighbouring month
    pub outside: bool,
    /// Inside the current highlight range
    pub highlighted: bool,
}

impl DayMeta {
    /// Modifiers for a disabled day
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }
}
