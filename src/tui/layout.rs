//! Layout helpers for the TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the popover; wide enough for key-style navigation labels
pub const POPOVER_WIDTH: u16 = 42;

/// Height of the popover: header, six weeks, spacer, two labels, borders
pub const POPOVER_HEIGHT: u16 = 12;

/// Regions of the screen
pub struct PickerLayout {
    /// Calendar popover, centered
    pub popover: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl PickerLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        Self {
            popover: centered_rect_fixed(POPOVER_WIDTH, POPOVER_HEIGHT, vertical[0]),
            status_bar: vertical[1],
        }
    }
}

/// A fixed-size rect centered in `r`, shrunk to fit
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popover_is_centered() {
        let layout = PickerLayout::new(Rect::new(0, 0, 80, 25));
        assert_eq!(layout.popover, Rect::new(19, 6, POPOVER_WIDTH, POPOVER_HEIGHT));
        assert_eq!(layout.status_bar, Rect::new(0, 24, 80, 1));
    }

    #[test]
    fn test_small_terminal_shrinks_popover() {
        let rect = centered_rect_fixed(30, 12, Rect::new(0, 0, 20, 8));
        assert_eq!(rect, Rect::new(0, 0, 20, 8));
    }
}
