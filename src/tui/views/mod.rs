//! TUI views

pub mod calendar;
pub mod status_bar;

use ratatui::Frame;

use super::app::PickerApp;
use super::layout::PickerLayout;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &PickerApp) {
    let layout = PickerLayout::new(frame.area());
    calendar::render(frame, app, layout.popover);
    status_bar::render(frame, app, layout.status_bar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::picker::{DateNavigator, EnglishFormatter, PickerOptions};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &PickerApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 25)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_month_and_labels() {
        let today = NaiveDate::from_ymd_opt(2018, 1, 17).unwrap();
        let options = PickerOptions::new().value(NaiveDate::from_ymd_opt(2018, 1, 5).unwrap());
        let app = PickerApp::new(
            DateNavigator::new(options, today),
            &Settings::default(),
            &EnglishFormatter,
            today,
        );

        let screen = screen(&app);
        assert!(screen.contains("January 2018"));
        assert!(screen.contains("Su  Mo  Tu"));
        assert!(screen.contains("Show December 2017"));
        assert!(screen.contains("Show February 2018"));
        assert!(screen.contains("Value: 2018-01-05"));
    }
}
