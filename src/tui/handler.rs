//! Event handler for the TUI
//!
//! Maps keys to picker transitions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::PickerApp;
use super::event::Event;
use crate::error::DaystepError;

/// Handle an incoming event
pub fn handle_event(app: &mut PickerApp, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Error(message) => Err(DaystepError::Tui(message).into()),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut PickerApp, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    app.status_message = None;

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.quit(),

        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1)?,
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1)?,
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-7)?,
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(7)?,

        KeyCode::PageUp | KeyCode::Char('<') => app.previous_month()?,
        KeyCode::PageDown | KeyCode::Char('>') => app.next_month()?,
        KeyCode::Char('[') => app.step_year(false)?,
        KeyCode::Char(']') => app.step_year(true)?,

        KeyCode::Enter | KeyCode::Char(' ') => app.select()?,
        KeyCode::Char('r') => app.reset()?,

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::CalendarMonth;
    use crate::picker::{DateNavigator, KeyFormatter, PickerOptions};
    use chrono::{Month, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app() -> PickerApp<'static> {
        let today = date(2018, 1, 17);
        PickerApp::new(
            DateNavigator::new(PickerOptions::new(), today),
            &Settings::default(),
            &KeyFormatter,
            today,
        )
    }

    fn press(app: &mut PickerApp, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_arrow_and_vim_keys_move_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, date(2018, 1, 25));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, date(2018, 1, 17));
    }

    #[test]
    fn test_month_and_year_keys() {
        let mut app = app();
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.navigator.current_month(), CalendarMonth::new(2018, Month::February));
        press(&mut app, KeyCode::Char('<'));
        press(&mut app, KeyCode::Char('<'));
        assert_eq!(app.navigator.current_month(), CalendarMonth::new(2017, Month::December));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.navigator.current_month(), CalendarMonth::new(2016, Month::December));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.navigator.current_month().year(), 2017);
    }

    #[test]
    fn test_enter_selects_and_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.should_quit);
        assert_eq!(app.result(), Some(date(2018, 1, 17)));
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.status_message.as_deref(), Some("Selection cleared"));
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
        assert_eq!(app.result(), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_event_error_stops_loop() {
        let mut app = app();
        assert!(handle_event(&mut app, Event::Error("gone".into())).is_err());
        assert!(handle_event(&mut app, Event::Tick).is_ok());
    }
}
