//! Status bar view
//!
//! Shows the cursor day, the current value, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::PickerApp;

const HINTS: &str = " ←↓↑→ day  </> month  [/] year  Enter pick  r reset  q quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &PickerApp, area: Rect) {
    let mut spans = vec![
        Span::styled(" Day: ", Style::default().fg(Color::White)),
        Span::styled(
            app.cursor.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
    ];

    match app.navigator.value() {
        Some(value) => spans.push(Span::styled(
            format!("Value: {}", value),
            Style::default().fg(Color::Green),
        )),
        None => spans.push(Span::styled("No value", Style::default().fg(Color::DarkGray))),
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len = HINTS.chars().count();
    let padding = (area.width as usize).saturating_sub(left_len + hints_len);
    spans.push(Span::raw(" ".repeat(padding.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
