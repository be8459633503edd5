//! Calendar popover view
//!
//! Title shows the displayed month; the footer shows the navigation labels.

use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::DayMeta;
use crate::tui::app::PickerApp;

/// Render the calendar popover
pub fn render(frame: &mut Frame, app: &PickerApp, area: Rect) {
    frame.render_widget(Clear, area);

    let month = app.navigator.current_month();
    let block = Block::default()
        .title(format!(" {} {} ", month.month_name(), month.year()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::with_capacity(10);

    let mut weekday = app.week_start;
    let mut header = Vec::with_capacity(7);
    for _ in 0..7 {
        header.push(Span::styled(
            format!(" {:<2} ", &weekday.to_string()[..2]),
            Style::default().fg(Color::Yellow),
        ));
        weekday = weekday.succ();
    }
    lines.push(Line::from(header));

    for week in app.navigator.visible_weeks(app.week_start) {
        let cells: Vec<Span> = week
            .iter()
            .map(|day| {
                let meta = app.navigator.day_meta(*day);
                if meta.outside {
                    return Span::raw("    ");
                }
                Span::styled(
                    format!(" {:>2} ", day.day()),
                    day_style(meta, *day == app.cursor),
                )
            })
            .collect();
        lines.push(Line::from(cells));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("< ", Style::default().fg(Color::Yellow)),
        Span::raw(app.navigator.previous_month_label(app.formatter)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::raw(app.navigator.next_month_label(app.formatter)),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Style of a day cell
pub fn day_style(meta: DayMeta, cursor: bool) -> Style {
    let mut style = if meta.selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if meta.disabled {
        Style::default().fg(Color::DarkGray)
    } else if meta.highlighted {
        Style::default().fg(Color::Black).bg(Color::Blue)
    } else {
        Style::default().fg(Color::White)
    };

    if cursor {
        style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
    }
    style
}
