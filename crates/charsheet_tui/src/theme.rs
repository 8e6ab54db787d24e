//! Colors and emphasis shared by the sheet widgets.
use ratatui::style::{Color, Modifier, Style};

pub fn label() -> Style {
    Style::default().fg(Color::White)
}

pub fn heading() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn value() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Highlight for the focused control in edit mode.
pub fn focused(style: Style) -> Style {
    style.add_modifier(Modifier::REVERSED)
}

pub fn focus_if(style: Style, is_focused: bool) -> Style {
    if is_focused { focused(style) } else { style }
}

pub fn warning() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Health color by percentage of the maximum.
///
/// Health may be negative or exceed the maximum; both land in the outer bands.
pub fn style_health(current: i32, maximum: i32) -> Style {
    if maximum <= 0 {
        return Style::default().fg(Color::Gray);
    }

    let percent = i64::from(current) * 100 / i64::from(maximum);
    let color = match percent {
        75.. => Color::Green,
        50..=74 => Color::Yellow,
        25..=49 => Color::LightRed,
        _ => Color::Red,
    };

    Style::default().fg(color)
}
