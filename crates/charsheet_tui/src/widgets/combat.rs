//! Derived combat values.
use charsheet_core::derive::Derived;
use charsheet_render::{format_defense, format_dice_pool};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::panel;
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, derived: &Derived) {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(label, theme::label()),
            Span::styled(value, theme::value()),
        ])
    };

    let lines = vec![
        row(
            "Attack dice: ",
            format_dice_pool(derived.attack_dice, derived.dice_size),
        ),
        row(
            "Parry pool: ",
            format_dice_pool(derived.parry_dice, derived.dice_size),
        ),
        row("Defense: ", format_defense(derived)),
    ];

    frame.render_widget(Paragraph::new(lines).block(panel(" Combat ")), area);
}
