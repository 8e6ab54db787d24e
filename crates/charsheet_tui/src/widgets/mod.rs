//! Panels composing the character sheet.
pub mod armor;
pub mod combat;
pub mod footer;
pub mod header;
pub mod items;
pub mod notes;
pub mod stats;
pub mod vitals;

use ratatui::{
    style::Style,
    text::Span,
    widgets::{Block, Borders},
};

use crate::theme;

pub(crate) fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme::heading())
}

/// A number in display mode, or `- N +` when editing.
pub(crate) fn stepper(
    value: String,
    style: Style,
    editing: bool,
    focused: bool,
) -> Vec<Span<'static>> {
    if !editing {
        return vec![Span::styled(value, style)];
    }
    vec![
        Span::styled("- ", theme::muted()),
        Span::styled(value, theme::focus_if(style, focused)),
        Span::styled(" +", theme::muted()),
    ]
}
