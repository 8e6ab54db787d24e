//! Title bar with the character level and current mode.
use charsheet_core::CharacterRecord;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{panel, stepper};
use crate::state::{Focus, ViewState};
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, record: &CharacterRecord, view: &ViewState) {
    let mut spans = vec![Span::styled("Level: ", theme::label())];
    spans.extend(stepper(
        record.level.to_string(),
        theme::value(),
        view.editing,
        view.is_focused(Focus::Level),
    ));
    if view.editing {
        spans.push(Span::styled(
            "  [EDIT]",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(panel(" CHARACTER RECORD "));

    frame.render_widget(paragraph, area);
}
