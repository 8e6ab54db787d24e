//! Item list, with inline text entry while editing an item.
use charsheet_core::CharacterRecord;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::panel;
use crate::state::{Focus, TextTarget, ViewState};
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, record: &CharacterRecord, view: &ViewState) {
    let mut lines: Vec<Line> = record
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let draft = view
                .text_entry
                .as_ref()
                .filter(|entry| entry.target == TextTarget::Item(index));
            let text = match draft {
                Some(entry) => format!("{}_", entry.buffer),
                None => item.clone(),
            };
            let style = theme::focus_if(theme::value(), view.is_focused(Focus::Item(index)));
            Line::from(vec![Span::raw("- "), Span::styled(text, style)])
        })
        .collect();

    if lines.is_empty() {
        lines.push(Line::from(Span::styled("none", theme::muted())));
    }
    if view.editing {
        lines.push(Line::from(Span::styled("[a] add  [d] remove", theme::muted())));
    }

    frame.render_widget(Paragraph::new(lines).block(panel(" Items ")), area);
}
