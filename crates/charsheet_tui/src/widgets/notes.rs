//! Free-form notes.
use charsheet_core::CharacterRecord;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::panel;
use crate::state::{Focus, TextTarget, ViewState};
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, record: &CharacterRecord, view: &ViewState) {
    let draft = view
        .text_entry
        .as_ref()
        .filter(|entry| entry.target == TextTarget::Notes);
    let style = theme::focus_if(theme::value(), view.is_focused(Focus::Notes));

    let lines: Vec<Line> = match draft {
        Some(entry) => format!("{}_", entry.buffer)
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), style)))
            .collect(),
        None if record.notes.trim().is_empty() => {
            let style = theme::focus_if(theme::muted(), view.is_focused(Focus::Notes));
            vec![Line::from(Span::styled("none", style))]
        }
        None => record
            .notes
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), style)))
            .collect(),
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(" Notes "));
    frame.render_widget(paragraph, area);
}
