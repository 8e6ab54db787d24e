//! Key hints, replaced by the last error when there is one.
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::panel;
use crate::state::{TextTarget, ViewState};
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState) {
    let line = match &view.status {
        Some(status) => Line::from(Span::styled(status.clone(), theme::warning())),
        None => Line::from(Span::styled(hints(view), theme::muted())),
    };

    frame.render_widget(Paragraph::new(line).block(panel(" Keys ")), area);
}

fn hints(view: &ViewState) -> &'static str {
    if let Some(entry) = &view.text_entry {
        match entry.target {
            TextTarget::Notes => "[Enter] save  [Alt+Enter] new line  [Esc] cancel",
            TextTarget::Item(_) => "[Enter] save  [Esc] cancel",
        }
    } else if view.editing {
        "[↑/↓] focus  [+/-] adjust  [Enter] edit text  [e/Esc] done  [r] reset  [q] quit"
    } else {
        "[e] edit  [r] reset  [q] quit"
    }
}
