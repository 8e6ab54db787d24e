//! The five base stats.
use charsheet_core::derive::Derived;
use charsheet_core::{CharacterRecord, StatKind};
use charsheet_render::format_speed;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{panel, stepper};
use crate::state::{Focus, ViewState};
use crate::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    record: &CharacterRecord,
    derived: &Derived,
    view: &ViewState,
) {
    let lines: Vec<Line> = StatKind::ALL
        .into_iter()
        .map(|kind| {
            // Outside edit mode speed is shown with the armor adjustment applied.
            let value = if kind == StatKind::Speed && !view.editing {
                format_speed(record, derived)
            } else {
                record.stats.get(kind).to_string()
            };

            let mut spans = vec![Span::styled(format!("{:>11}: ", kind.as_str()), theme::label())];
            spans.extend(stepper(
                value,
                theme::value(),
                view.editing,
                view.is_focused(Focus::Stat(kind)),
            ));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(panel(" Stats ")), area);
}
