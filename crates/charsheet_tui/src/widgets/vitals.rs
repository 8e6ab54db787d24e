//! Health and statuses.
use charsheet_core::CharacterRecord;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{panel, stepper};
use crate::state::{Focus, ViewState};
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, record: &CharacterRecord, view: &ViewState) {
    let health_style = theme::style_health(record.health, record.max_health);

    let mut health = vec![Span::styled("Health: ", theme::label())];
    health.extend(stepper(
        record.health.to_string(),
        health_style,
        view.editing,
        view.is_focused(Focus::Health),
    ));
    health.push(Span::styled(format!("/{}", record.max_health), health_style));

    let (status, status_style) = if record.bleeding {
        ("Bleeding", theme::warning())
    } else {
        ("none", theme::muted())
    };
    let statuses = Line::from(vec![
        Span::styled("Statuses: ", theme::label()),
        Span::styled(
            status,
            theme::focus_if(status_style, view.is_focused(Focus::Bleeding)),
        ),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(health), statuses]).block(panel(" Vitals "));
    frame.render_widget(paragraph, area);
}
