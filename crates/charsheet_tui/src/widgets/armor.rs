//! Armor selector and the damage multipliers it grants.
use charsheet_core::CharacterRecord;
use charsheet_core::derive::Derived;
use charsheet_render::format_multiplier;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::panel;
use crate::state::{Focus, ViewState};
use crate::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    record: &CharacterRecord,
    derived: &Derived,
    view: &ViewState,
) {
    let armor = if view.editing {
        format!("< {} >", record.armor)
    } else {
        record.armor.to_string()
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Armour: ", theme::label()),
            Span::styled(
                armor,
                theme::focus_if(theme::value(), view.is_focused(Focus::Armor)),
            ),
        ]),
        Line::from(Span::styled("Bonuses:", theme::heading())),
    ];
    lines.extend(derived.damage_bonuses.entries().into_iter().map(|(name, value)| {
        Line::from(vec![
            Span::styled(format!("  {name}: "), theme::label()),
            Span::styled(format_multiplier(value), theme::value()),
        ])
    }));

    frame.render_widget(Paragraph::new(lines).block(panel(" Armour ")), area);
}
