//! View state for the sheet: edit mode, focus, and in-progress text entry.
//!
//! None of this is persisted; it starts fresh with every session.

use charsheet_core::{CharacterRecord, StatKind};

/// A control that can hold focus while editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Level,
    Stat(StatKind),
    Health,
    Bleeding,
    Armor,
    Item(usize),
    Notes,
}

/// Field a text entry writes back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextTarget {
    Item(usize),
    Notes,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEntry {
    pub target: TextTarget,
    pub buffer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub editing: bool,
    pub focus: Focus,
    pub text_entry: Option<TextEntry>,
    /// Last error shown in the footer, cleared by the next successful edit.
    pub status: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            editing: false,
            focus: Focus::Level,
            text_entry: None,
            status: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
        if !self.editing {
            self.text_entry = None;
        }
    }

    pub fn is_focused(&self, focus: Focus) -> bool {
        self.editing && self.focus == focus
    }

    pub fn focus_next(&mut self, record: &CharacterRecord) {
        self.step_focus(record, 1);
    }

    pub fn focus_prev(&mut self, record: &CharacterRecord) {
        self.step_focus(record, -1);
    }

    /// Moves focus back onto a control that exists after the item list shrank.
    pub fn clamp_focus(&mut self, record: &CharacterRecord) {
        if let Focus::Item(index) = self.focus
            && index >= record.items.len()
        {
            self.focus = match record.items.len() {
                0 => Focus::Armor,
                len => Focus::Item(len - 1),
            };
        }
    }

    fn step_focus(&mut self, record: &CharacterRecord, delta: isize) {
        self.clamp_focus(record);
        let order = focus_order(record);
        let current = order
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0);
        let last = order.len() as isize - 1;
        let next = (current as isize + delta).clamp(0, last);
        self.focus = order[next as usize];
    }
}

/// Controls in top-to-bottom order for the given record.
pub fn focus_order(record: &CharacterRecord) -> Vec<Focus> {
    let mut order = vec![Focus::Level];
    order.extend(StatKind::ALL.into_iter().map(Focus::Stat));
    order.extend([Focus::Health, Focus::Bleeding, Focus::Armor]);
    order.extend((0..record.items.len()).map(Focus::Item));
    order.push(Focus::Notes);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_items(count: usize) -> CharacterRecord {
        let mut record = CharacterRecord::default();
        record.items = (0..count).map(|i| format!("item {i}")).collect();
        record
    }

    #[test]
    fn default_view_is_read_only() {
        let view = ViewState::new();
        assert!(!view.editing);
        assert!(!view.is_focused(Focus::Level));
    }

    #[test]
    fn focus_walks_controls_and_stops_at_ends() {
        let record = record_with_items(1);
        let mut view = ViewState::new();

        view.focus_prev(&record);
        assert_eq!(view.focus, Focus::Level);

        view.focus_next(&record);
        assert_eq!(view.focus, Focus::Stat(StatKind::Speed));

        for _ in 0..20 {
            view.focus_next(&record);
        }
        assert_eq!(view.focus, Focus::Notes);

        view.focus_prev(&record);
        assert_eq!(view.focus, Focus::Item(0));
    }

    #[test]
    fn clamp_focus_after_items_shrink() {
        let mut view = ViewState {
            focus: Focus::Item(2),
            ..ViewState::new()
        };
        view.clamp_focus(&record_with_items(2));
        assert_eq!(view.focus, Focus::Item(1));

        view.clamp_focus(&record_with_items(0));
        assert_eq!(view.focus, Focus::Armor);
    }

    #[test]
    fn leaving_edit_mode_drops_text_entry() {
        let mut view = ViewState::new();
        view.toggle_editing();
        view.text_entry = Some(TextEntry {
            target: TextTarget::Notes,
            buffer: "draft".into(),
        });
        view.toggle_editing();
        assert!(!view.editing);
        assert!(view.text_entry.is_none());
    }
}
