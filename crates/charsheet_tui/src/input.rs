//! Keyboard-to-command mapping.
//!
//! The rest of the application only sees [`KeyAction`], never raw
//! `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{TextTarget, ViewState};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ToggleEdit,
    Reset,
    FocusNext,
    FocusPrev,
    Increment,
    Decrement,
    AddItem,
    RemoveItem,
    BeginText,
    TextInput(char),
    TextBackspace,
    TextCommit,
    TextCancel,
    /// No meaningful command was produced.
    None,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, key: KeyEvent, view: &ViewState) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }
        if let Some(entry) = &view.text_entry {
            return self.handle_text(key, entry.target);
        }
        if view.editing {
            return self.handle_editing(key);
        }

        match key.code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'e' => KeyAction::ToggleEdit,
                'r' => KeyAction::Reset,
                _ => KeyAction::None,
            },
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_editing(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Up => KeyAction::FocusPrev,
            KeyCode::Down | KeyCode::Tab => KeyAction::FocusNext,
            KeyCode::BackTab => KeyAction::FocusPrev,
            KeyCode::Right => KeyAction::Increment,
            KeyCode::Left => KeyAction::Decrement,
            KeyCode::Enter => KeyAction::BeginText,
            KeyCode::Esc => KeyAction::ToggleEdit,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'e' => KeyAction::ToggleEdit,
                'r' => KeyAction::Reset,
                'k' => KeyAction::FocusPrev,
                'j' => KeyAction::FocusNext,
                '+' | '=' | 'l' => KeyAction::Increment,
                '-' | '_' | 'h' => KeyAction::Decrement,
                ' ' => KeyAction::Increment,
                'a' => KeyAction::AddItem,
                'd' => KeyAction::RemoveItem,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    fn handle_text(&self, key: KeyEvent, target: TextTarget) -> KeyAction {
        // Notes are multi-line; items stay on one line.
        if target == TextTarget::Notes {
            let newline = match key.code {
                KeyCode::Enter => key.modifiers.contains(KeyModifiers::ALT),
                KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
                _ => false,
            };
            if newline {
                return KeyAction::TextInput('\n');
            }
        }

        match key.code {
            KeyCode::Enter => KeyAction::TextCommit,
            KeyCode::Esc => KeyAction::TextCancel,
            KeyCode::Backspace => KeyAction::TextBackspace,
            KeyCode::Char(ch) => KeyAction::TextInput(ch),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TextEntry;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn editing() -> ViewState {
        ViewState {
            editing: true,
            ..ViewState::new()
        }
    }

    #[test]
    fn display_mode_only_toggles_resets_and_quits() {
        let handler = InputHandler::new();
        let view = ViewState::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('e')), &view), KeyAction::ToggleEdit);
        assert_eq!(handler.handle_key(key(KeyCode::Char('R')), &view), KeyAction::Reset);
        assert_eq!(handler.handle_key(key(KeyCode::Char('q')), &view), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Char('+')), &view), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Down), &view), KeyAction::None);
    }

    #[test]
    fn editing_maps_adjustment_keys() {
        let handler = InputHandler::new();
        let view = editing();
        assert_eq!(handler.handle_key(key(KeyCode::Char('+')), &view), KeyAction::Increment);
        assert_eq!(handler.handle_key(key(KeyCode::Left), &view), KeyAction::Decrement);
        assert_eq!(handler.handle_key(key(KeyCode::Char('j')), &view), KeyAction::FocusNext);
        assert_eq!(handler.handle_key(key(KeyCode::Up), &view), KeyAction::FocusPrev);
        assert_eq!(handler.handle_key(key(KeyCode::Char('a')), &view), KeyAction::AddItem);
        assert_eq!(handler.handle_key(key(KeyCode::Enter), &view), KeyAction::BeginText);
        assert_eq!(handler.handle_key(key(KeyCode::Esc), &view), KeyAction::ToggleEdit);
    }

    #[test]
    fn text_entry_captures_letters() {
        let handler = InputHandler::new();
        let view = ViewState {
            text_entry: Some(TextEntry {
                target: TextTarget::Notes,
                buffer: String::new(),
            }),
            ..editing()
        };
        assert_eq!(handler.handle_key(key(KeyCode::Char('q')), &view), KeyAction::TextInput('q'));
        assert_eq!(handler.handle_key(key(KeyCode::Backspace), &view), KeyAction::TextBackspace);
        assert_eq!(handler.handle_key(key(KeyCode::Enter), &view), KeyAction::TextCommit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc), &view), KeyAction::TextCancel);
    }

    fn entering(target: TextTarget) -> ViewState {
        ViewState {
            text_entry: Some(TextEntry {
                target,
                buffer: String::new(),
            }),
            ..editing()
        }
    }

    #[test]
    fn notes_accept_newlines() {
        let handler = InputHandler::new();
        let notes = entering(TextTarget::Notes);
        let alt_enter = KeyEvent {
            modifiers: KeyModifiers::ALT,
            ..key(KeyCode::Enter)
        };
        let ctrl_j = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('j'))
        };
        assert_eq!(handler.handle_key(alt_enter, &notes), KeyAction::TextInput('\n'));
        assert_eq!(handler.handle_key(ctrl_j, &notes), KeyAction::TextInput('\n'));
        assert_eq!(handler.handle_key(key(KeyCode::Enter), &notes), KeyAction::TextCommit);

        let item = entering(TextTarget::Item(0));
        assert_eq!(handler.handle_key(alt_enter, &item), KeyAction::TextCommit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let handler = InputHandler::new();
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c, &editing()), KeyAction::Quit);
    }
}
