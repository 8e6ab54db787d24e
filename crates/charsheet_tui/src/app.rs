//! Glue between the record store, the view state and the terminal.
use anyhow::Result;
use charsheet_core::core_api::{CoreError, Edit, Storage, Store};
use charsheet_core::CharacterRecord;
use charsheet_render::NEW_ITEM_TEXT;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};

use crate::input::{InputHandler, KeyAction};
use crate::state::{Focus, TextEntry, TextTarget, ViewState};
use crate::terminal::Tui;
use crate::ui;

pub struct App<S> {
    store: Store<S>,
    view: ViewState,
    input: InputHandler,
}

impl<S: Storage> App<S> {
    pub fn new(store: Store<S>) -> Self {
        Self {
            store,
            view: ViewState::new(),
            input: InputHandler::new(),
        }
    }

    pub fn record(&self) -> &CharacterRecord {
        self.store.get()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    /// Blocks on terminal events until the user quits.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        tracing::info!("character sheet opened");
        loop {
            terminal.draw(|frame| ui::render(frame, self.store.get(), &self.view))?;

            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        break;
                    }
                }
                _ => {}
            }
        }
        tracing::info!("character sheet closed");
        Ok(())
    }

    /// Returns `true` when the key asks to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = self.input.handle_key(key, &self.view);
        self.dispatch(action)
    }

    pub fn dispatch(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::ToggleEdit => self.view.toggle_editing(),
            KeyAction::Reset => {
                self.view.text_entry = None;
                let result = self.store.reset();
                self.report(result);
                self.view.clamp_focus(self.store.get());
            }
            KeyAction::FocusNext => self.view.focus_next(self.store.get()),
            KeyAction::FocusPrev => self.view.focus_prev(self.store.get()),
            KeyAction::Increment => self.adjust_focused(1),
            KeyAction::Decrement => self.adjust_focused(-1),
            KeyAction::AddItem => {
                let result = self.store.add_item(NEW_ITEM_TEXT);
                if result.is_ok() {
                    self.view.focus = Focus::Item(self.store.get().items.len() - 1);
                }
                self.report(result);
            }
            KeyAction::RemoveItem => {
                if let Focus::Item(index) = self.view.focus {
                    let result = self.store.apply(Edit::RemoveItem(index));
                    self.report(result);
                    self.view.clamp_focus(self.store.get());
                }
            }
            KeyAction::BeginText => self.begin_text(),
            KeyAction::TextInput(ch) => {
                if let Some(entry) = &mut self.view.text_entry {
                    entry.buffer.push(ch);
                }
            }
            KeyAction::TextBackspace => {
                if let Some(entry) = &mut self.view.text_entry {
                    entry.buffer.pop();
                }
            }
            KeyAction::TextCommit => self.commit_text(),
            KeyAction::TextCancel => self.view.text_entry = None,
            KeyAction::None => {}
        }
        false
    }

    fn adjust_focused(&mut self, delta: i32) {
        let CharacterRecord { bleeding, armor, .. } = *self.store.get();
        let result = match self.view.focus {
            Focus::Level => self.store.adjust_level(delta),
            Focus::Stat(kind) => self.store.adjust_stat(kind, delta),
            Focus::Health => self.store.adjust_health(delta),
            Focus::Bleeding => self.store.apply(Edit::Bleeding(!bleeding)),
            Focus::Armor => {
                let armor = if delta > 0 { armor.next() } else { armor.prev() };
                self.store.apply(Edit::Armor(armor))
            }
            Focus::Item(_) | Focus::Notes => return,
        };
        self.report(result);
    }

    fn begin_text(&mut self) {
        let record = self.store.get();
        let entry = match self.view.focus {
            Focus::Item(index) => record.items.get(index).map(|item| TextEntry {
                target: TextTarget::Item(index),
                buffer: item.clone(),
            }),
            Focus::Notes => Some(TextEntry {
                target: TextTarget::Notes,
                buffer: record.notes.clone(),
            }),
            _ => None,
        };
        self.view.text_entry = entry;
    }

    fn commit_text(&mut self) {
        let Some(entry) = self.view.text_entry.take() else {
            return;
        };
        let edit = match entry.target {
            TextTarget::Item(index) => Edit::Item {
                index,
                value: entry.buffer,
            },
            TextTarget::Notes => Edit::Notes(entry.buffer),
        };
        let result = self.store.apply(edit);
        self.report(result);
    }

    fn report(&mut self, result: Result<(), CoreError>) {
        self.view.status = match result {
            Ok(()) => None,
            Err(e) => Some(e.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charsheet_core::core_api::{MemoryStorage, STORE_KEY};
    use charsheet_core::{Armor, StatKind};

    fn app() -> App<MemoryStorage> {
        App::new(Store::open(MemoryStorage::new()))
    }

    fn press(app: &mut App<MemoryStorage>, actions: &[KeyAction]) {
        for action in actions {
            app.dispatch(action.clone());
        }
    }

    #[test]
    fn adjustments_follow_focus() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyAction::ToggleEdit,
                KeyAction::Increment,
                KeyAction::Increment,
                KeyAction::FocusNext,
                KeyAction::FocusNext,
                KeyAction::Decrement,
            ],
        );
        assert_eq!(app.record().level, 2);
        assert_eq!(app.record().stats.strength, 4);
        assert!(app.store().storage().get(STORE_KEY).is_some());
    }

    #[test]
    fn armor_selector_cycles() {
        let mut app = app();
        app.view.editing = true;
        app.view.focus = Focus::Armor;
        press(&mut app, &[KeyAction::Increment, KeyAction::Increment]);
        assert_eq!(app.record().armor, Armor::Medium);
        press(
            &mut app,
            &[
                KeyAction::Decrement,
                KeyAction::Decrement,
                KeyAction::Decrement,
            ],
        );
        assert_eq!(app.record().armor, Armor::Heavy);
    }

    #[test]
    fn bleeding_toggles_either_direction() {
        let mut app = app();
        app.view.editing = true;
        app.view.focus = Focus::Bleeding;
        press(&mut app, &[KeyAction::Increment]);
        assert!(app.record().bleeding);
        press(&mut app, &[KeyAction::Decrement]);
        assert!(!app.record().bleeding);
    }

    #[test]
    fn add_edit_and_remove_item() {
        let mut app = app();
        app.view.editing = true;
        press(&mut app, &[KeyAction::AddItem]);
        assert_eq!(app.record().items, vec![NEW_ITEM_TEXT]);
        assert_eq!(app.view().focus, Focus::Item(0));

        press(&mut app, &[KeyAction::BeginText]);
        for _ in 0..NEW_ITEM_TEXT.len() {
            press(&mut app, &[KeyAction::TextBackspace]);
        }
        for ch in "Sword".chars() {
            press(&mut app, &[KeyAction::TextInput(ch)]);
        }
        press(&mut app, &[KeyAction::TextCommit]);
        assert_eq!(app.record().items, vec!["Sword"]);

        press(&mut app, &[KeyAction::RemoveItem]);
        assert!(app.record().items.is_empty());
        assert_eq!(app.view().focus, Focus::Armor);
    }

    #[test]
    fn cancelled_text_leaves_notes() {
        let mut app = app();
        app.view.editing = true;
        app.view.focus = Focus::Notes;
        press(
            &mut app,
            &[
                KeyAction::BeginText,
                KeyAction::TextInput('x'),
                KeyAction::TextCancel,
            ],
        );
        assert!(app.record().notes.is_empty());
        assert!(app.view().text_entry.is_none());
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut app = app();
        app.view.editing = true;
        app.view.focus = Focus::Stat(StatKind::Speed);
        press(
            &mut app,
            &[KeyAction::Increment, KeyAction::AddItem, KeyAction::Reset],
        );
        assert_eq!(app.record(), &CharacterRecord::default());
        assert_eq!(app.view().focus, Focus::Armor);
    }

    #[test]
    fn quit_is_reported() {
        let mut app = app();
        assert!(app.dispatch(KeyAction::Quit));
        assert!(!app.dispatch(KeyAction::None));
    }
}
