use crate::app::{App, AppMode};
use crate::dialog::{handle_dialog_input, DialogAction};
use crate::filter_dialog::FilterField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    pub fn handle_filter_dialog_key(&mut self, key: KeyEvent) {
        let Some(state) = self.filter_dialog.as_mut() else {
            self.mode = AppMode::Board;
            return;
        };
        let criteria = self.store.filters_mut();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let on_threshold = state.field != FilterField::Search;

        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.filter_dialog = None;
                self.mode = AppMode::Board;
            }
            KeyCode::Tab | KeyCode::Down => state.next_field(),
            KeyCode::BackTab | KeyCode::Up => state.prev_field(),
            KeyCode::Char('r') if ctrl || on_threshold => state.reset_field(criteria),
            KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') if on_threshold => {
                state.adjust(criteria, -1);
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('l') if on_threshold => {
                state.adjust(criteria, 1);
            }
            KeyCode::Char(c) if on_threshold && c.is_ascii_digit() => {
                let value = if c == '0' { 10 } else { c as u8 - b'0' };
                match state.field {
                    FilterField::MinUrgency => criteria.set_min_urgency(value),
                    FilterField::MinImportance => criteria.set_min_importance(value),
                    FilterField::Search => {}
                }
            }
            code if !on_threshold => {
                if handle_dialog_input(&mut state.search, code, true) == DialogAction::Changed {
                    criteria.search = state.search.as_str().to_string();
                }
            }
            _ => {}
        }
        self.refresh_cursor();
    }

    /// Live search from the board (`/`). Enter keeps the query, Esc clears it.
    pub fn handle_search_key(&mut self, key: KeyEvent) {
        match handle_dialog_input(&mut self.search_input, key.code, true) {
            DialogAction::Confirm => self.mode = AppMode::Board,
            DialogAction::Cancel => {
                self.search_input.clear();
                self.store.filters_mut().search.clear();
                self.mode = AppMode::Board;
            }
            DialogAction::Changed => {
                self.store.filters_mut().search = self.search_input.as_str().to_string();
            }
            DialogAction::None => {}
        }
        self.refresh_cursor();
    }
}
