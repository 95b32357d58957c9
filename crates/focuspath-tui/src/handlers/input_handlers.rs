use crate::app::{App, AppMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Keys while the brain dump panel has focus.
    pub fn handle_input_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let input = self.store.input_mut();

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit_analysis(),
            KeyCode::Esc => {
                if self.is_loading() {
                    self.cancel_analysis();
                } else if self.store.has_plan() {
                    self.mode = AppMode::Board;
                }
            }
            KeyCode::Tab => {
                if self.store.has_plan() {
                    self.mode = AppMode::Board;
                }
            }
            KeyCode::Enter => input.newline(),
            KeyCode::Char(c) if !ctrl => input.insert_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Up => input.move_up(),
            KeyCode::Down => input.move_down(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }
}
