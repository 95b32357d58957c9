use crate::app::App;
use crate::dialog::{handle_dialog_input, DialogAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    pub fn handle_edit_dialog_key(&mut self, key: KeyEvent) {
        let Some(state) = self.edit_dialog.as_mut() else {
            self.close_editor();
            return;
        };

        match key.code {
            KeyCode::Tab | KeyCode::Down => state.next_field(),
            KeyCode::BackTab | KeyCode::Up => state.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.save_editor()
            }
            code => match handle_dialog_input(state.focused_input_mut(), code, true) {
                DialogAction::Confirm => self.save_editor(),
                DialogAction::Cancel => self.close_editor(),
                DialogAction::None | DialogAction::Changed => {}
            },
        }
    }
}
