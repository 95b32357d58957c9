use crate::app::{App, AppMode};
use crate::filter_dialog::FilterDialogState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use focuspath_domain::DropTarget;

impl App {
    pub fn handle_board_key(&mut self, key: KeyEvent) {
        let view = self.view();

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.mode = AppMode::Help(Box::new(AppMode::Board)),
            KeyCode::Char('j') | KeyCode::Down => self.cursor.move_down(&view),
            KeyCode::Char('k') | KeyCode::Up => self.cursor.move_up(&view),
            KeyCode::Char('h') | KeyCode::Left => self.cursor.move_left(&view),
            KeyCode::Char('l') | KeyCode::Right => self.cursor.move_right(&view),
            KeyCode::Tab => self.cursor.next_quadrant(),
            KeyCode::BackTab => self.cursor.prev_quadrant(),
            KeyCode::Char(' ') => self.handle_carry(),
            KeyCode::Enter => match self.carrying.take() {
                Some(id) => self.apply_drop(id, DropTarget::Quadrant(self.cursor.quadrant)),
                None => self.edit_selected(),
            },
            KeyCode::Char('e') if self.carrying.is_none() => self.edit_selected(),
            KeyCode::Esc => {
                if self.carrying.take().is_some() {
                    tracing::debug!("Carry cancelled");
                } else if self.is_loading() {
                    self.cancel_analysis();
                }
            }
            KeyCode::Char('i') => self.mode = AppMode::Input,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_analysis()
            }
            KeyCode::Char('n') => self.start_fresh(),
            KeyCode::Char('f') if self.store.has_plan() => {
                self.filter_dialog = Some(FilterDialogState::new(self.store.filters()));
                self.mode = AppMode::Filter;
            }
            KeyCode::Char('/') if self.store.has_plan() => {
                self.search_input.set(self.store.filters().search.clone());
                self.mode = AppMode::Search;
            }
            KeyCode::Char('c') => {
                self.store.reset_filters();
                self.search_input.clear();
                self.refresh_cursor();
            }
            _ => {}
        }
    }

    /// Space: pick up the selected card, or drop the carried one under the
    /// cursor.
    fn handle_carry(&mut self) {
        match self.carrying.take() {
            None => {
                self.carrying = self.selected_task();
                if let Some(id) = self.carrying {
                    tracing::debug!("Picked up task {}", id);
                }
            }
            Some(id) => {
                let target = match self.selected_task() {
                    Some(card) => DropTarget::Card(card),
                    None => DropTarget::Quadrant(self.cursor.quadrant),
                };
                self.apply_drop(id, target);
            }
        }
    }

    fn edit_selected(&mut self) {
        if let Some(id) = self.selected_task() {
            self.open_editor(id);
        }
    }
}
