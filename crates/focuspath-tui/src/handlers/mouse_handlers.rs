use crate::app::{App, AppMode};
use crate::drag::DragOutcome;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use focuspath_domain::DropTarget;

impl App {
    /// Mouse gestures apply on the main screen only; dialogs ignore them.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if !matches!(self.mode, AppMode::Input | AppMode::Board) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);
        let hit = self.layout.hit_test(column, row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.layout.in_input(column, row) {
                    self.mode = AppMode::Input;
                    return;
                }
                self.drag.press(hit, column, row);
                if let Some(target) = hit {
                    self.mode = AppMode::Board;
                    self.carrying = None;
                    let view = self.view();
                    match target {
                        DropTarget::Card(id) => {
                            self.cursor.follow(&view, id);
                        }
                        DropTarget::Quadrant(quadrant) => {
                            self.cursor.quadrant = quadrant;
                            self.cursor.clamp(&view);
                        }
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self.drag.drag(hit, column, row),
            MouseEventKind::Up(MouseButton::Left) => match self.drag.release(hit) {
                DragOutcome::Click(id) => self.open_editor(id),
                DragOutcome::Drop(id, target) => self.apply_drop(id, target),
                DragOutcome::None => {}
            },
            _ => {}
        }
    }
}
