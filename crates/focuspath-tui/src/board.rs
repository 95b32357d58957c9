//! Board navigation and hit-testing.

use focuspath_domain::{BoardView, DropTarget, Quadrant, TaskId};
use ratatui::layout::{Position, Rect};

/// Keyboard selection on the board: a quadrant and a row in its visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    pub quadrant: Quadrant,
    pub row: usize,
}

impl Default for BoardCursor {
    fn default() -> Self {
        Self {
            quadrant: Quadrant::DoFirst,
            row: 0,
        }
    }
}

impl BoardCursor {
    pub fn selected(&self, view: &BoardView) -> Option<TaskId> {
        view.get(self.quadrant).get(self.row)
    }

    /// Keep the row inside the quadrant's visible list.
    pub fn clamp(&mut self, view: &BoardView) {
        let len = view.get(self.quadrant).len();
        self.row = self.row.min(len.saturating_sub(1));
    }

    pub fn move_up(&mut self, view: &BoardView) {
        if self.row > 0 {
            self.row -= 1;
        } else if let Some(above) = self.quadrant.up() {
            self.quadrant = above;
            self.row = view.get(above).len().saturating_sub(1);
        }
    }

    pub fn move_down(&mut self, view: &BoardView) {
        if self.row + 1 < view.get(self.quadrant).len() {
            self.row += 1;
        } else if let Some(below) = self.quadrant.down() {
            self.quadrant = below;
            self.row = 0;
        }
    }

    pub fn move_left(&mut self, view: &BoardView) {
        if let Some(left) = self.quadrant.left() {
            self.quadrant = left;
            self.clamp(view);
        }
    }

    pub fn move_right(&mut self, view: &BoardView) {
        if let Some(right) = self.quadrant.right() {
            self.quadrant = right;
            self.clamp(view);
        }
    }

    pub fn next_quadrant(&mut self) {
        self.quadrant = self.quadrant.next();
        self.row = 0;
    }

    pub fn prev_quadrant(&mut self) {
        self.quadrant = self.quadrant.prev();
        self.row = 0;
    }

    /// Move onto `id` if it is visible.
    pub fn follow(&mut self, view: &BoardView, id: TaskId) -> bool {
        match view.locate(id) {
            Some((quadrant, row)) => {
                self.quadrant = quadrant;
                self.row = row;
                true
            }
            None => false,
        }
    }

    /// First quadrant with a visible task, or DO_FIRST.
    pub fn first_task(view: &BoardView) -> Self {
        let quadrant = Quadrant::ALL
            .into_iter()
            .find(|q| !view.get(*q).is_empty())
            .unwrap_or(Quadrant::DoFirst);
        Self { quadrant, row: 0 }
    }
}

/// Screen areas recorded during the last render, used to resolve mouse
/// positions.
#[derive(Debug, Clone, Default)]
pub struct BoardLayout {
    input_area: Option<Rect>,
    quadrants: Vec<(Quadrant, Rect)>,
    cards: Vec<(TaskId, Rect)>,
}

impl BoardLayout {
    pub fn clear(&mut self) {
        self.input_area = None;
        self.quadrants.clear();
        self.cards.clear();
    }

    pub fn set_input_area(&mut self, area: Rect) {
        self.input_area = Some(area);
    }

    pub fn set_quadrant(&mut self, quadrant: Quadrant, area: Rect) {
        self.quadrants.push((quadrant, area));
    }

    pub fn push_card(&mut self, id: TaskId, area: Rect) {
        self.cards.push((id, area));
    }

    pub fn in_input(&self, column: u16, row: u16) -> bool {
        self.input_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// What lies under the given cell: a card first, else a quadrant's area.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<DropTarget> {
        let position = Position::new(column, row);
        if let Some((id, _)) = self.cards.iter().find(|(_, area)| area.contains(position)) {
            return Some(DropTarget::Card(*id));
        }
        self.quadrants
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(quadrant, _)| DropTarget::Quadrant(*quadrant))
    }
}
