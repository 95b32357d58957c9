//! Mouse drag gesture.
//!
//! A left press on a card arms the gesture. Moving with the button held
//! turns it into a drag; releasing resolves to a click or a drop.

use focuspath_domain::{DropTarget, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Pressed {
        task: TaskId,
        at: (u16, u16),
    },
    Dragging {
        task: TaskId,
        hover: Option<DropTarget>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    None,
    Click(TaskId),
    Drop(TaskId, DropTarget),
}

impl DragState {
    pub fn press(&mut self, hit: Option<DropTarget>, column: u16, row: u16) {
        *self = match hit {
            Some(DropTarget::Card(task)) => DragState::Pressed {
                task,
                at: (column, row),
            },
            _ => DragState::Idle,
        };
    }

    pub fn drag(&mut self, hit: Option<DropTarget>, column: u16, row: u16) {
        match *self {
            DragState::Pressed { task, at } if at != (column, row) => {
                tracing::debug!("Dragging task {}", task);
                *self = DragState::Dragging { task, hover: hit };
            }
            DragState::Dragging { task, .. } => {
                *self = DragState::Dragging { task, hover: hit };
            }
            _ => {}
        }
    }

    pub fn release(&mut self, hit: Option<DropTarget>) -> DragOutcome {
        match std::mem::take(self) {
            DragState::Idle => DragOutcome::None,
            DragState::Pressed { task, .. } => match hit {
                Some(DropTarget::Card(id)) if id == task => DragOutcome::Click(task),
                Some(target) => DragOutcome::Drop(task, target),
                None => DragOutcome::None,
            },
            DragState::Dragging { task, .. } => match hit {
                Some(target) => DragOutcome::Drop(task, target),
                None => DragOutcome::None,
            },
        }
    }

    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    /// Task being dragged, once the pointer has moved.
    pub fn dragged_task(&self) -> Option<TaskId> {
        match self {
            DragState::Dragging { task, .. } => Some(*task),
            _ => None,
        }
    }

    pub fn hover(&self) -> Option<DropTarget> {
        match self {
            DragState::Dragging { hover, .. } => *hover,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focuspath_domain::{Quadrant, Task};

    fn id() -> TaskId {
        Task::new("x", Quadrant::DoFirst, 1, 1).id
    }

    #[test]
    fn test_press_release_in_place_is_click() {
        let task = id();
        let mut drag = DragState::default();
        drag.press(Some(DropTarget::Card(task)), 10, 5);
        drag.drag(Some(DropTarget::Card(task)), 10, 5);
        assert_eq!(drag.dragged_task(), None);
        assert_eq!(
            drag.release(Some(DropTarget::Card(task))),
            DragOutcome::Click(task)
        );
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_drag_to_quadrant_area_drops() {
        let task = id();
        let target = DropTarget::Quadrant(Quadrant::Schedule);
        let mut drag = DragState::default();
        drag.press(Some(DropTarget::Card(task)), 10, 5);
        drag.drag(Some(target), 50, 8);

        assert_eq!(drag.dragged_task(), Some(task));
        assert_eq!(drag.hover(), Some(target));
        assert_eq!(drag.release(Some(target)), DragOutcome::Drop(task, target));
    }

    #[test]
    fn test_drag_back_onto_itself_drops_on_self() {
        let task = id();
        let mut drag = DragState::default();
        drag.press(Some(DropTarget::Card(task)), 10, 5);
        drag.drag(None, 12, 9);
        assert_eq!(
            drag.release(Some(DropTarget::Card(task))),
            DragOutcome::Drop(task, DropTarget::Card(task))
        );
    }

    #[test]
    fn test_press_outside_cards_and_release_outside_board() {
        let mut drag = DragState::default();
        drag.press(Some(DropTarget::Quadrant(Quadrant::Delegate)), 1, 1);
        assert_eq!(drag, DragState::Idle);
        assert_eq!(drag.release(None), DragOutcome::None);

        let task = id();
        drag.press(Some(DropTarget::Card(task)), 10, 5);
        drag.drag(None, 90, 40);
        assert_eq!(drag.release(None), DragOutcome::None);
    }
}
