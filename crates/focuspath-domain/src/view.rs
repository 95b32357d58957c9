//! Read-only projection of a plan onto the four quadrants.

use crate::filter::{FilterCriteria, TaskFilter};
use crate::quadrant::Quadrant;
use crate::task::{Task, TaskId};

/// Where a dragged task was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// On another card: the dragged task takes that card's position and quadrant.
    Card(TaskId),
    /// On a quadrant's empty area: the dragged task goes to the end of the list.
    Quadrant(Quadrant),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantView {
    pub quadrant: Quadrant,
    /// Visible tasks in sequence order.
    pub task_ids: Vec<TaskId>,
    /// Tasks in the quadrant before filtering.
    pub total: usize,
}

impl QuadrantView {
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<TaskId> {
        self.task_ids.get(row).copied()
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.task_ids.iter().position(|t| *t == id)
    }

    /// True when the quadrant has tasks but every one of them is filtered out.
    pub fn is_filtered_empty(&self) -> bool {
        self.task_ids.is_empty() && self.total > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    quadrants: [QuadrantView; 4],
}

impl BoardView {
    pub fn derive(tasks: &[Task], criteria: &FilterCriteria) -> Self {
        let filter = criteria.to_filter();
        let quadrants = Quadrant::ALL.map(|quadrant| {
            let mut total = 0;
            let mut task_ids = vec![];
            for task in tasks.iter().filter(|t| t.quadrant == quadrant) {
                total += 1;
                if filter.matches(task) {
                    task_ids.push(task.id);
                }
            }
            QuadrantView {
                quadrant,
                task_ids,
                total,
            }
        });
        Self { quadrants }
    }

    pub fn empty() -> Self {
        Self {
            quadrants: Quadrant::ALL.map(|quadrant| QuadrantView {
                quadrant,
                task_ids: vec![],
                total: 0,
            }),
        }
    }

    pub fn get(&self, quadrant: Quadrant) -> &QuadrantView {
        &self.quadrants[quadrant.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuadrantView> {
        self.quadrants.iter()
    }

    pub fn visible_count(&self) -> usize {
        self.quadrants.iter().map(QuadrantView::len).sum()
    }

    pub fn total_count(&self) -> usize {
        self.quadrants.iter().map(|q| q.total).sum()
    }

    /// Quadrant and row of a visible task.
    pub fn locate(&self, id: TaskId) -> Option<(Quadrant, usize)> {
        self.quadrants
            .iter()
            .find_map(|q| q.position(id).map(|row| (q.quadrant, row)))
    }
}
