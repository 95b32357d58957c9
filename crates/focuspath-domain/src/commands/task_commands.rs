use super::{Command, CommandContext};
use crate::{Quadrant, Task};
use focuspath_core::{FocusError, FocusResult};

/// Replace the task at `index`.
pub struct UpdateTask {
    pub index: usize,
    pub task: Task,
}

impl Command for UpdateTask {
    fn execute(&self, context: &mut CommandContext) -> FocusResult<()> {
        let plan = context.plan.as_mut().ok_or(FocusError::NoPlan)?;
        let slot = plan
            .tasks
            .get_mut(self.index)
            .ok_or_else(|| FocusError::NotFound(format!("task at index {}", self.index)))?;
        *slot = self.task.clone();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update task {}: '{}'", self.index, self.task.title)
    }
}

/// Move the task at `source` into `quadrant`.
///
/// `target` is the index, before removal, of the card the task lands in front
/// of. `None` appends to the end of the sequence.
pub struct MoveTask {
    pub source: usize,
    pub quadrant: Quadrant,
    pub target: Option<usize>,
}

impl MoveTask {
    /// Insert position after the task at `source` has been removed from a
    /// sequence that is now `len` long.
    pub fn insert_position(source: usize, target: Option<usize>, len: usize) -> usize {
        match target {
            Some(target) if target > source => (target - 1).min(len),
            Some(target) => target.min(len),
            None => len,
        }
    }
}

impl Command for MoveTask {
    fn execute(&self, context: &mut CommandContext) -> FocusResult<()> {
        let plan = context.plan.as_mut().ok_or(FocusError::NoPlan)?;
        if self.source >= plan.tasks.len() {
            return Err(FocusError::NotFound(format!("task at index {}", self.source)));
        }

        let mut task = plan.tasks.remove(self.source);
        task.quadrant = self.quadrant;
        let position = Self::insert_position(self.source, self.target, plan.tasks.len());
        plan.tasks.insert(position, task);
        Ok(())
    }

    fn description(&self) -> String {
        match self.target {
            Some(target) => format!(
                "Move task {} to {} before index {}",
                self.source, self.quadrant, target
            ),
            None => format!("Move task {} to end of {}", self.source, self.quadrant),
        }
    }
}
