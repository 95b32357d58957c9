use focuspath_core::{FocusResult, TextBuffer};

pub mod plan_commands;
pub mod task_commands;

pub use plan_commands::*;
pub use task_commands::*;

use crate::{FilterCriteria, Plan, TaskId};

/// A mutation of the plan store.
///
/// Commands carry intent only; [`crate::PlanStore::execute`] builds the
/// context and logs the description.
pub trait Command: Send + Sync {
    fn execute(&self, context: &mut CommandContext) -> FocusResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Everything a command may touch.
pub struct CommandContext<'a> {
    pub plan: &'a mut Option<Plan>,
    pub input: &'a mut TextBuffer,
    pub filters: &'a mut FilterCriteria,
    pub editing: &'a mut Option<TaskId>,
}
