//! The single owner of plan state.
//!
//! Every mutation goes through a [`Command`]; reads borrow straight from the
//! store. The board view is derived on demand and never cached.

use focuspath_core::{Editable, FocusError, FocusResult, TextBuffer};

use crate::commands::{Command, CommandContext, MoveTask, ResetPlan, SetPlan, UpdateTask};
use crate::{
    BoardView, DropTarget, FilterCriteria, Plan, Quadrant, Task, TaskEdit, TaskFilter, TaskId,
};

#[derive(Debug, Default)]
pub struct PlanStore {
    plan: Option<Plan>,
    input: TextBuffer,
    filters: FilterCriteria,
    editing: Option<TaskId>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, command: Box<dyn Command>) -> FocusResult<()> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let mut context = CommandContext {
            plan: &mut self.plan,
            input: &mut self.input,
            filters: &mut self.filters,
            editing: &mut self.editing,
        };
        command.execute(&mut context)
    }

    pub fn set_plan(&mut self, plan: Plan) -> FocusResult<()> {
        self.execute(Box::new(SetPlan { plan }))
    }

    pub fn update_task(&mut self, index: usize, task: Task) -> FocusResult<()> {
        self.execute(Box::new(UpdateTask { index, task }))
    }

    pub fn move_task(
        &mut self,
        source: usize,
        quadrant: Quadrant,
        target: Option<usize>,
    ) -> FocusResult<()> {
        self.execute(Box::new(MoveTask {
            source,
            quadrant,
            target,
        }))
    }

    pub fn reset(&mut self) -> FocusResult<()> {
        self.execute(Box::new(ResetPlan))
    }

    /// Apply a board drop. Returns false when the drop changed nothing.
    pub fn drop_task(&mut self, id: TaskId, target: DropTarget) -> FocusResult<bool> {
        let source = self
            .index_of(id)
            .ok_or_else(|| FocusError::NotFound(format!("task {}", id)))?;

        match target {
            DropTarget::Card(target_id) if target_id == id => Ok(false),
            DropTarget::Card(target_id) => {
                let (target, quadrant) = self
                    .index_of(target_id)
                    .zip(self.task(target_id).map(|t| t.quadrant))
                    .ok_or_else(|| FocusError::NotFound(format!("task {}", target_id)))?;
                self.move_task(source, quadrant, Some(target))?;
                Ok(true)
            }
            DropTarget::Quadrant(quadrant) => {
                self.move_task(source, quadrant, None)?;
                Ok(true)
            }
        }
    }

    /// Save the edit dialog's copy over the task being edited and close the
    /// dialog.
    pub fn commit_edit(&mut self, edit: TaskEdit) -> FocusResult<()> {
        let id = self
            .editing
            .ok_or_else(|| FocusError::Validation("no task is being edited".to_string()))?;
        let index = self
            .index_of(id)
            .ok_or_else(|| FocusError::NotFound(format!("task {}", id)))?;

        let mut task = self.tasks()[index].clone();
        edit.apply_to(&mut task);
        self.update_task(index, task)?;
        self.editing = None;
        Ok(())
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }

    pub fn tasks(&self) -> &[Task] {
        self.plan.as_ref().map(|p| p.tasks.as_slice()).unwrap_or(&[])
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.plan.as_ref().and_then(|p| p.task(id))
    }

    pub fn index_of(&self, id: TaskId) -> Option<usize> {
        self.plan.as_ref().and_then(|p| p.index_of(id))
    }

    pub fn view(&self) -> BoardView {
        BoardView::derive(self.tasks(), &self.filters)
    }

    /// Visible tasks of one quadrant, in sequence order.
    pub fn tasks_in_quadrant(&self, quadrant: Quadrant) -> Vec<&Task> {
        let filter = self.filters.to_filter();
        self.tasks()
            .iter()
            .filter(|t| t.quadrant == quadrant)
            .filter(|t| filter.matches(t))
            .collect()
    }

    pub fn input(&self) -> &TextBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextBuffer {
        &mut self.input
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterCriteria {
        &mut self.filters
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterCriteria::default();
    }

    pub fn open_editor(&mut self, id: TaskId) -> FocusResult<TaskEdit> {
        let task = self
            .task(id)
            .ok_or_else(|| FocusError::NotFound(format!("task {}", id)))?;
        let edit = TaskEdit::from_entity(task);
        self.editing = Some(id);
        Ok(edit)
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }
}
