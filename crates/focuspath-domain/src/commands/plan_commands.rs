use super::{Command, CommandContext};
use crate::{FilterCriteria, Plan};
use focuspath_core::FocusResult;

/// Replace the whole plan with a fresh classification.
///
/// Filters go back to their defaults so a new plan is first shown unfiltered.
pub struct SetPlan {
    pub plan: Plan,
}

impl Command for SetPlan {
    fn execute(&self, context: &mut CommandContext) -> FocusResult<()> {
        *context.plan = Some(self.plan.clone());
        *context.filters = FilterCriteria::default();
        *context.editing = None;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set plan with {} tasks", self.plan.len())
    }
}

/// Clear the plan and the raw input. Filters are left alone.
pub struct ResetPlan;

impl Command for ResetPlan {
    fn execute(&self, context: &mut CommandContext) -> FocusResult<()> {
        *context.plan = None;
        context.input.clear();
        *context.editing = None;
        Ok(())
    }

    fn description(&self) -> String {
        "Reset plan".to_string()
    }
}
