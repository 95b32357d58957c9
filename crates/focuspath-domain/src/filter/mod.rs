//! Task filtering.
//!
//! Filters only read tasks; the visible subset is recomputed from the plan
//! whenever it is needed.

pub mod criteria;
pub mod task_filter;

pub use criteria::FilterCriteria;
pub use task_filter::{CompositeFilter, ImportanceFilter, SearchFilter, TaskFilter, UrgencyFilter};

use crate::Task;

/// Tasks that pass `criteria`, in sequence order.
pub fn visible_tasks<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    let filter = criteria.to_filter();
    tasks.iter().filter(|task| filter.matches(task)).collect()
}
