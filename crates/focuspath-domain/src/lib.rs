pub mod commands;
pub mod editable;
pub mod filter;
pub mod plan;
pub mod quadrant;
pub mod store;
pub mod task;
pub mod view;

pub use editable::{parse_score, TaskEdit};
pub use filter::{visible_tasks, FilterCriteria, TaskFilter};
pub use plan::{Plan, PlanPayload, TaskPayload};
pub use quadrant::Quadrant;
pub use store::PlanStore;
pub use task::{Task, TaskId};
pub use view::{BoardView, DropTarget, QuadrantView};
