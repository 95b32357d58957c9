//! Task filter implementations.

use crate::Task;

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Keep tasks whose urgency is at least `min`.
pub struct UrgencyFilter {
    min: u8,
}

impl UrgencyFilter {
    pub fn at_least(min: u8) -> Self {
        Self { min }
    }
}

impl TaskFilter for UrgencyFilter {
    fn matches(&self, task: &Task) -> bool {
        task.urgency_score >= self.min
    }
}

/// Keep tasks whose importance is at least `min`.
pub struct ImportanceFilter {
    min: u8,
}

impl ImportanceFilter {
    pub fn at_least(min: u8) -> Self {
        Self { min }
    }
}

impl TaskFilter for ImportanceFilter {
    fn matches(&self, task: &Task) -> bool {
        task.importance_score >= self.min
    }
}

/// Case-insensitive search over title, estimated time and reasoning.
///
/// An empty query matches every task.
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl TaskFilter for SearchFilter {
    fn matches(&self, task: &Task) -> bool {
        task.matches_search(&self.query)
    }
}

/// Combine multiple filters with AND logic.
pub struct CompositeFilter {
    filters: Vec<Box<dyn TaskFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all tasks).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    pub fn with_filter(mut self, filter: Box<dyn TaskFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFilter for CompositeFilter {
    fn matches(&self, task: &Task) -> bool {
        self.filters.iter().all(|f| f.matches(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quadrant;

    #[test]
    fn test_score_filters_are_inclusive() {
        let task = Task::new("Finish report", Quadrant::DoFirst, 9, 8);
        assert!(UrgencyFilter::at_least(9).matches(&task));
        assert!(!UrgencyFilter::at_least(10).matches(&task));
        assert!(ImportanceFilter::at_least(8).matches(&task));
        assert!(!ImportanceFilter::at_least(9).matches(&task));
    }

    #[test]
    fn test_search_filter_lowercases_query() {
        let task = Task::new("Fix login bug", Quadrant::DoFirst, 8, 9);
        let filter = SearchFilter::new("LOGIN");
        assert_eq!(filter.query(), "login");
        assert!(filter.matches(&task));
        assert!(SearchFilter::new("").matches(&task));
        assert!(!SearchFilter::new("groceries").matches(&task));
    }

    #[test]
    fn test_composite_filter() {
        let task = Task::new("Buy milk", Quadrant::Eliminate, 2, 1).with_estimated_time("15 mins");

        let empty = CompositeFilter::new();
        assert!(empty.is_empty());
        assert!(empty.matches(&task));

        let passing = CompositeFilter::new()
            .with_filter(Box::new(UrgencyFilter::at_least(2)))
            .with_filter(Box::new(SearchFilter::new("15")));
        assert!(passing.matches(&task));

        let failing = CompositeFilter::new()
            .with_filter(Box::new(UrgencyFilter::at_least(1)))
            .with_filter(Box::new(ImportanceFilter::at_least(5)));
        assert!(!failing.matches(&task));
    }
}
