use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::quadrant::Quadrant;

pub type TaskId = Uuid;

/// One classified task.
///
/// Scores are expected in 1..=10. The model is trusted for the values it
/// returns; only manual edits are clamped (see [`crate::parse_score`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub quadrant: Quadrant,
    pub urgency_score: u8,
    pub importance_score: u8,
    pub reasoning: String,
    pub estimated_time: String,
}

impl Task {
    pub fn new(title: impl Into<String>, quadrant: Quadrant, urgency: u8, importance: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            quadrant,
            urgency_score: urgency,
            importance_score: importance,
            reasoning: String::new(),
            estimated_time: String::new(),
        }
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    pub fn with_estimated_time(mut self, estimated_time: impl Into<String>) -> Self {
        self.estimated_time = estimated_time.into();
        self
    }

    /// Case-insensitive substring match over title, estimated time and
    /// reasoning. `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [&self.title, &self.estimated_time, &self.reasoning]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = Task::new("Same title", Quadrant::DoFirst, 5, 5);
        let b = Task::new("Same title", Quadrant::DoFirst, 5, 5);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_matches_search_fields() {
        let task = Task::new("Email the Client", Quadrant::Delegate, 7, 3)
            .with_reasoning("Waiting on proposal feedback")
            .with_estimated_time("30 mins");

        assert!(task.matches_search(""));
        assert!(task.matches_search("client"));
        assert!(task.matches_search("30 min"));
        assert!(task.matches_search("proposal"));
        assert!(!task.matches_search("groceries"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let task = Task::new("Finish report", Quadrant::DoFirst, 9, 8).with_estimated_time("2h");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["urgencyScore"], 9);
        assert_eq!(json["importanceScore"], 8);
        assert_eq!(json["estimatedTime"], "2h");
        assert_eq!(json["quadrant"], "DO_FIRST");
    }
}
