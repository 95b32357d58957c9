//! The classification result and its wire form.
//!
//! `PlanPayload` mirrors the JSON the model is constrained to produce.
//! `Plan` is the in-memory form: every task carries a generated id so edits
//! and drags can follow a task while its position changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::quadrant::Quadrant;
use crate::task::{Task, TaskId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub tasks: Vec<Task>,
    pub executive_summary: String,
    pub top_priority: String,
    pub generated_at: DateTime<Utc>,
}

impl Plan {
    pub fn new(
        tasks: Vec<Task>,
        executive_summary: impl Into<String>,
        top_priority: impl Into<String>,
    ) -> Self {
        Self {
            tasks,
            executive_summary: executive_summary.into(),
            top_priority: top_priority.into(),
            generated_at: Utc::now(),
        }
    }

    pub fn from_payload(payload: PlanPayload) -> Self {
        let tasks = payload.tasks.into_iter().map(TaskPayload::into_task).collect();
        Self::new(tasks, payload.executive_summary, payload.top_priority)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn index_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn count_in(&self, quadrant: Quadrant) -> usize {
        self.tasks.iter().filter(|t| t.quadrant == quadrant).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPayload {
    pub tasks: Vec<TaskPayload>,
    pub executive_summary: String,
    pub top_priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub title: String,
    pub quadrant: Quadrant,
    #[serde(deserialize_with = "deserialize_score")]
    pub urgency_score: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub importance_score: u8,
    pub reasoning: String,
    pub estimated_time: String,
}

impl TaskPayload {
    pub fn into_task(self) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: self.title,
            quadrant: self.quadrant,
            urgency_score: self.urgency_score,
            importance_score: self.importance_score,
            reasoning: self.reasoning,
            estimated_time: self.estimated_time,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

/// Scores arrive as JSON numbers, occasionally fractional or quoted.
/// They are rounded and saturated into `u8`.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawScore::deserialize(deserializer)? {
        RawScore::Number(n) => n,
        RawScore::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("score '{}' is not a number", s))
        })?,
    };
    Ok(value.round().clamp(0.0, u8::MAX as f64) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "tasks": [
            {
                "title": "Finish report",
                "quadrant": "DO_FIRST",
                "urgencyScore": 9,
                "importanceScore": 8,
                "reasoning": "Due Friday",
                "estimatedTime": "3 hours"
            },
            {
                "title": "Buy milk",
                "quadrant": "ELIMINATE",
                "urgencyScore": 2.4,
                "importanceScore": "1",
                "reasoning": "Can wait",
                "estimatedTime": "15 mins"
            }
        ],
        "executiveSummary": "One real deadline this week.",
        "topPriority": "Finish report"
    }"#;

    #[test]
    fn test_payload_parses_and_converts() {
        let payload: PlanPayload = serde_json::from_str(REPLY).unwrap();
        let plan = Plan::from_payload(payload);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.tasks[0].quadrant, Quadrant::DoFirst);
        assert_eq!(plan.tasks[1].urgency_score, 2);
        assert_eq!(plan.tasks[1].importance_score, 1);
        assert_eq!(plan.top_priority, "Finish report");
        assert_ne!(plan.tasks[0].id, plan.tasks[1].id);
    }

    #[test]
    fn test_unknown_quadrant_is_rejected() {
        let reply = REPLY.replace("ELIMINATE", "LATER");
        assert!(serde_json::from_str::<PlanPayload>(&reply).is_err());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let reply = REPLY.replace("\"topPriority\": \"Finish report\"", "\"other\": 1");
        assert!(serde_json::from_str::<PlanPayload>(&reply).is_err());
    }

    #[test]
    fn test_score_saturates() {
        let reply = REPLY.replace("\"urgencyScore\": 9", "\"urgencyScore\": 900");
        let payload: PlanPayload = serde_json::from_str(&reply).unwrap();
        assert_eq!(payload.tasks[0].urgency_score, 255);

        let reply = REPLY.replace("\"urgencyScore\": 9", "\"urgencyScore\": -3");
        let payload: PlanPayload = serde_json::from_str(&reply).unwrap();
        assert_eq!(payload.tasks[0].urgency_score, 0);
    }

    #[test]
    fn test_lookup_helpers() {
        let report = Task::new("Finish report", Quadrant::DoFirst, 9, 8);
        let milk = Task::new("Buy milk", Quadrant::Eliminate, 2, 1);
        let milk_id = milk.id;
        let plan = Plan::new(vec![report, milk], "summary", "Finish report");

        assert_eq!(plan.index_of(milk_id), Some(1));
        assert_eq!(plan.task(milk_id).map(|t| t.title.as_str()), Some("Buy milk"));
        assert_eq!(plan.count_in(Quadrant::DoFirst), 1);
        assert_eq!(plan.count_in(Quadrant::Schedule), 0);
    }
}
