use crate::Task;
use focuspath_core::Editable;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// Parse a score typed by the user.
///
/// Reads an optional sign and the leading run of digits, ignoring leading
/// whitespace and anything after the digits, so `"7 hours"` is 7. No digits
/// or a value below 1 gives 1. There is no upper bound beyond `u8::MAX`.
pub fn parse_score(input: &str) -> u8 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || negative {
        return MIN_SCORE;
    }
    digits
        .parse::<u64>()
        .ok()
        .and_then(|value| u8::try_from(value).ok())
        .unwrap_or(u8::MAX)
        .max(MIN_SCORE)
}

/// Editable copy of a task's user-facing fields.
///
/// Scores are held as the raw text the user typed and only parsed when the
/// copy is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEdit {
    pub title: String,
    pub reasoning: String,
    pub estimated_time: String,
    pub urgency: String,
    pub importance: String,
}

impl Editable<Task> for TaskEdit {
    fn from_entity(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            reasoning: task.reasoning.clone(),
            estimated_time: task.estimated_time.clone(),
            urgency: task.urgency_score.to_string(),
            importance: task.importance_score.to_string(),
        }
    }

    fn apply_to(self, task: &mut Task) {
        task.title = self.title;
        task.reasoning = self.reasoning;
        task.estimated_time = self.estimated_time;
        task.urgency_score = parse_score(&self.urgency);
        task.importance_score = parse_score(&self.importance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quadrant;

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("7"), 7);
        assert_eq!(parse_score("  4"), 4);
        assert_eq!(parse_score("+6"), 6);
        assert_eq!(parse_score("7 hours"), 7);
        assert_eq!(parse_score("abc"), 1);
        assert_eq!(parse_score(""), 1);
        assert_eq!(parse_score("0"), 1);
        assert_eq!(parse_score("-3"), 1);
    }

    #[test]
    fn test_parse_score_has_no_upper_clamp() {
        assert_eq!(parse_score("15"), 15);
        assert_eq!(parse_score("11"), 11);
        assert_eq!(parse_score("300"), u8::MAX);
        assert_eq!(parse_score("99999999999999999999999"), u8::MAX);
    }

    #[test]
    fn test_round_trip_leaves_task_unchanged() {
        let original = Task::new("Finish report", Quadrant::DoFirst, 9, 8)
            .with_reasoning("Due Friday")
            .with_estimated_time("3 hours");
        let mut task = original.clone();

        TaskEdit::from_entity(&task).apply_to(&mut task);
        assert_eq!(task, original);
    }

    #[test]
    fn test_apply_keeps_identity_and_quadrant() {
        let mut task = Task::new("Finish report", Quadrant::DoFirst, 9, 8);
        let id = task.id;

        let mut edit = TaskEdit::from_entity(&task);
        edit.title = "Finish quarterly report".to_string();
        edit.urgency = "abc".to_string();
        edit.apply_to(&mut task);

        assert_eq!(task.id, id);
        assert_eq!(task.quadrant, Quadrant::DoFirst);
        assert_eq!(task.title, "Finish quarterly report");
        assert_eq!(task.urgency_score, 1);
        assert_eq!(task.importance_score, 8);
    }
}
