use focuspath_core::TextBuffer;
use focuspath_domain::{TaskEdit, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Reasoning,
    EstimatedTime,
    Urgency,
    Importance,
}

impl EditField {
    pub const ALL: [EditField; 5] = [
        EditField::Title,
        EditField::Reasoning,
        EditField::EstimatedTime,
        EditField::Urgency,
        EditField::Importance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EditField::Title => "Title",
            EditField::Reasoning => "Rationale",
            EditField::EstimatedTime => "Estimated Time",
            EditField::Urgency => "Urgency (1-10)",
            EditField::Importance => "Importance (1-10)",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Working copy of one task while the edit dialog is open.
#[derive(Debug, Clone)]
pub struct EditDialogState {
    pub task_id: TaskId,
    pub field: EditField,
    title: TextBuffer,
    reasoning: TextBuffer,
    estimated_time: TextBuffer,
    urgency: TextBuffer,
    importance: TextBuffer,
}

impl EditDialogState {
    pub fn new(task_id: TaskId, edit: TaskEdit) -> Self {
        Self {
            task_id,
            field: EditField::Title,
            title: TextBuffer::from_text(edit.title),
            reasoning: TextBuffer::from_text(edit.reasoning),
            estimated_time: TextBuffer::from_text(edit.estimated_time),
            urgency: TextBuffer::from_text(edit.urgency),
            importance: TextBuffer::from_text(edit.importance),
        }
    }

    pub fn input(&self, field: EditField) -> &TextBuffer {
        match field {
            EditField::Title => &self.title,
            EditField::Reasoning => &self.reasoning,
            EditField::EstimatedTime => &self.estimated_time,
            EditField::Urgency => &self.urgency,
            EditField::Importance => &self.importance,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut TextBuffer {
        match self.field {
            EditField::Title => &mut self.title,
            EditField::Reasoning => &mut self.reasoning,
            EditField::EstimatedTime => &mut self.estimated_time,
            EditField::Urgency => &mut self.urgency,
            EditField::Importance => &mut self.importance,
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    pub fn to_edit(&self) -> TaskEdit {
        TaskEdit {
            title: self.title.as_str().to_string(),
            reasoning: self.reasoning.as_str().to_string(),
            estimated_time: self.estimated_time.as_str().to_string(),
            urgency: self.urgency.as_str().to_string(),
            importance: self.importance.as_str().to_string(),
        }
    }
}
