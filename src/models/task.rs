#[cfg(test)]
#[path = "task_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use super::TaskError;

/// A single task as the remote service stores it. The wire shape is
/// `{id, title, description, is_completed}`; whatever the service returns
/// is authoritative over anything the client submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl Task {
    pub fn new(id: u64, input: TaskInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            is_completed: input.is_completed,
        }
    }

    /// The same task with the completion flag flipped, all other fields
    /// untouched.
    pub fn toggled(&self) -> Self {
        let mut task = self.clone();
        task.is_completed = !task.is_completed;
        task
    }
}

/// The user-supplied part of a task, used as both the create/update payload
/// and the form draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl TaskInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            is_completed: false,
        }
    }

    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Trims both text fields and rejects the input when either ends up
    /// empty. Title and description are both required.
    pub fn validated(&self) -> Result<TaskInput, TaskError> {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(TaskError::Validation(
                "Title and description are required".to_string(),
            ));
        }
        Ok(TaskInput {
            title: title.to_string(),
            description: description.to_string(),
            is_completed: self.is_completed,
        })
    }
}

impl From<&Task> for TaskInput {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            is_completed: task.is_completed,
        }
    }
}
