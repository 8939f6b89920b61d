#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

use crate::models::{Task, TaskError, TaskInput};
use crate::store::TaskStore;
use log::debug;

/// One draft field. `update_field` is the only mutation surface the
/// presentation layer gets while the form is editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Description(String),
    Completed(bool),
}

/// The form is either empty, holding a draft, or waiting on the store.
/// `editing_id` is `None` when creating and the target id when editing, and
/// only exists alongside a draft, so a submit without a draft cannot be
/// expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Editing {
        draft: TaskInput,
        editing_id: Option<u64>,
    },
    Submitting {
        draft: TaskInput,
        editing_id: Option<u64>,
    },
}

/// The create-vs-edit state machine over a single draft. Collects input,
/// validates it, and hands persistence to the store: create when no task is
/// targeted, update otherwise. A failed submit keeps the draft so the user
/// can correct and retry; a successful one clears the form.
#[derive(Debug, Default)]
pub struct TaskForm {
    state: FormState,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, FormState::Idle)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, FormState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&TaskInput> {
        match &self.state {
            FormState::Idle => None,
            FormState::Editing { draft, .. } | FormState::Submitting { draft, .. } => Some(draft),
        }
    }

    pub fn editing_id(&self) -> Option<u64> {
        match &self.state {
            FormState::Idle => None,
            FormState::Editing { editing_id, .. } | FormState::Submitting { editing_id, .. } => {
                *editing_id
            }
        }
    }

    /// Starts a fresh create draft. Any unsaved draft is overwritten; only
    /// one draft exists at a time.
    pub fn begin_create(&mut self) {
        self.state = FormState::Editing {
            draft: TaskInput::default(),
            editing_id: None,
        };
    }

    /// Starts editing an existing task, copying its fields into the draft.
    /// Any unsaved draft is overwritten.
    pub fn begin_edit(&mut self, task: &Task) {
        self.state = FormState::Editing {
            draft: TaskInput::from(task),
            editing_id: Some(task.id),
        };
    }

    /// Mutates the draft in place. Ignored unless the form is editing.
    pub fn update_field(&mut self, field: DraftField) {
        let FormState::Editing { draft, .. } = &mut self.state else {
            debug!("update_field ignored outside of editing: {:?}", field);
            return;
        };
        match field {
            DraftField::Title(title) => draft.title = title,
            DraftField::Description(description) => draft.description = description,
            DraftField::Completed(is_completed) => draft.is_completed = is_completed,
        }
    }

    /// Discards the draft and returns to idle.
    pub fn cancel(&mut self) {
        self.state = FormState::Idle;
    }

    /// Validates the draft and persists it through the store. Invalid input
    /// is rejected before any store call and the form stays in editing. On
    /// success the form resets to idle; on remote failure it returns to
    /// editing with the draft intact for a retry.
    pub async fn submit(&mut self, store: &mut TaskStore) -> Result<Task, TaskError> {
        let FormState::Editing { draft, editing_id } = &self.state else {
            return Err(TaskError::Validation("nothing is being edited".to_string()));
        };
        let (draft, editing_id) = (draft.clone(), *editing_id);

        let input = draft.validated()?;

        self.state = FormState::Submitting {
            draft: draft.clone(),
            editing_id,
        };

        let res = match editing_id {
            Some(id) => store.update(id, input).await,
            None => store.create(input).await,
        };

        match res {
            Ok(task) => {
                self.state = FormState::Idle;
                Ok(task)
            }
            Err(err) => {
                self.state = FormState::Editing { draft, editing_id };
                Err(err)
            }
        }
    }
}
