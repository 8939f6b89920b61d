use thiserror::Error;

/// Outcome classification for every store and form operation. `Validation`
/// is raised locally before any request is issued; `Remote` covers transport
/// failures and non-success responses from the task service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Remote(String),
}

impl TaskError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, TaskError::Remote(_))
    }
}
