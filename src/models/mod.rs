pub mod error;
pub mod task;

pub use error::TaskError;
pub use task::{Task, TaskInput};
