#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

use crate::models::{Task, TaskError, TaskInput};
use crate::remote::ArcTaskService;
use log::{debug, warn};

/// In-memory mirror of the remote task collection. Nothing enters, changes
/// in, or leaves the local collection before the service has confirmed it;
/// a failed call leaves the collection exactly as it was.
///
/// Mutations go through `&mut self`, so operations on one store value are
/// serialized. Two stores pointed at the same service still race on the
/// server side and the last response to commit wins locally.
pub struct TaskStore {
    remote: ArcTaskService,
    tasks: Vec<Task>,
    loading: bool,
    last_error: Option<String>,
}

impl TaskStore {
    pub fn new(remote: ArcTaskService) -> Self {
        Self {
            remote,
            tasks: Vec::new(),
            loading: false,
            last_error: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The message of the most recent failed operation. Cleared by the next
    /// operation that succeeds; only one error is kept at a time.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fetches the full collection and replaces the local mirror wholesale.
    /// On failure the previous collection is kept, stale but consistent.
    pub async fn load(&mut self) -> Result<(), TaskError> {
        self.loading = true;
        let res = self.remote.list_tasks().await;
        self.loading = false;

        let tasks = self.settle(res)?;
        debug!("loaded {} tasks", tasks.len());
        self.tasks = tasks;
        Ok(())
    }

    /// Creates a task. The submitted id is `max(existing) + 1` (1 for an
    /// empty collection), but whatever task the service returns is what gets
    /// appended; the service may have reassigned the id.
    pub async fn create(&mut self, input: TaskInput) -> Result<Task, TaskError> {
        let input = match input.validated() {
            Ok(input) => input,
            Err(err) => return self.settle(Err(err)),
        };

        let candidate = Task::new(self.next_task_id(), input);
        let res = self.remote.create_task(&candidate).await;
        let task = self.settle(res)?;

        // The returned id normally equals the candidate, but the service has
        // the last word. Replace instead of append if it already exists so
        // the one-task-per-id invariant holds.
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task.clone(),
            None => self.tasks.push(task.clone()),
        }
        Ok(task)
    }

    /// Updates the task with the given id using the full payload. A success
    /// for an id that is not mirrored locally leaves the collection alone;
    /// that is not an error.
    pub async fn update(&mut self, id: u64, input: TaskInput) -> Result<Task, TaskError> {
        let input = match input.validated() {
            Ok(input) => input,
            Err(err) => return self.settle(Err(err)),
        };

        let record = Task::new(id, input);
        let res = self.remote.update_task(&record).await;
        let task = self.settle(res)?;
        self.replace(id, task.clone());
        Ok(task)
    }

    /// Flips `is_completed` on an existing task and submits the full record.
    /// Unlike `update` this skips text validation: the other fields are sent
    /// exactly as they are mirrored.
    pub async fn toggle_completion(&mut self, id: u64) -> Result<Task, TaskError> {
        let record = match self.get(id) {
            Some(task) => task.toggled(),
            None => {
                let err = TaskError::Validation(format!("no task with id {}", id));
                return self.settle(Err(err));
            }
        };

        let res = self.remote.update_task(&record).await;
        let task = self.settle(res)?;
        self.replace(id, task.clone());
        Ok(task)
    }

    /// Deletes the task with the given id. The local entry is removed only
    /// once the service has confirmed; a failure keeps it and is non-fatal.
    pub async fn remove(&mut self, id: u64) -> Result<(), TaskError> {
        let res = self.remote.delete_task(id).await;
        self.settle(res)?;
        self.tasks.retain(|t| t.id != id);
        Ok(())
    }

    fn next_task_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    fn replace(&mut self, id: u64, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
            *slot = task;
        }
    }

    /// Records or clears the current error alongside the operation outcome.
    fn settle<T>(&mut self, res: Result<T, TaskError>) -> Result<T, TaskError> {
        match &res {
            Ok(_) => self.last_error = None,
            Err(err) => {
                warn!("task operation failed: {}", err);
                self.last_error = Some(err.to_string());
            }
        }
        res
    }
}
