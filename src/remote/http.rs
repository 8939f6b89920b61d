#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use crate::config::user_agent;
use crate::models::{Task, TaskError};
use crate::remote::TaskService;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use std::time;

/// reqwest-backed implementation of the task service REST contract:
/// GET/POST `/tasks`, PUT/DELETE `/tasks/{id}`.
#[derive(Debug, Clone)]
pub struct HttpTaskService {
    endpoint: String,
    timeout: Option<time::Duration>,
}

impl Default for HttpTaskService {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            timeout: None,
        }
    }
}

impl HttpTaskService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<time::Duration> {
        self.timeout
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = reqwest::Client::new()
            .request(method, format!("{}{}", self.endpoint, path))
            .header("User-Agent", user_agent());
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        req
    }
}

#[async_trait]
impl TaskService for HttpTaskService {
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError> {
        let res = self
            .request(Method::GET, "/tasks")
            .send()
            .await
            .map_err(|err| transport_error("listing tasks", err))?;

        if !res.status().is_success() {
            return Err(status_error("listing tasks", res).await);
        }

        let tasks = res
            .json::<Vec<Task>>()
            .await
            .map_err(|err| transport_error("parsing task list", err))?;
        debug!("listed {} tasks from {}", tasks.len(), self.endpoint);
        Ok(tasks)
    }

    async fn create_task(&self, task: &Task) -> Result<Task, TaskError> {
        let res = self
            .request(Method::POST, "/tasks")
            .json(task)
            .send()
            .await
            .map_err(|err| transport_error("creating task", err))?;

        if !res.status().is_success() {
            return Err(status_error("creating task", res).await);
        }

        res.json::<Task>()
            .await
            .map_err(|err| transport_error("parsing created task", err))
    }

    async fn update_task(&self, task: &Task) -> Result<Task, TaskError> {
        let res = self
            .request(Method::PUT, &format!("/tasks/{}", task.id))
            .json(task)
            .send()
            .await
            .map_err(|err| transport_error("updating task", err))?;

        if !res.status().is_success() {
            return Err(status_error("updating task", res).await);
        }

        res.json::<Task>()
            .await
            .map_err(|err| transport_error("parsing updated task", err))
    }

    async fn delete_task(&self, id: u64) -> Result<(), TaskError> {
        let res = self
            .request(Method::DELETE, &format!("/tasks/{}", id))
            .send()
            .await
            .map_err(|err| transport_error("deleting task", err))?;

        if !res.status().is_success() {
            return Err(status_error("deleting task", res).await);
        }
        // Only the status matters for deletes; the body is ignored.
        Ok(())
    }
}

/// Error body of the task service, e.g. `{"detail": "Task not found"}`.
#[derive(Default, Debug, Deserialize)]
struct ErrorResponse {
    detail: Option<String>,
}

fn transport_error(action: &str, err: reqwest::Error) -> TaskError {
    warn!("{} failed: {}", action, err);
    TaskError::Remote(format!("{}: {}", action, err))
}

async fn status_error(action: &str, res: Response) -> TaskError {
    let http_code = res.status().as_u16();
    let detail = res
        .json::<ErrorResponse>()
        .await
        .unwrap_or_default()
        .detail;
    let message = match detail {
        Some(detail) => format!("{} failed ({}): {}", action, http_code, detail),
        None => format!("{} failed with status {}", action, http_code),
    };
    warn!("{}", message);
    TaskError::Remote(message)
}
