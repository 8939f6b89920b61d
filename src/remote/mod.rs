pub mod http;

pub use http::HttpTaskService;

#[cfg(test)]
use mockall::{automock, predicate::*};

use crate::config::RemoteConfig;
use crate::models::{Task, TaskError};
use async_trait::async_trait;
use eyre::Result;
use std::{sync::Arc, time::Duration};

/// The seam to the remote task service. The service owns the collection;
/// every task it returns is authoritative over whatever the client sent.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait TaskService {
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError>;

    /// The REST contract requires a client-chosen id in the payload. The
    /// service may reassign it; the returned task is what actually exists.
    async fn create_task(&self, task: &Task) -> Result<Task, TaskError>;

    async fn update_task(&self, task: &Task) -> Result<Task, TaskError>;

    async fn delete_task(&self, id: u64) -> Result<(), TaskError>;
}

pub type ArcTaskService = Arc<dyn TaskService + Send + Sync>;

pub fn new_remote(config: &RemoteConfig) -> Result<ArcTaskService> {
    if config.endpoint.is_empty() {
        eyre::bail!("remote endpoint is not configured");
    }

    let mut service = HttpTaskService::default().with_endpoint(&config.endpoint);
    if let Some(secs) = config.timeout_secs {
        service = service.with_timeout(Duration::from_secs(secs));
    }
    log::debug!("using task service at {}", service.endpoint());
    Ok(Arc::new(service))
}
