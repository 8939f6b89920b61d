use super::*;
use crate::models::TaskInput;
use crate::remote::MockTaskService;
use std::sync::Arc;

fn task(id: u64, title: &str) -> Task {
    Task::new(id, TaskInput::new(title, format!("description of {}", title)))
}

fn expect_list(mock: &mut MockTaskService, tasks: Vec<Task>) {
    mock.expect_list_tasks()
        .times(1)
        .returning(move || {
            let tasks = tasks.clone();
            Box::pin(async move { Ok(tasks) })
        });
}

async fn loaded_store(mock: MockTaskService) -> TaskStore {
    let mut store = TaskStore::new(Arc::new(mock));
    store.load().await.expect("failed to load");
    store
}

#[tokio::test]
async fn test_load_replaces_collection_in_order() {
    let tasks = vec![task(3, "c"), task(1, "a"), task(2, "b")];
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, tasks.clone());

    let store = loaded_store(mock).await;
    assert_eq!(store.tasks(), tasks.as_slice());
    assert!(!store.is_loading());
    assert_eq!(store.last_error(), None);
}

#[tokio::test]
async fn test_load_failure_keeps_previous_collection() {
    let tasks = vec![task(1, "a"), task(2, "b")];
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, tasks.clone());
    mock.expect_list_tasks()
        .times(1)
        .returning(|| Box::pin(async { Err(TaskError::Remote("listing tasks failed".into())) }));

    let mut store = loaded_store(mock).await;
    let err = store.load().await.unwrap_err();

    assert!(err.is_remote());
    // Stale but consistent beats empty but wrong.
    assert_eq!(store.tasks(), tasks.as_slice());
    assert!(!store.is_loading());
    assert_eq!(store.last_error(), Some("listing tasks failed"));
}

#[tokio::test]
async fn test_create_rejects_blank_input_without_network_call() {
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, vec![task(1, "a")]);
    mock.expect_create_task().times(0);

    let mut store = loaded_store(mock).await;
    let err = store
        .create(TaskInput::new("  ", "something"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.last_error(), Some("Title and description are required"));
}

#[tokio::test]
async fn test_create_candidate_id_is_max_plus_one() {
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, vec![task(2, "a"), task(5, "b"), task(7, "c")]);
    mock.expect_create_task()
        .times(1)
        .withf(|submitted| submitted.id == 8)
        .returning(|submitted| {
            let echo = submitted.clone();
            Box::pin(async move { Ok(echo) })
        });

    let mut store = loaded_store(mock).await;
    let created = store
        .create(TaskInput::new("d", "fourth"))
        .await
        .expect("failed to create");

    assert_eq!(created.id, 8);
    assert_eq!(store.tasks().len(), 4);
    assert_eq!(store.tasks().last(), Some(&created));
}

#[tokio::test]
async fn test_create_candidate_id_for_empty_collection() {
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, vec![]);
    mock.expect_create_task()
        .times(1)
        .withf(|submitted| submitted.id == 1)
        .returning(|submitted| {
            let echo = submitted.clone();
            Box::pin(async move { Ok(echo) })
        });

    let mut store = loaded_store(mock).await;
    let created = store
        .create(TaskInput::new("a", "first"))
        .await
        .expect("failed to create");
    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn test_create_commits_server_assigned_id() {
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, vec![task(1, "a")]);
    mock.expect_create_task()
        .times(1)
        .withf(|submitted| submitted.id == 2)
        .returning(|submitted| {
            // The service reassigns the id; its response is authoritative.
            let mut stored = submitted.clone();
            stored.id = 42;
            Box::pin(async move { Ok(stored) })
        });

    let mut store = loaded_store(mock).await;
    let created = store
        .create(TaskInput::new("b", "second"))
        .await
        .expect("failed to create");

    assert_eq!(created.id, 42);
    assert!(store.get(42).is_some());
    assert_eq!(store.tasks().len(), 2);
    let mut ids = store.tasks().iter().map(|t| t.id).collect::<Vec<_>>();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), store.tasks().len());
}

#[tokio::test]
async fn test_create_failure_leaves_collection_unchanged() {
    let tasks = vec![task(1, "a")];
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, tasks.clone());
    mock.expect_create_task()
        .times(1)
        .returning(|_| Box::pin(async { Err(TaskError::Remote("creating task failed".into())) }));

    let mut store = loaded_store(mock).await;
    let err = store.create(TaskInput::new("b", "second")).await.unwrap_err();

    assert!(err.is_remote());
    assert_eq!(store.tasks(), tasks.as_slice());
    assert_eq!(store.last_error(), Some("creating task failed"));
}

#[tokio::test]
async fn test_update_replaces_matching_task_in_place() {
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, vec![task(1, "a"), task(2, "b"), task(3, "c")]);
    mock.expect_update_task()
        .times(1)
        .withf(|record| record.id == 2 && record.title == "renamed")
        .returning(|record| {
            let echo = record.clone();
            Box::pin(async move { Ok(echo) })
        });

    let mut store = loaded_store(mock).await;
    store
        .update(2, TaskInput::new("renamed", "still b"))
        .await
        .expect("failed to update");

    let ids = store.tasks().iter().map(|t| t.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(store.get(2).unwrap().title, "renamed");
    assert_eq!(store.get(1).unwrap().title, "a");
    assert_eq!(store.get(3).unwrap().title, "c");
}

#[tokio::test]
async fn test_update_unknown_id_is_collection_noop() {
    let tasks = vec![task(1, "a")];
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, tasks.clone());
    mock.expect_update_task().times(1).returning(|record| {
        let echo = record.clone();
        Box::pin(async move { Ok(echo) })
    });

    let mut store = loaded_store(mock).await;
    store
        .update(99, TaskInput::new("ghost", "not mirrored"))
        .await
        .expect("update itself should succeed");

    assert_eq!(store.tasks(), tasks.as_slice());
}

#[tokio::test]
async fn test_toggle_completion_flips_only_the_flag() {
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, vec![task(1, "a"), task(2, "b")]);
    mock.expect_update_task()
        .times(1)
        .withf(|record| record.id == 2 && record.is_completed)
        .returning(|record| {
            let echo = record.clone();
            Box::pin(async move { Ok(echo) })
        });

    let mut store = loaded_store(mock).await;
    let toggled = store.toggle_completion(2).await.expect("failed to toggle");

    assert_eq!(toggled.is_completed, true);
    assert_eq!(toggled.title, "b");
    assert_eq!(toggled.description, "description of b");
    assert_eq!(store.get(2).unwrap(), &toggled);
    assert_eq!(store.get(1).unwrap().is_completed, false);
}

#[tokio::test]
async fn test_toggle_completion_unknown_id() {
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, vec![task(1, "a")]);
    mock.expect_update_task().times(0);

    let mut store = loaded_store(mock).await;
    let err = store.toggle_completion(99).await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_remove_deletes_exactly_one() {
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, vec![task(1, "a"), task(2, "b"), task(3, "c")]);
    mock.expect_delete_task()
        .times(1)
        .withf(|id| *id == 2)
        .returning(|_| Box::pin(async { Ok(()) }));

    let mut store = loaded_store(mock).await;
    store.remove(2).await.expect("failed to remove");

    let ids = store.tasks().iter().map(|t| t.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_remove_failure_keeps_task() {
    let tasks = vec![task(1, "a"), task(2, "b")];
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, tasks.clone());
    mock.expect_delete_task()
        .times(1)
        .returning(|_| Box::pin(async { Err(TaskError::Remote("deleting task failed".into())) }));

    let mut store = loaded_store(mock).await;
    let err = store.remove(2).await.unwrap_err();

    assert!(err.is_remote());
    assert_eq!(store.tasks(), tasks.as_slice());
    assert_eq!(store.last_error(), Some("deleting task failed"));
}

#[tokio::test]
async fn test_error_cleared_by_next_success() {
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, vec![task(1, "a")]);
    mock.expect_delete_task()
        .times(1)
        .withf(|id| *id == 9)
        .returning(|_| Box::pin(async { Err(TaskError::Remote("deleting task failed".into())) }));
    mock.expect_delete_task()
        .times(1)
        .withf(|id| *id == 1)
        .returning(|_| Box::pin(async { Ok(()) }));

    let mut store = loaded_store(mock).await;
    store.remove(9).await.unwrap_err();
    assert_eq!(store.last_error(), Some("deleting task failed"));

    store.remove(1).await.expect("failed to remove");
    assert_eq!(store.last_error(), None);
}

// Mutations on one store value are serialized, so "concurrent" here means
// two operations racing on the same id back to back. The one whose response
// commits last wins; with the delete committing last the task is gone no
// matter what the update returned.
#[tokio::test]
async fn test_delete_committing_last_wins() {
    let mut mock = MockTaskService::new();
    expect_list(&mut mock, vec![task(1, "a"), task(2, "b")]);
    mock.expect_update_task().times(1).returning(|record| {
        let echo = record.clone();
        Box::pin(async move { Ok(echo) })
    });
    mock.expect_delete_task()
        .times(1)
        .returning(|_| Box::pin(async { Ok(()) }));

    let mut store = loaded_store(mock).await;
    store
        .update(2, TaskInput::new("renamed", "racing"))
        .await
        .expect("failed to update");
    store.remove(2).await.expect("failed to remove");

    assert!(store.get(2).is_none());
    assert_eq!(store.tasks().len(), 1);
}
