#[cfg(test)]
#[path = "run_test.rs"]
mod tests;

use eyre::Result;

use crate::cli::Action;
use crate::form::{DraftField, TaskForm};
use crate::models::Task;
use crate::store::TaskStore;

/// Executes one subcommand against a freshly loaded store. Add and edit go
/// through the form so the CLI exercises the same draft/submit path an
/// interactive frontend would.
pub async fn run(action: Action, store: &mut TaskStore) -> Result<()> {
    match action {
        Action::List => print_tasks(store.tasks()),
        Action::Add {
            title,
            description,
            completed,
        } => {
            let mut form = TaskForm::new();
            form.begin_create();
            form.update_field(DraftField::Title(title));
            form.update_field(DraftField::Description(description));
            form.update_field(DraftField::Completed(completed));
            let task = form.submit(store).await?;
            println!("added task {}: {}", task.id, task.title);
        }
        Action::Edit {
            id,
            title,
            description,
            completed,
        } => {
            let target = store
                .get(id)
                .ok_or_else(|| eyre::eyre!("no task with id {}", id))?
                .clone();
            let mut form = TaskForm::new();
            form.begin_edit(&target);
            if let Some(title) = title {
                form.update_field(DraftField::Title(title));
            }
            if let Some(description) = description {
                form.update_field(DraftField::Description(description));
            }
            if let Some(completed) = completed {
                form.update_field(DraftField::Completed(completed));
            }
            let task = form.submit(store).await?;
            println!("updated task {}: {}", task.id, task.title);
        }
        Action::Done { id } => {
            let task = store.toggle_completion(id).await?;
            let state = if task.is_completed { "done" } else { "open" };
            println!("task {} is now {}", task.id, state);
        }
        Action::Rm { id } => {
            store.remove(id).await?;
            println!("deleted task {}", id);
        }
    }
    Ok(())
}

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("no tasks");
        return;
    }
    for task in tasks {
        let mark = if task.is_completed { "x" } else { " " };
        println!("[{}] {:>4}  {}", mark, task.id, task.title);
        println!("           {}", task.description);
    }
}
