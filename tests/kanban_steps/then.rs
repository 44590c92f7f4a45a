//! Then steps for kanban BDD scenarios.

use super::world::{KanbanWorld, titles};
use kboard::kanban::{
    domain::{KanbanDomainError, Status, Task},
    services::TaskServiceError,
};
use rstest_bdd_macros::then;

fn task_titles(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect()
}

#[then(r#"the task "{title}" has status "{status}""#)]
fn task_has_status(world: &KanbanWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let expected = Status::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.tasks.get_task(world.task_id(&title)?)?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"the task "{title}" no longer exists"#)]
fn task_no_longer_exists(world: &KanbanWorld, title: String) -> Result<(), eyre::Report> {
    let result = world.tasks.get_task(world.task_id(&title)?);
    if !matches!(result, Err(TaskServiceError::TaskNotFound(_))) {
        return Err(eyre::eyre!("expected task {title:?} to be gone, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the backlog lists "{expected}""#)]
fn backlog_lists(world: &KanbanWorld, expected: String) -> Result<(), eyre::Report> {
    let backlog = task_titles(&world.tasks.get_backlog()?);
    if backlog != titles(&expected) {
        return Err(eyre::eyre!("expected backlog {expected:?}, found {backlog:?}"));
    }
    Ok(())
}

#[then("the backlog is empty")]
fn backlog_is_empty(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let backlog = world.tasks.get_backlog()?;
    if !backlog.is_empty() {
        return Err(eyre::eyre!("expected empty backlog, found {backlog:?}"));
    }
    Ok(())
}

#[then(r#"board "{name}" lists "{expected}""#)]
fn board_lists(world: &KanbanWorld, name: String, expected: String) -> Result<(), eyre::Report> {
    let snapshot = world.boards.get_board(world.board_id(&name)?)?;
    let listed = task_titles(snapshot.tasks());
    if listed != titles(&expected) {
        return Err(eyre::eyre!(
            "expected board {name:?} to list {expected:?}, found {listed:?}"
        ));
    }
    if snapshot.name().as_str() != name {
        return Err(eyre::eyre!(
            "expected board name {name:?}, found {:?}",
            snapshot.name().as_str()
        ));
    }
    Ok(())
}

#[then(r#"board "{name}" has no tasks"#)]
fn board_has_no_tasks(world: &KanbanWorld, name: String) -> Result<(), eyre::Report> {
    let snapshot = world.boards.get_board(world.board_id(&name)?)?;
    if !snapshot.tasks().is_empty() {
        return Err(eyre::eyre!(
            "expected board {name:?} to be empty, found {:?}",
            snapshot.tasks()
        ));
    }
    Ok(())
}

#[then(r#"the board "{name}" no longer exists"#)]
fn board_no_longer_exists(world: &KanbanWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.board_id(&name)?;
    if world.boards.get_board(id).is_ok() {
        return Err(eyre::eyre!("expected board {name:?} to be gone"));
    }
    Ok(())
}

#[then("the move is rejected as an invalid transition")]
fn move_is_rejected(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_task_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task result"))?;
    if !matches!(
        result,
        Err(TaskServiceError::Domain(
            KanbanDomainError::InvalidStatusTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidStatusTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the edit is rejected because the board does not exist")]
fn edit_is_rejected_for_missing_board(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_task_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task result"))?;
    if !matches!(result, Err(TaskServiceError::BoardNotFound(_))) {
        return Err(eyre::eyre!("expected BoardNotFound error, got {result:?}"));
    }
    Ok(())
}
