//! When steps for kanban BDD scenarios.

use super::world::KanbanWorld;
use kboard::kanban::domain::{BoardAssignment, BoardId, TaskPatch};
use rstest_bdd_macros::when;

#[when(r#"the board "{name}" is deleted"#)]
fn board_is_deleted(world: &mut KanbanWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.board_id(&name)?;
    world.last_board_result = Some(world.boards.delete_board(id));
    Ok(())
}

#[when(r#"the board "{name}" is renamed to "{new_name}""#)]
fn board_is_renamed(
    world: &mut KanbanWorld,
    name: String,
    new_name: String,
) -> Result<(), eyre::Report> {
    let id = world.board_id(&name)?;
    let result = world.boards.rename_board(id, new_name.as_str());
    if result.is_ok() {
        world.board_ids.insert(new_name, id);
    }
    world.last_board_result = Some(result);
    Ok(())
}

#[when(r#"completed tasks are cleaned from board "{name}""#)]
fn completed_tasks_are_cleaned(world: &mut KanbanWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.board_id(&name)?;
    world.last_board_result = Some(world.boards.clean_completed_tasks(id));
    Ok(())
}

#[when(r#"the task "{title}" is moved forward {steps:i32} steps"#)]
fn task_is_moved_forward(
    world: &mut KanbanWorld,
    title: String,
    steps: i32,
) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let result = world.tasks.move_task(id, steps);
    world.record_task_result(result);
    Ok(())
}

#[when(r#"the task "{title}" is moved back {steps:i32} steps"#)]
fn task_is_moved_back(
    world: &mut KanbanWorld,
    title: String,
    steps: i32,
) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let result = world.tasks.move_task(id, -steps);
    world.record_task_result(result);
    Ok(())
}

#[when(r#"the task "{title}" is assigned to board "{board}""#)]
fn task_is_assigned(
    world: &mut KanbanWorld,
    title: String,
    board: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let board_id = world.board_id(&board)?;
    let patch = TaskPatch::new().with_board(BoardAssignment::Assign(board_id));
    let result = world.tasks.edit_task(task_id, patch);
    world.record_task_result(result);
    Ok(())
}

#[when(r#"the task "{title}" is assigned to a missing board"#)]
fn task_is_assigned_to_missing_board(
    world: &mut KanbanWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let patch = TaskPatch::new().with_board(BoardAssignment::Assign(BoardId::new(999)));
    let result = world.tasks.edit_task(task_id, patch);
    world.record_task_result(result);
    Ok(())
}

#[when(r#"the task "{title}" is returned to the backlog"#)]
fn task_is_returned_to_backlog(
    world: &mut KanbanWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let patch = TaskPatch::new().with_board(BoardAssignment::Unassign);
    let result = world.tasks.edit_task(task_id, patch);
    world.record_task_result(result);
    Ok(())
}
