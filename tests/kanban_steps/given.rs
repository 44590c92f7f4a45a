//! Given steps for kanban BDD scenarios.

use super::world::KanbanWorld;
use eyre::WrapErr;
use kboard::kanban::{domain::Status, services::AddTaskRequest};
use rstest_bdd_macros::given;

#[given(r#"a board named "{name}""#)]
fn board_named(world: &mut KanbanWorld, name: String) -> Result<(), eyre::Report> {
    let created = world
        .boards
        .create_board(name.as_str())
        .wrap_err("create board for scenario")?;
    world.board_ids.insert(name, created.id());
    Ok(())
}

#[given(r#"a backlog task "{title}""#)]
fn backlog_task(world: &mut KanbanWorld, title: String) -> Result<(), eyre::Report> {
    let task = world
        .tasks
        .add_task(AddTaskRequest::new(title.as_str()))
        .wrap_err("add backlog task for scenario")?;
    world.task_ids.insert(title, task.id());
    Ok(())
}

#[given(r#"a task "{title}" on board "{board}""#)]
fn task_on_board(world: &mut KanbanWorld, title: String, board: String) -> Result<(), eyre::Report> {
    let board_id = world.board_id(&board)?;
    let task = world
        .tasks
        .add_task(AddTaskRequest::new(title.as_str()).on_board(board_id))
        .wrap_err("add board task for scenario")?;
    world.task_ids.insert(title, task.id());
    Ok(())
}

#[given(r#"the task "{title}" has reached "{status}""#)]
fn task_has_reached(
    world: &mut KanbanWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let target = Status::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let id = world.task_id(&title)?;
    let current = world.tasks.get_task(id)?.status();
    world
        .tasks
        .move_task(id, target.ordinal() - current.ordinal())
        .wrap_err("move task in scenario setup")?;
    Ok(())
}
