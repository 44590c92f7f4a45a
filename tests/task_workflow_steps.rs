//! Behaviour tests for moving tasks through the workflow and between boards.

#[path = "kanban_steps/mod.rs"]
mod kanban_steps_defs;

use kanban_steps_defs::world::{KanbanWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/task_workflow.feature",
    name = "Moving a task forward along the workflow"
)]
fn moving_task_forward(world: KanbanWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_workflow.feature",
    name = "Moving past the last stage is rejected"
)]
fn moving_past_last_stage_is_rejected(world: KanbanWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_workflow.feature",
    name = "Moving before the first stage is rejected"
)]
fn moving_before_first_stage_is_rejected(world: KanbanWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_workflow.feature",
    name = "Assigning a backlog task to a board"
)]
fn assigning_backlog_task_to_board(world: KanbanWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_workflow.feature",
    name = "Returning a task to the backlog"
)]
fn returning_task_to_backlog(world: KanbanWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_workflow.feature",
    name = "Assigning a task to a missing board leaves it in place"
)]
fn assigning_task_to_missing_board(world: KanbanWorld) {
    let _ = world;
}
