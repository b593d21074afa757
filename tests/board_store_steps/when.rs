//! When steps for board store BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use kanban_board::board::domain::{TaskId, TaskPatch};
use rstest_bdd_macros::when;

#[when(r#"the task "{title}" is moved to column "{column}" at position {index:u64}"#)]
fn move_task_to(
    world: &mut BoardWorld,
    title: String,
    column: String,
    index: u64,
) -> Result<(), eyre::Report> {
    let task_id = world.task(&title)?;
    let destination = world.column(&column)?;
    let board = world.board()?;
    let source = board
        .task(&task_id)
        .map(|task| task.column_id().clone())
        .ok_or_else(|| eyre::eyre!("task '{title}' missing from board"))?;
    let position = usize::try_from(index).wrap_err("position fits in usize")?;

    world
        .store()?
        .move_task(&task_id, &source, &destination, position)
        .wrap_err("move task")?;
    Ok(())
}

#[when(r#"the column "{column}" is deleted"#)]
fn delete_column(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let column_id = world.column(&column)?;
    world
        .store()?
        .delete_column(&column_id)
        .wrap_err("delete column")?;
    Ok(())
}

#[when("an unknown task is updated")]
fn update_unknown_task(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let result = world.store()?.update_task(
        &TaskId::new("does-not-exist"),
        TaskPatch::new().with_title("Ghost"),
    );
    world.last_result = Some(result);
    Ok(())
}

#[when("the store is reopened from the same storage")]
fn reopen_store(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let closing = world
        .store
        .take()
        .ok_or_else(|| eyre::eyre!("no board store open in scenario world"))?;
    let original = closing.close().wrap_err("close store")?;
    let reopened = world.open_store("reopened").wrap_err("reopen store")?;

    world.original_board = Some(original);
    world.reopened_board = Some(reopened.state().wrap_err("read reopened board")?);
    world.store = Some(reopened);
    Ok(())
}
