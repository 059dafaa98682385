//! When steps driving lifecycle operations on the subject task.

use rstest_bdd_macros::when;
use triage::tasks::domain::{Task, TaskId};

use super::world::{LifecycleWorld, run_async};

fn subject_id(world: &LifecycleWorld) -> Result<TaskId, eyre::Report> {
    world
        .subject
        .as_ref()
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("no subject task was seeded"))
}

#[when("the task is moved onto the watchlist")]
fn move_onto_watchlist(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let id = subject_id(world)?;
    let result = run_async(world.engine.move_to_watchlist(id));
    world.last_result = Some(result);
    Ok(())
}

#[when("the task is returned for rework")]
fn return_for_rework(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let id = subject_id(world)?;
    let result = run_async(world.engine.return_from_watchlist(id));
    world.last_result = Some(result);
    Ok(())
}

#[when("the watchlist entry is confirmed")]
fn confirm_watchlist_entry(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let id = subject_id(world)?;
    let result = run_async(world.engine.confirm_watchlist(id));
    world.last_result = Some(result);
    Ok(())
}

#[when("the task is completed")]
fn complete_the_task(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let id = subject_id(world)?;
    let result = run_async(world.engine.complete_task(id));
    world.last_result = Some(result);
    Ok(())
}
