//! Then steps asserting the observable outcome of each scenario.

use chrono::Days;
use rstest_bdd_macros::then;
use triage::tasks::{
    domain::{Priority, Task, TaskDomainError, TaskStatus, policy},
    services::LifecycleError,
};

use super::world::{LifecycleWorld, run_async};

fn last_ok(world: &LifecycleWorld) -> Result<&Task, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(task)) => Ok(task),
        Some(Err(err)) => Err(eyre::eyre!("operation failed: {err}")),
        None => Err(eyre::eyre!("no operation ran in this scenario")),
    }
}

#[then("the task sits on the watchlist checkpointed today")]
fn sits_on_watchlist_today(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let task = last_ok(world)?;
    let expected = TaskStatus::Watchlist { since: world.today };
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected {expected:?}, got {:?}",
            task.status()
        ));
    }
    Ok(())
}

#[then("the move is rejected because subtasks are unfinished")]
fn move_rejected_for_open_subtasks(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no operation ran in this scenario"))?;
    if !matches!(
        result,
        Err(LifecycleError::Domain(
            TaskDomainError::SubtasksIncomplete { .. }
        ))
    ) {
        return Err(eyre::eyre!("expected a subtask rejection, got {result:?}"));
    }
    Ok(())
}

#[then("the task is still active")]
fn task_is_still_active(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let subject = world
        .subject
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no subject task was seeded"))?;
    let stored = run_async(world.engine.find_task(subject.id()))?
        .ok_or_else(|| eyre::eyre!("subject task vanished from the store"))?;
    if !stored.status().is_active() {
        return Err(eyre::eyre!("expected an active task, got {:?}", stored.status()));
    }
    Ok(())
}

#[then("the task is active at the escalation cap")]
fn task_is_active_at_cap(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let task = last_ok(world)?;
    if !task.status().is_active() {
        return Err(eyre::eyre!("expected an active task, got {:?}", task.status()));
    }
    if task.priority() != Priority::ESCALATION_CAP {
        return Err(eyre::eyre!(
            "expected the escalation cap, got {}",
            task.priority()
        ));
    }
    Ok(())
}

#[then("the deadline is tomorrow")]
fn deadline_is_tomorrow(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let task = last_ok(world)?;
    let tomorrow = world
        .today
        .checked_add_days(Days::new(1))
        .ok_or_else(|| eyre::eyre!("tomorrow out of range"))?;
    if task.deadline() != tomorrow {
        return Err(eyre::eyre!(
            "expected deadline {tomorrow}, got {}",
            task.deadline()
        ));
    }
    Ok(())
}

#[then("an open rework subtask is appended")]
fn open_rework_subtask_appended(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let task = last_ok(world)?;
    let appended = task
        .subtasks()
        .last()
        .ok_or_else(|| eyre::eyre!("the task has no subtasks"))?;
    if appended.text() != policy::REWORK_SUBTASK_TEXT {
        return Err(eyre::eyre!("unexpected subtask text {:?}", appended.text()));
    }
    if appended.is_done() {
        return Err(eyre::eyre!("the rework subtask is already done"));
    }
    Ok(())
}

#[then("the task is completed on its checkpoint date")]
fn completed_on_checkpoint_date(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let task = last_ok(world)?;
    let checkpoint = world
        .today
        .checked_sub_days(Days::new(3))
        .ok_or_else(|| eyre::eyre!("checkpoint date out of range"))?;
    let expected = TaskStatus::Completed { on: checkpoint };
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected {expected:?}, got {:?}",
            task.status()
        ));
    }
    Ok(())
}

#[then("the neighbour ends at priority {priority:u8}")]
fn neighbour_ends_at_priority(
    world: &LifecycleWorld,
    priority: u8,
) -> Result<(), eyre::Report> {
    let neighbour = world
        .neighbour
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no neighbour task was seeded"))?;
    let stored = run_async(world.engine.find_task(neighbour.id()))?
        .ok_or_else(|| eyre::eyre!("neighbour task vanished from the store"))?;
    if stored.priority().value() != priority {
        return Err(eyre::eyre!(
            "expected priority {priority}, got {}",
            stored.priority()
        ));
    }
    Ok(())
}
