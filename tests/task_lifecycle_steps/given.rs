//! Given steps seeding tasks for the lifecycle scenarios.

use chrono::Days;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use triage::tasks::{
    domain::{Subtask, Task, TaskId, TaskRecord},
    ports::TaskStore,
    services::{EditTaskRequest, NewTaskRequest},
};

use super::world::{LifecycleWorld, run_async};

#[given(r#"a task "{title}" with every subtask done"#)]
fn task_with_every_subtask_done(
    world: &mut LifecycleWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let created = run_async(world.engine.add_task(NewTaskRequest::new(title.clone())))
        .wrap_err("creating the subject task")?;
    let deadline = created.deadline().format("%Y-%m-%d").to_string();
    let edit = EditTaskRequest::new(created.id(), title, deadline, created.priority().value())
        .with_subtasks([Subtask::with_done("draft the summary", true)]);
    let edited = run_async(world.engine.edit_task(edit)).wrap_err("finishing the checklist")?;
    world.subject = Some(edited);
    Ok(())
}

#[given(r#"a task "{title}" with an open subtask "{subtask}""#)]
fn task_with_open_subtask(
    world: &mut LifecycleWorld,
    title: String,
    subtask: String,
) -> Result<(), eyre::Report> {
    let created = run_async(world.engine.add_task(NewTaskRequest::new(title.clone())))
        .wrap_err("creating the subject task")?;
    let deadline = created.deadline().format("%Y-%m-%d").to_string();
    let edit = EditTaskRequest::new(created.id(), title, deadline, created.priority().value())
        .with_subtasks([Subtask::new(subtask)]);
    let edited = run_async(world.engine.edit_task(edit)).wrap_err("opening the checklist")?;
    world.subject = Some(edited);
    Ok(())
}

#[given(r#"a task "{title}" checkpointed on the watchlist three days ago"#)]
fn task_checkpointed_three_days_ago(
    world: &mut LifecycleWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let since = world
        .today
        .checked_sub_days(Days::new(3))
        .ok_or_else(|| eyre::eyre!("checkpoint date out of range"))?;
    let task = Task::from(TaskRecord {
        id: TaskId::new(),
        title,
        deadline: world.today,
        priority: 10,
        description: String::new(),
        subtasks: Vec::new(),
        watchlist_date: Some(since),
        completed_date: None,
    });
    run_async(world.store.insert(&task)).wrap_err("seeding the watchlist entry")?;
    world.subject = Some(task);
    Ok(())
}

#[given(r#"an active task "{title}" due in {days:u8} days at priority {priority:u8}"#)]
fn neighbouring_active_task(
    world: &mut LifecycleWorld,
    title: String,
    days: u8,
    priority: u8,
) -> Result<(), eyre::Report> {
    let deadline = world
        .today
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| eyre::eyre!("deadline out of range"))?;
    let request = NewTaskRequest::new(title)
        .with_deadline(deadline.format("%Y-%m-%d").to_string())
        .with_priority(priority);
    let created = run_async(world.engine.add_task(request)).wrap_err("creating the neighbour")?;
    world.neighbour = Some(created);
    Ok(())
}
