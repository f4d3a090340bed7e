// SPDX-License-Identifier: Apache-2.0

//! Habit, daily and todo commands.
//!
//! Mutating actions parse the whole id expression before issuing any
//! call, pace consecutive mutations through the injected delay, and keep
//! the locally displayed list in sync with each mutation instead of
//! refetching.

use std::collections::BTreeSet;

use anyhow::Result;
use console::style;
use habitica_core::{
    Direction, FixedDelay, HabiticaApi, HabiticaClient, Task, TaskKind, parse_task_ids,
    partition_in_bounds, project_value, remove_indices,
};
use serde_json::json;

use crate::cli::{DailyAction, Difficulty, HabitAction, TodoAction};
use crate::output;

/// List habits, optionally scoring some up or down first.
pub async fn habits(
    client: &HabiticaClient,
    wait: &mut FixedDelay,
    action: Option<HabitAction>,
) -> Result<()> {
    let mut habits = client.tasks(TaskKind::Habit).await?;

    if let Some(action) = action {
        let (direction, verb, ids) = match action {
            HabitAction::Up { ids } => (Direction::Up, "incremented", ids),
            HabitAction::Down { ids } => (Direction::Down, "decremented", ids),
        };
        for tid in valid_ids(&ids, habits.len())? {
            wait.tick().await;
            client.score_task(&habits[tid].id, direction).await?;
            println!("{verb} task '{}'", habits[tid].text);
            habits[tid].value = project_value(habits[tid].value, direction);
        }
    }

    output::render_habit_list(&habits);
    Ok(())
}

/// List dailies, optionally marking some done or undone first.
pub async fn dailies(
    client: &HabiticaClient,
    wait: &mut FixedDelay,
    action: Option<DailyAction>,
) -> Result<()> {
    let mut dailies = client.tasks(TaskKind::Daily).await?;

    match action {
        Some(DailyAction::Done { ids }) => {
            for tid in valid_ids(&ids, dailies.len())? {
                wait.tick().await;
                client.score_task(&dailies[tid].id, Direction::Up).await?;
                println!("marked daily '{}' completed", dailies[tid].text);
                dailies[tid].completed = true;
            }
        }
        Some(DailyAction::Undo { ids }) => {
            for tid in valid_ids(&ids, dailies.len())? {
                wait.tick().await;
                client
                    .update_task(&dailies[tid].id, json!({ "completed": false }))
                    .await?;
                println!("marked daily '{}' incomplete", dailies[tid].text);
                dailies[tid].completed = false;
            }
        }
        None => {}
    }

    output::render_task_list(&dailies);
    Ok(())
}

/// List incomplete todos, optionally completing some or adding one first.
pub async fn todos(
    client: &HabiticaClient,
    wait: &mut FixedDelay,
    action: Option<TodoAction>,
    difficulty: Difficulty,
) -> Result<()> {
    let mut todos: Vec<Task> = client
        .tasks(TaskKind::Todo)
        .await?
        .into_iter()
        .filter(|task| !task.completed)
        .collect();

    match action {
        Some(TodoAction::Done { ids }) => {
            let tids = valid_ids(&ids, todos.len())?;
            for &tid in &tids {
                wait.tick().await;
                client.score_task(&todos[tid].id, Direction::Up).await?;
                println!("marked todo '{}' complete", todos[tid].text);
            }
            // Completed todos leave the displayed list; later indices
            // shift, so the reconciler deletes highest-first.
            todos = remove_indices(todos, &tids)?;
        }
        Some(TodoAction::Add { text }) => {
            let text = text.join(" ");
            let created = client
                .create_task(json!({
                    "type": "todo",
                    "text": text,
                    "priority": difficulty.multiplier(),
                }))
                .await?;
            println!("added new todo '{}'", created.text);
            todos.insert(0, created);
        }
        None => {}
    }

    output::render_task_list(&todos);
    Ok(())
}

/// Parse id tokens and drop out-of-range indices with a warning.
///
/// Parse failures abort before anything mutates; an out-of-range id is
/// advisory so the in-range ids still run.
fn valid_ids(ids: &[String], len: usize) -> Result<BTreeSet<usize>> {
    let tids = parse_task_ids(ids)?;
    let (valid, skipped) = partition_in_bounds(&tids, len);
    for index in skipped {
        println!(
            "{}",
            style(format!(
                "task id {} out of range (only {len} tasks), skipping",
                index + 1
            ))
            .yellow()
        );
    }
    Ok(valid)
}
