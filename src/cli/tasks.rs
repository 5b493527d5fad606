//! 一次性命令：list / add / done / rm
//!
//! Each command runs the same `TaskListClient` as the terminal UI: initialize,
//! apply one operation, print the resulting list. The return value is whether
//! the operation changed the collection.

use std::io::{self, Write};

use crate::api::TodoApi;
use crate::client::TaskListClient;
use crate::model::TaskId;

use super::Commands;

/// 执行一次性命令
pub fn execute<A: TodoApi>(
    client: &mut TaskListClient<A>,
    command: &Commands,
    out: &mut impl Write,
) -> io::Result<bool> {
    let loaded = client.initialize();

    let ok = match command {
        Commands::List | Commands::Tui => loaded,
        Commands::Add { label } => {
            let label = label.join(" ");
            if label.trim().is_empty() {
                writeln!(out, "Task label cannot be empty")?;
                return Ok(false);
            }
            let ok = client.add_task(&label);
            if let Some(task) = client.tasks().last().filter(|_| ok) {
                writeln!(out, "Added #{} {}", task.id, task.label)?;
            }
            ok
        }
        Commands::Done { id } => {
            let id: TaskId = id.parse().unwrap_or_else(|e| match e {});
            if client.task(&id).is_none() {
                writeln!(out, "No task #{}", id)?;
                return Ok(false);
            }
            client.toggle_task(&id)
        }
        Commands::Rm { id } => {
            let id: TaskId = id.parse().unwrap_or_else(|e| match e {});
            client.delete_task(&id)
        }
    };

    if !ok {
        writeln!(out, "Request failed, see ~/.todos/todos.log")?;
    }
    for line in client.render().plain_lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(ok)
}
