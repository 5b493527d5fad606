//! CLI 模块

pub mod tasks;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todos")]
#[command(version)]
#[command(about = "A to-do list synced with a remote REST collection")]
pub struct Cli {
    /// API base URL (overrides ~/.todos/config.toml)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Username owning the collection (overrides ~/.todos/config.toml)
    #[arg(long, global = true)]
    pub username: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive list (default)
    Tui,
    /// Print the collection
    List,
    /// Create a task
    Add {
        /// Task label; multiple words are joined with spaces
        #[arg(required = true)]
        label: Vec<String>,
    },
    /// Toggle a task between done and not done
    Done {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Rm {
        /// Task ID
        id: String,
    },
}
