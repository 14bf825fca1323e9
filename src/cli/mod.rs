//! Command-line interface for `todos`.
//!
//! One subcommand per user action: add, list, toggle, edit, delete, and
//! clear-completed. Mutating commands print the redrawn list on stdout and
//! a one-line confirmation on stderr.

mod run;


pub use run::{resolve_store_path, run, CliOutput};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A small to-do list persisted as a single JSON file.
///
/// The store lives at `~/.todos/todos-v1.json` unless overridden with
/// `--store` or a `store_path` entry in `~/.todos/config.yaml`.
#[derive(Parser, Debug)]
#[command(name = "todos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the store file (overrides config and the default location)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a new todo.
    ///
    /// Empty or whitespace-only text is a no-op.
    Add {
        /// The task text
        text: String,
    },

    /// List todos, optionally filtered.
    List {
        /// Visibility filter: all, active, or completed
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Toggle a todo's completed state.
    Toggle {
        /// Todo ID
        id: String,
    },

    /// Replace a todo's text.
    ///
    /// Editing to empty text deletes the todo instead.
    Edit {
        /// Todo ID
        id: String,

        /// The new task text
        text: String,
    },

    /// Delete a todo.
    Delete {
        /// Todo ID
        id: String,
    },

    /// Remove every completed todo.
    #[command(name = "clear-completed")]
    ClearCompleted,

    /// Show version information.
    Version,
}
