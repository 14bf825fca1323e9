//! Command execution for the CLI.
//!
//! Each invocation opens the store from the persisted slot, applies at most
//! one mutation, and redraws. The redraw comes through the store's
//! on-change listener, so stdout carries exactly what the listener saw.

use crate::cli::Command;
use crate::config::TodoConfig;
use crate::paths;
use crate::render;
use crate::storage::JsonFileStorage;
use crate::todos::{EditOutcome, Filter, TodoStore};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

/// Resolve the store file path: `--store` flag, then config, then default.
#[must_use]
pub fn resolve_store_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }

    match TodoConfig::load() {
        Ok(Some(config)) => {
            if let Some(path) = config.store_path {
                return path;
            }
        }
        Ok(None) => {}
        Err(e) => eprintln!("Warning: could not load config: {e}"),
    }

    paths::default_store_path().unwrap_or_else(|| PathBuf::from(paths::STORE_FILENAME))
}

/// Run a CLI command against the store at the given path.
pub fn run(command: Command, store_path: &Path) -> CliOutput {
    match command {
        Command::Version => run_version(),
        Command::Add { text } => run_add(store_path, &text),
        Command::List { filter } => run_list(store_path, &filter),
        Command::Toggle { id } => run_toggle(store_path, &id),
        Command::Edit { id, text } => run_edit(store_path, &id, &text),
        Command::Delete { id } => run_delete(store_path, &id),
        Command::ClearCompleted => run_clear_completed(store_path),
    }
}

/// Open the store with a listener that captures the redraw for stdout.
///
/// Mutating commands redraw with the default filter; the filter mode is
/// transient and resets on every invocation.
fn open_store(store_path: &Path) -> (TodoStore, Rc<RefCell<Vec<String>>>) {
    let storage = JsonFileStorage::new(store_path);
    let mut store = TodoStore::open(Box::new(storage));

    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&lines);
    store.set_on_change(Box::new(move |todos| {
        let mut out = sink.borrow_mut();
        out.clear();
        out.extend(render::render_list(todos, Filter::default()));
    }));

    (store, lines)
}

fn success(stdout: Vec<String>, message: String) -> CliOutput {
    CliOutput { exit_code: ExitCode::SUCCESS, stdout, stderr: vec![message] }
}

fn failure(message: String) -> CliOutput {
    CliOutput { exit_code: ExitCode::from(1), stdout: vec![], stderr: vec![message] }
}

fn run_version() -> CliOutput {
    CliOutput {
        exit_code: ExitCode::SUCCESS,
        stdout: vec![],
        stderr: vec![format!("todos v{}", crate::VERSION)],
    }
}

fn run_add(store_path: &Path, text: &str) -> CliOutput {
    let (mut store, lines) = open_store(store_path);
    match store.add(text) {
        Ok(Some(todo)) => success(lines.take(), format!("Added \"{}\" ({})", todo.text, todo.id)),
        Ok(None) => success(vec![], "Nothing to add: text is empty".to_string()),
        Err(e) => failure(format!("Error adding todo: {e}")),
    }
}

fn run_list(store_path: &Path, filter: &str) -> CliOutput {
    let filter = match Filter::from_str(filter) {
        Ok(f) => f,
        Err(e) => {
            return CliOutput {
                exit_code: ExitCode::from(2),
                stdout: vec![],
                stderr: vec![e.to_string()],
            }
        }
    };

    let store = TodoStore::open(Box::new(JsonFileStorage::new(store_path)));
    CliOutput {
        exit_code: ExitCode::SUCCESS,
        stdout: render::render_list(store.todos(), filter),
        stderr: vec![],
    }
}

fn run_toggle(store_path: &Path, id: &str) -> CliOutput {
    let (mut store, lines) = open_store(store_path);
    match store.toggle(id) {
        Ok(Some(true)) => success(lines.take(), format!("Marked done: {id}")),
        Ok(Some(false)) => success(lines.take(), format!("Marked active: {id}")),
        Ok(None) => success(vec![], format!("No todo with id '{id}'")),
        Err(e) => failure(format!("Error toggling todo: {e}")),
    }
}

fn run_edit(store_path: &Path, id: &str, text: &str) -> CliOutput {
    let (mut store, lines) = open_store(store_path);
    match store.edit(id, text) {
        Ok(EditOutcome::Updated) => success(lines.take(), format!("Updated {id}")),
        Ok(EditOutcome::Deleted) => {
            success(lines.take(), format!("New text is empty; deleted {id}"))
        }
        Ok(EditOutcome::NotFound) => success(vec![], format!("No todo with id '{id}'")),
        Err(e) => failure(format!("Error editing todo: {e}")),
    }
}

fn run_delete(store_path: &Path, id: &str) -> CliOutput {
    let (mut store, lines) = open_store(store_path);
    match store.delete(id) {
        Ok(true) => success(lines.take(), format!("Deleted {id}")),
        Ok(false) => success(vec![], format!("No todo with id '{id}'")),
        Err(e) => failure(format!("Error deleting todo: {e}")),
    }
}

fn run_clear_completed(store_path: &Path) -> CliOutput {
    let (mut store, lines) = open_store(store_path);
    match store.clear_completed() {
        Ok(0) => success(vec![], "No completed todos to clear".to_string()),
        Ok(1) => success(lines.take(), "Cleared 1 completed todo".to_string()),
        Ok(n) => success(lines.take(), format!("Cleared {n} completed todos")),
        Err(e) => failure(format!("Error clearing completed todos: {e}")),
    }
}
