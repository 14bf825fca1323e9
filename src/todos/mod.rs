//! The to-do list core.
//!
//! This module provides:
//! - The [`Todo`] model and its persisted layout
//! - The authoritative in-memory [`TodoStore`] with add/toggle/edit/delete
//!   and clear-completed operations
//! - The pure [`Filter`] projection and the items-left count
//!
//! # Example
//!
//! ```no_run
//! use todos::storage::JsonFileStorage;
//! use todos::todos::{Filter, TodoStore};
//!
//! let storage = JsonFileStorage::new("/tmp/todos-v1.json");
//! let mut store = TodoStore::open(Box::new(storage));
//!
//! let todo = store.add("Buy milk").unwrap().unwrap();
//! store.toggle(&todo.id).unwrap();
//!
//! let done = todos::todos::visible(store.todos(), Filter::Completed);
//! assert_eq!(done.len(), 1);
//! ```

pub mod filter;
pub mod id;
pub mod models;
pub mod store;

pub use filter::{active_count, items_left, visible, Filter, InvalidFilter};
pub use models::Todo;
pub use store::{ChangeListener, EditOutcome, TodoStore};
