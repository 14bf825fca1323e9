//! The authoritative in-memory todo store.
//!
//! The store owns the collection, constructed at startup from the
//! persistence adapter. Every successful mutation persists the full
//! collection and fires the on-change listener so the presentation layer
//! can redraw. Domain conditions (empty text, unknown id) are no-ops, not
//! errors; the only `Err` an operation can surface is a persistence failure.

use crate::error::Result;
use crate::storage::TodoStorage;
use crate::todos::id::generate_todo_id;
use crate::todos::models::Todo;

/// Listener invoked with the full collection after every successful mutation.
pub type ChangeListener = Box<dyn FnMut(&[Todo])>;

/// Outcome of an edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text was replaced with the trimmed new value.
    Updated,
    /// The new text was empty, so the todo was deleted instead.
    Deleted,
    /// No todo with the given id exists; nothing changed.
    NotFound,
}

/// The in-memory todo collection plus its persistence adapter.
///
/// Insertion order is preserved and meaningful for display. Ids are unique
/// across the collection at all times.
pub struct TodoStore {
    todos: Vec<Todo>,
    storage: Box<dyn TodoStorage>,
    on_change: Option<ChangeListener>,
}

impl TodoStore {
    /// Open a store, loading the current collection from the adapter.
    ///
    /// Loading is total: missing or corrupt persisted data yields an empty
    /// collection.
    #[must_use]
    pub fn open(storage: Box<dyn TodoStorage>) -> Self {
        let todos = storage.load();
        Self { todos, storage, on_change: None }
    }

    /// Register the listener fired after every successful mutation.
    pub fn set_on_change(&mut self, listener: ChangeListener) {
        self.on_change = Some(listener);
    }

    /// The current collection, in insertion order.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Number of todos in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Check whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Add a new todo with the trimmed text, appended to the end.
    ///
    /// Returns `None` without changing anything when the trimmed text is
    /// empty; otherwise returns the created todo.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the collection fails.
    pub fn add(&mut self, text: &str) -> Result<Option<Todo>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let todo = Todo { id: self.fresh_id(), text: text.to_string(), completed: false };
        self.todos.push(todo.clone());
        self.commit()?;
        Ok(Some(todo))
    }

    /// Flip the completed flag on the todo with the given id.
    ///
    /// Returns the new completed state, or `None` if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the collection fails.
    pub fn toggle(&mut self, id: &str) -> Result<Option<bool>> {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        todo.completed = !todo.completed;
        let completed = todo.completed;
        self.commit()?;
        Ok(Some(completed))
    }

    /// Replace a todo's text with the trimmed new value.
    ///
    /// Editing to empty text deletes the todo instead, exactly as
    /// [`delete`](Self::delete) would.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the collection fails.
    pub fn edit(&mut self, id: &str, new_text: &str) -> Result<EditOutcome> {
        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            return Ok(if self.delete(id)? { EditOutcome::Deleted } else { EditOutcome::NotFound });
        }

        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return Ok(EditOutcome::NotFound);
        };
        todo.text = trimmed.to_string();
        self.commit()?;
        Ok(EditOutcome::Updated)
    }

    /// Remove the todo with the given id.
    ///
    /// Returns false without changing anything if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the collection fails.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() == before {
            return Ok(false);
        }
        self.commit()?;
        Ok(true)
    }

    /// Remove every completed todo, returning how many were removed.
    ///
    /// A no-op (no save, no redraw) when nothing is completed.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the collection fails.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        let removed = before - self.todos.len();
        if removed == 0 {
            return Ok(0);
        }
        self.commit()?;
        Ok(removed)
    }

    /// Generate an id not already present in the collection.
    fn fresh_id(&self) -> String {
        loop {
            let id = generate_todo_id();
            if !self.todos.iter().any(|t| t.id == id) {
                return id;
            }
        }
    }

    /// Persist the full collection, then signal that a redraw is needed.
    fn commit(&mut self) -> Result<()> {
        self.storage.save(&self.todos)?;
        if let Some(listener) = &mut self.on_change {
            listener(&self.todos);
        }
        Ok(())
    }
}
