//! Filter projection over the todo collection.
//!
//! A pure function of (collection, mode): no side effects, insertion order
//! preserved. Also derives the "N items" label for the items-left display.

use crate::todos::models::Todo;

/// The active visibility rule applied to the collection for display.
///
/// Transient, process-wide state; defaults to `All` on every invocation
/// and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show the full collection.
    #[default]
    All,
    /// Show only todos that are not completed.
    Active,
    /// Show only completed todos.
    Completed,
}

impl Filter {
    /// Parse a filter from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid filter mode.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, InvalidFilter> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(InvalidFilter(s.to_string())),
        }
    }

    /// Get the string representation of the filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Check whether a todo is visible under this filter.
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid filter string is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFilter(pub String);

impl std::fmt::Display for InvalidFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid filter: '{}' (must be one of: all, active, completed)", self.0)
    }
}

impl std::error::Error for InvalidFilter {}

/// Project the visible subset of the collection under a filter.
///
/// Insertion order is preserved.
#[must_use]
pub fn visible(todos: &[Todo], filter: Filter) -> Vec<&Todo> {
    todos.iter().filter(|t| filter.matches(t)).collect()
}

/// Count the todos that are not completed.
#[must_use]
pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.completed).count()
}

/// The "N items" label for the items-left display.
///
/// Pluralized on whether the count equals 1: "1 item", "2 items".
#[must_use]
pub fn items_left(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}
