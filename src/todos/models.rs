//! To-do model types.

use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// The persisted blob is a JSON array of exactly these records; there is
/// no schema version field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, immutable after creation.
    pub id: String,
    /// The task text. Never empty or whitespace-only while the todo exists.
    pub text: String,
    /// Whether the task has been completed.
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_serialization_round_trip() {
        let todo = Todo {
            id: "1724400000000-ab12".to_string(),
            text: "Buy milk".to_string(),
            completed: false,
        };

        let json = serde_json::to_string(&todo).unwrap();
        let parsed: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, todo);
    }

    #[test]
    fn test_todo_wire_field_names() {
        // The persisted layout is exactly {id, text, completed}.
        let todo = Todo { id: "a".to_string(), text: "b".to_string(), completed: true };
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":"a","text":"b","completed":true}"#);
    }

    #[test]
    fn test_todo_missing_field_fails_to_parse() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"id":"a","text":"b"}"#);
        assert!(result.is_err());
    }
}
