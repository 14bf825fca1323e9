//! Text rendering of the todo list.
//!
//! The renderer consumes the filtered projection and produces one row per
//! visible todo (toggle mark, id, text), followed by the items-left line
//! and the filter line with the current mode highlighted. It never mutates
//! anything; the store calls back into it after every change.

use crate::todos::filter::{self, Filter};
use crate::todos::models::Todo;

/// Render one row: toggle mark, id, then text.
#[must_use]
pub fn render_row(todo: &Todo) -> String {
    let mark = if todo.completed { 'x' } else { ' ' };
    format!("[{mark}] {}  {}", todo.id, todo.text)
}

/// Render the filter line with the current mode bracketed.
#[must_use]
pub fn filter_line(current: Filter) -> String {
    let choices: Vec<String> = [Filter::All, Filter::Active, Filter::Completed]
        .iter()
        .map(|f| if *f == current { format!("[{f}]") } else { f.to_string() })
        .collect();
    format!("filters: {}", choices.join(" "))
}

/// Render the full view: visible rows, the items-left line, the filter line.
#[must_use]
pub fn render_list(todos: &[Todo], filter: Filter) -> Vec<String> {
    let mut lines: Vec<String> =
        filter::visible(todos, filter).into_iter().map(render_row).collect();
    lines.push(format!("{} left", filter::items_left(filter::active_count(todos))));
    lines.push(filter_line(filter));
    lines
}
