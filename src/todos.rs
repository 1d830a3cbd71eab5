//! Todo List Operations
//!
//! Pure mutations on the ordered todo collection. Newest entry is always at index 0.

use crate::config::BlankPolicy;
use crate::error::{TodoError, TodoResult};
use crate::models::Todo;

/// Prepend a new entry. Blank text is accepted here; the form decides whether to submit it.
pub fn add_todo(todos: &mut Vec<Todo>, text: impl Into<String>) {
    todos.insert(0, Todo::new(text));
}

/// Remove the entry at `index`, returning it
pub fn delete_todo(todos: &mut Vec<Todo>, index: usize) -> TodoResult<Todo> {
    if index >= todos.len() {
        return Err(TodoError::IndexOutOfRange { index, len: todos.len() });
    }
    Ok(todos.remove(index))
}

/// Flip the completed flag of the entry at `index`, returning the new value
pub fn toggle_todo(todos: &mut [Todo], index: usize) -> TodoResult<bool> {
    let len = todos.len();
    todos
        .get_mut(index)
        .map(Todo::toggle)
        .ok_or(TodoError::IndexOutOfRange { index, len })
}

/// Commit the pending text as a new entry and clear it.
/// A rejected submission leaves both the list and the pending text untouched.
pub fn submit(
    todos: &mut Vec<Todo>,
    pending: &mut String,
    policy: BlankPolicy,
) -> TodoResult<()> {
    policy.check(pending)?;
    add_todo(todos, std::mem::take(pending));
    Ok(())
}

pub fn count_label(len: usize) -> String {
    if len == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", len)
    }
}
