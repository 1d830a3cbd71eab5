//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The store is the only writer of the todo collection.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::BlankPolicy;
use crate::error::TodoResult;
use crate::models::Todo;
use crate::todos;

/// Container state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Entries, newest first
    pub todos: Vec<Todo>,
    /// Text typed but not yet submitted
    pub pending: String,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Write guards lock the whole store, so each one is dropped before the next field is touched.

/// Remove the entry at `index`
pub fn store_delete_todo(store: &TodoStore, index: usize) -> TodoResult<Todo> {
    let field = store.todos();
    let mut list = field.write();
    todos::delete_todo(&mut list, index)
}

/// Flip the completed flag of the entry at `index`
pub fn store_toggle_todo(store: &TodoStore, index: usize) -> TodoResult<bool> {
    let field = store.todos();
    let mut list = field.write();
    todos::toggle_todo(&mut list, index)
}

/// Submit the pending text as a new entry
pub fn store_submit_pending(store: &TodoStore, policy: BlankPolicy) -> TodoResult<()> {
    let mut pending = store.pending().get_untracked();
    {
        let field = store.todos();
        let mut list = field.write();
        todos::submit(&mut list, &mut pending, policy)?;
    }
    store.pending().set(pending);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;

    fn make_store() -> (Owner, TodoStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(TodoState::new()))
    }

    fn texts(store: &TodoStore) -> Vec<String> {
        store.todos().get_untracked().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = TodoState::new();
        assert!(state.todos.is_empty());
        assert_eq!(state.pending, "");
    }

    #[test]
    fn test_submit_pending_clears_input() {
        let (_owner, store) = make_store();

        store.pending().set("Buy milk".to_string());
        store_submit_pending(&store, BlankPolicy::Reject).unwrap();
        assert_eq!(store.pending().get_untracked(), "");

        store.pending().set("Buy bread".to_string());
        store_submit_pending(&store, BlankPolicy::Reject).unwrap();
        assert_eq!(texts(&store), vec!["Buy bread", "Buy milk"]);
        assert!(store.todos().get_untracked().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_submit_blank_keeps_pending() {
        let (_owner, store) = make_store();

        store.pending().set("  ".to_string());
        let err = store_submit_pending(&store, BlankPolicy::Reject).unwrap_err();
        assert!(matches!(err, TodoError::BlankText));
        assert_eq!(store.pending().get_untracked(), "  ");
        assert!(store.todos().get_untracked().is_empty());

        store_submit_pending(&store, BlankPolicy::Accept).unwrap();
        assert_eq!(texts(&store), vec!["  "]);
        assert_eq!(store.pending().get_untracked(), "");
    }

    #[test]
    fn test_delete_and_toggle() {
        let (_owner, store) = make_store();
        for text in ["Buy milk", "Buy bread"] {
            store.pending().set(text.to_string());
            store_submit_pending(&store, BlankPolicy::Reject).unwrap();
        }

        assert!(store_toggle_todo(&store, 1).unwrap());
        assert!(store.todos().get_untracked()[1].completed);
        assert!(matches!(
            store_toggle_todo(&store, 2),
            Err(TodoError::IndexOutOfRange { index: 2, len: 2 })
        ));

        let removed = store_delete_todo(&store, 0).unwrap();
        assert_eq!(removed.text, "Buy bread");
        assert_eq!(texts(&store), vec!["Buy milk"]);

        assert!(matches!(
            store_delete_todo(&store, 5),
            Err(TodoError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert_eq!(texts(&store), vec!["Buy milk"]);
    }
}
