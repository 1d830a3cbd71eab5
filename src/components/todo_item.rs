//! Todo Item Component
//!
//! A single row in the todo list. Receives copies of its fields from the
//! parent and reports user intent back through callbacks.

use leptos::prelude::*;

/// Display state of one row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemView {
    pub completed: bool,
    pub text: String,
}

impl ItemView {
    /// Emit the "deleted" signal. The payload only confirms the emission.
    pub fn delete(&self, emit: impl FnOnce(bool)) {
        emit(true);
    }
}

/// A single todo row
///
/// # Arguments
/// * `completed` - Whether the entry is done (default `false`)
/// * `text` - Entry text (default empty)
/// * `on_deleted` - Fired once per click on the delete button
/// * `on_toggled` - Fired once per checkbox change; the checkbox is disabled without it
#[component]
pub fn TodoItem(
    #[prop(optional)] completed: bool,
    #[prop(optional, into)] text: String,
    #[prop(into)] on_deleted: Callback<bool>,
    #[prop(optional)] on_toggled: Option<Callback<()>>,
) -> impl IntoView {
    let item = ItemView { completed, text };
    let label = item.text.clone();

    let on_change = move |_: web_sys::Event| {
        if let Some(on_toggled) = on_toggled {
            on_toggled.run(());
        }
    };

    view! {
        <div class={if completed { "todo-item completed" } else { "todo-item" }}>
            <input
                type="checkbox"
                checked=completed
                disabled={on_toggled.is_none()}
                on:change=on_change
            />
            <span class="todo-text">{label}</span>
            <button
                class="delete-btn"
                on:click=move |_| item.delete(|confirmed| on_deleted.run(confirmed))
            >
                "×"
            </button>
        </div>
    }
}
