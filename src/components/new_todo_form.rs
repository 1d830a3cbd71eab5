//! New Todo Form Component
//!
//! Text field bound to the pending input, plus the submit button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::store::{store_submit_pending, use_todo_store, TodoStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();
    let ctx = expect_context::<AppContext>();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_submit_pending(&store, ctx.blank_policy()) {
            Ok(()) => {
                let len = store.todos().with_untracked(|t| t.len());
                log::debug!("[FORM] added, {} entries", len);
            }
            Err(e) => log::debug!("[FORM] submission skipped: {}", e),
        }
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder=ctx.placeholder()
                // The pending field is the source of truth; clearing it clears the control.
                prop:value=move || store.pending().get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        store.pending().set(input.value());
                    }
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
