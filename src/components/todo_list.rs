//! Todo List Component
//!
//! Container for the title, the input form and one row per entry.
//! Rows report deletes and toggles by index; only this component writes to the store.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoItem};
use crate::models::Todo;
use crate::store::{store_delete_todo, store_toggle_todo, use_todo_store, TodoStateStoreFields};
use crate::todos::count_label;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    let rows = move || {
        store
            .todos()
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<(usize, Todo)>>()
    };

    view! {
        <section class="todo-list">
            <h1>"My Todo's"</h1>

            <NewTodoForm />

            <ul class="todo-items">
                <For
                    each=rows
                    // Index is part of the key: rows capture it for their callbacks
                    key=|(index, todo)| (*index, todo.text.clone(), todo.completed)
                    children=move |(index, todo)| {
                        let on_deleted = Callback::new(move |_: bool| {
                            match store_delete_todo(&store, index) {
                                Ok(removed) => log::debug!("[TODO] deleted #{} {:?}", index, removed.text),
                                Err(e) => log::warn!("[TODO] delete failed: {}", e),
                            }
                        });
                        let on_toggled = Callback::new(move |_: ()| {
                            match store_toggle_todo(&store, index) {
                                Ok(completed) => log::debug!("[TODO] #{} completed={}", index, completed),
                                Err(e) => log::warn!("[TODO] toggle failed: {}", e),
                            }
                        });

                        view! {
                            <li>
                                <TodoItem
                                    completed=todo.completed
                                    text=todo.text
                                    on_deleted=on_deleted
                                    on_toggled=on_toggled
                                />
                            </li>
                        }
                    }
                />
            </ul>

            <p class="item-count">{move || store.todos().with(|t| count_label(t.len()))}</p>
        </section>
    }
}
