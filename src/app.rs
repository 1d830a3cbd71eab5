//! My Todo's App
//!
//! Root component: owns the store and provides it to the tree.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoList;
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::store::TodoState;

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    provide_context(Store::new(TodoState::new()));
    provide_context(AppContext::new(config));

    view! {
        <main class="app">
            <TodoList />
        </main>
    }
}
