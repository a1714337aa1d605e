//! New Todo Form Component
//!
//! Text input that adds to the active category on Enter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_apply_result, use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() { return; }

        spawn_local(async move {
            let result = commands::add_todo(&text, None).await;
            if result.is_ok() {
                set_new_text.set(String::new());
            }
            store_apply_result(&store, result);
        });
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder=move || store.active_category().get().placeholder()
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
        </form>
    }
}
