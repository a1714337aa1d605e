//! Todo Row Component
//!
//! One item: checkbox, text (or the edit field), edit and delete buttons.
//! While any item is being edited every checkbox is hidden.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::TodoItem;
use crate::commands;
use crate::store::{store_apply_result, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let store = use_app_store();

    let id = StoredValue::new(item.id.clone());
    let done = item.done;
    let text = item.text.clone();
    let (draft, set_draft) = signal(item.text.clone());

    let is_editing = move || store.editing().get().as_deref() == Some(id.get_value().as_str());

    let toggle = move |_| {
        spawn_local(async move {
            store_apply_result(&store, commands::toggle_todo(&id.get_value()).await);
        });
    };

    let begin_edit = move |_| {
        spawn_local(async move {
            store_apply_result(&store, commands::begin_edit(&id.get_value()).await);
        });
    };

    let commit_edit = move |_| {
        let text = draft.get();
        spawn_local(async move {
            store_apply_result(&store, commands::commit_edit(&id.get_value(), &text).await);
        });
    };

    let on_draft = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        set_draft.set(text.clone());
        spawn_local(async move {
            // Only the edit state matters here; the row keeps its local draft
            if let Err(e) = commands::update_edit_draft(&text).await {
                web_sys::console::error_1(&format!("[TODO] {}", e).into());
            }
        });
    };

    let delete = move |_| {
        spawn_local(async move {
            store_apply_result(&store, commands::delete_todo(&id.get_value()).await);
        });
    };

    view! {
        <div class=move || if done { "todo-row done" } else { "todo-row" }>
            <Show when=move || store.check_controls_visible().get()>
                <button class="check-btn" on:click=toggle>
                    {if done { "☑" } else { "☐" }}
                </button>
            </Show>

            <Show
                when=is_editing
                fallback={
                    let text = text.clone();
                    move || view! { <span class="todo-text">{text.clone()}</span> }
                }
            >
                <input
                    class="edit-input"
                    type="text"
                    autofocus=true
                    prop:value=move || draft.get()
                    on:input=on_draft
                />
            </Show>

            <div class="icon-box">
                <Show
                    when=is_editing
                    fallback=move || view! { <button class="edit-btn" on:click=begin_edit>"✎"</button> }
                >
                    <button class="commit-btn" on:click=commit_edit>"✓"</button>
                </Show>
                <button class="delete-btn" on:click=delete>"🗑"</button>
            </div>
        </div>
    }
}
