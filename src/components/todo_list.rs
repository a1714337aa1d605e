//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="todo-list">
            <For
                each=move || store.items().get()
                // Rows are rebuilt when their text or done flag changes
                key=|item| (item.id.clone(), item.text.clone(), item.done)
                children=move |item| view! { <TodoRow item=item /> }
            />
        </div>
    }
}
