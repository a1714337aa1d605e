//! Todo Tabs Frontend App
//!
//! Single-column layout: tabs, input, list of the active category.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_apply_result, AppState, AppStore};
use crate::components::{CategoryTabBar, NewTodoForm, TodoList};

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    let store = AppStore::new(AppState::new());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // The backend loads its store in the background and announces when done
    spawn_local(async move {
        commands::on_event("todos-loaded", move |_| ctx.reload()).await;
    });

    // Load the active category on mount and on every reload
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading todos, trigger={}", trigger).into());
        spawn_local(async move {
            store_apply_result(&store, commands::get_todo_view(None).await);
        });
    });

    view! {
        <div class="app-layout">
            <CategoryTabBar />
            <NewTodoForm />
            <TodoList />
        </div>
    }
}
