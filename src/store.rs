//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Category, TodoItem, TodoView};

/// Last view received from the backend
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items of the active category
    pub items: Vec<TodoItem>,
    pub active_category: Category,
    /// Id of the item being edited
    pub editing: Option<String>,
    /// Checkboxes are hidden while any item is being edited
    pub check_controls_visible: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            check_controls_visible: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace store contents with a fresh backend view
pub fn store_apply_view(store: &AppStore, view: TodoView) {
    store.items().set(view.items);
    store.active_category().set(view.active_category);
    store.editing().set(view.editing);
    store.check_controls_visible().set(view.check_controls_visible);
}

/// Apply a command result, logging failures to the console
pub fn store_apply_result(store: &AppStore, result: Result<TodoView, String>) {
    match result {
        Ok(view) => store_apply_view(store, view),
        Err(e) => web_sys::console::error_1(&format!("[TODO] {}", e).into()),
    }
}
