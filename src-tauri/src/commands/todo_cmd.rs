//! Tauri Commands for the to-do lists
//!
//! Every command returns the refreshed view of the active category so the
//! frontend can redraw without a second round trip.

use tauri::{AppHandle, Runtime, State};
use todo_core::{delete_confirmed, Category, ItemId, ListManager, TodoView};

use crate::AppState;
use super::dialog_cmd::DialogConfirm;

const NOT_READY: &str = "Store not initialized";

fn not_ready() -> String {
    NOT_READY.to_string()
}

fn active_view(manager: &ListManager) -> TodoView {
    manager.view(manager.active_category())
}

/// View of one category (defaults to the active one)
#[tauri::command]
pub async fn get_todo_view(
    state: State<'_, AppState>,
    category: Option<String>,
) -> Result<TodoView, String> {
    let guard = state.todos.lock().await;
    let manager = guard.as_ref().ok_or_else(not_ready)?;

    let category = category
        .map(|c| Category::from_str(&c))
        .unwrap_or_else(|| manager.active_category());
    Ok(manager.view(category))
}

/// Switch tabs
#[tauri::command]
pub async fn set_active_category(
    state: State<'_, AppState>,
    category: String,
) -> Result<TodoView, String> {
    let mut guard = state.todos.lock().await;
    let manager = guard.as_mut().ok_or_else(not_ready)?;

    manager.set_active_category(Category::from_str(&category));
    Ok(active_view(manager))
}

/// Add an item; blank text leaves the list unchanged
#[tauri::command]
pub async fn add_todo(
    state: State<'_, AppState>,
    text: String,
    category: Option<String>,
) -> Result<TodoView, String> {
    let mut guard = state.todos.lock().await;
    let manager = guard.as_mut().ok_or_else(not_ready)?;

    let category = category
        .map(|c| Category::from_str(&c))
        .unwrap_or_else(|| manager.active_category());
    manager.add(&text, category);
    Ok(active_view(manager))
}

/// Toggle item completion status
#[tauri::command]
pub async fn toggle_todo(state: State<'_, AppState>, id: String) -> Result<TodoView, String> {
    let mut guard = state.todos.lock().await;
    let manager = guard.as_mut().ok_or_else(not_ready)?;

    if manager.toggle_done(&ItemId::new(id.clone())).is_none() {
        log::warn!("toggle_todo: unknown id {}", id);
    }
    Ok(active_view(manager))
}

#[tauri::command]
pub async fn begin_edit(state: State<'_, AppState>, id: String) -> Result<TodoView, String> {
    let mut guard = state.todos.lock().await;
    let manager = guard.as_mut().ok_or_else(not_ready)?;

    manager.begin_edit(&ItemId::new(id));
    Ok(active_view(manager))
}

/// Live text update from the edit field
#[tauri::command]
pub async fn update_edit_draft(state: State<'_, AppState>, text: String) -> Result<TodoView, String> {
    let mut guard = state.todos.lock().await;
    let manager = guard.as_mut().ok_or_else(not_ready)?;

    manager.update_draft(&text);
    Ok(active_view(manager))
}

#[tauri::command]
pub async fn commit_edit(
    state: State<'_, AppState>,
    id: String,
    text: String,
) -> Result<TodoView, String> {
    let mut guard = state.todos.lock().await;
    let manager = guard.as_mut().ok_or_else(not_ready)?;

    manager.commit_edit(&ItemId::new(id), &text);
    Ok(active_view(manager))
}

#[tauri::command]
pub async fn cancel_edit(state: State<'_, AppState>) -> Result<TodoView, String> {
    let mut guard = state.todos.lock().await;
    let manager = guard.as_mut().ok_or_else(not_ready)?;

    manager.cancel_edit();
    Ok(active_view(manager))
}

/// Delete an item after the user confirms in a native dialog.
///
/// Other commands keep running while the dialog is open.
#[tauri::command]
pub async fn delete_todo<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, AppState>,
    id: String,
) -> Result<TodoView, String> {
    let confirm = DialogConfirm::new(app);
    let deleted = delete_confirmed(&state.todos, &ItemId::new(id.clone()), &confirm)
        .await
        .ok_or_else(not_ready)?;
    if deleted {
        log::info!("Deleted todo {}", id);
    }

    let guard = state.todos.lock().await;
    let manager = guard.as_ref().ok_or_else(not_ready)?;
    Ok(active_view(manager))
}
