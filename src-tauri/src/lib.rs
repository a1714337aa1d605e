//! Todo Tabs Backend
//!
//! Layered architecture:
//! - todo-core: domain, key-value store, list manager
//! - commands: Tauri command handlers

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tauri::{Emitter, Manager};
use tokio::sync::Mutex;
use todo_core::{open_store, KeyValueStore, ListManager, MemoryStore, SharedLists};

mod commands;

/// Application state shared across commands
pub struct AppState {
    /// `None` until the store has been loaded in the background
    pub todos: SharedLists,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join("todo_tabs.db"))
}

/// Open the SQLite store, falling back to memory so the app stays usable
fn open_or_fallback(db_path: &Path) -> Arc<dyn KeyValueStore> {
    match open_store(db_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::error!(
                "Failed to open store at {}: {}; falling back to in-memory store",
                db_path.display(),
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "TodoTabs")?;

            let db_path = get_db_path(&app_handle)?;
            log::info!("App setup starting, store at {}", db_path.display());

            let todos: SharedLists = Arc::new(Mutex::new(None));
            app.manage(AppState {
                todos: todos.clone(),
            });

            // Load lists in the background; commands report "not initialized" until then
            tauri::async_runtime::spawn(async move {
                let store = open_or_fallback(&db_path);
                let manager = ListManager::load(store).await;
                log::info!("Loaded {} todos", manager.len());
                *todos.lock().await = Some(manager);

                if let Err(e) = app_handle.emit("todos-loaded", ()) {
                    log::error!("Failed to emit todos-loaded: {}", e);
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_todo_view,
            commands::set_active_category,
            commands::add_todo,
            commands::toggle_todo,
            commands::begin_edit,
            commands::update_edit_draft,
            commands::commit_edit,
            commands::cancel_edit,
            commands::delete_todo,
            commands::get_recent_logs,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| {
            // Drain queued writes before the process goes away
            if let tauri::RunEvent::ExitRequested { .. } = event {
                let state = app_handle.state::<AppState>();
                let todos = state.todos.clone();
                tauri::async_runtime::block_on(async move {
                    if let Some(manager) = todos.lock().await.as_ref() {
                        if let Err(e) = manager.flush().await {
                            log::error!("Failed to flush pending writes: {}", e);
                        }
                    }
                });
            }
        });
}
