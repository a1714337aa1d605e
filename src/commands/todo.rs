//! Todo Commands
//!
//! Frontend bindings for the to-do list commands. Each returns the refreshed
//! view of the active category.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{Category, TodoView};
use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CategoryArgs {
    category: Option<Category>,
}

#[derive(Serialize)]
struct SetCategoryArgs {
    category: Category,
}

#[derive(Serialize)]
struct AddTodoArgs<'a> {
    text: &'a str,
    category: Option<Category>,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct TextArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct CommitEditArgs<'a> {
    id: &'a str,
    text: &'a str,
}

// ========================
// Commands
// ========================

async fn call_view<A: Serialize>(cmd: &str, args: Option<&A>) -> Result<TodoView, String> {
    let js_args = match args {
        Some(args) => serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?,
        None => JsValue::NULL,
    };
    let result = invoke(cmd, js_args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{} failed", cmd)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_todo_view(category: Option<Category>) -> Result<TodoView, String> {
    call_view("get_todo_view", Some(&CategoryArgs { category })).await
}

pub async fn set_active_category(category: Category) -> Result<TodoView, String> {
    call_view("set_active_category", Some(&SetCategoryArgs { category })).await
}

pub async fn add_todo(text: &str, category: Option<Category>) -> Result<TodoView, String> {
    call_view("add_todo", Some(&AddTodoArgs { text, category })).await
}

pub async fn toggle_todo(id: &str) -> Result<TodoView, String> {
    call_view("toggle_todo", Some(&IdArgs { id })).await
}

pub async fn begin_edit(id: &str) -> Result<TodoView, String> {
    call_view("begin_edit", Some(&IdArgs { id })).await
}

pub async fn update_edit_draft(text: &str) -> Result<TodoView, String> {
    call_view("update_edit_draft", Some(&TextArgs { text })).await
}

pub async fn commit_edit(id: &str, text: &str) -> Result<TodoView, String> {
    call_view("commit_edit", Some(&CommitEditArgs { id, text })).await
}

pub async fn cancel_edit() -> Result<TodoView, String> {
    call_view::<()>("cancel_edit", None).await
}

pub async fn delete_todo(id: &str) -> Result<TodoView, String> {
    call_view("delete_todo", Some(&IdArgs { id })).await
}
