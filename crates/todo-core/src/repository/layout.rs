//! Persisted Layout
//!
//! Two independent keys:
//! - `@toDos`: `{ [id]: { "text", "working", "ischecked" } }`
//! - `@status`: JSON boolean, `true` for work
//!
//! The field names match data written by earlier releases and must not change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Category, ItemId, StoreResult, TodoItem};
use super::traits::KeyValueStore;

pub const TODOS_KEY: &str = "@toDos";
pub const STATUS_KEY: &str = "@status";

/// All items keyed by id
pub type Collection = BTreeMap<ItemId, TodoItem>;

/// Record shape under `@toDos`
#[derive(Debug, Serialize, Deserialize)]
struct StoredTodo {
    text: String,
    working: bool,
    ischecked: bool,
}

impl StoredTodo {
    fn from_item(item: &TodoItem) -> Self {
        Self {
            text: item.text.clone(),
            working: item.category.is_working(),
            ischecked: item.done,
        }
    }

    fn into_item(self, id: ItemId) -> TodoItem {
        TodoItem {
            id,
            text: self.text,
            category: Category::from_working(self.working),
            done: self.ischecked,
        }
    }
}

pub(crate) fn encode_todos(todos: &Collection) -> StoreResult<String> {
    let stored: BTreeMap<&ItemId, StoredTodo> = todos
        .iter()
        .map(|(id, item)| (id, StoredTodo::from_item(item)))
        .collect();
    Ok(serde_json::to_string(&stored)?)
}

/// `null` decodes to an empty collection
pub(crate) fn decode_todos(json: &str) -> StoreResult<Collection> {
    let stored: Option<BTreeMap<ItemId, StoredTodo>> = serde_json::from_str(json)?;
    Ok(stored
        .unwrap_or_default()
        .into_iter()
        .map(|(id, record)| (id.clone(), record.into_item(id)))
        .collect())
}

pub(crate) fn encode_status(category: Category) -> String {
    category.is_working().to_string()
}

/// `null` decodes to the default category
pub(crate) fn decode_status(json: &str) -> StoreResult<Category> {
    let working: Option<bool> = serde_json::from_str(json)?;
    Ok(working.map(Category::from_working).unwrap_or_default())
}

/// Full persisted state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub todos: Collection,
    pub category: Category,
}

impl Snapshot {
    /// Read both keys. Missing or malformed values fall back to an empty
    /// collection and the work category.
    pub async fn load(store: &dyn KeyValueStore) -> Self {
        let todos = match store.get(TODOS_KEY).await {
            Ok(Some(json)) => decode_todos(&json).unwrap_or_else(|e| {
                log::warn!("Discarding unreadable {}: {}", TODOS_KEY, e);
                Collection::new()
            }),
            Ok(None) => Collection::new(),
            Err(e) => {
                log::error!("Failed to read {}: {}", TODOS_KEY, e);
                Collection::new()
            }
        };

        let category = match store.get(STATUS_KEY).await {
            Ok(Some(json)) => decode_status(&json).unwrap_or_else(|e| {
                log::warn!("Discarding unreadable {}: {}", STATUS_KEY, e);
                Category::default()
            }),
            Ok(None) => Category::default(),
            Err(e) => {
                log::error!("Failed to read {}: {}", STATUS_KEY, e);
                Category::default()
            }
        };

        log::info!("Loaded {} todos, active category {}", todos.len(), category);
        Self { todos, category }
    }

    /// Write both keys directly, bypassing the write queue
    pub async fn save(&self, store: &dyn KeyValueStore) -> StoreResult<()> {
        store.set(TODOS_KEY, &encode_todos(&self.todos)?).await?;
        store.set(STATUS_KEY, &encode_status(self.category)).await
    }
}
