//! Todo Tabs Core
//!
//! Two to-do lists ("work" and "travel") kept in memory and mirrored to a
//! key-value store after every change.
//!
//! Layered architecture:
//! - domain: items, categories, errors
//! - repository: key-value stores, the persisted layout and the write queue
//! - service: the list manager

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{Category, ItemId, StoreError, StoreResult, TodoItem};
pub use repository::{open_store, KeyValueStore, MemoryStore, Snapshot, SqliteStore};
pub use service::{
    delete_confirmed, Confirm, DeletePrompt, EditState, ListManager, SharedLists, TodoView,
};
