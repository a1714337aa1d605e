//! List Manager
//!
//! Owns the in-memory collection, the active category and the edit state.
//! Every mutation is applied in memory first, then the full snapshot of the
//! touched key is queued for writing. Callers never wait on the store.

use std::sync::Arc;

use crate::domain::{Category, IdGenerator, ItemId, StoreResult, TodoItem};
use crate::repository::{
    encode_status, encode_todos, Collection, KeyValueStore, Snapshot, WriteQueue, STATUS_KEY,
    TODOS_KEY,
};
use super::confirm::{Confirm, DeletePrompt};
use super::view::{EditState, TodoView};

pub struct ListManager {
    todos: Collection,
    active: Category,
    editing: EditState,
    ids: IdGenerator,
    writer: WriteQueue,
}

impl ListManager {
    /// Load state from `store` and start the background writer.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let snapshot = Snapshot::load(store.as_ref()).await;
        Self::from_snapshot(snapshot, WriteQueue::spawn(store))
    }

    pub fn from_snapshot(snapshot: Snapshot, writer: WriteQueue) -> Self {
        Self {
            todos: snapshot.todos,
            active: snapshot.category,
            editing: EditState::NotEditing,
            ids: IdGenerator::new(),
            writer,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn active_category(&self) -> Category {
        self.active
    }

    pub fn get(&self, id: &ItemId) -> Option<&TodoItem> {
        self.todos.get(id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Items in `category`. Cheap to call again; nothing is consumed.
    pub fn list_by_category(&self, category: Category) -> impl Iterator<Item = &TodoItem> + '_ {
        self.todos
            .values()
            .filter(move |item| item.category == category)
    }

    pub fn edit_state(&self) -> &EditState {
        &self.editing
    }

    pub fn editing(&self) -> Option<&ItemId> {
        self.editing.editing_id()
    }

    pub fn check_controls_visible(&self) -> bool {
        !self.editing.is_editing()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            todos: self.todos.clone(),
            category: self.active,
        }
    }

    /// Items of `category` in creation order
    pub fn view(&self, category: Category) -> TodoView {
        let mut items: Vec<TodoItem> = self.list_by_category(category).cloned().collect();
        items.sort_by(|a, b| a.id.creation_key().cmp(&b.id.creation_key()));

        TodoView {
            category,
            active_category: self.active,
            items,
            editing: self.editing().cloned(),
            check_controls_visible: self.check_controls_visible(),
        }
    }

    // ========================
    // Mutations
    // ========================

    pub fn set_active_category(&mut self, category: Category) {
        self.active = category;
        self.persist_status();
    }

    /// Add a new item. Blank text is ignored and returns `None`.
    pub fn add(&mut self, text: &str, category: Category) -> Option<ItemId> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.ids.next_id();
        let item = TodoItem::new(id.clone(), text.to_string(), category);
        self.todos.insert(id.clone(), item);
        self.persist_todos();

        log::debug!("Added todo {} to {}", id, category);
        Some(id)
    }

    /// Flip the done flag; returns the new value, or `None` if `id` is unknown
    pub fn toggle_done(&mut self, id: &ItemId) -> Option<bool> {
        let item = self.todos.get_mut(id)?;
        item.done = !item.done;
        let done = item.done;
        self.persist_todos();
        Some(done)
    }

    /// Enter edit mode for `id`, replacing any other item being edited
    pub fn begin_edit(&mut self, id: &ItemId) -> bool {
        if !self.todos.contains_key(id) {
            return false;
        }
        self.editing = EditState::Editing(id.clone());
        true
    }

    /// Live-update the text of the item being edited.
    ///
    /// Unlike saving on every keystroke, a blank draft is not stored: the item
    /// keeps its last non-blank text until the edit is committed.
    pub fn update_draft(&mut self, text: &str) -> bool {
        let Some(id) = self.editing.editing_id().cloned() else {
            return false;
        };
        if text.trim().is_empty() {
            return false;
        }
        self.replace_text(&id, text)
    }

    /// Store `new_text` on the item being edited and leave edit mode.
    ///
    /// Returns `false` when `id` is not the item being edited. Blank text
    /// keeps the previous text but still ends the edit.
    pub fn commit_edit(&mut self, id: &ItemId, new_text: &str) -> bool {
        if self.editing.editing_id() != Some(id) {
            return false;
        }
        self.editing = EditState::NotEditing;

        if new_text.trim().is_empty() {
            return true;
        }
        self.replace_text(id, new_text)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = EditState::NotEditing;
    }

    /// Prompt to show before deleting `id`, or `None` if `id` is unknown
    pub fn delete_prompt(&self, id: &ItemId) -> Option<DeletePrompt> {
        self.todos.get(id).map(|item| DeletePrompt::for_item(&item.text))
    }

    /// Remove `id` without asking. Leaves edit mode if `id` was being edited.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        if self.todos.remove(id).is_none() {
            return false;
        }
        if self.editing.editing_id() == Some(id) {
            self.editing = EditState::NotEditing;
        }
        self.persist_todos();
        true
    }

    /// Remove `id` once `confirm` agrees. Unknown ids are a no-op and never prompt.
    ///
    /// Holds `&mut self` while the user answers; shared managers should use
    /// [`delete_confirmed`](super::delete_confirmed) instead.
    pub async fn delete<C: Confirm + ?Sized>(&mut self, id: &ItemId, confirm: &C) -> bool {
        let Some(prompt) = self.delete_prompt(id) else {
            return false;
        };

        if !confirm.confirm(&prompt).await {
            log::debug!("Delete of {} cancelled", id);
            return false;
        }
        self.remove(id)
    }

    /// Wait for all queued writes to reach the store
    pub async fn flush(&self) -> StoreResult<()> {
        self.writer.flush().await
    }

    // ========================
    // Persistence
    // ========================

    fn replace_text(&mut self, id: &ItemId, text: &str) -> bool {
        let Some(item) = self.todos.get_mut(id) else {
            return false;
        };
        item.text = text.to_string();
        self.persist_todos();
        true
    }

    fn persist_todos(&self) {
        match encode_todos(&self.todos) {
            Ok(json) => self.writer.enqueue(TODOS_KEY, json),
            Err(e) => log::error!("Failed to encode {}: {}", TODOS_KEY, e),
        }
    }

    fn persist_status(&self) {
        self.writer.enqueue(STATUS_KEY, encode_status(self.active));
    }
}
