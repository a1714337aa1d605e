//! Render-ready projections of list manager state.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, ItemId, TodoItem};

/// Inline edit mode. Only one item is editable at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    NotEditing,
    Editing(ItemId),
}

impl EditState {
    pub fn editing_id(&self) -> Option<&ItemId> {
        match self {
            EditState::NotEditing => None,
            EditState::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }
}

/// One category as the frontend draws it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    /// Category being shown
    pub category: Category,
    /// Persisted active tab
    pub active_category: Category,
    /// Items of `category` in creation order
    pub items: Vec<TodoItem>,
    pub editing: Option<ItemId>,
    /// Checkboxes are hidden for every row while any item is being edited
    pub check_controls_visible: bool,
}
