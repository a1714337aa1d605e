//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// List a to-do belongs to (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Travel,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Travel => "travel",
        }
    }

    /// Input placeholder for this tab
    pub fn placeholder(&self) -> &'static str {
        match self {
            Category::Work => "Add a To Do",
            Category::Travel => "Where do you want to go?",
        }
    }
}

/// To-do item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub category: Category,
    pub done: bool,
}

/// One category as returned by every backend command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoView {
    pub category: Category,
    pub active_category: Category,
    pub items: Vec<TodoItem>,
    pub editing: Option<String>,
    pub check_controls_visible: bool,
}
