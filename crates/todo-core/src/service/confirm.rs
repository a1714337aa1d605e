//! Delete Confirmation
//!
//! Deleting an item needs a yes/no answer from the user. The list manager
//! asks through this trait; the app answers with a native dialog.

use async_trait::async_trait;

/// What the user is asked before an item is removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
    /// Text of the item about to be deleted
    pub item_text: String,
}

impl DeletePrompt {
    pub fn for_item(item_text: &str) -> Self {
        Self {
            title: "Delete To Do?",
            message: "Are you sure?",
            confirm_label: "I'm Sure",
            cancel_label: "Cancel",
            item_text: item_text.to_string(),
        }
    }
}

#[async_trait]
pub trait Confirm: Send + Sync {
    /// `true` when the user chose to go ahead
    async fn confirm(&self, prompt: &DeletePrompt) -> bool;
}
