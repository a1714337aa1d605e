//! Service Layer
//!
//! The list manager and the collaborators it talks to.

mod confirm;
mod list_manager;
mod shared;
mod view;

pub use confirm::{Confirm, DeletePrompt};
pub use list_manager::ListManager;
pub use shared::{delete_confirmed, SharedLists};
pub use view::{EditState, TodoView};
