//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to the list manager.

mod todo_cmd;
mod dialog_cmd;
mod log_cmd;

pub use todo_cmd::*;
pub use log_cmd::*;
