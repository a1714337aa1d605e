//! Domain Layer
//!
//! To-do entities and the errors shared by the store and the list manager.
//! Nothing in here touches storage.

mod category;
mod error;
mod todo;

pub use category::Category;
pub use error::{StoreError, StoreResult};
pub use todo::{IdGenerator, ItemId, TodoItem};
