//! Repository Layer
//!
//! Key-value persistence and the two-key layout the to-do lists are saved in.

mod traits;
mod db;
mod memory;
mod layout;
mod writer;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStore;
pub use db::{open_store, SqliteStore};
pub use memory::MemoryStore;
pub use layout::{Collection, Snapshot, STATUS_KEY, TODOS_KEY};
pub use writer::WriteQueue;
pub(crate) use layout::{encode_status, encode_todos};
