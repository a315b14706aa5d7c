//! In-memory adapters for the task editor.

mod store;

pub use store::InMemoryTaskStore;
