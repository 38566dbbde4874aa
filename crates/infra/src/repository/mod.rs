//! Item storage abstractions.

pub mod in_memory;

pub use in_memory::{InMemoryItemRepository, ItemRepository};
