//! Inventory aging domain module.
//!
//! This crate contains the business rules for advancing an inventory by one
//! day, implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod category;
pub mod dispatcher;
pub mod item;
pub mod rules;
pub mod stats;

pub use category::{classify, Category, ClassifierEntry, ItemKind, ItemName, CLASSIFIER_TABLE};
pub use dispatcher::QualityUpdateDispatcher;
pub use item::{Item, ItemRecord, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use rules::{
    AgingItemRule, ConjuredItemRule, LegendaryItemRule, NormalItemRule, QualityUpdateRule,
    TimeSensitiveItemRule,
};
pub use stats::{CategoryCount, InventoryStats};
