//! Infrastructure layer: storage, inventory import, config, use cases.

pub mod config;
pub mod import;
pub mod inventory_service;
pub mod repository;

pub use config::{AppConfig, ConfigError};
pub use import::{
    confine_to_root, load_inventory_file, parse_inventory, sample_inventory, ImportError,
};
pub use inventory_service::{InventoryService, ServiceError};
pub use repository::{InMemoryItemRepository, ItemRepository};
