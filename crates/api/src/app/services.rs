//! Service wiring: repository + dispatcher behind one shared handle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use gildedrose_infra::{
    load_inventory_file, sample_inventory, InMemoryItemRepository, InventoryService,
};
use gildedrose_inventory::{Item, QualityUpdateDispatcher};

pub type AppRepository = Arc<InMemoryItemRepository>;
pub type AppServices = InventoryService<AppRepository>;

/// In-memory wiring seeded with `initial`. HTTP file loads are confined to
/// `import_dir`.
pub fn build_services(initial: Vec<Item>, import_dir: impl Into<PathBuf>) -> AppServices {
    let repository = Arc::new(InMemoryItemRepository::with_items(initial));
    InventoryService::new(repository, QualityUpdateDispatcher::with_default_rules())
        .with_import_root(import_dir)
}

/// Startup inventory: the configured file if it loads cleanly, otherwise the
/// built-in sample.
pub fn initial_inventory(path: &Path) -> Vec<Item> {
    match load_inventory_file(path) {
        Ok(items) => {
            tracing::info!(path = %path.display(), count = items.len(), "loaded inventory file");
            items
        }
        Err(e) => {
            let items = sample_inventory();
            tracing::warn!(
                path = %path.display(),
                error = %e,
                count = items.len(),
                "inventory file unavailable; using sample inventory"
            );
            items
        }
    }
}
