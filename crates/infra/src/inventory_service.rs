//! Inventory use cases (application-level orchestration).
//!
//! The central operation is advancing the stored inventory by one day:
//!
//! ```text
//! 1. Load all items from the repository (snapshot)
//!   ↓
//! 2. Run the dispatcher over the snapshot (pure, in place)
//!   ↓
//! 3. Save the snapshot back, only if every item updated cleanly
//! ```
//!
//! Because the dispatcher works on a snapshot, a failed batch never reaches
//! the repository: the stored inventory keeps its pre-update state.

use std::path::{Path, PathBuf};

use thiserror::Error;

use gildedrose_core::DomainError;
use gildedrose_inventory::{Category, InventoryStats, Item, QualityUpdateDispatcher};

use crate::import::{confine_to_root, load_inventory_file, ImportError};
use crate::repository::ItemRepository;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Import(#[from] ImportError),
}

impl ServiceError {
    /// Caller supplied bad input (as opposed to a defect or an IO failure).
    pub fn is_validation(&self) -> bool {
        match self {
            ServiceError::Domain(e) => e.is_validation(),
            ServiceError::Import(ImportError::Io { .. }) => false,
            ServiceError::Import(_) => true,
        }
    }
}

/// Inventory application service: a repository plus the rule dispatcher.
#[derive(Debug)]
pub struct InventoryService<R> {
    repository: R,
    dispatcher: QualityUpdateDispatcher,
    import_root: Option<PathBuf>,
}

impl<R> InventoryService<R>
where
    R: ItemRepository,
{
    pub fn new(repository: R, dispatcher: QualityUpdateDispatcher) -> Self {
        Self {
            repository,
            dispatcher,
            import_root: None,
        }
    }

    /// Only allow [`load_file`](Self::load_file) to read files under `root`.
    /// Relative paths are then resolved against `root`.
    pub fn with_import_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.import_root = Some(root.into());
        self
    }

    pub fn import_root(&self) -> Option<&Path> {
        self.import_root.as_deref()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Advance every stored item by one day and persist the result.
    #[tracing::instrument(skip(self))]
    pub fn advance_day(&self) -> Result<Vec<Item>, ServiceError> {
        let mut items = self.repository.find_all();

        if let Err(e) = self.dispatcher.update_all(&mut items) {
            tracing::error!(error = %e, "inventory update aborted; store left unchanged");
            return Err(e.into());
        }

        self.repository.save(items.clone());
        tracing::info!(count = items.len(), "inventory advanced one day");
        Ok(items)
    }

    /// Validate and append a new item.
    pub fn add_item(
        &self,
        name: &str,
        sell_in: i32,
        quality: i32,
    ) -> Result<Item, ServiceError> {
        let item = Item::new(name, sell_in, quality).inspect_err(|e| {
            tracing::warn!(name, sell_in, quality, error = %e, "rejected item");
        })?;

        self.repository.add(item.clone());
        tracing::info!(name = item.name(), category = %item.category(), "item added");
        Ok(item)
    }

    pub fn items(&self) -> Vec<Item> {
        self.repository.find_all()
    }

    /// First item whose name matches exactly.
    pub fn item(&self, name: &str) -> Option<Item> {
        self.repository.find_all().into_iter().find(|i| i.name() == name)
    }

    pub fn items_by_category(&self, category: Category) -> Vec<Item> {
        self.repository
            .find_all()
            .into_iter()
            .filter(|i| i.category() == category)
            .collect()
    }

    pub fn expired_items(&self) -> Vec<Item> {
        self.repository
            .find_all()
            .into_iter()
            .filter(Item::is_expired)
            .collect()
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_items(&self.repository.find_all())
    }

    /// Replace the inventory with the contents of an inventory file.
    ///
    /// A file that fails to parse leaves the current inventory untouched.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<usize, ServiceError> {
        let requested = path.as_ref();
        let loaded = self
            .resolve_import_path(requested)
            .and_then(|path| load_inventory_file(&path).map(|items| (path, items)));

        let (path, items) = loaded.inspect_err(|e| {
            tracing::warn!(path = %requested.display(), error = %e, "inventory file rejected");
        })?;

        let count = items.len();
        self.repository.save(items);
        tracing::info!(path = %path.display(), count, "inventory loaded from file");
        Ok(count)
    }

    fn resolve_import_path(&self, requested: &Path) -> Result<PathBuf, ImportError> {
        match &self.import_root {
            Some(root) => confine_to_root(root, requested),
            None => Ok(requested.to_path_buf()),
        }
    }

    pub fn replace_all(&self, items: Vec<Item>) {
        tracing::info!(count = items.len(), "inventory replaced");
        self.repository.save(items);
    }

    pub fn clear(&self) {
        self.repository.clear();
        tracing::info!("inventory cleared");
    }

    /// Remove every item named exactly `name`; returns how many were removed.
    pub fn remove_item(&self, name: &str) -> usize {
        let items = self.repository.find_all();
        let before = items.len();
        let kept: Vec<Item> = items.into_iter().filter(|i| i.name() != name).collect();
        let removed = before - kept.len();

        if removed > 0 {
            self.repository.save(kept);
            tracing::info!(name, removed, "item removed");
        }
        removed
    }
}
