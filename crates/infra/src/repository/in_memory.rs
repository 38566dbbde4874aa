use std::sync::{Arc, RwLock};

use gildedrose_inventory::Item;

/// Ordered item collection abstraction (inventory source and sink).
pub trait ItemRepository: Send + Sync {
    /// Snapshot of all items, in stored order.
    fn find_all(&self) -> Vec<Item>;
    /// Replace the whole collection.
    fn save(&self, items: Vec<Item>);
    fn add(&self, item: Item);
    fn clear(&self);
}

impl<S> ItemRepository for Arc<S>
where
    S: ItemRepository + ?Sized,
{
    fn find_all(&self) -> Vec<Item> {
        (**self).find_all()
    }

    fn save(&self, items: Vec<Item>) {
        (**self).save(items)
    }

    fn add(&self, item: Item) {
        (**self).add(item)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// In-memory item list for tests/dev.
#[derive(Debug)]
pub struct InMemoryItemRepository {
    inner: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            inner: RwLock::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn find_all(&self) -> Vec<Item> {
        match self.inner.read() {
            Ok(items) => items.clone(),
            Err(_) => vec![],
        }
    }

    fn save(&self, items: Vec<Item>) {
        if let Ok(mut stored) = self.inner.write() {
            *stored = items;
        }
    }

    fn add(&self, item: Item) {
        if let Ok(mut stored) = self.inner.write() {
            stored.push(item);
        }
    }

    fn clear(&self) {
        if let Ok(mut stored) = self.inner.write() {
            stored.clear();
        }
    }
}
