use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::trace;

use crate::{Item, ItemFields, ItemId, ItemStore};

/// An [`ItemStore`] that keeps everything in process memory.
///
/// Ids grow monotonically from 1 and are never handed out twice, so
/// keying the map by id keeps it in creation order.
#[derive(Debug)]
pub struct InMemoryItemStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with `items`, numbered from 1.
    pub fn with_items(items: impl IntoIterator<Item = ItemFields>) -> Self {
        let store = Self::new();
        for fields in items {
            store.create(fields);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave `Inner` half-written:
    // every mutation is a single map operation.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn list_all(&self) -> Vec<Item> {
        self.read().items.values().cloned().collect()
    }

    fn create(&self, fields: ItemFields) -> Item {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let item = Item::new(id, fields);
        inner.items.insert(id, item.clone());
        trace!(id, "item created");
        item
    }

    fn get_by_id(&self, id: ItemId) -> Option<Item> {
        self.read().items.get(&id).cloned()
    }

    fn update(&self, id: ItemId, fields: ItemFields) -> Option<Item> {
        let mut inner = self.write();
        let item = inner.items.get_mut(&id)?;
        *item = Item::new(id, fields);
        trace!(id, "item updated");
        Some(item.clone())
    }

    fn delete_by_id(&self, id: ItemId) -> bool {
        let removed = self.write().items.remove(&id).is_some();
        if removed {
            trace!(id, "item deleted");
        }
        removed
    }
}
