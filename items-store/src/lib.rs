//! Item records and the store that owns them.
//!
//! The store is the only component allowed to mutate items. It assigns
//! identity on creation and answers lookups with `Option`, where `None`
//! is an ordinary "absent" outcome rather than an error.

mod memory;

pub use memory::InMemoryItemStore;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier assigned to an [`Item`] by its store.
pub type ItemId = i64;

/// A stored item.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier, assigned by the store on creation.
    pub id: ItemId,
    /// Display name of the item.
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    /// Attach an identity to a payload.
    pub fn new(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
        }
    }

    /// The descriptive fields of this item, without its identity.
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new(1, ItemFields::default())
    }
}

/// The payload of an item: everything except its identity.
///
/// Request bodies for create and update deserialize into this type, so an
/// `id` sent by a client is ignored.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ItemFields {
    /// Display name of the item.
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemFields {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Default for ItemFields {
    fn default() -> Self {
        Self::named("Item 1").with_description("This is item 1")
    }
}

/// The two demo records new services are seeded with.
pub fn sample_items() -> Vec<ItemFields> {
    vec![
        ItemFields::named("Item 1").with_description("This is item 1"),
        ItemFields::named("Item 2").with_description("This is item 2"),
    ]
}

/// Owner of all item records.
///
/// Implementations must make `create`, `update` and `delete_by_id` atomic
/// with respect to concurrent callers. None of the operations can fail: a
/// missing id is reported as `None` or `false`.
pub trait ItemStore: Send + Sync {
    /// All items, in creation order.
    fn list_all(&self) -> Vec<Item>;

    /// Store a new item under a fresh id and return it.
    fn create(&self, fields: ItemFields) -> Item;

    fn get_by_id(&self, id: ItemId) -> Option<Item>;

    /// Replace every field of the item with `id`.
    ///
    /// Returns `None` without touching the store when `id` is unknown.
    fn update(&self, id: ItemId, fields: ItemFields) -> Option<Item>;

    /// Remove the item with `id`, returning whether it existed.
    fn delete_by_id(&self, id: ItemId) -> bool;
}
