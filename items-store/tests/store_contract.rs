use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use items_store::{InMemoryItemStore, ItemFields, ItemStore};

fn fields(name: &str) -> ItemFields {
    ItemFields::named(name)
}

#[test]
fn test_created_item_reads_back_equal() {
    let store = InMemoryItemStore::new();
    let payload = fields("lamp").with_description("desk lamp");

    let created = store.create(payload.clone());
    let fetched = store.get_by_id(created.id).expect("item should exist");

    assert_eq!(fetched, created);
    assert_eq!(fetched.fields(), payload);
}

#[test]
fn test_get_unknown_id_is_absent() {
    let store = InMemoryItemStore::new();
    assert_eq!(store.get_by_id(1), None);
    assert_eq!(store.get_by_id(-7), None);
}

#[test]
fn test_delete_then_get_is_absent() {
    let store = InMemoryItemStore::new();
    let item = store.create(fields("A"));

    assert!(store.delete_by_id(item.id));
    assert_eq!(store.get_by_id(item.id), None);
}

#[test]
fn test_second_delete_returns_false() {
    let store = InMemoryItemStore::new();
    let item = store.create(fields("A"));

    assert!(store.delete_by_id(item.id));
    assert!(!store.delete_by_id(item.id));
}

#[test]
fn test_update_replaces_all_fields() {
    let store = InMemoryItemStore::new();
    let item = store.create(fields("A").with_description("first"));

    let updated = store.update(item.id, fields("B")).expect("item should exist");

    assert_eq!(updated.id, item.id);
    assert_eq!(updated.name, "B");
    assert_eq!(updated.description, None, "update replaces, not merges");
    assert_eq!(store.get_by_id(item.id), Some(updated));
}

#[test]
fn test_update_unknown_id_leaves_listing_unchanged() {
    let store = InMemoryItemStore::with_items([fields("A"), fields("B")]);
    let before = store.list_all();

    assert_eq!(store.update(42, fields("C")), None);
    assert_eq!(store.list_all(), before);
}

#[test]
fn test_listing_tracks_creates_minus_deletes() {
    let store = InMemoryItemStore::new();
    for name in ["a", "b", "c", "d"] {
        store.create(fields(name));
    }
    assert!(store.delete_by_id(2));
    assert!(!store.delete_by_id(2));
    assert!(!store.delete_by_id(99));

    assert_eq!(store.list_all().len(), 3);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_listing_is_creation_order() {
    let store = InMemoryItemStore::new();
    for name in ["zeta", "alpha", "mid"] {
        store.create(fields(name));
    }

    let names: Vec<String> = store.list_all().into_iter().map(|i| i.name).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_empty_store_lists_nothing() {
    let store = InMemoryItemStore::default();
    assert!(store.list_all().is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let store = InMemoryItemStore::new();
    let first = store.create(fields("A"));
    let second = store.create(fields("B"));
    store.delete_by_id(second.id);
    store.delete_by_id(first.id);

    let third = store.create(fields("C"));
    assert_eq!(third.id, 3);
}

#[test]
fn test_concurrent_creates_get_unique_ids() {
    let store = Arc::new(InMemoryItemStore::new());
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..50)
                    .map(|n| store.create(fields(&format!("{worker}-{n}"))).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "id {id} assigned twice");
        }
    }
    assert_eq!(ids.len(), 400);
    assert_eq!(store.len(), 400);
}

#[test]
fn test_concurrent_update_and_delete_on_same_id() {
    for _ in 0..20 {
        let store = Arc::new(InMemoryItemStore::new());
        let id = store.create(fields("A")).id;

        let updater = {
            let store = Arc::clone(&store);
            thread::spawn(move || store.update(id, fields("B")))
        };
        let deleter = {
            let store = Arc::clone(&store);
            thread::spawn(move || store.delete_by_id(id))
        };

        let updated = updater.join().unwrap();
        assert!(deleter.join().unwrap());

        // Whichever ran first, the delete wins and nothing half-written remains.
        assert_eq!(store.get_by_id(id), None);
        if let Some(item) = updated {
            assert_eq!(item.name, "B");
        }
    }
}

#[test]
fn test_store_is_object_safe() {
    let store: Arc<dyn ItemStore> = Arc::new(InMemoryItemStore::new());
    let item = store.create(fields("dyn"));
    assert_eq!(store.get_by_id(item.id).map(|i| i.name), Some("dyn".into()));
}

#[test]
fn test_item_json_shape() {
    let item = items_store::Item::new(1, fields("A"));
    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        serde_json::json!({ "id": 1, "name": "A" })
    );

    let payload: ItemFields =
        serde_json::from_str(r#"{"id": 9, "name": "B", "description": "d"}"#).unwrap();
    assert_eq!(payload, fields("B").with_description("d"));
}
