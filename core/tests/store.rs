//! Behavioural checks for `TodoStore` against the example fixture.
//!
//! # Design
//! Every test starts from `TodoStore::seeded()` (ids 1 through 5) or an empty
//! store, and asserts both the returned value and the resulting collection so
//! that failures which silently mutate are caught.

use std::collections::HashSet;

use todo_core::{PriorityLevel, StoreError, Todo, TodoCreate, TodoPatch, TodoStore};

fn snapshot(store: &TodoStore) -> Vec<Todo> {
    store.list_first_n(None).unwrap()
}

// --- create ---

#[test]
fn create_on_seeded_store_assigns_next_id() {
    let mut store = TodoStore::seeded();
    let todo = store
        .create(TodoCreate::new("Call Dad", "").with_priority(PriorityLevel::Medium))
        .unwrap();

    assert_eq!(todo.id, 6);
    assert_eq!(todo.name, "Call Dad");
    assert_eq!(todo.description, "");
    assert_eq!(todo.priority, PriorityLevel::Medium);
    assert!(!todo.completed);
    assert_eq!(store.len(), 6);
}

#[test]
fn create_then_get_returns_equal_record() {
    let mut store = TodoStore::seeded();
    let created = store
        .create(TodoCreate::new("Water plants", "Balcony too").with_completed(true))
        .unwrap();

    assert_eq!(store.get_by_id(created.id).unwrap(), &created);
}

#[test]
fn repeated_creates_yield_unique_ids() {
    let mut store = TodoStore::new();
    let mut seen = HashSet::new();
    for i in 0..50 {
        let todo = store.create(TodoCreate::new(format!("Task {i}"), "")).unwrap();
        assert!(seen.insert(todo.id), "duplicate id {}", todo.id);
        if i % 7 == 3 {
            store.delete(todo.id - 1).ok();
        }
    }
    let ids: HashSet<u64> = snapshot(&store).iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), store.len());
}

// --- list ---

#[test]
fn list_first_n_returns_min_of_n_and_len_in_order() {
    let store = TodoStore::seeded();
    let all = snapshot(&store);
    for n in 1..=8 {
        let listed = store.list_first_n(Some(n)).unwrap();
        let expected = (n as usize).min(all.len());
        assert_eq!(listed.len(), expected);
        assert_eq!(listed[..], all[..expected]);
    }
}

#[test]
fn list_on_empty_store_is_empty() {
    let store = TodoStore::new();
    assert!(store.list_first_n(Some(3)).unwrap().is_empty());
    assert!(store.list_first_n(None).unwrap().is_empty());
}

// --- update ---

#[test]
fn update_only_changes_present_fields() {
    let mut store = TodoStore::new();
    let created = store.create(TodoCreate::new("Buy milk", "Semi-skimmed")).unwrap();
    assert_eq!(created.priority, PriorityLevel::Low);

    let patch = TodoPatch {
        completed: Some(true),
        ..TodoPatch::default()
    };
    let updated = store.update(created.id, patch).unwrap();

    assert_eq!(updated.name, "Buy milk");
    assert_eq!(updated.description, "Semi-skimmed");
    assert_eq!(updated.priority, PriorityLevel::Low);
    assert!(updated.completed);
    assert_eq!(store.get_by_id(created.id).unwrap(), &updated);
}

#[test]
fn update_overwrites_every_present_field() {
    let mut store = TodoStore::seeded();
    let patch = TodoPatch {
        name: Some("Read two books".to_string()),
        description: Some(String::new()),
        priority: Some(PriorityLevel::High),
        completed: Some(true),
    };
    let updated = store.update(2, patch).unwrap();

    assert_eq!(updated.id, 2);
    assert_eq!(updated.name, "Read two books");
    assert_eq!(updated.description, "");
    assert_eq!(updated.priority, PriorityLevel::High);
    assert!(updated.completed);
}

#[test]
fn update_keeps_position_in_collection() {
    let mut store = TodoStore::seeded();
    let patch = TodoPatch {
        name: Some("Swimming".to_string()),
        ..TodoPatch::default()
    };
    store.update(3, patch).unwrap();
    assert_eq!(snapshot(&store)[2].name, "Swimming");
}

// --- delete ---

#[test]
fn delete_removes_sports() {
    let mut store = TodoStore::seeded();
    let removed = store.delete(3).unwrap();

    assert_eq!(removed.id, 3);
    assert_eq!(removed.name, "Sports");
    assert_eq!(store.len(), 4);
    assert_eq!(store.get_by_id(3), Err(StoreError::NotFound(3)));
}

// --- unknown ids ---

#[test]
fn unknown_id_fails_without_mutation() {
    let mut store = TodoStore::seeded();
    let before = snapshot(&store);

    assert_eq!(store.get_by_id(42), Err(StoreError::NotFound(42)));
    assert_eq!(
        store.update(42, TodoPatch { completed: Some(true), ..TodoPatch::default() }),
        Err(StoreError::NotFound(42))
    );
    assert_eq!(store.delete(42), Err(StoreError::NotFound(42)));

    assert_eq!(snapshot(&store), before);
}

#[test]
fn not_found_error_mentions_id() {
    let store = TodoStore::new();
    let err = store.get_by_id(9).unwrap_err();
    assert_eq!(err.to_string(), "todo 9 not found");
}
