//! The in-memory todo collection and its id counter.
//!
//! # Design
//! Records live in a `BTreeMap` keyed by id. Ids are assigned from
//! `next_id` in ascending order, so map iteration order equals
//! insertion order and "list all" is stable within a process run.
//! `next_id` is incremented exactly once per successful create and is
//! never decremented, which keeps it strictly greater than every id
//! ever issued — deleting a record does not free its id.

use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::types::{CompletedPatch, Todo};

/// In-memory mapping from id to `Todo`, plus the id counter.
///
/// Not synchronized; concurrent callers must wrap it in a lock so no
/// two creates observe the same `next_id`.
#[derive(Debug)]
pub struct TodoStore {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// All current records in ascending-id order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.get(&id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Create a record from `text`, trimming surrounding whitespace.
    ///
    /// Returns `StoreError::EmptyText` when nothing remains after the
    /// trim. On success the new record starts with `completed = false`
    /// and the trimmed text is what gets stored.
    pub fn create(&mut self, text: &str) -> Result<Todo, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let todo = Todo {
            id: self.next_id,
            text: text.to_string(),
            completed: false,
        };
        self.next_id += 1;
        self.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    /// Apply a `CompletedPatch` to the record with the given id.
    ///
    /// `Set(b)` assigns `b`; `Toggle` flips the current value. Returns
    /// the updated record, or `StoreError::NotFound` for unknown ids.
    pub fn update(&mut self, id: u64, patch: CompletedPatch) -> Result<Todo, StoreError> {
        let todo = self.todos.get_mut(&id).ok_or(StoreError::NotFound)?;
        todo.completed = match patch {
            CompletedPatch::Set(value) => value,
            CompletedPatch::Toggle => !todo.completed,
        };
        Ok(todo.clone())
    }

    /// Remove the record with the given id.
    ///
    /// Deletion is terminal: the id is never reissued, and deleting an
    /// already-deleted id yields `StoreError::NotFound`, not success.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        self.todos
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_ids_from_one() {
        let mut store = TodoStore::new();
        let first = store.create("Buy milk").unwrap();
        let second = store.create("Walk dog").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn create_starts_incomplete_and_trims_text() {
        let mut store = TodoStore::new();
        let todo = store.create("  Buy milk  ").unwrap();
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(store.get(todo.id), Some(&todo));
    }

    #[test]
    fn create_rejects_whitespace_only_text() {
        let mut store = TodoStore::new();
        assert_eq!(store.create("   "), Err(StoreError::EmptyText));
        assert_eq!(store.create(""), Err(StoreError::EmptyText));
        assert!(store.is_empty());
    }

    #[test]
    fn failed_create_does_not_consume_an_id() {
        let mut store = TodoStore::new();
        let _ = store.create("  ");
        let todo = store.create("First real todo").unwrap();
        assert_eq!(todo.id, 1);
    }

    #[test]
    fn ids_are_never_reused_after_deletion() {
        let mut store = TodoStore::new();
        let a = store.create("a").unwrap();
        let b = store.create("b").unwrap();
        store.delete(a.id).unwrap();
        store.delete(b.id).unwrap();
        let c = store.create("c").unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn list_is_in_creation_order() {
        let mut store = TodoStore::new();
        store.create("first").unwrap();
        store.create("second").unwrap();
        store.create("third").unwrap();
        let texts: Vec<_> = store.list().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn list_empty_store() {
        let store = TodoStore::new();
        assert!(store.list().is_empty());
    }

    #[test]
    fn update_set_assigns_exact_value() {
        let mut store = TodoStore::new();
        let todo = store.create("task").unwrap();
        let updated = store.update(todo.id, CompletedPatch::Set(true)).unwrap();
        assert!(updated.completed);
        // Setting the value it already has is not a toggle.
        let updated = store.update(todo.id, CompletedPatch::Set(true)).unwrap();
        assert!(updated.completed);
        let updated = store.update(todo.id, CompletedPatch::Set(false)).unwrap();
        assert!(!updated.completed);
    }

    #[test]
    fn update_toggle_flips_each_time() {
        let mut store = TodoStore::new();
        let todo = store.create("task").unwrap();
        assert!(store.update(todo.id, CompletedPatch::Toggle).unwrap().completed);
        assert!(!store.update(todo.id, CompletedPatch::Toggle).unwrap().completed);
        assert!(store.update(todo.id, CompletedPatch::Toggle).unwrap().completed);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = TodoStore::new();
        assert_eq!(
            store.update(999, CompletedPatch::Toggle),
            Err(StoreError::NotFound)
        );
    }

    #[test]
    fn delete_removes_the_record() {
        let mut store = TodoStore::new();
        let todo = store.create("task").unwrap();
        store.delete(todo.id).unwrap();
        assert!(store.get(todo.id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn delete_is_not_idempotent() {
        let mut store = TodoStore::new();
        let todo = store.create("task").unwrap();
        store.delete(todo.id).unwrap();
        assert_eq!(store.delete(todo.id), Err(StoreError::NotFound));
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut store = TodoStore::new();
        assert_eq!(store.delete(999), Err(StoreError::NotFound));
    }
}
