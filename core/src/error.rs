//! Error types for the todo store.
//!
//! # Design
//! Two variants because callers map them to different HTTP statuses:
//! `EmptyText` is a validation failure on create (400), `NotFound` is
//! an unknown id on update or delete (404). Neither is fatal; the
//! store stays usable after any error.

use std::fmt;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The todo text was empty after trimming surrounding whitespace.
    EmptyText,

    /// No todo with the given id exists in the store.
    NotFound,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::EmptyText => write!(f, "todo text is empty"),
            StoreError::NotFound => write!(f, "todo not found"),
        }
    }
}

impl std::error::Error for StoreError {}
