//! Domain types for the todo store.
//!
//! # Design
//! `Todo` is the wire shape as well as the stored shape; the server
//! crate serializes it directly, so integration tests catch any drift
//! between what the store holds and what clients see.

use serde::{Deserialize, Serialize};

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Unique, monotonically assigned, never reused after deletion.
    pub id: u64,
    /// Non-empty after trimming; stored in trimmed form.
    pub text: String,
    pub completed: bool,
}

/// How an update request wants the `completed` flag changed.
///
/// A request carrying a boolean `completed` maps to `Set`; anything
/// else (field absent, null, or non-boolean) maps to `Toggle`. The
/// toggle fallback is the contract for a UI "click to toggle"
/// interaction, so malformed values flip the flag rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletedPatch {
    /// Assign this exact value.
    Set(bool),
    /// Flip the current value.
    Toggle,
}
