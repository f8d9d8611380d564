//! In-memory todo store core.
//!
//! # Overview
//! Owns the todo records, the id counter, and the validation rules,
//! with no I/O and no async. The HTTP layer (the `server` crate) holds
//! a single `TodoStore` behind a lock and translates `StoreError`
//! values into status codes.
//!
//! # Design
//! - `TodoStore` is the only mutable state; ids are assigned from an
//!   internal counter and never reused, even after deletion.
//! - Update semantics are expressed as the `CompletedPatch` sum type:
//!   `Set(b)` when the caller supplied a boolean, `Toggle` otherwise.
//!   The fallback-to-toggle policy lives in the caller's mapping to
//!   this enum, not in a runtime type check.
//! - All operations complete synchronously; callers needing concurrent
//!   access must serialize it themselves.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{CompletedPatch, Todo};
