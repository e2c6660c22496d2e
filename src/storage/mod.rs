//! # Snippet Storage
//!
//! SQLite-backed storage for the `snippets` table.
//!
//! The store owns the database path and opens a fresh connection per
//! operation; every operation acquires and releases its connection on all
//! exit paths. Correctness under concurrent requests relies on SQLite's
//! single-statement atomicity — no multi-statement transactions are used.

mod errors;
mod filter;
mod schema;
mod store;

pub use errors::{StoreError, StoreResult};
pub use filter::SnippetFilter;
pub use store::{NewSnippet, Snippet, SnippetStore};
