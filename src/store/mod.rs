/*!
 * Persistent storage for term and compound records.
 *
 * This module provides:
 * - The `KeyValueStore` abstraction over the persistence backend
 * - An in-memory backend and an SQLite-backed one
 * - Typed term/compound records with lenient decoding
 * - The `TermStore` typed tables used by the translation passes
 */

pub mod backend;
pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export main types
pub use backend::{KeyValueStore, MemoryStore};
pub use connection::SqliteStore;
pub use models::{CompoundRecord, TermRecord};
pub use repository::{DEFAULT_NAMESPACE, TermStore, document_namespace};
