/*!
 * Document session module.
 *
 * This module provides:
 * - The `DocumentSession` owning dictionary, term store and display mode
 * - Edit detection and reconciliation before translating back
 * - Session state persisted across process runs
 */

pub mod manager;
pub mod models;

// Re-export main types
pub use manager::DocumentSession;
pub use models::{DisplayMode, SessionInfo, SessionOutcome};
