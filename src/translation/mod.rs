/*!
 * Position-aware dictionary translation.
 *
 * This module contains the translation passes over a document:
 *
 * - `forward`: original -> target, building the term store
 * - `backward`: target -> original, resolving tokens through the store
 * - `reconcile`: repairs the store after edits made in target mode
 * - `compounds`: registers compounds typed in target mode
 * - `identifier`: occurrence-indexed identifiers and annotation policy
 * - `keywords`: words that are never translated
 */

// Re-export main types for easier usage
pub use self::backward::{translate_to_original, translate_to_original_with_progress};
pub use self::compounds::detect_compounds;
pub use self::forward::{ForwardStats, translate_to_target, translate_to_target_with_progress};
pub use self::identifier::{OccurrenceCounter, TypeAnnotationPolicy, build_identifier};
pub use self::keywords::{DEFAULT_PROTECTED_KEYWORDS, ProtectedKeywords};
pub use self::options::TranslationOptions;
pub use self::progress::{NoProgress, ProgressReporter};
pub use self::reconcile::{PositionIndex, ReconcileOutcome, ReconcileSummary, Reconciler};

// Submodules
pub mod backward;
pub mod compounds;
pub mod forward;
pub mod identifier;
pub mod keywords;
pub mod options;
pub mod progress;
pub mod reconcile;
