/*!
 * Error types for the termshift library.
 *
 * This module contains custom error types for the different layers,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Only user-facing preconditions are hard errors. Integrity problems in
 * stored records are repaired in place by the store and never surface here.
 */

use thiserror::Error;

/// Errors that can occur when loading or saving a dictionary
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file for the requested language does not exist
    #[error("Dictionary not found for language '{language}': {path}")]
    NotFound {
        /// Language code that was requested
        language: String,
        /// Path that was probed
        path: String,
    },

    /// The dictionary file exists but is not a JSON object of string arrays
    #[error("Failed to parse dictionary {path}: {message}")]
    Parse {
        /// Path of the offending file
        path: String,
        /// Parser message
        message: String,
    },

    /// Reading or writing the dictionary file failed
    #[error("Dictionary I/O error: {0}")]
    Io(String),
}

/// Errors raised by a key-value store backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend rejected an operation
    #[error("Store backend error: {0}")]
    Backend(String),

    /// A value could not be serialized for storage
    #[error("Failed to encode stored value: {0}")]
    Encode(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Backend(error.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        Self::Encode(error.to_string())
    }
}

/// Errors that can occur during a translation pass
#[derive(Error, Debug)]
pub enum TranslationError {
    /// No target language has been selected
    #[error("No language selected for translation")]
    MissingLanguage,

    /// Dictionary could not be loaded or saved
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// The term store failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a translation pass
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from the store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from the dictionary
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

/// Result alias for translation passes
pub type TranslationResult<T> = Result<T, TranslationError>;
