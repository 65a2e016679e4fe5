/*!
 * Session-specific models.
 *
 * These structures describe the state of one open document and the result
 * of switching it between languages.
 */

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::translation::ReconcileOutcome;

/// Language a document is currently displayed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Original,
    Target,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Original => "original",
            DisplayMode::Target => "target",
        }
    }

    /// The mode a toggle switches to
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Original => DisplayMode::Target,
            DisplayMode::Target => DisplayMode::Original,
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "original" => Ok(DisplayMode::Original),
            "target" => Ok(DisplayMode::Target),
            other => Err(format!("Unknown display mode: {}", other)),
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of switching a document between languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Document text after the switch
    pub text: String,
    /// Mode the document is now in
    pub mode: DisplayMode,
    /// Whether the text was actually translated
    pub changed: bool,
    /// Reconciliation run before translating back, if edits were found
    pub reconciliation: Option<ReconcileOutcome>,
    /// Compounds registered for words typed in target mode
    pub compounds_detected: usize,
}

impl SessionOutcome {
    pub(crate) fn unchanged(text: &str, mode: DisplayMode) -> Self {
        Self {
            text: text.to_string(),
            mode,
            changed: false,
            reconciliation: None,
            compounds_detected: 0,
        }
    }
}

/// Snapshot of a document session for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Store namespace of the document
    pub namespace: String,
    /// Target language code
    pub language: String,
    pub mode: DisplayMode,
    pub term_count: usize,
    pub compound_count: usize,
    pub dictionary_entries: usize,
}

impl std::fmt::Display for SessionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] mode: {}, language: {}, {} terms, {} compounds, {} dictionary entries",
            self.namespace.trim_end_matches(':'),
            self.mode,
            self.language,
            self.term_count,
            self.compound_count,
            self.dictionary_entries
        )
    }
}
