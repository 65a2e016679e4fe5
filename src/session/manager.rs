/*!
 * Document session lifecycle.
 *
 * A `DocumentSession` owns everything needed to switch one document between
 * its original language and the target language:
 * - the dictionary of the target language
 * - the document's term store
 * - the reconciler guarding store rebuilds
 * - the current display mode and the texts needed to detect edits
 *
 * Mode and texts are persisted in the store's namespace, so a document
 * translated by one process can be translated back by the next.
 */

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::dictionary::Dictionary;
use crate::errors::{StoreError, TranslationError, TranslationResult};
use crate::file_utils::FileManager;
use crate::store::{SqliteStore, TermStore, document_namespace};
use crate::translation::{
    NoProgress, ProgressReporter, Reconciler, TranslationOptions, detect_compounds,
    translate_to_original_with_progress, translate_to_target_with_progress,
};

use super::models::{DisplayMode, SessionInfo, SessionOutcome};

const STATE_MODE: &str = "mode";
const STATE_LAST_TRANSLATED: &str = "last_translated";
const STATE_ORIGINAL: &str = "original";

/// Translation state of one open document
pub struct DocumentSession {
    dictionary: Dictionary,
    store: TermStore,
    options: TranslationOptions,
    reconciler: Reconciler,
    mode: DisplayMode,
    /// Target text produced by the last forward pass
    last_translated: Option<String>,
    /// Original text the last forward pass started from
    original: Option<String>,
}

impl DocumentSession {
    /// Create a session over an already opened store, restoring saved state
    pub fn new(
        dictionary: Dictionary,
        store: TermStore,
        options: TranslationOptions,
    ) -> Result<Self, StoreError> {
        let mode = match store.state(STATE_MODE)? {
            Some(saved) => saved.parse().unwrap_or_else(|e| {
                warn!("{}; assuming original mode", e);
                DisplayMode::Original
            }),
            None => DisplayMode::Original,
        };
        let last_translated = store.state(STATE_LAST_TRANSLATED)?;
        let original = store.state(STATE_ORIGINAL)?;

        debug!("Session '{}' restored in {} mode", store.namespace(), mode);
        Ok(Self {
            dictionary,
            store,
            options,
            reconciler: Reconciler::new(),
            mode,
            last_translated,
            original,
        })
    }

    /// Open the session of `document` as configured: dictionary from the
    /// dictionary directory, store in the SQLite database
    pub fn open(config: &Config, document: &Path) -> Result<Self> {
        config.validate()?;

        let dictionary = Dictionary::load(&config.dictionary_dir, &config.language)
            .with_context(|| format!("Failed to load the '{}' dictionary", config.language))?;

        let database_path = config.resolved_database_path()?;
        let backend = SqliteStore::new(&database_path)?;
        let namespace = document_namespace(&FileManager::document_key_path(document));
        let store = TermStore::open(Box::new(backend), &namespace)
            .with_context(|| format!("Failed to open term store at {}", database_path.display()))?;

        let session = Self::new(dictionary, store, config.translation.options())?;
        Ok(session)
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn store(&self) -> &TermStore {
        &self.store
    }

    pub fn options(&self) -> &TranslationOptions {
        &self.options
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            namespace: self.store.namespace().to_string(),
            language: self.dictionary.language().to_string(),
            mode: self.mode,
            term_count: self.store.term_count(),
            compound_count: self.store.compound_count(),
            dictionary_entries: self.dictionary.len(),
        }
    }

    /// Translate an original-language document into the target language
    pub fn to_target(&mut self, text: &str) -> TranslationResult<SessionOutcome> {
        self.to_target_with_progress(text, &NoProgress)
    }

    pub fn to_target_with_progress(
        &mut self,
        text: &str,
        reporter: &dyn ProgressReporter,
    ) -> TranslationResult<SessionOutcome> {
        if self.mode == DisplayMode::Target {
            warn!("Document is already in target mode; leaving it unchanged");
            return Ok(SessionOutcome::unchanged(text, self.mode));
        }

        let translated = translate_to_target_with_progress(
            text,
            &mut self.dictionary,
            &mut self.store,
            &self.options,
            reporter,
        )?;

        self.mode = DisplayMode::Target;
        self.last_translated = Some(translated.clone());
        self.original = Some(text.to_string());
        self.persist_state()?;

        info!(
            "Document translated to '{}' ({} terms, {} compounds)",
            self.dictionary.language(),
            self.store.term_count(),
            self.store.compound_count()
        );
        Ok(SessionOutcome {
            text: translated,
            mode: self.mode,
            changed: true,
            reconciliation: None,
            compounds_detected: 0,
        })
    }

    /// Translate a target-language document back, repairing the store first
    /// when the text was edited since the forward pass
    pub fn to_original(&mut self, text: &str) -> TranslationResult<SessionOutcome> {
        self.to_original_with_progress(text, &NoProgress)
    }

    pub fn to_original_with_progress(
        &mut self,
        text: &str,
        reporter: &dyn ProgressReporter,
    ) -> TranslationResult<SessionOutcome> {
        if self.mode == DisplayMode::Original {
            warn!("Document is already in original mode; leaving it unchanged");
            return Ok(SessionOutcome::unchanged(text, self.mode));
        }
        if self.dictionary.language().trim().is_empty() {
            return Err(TranslationError::MissingLanguage);
        }

        let mut reconciliation = None;
        let mut compounds_detected = 0;
        let edited = self.last_translated.as_deref() != Some(text);
        if edited {
            let last = self.last_translated.clone().unwrap_or_default();
            let original = self.original.clone().unwrap_or_default();
            info!("Document was edited in target mode, reconciling");
            reconciliation = Some(self.reconciler.rebuild_map(&mut self.store, &last, &original, text)?);
            compounds_detected = detect_compounds(text, &self.dictionary, &mut self.store, &self.options)?;
        }

        let restored = translate_to_original_with_progress(
            text,
            &self.dictionary,
            &self.store,
            &self.options,
            reporter,
        )?;

        self.store.clear()?;
        self.mode = DisplayMode::Original;
        self.last_translated = None;
        self.original = None;
        self.persist_state()?;

        info!("Document restored to the original language");
        Ok(SessionOutcome {
            text: restored,
            mode: self.mode,
            changed: true,
            reconciliation,
            compounds_detected,
        })
    }

    /// Switch the document to the other language
    pub fn toggle(&mut self, text: &str) -> TranslationResult<SessionOutcome> {
        self.toggle_with_progress(text, &NoProgress)
    }

    pub fn toggle_with_progress(
        &mut self,
        text: &str,
        reporter: &dyn ProgressReporter,
    ) -> TranslationResult<SessionOutcome> {
        match self.mode {
            DisplayMode::Original => self.to_target_with_progress(text, reporter),
            DisplayMode::Target => self.to_original_with_progress(text, reporter),
        }
    }

    fn persist_state(&mut self) -> Result<(), StoreError> {
        self.store.set_state(STATE_MODE, Some(self.mode.as_str()))?;
        self.store
            .set_state(STATE_LAST_TRANSLATED, self.last_translated.as_deref())?;
        self.store.set_state(STATE_ORIGINAL, self.original.as_deref())?;
        Ok(())
    }
}
