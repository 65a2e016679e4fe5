/*!
 * Translation dictionary.
 *
 * A dictionary maps a target-language term to the ordered list of
 * original-language synonyms it stands for:
 *
 * ```json
 * { "Hallo": ["Hello", "hello"], "Welt": ["World"] }
 * ```
 *
 * One file exists per target language (`<dir>/<language>.json`). Lookups on
 * the original side are case-insensitive. Forward translation may append new
 * case variants, which marks the dictionary dirty; it is then rewritten
 * wholesale once at the end of the pass.
 */

use log::{debug, info};
use std::collections::{BTreeMap, HashMap};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::errors::DictionaryError;

/// Result of looking up an original-language word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalMatch {
    /// Target-language term the word translates to
    pub target: String,
    /// Synonym with exactly the same casing as the looked-up word, if listed
    pub exact: Option<String>,
}

/// Target term -> synonyms table with case-insensitive reverse lookups
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    language: String,
    path: Option<PathBuf>,
    entries: BTreeMap<String, Vec<String>>,
    /// Lowercased synonym -> first target term listing it
    reverse: HashMap<String, String>,
    /// Lowercased target term -> target term as written in the file
    keys: HashMap<String, String>,
    dirty: bool,
}

impl Dictionary {
    /// Create an empty, unsaved dictionary
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            ..Default::default()
        }
    }

    /// Build a dictionary from in-memory entries
    pub fn from_entries<I, K, V>(language: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
            .collect();
        let mut dictionary = Self::new(language);
        dictionary.entries = entries;
        dictionary.rebuild_indexes();
        dictionary
    }

    /// Path of the dictionary file for `language` inside `dir`
    pub fn path_for(dir: &Path, language: &str) -> PathBuf {
        dir.join(format!("{}.json", language))
    }

    /// Load the dictionary for `language` from `dir`
    pub fn load(dir: &Path, language: &str) -> Result<Self, DictionaryError> {
        Self::load_file(&Self::path_for(dir, language), language)
    }

    /// Load a dictionary from an explicit file
    pub fn load_file(path: &Path, language: &str) -> Result<Self, DictionaryError> {
        if !path.is_file() {
            return Err(DictionaryError::NotFound {
                language: language.to_string(),
                path: path.display().to_string(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| DictionaryError::Io(e.to_string()))?;
        let entries: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&content).map_err(|e| DictionaryError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        info!("Loaded {} dictionary entries from {:?}", entries.len(), path);

        let mut dictionary = Self::from_entries(language, entries);
        dictionary.path = Some(path.to_path_buf());
        Ok(dictionary)
    }

    /// Attach a file path, so that `save` knows where to write
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    fn rebuild_indexes(&mut self) {
        self.reverse.clear();
        self.keys.clear();
        for (target, synonyms) in &self.entries {
            self.keys
                .entry(target.to_lowercase())
                .or_insert_with(|| target.clone());
            for synonym in synonyms {
                self.reverse
                    .entry(synonym.to_lowercase())
                    .or_insert_with(|| target.clone());
            }
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether new variants were appended since the last save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Synonyms listed under an exact target term
    pub fn synonyms(&self, target: &str) -> Option<&[String]> {
        self.entries.get(target).map(Vec::as_slice)
    }

    /// Look up an original-language word, ignoring case
    pub fn lookup_original(&self, word: &str) -> Option<OriginalMatch> {
        let target = self.reverse.get(&word.to_lowercase())?;
        let exact = self
            .entries
            .get(target)
            .and_then(|synonyms| synonyms.iter().find(|s| s.as_str() == word))
            .cloned();

        Some(OriginalMatch {
            target: target.clone(),
            exact,
        })
    }

    /// First synonym of a target term.
    ///
    /// `ignore_case` makes the key comparison case-insensitive; an exact key
    /// match is still preferred.
    pub fn lookup_target(&self, term: &str, ignore_case: bool) -> Option<&str> {
        let synonyms = match self.entries.get(term) {
            Some(synonyms) => synonyms,
            None if ignore_case => {
                let key = self.keys.get(&term.to_lowercase())?;
                self.entries.get(key)?
            }
            None => return None,
        };
        synonyms.first().map(String::as_str)
    }

    /// Whether `term` is listed as a synonym of any target term
    pub fn contains_original(&self, term: &str) -> bool {
        self.reverse.contains_key(&term.to_lowercase())
    }

    /// Whether `term` is a target term
    pub fn contains_target(&self, term: &str) -> bool {
        self.entries.contains_key(term) || self.keys.contains_key(&term.to_lowercase())
    }

    /// Insert or replace a target term and its synonyms
    pub fn insert(&mut self, target: &str, synonyms: Vec<String>) {
        self.entries.insert(target.to_string(), synonyms);
        self.rebuild_indexes();
        self.dirty = true;
    }

    /// Append a case variant to a target term's synonym list.
    ///
    /// Returns `true` when the list changed.
    pub fn add_variant(&mut self, target: &str, variant: &str) -> bool {
        let Some(synonyms) = self.entries.get_mut(target) else {
            return false;
        };
        if synonyms.iter().any(|s| s == variant) {
            return false;
        }

        synonyms.push(variant.to_string());
        self.reverse
            .entry(variant.to_lowercase())
            .or_insert_with(|| target.to_string());
        self.dirty = true;
        debug!("Added variant '{}' to dictionary entry '{}'", variant, target);
        true
    }

    /// Rewrite the dictionary file, pretty-printed, through an atomic rename
    pub fn save(&mut self) -> Result<(), DictionaryError> {
        let path = self
            .path
            .clone()
            .ok_or_else(|| DictionaryError::Io("dictionary has no file path".to_string()))?;
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).map_err(|e| DictionaryError::Io(e.to_string()))?;

        let temp_file =
            NamedTempFile::new_in(parent).map_err(|e| DictionaryError::Io(e.to_string()))?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, &self.entries)
                .map_err(|e| DictionaryError::Io(e.to_string()))?;
            writer
                .flush()
                .map_err(|e| DictionaryError::Io(e.to_string()))?;
        }
        temp_file
            .persist(&path)
            .map_err(|e| DictionaryError::Io(e.to_string()))?;

        self.dirty = false;
        info!("Saved dictionary with {} entries to {:?}", self.entries.len(), path);
        Ok(())
    }

    /// Save only when variants were appended. Unsaved dictionaries just
    /// clear the flag.
    pub fn save_if_dirty(&mut self) -> Result<bool, DictionaryError> {
        if !self.dirty {
            return Ok(false);
        }
        if self.path.is_none() {
            self.dirty = false;
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }
}
