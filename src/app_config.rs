use anyhow::{Context, Result, anyhow};
use log::info;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::store::SqliteStore;
use crate::text::CompoundSegmenter;
use crate::text::segmenter::DEFAULT_LOGOGRAPHIC_MAX;
use crate::translation::{DEFAULT_PROTECTED_KEYWORDS, ProtectedKeywords, TranslationOptions, TypeAnnotationPolicy};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target language code (ISO)
    pub language: String,

    /// Directory holding one `<language>.json` dictionary per language
    #[serde(default = "default_dictionary_dir")]
    pub dictionary_dir: PathBuf,

    /// SQLite database for the term store; the user data directory when unset
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings of the translation passes
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationConfig {
    // @field: Words never translated, matched exactly
    #[serde(default = "default_protected_keywords")]
    pub protected_keywords: Vec<String>,

    // @field: Type-annotation detection before a token
    #[serde(default)]
    pub type_annotation: TypeAnnotationPolicy,

    // @field: Longest dictionary candidate tried in logographic text
    #[serde(default = "default_logographic_max_segment")]
    pub logographic_max_segment: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            protected_keywords: default_protected_keywords(),
            type_annotation: TypeAnnotationPolicy::default(),
            logographic_max_segment: default_logographic_max_segment(),
        }
    }
}

impl TranslationConfig {
    /// Options for the translation passes
    pub fn options(&self) -> TranslationOptions {
        TranslationOptions::new(
            ProtectedKeywords::new(self.protected_keywords.iter().cloned()),
            self.type_annotation.clone(),
            CompoundSegmenter::new(self.logographic_max_segment),
        )
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_dictionary_dir() -> PathBuf {
    PathBuf::from("dictionaries")
}

fn default_protected_keywords() -> Vec<String> {
    DEFAULT_PROTECTED_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_logographic_max_segment() -> usize {
    DEFAULT_LOGOGRAPHIC_MAX
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(anyhow!("No target language configured"));
        }
        let _language_name = crate::language_utils::get_language_name(&self.language)?;

        let policy = &self.translation.type_annotation;
        if policy.lookback_chars == 0 {
            return Err(anyhow!("type_annotation.lookback_chars must be at least 1"));
        }
        if policy.markers.iter().any(|m| m.trim().is_empty()) {
            return Err(anyhow!("type_annotation.markers must not contain empty markers"));
        }
        if self.translation.logographic_max_segment == 0 {
            return Err(anyhow!("logographic_max_segment must be at least 1"));
        }

        Ok(())
    }

    /// Load the configuration file, writing a default one when it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let config = Config::default();
            config.save(path)?;
            info!("Created default configuration at {}", path.display());
            return Ok(config);
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let config: Config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        crate::file_utils::FileManager::ensure_parent_dir(path)?;
        let file = File::create(path)
            .with_context(|| format!("Failed to create config file: {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Database file for the term store
    pub fn resolved_database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => SqliteStore::default_database_path(),
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: "de".to_string(),
            dictionary_dir: default_dictionary_dir(),
            database_path: None,
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
