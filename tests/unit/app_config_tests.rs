/*!
 * Tests for app configuration functionality
 */

use std::path::PathBuf;
use termshift::app_config::{Config, LogLevel, TranslationConfig};

use crate::common;

#[test]
fn test_default_shouldTargetGermanWithBuiltInKeywords() {
    let config = Config::default();
    assert_eq!(config.language, "de");
    assert_eq!(config.dictionary_dir, PathBuf::from("dictionaries"));
    assert!(config.translation.protected_keywords.iter().any(|k| k == "return"));
    assert_eq!(config.translation.type_annotation.lookback_chars, 10);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefault() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("conf.json");

    let config = Config::load_or_create(&path)?;
    assert!(path.is_file());
    assert_eq!(config.language, "de");

    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded.translation, config.translation);
    Ok(())
}

#[test]
fn test_loadOrCreate_withPartialFile_shouldFillDefaults() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "language": "ru", "log_level": "debug", "translation": { "protected_keywords": ["fn"] } }"#,
    )?;

    let config = Config::load_or_create(&path)?;
    assert_eq!(config.language, "ru");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.translation.protected_keywords, vec!["fn".to_string()]);
    assert_eq!(config.translation.logographic_max_segment, TranslationConfig::default().logographic_max_segment);
    assert!(config.validate().is_ok());
    Ok(())
}

#[test]
fn test_validate_withEmptyLanguage_shouldFail() {
    let config = Config {
        language: "  ".to_string(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyMarker_shouldFail() {
    let mut config = Config::default();
    config.translation.type_annotation.markers.push(" ".to_string());
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroSegmentLength_shouldFail() {
    let mut config = Config::default();
    config.translation.logographic_max_segment = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_options_shouldCarryConfiguredKeywords() {
    let translation = TranslationConfig {
        protected_keywords: vec!["select".to_string()],
        ..TranslationConfig::default()
    };
    let options = translation.options();
    assert!(options.keywords.contains("select"));
    assert!(!options.keywords.contains("return"));
}

#[test]
fn test_resolvedDatabasePath_withExplicitPath_shouldUseIt() -> anyhow::Result<()> {
    let config = Config {
        database_path: Some(PathBuf::from("/tmp/terms.db")),
        ..Config::default()
    };
    assert_eq!(config.resolved_database_path()?, PathBuf::from("/tmp/terms.db"));
    Ok(())
}

#[test]
fn test_logLevel_shouldMapToFilter() {
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
