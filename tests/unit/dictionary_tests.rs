/*!
 * Tests for dictionary loading, lookups and saving
 */

use termshift::dictionary::Dictionary;
use termshift::errors::DictionaryError;

use crate::common;

#[test]
fn test_load_withWrittenFile_shouldIndexBothSides() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::write_german_dictionary(temp_dir.path())?;

    let dictionary = Dictionary::load(temp_dir.path(), "de")?;
    assert_eq!(dictionary.language(), "de");
    assert_eq!(dictionary.len(), common::german_entries().len());
    assert_eq!(dictionary.lookup_original("WORLD").unwrap().target, "Welt");
    assert!(dictionary.contains_target("hallo"));
    assert!(!dictionary.contains_original("Hallo"));
    Ok(())
}

#[test]
fn test_load_withWrongShape_shouldReturnParseError() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "de.json", r#"{ "Hallo": "Hello" }"#)?;

    let result = Dictionary::load(temp_dir.path(), "de");
    assert!(matches!(result, Err(DictionaryError::Parse { .. })));
    Ok(())
}

#[test]
fn test_saveIfDirty_withoutChanges_shouldNotWrite() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::write_german_dictionary(temp_dir.path())?;
    let before = std::fs::read_to_string(&path)?;

    let mut dictionary = Dictionary::load(temp_dir.path(), "de")?;
    assert!(!dictionary.save_if_dirty()?);
    assert_eq!(std::fs::read_to_string(&path)?, before);
    Ok(())
}

#[test]
fn test_addVariant_thenSave_shouldPersistVariant() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::write_german_dictionary(temp_dir.path())?;

    let mut dictionary = Dictionary::load(temp_dir.path(), "de")?;
    assert!(dictionary.add_variant("Zahl", "Number"));
    assert!(dictionary.save_if_dirty()?);

    let reloaded = Dictionary::load(temp_dir.path(), "de")?;
    assert_eq!(reloaded.synonyms("Zahl").unwrap(), ["number", "Number"]);
    assert_eq!(
        reloaded.lookup_original("Number").unwrap().exact.as_deref(),
        Some("Number")
    );
    Ok(())
}

#[test]
fn test_lookupTarget_withCyrillicKey_shouldBeCaseSensitiveWhenAsked() {
    let dictionary = Dictionary::from_entries("ru", vec![("Мир", vec!["World"])]);
    assert_eq!(dictionary.lookup_target("Мир", false), Some("World"));
    assert_eq!(dictionary.lookup_target("мир", false), None);
}
