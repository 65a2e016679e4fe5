/*!
 * Tests for file utility functions
 */

use std::fs;
use termshift::file_utils::FileManager;

use crate::common;

#[test]
fn test_fileExists_withDirectory_shouldReturnFalse() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "doc.txt", "Hello")?;

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(!FileManager::file_exists(temp_dir.path().join("missing.txt")));
    Ok(())
}

#[test]
fn test_ensureDir_shouldCreateNestedDirectories() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;
    FileManager::ensure_dir(&nested)?;
    assert!(nested.is_dir());
    Ok(())
}

#[test]
fn test_readToString_withMissingFile_shouldFail() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    assert!(FileManager::read_to_string(temp_dir.path().join("none.txt")).is_err());
    Ok(())
}

#[test]
fn test_writeAtomic_shouldPreserveUnicode() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "doc.txt", "old")?;

    FileManager::write_atomic(&file, "Привет 世界 नमस्ते")?;
    assert_eq!(FileManager::read_to_string(&file)?, "Привет 世界 नमस्ते");
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 1);
    Ok(())
}

#[test]
fn test_documentKeyPath_shouldResolveRelativeSegments() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "doc.txt", "")?;
    let roundabout = temp_dir.path().join("sub").join("..").join("doc.txt");
    fs::create_dir(temp_dir.path().join("sub"))?;

    assert_eq!(
        FileManager::document_key_path(&roundabout),
        FileManager::document_key_path(&file)
    );
    Ok(())
}
