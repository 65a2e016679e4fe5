/*!
 * Document sessions driven through the controller, persisted in SQLite
 */

use std::fs;
use termshift::app_controller::{Controller, DocumentCommand};
use termshift::dictionary::Dictionary;
use termshift::session::{DisplayMode, DocumentSession};

use crate::common;

#[test]
fn test_controller_toggleTwice_shouldRestoreDocument() -> anyhow::Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path())?;
    let document = common::create_test_file(temp_dir.path(), "doc.txt", "Hello World\n")?;

    let controller = Controller::with_config(config.clone())?;
    let outcome = controller.run_with_progress(&document, DocumentCommand::Toggle, false)?;
    assert!(outcome.changed);
    assert_eq!(fs::read_to_string(&document)?, "Hallo Welt\n");

    let status = controller.status(&document)?;
    assert_eq!(status.mode, DisplayMode::Target);
    assert_eq!(status.term_count, 2);

    // A fresh controller stands in for the next process run
    let controller = Controller::with_config(config)?;
    let outcome = controller.run_with_progress(&document, DocumentCommand::Toggle, false)?;
    assert_eq!(outcome.mode, DisplayMode::Original);
    assert_eq!(fs::read_to_string(&document)?, "Hello World\n");
    assert_eq!(controller.status(&document)?.term_count, 0);
    Ok(())
}

#[test]
fn test_controller_withEditsBetweenRuns_shouldReconcile() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path())?;
    let document = common::create_test_file(temp_dir.path(), "doc.txt", "Hello World")?;

    Controller::with_config(config.clone())?.run_with_progress(&document, DocumentCommand::ToTarget, false)?;
    fs::write(&document, "Hallo neue Welt")?;

    let outcome = Controller::with_config(config)?.run_with_progress(
        &document,
        DocumentCommand::ToOriginal,
        false,
    )?;
    assert!(outcome.reconciliation.is_some());
    assert_eq!(fs::read_to_string(&document)?, "Hello neue World");
    Ok(())
}

#[test]
fn test_controller_toOriginalInOriginalMode_shouldLeaveFileUntouched() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path())?;
    let document = common::create_test_file(temp_dir.path(), "doc.txt", "Hallo Welt")?;

    let outcome = Controller::with_config(config)?.run_with_progress(
        &document,
        DocumentCommand::ToOriginal,
        false,
    )?;
    assert!(!outcome.changed);
    assert_eq!(outcome.mode, DisplayMode::Original);
    assert_eq!(fs::read_to_string(&document)?, "Hallo Welt");
    Ok(())
}

#[test]
fn test_controller_withMissingDocument_shouldFail() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::test_config(temp_dir.path())?)?;

    let result = controller.run(&temp_dir.path().join("missing.txt"), DocumentCommand::Toggle);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_controller_withMissingDictionary_shouldFail() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::test_config(temp_dir.path())?;
    config.language = "ru".to_string();
    let document = common::create_test_file(temp_dir.path(), "doc.txt", "Hello")?;

    let controller = Controller::with_config(config)?;
    assert!(controller.run_with_progress(&document, DocumentCommand::ToTarget, false).is_err());
    assert_eq!(fs::read_to_string(&document)?, "Hello");
    Ok(())
}

#[test]
fn test_controller_withInvalidLanguage_shouldRejectConfig() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::test_config(temp_dir.path())?;
    config.language = "xx".to_string();

    assert!(Controller::with_config(config).is_err());
    Ok(())
}

#[test]
fn test_documents_shouldKeepSeparateState() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path())?;
    let first = common::create_test_file(temp_dir.path(), "first.txt", "Hello")?;
    let second = common::create_test_file(temp_dir.path(), "second.txt", "World")?;

    let controller = Controller::with_config(config)?;
    controller.run_with_progress(&first, DocumentCommand::ToTarget, false)?;

    let first_status = controller.status(&first)?;
    let second_status = controller.status(&second)?;
    assert_ne!(first_status.namespace, second_status.namespace);
    assert_eq!(first_status.mode, DisplayMode::Target);
    assert_eq!(second_status.mode, DisplayMode::Original);
    assert_eq!(second_status.term_count, 0);
    Ok(())
}

#[test]
fn test_forwardPass_withCompoundPartVariant_shouldSaveDictionary() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path())?;
    let document = common::create_test_file(temp_dir.path(), "doc.txt", "camelCase")?;

    Controller::with_config(config)?.run_with_progress(&document, DocumentCommand::ToTarget, false)?;
    assert_eq!(fs::read_to_string(&document)?, "kamelFall");

    let dictionary = Dictionary::load(temp_dir.path(), "de")?;
    assert_eq!(dictionary.synonyms("Fall").unwrap(), ["case", "Case"]);
    Ok(())
}

#[test]
fn test_session_open_shouldRestoreModeFromDatabase() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(temp_dir.path())?;
    let document = common::create_test_file(temp_dir.path(), "doc.txt", "Hello World")?;

    {
        let mut session = DocumentSession::open(&config, &document)?;
        let outcome = session.to_target("Hello World")?;
        fs::write(&document, &outcome.text)?;
    }

    let mut session = DocumentSession::open(&config, &document)?;
    assert_eq!(session.mode(), DisplayMode::Target);
    assert_eq!(session.info().compound_count, 0);
    assert_eq!(session.toggle("Hallo Welt")?.text, "Hello World");
    Ok(())
}
