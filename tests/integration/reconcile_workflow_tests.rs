/*!
 * Edits made in target mode, reconciled before translating back
 */

use termshift::dictionary::Dictionary;
use termshift::session::DocumentSession;
use termshift::store::{MemoryStore, TermStore};
use termshift::translation::{
    ReconcileOutcome, ReconcileSummary, Reconciler, TranslationOptions, detect_compounds,
    translate_to_original, translate_to_target,
};

use crate::common;

/// Forward pass over `original`, returning the populated store and the target text
fn forward(original: &str, dictionary: &mut Dictionary) -> (TermStore, String) {
    let mut store = TermStore::in_memory();
    let target =
        translate_to_target(original, dictionary, &mut store, &TranslationOptions::default()).unwrap();
    (store, target)
}

/// Reconcile, detect and translate back, the way a session does
fn edit_and_restore(original: &str, edited: &str) -> (String, ReconcileSummary, TermStore) {
    let options = TranslationOptions::default();
    let mut dictionary = common::german_dictionary();
    let (mut store, target) = forward(original, &mut dictionary);

    let outcome = Reconciler::new()
        .rebuild_map(&mut store, &target, original, edited)
        .unwrap();
    let ReconcileOutcome::Rebuilt(summary) = outcome else {
        panic!("reconciliation was skipped");
    };
    detect_compounds(edited, &dictionary, &mut store, &options).unwrap();
    let restored = translate_to_original(edited, &dictionary, &store, &options).unwrap();
    (restored, summary, store)
}

#[test]
fn test_insertedWord_shouldShiftFollowingTerms() {
    common::init_logging();
    let (restored, summary, store) = edit_and_restore("Hello World", "Hallo neue Welt");

    assert_eq!(restored, "Hello neue World");
    assert_eq!(summary.kept_terms, 2);
    assert_eq!(summary.relocated, 1);
    assert_eq!(store.term("welt_1").unwrap().position, 11);
}

#[test]
fn test_swappedWords_shouldFollowOccurrenceOrder() {
    let (restored, _, store) = edit_and_restore("Hello World", "Welt Hallo");

    assert_eq!(restored, "World Hello");
    assert_eq!(store.term("welt_1").unwrap().position, 0);
    assert_eq!(store.term("hallo_1").unwrap().position, 5);
}

#[test]
fn test_typedDictionaryWord_shouldResolveThroughDictionary() {
    let (restored, _, _) = edit_and_restore("Hello World", "Hallo Welt Zahl");
    assert_eq!(restored, "Hello World Number");
}

#[test]
fn test_typedCompound_shouldBeDetectedAndRestored() {
    let (restored, _, store) = edit_and_restore("Hello World", "Hallo neueWelt");

    assert_eq!(restored, "Hello neueWorld");
    let compounds = store.compounds_by_translation("neueWelt");
    assert_eq!(compounds.len(), 1);
    assert_eq!(compounds[0].original_text, "neueWorld");
    assert_eq!(compounds[0].part_ids, vec!["neue_1", "welt_1"]);
    assert_eq!(store.term("neue_1").unwrap().position, 6);
}

#[test]
fn test_removedCompound_shouldPruneCompoundAndParts() {
    let (restored, summary, store) = edit_and_restore("camelCase", "Fall");

    assert_eq!(restored, "Case");
    assert_eq!(summary.pruned_compounds, 1);
    assert_eq!(summary.kept_terms, 0);
    assert!(store.is_empty());
}

#[test]
fn test_movedCompound_shouldCarryItsPartsAlong() {
    let (restored, summary, store) = edit_and_restore("camelCase World", "Welt kamelFall");

    assert_eq!(restored, "World camelCase");
    assert_eq!(summary.kept_compounds, 1);
    assert_eq!(store.compound("compound_1").unwrap().position, 5);
    assert_eq!(store.term("kamel_1").unwrap().position, 5);
    assert_eq!(store.term("fall_1").unwrap().position, 10);
    assert_eq!(store.term("welt_1").unwrap().position, 0);
}

#[test]
fn test_rebuildMap_twice_shouldBeIdempotent() {
    let mut dictionary = common::german_dictionary();
    let (mut store, target) = forward("camelCase World value", &mut dictionary);
    let edited = "Wert und Welt kamelFall";
    let reconciler = Reconciler::new();

    reconciler.rebuild_map(&mut store, &target, "", edited).unwrap();
    let mut first: Vec<_> = store.terms().cloned().collect();
    reconciler.rebuild_map(&mut store, &target, "", edited).unwrap();
    let mut second: Vec<_> = store.terms().cloned().collect();

    first.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    second.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    assert_eq!(first, second);
    assert!(!reconciler.is_running());
}

#[test]
fn test_session_withEditedCompoundPart_shouldRestoreEditedText() {
    let backend = MemoryStore::new();
    let store = TermStore::open(Box::new(backend.clone()), "doc:").unwrap();
    let mut session =
        DocumentSession::new(common::german_dictionary(), store, TranslationOptions::default()).unwrap();

    let forward = session.to_target("Hello World").unwrap();
    assert_eq!(forward.text, "Hallo Welt");

    let back = session.to_original("Hallo Welt Welt").unwrap();
    assert_eq!(back.text, "Hello World World");
    assert!(matches!(back.reconciliation, Some(ReconcileOutcome::Rebuilt(_))));
    assert!(session.store().is_empty());
}
