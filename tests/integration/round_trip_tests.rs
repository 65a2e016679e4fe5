/*!
 * Forward and backward passes over unedited documents
 */

use termshift::dictionary::Dictionary;
use termshift::store::TermStore;
use termshift::translation::{
    ProtectedKeywords, TranslationOptions, translate_to_original, translate_to_target,
};

use crate::common;

/// Translate forward and straight back, returning both texts
fn round_trip(text: &str, dictionary: &mut Dictionary, options: &TranslationOptions) -> (String, String, TermStore) {
    let mut store = TermStore::in_memory();
    let target = translate_to_target(text, dictionary, &mut store, options).unwrap();
    let back = translate_to_original(&target, dictionary, &store, options).unwrap();
    (target, back, store)
}

#[test]
fn test_roundTrip_withHelloWorld_shouldRestoreText() {
    common::init_logging();
    let mut dictionary = common::german_dictionary();
    let (target, back, _) = round_trip("Hello World", &mut dictionary, &TranslationOptions::default());

    assert_eq!(target, "Hallo Welt");
    assert_eq!(back, "Hello World");
}

#[test]
fn test_roundTrip_withPunctuationAndNewlines_shouldKeepSeparators() {
    let mut dictionary = common::german_dictionary();
    let text = "Hello,\tWorld!\n\n  (hello world) -- number?\n";
    let (target, back, _) = round_trip(text, &mut dictionary, &TranslationOptions::default());

    assert_eq!(target, "Hallo,\tWelt!\n\n  (hallo welt) -- zahl?\n");
    assert_eq!(back, text);
}

#[test]
fn test_roundTrip_withProtectedKeyword_shouldLeaveKeywordAlone() {
    let mut dictionary = common::german_dictionary();
    let (target, back, store) =
        round_trip("return value", &mut dictionary, &TranslationOptions::default());

    assert_eq!(target, "return wert");
    assert_eq!(back, "return value");
    assert!(store.terms().all(|t| t.translated_text != "return"));
}

#[test]
fn test_roundTrip_withCustomKeywords_shouldTranslateDefaultKeywords() {
    let mut dictionary = Dictionary::from_entries("de", vec![("Rückgabe", vec!["return"])]);
    let options = TranslationOptions::default().with_keywords(ProtectedKeywords::new(Vec::<String>::new()));
    let (target, back, _) = round_trip("return", &mut dictionary, &options);

    assert_eq!(target, "rückgabe");
    assert_eq!(back, "return");
}

#[test]
fn test_roundTrip_withTypeAnnotation_shouldUseTypeIdentifier() {
    let mut dictionary = common::german_dictionary();
    let text = "let count: number = value";
    let (target, back, store) = round_trip(text, &mut dictionary, &TranslationOptions::default());

    assert_eq!(target, "let count: zahl = wert");
    assert_eq!(back, text);
    assert!(store.term("zahl_1_type").is_some());
    assert!(store.term("wert_1").is_some());
}

#[test]
fn test_roundTrip_withRepeatedMixedCase_shouldRestoreEachOccurrence() {
    let mut dictionary = common::german_dictionary();
    let text = "world World WORLD world";
    let (target, back, store) = round_trip(text, &mut dictionary, &TranslationOptions::default());

    assert_eq!(target, "welt Welt WELT welt");
    assert_eq!(back, text);
    assert_eq!(store.term("welt_3").unwrap().original_text, "WORLD");
}

#[test]
fn test_roundTrip_withCompounds_shouldRestoreCompoundOriginals() {
    let mut dictionary = common::german_dictionary();
    let text = "camelCase and CamelCase, case camelCase";
    let (target, back, store) = round_trip(text, &mut dictionary, &TranslationOptions::default());

    assert_eq!(target, "kamelFall and KamelFall, fall kamelFall");
    assert_eq!(back, text);
    assert_eq!(store.compound_count(), 3);
    assert_eq!(store.compounds_by_translation("kamelFall").len(), 2);
}

#[test]
fn test_roundTrip_withCyrillicTarget_shouldRestoreText() {
    let mut dictionary =
        Dictionary::from_entries("ru", vec![("Привет", vec!["Hello"]), ("Мир", vec!["World"])]);
    let (target, back, store) =
        round_trip("Hello World", &mut dictionary, &TranslationOptions::default());

    assert_eq!(target, "Привет Мир");
    assert_eq!(back, "Hello World");
    assert_eq!(store.term("Мир_1").unwrap().position, 7);
}

#[test]
fn test_roundTrip_withLogographicTarget_shouldRestoreText() {
    let mut dictionary =
        Dictionary::from_entries("zh", vec![("你好", vec!["hello"]), ("世界", vec!["world"])]);
    let (target, back, _) =
        round_trip("hello world", &mut dictionary, &TranslationOptions::default());

    assert_eq!(target, "你好 世界");
    assert_eq!(back, "hello world");
}

#[test]
fn test_roundTrip_withUnknownWords_shouldKeepThemVerbatim() {
    let mut dictionary = common::german_dictionary();
    let text = "Bonjour tout le monde";
    let (target, back, _) = round_trip(text, &mut dictionary, &TranslationOptions::default());

    assert_eq!(target, text);
    assert_eq!(back, text);
}

#[test]
fn test_roundTrip_withEmptyText_shouldProduceEmptyText() {
    let mut dictionary = common::german_dictionary();
    let (target, back, store) = round_trip("", &mut dictionary, &TranslationOptions::default());

    assert!(target.is_empty());
    assert!(back.is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_roundTrip_withMultiTokenDictionaryTargets_shouldRestoreText() {
    let mut dictionary = Dictionary::from_entries(
        "de",
        vec![("Guten Tag", vec!["hello"]), ("E-Mail", vec!["email"]), ("Welt", vec!["world"])],
    );
    let text = "hello world, email me";
    let (target, back, _) = round_trip(text, &mut dictionary, &TranslationOptions::default());

    assert_eq!(target, "hello welt, email me");
    assert_eq!(back, text);
}

#[test]
fn test_roundTrip_withWordTranslatedToCompoundText_shouldRestoreBoth() {
    let mut dictionary = Dictionary::from_entries("de", vec![("fooBar", vec!["baz"])]);
    let text = "fooBar baz fooBar baz";
    let (target, back, store) = round_trip(text, &mut dictionary, &TranslationOptions::default());

    assert_eq!(target, "fooBar fooBar fooBar fooBar");
    assert_eq!(back, text);
    assert_eq!(store.compound_count(), 2);
}
