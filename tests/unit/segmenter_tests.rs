/*!
 * Tests for compound segmentation
 */

use std::collections::HashSet;
use termshift::text::CompoundSegmenter;

fn terms(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_segment_withCamelCaseWord_shouldReturnThreeParts() {
    let segmenter = CompoundSegmenter::default();
    let parts = segmenter.segment("camelCaseWord", &terms(&[]));
    assert_eq!(parts, vec!["camel", "Case", "Word"]);
}

#[test]
fn test_segment_withLowercase_shouldReturnOnePart() {
    let segmenter = CompoundSegmenter::default();
    assert_eq!(segmenter.segment("lowercase", &terms(&[])), vec!["lowercase"]);
}

#[test]
fn test_segment_shouldAlwaysConcatenateBack() {
    let segmenter = CompoundSegmenter::default();
    let lookup = terms(&["世界", "мир", "दुनिया"]);
    for token in ["XMLHttpRequest", "你好世界", "приветмир", "नमस्तेदुनिया", "abcМир世界"] {
        let parts = segmenter.segment(token, &lookup);
        assert_eq!(parts.concat(), token);
        assert!(parts.iter().all(|p| !p.is_empty()));
    }
}

#[test]
fn test_segment_withLogographicCap_shouldLimitCandidates() {
    let lookup = terms(&["一二三"]);
    assert_eq!(CompoundSegmenter::new(3).segment("一二三", &lookup), vec!["一二三"]);
    assert_eq!(CompoundSegmenter::new(2).segment("一二三", &lookup), vec!["一", "二", "三"]);
}

#[test]
fn test_segment_withMixedScripts_shouldSplitAtScriptBoundaries() {
    let segmenter = CompoundSegmenter::default();
    let parts = segmenter.segment("dataМир", &terms(&["Мир"]));
    assert_eq!(parts, vec!["data", "Мир"]);
}

#[test]
fn test_isCompound_withClosureLookup_shouldUseIt() {
    let segmenter = CompoundSegmenter::default();
    let lookup = |term: &str| term == "世界";
    assert!(segmenter.is_compound("你好世界", &lookup));
    assert!(!segmenter.is_compound("世", &lookup));
}
