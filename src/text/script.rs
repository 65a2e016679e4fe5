use serde::{Deserialize, Serialize};

/// Writing system of a piece of text.
///
/// The classifier only distinguishes the scripts the segmenter has a strategy
/// for. Everything that is not one of the three non-latin scripts is latin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Cyrillic,
    Devanagari,
    Logographic,
}

impl Script {
    /// Whether letter case carries meaning for identifiers in this script
    pub fn is_cased(self) -> bool {
        matches!(self, Script::Latin)
    }

    /// Scripts written without spaces between words
    pub fn is_unspaced(self) -> bool {
        matches!(self, Script::Logographic | Script::Devanagari)
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Script::Latin => "latin",
            Script::Cyrillic => "cyrillic",
            Script::Devanagari => "devanagari",
            Script::Logographic => "logographic",
        };
        write!(f, "{}", name)
    }
}

fn is_logographic(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}')
}

fn is_devanagari(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}')
}

fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}' | '\u{0500}'..='\u{052F}') && c.is_alphabetic()
}

/// Classify a single character
pub fn classify_char(c: char) -> Script {
    if is_logographic(c) {
        Script::Logographic
    } else if is_devanagari(c) {
        Script::Devanagari
    } else if is_cyrillic(c) {
        Script::Cyrillic
    } else {
        Script::Latin
    }
}

/// Classify a string.
///
/// Tests run in fixed priority order so that mixed strings resolve
/// deterministically: any CJK ideograph makes the text logographic, then
/// devanagari, then cyrillic, and latin is the fallback.
pub fn classify(text: &str) -> Script {
    if text.chars().any(is_logographic) {
        Script::Logographic
    } else if text.chars().any(is_devanagari) {
        Script::Devanagari
    } else if text.chars().any(is_cyrillic) {
        Script::Cyrillic
    } else {
        Script::Latin
    }
}
