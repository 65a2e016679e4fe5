/*!
 * Protected keywords.
 *
 * Reserved words that are never translated in either direction and never
 * counted as term occurrences. Matching is exact.
 */

use std::collections::HashSet;

/// Keywords protected when no list is configured
pub const DEFAULT_PROTECTED_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "loop", "match", "return", "break", "continue", "fn", "let",
    "const", "static", "struct", "enum", "impl", "trait", "pub", "use", "mod", "true", "false",
];

#[derive(Debug, Clone, Default)]
pub struct ProtectedKeywords {
    words: HashSet<String>,
}

impl ProtectedKeywords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn defaults() -> Self {
        Self::new(DEFAULT_PROTECTED_KEYWORDS.iter().copied())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
