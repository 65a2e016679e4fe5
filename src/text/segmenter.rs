use std::collections::HashSet;

use super::script::{Script, classify, classify_char};

/// Membership test used by the greedy segmenter.
///
/// Forward translation segments original-language tokens, so it looks terms
/// up on the synonym side of the dictionary; compound detection on edited
/// target text looks them up on the key side.
pub trait TermLookup {
    fn contains_term(&self, term: &str) -> bool;
}

impl<F> TermLookup for F
where
    F: Fn(&str) -> bool,
{
    fn contains_term(&self, term: &str) -> bool {
        self(term)
    }
}

impl TermLookup for HashSet<String> {
    fn contains_term(&self, term: &str) -> bool {
        self.contains(term)
    }
}

/// Default cap on candidate length for logographic dictionary matches
pub const DEFAULT_LOGOGRAPHIC_MAX: usize = 4;

/// Splits a single word token into its sub-terms.
#[derive(Debug, Clone)]
pub struct CompoundSegmenter {
    logographic_max: usize,
}

impl Default for CompoundSegmenter {
    fn default() -> Self {
        Self::new(DEFAULT_LOGOGRAPHIC_MAX)
    }
}

impl CompoundSegmenter {
    pub fn new(logographic_max: usize) -> Self {
        Self {
            logographic_max: logographic_max.max(1),
        }
    }

    /// Segment `token` into contiguous pieces that concatenate back to it.
    ///
    /// A single-element result means the token is not a compound.
    pub fn segment<'a>(&self, token: &'a str, lookup: &dyn TermLookup) -> Vec<&'a str> {
        if token.is_empty() {
            return Vec::new();
        }

        match classify(token) {
            Script::Latin => split_camel_case(token),
            _ => self.segment_mixed(token, lookup),
        }
    }

    /// Convenience for callers that only need the compound decision
    pub fn is_compound(&self, token: &str, lookup: &dyn TermLookup) -> bool {
        self.segment(token, lookup).len() > 1
    }

    fn segment_mixed<'a>(&self, token: &'a str, lookup: &dyn TermLookup) -> Vec<&'a str> {
        let mut parts = Vec::new();
        let mut run_start = 0usize;
        let mut run_script: Option<Script> = None;

        for (idx, c) in token.char_indices() {
            let script = classify_char(c);
            match run_script {
                Some(current) if current != script => {
                    self.segment_run(&token[run_start..idx], current, lookup, &mut parts);
                    run_start = idx;
                    run_script = Some(script);
                }
                None => run_script = Some(script),
                _ => {}
            }
        }

        if let Some(script) = run_script {
            self.segment_run(&token[run_start..], script, lookup, &mut parts);
        }

        parts
    }

    fn segment_run<'a>(
        &self,
        run: &'a str,
        script: Script,
        lookup: &dyn TermLookup,
        parts: &mut Vec<&'a str>,
    ) {
        match script {
            Script::Latin => parts.extend(split_camel_case(run)),
            Script::Logographic => greedy_longest_match(run, Some(self.logographic_max), lookup, parts),
            Script::Devanagari | Script::Cyrillic => greedy_longest_match(run, None, lookup, parts),
        }
    }
}

/// Split before every uppercase letter that is not the first character.
fn split_camel_case(token: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0usize;

    for (idx, c) in token.char_indices().skip(1) {
        if c.is_uppercase() {
            parts.push(&token[start..idx]);
            start = idx;
        }
    }
    parts.push(&token[start..]);

    parts
}

/// Maximal munch against the lookup, falling back to one character on a miss.
fn greedy_longest_match<'a>(
    run: &'a str,
    max_chars: Option<usize>,
    lookup: &dyn TermLookup,
    parts: &mut Vec<&'a str>,
) {
    // Byte offsets of every char boundary, including the end of the run.
    let bounds: Vec<usize> = run
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(run.len()))
        .collect();
    let char_count = bounds.len() - 1;

    let mut pos = 0usize;
    while pos < char_count {
        let remaining = char_count - pos;
        let longest = max_chars.map_or(remaining, |cap| cap.min(remaining));

        let matched = (2..=longest)
            .rev()
            .find(|&len| lookup.contains_term(&run[bounds[pos]..bounds[pos + len]]));

        let len = matched.unwrap_or(1);
        parts.push(&run[bounds[pos]..bounds[pos + len]]);
        pos += len;
    }
}
