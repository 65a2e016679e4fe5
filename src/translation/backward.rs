/*!
 * Backward translation: target language -> original language.
 *
 * Word tokens are resolved in a fixed order, earlier matches winning:
 *
 * 1. a stored compound whose translated form equals the token
 * 2. the stored term under the token's recomputed identifier
 * 3. a dictionary key equal to the token
 * 4. the token itself
 *
 * Occurrences are counted exactly as the forward pass counted them, so an
 * unedited document maps back to the identifiers it was produced with.
 */

use log::{debug, info};
use std::collections::{HashMap, HashSet};

use crate::dictionary::Dictionary;
use crate::errors::{TranslationError, TranslationResult};
use crate::store::{CompoundRecord, TermStore};
use crate::text::{Script, Token, classify, match_case, tokenize};

use super::identifier::{OccurrenceCounter, candidate_identifiers};
use super::options::TranslationOptions;
use super::progress::{NoProgress, ProgressReporter};

/// How a word token was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Resolution {
    Compound,
    Identifier,
    Dictionary,
    Identity,
}

/// Translate `text` back into the original language
pub fn translate_to_original(
    text: &str,
    dictionary: &Dictionary,
    store: &TermStore,
    options: &TranslationOptions,
) -> TranslationResult<String> {
    translate_to_original_with_progress(text, dictionary, store, options, &NoProgress)
}

/// Same as `translate_to_original`, reporting progress per token
pub fn translate_to_original_with_progress(
    text: &str,
    dictionary: &Dictionary,
    store: &TermStore,
    options: &TranslationOptions,
    reporter: &dyn ProgressReporter,
) -> TranslationResult<String> {
    if dictionary.language().trim().is_empty() {
        return Err(TranslationError::MissingLanguage);
    }

    let tokens = tokenize(text);
    let total = tokens.len();
    let mut output = String::with_capacity(text.len());
    let mut counter = OccurrenceCounter::new();
    let mut picker = CompoundPicker::new(&tokens);
    let mut resolved: HashMap<Resolution, usize> = HashMap::new();

    for (index, token) in tokens.iter().enumerate() {
        if !token.is_word() || options.keywords.contains(token.text) {
            output.push_str(token.text);
            reporter.report(index + 1, total);
            continue;
        }

        let annotated = options.policy.is_annotation_position(&text[..token.start]);
        let has_identifier = has_stored_identifier(store, token.text, counter.peek(token.text), annotated);
        let (original, resolution) = match picker.pick(store, token, has_identifier) {
            Some(compound) => {
                count_compound_parts(&mut counter, store, compound);
                (compound.original_text.clone(), Resolution::Compound)
            }
            None => {
                let occurrence = counter.next(token.text);
                resolve_word(token.text, occurrence, annotated, dictionary, store)
            }
        };

        debug!("'{}' -> '{}' ({:?})", token.text, original, resolution);
        *resolved.entry(resolution).or_insert(0) += 1;
        output.push_str(&original);
        reporter.report(index + 1, total);
    }

    let count = |r: Resolution| resolved.get(&r).copied().unwrap_or(0);
    info!(
        "Backward pass: {} compounds, {} stored terms, {} dictionary, {} unchanged",
        count(Resolution::Compound),
        count(Resolution::Identifier),
        count(Resolution::Dictionary),
        count(Resolution::Identity)
    );
    Ok(output)
}

/// Assigns stored compounds to the word tokens showing their translated form.
///
/// A compound recorded at a token's own position is taken first. Otherwise
/// the token takes the first unused compound that is not anchored at another
/// sighting, unless it has a stored identifier of its own. A compound is
/// never handed out twice.
pub(crate) struct CompoundPicker<'t> {
    /// Word tokens by text and character offset
    sightings: HashSet<(&'t str, usize)>,
    used: HashSet<String>,
}

impl<'t> CompoundPicker<'t> {
    pub(crate) fn new(tokens: &[Token<'t>]) -> Self {
        Self {
            sightings: tokens
                .iter()
                .filter(|t| t.is_word())
                .map(|t| (t.text, t.char_start))
                .collect(),
            used: HashSet::new(),
        }
    }

    pub(crate) fn pick<'s>(
        &mut self,
        store: &'s TermStore,
        token: &Token<'t>,
        has_identifier: bool,
    ) -> Option<&'s CompoundRecord> {
        let candidates = store.compounds_by_translation(token.text);
        let anchored = candidates
            .iter()
            .copied()
            .find(|c| c.position == token.char_start && !self.used.contains(&c.compound_id));

        let compound = match anchored {
            Some(compound) => compound,
            None if has_identifier => return None,
            None => candidates.iter().copied().find(|c| {
                !self.used.contains(&c.compound_id) && !self.sightings.contains(&(token.text, c.position))
            })?,
        };
        self.used.insert(compound.compound_id.clone());
        Some(compound)
    }
}

/// Whether `word` at `occurrence` resolves to a stored term
pub(crate) fn has_stored_identifier(store: &TermStore, word: &str, occurrence: usize, annotated: bool) -> bool {
    candidate_identifiers(word, occurrence, annotated)
        .iter()
        .any(|id| store.term(id).is_some())
}

/// Count a compound occurrence as occurrences of its parts
pub(crate) fn count_compound_parts(counter: &mut OccurrenceCounter, store: &TermStore, compound: &CompoundRecord) {
    for part_id in &compound.part_ids {
        if let Some(part) = store.term(part_id) {
            counter.next(&part.translated_text);
        }
    }
}

fn resolve_word(
    word: &str,
    occurrence: usize,
    annotated: bool,
    dictionary: &Dictionary,
    store: &TermStore,
) -> (String, Resolution) {
    for identifier in candidate_identifiers(word, occurrence, annotated) {
        if let Some(term) = store.term(&identifier) {
            return (match_case(word, &term.original_text), Resolution::Identifier);
        }
    }

    let ignore_case = classify(word) == Script::Latin;
    if let Some(synonym) = dictionary.lookup_target(word, ignore_case) {
        return (match_case(word, synonym), Resolution::Dictionary);
    }

    (word.to_string(), Resolution::Identity)
}
