/*!
 * Forward translation: original language -> target language.
 *
 * The pass clears the document's store, then walks the token stream left to
 * right. Every translated word occurrence gets a term record named by its
 * occurrence identifier; compounds additionally get a compound record that
 * links their parts. Case variants learned from compound parts are appended
 * to the dictionary, which is saved once at the end of the pass.
 */

use log::{debug, info};

use crate::dictionary::Dictionary;
use crate::errors::{TranslationError, TranslationResult};
use crate::store::{CompoundRecord, TermRecord, TermStore};
use crate::text::{match_case, tokenize};

use super::identifier::{OccurrenceCounter, build_identifier};
use super::options::TranslationOptions;
use super::progress::{NoProgress, ProgressReporter};

/// Counters collected during one forward pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ForwardStats {
    /// Words replaced through a full dictionary hit
    pub translated: usize,
    /// Words registered as compounds
    pub compounds: usize,
    /// Words kept as they are
    pub identity: usize,
    /// Case variants appended to the dictionary
    pub variants_added: usize,
}

/// Translate `text` into the dictionary's language, rebuilding `store`
pub fn translate_to_target(
    text: &str,
    dictionary: &mut Dictionary,
    store: &mut TermStore,
    options: &TranslationOptions,
) -> TranslationResult<String> {
    translate_to_target_with_progress(text, dictionary, store, options, &NoProgress)
}

/// Same as `translate_to_target`, reporting progress per token
pub fn translate_to_target_with_progress(
    text: &str,
    dictionary: &mut Dictionary,
    store: &mut TermStore,
    options: &TranslationOptions,
    reporter: &dyn ProgressReporter,
) -> TranslationResult<String> {
    if dictionary.language().trim().is_empty() {
        return Err(TranslationError::MissingLanguage);
    }

    store.clear()?;

    let tokens = tokenize(text);
    let total = tokens.len();
    let mut pass = ForwardPass {
        dictionary,
        store,
        options,
        output: String::with_capacity(text.len()),
        output_chars: 0,
        counter: OccurrenceCounter::new(),
        stats: ForwardStats::default(),
    };

    for (index, token) in tokens.iter().enumerate() {
        if token.is_word() && !options.keywords.contains(token.text) {
            pass.translate_word(token.text)?;
        } else {
            pass.emit(token.text);
        }
        reporter.report(index + 1, total);
    }

    if pass.dictionary.save_if_dirty()? {
        debug!("Dictionary saved after {} new variants", pass.stats.variants_added);
    }

    let stats = pass.stats;
    info!(
        "Forward pass: {} translated, {} compounds, {} unchanged",
        stats.translated, stats.compounds, stats.identity
    );
    Ok(pass.output)
}

struct ForwardPass<'a> {
    dictionary: &'a mut Dictionary,
    store: &'a mut TermStore,
    options: &'a TranslationOptions,
    output: String,
    /// Length of `output` in characters
    output_chars: usize,
    counter: OccurrenceCounter,
    stats: ForwardStats,
}

impl ForwardPass<'_> {
    fn emit(&mut self, text: &str) {
        self.output.push_str(text);
        self.output_chars += text.chars().count();
    }

    fn translate_word(&mut self, word: &str) -> TranslationResult<()> {
        if let Some(hit) = self.dictionary.lookup_original(word) {
            let target = match_case(word, &hit.target);
            if self.options.keywords.contains(&target) {
                debug!("Keeping '{}': '{}' is a protected keyword", word, target);
            } else if !is_single_word(&target) {
                debug!("Keeping '{}': '{}' is not a single word", word, target);
            } else {
                let original = hit.exact.unwrap_or_else(|| word.to_string());
                self.record_term(&original, &target, Vec::new())?;
                self.emit(&target);
                self.stats.translated += 1;
                return Ok(());
            }
        } else {
            let dictionary = &*self.dictionary;
            let lookup = |term: &str| dictionary.contains_original(term);
            let parts = self.options.segmenter.segment(word, &lookup);
            if parts.len() > 1 {
                return self.translate_compound(word, &parts);
            }
        }

        self.record_term(word, word, Vec::new())?;
        self.emit(word);
        self.stats.identity += 1;
        Ok(())
    }

    fn translate_compound(&mut self, word: &str, parts: &[&str]) -> TranslationResult<()> {
        let compound_id = self.store.next_compound_id()?;
        let position = self.output_chars;
        let mut part_ids = Vec::with_capacity(parts.len());
        let mut translated = String::with_capacity(word.len());

        for part in parts {
            let target = self.translate_part(part);
            let identifier = self.record_term(part, &target, vec![compound_id.clone()])?;
            self.emit(&target);
            translated.push_str(&target);
            part_ids.push(identifier);
        }

        debug!("Compound {} '{}' -> '{}'", compound_id, word, translated);
        self.store.insert_compound(CompoundRecord {
            compound_id,
            original_text: word.to_string(),
            translated_text: translated,
            part_ids,
            position,
        })?;
        self.stats.compounds += 1;
        Ok(())
    }

    /// Target form of one compound part; misses stay as they are
    fn translate_part(&mut self, part: &str) -> String {
        let Some(hit) = self.dictionary.lookup_original(part) else {
            return part.to_string();
        };

        let target = match_case(part, &hit.target);
        if !is_single_word(&target) {
            debug!("Keeping part '{}': '{}' is not a single word", part, target);
            return part.to_string();
        }
        if self.options.keywords.contains(&target) {
            return part.to_string();
        }
        if hit.exact.is_none() && self.dictionary.add_variant(&hit.target, part) {
            self.stats.variants_added += 1;
        }
        target
    }

    /// Store a term at the current output position and return its identifier
    fn record_term(
        &mut self,
        original: &str,
        target: &str,
        compound_ids: Vec<String>,
    ) -> TranslationResult<String> {
        let annotated = self.options.policy.is_annotation_position(&self.output);
        let occurrence = self.counter.next(target);
        let identifier = build_identifier(target, occurrence, annotated);

        let mut record = TermRecord::new(identifier.clone(), original, target, self.output_chars);
        record.compound_ids = compound_ids;
        self.store.insert_term(record)?;
        Ok(identifier)
    }
}

/// Whether `target` tokenizes back into exactly one word
fn is_single_word(target: &str) -> bool {
    matches!(tokenize(target).as_slice(), [token] if token.is_word())
}
