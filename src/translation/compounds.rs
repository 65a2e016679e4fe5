/*!
 * Compound detection on edited target text.
 *
 * Words typed while a document is shown in the target language have no
 * stored identity. When such a word splits into pieces of which at least one
 * is a dictionary key (e.g. a user types `neueWelt`), it is registered as a
 * compound so that the backward pass can restore it.
 *
 * Occurrences are counted the way the backward pass counts them, so the new
 * part identifiers line up with what that pass recomputes.
 */

use log::{debug, info};

use crate::dictionary::Dictionary;
use crate::errors::TranslationResult;
use crate::store::{CompoundRecord, TermRecord, TermStore};
use crate::text::{Script, classify, match_case, tokenize};

use super::backward::{CompoundPicker, count_compound_parts, has_stored_identifier};
use super::identifier::{OccurrenceCounter, build_identifier};
use super::options::TranslationOptions;

/// Register compounds for unknown target-language words in `text`.
///
/// Returns the number of compounds created.
pub fn detect_compounds(
    text: &str,
    dictionary: &Dictionary,
    store: &mut TermStore,
    options: &TranslationOptions,
) -> TranslationResult<usize> {
    let tokens = tokenize(text);
    let mut counter = OccurrenceCounter::new();
    let mut picker = CompoundPicker::new(&tokens);
    let mut created = 0usize;

    let key_lookup = |term: &str| dictionary.contains_target(term);

    for token in &tokens {
        if !token.is_word() || options.keywords.contains(token.text) {
            continue;
        }

        let annotated = options.policy.is_annotation_position(&text[..token.start]);
        let known = has_stored_identifier(store, token.text, counter.peek(token.text), annotated);
        if let Some(compound) = picker.pick(store, token, known) {
            count_compound_parts(&mut counter, store, compound);
            continue;
        }
        if known || dictionary.contains_target(token.text) {
            counter.next(token.text);
            continue;
        }

        let parts = options.segmenter.segment(token.text, &key_lookup);
        if parts.len() < 2 || !parts.iter().any(|part| dictionary.contains_target(part)) {
            counter.next(token.text);
            continue;
        }

        let compound_id = store.next_compound_id()?;
        let mut part_ids = Vec::with_capacity(parts.len());
        let mut original = String::with_capacity(token.text.len());
        let mut part_start = token.char_start;

        for (index, part) in parts.iter().enumerate() {
            let ignore_case = classify(part) == Script::Latin;
            let part_original = dictionary
                .lookup_target(part, ignore_case)
                .map_or_else(|| part.to_string(), |synonym| match_case(part, synonym));

            let identifier = build_identifier(part, counter.next(part), annotated && index == 0);
            if store.term(&identifier).is_some() {
                store.link_term_to_compound(&identifier, &compound_id)?;
            } else {
                let mut record = TermRecord::new(identifier.clone(), &part_original, part, part_start);
                record.compound_ids.push(compound_id.clone());
                store.insert_term(record)?;
            }

            original.push_str(&part_original);
            part_ids.push(identifier);
            part_start += part.chars().count();
        }

        debug!("Detected compound {} '{}' -> '{}'", compound_id, token.text, original);
        store.insert_compound(CompoundRecord {
            compound_id,
            original_text: original,
            translated_text: token.text.to_string(),
            part_ids,
            position: token.char_start,
        })?;
        created += 1;
    }

    if created > 0 {
        info!("Registered {} compounds typed in target mode", created);
    }
    Ok(created)
}
