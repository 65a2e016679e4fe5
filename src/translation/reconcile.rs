/*!
 * Store reconciliation after edits made in target mode.
 *
 * The reconciler compares three versions of a document: the target text the
 * forward pass produced (`last_translated`), the original text it came from,
 * and the text as it is now. It decides which stored records still describe
 * the current text, relocates them, and rewrites the store with exactly the
 * survivors.
 *
 * Spaced scripts (latin, cyrillic) are indexed by exact word tokens. Unspaced
 * scripts (logographic, devanagari) do not delimit words, so their index
 * answers substring queries instead.
 */

use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::StoreError;
use crate::store::{CompoundRecord, TermRecord, TermStore};
use crate::text::{Script, classify, tokenize};

/// Character offsets of every occurrence of a term in one text
#[derive(Debug, Clone)]
pub struct PositionIndex {
    script: Script,
    /// Word token -> sorted character offsets (spaced scripts)
    tokens: HashMap<String, Vec<usize>>,
    /// Full text, queried by substring (unspaced scripts)
    text: String,
}

impl PositionIndex {
    pub fn build(text: &str, script: Script) -> Self {
        let mut tokens: HashMap<String, Vec<usize>> = HashMap::new();
        if !script.is_unspaced() {
            for token in tokenize(text).into_iter().filter(|t| t.is_word()) {
                tokens
                    .entry(token.text.to_string())
                    .or_default()
                    .push(token.char_start);
            }
        }

        Self {
            script,
            tokens,
            text: if script.is_unspaced() { text.to_string() } else { String::new() },
        }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// Number of distinct word tokens indexed (0 for unspaced scripts)
    pub fn distinct_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Sorted character offsets at which `term` occurs
    pub fn positions(&self, term: &str) -> Vec<usize> {
        if term.is_empty() {
            return Vec::new();
        }
        if !self.script.is_unspaced() {
            return self.tokens.get(term).cloned().unwrap_or_default();
        }

        let mut positions = Vec::new();
        let mut chars_before = 0usize;
        let mut last_byte = 0usize;
        for (byte_idx, _) in self.text.match_indices(term) {
            chars_before += self.text[last_byte..byte_idx].chars().count();
            last_byte = byte_idx;
            positions.push(chars_before);
        }
        positions
    }

    pub fn occurs(&self, term: &str) -> bool {
        if self.script.is_unspaced() {
            !term.is_empty() && self.text.contains(term)
        } else {
            self.tokens.contains_key(term)
        }
    }

    pub fn occurs_at(&self, term: &str, position: usize) -> bool {
        self.positions(term).binary_search(&position).is_ok()
    }

    /// Occurrence closest to `position`; ties go to the earlier one
    pub fn nearest(&self, term: &str, position: usize) -> Option<usize> {
        self.positions(term)
            .into_iter()
            .min_by_key(|&p| (p.abs_diff(position), p))
    }
}

/// Counts of one reconciliation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub kept_terms: usize,
    pub pruned_terms: usize,
    pub kept_compounds: usize,
    pub pruned_compounds: usize,
    pub relocated: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The store was rewritten with the survivors
    Rebuilt(ReconcileSummary),
    /// Another reconciliation was already running
    Skipped,
}

/// Serializes store rebuilds; at most one runs at a time
#[derive(Debug, Default)]
pub struct Reconciler {
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the rebuild ends, including on error
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Repair `store` so that it describes `current`.
    ///
    /// A call made while another rebuild is in flight returns `Skipped`
    /// without touching the store.
    pub fn rebuild_map(
        &self,
        store: &mut TermStore,
        last_translated: &str,
        original: &str,
        current: &str,
    ) -> Result<ReconcileOutcome, StoreError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Reconciliation already in flight, skipping");
            return Ok(ReconcileOutcome::Skipped);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let script = classify(last_translated);
        let last_index = PositionIndex::build(last_translated, script);
        let original_index = PositionIndex::build(original, script);
        let current_index = PositionIndex::build(current, script);
        debug!(
            "Reconciling {} script text: {} / {} / {} distinct tokens (last / original / current)",
            script,
            last_index.distinct_tokens(),
            original_index.distinct_tokens(),
            current_index.distinct_tokens()
        );

        let (terms, compounds, summary) = plan(store, &last_index, &current_index);
        store.replace_all(terms, compounds)?;

        info!(
            "Reconciled store: kept {} terms and {} compounds, pruned {} terms and {} compounds, relocated {}",
            summary.kept_terms,
            summary.kept_compounds,
            summary.pruned_terms,
            summary.pruned_compounds,
            summary.relocated
        );
        Ok(ReconcileOutcome::Rebuilt(summary))
    }
}

/// Decide the surviving records without touching the store
fn plan(
    store: &TermStore,
    last_index: &PositionIndex,
    current_index: &PositionIndex,
) -> (Vec<TermRecord>, Vec<CompoundRecord>, ReconcileSummary) {
    let mut summary = ReconcileSummary::default();

    // Compounds survive iff their translated form is still in the text
    let mut compound_shift: HashMap<String, (usize, usize)> = HashMap::new();
    let mut surviving_compounds: Vec<CompoundRecord> = Vec::new();
    for compound in store.compounds() {
        match current_index.nearest(&compound.translated_text, compound.position) {
            Some(new_position) => {
                compound_shift.insert(compound.compound_id.clone(), (compound.position, new_position));
                surviving_compounds.push(compound.clone());
            }
            None => {
                debug!("Pruning compound {} '{}'", compound.compound_id, compound.translated_text);
                summary.pruned_compounds += 1;
            }
        }
    }

    let mut terms: Vec<TermRecord> = Vec::new();
    for term in store.terms() {
        let live_compounds: Vec<&String> = term
            .compound_ids
            .iter()
            .filter(|id| compound_shift.contains_key(*id))
            .collect();
        let orphan = !term.compound_ids.is_empty() && live_compounds.is_empty();
        let at_own_position = current_index.occurs_at(&term.translated_text, term.position);

        let keep = !(orphan && !at_own_position)
            && (current_index.occurs(&term.translated_text)
                || !live_compounds.is_empty()
                || last_index.occurs_at(&term.translated_text, term.position));
        if !keep {
            debug!("Pruning term {}", term.identifier);
            summary.pruned_terms += 1;
            continue;
        }

        let mut record = term.clone();
        record.compound_ids.retain(|id| compound_shift.contains_key(id));

        let new_position = match live_compounds.first().and_then(|id| compound_shift.get(*id)) {
            Some(&(old_start, new_start)) if term.position >= old_start => {
                Some(new_start + (term.position - old_start))
            }
            _ => current_index.nearest(&term.translated_text, term.position),
        };
        if let Some(position) = new_position.filter(|&p| p != record.position) {
            record.position = position;
            summary.relocated += 1;
        }
        terms.push(record);
    }

    // Drop part links to pruned terms, then compounds left without parts
    let kept_ids: HashSet<&str> = terms.iter().map(|t| t.identifier.as_str()).collect();
    let mut compounds = Vec::with_capacity(surviving_compounds.len());
    for mut compound in surviving_compounds {
        compound.part_ids.retain(|id| kept_ids.contains(id.as_str()));
        if compound.part_ids.is_empty() {
            debug!("Deleting compound {} without parts", compound.compound_id);
            summary.pruned_compounds += 1;
            continue;
        }
        if let Some(&(_, new_start)) = compound_shift.get(&compound.compound_id) {
            if new_start != compound.position {
                compound.position = new_start;
                summary.relocated += 1;
            }
        }
        compounds.push(compound);
    }

    // Links to compounds deleted in the previous step
    let kept_compounds: HashSet<String> = compounds.iter().map(|c| c.compound_id.clone()).collect();
    for term in &mut terms {
        term.compound_ids.retain(|id| kept_compounds.contains(id));
    }

    summary.kept_terms = terms.len();
    summary.kept_compounds = compounds.len();
    (terms, compounds, summary)
}
