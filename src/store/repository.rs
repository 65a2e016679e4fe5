/*!
 * Typed term and compound tables.
 *
 * `TermStore` keeps every record of one document in memory, indexed by
 * identifier, plus a secondary index from a compound's translated text to
 * its ids. Every mutation is written through to the key-value backend under
 * a per-document namespace:
 *
 * - `{ns}term:{identifier}`
 * - `{ns}compound:{compound_id}`
 * - `{ns}compound_counter` (monotonic, survives `clear`)
 * - `{ns}state:{name}` (session state)
 */

use log::{debug, info};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::Path;

use super::backend::{KeyValueStore, MemoryStore};
use super::models::{CompoundRecord, TermRecord};
use crate::errors::StoreError;

/// Namespace used when no document path is known
pub const DEFAULT_NAMESPACE: &str = "termshift:";

const TERM_PREFIX: &str = "term:";
const COMPOUND_PREFIX: &str = "compound:";
const STATE_PREFIX: &str = "state:";
const COMPOUND_COUNTER_KEY: &str = "compound_counter";

/// Namespace for a document, derived from a hash of its path
pub fn document_namespace(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("{}{}:", DEFAULT_NAMESPACE, &digest[..16])
}

/// Store of term and compound records for one document
pub struct TermStore {
    backend: Box<dyn KeyValueStore>,
    namespace: String,
    terms: HashMap<String, TermRecord>,
    compounds: HashMap<String, CompoundRecord>,
    /// Translated text -> compound ids
    compound_index: HashMap<String, Vec<String>>,
    compound_counter: u64,
}

impl TermStore {
    /// Open the tables stored under `namespace`, loading every record
    pub fn open(backend: Box<dyn KeyValueStore>, namespace: &str) -> Result<Self, StoreError> {
        let mut store = Self {
            backend,
            namespace: namespace.to_string(),
            terms: HashMap::new(),
            compounds: HashMap::new(),
            compound_index: HashMap::new(),
            compound_counter: 0,
        };
        store.load()?;
        Ok(store)
    }

    /// Empty store backed by memory (for testing and embedding)
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryStore::new()),
            namespace: DEFAULT_NAMESPACE.to_string(),
            terms: HashMap::new(),
            compounds: HashMap::new(),
            compound_index: HashMap::new(),
            compound_counter: 0,
        }
    }

    fn key(&self, prefix: &str, id: &str) -> String {
        format!("{}{}{}", self.namespace, prefix, id)
    }

    fn load(&mut self) -> Result<(), StoreError> {
        let term_prefix = self.key(TERM_PREFIX, "");
        for key in self.backend.keys_with_prefix(&term_prefix)? {
            if let Some(value) = self.backend.get(&key)? {
                let id = &key[term_prefix.len()..];
                self.terms.insert(id.to_string(), TermRecord::from_value(id, &value));
            }
        }

        let compound_prefix = self.key(COMPOUND_PREFIX, "");
        for key in self.backend.keys_with_prefix(&compound_prefix)? {
            if let Some(value) = self.backend.get(&key)? {
                let id = &key[compound_prefix.len()..];
                let record = CompoundRecord::from_value(id, &value);
                self.index_compound(&record);
                self.compounds.insert(id.to_string(), record);
            }
        }

        let counter_key = self.key(COMPOUND_COUNTER_KEY, "");
        self.compound_counter = self
            .backend
            .get_or(&counter_key, Value::from(0))?
            .as_u64()
            .unwrap_or(0);

        debug!(
            "Loaded {} terms and {} compounds from '{}'",
            self.terms.len(),
            self.compounds.len(),
            self.namespace
        );
        Ok(())
    }

    fn index_compound(&mut self, record: &CompoundRecord) {
        let ids = self
            .compound_index
            .entry(record.translated_text.clone())
            .or_default();
        if !ids.contains(&record.compound_id) {
            ids.push(record.compound_id.clone());
        }
    }

    fn unindex_compound(&mut self, record: &CompoundRecord) {
        if let Some(ids) = self.compound_index.get_mut(&record.translated_text) {
            ids.retain(|id| id != &record.compound_id);
            if ids.is_empty() {
                self.compound_index.remove(&record.translated_text);
            }
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn term(&self, identifier: &str) -> Option<&TermRecord> {
        self.terms.get(identifier)
    }

    pub fn compound(&self, compound_id: &str) -> Option<&CompoundRecord> {
        self.compounds.get(compound_id)
    }

    pub fn terms(&self) -> impl Iterator<Item = &TermRecord> {
        self.terms.values()
    }

    pub fn compounds(&self) -> impl Iterator<Item = &CompoundRecord> {
        self.compounds.values()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn compound_count(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.compounds.is_empty()
    }

    /// Compounds whose translated text equals `translated`, in document order
    pub fn compounds_by_translation(&self, translated: &str) -> Vec<&CompoundRecord> {
        let mut found: Vec<&CompoundRecord> = self
            .compound_index
            .get(translated)
            .map(|ids| ids.iter().filter_map(|id| self.compounds.get(id)).collect())
            .unwrap_or_default();
        found.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| compound_ordinal(&a.compound_id).cmp(&compound_ordinal(&b.compound_id)))
        });
        found
    }

    pub fn has_compound_translation(&self, translated: &str) -> bool {
        self.compound_index.contains_key(translated)
    }

    /// Insert or replace a term record
    pub fn insert_term(&mut self, record: TermRecord) -> Result<(), StoreError> {
        let key = self.key(TERM_PREFIX, &record.identifier);
        self.backend.set(&key, record.to_value())?;
        self.terms.insert(record.identifier.clone(), record);
        Ok(())
    }

    /// Insert or replace a compound record
    pub fn insert_compound(&mut self, record: CompoundRecord) -> Result<(), StoreError> {
        let key = self.key(COMPOUND_PREFIX, &record.compound_id);
        self.backend.set(&key, record.to_value())?;
        if let Some(previous) = self.compounds.remove(&record.compound_id) {
            self.unindex_compound(&previous);
        }
        self.index_compound(&record);
        self.compounds.insert(record.compound_id.clone(), record);
        Ok(())
    }

    /// Link an existing term to a compound
    pub fn link_term_to_compound(&mut self, identifier: &str, compound_id: &str) -> Result<(), StoreError> {
        let Some(mut record) = self.terms.get(identifier).cloned() else {
            return Ok(());
        };
        if !record.compound_ids.iter().any(|id| id == compound_id) {
            record.compound_ids.push(compound_id.to_string());
            self.insert_term(record)?;
        }
        Ok(())
    }

    pub fn remove_term(&mut self, identifier: &str) -> Result<Option<TermRecord>, StoreError> {
        let key = self.key(TERM_PREFIX, identifier);
        self.backend.delete(&key)?;
        Ok(self.terms.remove(identifier))
    }

    pub fn remove_compound(&mut self, compound_id: &str) -> Result<Option<CompoundRecord>, StoreError> {
        let key = self.key(COMPOUND_PREFIX, compound_id);
        self.backend.delete(&key)?;
        let removed = self.compounds.remove(compound_id);
        if let Some(record) = &removed {
            self.unindex_compound(record);
        }
        Ok(removed)
    }

    /// Allocate the next compound id. The counter never goes backwards.
    pub fn next_compound_id(&mut self) -> Result<String, StoreError> {
        self.compound_counter += 1;
        let key = self.key(COMPOUND_COUNTER_KEY, "");
        self.backend.set(&key, Value::from(self.compound_counter))?;
        Ok(format!("compound_{}", self.compound_counter))
    }

    /// Remove every term and compound record of this document
    pub fn clear(&mut self) -> Result<(), StoreError> {
        for prefix in [TERM_PREFIX, COMPOUND_PREFIX] {
            let full_prefix = self.key(prefix, "");
            for key in self.backend.keys_with_prefix(&full_prefix)? {
                self.backend.delete(&key)?;
            }
        }

        let removed = self.terms.len() + self.compounds.len();
        self.terms.clear();
        self.compounds.clear();
        self.compound_index.clear();

        if removed > 0 {
            debug!("Cleared {} records from '{}'", removed, self.namespace);
        }
        Ok(())
    }

    /// Clear the tables and rewrite them with exactly the given records
    pub fn replace_all(
        &mut self,
        terms: Vec<TermRecord>,
        compounds: Vec<CompoundRecord>,
    ) -> Result<(), StoreError> {
        self.clear()?;
        let (term_count, compound_count) = (terms.len(), compounds.len());
        for record in terms {
            self.insert_term(record)?;
        }
        for record in compounds {
            self.insert_compound(record)?;
        }
        info!("Rewrote store with {} terms and {} compounds", term_count, compound_count);
        Ok(())
    }

    /// Read a session state value
    pub fn state(&self, name: &str) -> Result<Option<String>, StoreError> {
        let key = self.key(STATE_PREFIX, name);
        Ok(self
            .backend
            .get(&key)?
            .and_then(|value| value.as_str().map(str::to_string)))
    }

    /// Write a session state value; `None` removes it
    pub fn set_state(&mut self, name: &str, value: Option<&str>) -> Result<(), StoreError> {
        let key = self.key(STATE_PREFIX, name);
        self.backend.put(&key, value.map(Value::from))
    }
}

fn compound_ordinal(compound_id: &str) -> u64 {
    compound_id
        .rsplit('_')
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(u64::MAX)
}
