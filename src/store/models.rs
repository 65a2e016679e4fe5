/*!
 * Term and compound records.
 *
 * Records are persisted as JSON objects. Decoding is lenient: a stored
 * position that is not a number becomes 0 and a malformed id list becomes
 * empty, so a damaged entry degrades to an identity translation instead of
 * aborting a pass.
 */

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One translated occurrence of a term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRecord {
    /// Occurrence identifier, e.g. `hallo_1` or `string_2_type`
    pub identifier: String,
    /// Text in the original language
    pub original_text: String,
    /// Text in the target language
    pub translated_text: String,
    /// Character offset into the target-language text
    pub position: usize,
    /// Compounds this term is a part of
    #[serde(default)]
    pub compound_ids: Vec<String>,
}

impl TermRecord {
    pub fn new(identifier: String, original_text: &str, translated_text: &str, position: usize) -> Self {
        Self {
            identifier,
            original_text: original_text.to_string(),
            translated_text: translated_text.to_string(),
            position,
            compound_ids: Vec::new(),
        }
    }

    /// Whether this term is an unchanged pass-through
    pub fn is_identity(&self) -> bool {
        self.original_text == self.translated_text
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Decode a stored record. The key's identifier wins over the stored one.
    pub fn from_value(identifier: &str, value: &Value) -> Self {
        Self {
            identifier: identifier.to_string(),
            original_text: string_field(value, "originalText"),
            translated_text: string_field(value, "translatedText"),
            position: position_field(identifier, value),
            compound_ids: list_field(value, "compoundIds"),
        }
    }
}

/// A target-language token assembled from several term parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundRecord {
    pub compound_id: String,
    pub original_text: String,
    /// Concatenation of the parts' translated text
    pub translated_text: String,
    /// Part identifiers in order
    #[serde(default)]
    pub part_ids: Vec<String>,
    /// Position of the first part when the compound was created
    pub position: usize,
}

impl CompoundRecord {
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn from_value(compound_id: &str, value: &Value) -> Self {
        Self {
            compound_id: compound_id.to_string(),
            original_text: string_field(value, "originalText"),
            translated_text: string_field(value, "translatedText"),
            part_ids: list_field(value, "partIds"),
            position: position_field(compound_id, value),
        }
    }
}

fn string_field(value: &Value, field: &str) -> String {
    value
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn list_field(value: &Value, field: &str) -> Vec<String> {
    match value.get(field).and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

fn position_field(owner: &str, value: &Value) -> usize {
    let raw = value.get("position");
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_u64().map(|n| n as usize),
        Some(Value::String(s)) => s.trim().parse::<usize>().ok(),
        _ => None,
    };

    parsed.unwrap_or_else(|| {
        warn!("Invalid stored position {:?} for '{}', using 0", raw, owner);
        0
    })
}
