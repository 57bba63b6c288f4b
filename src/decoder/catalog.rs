use serde::Serialize;

use crate::decoder::data;
use crate::models::CravingRecord;

/// Read-only table of known cravings, keyed by lowercase canonical name.
///
/// Entries are kept in declaration order rather than hashed: the partial
/// matcher's tie-breaking rule makes the order observable, and the table is
/// small enough that linear scans beat any indexing.
#[derive(Debug, Clone, Serialize)]
pub struct CravingCatalog {
    entries: Vec<(String, CravingRecord)>,
}

impl CravingCatalog {
    /// Build a catalog from `(key, record)` pairs, preserving order.
    ///
    /// Keys are lowercased; a repeated key keeps the first occurrence.
    pub fn new(entries: Vec<(String, CravingRecord)>) -> Self {
        let mut deduped: Vec<(String, CravingRecord)> = Vec::with_capacity(entries.len());
        for (key, record) in entries {
            let key = key.to_lowercase();
            if !deduped.iter().any(|(k, _)| *k == key) {
                deduped.push((key, record));
            }
        }
        Self { entries: deduped }
    }

    /// The built-in CraveQ table.
    pub fn builtin() -> Self {
        Self::new(data::builtin_entries())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CravingRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Exact lookup by normalized key.
    pub fn get(&self, key: &str) -> Option<&CravingRecord> {
        let key = key.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Look up a craving by exact key, then by partial match (symmetric
    /// substring containment against the normalized query, declaration
    /// order breaking ties). `None` when nothing matches.
    ///
    /// An input that is empty after trimming never matches; otherwise the
    /// empty string would vacuously be contained in every key.
    pub fn find(&self, query: &str) -> Option<&CravingRecord> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        if let Some(record) = self
            .entries
            .iter()
            .find_map(|(k, v)| (*k == normalized).then_some(v))
        {
            return Some(record);
        }

        self.entries.iter().find_map(|(k, v)| {
            (normalized.contains(k.as_str()) || k.contains(&normalized)).then_some(v)
        })
    }

    /// Decode a free-text craving into a record. Total: every input yields a
    /// result, unrecognized cravings via a synthesized generic record that
    /// echoes the input.
    pub fn resolve(&self, query: &str) -> CravingRecord {
        self.find(query)
            .cloned()
            .unwrap_or_else(|| data::fallback_record(query))
    }
}

impl Default for CravingCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
