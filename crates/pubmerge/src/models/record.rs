//! The publication record shape shared by candidates and merged output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One work as reported by a single source, and the shape of merged output.
///
/// Serialization is compact: absent or empty fields are omitted entirely,
/// never emitted as null or empty placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Title as reported by the source. Must be non-empty for the record to
    /// take part in reconciliation.
    pub title: String,

    /// Free-form author list; sources vary in delimiter and completeness.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub authors: String,

    /// Free-form venue/journal description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub venue: String,

    /// Link-kind label (e.g. "arXiv", "DOI", a source name) to URL.
    ///
    /// A `BTreeMap` keeps iteration deterministic, which the merge and
    /// serialization layers rely on.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, String>,

    /// Name of the adapter that produced this record. Used in logs only and
    /// never serialized into output.
    #[serde(skip)]
    pub origin: &'static str,
}

impl Record {
    /// Create a record with the given title and origin; other fields empty.
    #[must_use]
    pub fn new(title: impl Into<String>, origin: &'static str) -> Self {
        Self { title: title.into(), origin, ..Self::default() }
    }

    /// URL for a link kind, if present with a non-empty value.
    #[must_use]
    pub fn link(&self, kind: &str) -> Option<&str> {
        self.links.get(kind).map(String::as_str).filter(|url| !url.is_empty())
    }

    /// Count of distinct link kinds carrying a non-empty URL.
    #[must_use]
    pub fn link_kinds(&self) -> usize {
        self.links.values().filter(|url| !url.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_omitted() {
        let record = Record::new("Quantum X", "test");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json, serde_json::json!({"title": "Quantum X"}));
    }

    #[test]
    fn test_populated_fields_are_serialized() {
        let mut record = Record::new("Quantum X", "test");
        record.year = Some(2020);
        record.venue = "Phys Rev".to_string();
        record.links.insert("arXiv".to_string(), "https://arxiv.org/abs/1234".to_string());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["year"], 2020);
        assert_eq!(json["venue"], "Phys Rev");
        assert_eq!(json["links"]["arXiv"], "https://arxiv.org/abs/1234");
        assert!(json.get("authors").is_none());
        assert!(json.get("origin").is_none());
    }

    #[test]
    fn test_deserialize_minimal() {
        let record: Record = serde_json::from_str(r#"{"title": "X"}"#).unwrap();
        assert_eq!(record.title, "X");
        assert!(record.year.is_none());
        assert!(record.links.is_empty());
        assert_eq!(record.origin, "");
    }

    #[test]
    fn test_link_ignores_empty_values() {
        let mut record = Record::new("X", "test");
        record.links.insert("DOI".to_string(), String::new());
        record.links.insert("arXiv".to_string(), "https://arxiv.org/abs/1".to_string());

        assert!(record.link("DOI").is_none());
        assert_eq!(record.link("arXiv"), Some("https://arxiv.org/abs/1"));
        assert_eq!(record.link_kinds(), 1);
    }
}
