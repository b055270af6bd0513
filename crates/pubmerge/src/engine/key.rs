//! Deduplication key derivation.

use crate::config::labels;
use crate::models::Record;

use super::normalize::normalize_title;

/// Derive the deduplication key for a record.
///
/// Strong identifiers win in the fixed preference order (arXiv before DOI):
/// the key is `"<label>:<value>"` lowercased, with the label matched
/// case-insensitively against the record's link kinds. Otherwise the key
/// falls back to the normalized title, which is strictly weaker — two
/// distinct works with near-identical titles will merge. Records with no
/// strong identifier and an empty normalized title produce no key and are
/// excluded from reconciliation.
#[must_use]
pub fn dedup_key(record: &Record) -> Option<String> {
    for label in labels::STRONG_IDS {
        let value = record
            .links
            .iter()
            .find(|(kind, url)| kind.eq_ignore_ascii_case(label) && !url.is_empty())
            .map(|(_, url)| url);
        if let Some(value) = value {
            return Some(format!("{label}:{value}").to_lowercase());
        }
    }

    let title = normalize_title(&record.title);
    (!title.is_empty()).then_some(title)
}
