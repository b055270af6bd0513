//! Grouping and conflict resolution for candidate records.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::models::Record;

use super::key::dedup_key;

/// Richness score used to pick which record anchors a merge.
///
/// The triple is compared lexicographically: link-kind coverage dominates,
/// then venue length, then authors length. A deliberately simple, lossy
/// heuristic — kept exactly as-is so output stays reproducible.
#[must_use]
pub fn richness(record: &Record) -> (usize, usize, usize) {
    (record.link_kinds(), record.venue.len(), record.authors.len())
}

/// Group candidates by dedup key and resolve each group to one record.
///
/// Candidates must arrive in source priority order: the first record seen
/// for a key holds the slot, and a later record takes over only when its
/// richness score is strictly greater. Either way, the losing record
/// backfills the winner's empty fields and contributes any link kinds the
/// winner is missing.
///
/// Records with an empty title or no derivable key contribute nothing.
#[must_use]
pub fn merge_candidates(candidates: impl IntoIterator<Item = Record>) -> BTreeMap<String, Record> {
    let mut by_key: BTreeMap<String, Record> = BTreeMap::new();

    for record in candidates {
        if record.title.is_empty() {
            continue;
        }
        let Some(key) = dedup_key(&record) else {
            continue;
        };

        match by_key.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                let winner = slot.get_mut();
                if richness(&record) > richness(winner) {
                    let loser = std::mem::replace(winner, record);
                    backfill(winner, &loser);
                } else {
                    backfill(winner, &record);
                }
            }
        }
    }

    by_key
}

/// Copy `other`'s fields into `winner` wherever the winner is missing them.
/// Existing values, including link kinds, are never overwritten.
fn backfill(winner: &mut Record, other: &Record) {
    if winner.year.is_none() {
        winner.year = other.year;
    }
    if winner.venue.is_empty() && !other.venue.is_empty() {
        winner.venue = other.venue.clone();
    }
    if winner.authors.is_empty() && !other.authors.is_empty() {
        winner.authors = other.authors.clone();
    }
    for (kind, url) in &other.links {
        if !url.is_empty() {
            winner.links.entry(kind.clone()).or_insert_with(|| url.clone());
        }
    }
}
