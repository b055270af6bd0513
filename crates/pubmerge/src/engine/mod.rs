//! The record reconciliation engine.
//!
//! Synchronous and deterministic: given the same candidates in the same
//! source priority order, the pipeline produces byte-identical output every
//! run. Grouping uses a `BTreeMap`, so nothing depends on hash iteration
//! order.

mod key;
mod merge;
mod normalize;
mod rank;

pub use key::dedup_key;
pub use merge::{merge_candidates, richness};
pub use normalize::normalize_title;
pub use rank::rank;

use crate::error::{ReconcileError, ReconcileResult};
use crate::models::Record;

/// Reconcile candidate records from all sources into the canonical list.
///
/// Candidates must be concatenated in source priority order (authoritative
/// source first); the order decides which record anchors a merge on richness
/// ties.
///
/// # Errors
///
/// Fails with [`ReconcileError::NoUsableRecords`] when no source contributed
/// a usable record, so the caller can exit distinctly without touching
/// previous output.
pub fn reconcile(candidates: Vec<Record>) -> ReconcileResult<Vec<Record>> {
    let merged = merge_candidates(candidates);
    if merged.is_empty() {
        return Err(ReconcileError::NoUsableRecords);
    }

    let mut records: Vec<Record> = merged.into_values().collect();
    rank(&mut records);
    Ok(records)
}
