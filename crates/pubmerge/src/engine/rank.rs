//! Final ordering of reconciled records.

use crate::models::Record;

/// Sort records newest-first.
///
/// Descending on `(year, title)`, with missing years treated as 0 and titles
/// compared case-sensitively on the raw string. The sort is stable, so equal
/// composite keys keep their incoming order and the result is fully
/// deterministic for a given input sequence.
pub fn rank(records: &mut [Record]) {
    records.sort_by(|a, b| {
        (b.year.unwrap_or(0), b.title.as_str()).cmp(&(a.year.unwrap_or(0), a.title.as_str()))
    });
}
