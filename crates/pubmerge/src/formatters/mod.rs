//! Output formatting for reconciled records.

mod json;

pub use json::{render_records, write_records};
