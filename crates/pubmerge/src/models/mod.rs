//! Data models shared by the source adapters, the engine, and the output
//! layer.

mod record;

pub use record::Record;
