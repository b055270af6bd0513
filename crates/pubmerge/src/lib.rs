//! pubmerge — reconcile an author's publication list from INSPIRE-HEP and
//! Semantic Scholar into one canonical, deduplicated JSON list.
//!
//! Two independent, unreliable upstream sources report the same set of
//! works. Source adapters hand the engine a flat list of candidate records;
//! the engine derives deduplication keys, resolves conflicts with a
//! richness-scoring tie-break, backfills missing fields, and orders the
//! result deterministically. The engine is synchronous; only the adapters
//! touch the network.
//!
//! # Example
//!
//! ```
//! use pubmerge::engine;
//! use pubmerge::models::Record;
//!
//! let candidates = vec![
//!     Record { year: Some(2020), title: "Quantum X".into(), ..Record::default() },
//!     Record { title: "quantum x!!".into(), venue: "Phys Rev".into(), ..Record::default() },
//! ];
//!
//! let records = engine::reconcile(candidates)?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].year, Some(2020));
//! assert_eq!(records[0].venue, "Phys Rev");
//! # Ok::<(), pubmerge::error::ReconcileError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod formatters;
pub mod models;
pub mod sources;

pub use config::Config;
pub use error::{ReconcileError, SourceError};
pub use models::Record;
