//! Source adapters: each produces zero or more candidate records from one
//! upstream origin.

mod inspire;
mod semantic_scholar;

pub use inspire::InspireSource;
pub use semantic_scholar::SemanticScholarSource;

use crate::config::Config;
use crate::error::SourceResult;
use crate::models::Record;

/// One upstream origin of candidate records.
///
/// Adapters are polymorphic over a single capability: produce zero or more
/// candidate records for the configured author. An empty result means "this
/// source yielded nothing", not an error. The engine never branches on
/// source identity.
#[async_trait::async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Short name used in logs and per-source counts.
    fn name(&self) -> &'static str;

    /// Fetch all candidate records this source reports.
    async fn fetch(&self) -> SourceResult<Vec<Record>>;
}

/// Run every source in priority order and concatenate their candidates.
///
/// A failing source is logged and degrades to zero records; reconciliation
/// proceeds with whatever the remaining sources produced. Sources run
/// sequentially because concatenation order carries the merge priority.
pub async fn collect_candidates(sources: &[Box<dyn SourceAdapter>]) -> Vec<Record> {
    let mut candidates = Vec::new();
    for source in sources {
        match source.fetch().await {
            Ok(records) => {
                tracing::info!(source = source.name(), count = records.len(), "fetched records");
                candidates.extend(records);
            }
            Err(error) => {
                tracing::warn!(
                    source = source.name(),
                    error = %error,
                    "source failed, continuing without it"
                );
            }
        }
    }
    candidates
}

/// Build the HTTP client shared by the adapters.
pub(crate) fn http_client(
    config: &Config,
    headers: reqwest::header::HeaderMap,
) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("pubmerge/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .gzip(true)
        .build()
}

/// Shorten a response body for error messages.
pub(crate) fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
