//! Configuration for the pubmerge CLI.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the INSPIRE-HEP REST API.
    pub const INSPIRE_API: &str = "https://inspirehep.net/api";

    /// Base URL for the Semantic Scholar Graph API.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Records requested per page from either source.
    pub const PAGE_SIZE: usize = 100;

    /// Pagination cap per source; anything beyond is truncated.
    pub const MAX_PAGES: usize = 10;

    /// Author names kept per record before truncation.
    pub const MAX_AUTHORS: usize = 20;
}

/// Link-kind labels shared by the source adapters and the engine.
pub mod labels {
    /// arXiv eprint link.
    pub const ARXIV: &str = "arXiv";

    /// DOI resolver link.
    pub const DOI: &str = "DOI";

    /// INSPIRE-HEP literature record link.
    pub const INSPIRE: &str = "INSPIRE";

    /// Semantic Scholar paper page link.
    pub const SEMANTIC_SCHOLAR: &str = "Semantic Scholar";

    /// Strong identifiers in dedup-key preference order.
    ///
    /// Any two records sharing a non-empty value under one of these labels
    /// are the same work, regardless of title.
    pub const STRONG_IDS: &[&str] = &[ARXIV, DOI];
}

/// Runtime configuration shared by the source adapters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional, raises rate limits).
    pub api_key: Option<String>,

    /// Base URL for the INSPIRE-HEP API (overridable for mock servers).
    pub inspire_api_url: String,

    /// Base URL for the Semantic Scholar Graph API (overridable for mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Records requested per page.
    pub page_size: usize,

    /// Maximum pages fetched per source.
    pub max_pages: usize,
}

impl Config {
    /// Create a new configuration with an optional Semantic Scholar API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            inspire_api_url: api::INSPIRE_API.to_string(),
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            page_size: api::PAGE_SIZE,
            max_pages: api::MAX_PAGES,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            inspire_api_url: format!("{}/api", base_url),
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            page_size: 100,
            max_pages: 5,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok();
        Ok(Self::new(api_key))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
