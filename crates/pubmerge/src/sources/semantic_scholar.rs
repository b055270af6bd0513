//! Semantic Scholar Graph API adapter.
//!
//! Pages through an author's papers via the `next` offset. An API key, when
//! configured, goes out as the `x-api-key` header; without one the public
//! rate limits apply and the source simply fails more often, which the
//! caller tolerates.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::{Config, api, labels};
use crate::error::{SourceError, SourceResult};
use crate::models::Record;

use super::SourceAdapter;

const NAME: &str = "semantic-scholar";

/// Paper fields requested from the Graph API.
const PAPER_FIELDS: &str = "title,year,venue,authors,externalIds";

/// Source adapter for the Semantic Scholar Graph API.
pub struct SemanticScholarSource {
    client: reqwest::Client,
    graph_api_url: String,
    author_id: String,
    page_size: usize,
    max_pages: usize,
}

impl SemanticScholarSource {
    /// Create an adapter for one author id.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails or the configured
    /// API key is not a valid header value.
    pub fn new(config: &Config, author_id: &str) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        Ok(Self {
            client: super::http_client(config, headers)?,
            graph_api_url: config.graph_api_url.clone(),
            author_id: author_id.to_string(),
            page_size: config.page_size,
            max_pages: config.max_pages,
        })
    }

    async fn fetch_page(&self, offset: usize) -> SourceResult<PapersPage> {
        let url = format!("{}/author/{}/papers", self.graph_api_url, self.author_id);
        let offset_param = offset.to_string();
        let limit_param = self.page_size.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("fields", PAPER_FIELDS),
                ("offset", offset_param.as_str()),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SourceError::unexpected_status(status.as_u16(), super::snippet(&body)));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl SourceAdapter for SemanticScholarSource {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch(&self) -> SourceResult<Vec<Record>> {
        let mut records = Vec::new();
        let mut offset = Some(0);
        let mut pages = 0;

        while let Some(current) = offset {
            if pages >= self.max_pages {
                tracing::debug!(source = NAME, pages, "pagination cap reached");
                break;
            }

            let page = self.fetch_page(current).await?;
            records.extend(page.data.into_iter().filter_map(parse_paper));
            offset = page.next;
            pages += 1;
        }

        Ok(records)
    }
}

/// Map one Graph API paper to a candidate record. Papers without a title
/// are dropped.
fn parse_paper(paper: ApiPaper) -> Option<Record> {
    let title = paper.title.unwrap_or_default();
    if title.is_empty() {
        return None;
    }

    let authors = paper
        .authors
        .iter()
        .filter_map(|author| author.name.as_deref())
        .filter(|name| !name.is_empty())
        .take(api::MAX_AUTHORS)
        .collect::<Vec<_>>()
        .join(", ");

    let ids = paper.external_ids.unwrap_or_default();
    let mut links = BTreeMap::new();
    if let Some(arxiv) = ids.arxiv.filter(|value| !value.is_empty()) {
        links.insert(labels::ARXIV.to_string(), format!("https://arxiv.org/abs/{arxiv}"));
    }
    if let Some(doi) = ids.doi.filter(|value| !value.is_empty()) {
        links.insert(labels::DOI.to_string(), format!("https://doi.org/{doi}"));
    }
    if !paper.paper_id.is_empty() {
        links.insert(
            labels::SEMANTIC_SCHOLAR.to_string(),
            format!("https://www.semanticscholar.org/paper/{}", paper.paper_id),
        );
    }

    Some(Record {
        year: paper.year,
        title,
        authors,
        venue: paper.venue.unwrap_or_default(),
        links,
        origin: NAME,
    })
}

// Wire shapes for the author papers endpoint.

#[derive(Debug, Default, Deserialize)]
struct PapersPage {
    #[serde(default)]
    next: Option<usize>,
    #[serde(default)]
    data: Vec<ApiPaper>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPaper {
    #[serde(default)]
    paper_id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    venue: Option<String>,
    #[serde(default)]
    authors: Vec<ApiAuthor>,
    #[serde(default)]
    external_ids: Option<ApiExternalIds>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiAuthor {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiExternalIds {
    #[serde(default, rename = "DOI")]
    doi: Option<String>,
    #[serde(default, rename = "ArXiv")]
    arxiv: Option<String>,
}
