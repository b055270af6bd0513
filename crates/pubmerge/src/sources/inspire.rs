//! INSPIRE-HEP literature adapter.
//!
//! Queries the literature endpoint for an author and follows the payload's
//! `links.next` URL for pagination, forcing a fixed page size onto every
//! link. No retry policy: a failed request fails the source, and the caller
//! degrades to the remaining sources.

use std::collections::BTreeMap;

use serde::Deserialize;
use url::Url;

use crate::config::{Config, api, labels};
use crate::error::{SourceError, SourceResult};
use crate::models::Record;

use super::SourceAdapter;

const NAME: &str = "inspire";

/// Source adapter for the INSPIRE-HEP REST API.
pub struct InspireSource {
    client: reqwest::Client,
    api_url: String,
    query: String,
    page_size: usize,
    max_pages: usize,
}

impl InspireSource {
    /// Create an adapter for one author.
    ///
    /// `author` is either the numeric INSPIRE author id or a BAI identifier
    /// string such as `"J.Doe.1"`.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config, author: &str) -> anyhow::Result<Self> {
        let query = if author.chars().all(|c| c.is_ascii_digit()) {
            format!("authors.id:{author}")
        } else {
            format!("a {author}")
        };

        Ok(Self {
            client: super::http_client(config, reqwest::header::HeaderMap::new())?,
            api_url: config.inspire_api_url.clone(),
            query,
            page_size: config.page_size,
            max_pages: config.max_pages,
        })
    }

    fn first_page_url(&self) -> SourceResult<String> {
        let mut url = Url::parse(&format!("{}/literature", self.api_url))?;
        url.query_pairs_mut()
            .append_pair("q", &self.query)
            .append_pair("sort", "mostrecent")
            .append_pair("size", &self.page_size.to_string());
        Ok(url.into())
    }

    async fn fetch_page(&self, url: &str) -> SourceResult<LiteraturePage> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SourceError::unexpected_status(status.as_u16(), super::snippet(&body)));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl SourceAdapter for InspireSource {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch(&self) -> SourceResult<Vec<Record>> {
        let mut records = Vec::new();
        let mut next = Some(self.first_page_url()?);
        let mut pages = 0;

        while let Some(url) = next {
            if pages >= self.max_pages {
                tracing::debug!(source = NAME, pages, "pagination cap reached");
                break;
            }

            let page = self.fetch_page(&url).await?;
            records.extend(page.hits.hits.into_iter().filter_map(parse_hit));

            next = match page.links.next.filter(|link| !link.is_empty()) {
                Some(link) => Some(with_page_size(&link, self.page_size)?),
                None => None,
            };
            pages += 1;
        }

        Ok(records)
    }
}

/// Force our page size onto a pagination link, whatever size it carries.
fn with_page_size(link: &str, size: usize) -> SourceResult<String> {
    let mut url = Url::parse(link)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "size")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("size", &size.to_string());
    }
    Ok(url.into())
}

/// Map one literature hit to a candidate record. Hits without a title are
/// dropped.
fn parse_hit(hit: Hit) -> Option<Record> {
    let md = hit.metadata;
    let title = md.titles.first().map(|entry| entry.title.clone()).unwrap_or_default();
    if title.is_empty() {
        return None;
    }

    let authors = md
        .authors
        .iter()
        .filter(|author| !author.full_name.is_empty())
        .take(api::MAX_AUTHORS)
        .map(|author| author.full_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let year = md
        .publication_info
        .first()
        .and_then(|info| info.year.as_ref().and_then(Year::as_i32))
        .or_else(|| year_from_date(md.preprint_date.as_deref()))
        .or_else(|| year_from_date(md.earliest_date.as_deref()));

    let arxiv = md.arxiv_eprints.first().filter(|eprint| !eprint.value.is_empty());

    let mut links = BTreeMap::new();
    if let Some(eprint) = arxiv {
        links.insert(labels::ARXIV.to_string(), format!("https://arxiv.org/abs/{}", eprint.value));
    }
    if let Some(doi) = md.dois.first().filter(|doi| !doi.value.is_empty()) {
        links.insert(labels::DOI.to_string(), format!("https://doi.org/{}", doi.value));
    }
    if let Some(self_url) = hit.links.self_url.filter(|link| !link.is_empty()) {
        links.insert(labels::INSPIRE.to_string(), self_url.replace("/api/", "/"));
    }

    let venue = match md.publication_info.first() {
        Some(info) if info.journal_title.as_deref().is_some_and(|journal| !journal.is_empty()) => {
            format_venue(info, year)
        }
        _ => arxiv.map(|eprint| format!("arXiv:{}", eprint.value)).unwrap_or_default(),
    };

    Some(Record { year, title, authors, venue, links, origin: NAME })
}

/// Assemble `"<journal> <volume>, <page> (<year>)"`, skipping absent pieces.
fn format_venue(info: &PublicationInfo, year: Option<i32>) -> String {
    let mut venue = info.journal_title.clone().unwrap_or_default();
    if let Some(volume) = info.journal_volume.as_deref().filter(|volume| !volume.is_empty()) {
        venue.push(' ');
        venue.push_str(volume);
    }
    let page = info
        .page_start
        .as_deref()
        .filter(|page| !page.is_empty())
        .or_else(|| info.artid.as_deref().filter(|artid| !artid.is_empty()));
    if let Some(page) = page {
        venue.push_str(", ");
        venue.push_str(page);
    }
    if let Some(year) = year {
        venue.push_str(&format!(" ({year})"));
    }
    venue
}

/// First four digits of an ISO-ish date string ("2024-01-15" -> 2024).
fn year_from_date(date: Option<&str>) -> Option<i32> {
    let date = date?;
    if date.len() >= 4 && date.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
        date[..4].parse().ok()
    } else {
        None
    }
}

// Wire shapes, restricted to the fields the adapter reads. Everything is
// defaulted: INSPIRE metadata is sparse and records routinely omit blocks.

#[derive(Debug, Default, Deserialize)]
struct LiteraturePage {
    #[serde(default)]
    hits: Hits,
    #[serde(default)]
    links: PageLinks,
}

#[derive(Debug, Default, Deserialize)]
struct Hits {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Default, Deserialize)]
struct PageLinks {
    #[serde(default)]
    next: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Hit {
    #[serde(default)]
    metadata: Metadata,
    #[serde(default)]
    links: HitLinks,
}

#[derive(Debug, Default, Deserialize)]
struct HitLinks {
    #[serde(default, rename = "self")]
    self_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    #[serde(default)]
    titles: Vec<TitleEntry>,
    #[serde(default)]
    authors: Vec<AuthorEntry>,
    #[serde(default)]
    publication_info: Vec<PublicationInfo>,
    #[serde(default)]
    preprint_date: Option<String>,
    #[serde(default)]
    earliest_date: Option<String>,
    #[serde(default)]
    arxiv_eprints: Vec<ValueEntry>,
    #[serde(default)]
    dois: Vec<ValueEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct TitleEntry {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct AuthorEntry {
    #[serde(default)]
    full_name: String,
}

#[derive(Debug, Default, Deserialize)]
struct PublicationInfo {
    #[serde(default)]
    year: Option<Year>,
    #[serde(default)]
    journal_title: Option<String>,
    #[serde(default)]
    journal_volume: Option<String>,
    #[serde(default)]
    page_start: Option<String>,
    #[serde(default)]
    artid: Option<String>,
}

/// INSPIRE reports the year as an integer on most records and as a digit
/// string on some older ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Year {
    Number(i32),
    Text(String),
}

impl Year {
    fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Number(year) => Some(*year),
            Self::Text(text) => text.parse().ok(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ValueEntry {
    #[serde(default)]
    value: String,
}
