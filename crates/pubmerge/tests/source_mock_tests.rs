//! Mock-based source adapter tests using wiremock.
//!
//! These verify actual wire behavior: query construction, pagination,
//! record mapping, and error surfacing.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pubmerge::config::Config;
use pubmerge::sources::{InspireSource, SemanticScholarSource, SourceAdapter};

/// Sample INSPIRE literature hit.
fn inspire_hit(title: &str, year: i32, arxiv: &str) -> serde_json::Value {
    json!({
        "metadata": {
            "titles": [{"title": title}],
            "authors": [{"full_name": "Doe, J."}],
            "publication_info": [{
                "year": year,
                "journal_title": "JHEP",
                "journal_volume": "05",
                "page_start": "001"
            }],
            "arxiv_eprints": [{"value": arxiv}],
            "dois": [{"value": format!("10.1007/{arxiv}")}]
        },
        "links": {"self": format!("https://inspirehep.net/api/literature/{arxiv}")}
    })
}

/// Sample Semantic Scholar paper.
fn s2_paper(id: &str, title: &str, year: i32) -> serde_json::Value {
    json!({
        "paperId": id,
        "title": title,
        "year": year,
        "venue": "Test Conference",
        "authors": [{"name": "J. Doe"}],
        "externalIds": {"DOI": format!("10.1234/{id}")}
    })
}

// =============================================================================
// InspireSource
// =============================================================================

#[tokio::test]
async fn test_inspire_fetches_and_maps_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/literature"))
        .and(query_param("q", "authors.id:1718074"))
        .and(query_param("sort", "mostrecent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": {"hits": [inspire_hit("Quantum X", 2020, "1912.01234")]},
            "links": {}
        })))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let source = InspireSource::new(&config, "1718074").unwrap();

    let records = source.fetch().await.unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.title, "Quantum X");
    assert_eq!(record.year, Some(2020));
    assert_eq!(record.venue, "JHEP 05, 001 (2020)");
    assert_eq!(record.link("arXiv"), Some("https://arxiv.org/abs/1912.01234"));
    assert_eq!(record.link("INSPIRE"), Some("https://inspirehep.net/literature/1912.01234"));
    assert_eq!(record.origin, "inspire");
}

#[tokio::test]
async fn test_inspire_bai_identifier_uses_author_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/literature"))
        .and(query_param("q", "a J.Doe.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": {"hits": [inspire_hit("T", 2021, "2101.00001")]},
            "links": {}
        })))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let source = InspireSource::new(&config, "J.Doe.1").unwrap();

    assert_eq!(source.fetch().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_inspire_follows_next_links_with_forced_page_size() {
    let mock_server = MockServer::start().await;

    let next = format!("{}/api/literature?q=authors.id%3A1&page=2&size=25", mock_server.uri());
    Mock::given(method("GET"))
        .and(path("/api/literature"))
        .and(query_param("sort", "mostrecent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": {"hits": [inspire_hit("First", 2020, "1")]},
            "links": {"next": next}
        })))
        .mount(&mock_server)
        .await;

    // The follow-up request carries the rewritten size, not the link's 25.
    Mock::given(method("GET"))
        .and(path("/api/literature"))
        .and(query_param("page", "2"))
        .and(query_param("size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": {"hits": [inspire_hit("Second", 2019, "2")]},
            "links": {}
        })))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let source = InspireSource::new(&config, "1").unwrap();

    let records = source.fetch().await.unwrap();
    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_inspire_empty_result_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/literature"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"hits": {"hits": []}, "links": {}})),
        )
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let source = InspireSource::new(&config, "1").unwrap();

    assert!(source.fetch().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_inspire_untitled_hits_are_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/literature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": {"hits": [
                {"metadata": {"arxiv_eprints": [{"value": "9999.00001"}]}},
                inspire_hit("Kept", 2022, "2201.00001")
            ]},
            "links": {}
        })))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let source = InspireSource::new(&config, "1").unwrap();

    let records = source.fetch().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Kept");
}

#[tokio::test]
async fn test_inspire_server_error_fails_the_source() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/literature"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let source = InspireSource::new(&config, "1").unwrap();

    let error = source.fetch().await.unwrap_err();
    assert!(error.to_string().contains("500"));
}

// =============================================================================
// SemanticScholarSource
// =============================================================================

#[tokio::test]
async fn test_s2_fetches_and_maps_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/12345/papers"))
        .and(query_param("fields", "title,year,venue,authors,externalIds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "data": [s2_paper("p1", "Quantum X", 2020)]
        })))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let source = SemanticScholarSource::new(&config, "12345").unwrap();

    let records = source.fetch().await.unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.title, "Quantum X");
    assert_eq!(record.authors, "J. Doe");
    assert_eq!(record.venue, "Test Conference");
    assert_eq!(record.link("DOI"), Some("https://doi.org/10.1234/p1"));
    assert_eq!(record.link("Semantic Scholar"), Some("https://www.semanticscholar.org/paper/p1"));
    assert_eq!(record.origin, "semantic-scholar");
}

#[tokio::test]
async fn test_s2_paginates_via_next_offset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/1/papers"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": 1,
            "data": [s2_paper("p1", "First", 2024)]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/1/papers"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "data": [s2_paper("p2", "Second", 2023)]
        })))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let source = SemanticScholarSource::new(&config, "1").unwrap();

    let records = source.fetch().await.unwrap();
    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_s2_untitled_papers_are_skipped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/1/papers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "data": [
                {"paperId": "ghost", "title": null},
                s2_paper("p1", "Kept", 2020)
            ]
        })))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let source = SemanticScholarSource::new(&config, "1").unwrap();

    let records = source.fetch().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Kept");
}

#[tokio::test]
async fn test_s2_error_status_fails_the_source() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/1/papers"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let source = SemanticScholarSource::new(&config, "1").unwrap();

    let error = source.fetch().await.unwrap_err();
    assert!(error.to_string().contains("429"));
}
