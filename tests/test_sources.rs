//! Article sources against a local stand-in for the upstream HTTP services.

mod common;

use axum::{http::StatusCode, routing::get, Json, Router};
use common::*;
use finbrief::domain::error::DomainError;
use finbrief::domain::ports::article_source::ArticleSource;
use finbrief::infrastructure::embeddings::hashing::HashingProvider;
use finbrief::infrastructure::feeds::newsdata::{NewsDataQuery, NewsDataSource};
use finbrief::infrastructure::feeds::scraper_agent::ScraperAgentSource;
use finbrief::FinBrief;
use serde_json::{json, Value};
use std::sync::Arc;

fn scraper_returning(body: Value) -> Router {
    Router::new().route(
        "/scrape_market_news",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    )
}

#[tokio::test]
async fn test_scraper_source_parses_articles() {
    let url = spawn(scraper_returning(json!({
        "articles": [
            {"title": "Stocks rally", "link": "http://x/1"},
            {"title": "Stocks fall", "link": "http://x/2"}
        ]
    })))
    .await;

    let articles = ScraperAgentSource::new(url).fetch().await.unwrap();
    assert_eq!(articles, rally_and_fall());
}

#[tokio::test]
async fn test_scraper_source_rejects_malformed_payload() {
    let url = spawn(scraper_returning(json!({"items": []}))).await;
    let err = ScraperAgentSource::new(url).fetch().await.unwrap_err();
    assert!(matches!(err, DomainError::Fetch(_)));
}

#[tokio::test]
async fn test_scraper_source_rejects_error_status() {
    let router = Router::new().route(
        "/scrape_market_news",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let url = spawn(router).await;
    let err = ScraperAgentSource::new(url).fetch().await.unwrap_err();
    assert!(matches!(err, DomainError::Fetch(_)));
}

#[tokio::test]
async fn test_scraper_source_unreachable() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = ScraperAgentSource::new(format!("http://{addr}"))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Fetch(_)));
}

#[tokio::test]
async fn test_index_through_scraper() {
    let url = spawn(scraper_returning(json!({
        "articles": [
            {"title": "Stocks rally", "link": "http://x/1"},
            {"title": "Stocks fall", "link": "http://x/2"}
        ]
    })))
    .await;

    let fb = FinBrief::with_providers(
        Arc::new(ScraperAgentSource::new(url)),
        Arc::new(HashingProvider::default()),
        3,
    )
    .unwrap();
    let summary = fb.index_articles().await.unwrap();
    assert_eq!(summary.message, "Indexed 2 articles.");

    let resp = fb.query_articles("Stocks rally").await.unwrap();
    assert_eq!(resp.results[0], article("Stocks rally", "http://x/1"));
}

#[tokio::test]
async fn test_newsdata_source_caps_batch() {
    let results: Vec<Value> = (0..7)
        .map(|i| json!({"title": format!("Headline {i}"), "link": format!("http://n/{i}")}))
        .collect();
    let router = Router::new().route(
        "/api/1/news",
        get(move || {
            let body = json!({"status": "success", "totalResults": 7, "results": results.clone()});
            async move { Json(body) }
        }),
    );
    let url = spawn(router).await;

    let source = NewsDataSource::new("test-key".into(), NewsDataQuery::default(), 5)
        .unwrap()
        .with_base_url(url);
    let articles = source.fetch().await.unwrap();
    assert_eq!(articles.len(), 5);
    assert_eq!(articles[0], article("Headline 0", "http://n/0"));
}

#[tokio::test]
async fn test_newsdata_error_status() {
    let router = Router::new().route(
        "/api/1/news",
        get(|| async {
            Json(json!({"status": "error", "results": {"message": "API key invalid"}}))
        }),
    );
    let url = spawn(router).await;

    let source = NewsDataSource::new("bad-key".into(), NewsDataQuery::default(), 5)
        .unwrap()
        .with_base_url(url);
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, DomainError::Fetch(_)));
}
