use super::error::ApiError;
use crate::application::index_articles::IndexSummary;
use crate::application::query_articles::QueryResponse;
use crate::domain::entities::article::ArticleRecord;
use crate::FinBrief;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub articles: Vec<ArticleRecord>,
}

pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Retriever Agent is running".to_string(),
    })
}

pub async fn index_articles(State(app): State<Arc<FinBrief>>) -> Result<Json<IndexSummary>, ApiError> {
    Ok(Json(app.index_articles().await?))
}

pub async fn query_articles(
    State(app): State<Arc<FinBrief>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<QueryResponse>, ApiError> {
    Ok(Json(app.query_articles(&params.q).await?))
}

pub async fn scrape_market_news(State(app): State<Arc<FinBrief>>) -> Result<Json<ScrapeResponse>, ApiError> {
    let articles = app.scrape_market_news().await?;
    Ok(Json(ScrapeResponse { articles }))
}
