use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use pulse_core::Error;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::envelope::{ApiError, SuccessEnvelope, Welcome};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UrlParams {
    pub url: Option<String>,
}

pub async fn welcome() -> Json<Welcome> {
    Json(Welcome::default())
}

pub async fn scrape_get(
    State(state): State<Arc<AppState>>,
    params: Option<Query<UrlParams>>,
) -> Result<Json<SuccessEnvelope>, ApiError> {
    let url = params.and_then(|Query(p)| p.url);
    analyze(&state, url).await
}

/// The body is read leniently: anything that is not a JSON object with a
/// `url` member counts as a missing URL.
pub async fn scrape_post(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SuccessEnvelope>, ApiError> {
    analyze(&state, url_from_body(&body)).await
}

fn url_from_body(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("url")? {
        Value::Null => None,
        Value::String(url) => Some(url.clone()),
        other => Some(other.to_string()),
    }
}

async fn analyze(state: &AppState, url: Option<String>) -> Result<Json<SuccessEnvelope>, ApiError> {
    let url = url.filter(|u| !u.trim().is_empty()).ok_or(Error::MissingUrl)?;
    info!(url = %url, "analyzing");
    let report = state.analyzer.analyze_url(&url).await?;
    Ok(Json(SuccessEnvelope::new(url, report)))
}
