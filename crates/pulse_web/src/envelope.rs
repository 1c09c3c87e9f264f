use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use pulse_core::Error;
use pulse_scraper::AnalysisReport;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub total_articles: usize,
    pub total_keywords: usize,
    pub total_trends: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    pub success: bool,
    pub url: String,
    pub timestamp: String,
    pub data: AnalysisReport,
    pub stats: Stats,
}

impl SuccessEnvelope {
    pub fn new(url: impl Into<String>, data: AnalysisReport) -> Self {
        let stats = Stats {
            total_articles: data.articles.len(),
            total_keywords: data.keywords.len(),
            total_trends: data.trends.len(),
        };
        Self {
            success: true,
            url: url.into(),
            timestamp: timestamp(),
            data,
            stats,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Welcome {
    pub success: bool,
    pub message: String,
}

impl Default for Welcome {
    fn default() -> Self {
        Self {
            success: true,
            message: "Welcome to the API".to_string(),
        }
    }
}

/// Any analysis failure, rendered as a 400 error envelope.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "request failed");
        let body = ErrorEnvelope {
            success: false,
            error: self.0.public_message(),
            timestamp: timestamp(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
