use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use pulse_core::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod envelope;
pub mod handlers;
pub mod state;

pub use envelope::{ErrorEnvelope, Stats, SuccessEnvelope};
pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::welcome))
        .route(
            "/api/news-scraper",
            get(handlers::scrape_get).post(handlers::scrape_post),
        )
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState};
    pub use pulse_core::{Error, Result};
}
