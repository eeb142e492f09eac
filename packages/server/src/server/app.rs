//! Application setup and server configuration.

use std::sync::Arc;

use apify_client::ApifyClient;
use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{ApifyAdapter, ServerDeps};
use crate::server::routes::{
    crawl_data, crawl_result, crawl_status, crawling_page, download_excel, health_handler,
    start_crawl,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub server_deps: Arc<ServerDeps>,
}

/// Build the provider-backed dependencies from configuration.
///
/// The provider client and its credential are created once here and shared
/// read-only by every request.
pub fn build_deps(config: &Config) -> ServerDeps {
    let client = Arc::new(ApifyClient::with_base_url(
        config.apify_token.clone(),
        config.apify_base_url.clone(),
    ));
    let adapter = ApifyAdapter::new(client, config.instagram_actor_id.clone());
    ServerDeps::new(Arc::new(adapter))
}

/// Build the Axum application router
pub fn build_app(server_deps: ServerDeps) -> Router {
    let app_state = AxumAppState {
        server_deps: Arc::new(server_deps),
    };

    Router::new()
        .route("/crawling", get(crawling_page))
        .route("/crawl/start", post(start_crawl))
        .route("/crawl/status/:job_id", get(crawl_status))
        .route("/crawl/result/:job_id", get(crawl_result))
        .route("/crawl/data/:job_id", get(crawl_data))
        .route("/crawl/download/:job_id", get(download_excel))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
}
