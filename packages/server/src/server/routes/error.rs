//! Mapping from domain errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domains::crawling::CrawlError;
use crate::domains::export::ExportError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Crawl(#[from] CrawlError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Crawl(CrawlError::UnsupportedPlatform(platform)) => (
                StatusCode::BAD_REQUEST,
                format!("Platform belum didukung: {}", platform),
            )
                .into_response(),
            ApiError::Crawl(CrawlError::Provider(e)) => {
                tracing::error!(error = %e, "Crawl provider request failed");
                (StatusCode::BAD_GATEWAY, "Crawl provider request failed").into_response()
            }
            ApiError::Export(ExportError::EmptyInput) => {
                (StatusCode::BAD_REQUEST, "No data").into_response()
            }
            ApiError::Export(e) => {
                tracing::error!(error = %e, "Export failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Export failed").into_response()
            }
        }
    }
}
