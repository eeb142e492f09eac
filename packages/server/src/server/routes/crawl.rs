//! Crawl routes.
//!
//! GET  /crawling                  - crawl form
//! POST /crawl/start               - start a job, render the polling page
//! GET  /crawl/status/:job_id      - JSON status for polling
//! GET  /crawl/result/:job_id      - paginated result page
//! GET  /crawl/data/:job_id        - first result page as JSON
//! GET  /crawl/download/:job_id    - spreadsheet export

use axum::{
    body::Body,
    extract::{Extension, Form, Path, Query},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::common::{PageInfo, PageWindow, DEFAULT_PAGE_SIZE};
use crate::domains::crawling::{
    self, parse_comment_limit, CrawlError, ResultRecord, StatusReport, EXPORT_RECORD_CAP,
};
use crate::domains::export::{self, DOWNLOAD_FILE_NAME, XLSX_CONTENT_TYPE};
use crate::server::app::AxumAppState;
use crate::server::routes::ApiError;
use crate::server::views::{
    render_crawling_page, CrawlingView, ResultsView, UNSUPPORTED_PLATFORM_MESSAGE,
};

#[derive(Debug, Deserialize)]
pub struct StartCrawlForm {
    platform: Option<String>,
    url: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResultQuery {
    page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CrawlDataResponse {
    items: Vec<ResultRecord>,
    total_items: u64,
}

pub async fn crawling_page() -> Html<String> {
    Html(render_crawling_page(&CrawlingView::default()))
}

/// Start a crawl. Unsupported platforms re-render the form with an inline error.
pub async fn start_crawl(
    Extension(state): Extension<AxumAppState>,
    Form(form): Form<StartCrawlForm>,
) -> Result<Html<String>, ApiError> {
    let platform = form.platform.unwrap_or_default();
    let url = form.url.unwrap_or_default();
    let limit = parse_comment_limit(form.limit.as_deref());

    match crawling::start_job(&platform, &url, limit, &state.server_deps).await {
        Ok(job) => Ok(Html(render_crawling_page(&CrawlingView {
            running: Some((job.id.as_str(), job.platform)),
            ..Default::default()
        }))),
        Err(CrawlError::UnsupportedPlatform(platform)) => {
            info!(%platform, "Rejected crawl for unsupported platform");
            Ok(Html(render_crawling_page(&CrawlingView {
                error: Some(UNSUPPORTED_PLATFORM_MESSAGE),
                ..Default::default()
            })))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn crawl_status(
    Extension(state): Extension<AxumAppState>,
    Path(job_id): Path<String>,
) -> Result<Json<StatusReport>, ApiError> {
    let report = crawling::get_status(&job_id, &state.server_deps).await?;
    Ok(Json(report))
}

/// Render one page of results. A missing or unparseable `page` means page 1.
pub async fn crawl_result(
    Extension(state): Extension<AxumAppState>,
    Path(job_id): Path<String>,
    Query(query): Query<ResultQuery>,
) -> Result<Html<String>, ApiError> {
    let page = query
        .page
        .as_deref()
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(1);
    let window = PageWindow::new(page, DEFAULT_PAGE_SIZE);

    let (records, total_items) = crawling::get_page(&job_id, window, &state.server_deps).await?;

    Ok(Html(render_crawling_page(&CrawlingView {
        results: Some(ResultsView {
            job_id: &job_id,
            records: &records,
            page_info: PageInfo::new(window, total_items),
        }),
        ..Default::default()
    })))
}

/// First page of results as JSON. Always page 1 with the default page size.
pub async fn crawl_data(
    Extension(state): Extension<AxumAppState>,
    Path(job_id): Path<String>,
) -> Result<Json<CrawlDataResponse>, ApiError> {
    let (items, total_items) =
        crawling::get_page(&job_id, PageWindow::first(), &state.server_deps).await?;
    Ok(Json(CrawlDataResponse { items, total_items }))
}

/// Spreadsheet download of up to [`EXPORT_RECORD_CAP`] records.
pub async fn download_excel(
    Extension(state): Extension<AxumAppState>,
    Path(job_id): Path<String>,
) -> Result<Response, ApiError> {
    let records =
        crawling::get_all_records(&job_id, EXPORT_RECORD_CAP, &state.server_deps).await?;
    let export = export::to_spreadsheet(&records)?;
    info!(run_id = %job_id, rows = export.rows(), "Serving spreadsheet export");

    let stream = export
        .into_stream()
        .await
        .map_err(export::ExportError::from)?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
            ),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}
