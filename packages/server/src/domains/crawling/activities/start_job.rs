//! Start a crawl job on the provider.

use tracing::info;

use crate::domains::crawling::models::{CrawlJob, Platform};
use crate::domains::crawling::CrawlResult;
use crate::kernel::ServerDeps;

/// Start a comment crawl for one post.
///
/// Unsupported platforms are rejected before anything reaches the provider.
/// The run is started, not awaited; callers poll [`super::get_status`].
pub async fn start_job(
    platform: &str,
    url: &str,
    limit: u32,
    deps: &ServerDeps,
) -> CrawlResult<CrawlJob> {
    let platform: Platform = platform.parse()?;

    let run = deps.crawl_provider.start_comment_scrape(url, limit).await?;
    info!(run_id = %run.id, %platform, url, limit, status = %run.status, "Crawl job started");

    Ok(CrawlJob::from_run(run, platform, url.to_string(), limit))
}
