//! Poll a crawl job.

use tracing::debug;

use crate::domains::crawling::models::{JobStatus, StatusReport};
use crate::domains::crawling::CrawlResult;
use crate::kernel::ServerDeps;

/// Re-fetch the run and, once it succeeded, its dataset size.
pub async fn get_status(job_id: &str, deps: &ServerDeps) -> CrawlResult<StatusReport> {
    let run = deps.crawl_provider.get_run(job_id).await?;
    let status = JobStatus::new(run.status);

    let item_count = match (&run.default_dataset_id, status.is_succeeded()) {
        (Some(dataset_id), true) => deps.crawl_provider.dataset_item_count(dataset_id).await?,
        _ => 0,
    };

    debug!(run_id = job_id, %status, item_count, "Crawl job polled");
    Ok(StatusReport { status, item_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::crawling::CrawlError;
    use crate::kernel::test_dependencies::comments;
    use crate::kernel::MockCrawlProvider;

    #[tokio::test]
    async fn test_running_job_reports_zero_items() {
        let deps = MockCrawlProvider::new()
            .with_run("run-a", "RUNNING", Some("ds-a"))
            .with_dataset("ds-a", comments(4))
            .into_deps();

        let report = get_status("run-a", &deps).await.unwrap();
        assert_eq!(report.status.as_str(), "RUNNING");
        assert_eq!(report.item_count, 0);
    }

    #[tokio::test]
    async fn test_succeeded_job_counts_dataset() {
        let deps = MockCrawlProvider::new()
            .with_run("run-a", "SUCCEEDED", Some("ds-a"))
            .with_dataset("ds-a", comments(4))
            .into_deps();

        let report = get_status("run-a", &deps).await.unwrap();
        assert!(report.status.is_succeeded());
        assert_eq!(report.item_count, 4);
    }

    #[tokio::test]
    async fn test_succeeded_without_dataset_reports_zero() {
        let deps = MockCrawlProvider::new()
            .with_run("run-a", "SUCCEEDED", None)
            .into_deps();

        let report = get_status("run-a", &deps).await.unwrap();
        assert_eq!(report.item_count, 0);
    }

    #[tokio::test]
    async fn test_failed_status_passes_through() {
        let deps = MockCrawlProvider::new()
            .with_run("run-a", "FAILED", Some("ds-a"))
            .into_deps();

        let report = get_status("run-a", &deps).await.unwrap();
        assert_eq!(report.status.as_str(), "FAILED");
        assert!(report.status.is_terminal());
    }

    #[tokio::test]
    async fn test_unknown_job_is_provider_error() {
        let deps = MockCrawlProvider::new().into_deps();
        let result = get_status("missing", &deps).await;
        assert!(matches!(result, Err(CrawlError::Provider(_))));
    }
}
