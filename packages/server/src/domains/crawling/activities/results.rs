//! Read crawl results from the job's dataset.

use tracing::debug;

use crate::common::PageWindow;
use crate::domains::crawling::models::ResultRecord;
use crate::domains::crawling::CrawlResult;
use crate::kernel::ServerDeps;

/// Upper bound on records pulled for a single export.
pub const EXPORT_RECORD_CAP: u64 = 5000;

/// One page of records plus the dataset's total item count.
///
/// A job without a dataset yields `([], 0)` for every page. Pages past the
/// end come back empty from the provider.
pub async fn get_page(
    job_id: &str,
    window: PageWindow,
    deps: &ServerDeps,
) -> CrawlResult<(Vec<ResultRecord>, u64)> {
    let run = deps.crawl_provider.get_run(job_id).await?;
    let Some(dataset_id) = run.default_dataset_id else {
        return Ok((Vec::new(), 0));
    };

    let items = deps
        .crawl_provider
        .list_comments(&dataset_id, window.offset(), window.limit())
        .await?;
    let total_items = deps.crawl_provider.dataset_item_count(&dataset_id).await?;

    debug!(
        run_id = job_id,
        dataset_id = %dataset_id,
        page = window.page,
        count = items.len(),
        total_items,
        "Fetched result page"
    );

    Ok((items.into_iter().map(ResultRecord::from).collect(), total_items))
}

/// Up to `cap` records in a single request, for export.
pub async fn get_all_records(
    job_id: &str,
    cap: u64,
    deps: &ServerDeps,
) -> CrawlResult<Vec<ResultRecord>> {
    let run = deps.crawl_provider.get_run(job_id).await?;
    let Some(dataset_id) = run.default_dataset_id else {
        return Ok(Vec::new());
    };

    let items = deps.crawl_provider.list_comments(&dataset_id, 0, cap).await?;
    debug!(run_id = job_id, dataset_id = %dataset_id, count = items.len(), "Fetched all results");

    Ok(items.into_iter().map(ResultRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{comments, ListCallArgs};
    use crate::kernel::MockCrawlProvider;

    fn mock_with_items(count: usize) -> MockCrawlProvider {
        MockCrawlProvider::new()
            .with_run("run-a", "SUCCEEDED", Some("ds-a"))
            .with_dataset("ds-a", comments(count))
    }

    #[tokio::test]
    async fn test_no_dataset_is_empty_for_any_page() {
        let mock = MockCrawlProvider::new().with_run("run-a", "RUNNING", None);
        let deps = mock.clone().into_deps();

        for page in [-1, 0, 1, 2, 100] {
            let (records, total) = get_page("run-a", PageWindow::new(page, 10), &deps)
                .await
                .unwrap();
            assert!(records.is_empty());
            assert_eq!(total, 0);
        }
        assert!(mock.list_calls().is_empty());
    }

    #[tokio::test]
    async fn test_second_page_uses_offset() {
        let mock = mock_with_items(25);
        let deps = mock.clone().into_deps();

        let (records, total) = get_page("run-a", PageWindow::new(2, 10), &deps)
            .await
            .unwrap();

        assert_eq!(total, 25);
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].username.as_deref(), Some("user10"));
        assert_eq!(
            mock.list_calls(),
            vec![ListCallArgs {
                dataset_id: "ds-a".into(),
                offset: 10,
                limit: 10,
            }]
        );
    }

    #[tokio::test]
    async fn test_last_partial_page() {
        let deps = mock_with_items(25).into_deps();
        let (records, _) = get_page("run-a", PageWindow::new(3, 10), &deps)
            .await
            .unwrap();
        assert_eq!(records.len(), 5);
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_empty_not_error() {
        let deps = mock_with_items(25).into_deps();
        let (records, total) = get_page("run-a", PageWindow::new(9, 10), &deps)
            .await
            .unwrap();
        assert!(records.is_empty());
        assert_eq!(total, 25);
    }

    #[tokio::test]
    async fn test_all_records_single_capped_request() {
        let mock = mock_with_items(30);
        let deps = mock.clone().into_deps();

        let records = get_all_records("run-a", 20, &deps).await.unwrap();

        assert_eq!(records.len(), 20);
        assert_eq!(mock.list_calls().len(), 1);
        assert_eq!(mock.list_calls()[0].offset, 0);
        assert_eq!(mock.list_calls()[0].limit, 20);
    }

    #[tokio::test]
    async fn test_all_records_without_dataset() {
        let deps = MockCrawlProvider::new()
            .with_run("run-a", "FAILED", None)
            .into_deps();
        let records = get_all_records("run-a", EXPORT_RECORD_CAP, &deps)
            .await
            .unwrap();
        assert!(records.is_empty());
    }
}
