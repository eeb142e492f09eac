//! Server dependencies (using traits for testability)
//!
//! This module provides the central dependency container handed to the
//! crawling domain and the HTTP handlers. It is built once at startup and
//! shared read-only behind an `Arc`.

use anyhow::Result;
use apify_client::{ApifyClient, InstagramComment, RunData};
use async_trait::async_trait;
use std::sync::Arc;

use crate::kernel::BaseCrawlProvider;

// =============================================================================
// ApifyClient Adapter (implements BaseCrawlProvider trait)
// =============================================================================

/// Wrapper around ApifyClient bound to the comment scraper actor
pub struct ApifyAdapter {
    client: Arc<ApifyClient>,
    actor_id: String,
}

impl ApifyAdapter {
    pub fn new(client: Arc<ApifyClient>, actor_id: String) -> Self {
        Self { client, actor_id }
    }
}

#[async_trait]
impl BaseCrawlProvider for ApifyAdapter {
    async fn start_comment_scrape(&self, post_url: &str, max_comments: u32) -> Result<RunData> {
        Ok(self
            .client
            .start_instagram_comment_scrape(&self.actor_id, post_url, max_comments)
            .await?)
    }

    async fn get_run(&self, run_id: &str) -> Result<RunData> {
        Ok(self.client.get_run(run_id).await?)
    }

    async fn dataset_item_count(&self, dataset_id: &str) -> Result<u64> {
        Ok(self.client.get_dataset(dataset_id).await?.item_count)
    }

    async fn list_comments(
        &self,
        dataset_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<InstagramComment>> {
        Ok(self
            .client
            .list_dataset_items(dataset_id, offset, limit)
            .await?)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub crawl_provider: Arc<dyn BaseCrawlProvider>,
}

impl ServerDeps {
    pub fn new(crawl_provider: Arc<dyn BaseCrawlProvider>) -> Self {
        Self { crawl_provider }
    }
}
