// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The crawl job lifecycle lives in domains::crawling and talks to the
// provider exclusively through these traits.
//
// Naming convention: Base* for trait names (e.g., BaseCrawlProvider)

use anyhow::Result;
use apify_client::{InstagramComment, RunData};
use async_trait::async_trait;

// =============================================================================
// Crawl Provider Trait (Infrastructure - remote scraping jobs)
// =============================================================================

#[async_trait]
pub trait BaseCrawlProvider: Send + Sync {
    /// Start a comment scrape for one post. Returns as soon as the run exists.
    async fn start_comment_scrape(&self, post_url: &str, max_comments: u32) -> Result<RunData>;

    /// Fetch the current state of a run
    async fn get_run(&self, run_id: &str) -> Result<RunData>;

    /// Number of items stored in a dataset
    async fn dataset_item_count(&self, dataset_id: &str) -> Result<u64>;

    /// One offset/limit window of comments from a dataset
    async fn list_comments(
        &self,
        dataset_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<InstagramComment>>;
}
