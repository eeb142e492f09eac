//! Pure Apify REST API client.
//!
//! A minimal client for the Apify platform API. Supports starting actor runs,
//! reading run status, and paging through dataset results.
//!
//! # Example
//!
//! ```rust,ignore
//! use apify_client::ApifyClient;
//!
//! let client = ApifyClient::new("your-api-token".into());
//!
//! let run = client
//!     .start_instagram_comment_scrape("499mNnuVGkU2S5rh1", "https://www.instagram.com/p/abc/", 15)
//!     .await?;
//! let run = client.get_run(&run.id).await?;
//! println!("{}", run.status);
//! ```

pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{DatasetInfo, InstagramComment, InstagramCommentInput, RunData};

use serde::de::DeserializeOwned;
use serde::Serialize;
use types::ApiResponse;

pub const DEFAULT_BASE_URL: &str = "https://api.apify.com/v2";

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different API root (proxies, local fakes).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Start an actor run with arbitrary input. Returns immediately with run metadata.
    pub async fn start_run<I: Serialize + ?Sized>(
        &self,
        actor_id: &str,
        input: &I,
    ) -> Result<RunData> {
        let url = format!("{}/acts/{}/runs", self.base_url, actor_id);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        let resp = ensure_success(resp).await?;
        let api_resp: ApiResponse<RunData> = resp.json().await?;
        tracing::debug!(actor_id, run_id = %api_resp.data.id, "Apify run started");
        Ok(api_resp.data)
    }

    /// Start an Instagram comment scrape for a single post.
    pub async fn start_instagram_comment_scrape(
        &self,
        actor_id: &str,
        post_url: &str,
        max_comments: u32,
    ) -> Result<RunData> {
        let input = InstagramCommentInput {
            post_urls: vec![post_url.to_string()],
            max_comments_per_post: max_comments,
        };
        self.start_run(actor_id, &input).await
    }

    /// Fetch current run metadata. Does not wait for the run to finish.
    pub async fn get_run(&self, run_id: &str) -> Result<RunData> {
        let url = format!("{}/actor-runs/{}", self.base_url, run_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let resp = ensure_success(resp).await?;
        let api_resp: ApiResponse<RunData> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Fetch dataset metadata, including the item count.
    pub async fn get_dataset(&self, dataset_id: &str) -> Result<DatasetInfo> {
        let url = format!("{}/datasets/{}", self.base_url, dataset_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let resp = ensure_success(resp).await?;
        let api_resp: ApiResponse<DatasetInfo> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Fetch one window of dataset items.
    pub async fn list_dataset_items<T: DeserializeOwned>(
        &self,
        dataset_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<T>> {
        let url = format!(
            "{}/datasets/{}/items?format=json&offset={}&limit={}",
            self.base_url, dataset_id, offset, limit
        );
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let resp = ensure_success(resp).await?;
        let items: Vec<T> = resp.json().await?;
        tracing::debug!(dataset_id, offset, limit, count = items.len(), "Fetched dataset items");
        Ok(items)
    }
}

async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ApifyError::Api {
        status: status.as_u16(),
        message: body,
    })
}
