use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for the Instagram comment scraper actor.
#[derive(Debug, Clone, Serialize)]
pub struct InstagramCommentInput {
    #[serde(rename = "postUrls")]
    pub post_urls: Vec<String>,
    #[serde(rename = "maxCommentsPerPost")]
    pub max_comments_per_post: u32,
}

/// A single comment from the Instagram comment scraper dataset.
///
/// Every field is optional: the actor omits keys it could not scrape.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InstagramComment {
    pub id: Option<String>,
    #[serde(rename = "postUrl")]
    pub post_url: Option<String>,
    #[serde(rename = "ownerUsername")]
    pub owner_username: Option<String>,
    pub text: Option<String>,
    /// Raw value as emitted by the actor (epoch seconds or an ISO string).
    pub timestamp: Option<serde_json::Value>,
    #[serde(rename = "likesCount")]
    pub likes_count: Option<i64>,
}

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: Option<String>,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Apify dataset metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetInfo {
    pub id: String,
    #[serde(rename = "itemCount", default)]
    pub item_count: u64,
}
