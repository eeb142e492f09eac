use apify_client::InstagramComment;
use serde::Serialize;

use super::crawl_job::Platform;

/// One scraped comment, ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub platform: &'static str,
    pub post_url: Option<String>,
    pub username: Option<String>,
    pub comment: Option<String>,
    /// Unformatted provider value
    pub created_at: Option<serde_json::Value>,
}

impl ResultRecord {
    /// Raw timestamp as spreadsheet text. Strings are written verbatim.
    pub fn created_at_text(&self) -> Option<String> {
        match &self.created_at {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

impl From<InstagramComment> for ResultRecord {
    fn from(comment: InstagramComment) -> Self {
        ResultRecord {
            platform: Platform::Instagram.display_name(),
            post_url: comment.post_url,
            username: comment.owner_username,
            comment: comment.text,
            created_at: comment.timestamp,
        }
    }
}
