//! Crawl job model - one actor run as observed from the provider.

use std::fmt;
use std::str::FromStr;

use apify_client::RunData;
use serde::Serialize;

use crate::domains::crawling::CrawlError;

/// Comment limit used when the form leaves it empty or unparseable.
pub const DEFAULT_COMMENT_LIMIT: u32 = 15;

/// Platforms a crawl can target. Only Instagram has an actor wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
}

impl Platform {
    /// Tag used in forms and URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
        }
    }

    /// Human-facing name written into exports
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CrawlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instagram" => Ok(Platform::Instagram),
            other => Err(CrawlError::UnsupportedPlatform(other.to_string())),
        }
    }
}

/// Coerce a raw form value into a comment limit.
///
/// Missing, unparseable, and non-positive values fall back to
/// [`DEFAULT_COMMENT_LIMIT`].
pub fn parse_comment_limit(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_COMMENT_LIMIT)
}

/// Provider-owned run status. Opaque: any string the provider returns is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JobStatus(String);

impl JobStatus {
    pub const SUCCEEDED: &'static str = "SUCCEEDED";

    pub fn new(status: impl Into<String>) -> Self {
        JobStatus(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_succeeded(&self) -> bool {
        self.0 == Self::SUCCEEDED
    }

    /// No further transitions will be observed
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.0.as_str(),
            "SUCCEEDED" | "FAILED" | "TIMED-OUT" | "ABORTED"
        )
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A crawl job as returned by the provider when it was started.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlJob {
    pub id: String,
    pub platform: Platform,
    pub url: String,
    pub limit: u32,
    pub status: JobStatus,
    pub dataset_id: Option<String>,
}

impl CrawlJob {
    pub fn from_run(run: RunData, platform: Platform, url: String, limit: u32) -> Self {
        CrawlJob {
            id: run.id,
            platform,
            url,
            limit,
            status: JobStatus::new(run.status),
            dataset_id: run.default_dataset_id,
        }
    }
}

/// Polling answer for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub status: JobStatus,
    pub item_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_instagram_is_supported() {
        assert_eq!("instagram".parse::<Platform>().unwrap(), Platform::Instagram);

        for other in ["facebook", "tiktok", "Instagram", "", " instagram"] {
            let err = other.parse::<Platform>().unwrap_err();
            assert!(matches!(err, CrawlError::UnsupportedPlatform(ref p) if p == other));
        }
    }

    #[test]
    fn test_comment_limit_defaults() {
        assert_eq!(parse_comment_limit(None), 15);
        assert_eq!(parse_comment_limit(Some("")), 15);
        assert_eq!(parse_comment_limit(Some("abc")), 15);
        assert_eq!(parse_comment_limit(Some("0")), 15);
        assert_eq!(parse_comment_limit(Some("-3")), 15);
        assert_eq!(parse_comment_limit(Some("40")), 40);
        assert_eq!(parse_comment_limit(Some(" 7 ")), 7);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(JobStatus::new("SUCCEEDED").is_terminal());
        assert!(JobStatus::new("FAILED").is_terminal());
        assert!(JobStatus::new("ABORTED").is_terminal());
        assert!(!JobStatus::new("RUNNING").is_terminal());
        assert!(!JobStatus::new("READY").is_terminal());
        assert!(!JobStatus::new("something-new").is_succeeded());
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        let report = StatusReport {
            status: JobStatus::new("RUNNING"),
            item_count: 0,
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"status": "RUNNING", "item_count": 0})
        );
    }
}
