//! Crawling domain - Instagram comment crawls run by the remote actor

pub mod activities;
pub mod error;
pub mod models;

pub use activities::{get_all_records, get_page, get_status, start_job, EXPORT_RECORD_CAP};
pub use error::{CrawlError, CrawlResult};
pub use models::{
    parse_comment_limit, CrawlJob, JobStatus, Platform, ResultRecord, StatusReport,
    DEFAULT_COMMENT_LIMIT,
};
