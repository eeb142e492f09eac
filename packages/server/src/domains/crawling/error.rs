use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Platform belum didukung: {0}")]
    UnsupportedPlatform(String),

    #[error("Crawl provider request failed: {0}")]
    Provider(#[from] anyhow::Error),
}

pub type CrawlResult<T> = std::result::Result<T, CrawlError>;
