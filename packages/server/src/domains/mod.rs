// Domain modules
pub mod crawling;
pub mod export;
