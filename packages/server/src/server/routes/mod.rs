// HTTP routes
pub mod crawl;
pub mod error;
pub mod health;

pub use crawl::*;
pub use error::ApiError;
pub use health::*;
