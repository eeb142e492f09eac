//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ApifyAdapter, ServerDeps};
pub use test_dependencies::MockCrawlProvider;
pub use traits::*;
