//! Crawl job lifecycle: start, poll, read results.
//!
//! Stateless: every call re-fetches the run from the provider by id.

pub mod results;
pub mod start_job;
pub mod status;

pub use results::{get_all_records, get_page, EXPORT_RECORD_CAP};
pub use start_job::start_job;
pub use status::get_status;
