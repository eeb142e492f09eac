pub mod crawl_job;
pub mod result_record;

pub use crawl_job::*;
pub use result_record::ResultRecord;
