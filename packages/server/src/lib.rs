// Instagram Comment Crawler - API Core
//
// Web front-end over a remote scraping actor: start a crawl, poll it,
// page through the results, export them to a spreadsheet.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
