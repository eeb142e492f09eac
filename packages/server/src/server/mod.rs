// HTTP server setup (Axum)
pub mod app;
pub mod routes;
pub mod views;

pub use app::*;
