//! Store Audit HTTP Module
//! HTML page flow and JSON API over the audit scorer

pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
