//! Models Module - Data Structures & Configuration
//!
//! Domain types, server configuration and the application error type.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
