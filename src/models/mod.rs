//! Request and Response models for the cache API
//!
//! Cached payloads are raw bytes; these DTOs cover keys and JSON metadata.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::KeyQuery;
pub use responses::{AddResponse, HealthResponse, StatsResponse};
