//! API Module
//!
//! HTTP handlers and routing that expose a `TimedCache` over HTTP.
//!
//! # Endpoints
//! - `PUT /entries?key=...` - Store a payload
//! - `GET /entries?key=...` - Retrieve a payload
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
