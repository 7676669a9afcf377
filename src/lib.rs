//! pokecache - A thread-safe in-memory byte cache
//!
//! Stores response payloads under string keys (typically request URLs) and
//! drops them once they outlive a fixed TTL, using a single periodic reaper
//! task instead of per-entry timers.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::TimedCache;
pub use config::Config;
pub use error::{CacheError, Result};
