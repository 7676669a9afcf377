//! Background Tasks Module
//!
//! # Tasks
//! - TTL Reaper: removes stale cache entries on a fixed schedule

mod reaper;

pub use reaper::spawn_reaper;
