//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A stored payload together with the instant it was inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, returned as-is
    pub value: Bytes,
    /// Insertion instant
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self::created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit creation instant.
    pub fn created_at(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Is Stale ==
    /// Checks whether the entry was created strictly before `now - ttl`.
    ///
    /// An entry aged exactly `ttl` is still fresh. Entries created after
    /// `now` (possible when `now` was captured before a concurrent insert)
    /// are never stale.
    pub fn is_stale(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }

    // == Age ==
    /// Time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
