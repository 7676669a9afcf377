//! Cache Module
//!
//! Provides a thread-safe in-memory byte cache whose entries are removed by
//! a periodic background sweep once they outlive the configured TTL.

mod entry;
mod stats;
mod store;
mod timed;


use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use timed::TimedCache;

/// Locks a shared store.
///
/// A panic while the lock was held cannot leave the map half-updated, so a
/// poisoned lock is recovered instead of propagated.
pub(crate) fn lock_store(store: &Mutex<CacheStore>) -> MutexGuard<'_, CacheStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}
