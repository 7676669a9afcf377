//! Timed Cache Module
//!
//! The public cache: a mutex-guarded `CacheStore` plus the reaper task that
//! sweeps it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{lock_store, CacheStats, CacheStore};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper;

// == Timed Cache ==
/// Thread-safe byte cache with a fixed TTL.
///
/// `add` and `get` take the same lock as the reaper's sweep and hold it only
/// for the map operation itself. Entries stay readable until a sweep removes
/// them, so an entry lives between `ttl` and `ttl + reap_interval` after
/// insertion.
///
/// The reaper stops when [`TimedCache::shutdown`] is awaited or when the
/// cache is dropped.
#[derive(Debug)]
pub struct TimedCache {
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
    reap_interval: Duration,
    shutdown_tx: mpsc::Sender<()>,
    reaper: JoinHandle<()>,
}

impl TimedCache {
    // == Constructors ==
    /// Creates an empty cache that sweeps once per `ttl`.
    ///
    /// # Errors
    /// - `InvalidConfig` if `ttl` is zero
    /// - `NoRuntime` if called outside a tokio runtime
    pub fn new(ttl: Duration) -> Result<Self> {
        Self::with_reap_interval(ttl, ttl)
    }

    /// Creates an empty cache whose sweep period differs from its TTL.
    ///
    /// A shorter `reap_interval` tightens the upper bound on how long a
    /// stale entry stays readable.
    pub fn with_reap_interval(ttl: Duration, reap_interval: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidConfig(
                "ttl must be a positive duration".to_string(),
            ));
        }
        if reap_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "reap interval must be a positive duration".to_string(),
            ));
        }

        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let reaper = spawn_reaper(&runtime, store.clone(), ttl, reap_interval, shutdown_rx);

        Ok(Self {
            store,
            ttl,
            reap_interval,
            shutdown_tx,
            reaper,
        })
    }

    /// Creates a cache from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::with_reap_interval(config.ttl_duration(), config.reap_interval_duration())
    }

    // == Add ==
    /// Stores `value` under `key`, overwriting any existing entry.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        lock_store(&self.store).add(key, value);
    }

    // == Get ==
    /// Returns the value stored under `key`, if a sweep has not removed it.
    ///
    /// Reading does not extend the entry's lifetime.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        lock_store(&self.store).get(key)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn reap_interval(&self) -> Duration {
        self.reap_interval
    }

    pub fn len(&self) -> usize {
        lock_store(&self.store).len()
    }

    pub fn is_empty(&self) -> bool {
        lock_store(&self.store).is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        lock_store(&self.store).stats()
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to exit.
    pub async fn shutdown(self) {
        let Self {
            shutdown_tx, reaper, ..
        } = self;

        if shutdown_tx.send(()).await.is_err() {
            debug!("Cache reaper already stopped");
        }

        if let Err(e) = reaper.await {
            warn!(error = %e, "Cache reaper ended abnormally");
        }
    }
}
