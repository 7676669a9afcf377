//! TTL Reaper Task
//!
//! Background task that periodically sweeps stale entries out of a cache.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{lock_store, CacheStore};

/// Spawns the reaper for `store` on `runtime`.
///
/// Every `reap_interval` the task locks the store once and removes all
/// entries created strictly before `now - ttl`. The first sweep happens one
/// full interval after spawning.
///
/// The task stops when `shutdown_rx` yields a message or its sender is
/// dropped. The signal is checked while waiting for the next tick and again
/// right before each sweep.
pub fn spawn_reaper(
    runtime: &Handle,
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
    reap_interval: Duration,
    mut shutdown_rx: mpsc::Receiver<()>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        info!(
            ttl_ms = ttl.as_millis() as u64,
            reap_interval_ms = reap_interval.as_millis() as u64,
            "Starting cache reaper"
        );

        let mut ticker = tokio::time::interval_at(Instant::now() + reap_interval, reap_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown_rx.recv() => break,
                _ = ticker.tick() => {}
            }

            // The tick may have raced with a shutdown request
            if !matches!(shutdown_rx.try_recv(), Err(TryRecvError::Empty)) {
                break;
            }

            let now = Instant::now();
            let (removed, remaining) = {
                let mut guard = lock_store(&store);
                let removed = guard.reap(now, ttl);
                (removed, guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "Reaped expired cache entries");
            } else {
                debug!(remaining, "Reaper sweep found no expired entries");
            }
        }

        debug!("Cache reaper stopped");
    })
}
