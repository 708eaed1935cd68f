//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries, so
//! memory is reclaimed even for keys nobody requests again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the periodic sweep over a shared cache store.
///
/// The task sleeps for `interval` between runs and mutates the store
/// through the same write lock as every other caller. The returned handle
/// must be aborted at shutdown; leaking it leaks a timer for the life of
/// the runtime.
pub fn spawn_sweep_task<V>(
    cache: Arc<RwLock<CacheStore<V>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "cache sweep task started");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache = cache.write().await;
                cache.sweep()
            };

            if removed > 0 {
                info!(removed, "sweep removed expired cache entries");
            } else {
                debug!("sweep found no expired entries");
            }
        }
    })
}
