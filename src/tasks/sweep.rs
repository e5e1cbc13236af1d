//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically removes expired cache entries.
///
/// The task sleeps for `interval` between sweeps and takes the write lock only
/// for the duration of a single pass over the table. It exits when `shutdown`
/// receives a value or its sender is dropped.
///
/// # Arguments
/// * `store` - shared reference to the cache table
/// * `interval` - time between sweeps; callers validate it as non-zero
/// * `shutdown` - stop signal owned by the cache
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(60))));
/// let (stop_tx, stop_rx) = oneshot::channel();
/// let handle = spawn_sweep_task(store.clone(), Duration::from_secs(5), stop_rx);
/// // Later:
/// let _ = stop_tx.send(());
/// handle.await?;
/// ```
pub(crate) fn spawn_sweep_task(
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    mut shutdown: oneshot::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(?interval, "Starting TTL sweep task");

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => break,

                _ = tokio::time::sleep(interval) => {
                    let (removed, remaining) = {
                        let mut guard = store.write().await;
                        let removed = guard.remove_expired();
                        (removed, guard.len())
                    };

                    if removed > 0 {
                        info!(removed, remaining, "TTL sweep: removed expired entries");
                    } else {
                        debug!(remaining, "TTL sweep: no expired entries found");
                    }
                }
            }
        }

        info!("TTL sweep task stopped");
    })
}
