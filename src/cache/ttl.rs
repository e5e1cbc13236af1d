//! TTL Cache Handle
//!
//! The shared, lock-guarded cache with its own background sweep.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::{oneshot, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::cache::CacheStore;
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_sweep_task;

// == TTL Cache ==
/// In-memory byte cache whose entries expire after a fixed TTL.
///
/// Every read and write goes through one `RwLock`. A sweep task started at
/// construction removes expired entries every `sweep_interval`; reads also
/// treat expired entries as misses, so a value is never served past its TTL.
///
/// The sweep is owned by this handle. It stops when [`TtlCache::shutdown`] is
/// awaited or when the handle is dropped. Share a cache between tasks with
/// `Arc<TtlCache>`.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use mini_cache::TtlCache;
///
/// # tokio_test::block_on(async {
/// let cache = TtlCache::new(Duration::from_secs(60));
/// let url = "https://pokeapi.co/api/v2/location-area/?offset=0";
///
/// cache.add(url, r#"{"count":1089}"#).await;
/// assert!(cache.get(url).await.is_some());
/// assert!(cache.get("https://pokeapi.co/api/v2/pokemon/pikachu").await.is_none());
///
/// cache.shutdown().await.unwrap();
/// # });
/// ```
#[derive(Debug)]
pub struct TtlCache {
    store: Arc<RwLock<CacheStore>>,
    config: CacheConfig,
    shutdown: Option<oneshot::Sender<()>>,
    sweeper: Option<JoinHandle<()>>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache with the given TTL and the default sweep interval.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime, since the sweep task is
    /// spawned onto the current one.
    pub fn new(ttl: Duration) -> Self {
        Self::spawn(CacheConfig::new(ttl))
    }

    /// Creates an empty cache from a full configuration.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfig` if the sweep interval is zero.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::spawn(config))
    }

    fn spawn(config: CacheConfig) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(config.ttl)));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let sweeper = spawn_sweep_task(store.clone(), config.sweep_interval, shutdown_rx);

        Self {
            store,
            config,
            shutdown: Some(shutdown_tx),
            sweeper: Some(sweeper),
        }
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }

    /// Returns the interval between background sweeps.
    pub fn sweep_interval(&self) -> Duration {
        self.config.sweep_interval
    }

    // == Add ==
    /// Inserts or overwrites `key`, resetting its creation time to now.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        self.store.write().await.add(key, value);
    }

    // == Get ==
    /// Looks up `key`.
    ///
    /// `None` is a cache miss: the key was never added, has been swept, or is
    /// older than the TTL.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.store.read().await.get(key)
    }

    // == Get Or Fetch ==
    /// Returns the cached value for `key`, or awaits `fetch` on a miss and
    /// caches what it returns.
    ///
    /// No lock is held while `fetch` runs. A failed fetch caches nothing and
    /// its error is returned unchanged. Concurrent misses on the same key may
    /// each call their own `fetch`; the last one to finish wins.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        key: &str,
        fetch: F,
    ) -> std::result::Result<Bytes, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<Bytes, E>>,
    {
        if let Some(value) = self.get(key).await {
            trace!(key, "cache hit");
            return Ok(value);
        }

        debug!(key, "cache miss, fetching");
        let value = fetch().await?;
        self.add(key, value.clone()).await;
        Ok(value)
    }

    // == Length ==
    /// Returns the number of entries physically held, including expired ones
    /// the sweep has not removed yet.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if no entries are held.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Shutdown ==
    /// Stops the sweep task and waits for it to finish.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            // Err only means the task already exited
            let _ = tx.send(());
        }

        match self.sweeper.take() {
            Some(handle) => handle
                .await
                .map_err(|e| CacheError::SweepTask(e.to_string())),
            None => Ok(()),
        }
    }
}
