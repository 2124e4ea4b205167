//! TTL Cleanup Task
//!
//! Background task that periodically removes expired posts.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::PostCache;

/// Spawns a background task that periodically sweeps expired posts.
///
/// Reads already treat expired entries as absent; the sweep only reclaims
/// their memory. The lock is held for a single sweep at a time.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(Mutex::new(PostCache::new(1000, Duration::from_secs(300))));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: Arc<Mutex<PostCache>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.lock().await.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired posts", removed);
            } else {
                debug!("TTL cleanup: no expired posts found");
            }
        }
    })
}
