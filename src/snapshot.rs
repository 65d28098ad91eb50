//! Snapshot cells: one per query key, holding the latest immutable copy of a
//! remote collection. Concurrent refreshes race freely; a generation counter
//! makes the newest refresh win and late, stale results get discarded instead
//! of clobbering newer data.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct Snapshot<T> {
    rows: T,
    taken_at: Instant,
}

pub struct SnapshotCell<T> {
    slot: RwLock<Option<Snapshot<T>>>,
    generation: AtomicU64,
}

impl<T: Clone> SnapshotCell<T> {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// The current snapshot if it is younger than `ttl`.
    pub async fn fresh(&self, ttl: Duration) -> Option<T> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|s| s.taken_at.elapsed() < ttl)
            .map(|s| s.rows.clone())
    }

    /// The current snapshot regardless of age.
    pub async fn latest(&self) -> Option<T> {
        let slot = self.slot.read().await;
        slot.as_ref().map(|s| s.rows.clone())
    }

    /// Start a refresh: bump the generation and return it. Any refresh begun
    /// earlier is now stale.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Replace the snapshot wholesale, unless a newer refresh has begun since
    /// `generation` was handed out. Returns whether the commit was applied.
    pub async fn commit(&self, generation: u64, rows: T) -> bool {
        let mut slot = self.slot.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        *slot = Some(Snapshot {
            rows,
            taken_at: Instant::now(),
        });
        true
    }

    /// Serve a fresh snapshot, fetching a new one if the current one is
    /// missing or older than `ttl`. When the fetched result turns out stale
    /// (a newer refresh committed first), the newer snapshot is served.
    pub async fn refresh_with<F, Fut, E>(&self, ttl: Duration, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(rows) = self.fresh(ttl).await {
            return Ok(rows);
        }

        let generation = self.begin();
        let rows = fetch().await?;
        if self.commit(generation, rows.clone()).await {
            Ok(rows)
        } else {
            Ok(self.latest().await.unwrap_or(rows))
        }
    }
}

impl<T: Clone> Default for SnapshotCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
