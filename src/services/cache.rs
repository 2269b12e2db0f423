//! Process-wide caches of collections fetched from the asset API
//!
//! Snapshots are filled on first access, served from memory afterwards, and
//! dropped or refilled explicitly after a mutation. Each snapshot is keyed
//! by the credentials that fetched it: the asset API decides what a token
//! may see, so a token it has not accepted never reads a cached copy.
//! Readers get an `Arc` to an immutable list, so a refetch never changes a
//! list someone is already working on.

use std::{collections::HashMap, future::Future, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::Asset,
    repository::{AssetSource, Credentials},
};

pub type Snapshot<T> = Arc<Vec<T>>;
pub type AssetSnapshot = Snapshot<Asset>;

/// Keyed snapshots of one collection
pub struct SnapshotCache<K, T> {
    name: &'static str,
    entries: Arc<RwLock<HashMap<K, Snapshot<T>>>>,
}

impl<K, T> Clone for SnapshotCache<K, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            entries: self.entries.clone(),
        }
    }
}

impl<K, T> SnapshotCache<K, T>
where
    K: Eq + Hash + Clone,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Snapshot for `key`, calling `fetch` when there is none. Failed fetches are not cached.
    pub async fn get_or_fetch<F, Fut>(&self, key: &K, fetch: F) -> AppResult<Snapshot<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<Vec<T>>>,
    {
        if let Some(snapshot) = self.entries.read().await.get(key) {
            return Ok(snapshot.clone());
        }

        let mut guard = self.entries.write().await;
        // filled while we waited for the write lock
        if let Some(snapshot) = guard.get(key) {
            return Ok(snapshot.clone());
        }

        let snapshot: Snapshot<T> = Arc::new(fetch().await?);
        tracing::info!("{} cache filled with {} entries", self.name, snapshot.len());
        guard.insert(key.clone(), snapshot.clone());
        Ok(snapshot)
    }

    /// Replace every snapshot with `items`, held for `key` only
    pub async fn replace(&self, key: K, items: Vec<T>) -> Snapshot<T> {
        let snapshot: Snapshot<T> = Arc::new(items);
        let mut guard = self.entries.write().await;
        guard.clear();
        guard.insert(key, snapshot.clone());
        tracing::info!("{} cache refetched: {} entries", self.name, snapshot.len());
        snapshot
    }

    /// Drop every snapshot; the next access fetches again
    pub async fn invalidate(&self) {
        self.entries.write().await.clear();
        tracing::debug!("{} cache invalidated", self.name);
    }

    /// Whether any snapshot is currently held
    pub async fn is_filled(&self) -> bool {
        !self.entries.read().await.is_empty()
    }

    pub async fn contains(&self, key: &K) -> bool {
        self.entries.read().await.contains_key(key)
    }
}

/// Asset collection cache on top of an [`AssetSource`]
#[derive(Clone)]
pub struct AssetCache {
    source: Arc<dyn AssetSource>,
    snapshots: SnapshotCache<Credentials, Asset>,
}

impl AssetCache {
    pub fn new(source: Arc<dyn AssetSource>) -> Self {
        Self {
            source,
            snapshots: SnapshotCache::new("Asset"),
        }
    }

    /// Snapshot visible to `credentials`, fetching it on first access
    pub async fn get(&self, credentials: &Credentials) -> AppResult<AssetSnapshot> {
        self.snapshots
            .get_or_fetch(credentials, || self.source.list_assets(credentials))
            .await
    }

    pub async fn invalidate(&self) {
        self.snapshots.invalidate().await;
    }

    /// Fetch a fresh snapshot now; snapshots held for other credentials are dropped
    pub async fn refetch(&self, credentials: &Credentials) -> AppResult<AssetSnapshot> {
        let assets = self.source.list_assets(credentials).await?;
        Ok(self.snapshots.replace(credentials.clone(), assets).await)
    }

    pub async fn is_filled(&self) -> bool {
        self.snapshots.is_filled().await
    }
}
