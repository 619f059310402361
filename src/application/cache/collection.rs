// src/application/cache/collection.rs
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;

/// Loads a whole collection from its backend.
#[async_trait]
pub trait CollectionFetcher<T>: Send + Sync {
    async fn fetch(&self) -> ApplicationResult<Vec<T>>;
}

/// Adapts an async closure into a [`CollectionFetcher`].
pub struct FetchFn<F>(pub F);

#[async_trait]
impl<T, F, Fut> CollectionFetcher<T> for FetchFn<F>
where
    T: Send + 'static,
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = ApplicationResult<Vec<T>>> + Send,
{
    async fn fetch(&self) -> ApplicationResult<Vec<T>> {
        (self.0)().await
    }
}

/// What a list screen renders: the items, whether a fetch is running and the
/// last fetch error.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Arc<Vec<T>>,
    pub is_loading: bool,
    pub error: Option<ApplicationError>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl<T> ListState<T> {
    pub fn into_result(self) -> ApplicationResult<Arc<Vec<T>>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.items),
        }
    }
}

struct CacheEntry<T> {
    data: Arc<Vec<T>>,
    fetched_at: DateTime<Utc>,
}

struct Slot<T> {
    entry: Option<CacheEntry<T>>,
    error: Option<ApplicationError>,
}

/// Memoized copy of one remote collection.
///
/// The first read fetches; later reads return the memoized copy until
/// [`invalidate`](Self::invalidate) is called or the optional TTL lapses.
/// Concurrent reads of an empty cache share a single fetch. Fetch errors are
/// held in the returned [`ListState`] instead of being raised.
pub struct CollectionCache<T> {
    name: String,
    fetcher: Arc<dyn CollectionFetcher<T>>,
    clock: Arc<dyn Clock>,
    ttl: Option<Duration>,
    fetch_lock: Mutex<()>,
    slot: RwLock<Slot<T>>,
    loading: AtomicBool,
    completed_fetches: AtomicU64,
}

impl<T> CollectionCache<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        fetcher: Arc<dyn CollectionFetcher<T>>,
        clock: Arc<dyn Clock>,
        ttl: Option<Duration>,
    ) -> Self {
        Self {
            name: name.into(),
            fetcher,
            clock,
            ttl,
            fetch_lock: Mutex::new(()),
            slot: RwLock::new(Slot {
                entry: None,
                error: None,
            }),
            loading: AtomicBool::new(false),
            completed_fetches: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the memoized collection, fetching it first when absent or
    /// expired.
    pub async fn read(&self) -> ListState<T> {
        if let Some(state) = self.fresh_state() {
            return state;
        }

        let seen = self.completed_fetches.load(Ordering::Acquire);
        let _guard = self.fetch_lock.lock().await;

        // Someone else fetched while we were queued on the lock.
        if self.completed_fetches.load(Ordering::Acquire) != seen {
            if let Some(state) = self.settled_state() {
                return state;
            }
        }
        if let Some(state) = self.fresh_state() {
            return state;
        }

        self.fetch_locked().await;
        self.snapshot()
    }

    /// Like [`read`](Self::read) but surfaces the fetch error.
    pub async fn items(&self) -> ApplicationResult<Arc<Vec<T>>> {
        self.read().await.into_result()
    }

    /// Current state without fetching or waiting.
    pub fn snapshot(&self) -> ListState<T> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        ListState {
            items: slot
                .entry
                .as_ref()
                .map(|entry| Arc::clone(&entry.data))
                .unwrap_or_default(),
            is_loading: self.loading.load(Ordering::Acquire),
            error: slot.error.clone(),
            fetched_at: slot.entry.as_ref().map(|entry| entry.fetched_at),
        }
    }

    /// Discards the memoized copy and the last error. Waits for an in-flight
    /// fetch so its result cannot repopulate the cache afterwards.
    pub async fn invalidate(&self) {
        let _guard = self.fetch_lock.lock().await;
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        slot.entry = None;
        slot.error = None;
        tracing::debug!(cache = %self.name, "cache invalidated");
    }

    pub fn is_cached(&self) -> bool {
        self.fresh_state().is_some()
    }

    async fn fetch_locked(&self) {
        self.loading.store(true, Ordering::Release);
        let result = self.fetcher.fetch().await;
        let now = self.clock.now();

        {
            let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
            match result {
                Ok(items) => {
                    tracing::debug!(cache = %self.name, count = items.len(), "collection fetched");
                    slot.entry = Some(CacheEntry {
                        data: Arc::new(items),
                        fetched_at: now,
                    });
                    slot.error = None;
                }
                Err(err) => {
                    tracing::warn!(cache = %self.name, error = %err, "collection fetch failed");
                    slot.entry = None;
                    slot.error = Some(err);
                }
            }
        }

        self.loading.store(false, Ordering::Release);
        self.completed_fetches.fetch_add(1, Ordering::AcqRel);
    }

    fn fresh_state(&self) -> Option<ListState<T>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        let entry = slot.entry.as_ref()?;
        if let Some(ttl) = self.ttl {
            if self.clock.is_expired(entry.fetched_at, ttl) {
                return None;
            }
        }
        Some(ListState {
            items: Arc::clone(&entry.data),
            is_loading: false,
            error: None,
            fetched_at: Some(entry.fetched_at),
        })
    }

    fn settled_state(&self) -> Option<ListState<T>> {
        if let Some(state) = self.fresh_state() {
            return Some(state);
        }
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.error.clone().map(|err| ListState {
            items: Arc::new(Vec::new()),
            is_loading: false,
            error: Some(err),
            fetched_at: None,
        })
    }
}
