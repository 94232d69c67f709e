//! Keyed query cache with freshness windows and in-flight coalescing
//!
//! Each [`QueryCache`] serves one read operation. Entries are stored under a
//! canonical string form of the request key (operation name + arguments), so
//! two call sites asking for the same thing share one entry and one request.
//!
//! - **Fresh** entries (younger than the policy's `stale_time`) are returned
//!   without touching the network.
//! - **Stale or missing** entries trigger the fetcher. Concurrent callers for
//!   the same key join the request already in flight instead of issuing their
//!   own; every one of them receives the settled result.
//! - Entries not accessed for `gc_time` are dropped; a `gc_time` of zero means
//!   results are handed out but never kept.
//!
//! The maps live behind `std::sync::Mutex`es that are only held for short
//! synchronous sections, never across an `.await`.

use lru::LruCache;
use std::{
    collections::HashMap,
    future::Future,
    hash::Hash,
    num::NonZeroUsize,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};
use tokio::{sync::OnceCell, time::Instant};

use crate::{Result, ScoutError};


/// A request key with a canonical string form.
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// Operation name, e.g. `playerDetail`.
    fn operation(&self) -> &'static str;

    /// Canonical serialization of the arguments, in a fixed order.
    fn arguments(&self) -> Vec<String>;

    fn to_key_string(&self) -> String {
        let mut key = String::from(self.operation());
        for arg in self.arguments() {
            key.push('|');
            key.push_str(&arg.replace('\\', "\\\\").replace('|', "\\|"));
        }
        key
    }
}

/// Freshness and retention for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPolicy {
    /// How long after a fetch the value is served without refetching.
    pub stale_time: Duration,
    /// How long an entry survives without being accessed.
    pub gc_time: Duration,
}

impl QueryPolicy {
    pub const DEFAULT_GC_TIME: Duration = Duration::from_secs(5 * 60);

    pub const fn new(stale_time: Duration, gc_time: Duration) -> Self {
        Self {
            stale_time,
            gc_time,
        }
    }

    /// Always refetch and never keep anything.
    pub const fn uncached() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Keep for `stale_time` with the default retention.
    pub const fn fresh_for(stale_time: Duration) -> Self {
        Self::new(stale_time, Self::DEFAULT_GC_TIME)
    }

    fn retains(&self) -> bool {
        !self.gc_time.is_zero()
    }
}

impl Default for QueryPolicy {
    /// Stale immediately, retained for five minutes.
    fn default() -> Self {
        Self::new(Duration::ZERO, Self::DEFAULT_GC_TIME)
    }
}

/// What a view sees for a query.
#[derive(Debug, Clone)]
pub enum QueryState<V> {
    /// Disabled: the enabling condition does not hold, nothing was requested.
    Idle,
    /// A request for the key is in flight.
    Loading,
    Error(ScoutError),
    Success(V),
}

impl<V> QueryState<V> {
    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&V> {
        match self {
            QueryState::Success(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ScoutError> {
        match self {
            QueryState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> QueryState<U> {
        match self {
            QueryState::Idle => QueryState::Idle,
            QueryState::Loading => QueryState::Loading,
            QueryState::Error(e) => QueryState::Error(e),
            QueryState::Success(v) => QueryState::Success(f(v)),
        }
    }
}

impl<V> From<Result<V>> for QueryState<V> {
    fn from(result: Result<V>) -> Self {
        match result {
            Ok(v) => QueryState::Success(v),
            Err(e) => QueryState::Error(e),
        }
    }
}

/// Counters for one cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Served from a fresh entry.
    pub hits: u64,
    /// Started a new request.
    pub misses: u64,
    /// Joined a request already in flight.
    pub coalesced: u64,
}

struct Entry<V> {
    value: V,
    fetched_at: Instant,
    last_access: Instant,
}

type Flight<V> = Arc<OnceCell<Result<V>>>;

/// Cache for one query operation.
pub struct QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    name: &'static str,
    policy: QueryPolicy,
    entries: Mutex<LruCache<String, Entry<V>>>,
    in_flight: Mutex<HashMap<String, Flight<V>>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    coalesced: AtomicU64,
}

/// Held by every caller of a flight. When the last caller is dropped before
/// the flight settles, the abandoned flight leaves the in-flight map.
struct FlightGuard<'a, V> {
    in_flight: &'a Mutex<HashMap<String, Flight<V>>>,
    name: &'static str,
    key: String,
    flight: Flight<V>,
}

impl<V> Drop for FlightGuard<'_, V> {
    fn drop(&mut self) {
        if self.flight.initialized() {
            return;
        }
        let mut in_flight = lock(self.in_flight);
        let is_current = in_flight
            .get(&self.key)
            .is_some_and(|current| Arc::ptr_eq(current, &self.flight));
        // One reference in the map, one here: nobody else is waiting
        if is_current && Arc::strong_count(&self.flight) <= 2 {
            in_flight.remove(&self.key);
            tracing::debug!(cache = self.name, key = %self.key, "abandoned in-flight request");
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, policy: QueryPolicy, capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            name,
            policy,
            entries: Mutex::new(LruCache::new(cap)),
            in_flight: Mutex::new(HashMap::new()),
            capacity: cap.get(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            coalesced: AtomicU64::new(0),
        }
    }

    pub fn policy(&self) -> QueryPolicy {
        self.policy
    }

    /// Return the cached value for `key` if fresh, otherwise run `fetcher`
    /// (or join the run already in flight for the same key).
    ///
    /// If the caller driving the fetch is dropped, the next waiter's fetcher
    /// takes over, so a cancelled caller never strands the others.
    pub async fn fetch<K, F, Fut>(&self, key: &K, fetcher: F) -> Result<V>
    where
        K: CacheKey,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        let key = key.to_key_string();

        if let Some(value) = self.fresh(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(cache = self.name, %key, "hit");
            return Ok(value);
        }

        let flight = {
            let mut in_flight = lock(&self.in_flight);
            match in_flight.get(&key) {
                Some(existing) => {
                    self.coalesced.fetch_add(1, Ordering::Relaxed);
                    tracing::debug!(cache = self.name, %key, "joining in-flight request");
                    Arc::clone(existing)
                }
                None => {
                    self.misses.fetch_add(1, Ordering::Relaxed);
                    tracing::debug!(cache = self.name, %key, "miss");
                    let flight: Flight<V> = Arc::new(OnceCell::new());
                    in_flight.insert(key.clone(), Arc::clone(&flight));
                    flight
                }
            }
        };

        let guard = FlightGuard {
            in_flight: &self.in_flight,
            name: self.name,
            key: key.clone(),
            flight,
        };
        let result = guard.flight.get_or_init(fetcher).await.clone();
        self.settle(key, &guard.flight, &result);
        result
    }

    /// Current state of `key` without fetching.
    ///
    /// A retained but stale entry still reports `Success`.
    pub fn peek<K: CacheKey>(&self, key: &K) -> QueryState<V> {
        let key = key.to_key_string();

        if let Some(flight) = lock(&self.in_flight).get(&key) {
            if !flight.initialized() {
                return QueryState::Loading;
            }
        }

        let mut entries = lock(&self.entries);
        match entries.peek(&key) {
            Some(entry) if entry.last_access.elapsed() < self.policy.gc_time => {
                QueryState::Success(entry.value.clone())
            }
            Some(_) => {
                entries.pop(&key);
                QueryState::Idle
            }
            None => QueryState::Idle,
        }
    }

    /// Drop the cached value so the next fetch goes to the network.
    pub fn invalidate<K: CacheKey>(&self, key: &K) {
        lock(&self.entries).pop(&key.to_key_string());
    }

    pub fn clear(&self) {
        lock(&self.entries).clear();
    }

    /// Number of retained entries (fresh or stale).
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            coalesced: self.coalesced.load(Ordering::Relaxed),
        }
    }

    fn fresh(&self, key: &str) -> Option<V> {
        let mut entries = lock(&self.entries);
        let now = Instant::now();

        let expired = match entries.get_mut(key) {
            None => return None,
            Some(entry) if now.duration_since(entry.last_access) >= self.policy.gc_time => true,
            Some(entry) => {
                entry.last_access = now;
                if now.duration_since(entry.fetched_at) < self.policy.stale_time {
                    return Some(entry.value.clone());
                }
                false
            }
        };

        if expired {
            tracing::debug!(cache = self.name, %key, "evicted after retention window");
            entries.pop(key);
        }
        None
    }

    /// Retire `flight` and store its value. Only the first waiter to get here
    /// for a given flight does anything.
    fn settle(&self, key: String, flight: &Flight<V>, result: &Result<V>) {
        {
            let mut in_flight = lock(&self.in_flight);
            match in_flight.get(&key) {
                Some(current) if Arc::ptr_eq(current, flight) => {
                    in_flight.remove(&key);
                }
                _ => return,
            }
        }

        match result {
            Ok(value) if self.policy.retains() => {
                let now = Instant::now();
                lock(&self.entries).put(
                    key,
                    Entry {
                        value: value.clone(),
                        fetched_at: now,
                        last_access: now,
                    },
                );
            }
            Ok(_) => {}
            Err(e) => tracing::debug!(cache = self.name, %key, error = %e, "request failed"),
        }
    }
}
