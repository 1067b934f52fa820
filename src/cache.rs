use std::hash::Hash;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use ahash::AHashMap;
use parking_lot::RwLock;

/// Starting pre-allocation hint for traced path vectors, used until
/// `refresh_reservation` derives a better one from cached paths.
pub(crate) const DEFAULT_RESERVATION: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Memoized trace results keyed by an order-sensitive `(from, to)` pair.
///
/// Values are arena index paths, which stay valid because nodes are never
/// removed. The owning graph clears the cache on every mutation, so entries
/// can never go stale against the store.
pub struct PathCache<K> {
    inner: RwLock<AHashMap<K, Vec<usize>>>,
    enabled: AtomicBool,
    reservation: AtomicUsize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: Eq + Hash> PathCache<K> {
    pub fn new(enabled: bool) -> Self {
        Self {
            inner: RwLock::new(AHashMap::new()),
            enabled: AtomicBool::new(enabled),
            reservation: AtomicUsize::new(DEFAULT_RESERVATION),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Flip caching on or off. Existing entries are dropped either way.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        self.clear();
    }

    pub fn get(&self, key: &K) -> Option<Vec<usize>> {
        if let Some(path) = self.inner.read().get(key).cloned() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            Some(path)
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    pub fn insert(&self, key: K, path: Vec<usize>) {
        self.inner.write().insert(key, path);
    }

    pub fn clear(&self) {
        self.inner.write().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Current pre-allocation hint for trace path vectors.
    pub fn reservation(&self) -> usize {
        self.reservation.load(Ordering::Relaxed)
    }

    /// Recompute the reservation hint as the ceiling of the average cached
    /// path length. Returns `None` when caching is disabled or no entries
    /// exist to average over.
    pub fn refresh_reservation(&self) -> Option<usize> {
        if !self.is_enabled() {
            return None;
        }
        let inner = self.inner.read();
        if inner.is_empty() {
            return None;
        }
        let total: usize = inner.values().map(Vec::len).sum();
        let average = total.div_ceil(inner.len());
        self.reservation.store(average, Ordering::Relaxed);
        Some(average)
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.inner.read().len();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
        }
    }
}
