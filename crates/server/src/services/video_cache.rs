use std::sync::Arc;
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use parking_lot::Mutex;

/// Default time-to-live for cached responses (30 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Default maximum number of distinct keys
pub const DEFAULT_CAPACITY: usize = 100;

/// Source of the current instant, injectable so expiry can be tested
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when advanced explicitly
pub struct ManualClock {
    origin: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + *self.offset.lock()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Process-local response cache with per-entry expiry and a hard key limit.
///
/// Eviction is by insertion order: when full, the entry inserted first goes,
/// no matter how recently it was read. Overwriting a key keeps its original
/// slot in that order.
///
/// The cache itself is not synchronized; callers sharing it across tasks wrap
/// it in a lock and never hold that lock across an await.
pub struct ResponseCache<V> {
    entries: IndexMap<String, CacheEntry<V>>,
    capacity: usize,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ResponseCache<V> {
    pub fn new() -> Self {
        Self::with_clock(DEFAULT_CAPACITY, Arc::new(SystemClock))
    }

    /// Create a cache holding at most `capacity` keys (minimum 1)
    pub fn with_clock(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: IndexMap::new(),
            capacity: capacity.max(1),
            default_ttl: DEFAULT_TTL,
            clock,
        }
    }

    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Get a value if present and not expired.
    ///
    /// An expired entry is removed as part of the read.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let expired = now > self.entries.get(key)?.expires_at;
        if expired {
            self.entries.shift_remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Insert with the default TTL
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let ttl = self.default_ttl;
        self.set_with_ttl(key, value, ttl);
    }

    /// Insert or overwrite, evicting the oldest-inserted key when a new key
    /// would exceed the capacity
    pub fn set_with_ttl(&mut self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            self.entries.shift_remove_index(0);
        }

        let expires_at = self.clock.now() + ttl;
        self.entries.insert(key, CacheEntry { value, expires_at });
    }

    pub fn invalidate(&mut self, key: &str) {
        self.entries.shift_remove(key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, expired ones included until they are read
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<V: Clone> Default for ResponseCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with_clock(capacity: usize) -> (ResponseCache<String>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = ResponseCache::with_clock(capacity, clock.clone());
        (cache, clock)
    }

    #[test]
    fn test_get_returns_value_until_ttl_elapses() {
        let (mut cache, clock) = cache_with_clock(DEFAULT_CAPACITY);
        cache.set("popular:JP:12", "videos".to_string());

        assert_eq!(cache.get("popular:JP:12").as_deref(), Some("videos"));

        clock.advance(DEFAULT_TTL - Duration::from_secs(1));
        assert_eq!(cache.get("popular:JP:12").as_deref(), Some("videos"));

        // Still valid at the exact expiry instant
        clock.advance(Duration::from_secs(1));
        assert_eq!(cache.get("popular:JP:12").as_deref(), Some("videos"));

        clock.advance(Duration::from_millis(1));
        assert_eq!(cache.get("popular:JP:12"), None);
    }

    #[test]
    fn test_default_ttl_override_applies_to_set() {
        let (cache, clock) = cache_with_clock(DEFAULT_CAPACITY);
        let mut cache = cache.with_default_ttl(Duration::from_secs(30));
        cache.set("genre:action:JP:8", "videos".to_string());

        clock.advance(Duration::from_secs(30));
        assert!(cache.get("genre:action:JP:8").is_some());

        clock.advance(Duration::from_secs(1));
        assert_eq!(cache.get("genre:action:JP:8"), None);
    }

    #[test]
    fn test_expired_entry_is_evicted_on_read() {
        let (mut cache, clock) = cache_with_clock(DEFAULT_CAPACITY);
        cache.set_with_ttl("a", "1".to_string(), Duration::from_secs(5));
        cache.set_with_ttl("b", "2".to_string(), Duration::from_secs(60));
        assert_eq!(cache.len(), 2);

        clock.advance(Duration::from_secs(10));
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_missing_key() {
        let mut cache: ResponseCache<String> = ResponseCache::new();
        assert_eq!(cache.get("nothing"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_oldest_inserted_is_evicted_at_capacity() {
        let (mut cache, _clock) = cache_with_clock(DEFAULT_CAPACITY);
        for i in 0..=DEFAULT_CAPACITY {
            cache.set(format!("key-{i}"), i.to_string());
        }

        assert_eq!(cache.len(), DEFAULT_CAPACITY);
        assert_eq!(cache.get("key-0"), None);
        for i in 1..=DEFAULT_CAPACITY {
            assert_eq!(cache.get(&format!("key-{i}")), Some(i.to_string()));
        }
    }

    #[test]
    fn test_eviction_ignores_reads() {
        let (mut cache, _clock) = cache_with_clock(3);
        cache.set("a", "1".to_string());
        cache.set("b", "2".to_string());
        cache.set("c", "3".to_string());

        // Reading "a" does not protect it
        assert!(cache.get("a").is_some());
        cache.set("d", "4".to_string());

        assert_eq!(cache.get("a"), None);
        assert!(cache.get("b").is_some());
        assert!(cache.get("d").is_some());
    }

    #[test]
    fn test_overwrite_at_capacity_keeps_other_keys() {
        let (mut cache, _clock) = cache_with_clock(3);
        cache.set("a", "1".to_string());
        cache.set("b", "2".to_string());
        cache.set("c", "3".to_string());

        cache.set("b", "updated".to_string());
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("a").as_deref(), Some("1"));
        assert_eq!(cache.get("b").as_deref(), Some("updated"));

        // "a" was still inserted first; overwriting it kept that slot
        cache.set("a", "again".to_string());
        cache.set("d", "4".to_string());
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b").as_deref(), Some("updated"));
    }

    #[test]
    fn test_overwrite_refreshes_expiry() {
        let (mut cache, clock) = cache_with_clock(DEFAULT_CAPACITY);
        cache.set_with_ttl("k", "old".to_string(), Duration::from_secs(10));
        clock.advance(Duration::from_secs(8));
        cache.set_with_ttl("k", "new".to_string(), Duration::from_secs(10));
        clock.advance(Duration::from_secs(8));

        assert_eq!(cache.get("k").as_deref(), Some("new"));
    }

    #[test]
    fn test_invalidate_and_clear() {
        let (mut cache, _clock) = cache_with_clock(DEFAULT_CAPACITY);
        cache.set("a", "1".to_string());
        cache.set("b", "2".to_string());

        cache.invalidate("a");
        cache.invalidate("missing");
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let (mut cache, _clock) = cache_with_clock(0);
        assert_eq!(cache.capacity(), 1);

        cache.set("a", "1".to_string());
        cache.set("b", "2".to_string());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("b").as_deref(), Some("2"));
    }
}
