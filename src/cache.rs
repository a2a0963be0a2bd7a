use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::list::PublicSuffixList;
use crate::types::{canonicalize, Options};

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Cache key for LRU cache
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    domain: String,
    extra_label_count: usize,
    ignore_private: bool,
}

/// Public suffix list with LRU caching of query results.
///
/// The wrapped list stays lock-free; only the cache is guarded.
pub struct CachedSuffixList {
    list: PublicSuffixList,
    cache: Mutex<LruCache<CacheKey, Option<String>>>,
}

impl CachedSuffixList {
    /// Wrap a list with a cache of `cache_size` entries (at least one)
    pub fn new(list: PublicSuffixList, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            list,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Public suffix of `domain`
    pub fn public_suffix(&self, domain: &str, options: &Options) -> Option<String> {
        self.lookup(domain, 0, options)
    }

    /// Registrable domain of `domain`
    pub fn registrable_domain(&self, domain: &str, options: &Options) -> Option<String> {
        self.lookup(domain, 1, options)
    }

    fn lookup(&self, domain: &str, extra_label_count: usize, options: &Options) -> Option<String> {
        // Key on the canonical form so "FOO.com." and "foo.com" share an entry
        let key = CacheKey {
            domain: canonicalize(domain).join("."),
            extra_label_count,
            ignore_private: options.ignore_private,
        };

        let mut cache = self.cache.lock();

        if let Some(cached) = cache.get(&key) {
            return cached.clone();
        }

        // Matching is CPU-only, so computing under the lock is acceptable
        let result = if extra_label_count == 0 {
            self.list.public_suffix(&key.domain, options)
        } else {
            self.list.registrable_domain(&key.domain, options)
        };

        cache.put(key, result.clone());
        result
    }

    /// The wrapped list
    pub fn list(&self) -> &PublicSuffixList {
        &self.list
    }

    /// Number of cached entries
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
    }
}
