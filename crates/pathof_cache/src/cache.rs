use alloc::string::String;
use core::fmt;
use core::hash::Hash;

use hashbrown::hash_map::{Entry, HashMap};
use hashbrown::Equivalent;
use pathof_trace::{Probe, TraceError, TraceOptions, trace};

use crate::PathHashState;

// -----------------------------------------------------------------------------
// Keys

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey<K> {
    key: K,
    options: TraceOptions,
}

/// Borrowed form of [`CacheKey`], hashes identically.
#[derive(Hash)]
struct CacheKeyRef<'a, K> {
    key: &'a K,
    options: TraceOptions,
}

impl<K: Eq> Equivalent<CacheKey<K>> for CacheKeyRef<'_, K> {
    #[inline]
    fn equivalent(&self, other: &CacheKey<K>) -> bool {
        *self.key == other.key && self.options == other.options
    }
}

// -----------------------------------------------------------------------------
// PathCache

/// Memoizes traced paths under caller-chosen keys.
///
/// Each entry is keyed by `(key, options)`. The key names the logical path,
/// so it must stay the same for the same accessor; the accessor is only
/// executed on a miss. Failed traces are not stored.
///
/// No eviction is performed, use [`remove`](Self::remove) or
/// [`clear`](Self::clear).
///
/// # Examples
///
/// ```
/// use pathof_cache::PathCache;
/// use pathof_trace::TraceOptions;
///
/// #[derive(Debug, PartialEq, Eq, Hash)]
/// enum Field {
///     UserEmail,
/// }
///
/// let mut cache = PathCache::new();
/// let options = TraceOptions::new();
///
/// let path = cache.get_or_trace(Field::UserEmail, options, |o| o.field("user").field("email"));
/// assert_eq!(path.unwrap(), "user.email");
///
/// // Hit: the accessor is not executed.
/// let path = cache.get_or_trace(Field::UserEmail, options, |o| o.field("other"));
/// assert_eq!(path.unwrap(), "user.email");
/// ```
pub struct PathCache<K> {
    paths: HashMap<CacheKey<K>, String, PathHashState>,
}

impl<K> Default for PathCache<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for PathCache<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.paths.iter().map(|(k, v)| ((&k.key, &k.options), v)))
            .finish()
    }
}

impl<K> PathCache<K> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            paths: HashMap::with_hasher(PathHashState),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            paths: HashMap::with_capacity_and_hasher(capacity, PathHashState),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.paths.clear();
    }
}

impl<K: Hash + Eq> PathCache<K> {
    /// Returns the cached path of `key`, tracing `accessor` on a miss.
    ///
    /// # Errors
    ///
    /// Propagates the [`TraceError`] of a failed trace; nothing is cached then.
    pub fn get_or_trace<F, R>(
        &mut self,
        key: K,
        options: TraceOptions,
        accessor: F,
    ) -> Result<&str, TraceError>
    where
        F: FnOnce(Probe) -> R,
    {
        match self.paths.entry(CacheKey { key, options }) {
            Entry::Occupied(entry) => {
                log::trace!("path cache hit `{}`", entry.get());
                Ok(entry.into_mut().as_str())
            }
            Entry::Vacant(entry) => {
                let path = trace(accessor, options)?;
                log::debug!("path cache miss, storing `{path}`");
                Ok(entry.insert(path).as_str())
            }
        }
    }

    #[inline]
    pub fn get(&self, key: &K, options: TraceOptions) -> Option<&str> {
        self.paths
            .get(&CacheKeyRef { key, options })
            .map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, key: &K, options: TraceOptions) -> bool {
        self.paths.contains_key(&CacheKeyRef { key, options })
    }

    /// Stores `path` for `key`, returning the previous path if any.
    #[inline]
    pub fn insert(&mut self, key: K, options: TraceOptions, path: String) -> Option<String> {
        self.paths.insert(CacheKey { key, options }, path)
    }

    #[inline]
    pub fn remove(&mut self, key: &K, options: TraceOptions) -> Option<String> {
        self.paths.remove(&CacheKeyRef { key, options })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::borrow::ToOwned;
    use core::cell::Cell;
    use pathof_trace::{ArrayIndexNotation, Symbol};

    #[test]
    fn accessor_runs_once_per_key() {
        let runs = Cell::new(0);
        let mut cache = PathCache::new();

        for _ in 0..3 {
            let path = cache.get_or_trace("deep", TraceOptions::new(), |o| {
                runs.set(runs.get() + 1);
                o.field("a").field("b").field("c")
            });
            assert_eq!(path.unwrap(), "a.b.c");
        }

        assert_eq!(runs.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn options_are_part_of_the_key() {
        let mut cache = PathCache::new();
        let dot = TraceOptions::new().with_array_index_notation(ArrayIndexNotation::Dot);

        let brackets = cache
            .get_or_trace(1u32, TraceOptions::new(), |o| o.field("list").index(0))
            .unwrap()
            .to_owned();
        let dotted = cache
            .get_or_trace(1u32, dot, |o| o.field("list").index(0))
            .unwrap()
            .to_owned();

        assert_eq!(brackets, "list[0]");
        assert_eq!(dotted, "list.0");
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&1, dot), Some("list.0"));
        assert_eq!(cache.get(&1, TraceOptions::new()), Some("list[0]"));
    }

    #[test]
    fn failures_are_not_cached() {
        let sym = Symbol::new("sym");
        let denied = TraceOptions::new().with_stringify_symbols(false);
        let mut cache = PathCache::new();

        let result = cache.get_or_trace("sym", denied, |o| o.symbol(&sym));
        assert!(matches!(result, Err(TraceError::SymbolNotAllowed { .. })));
        assert!(cache.is_empty());
        assert!(!cache.contains(&"sym", denied));
    }

    #[test]
    fn insert_remove_clear() {
        let mut cache = PathCache::with_capacity(4);
        let options = TraceOptions::new();

        assert_eq!(cache.insert("a", options, "a.b".into()), None);
        assert_eq!(cache.insert("a", options, "a.c".into()), Some("a.b".into()));
        assert_eq!(cache.get(&"a", options), Some("a.c"));

        assert_eq!(cache.remove(&"a", options), Some("a.c".into()));
        assert_eq!(cache.get(&"a", options), None);

        cache.insert("x", options, "x".into());
        cache.insert("y", options, "y".into());
        cache.clear();
        assert!(cache.is_empty());
    }
}
