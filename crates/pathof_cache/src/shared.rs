use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;
use core::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pathof_trace::{Probe, TraceError, TraceOptions, trace};

use crate::PathCache;

/// A [`PathCache`] that can be shared between threads.
///
/// The accessor runs without holding the lock. Two threads missing the same
/// key at once both trace it; the later result overwrites the earlier one,
/// which is the same string.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use pathof_cache::SharedPathCache;
/// use pathof_trace::TraceOptions;
///
/// let cache = Arc::new(SharedPathCache::new());
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let cache = Arc::clone(&cache);
///         thread::spawn(move || {
///             cache.get_or_trace("items", TraceOptions::new(), |o| o.field("items").index(0))
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap().unwrap(), "items[0]");
/// }
/// assert_eq!(cache.len(), 1);
/// ```
pub struct SharedPathCache<K> {
    inner: RwLock<PathCache<K>>,
}

impl<K> Default for SharedPathCache<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for SharedPathCache<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedPathCache")
            .field("paths", &*self.read())
            .finish()
    }
}

impl<K> SharedPathCache<K> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: RwLock::new(PathCache::new()),
        }
    }

    // Entries are inserted whole, a poisoned lock still holds a valid cache.
    fn read(&self) -> RwLockReadGuard<'_, PathCache<K>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PathCache<K>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    #[inline]
    pub fn clear(&self) {
        self.write().clear();
    }
}

impl<K: Hash + Eq> SharedPathCache<K> {
    /// Returns the cached path of `key`, tracing `accessor` on a miss.
    ///
    /// # Errors
    ///
    /// Propagates the [`TraceError`] of a failed trace; nothing is cached then.
    pub fn get_or_trace<F, R>(
        &self,
        key: K,
        options: TraceOptions,
        accessor: F,
    ) -> Result<String, TraceError>
    where
        F: FnOnce(Probe) -> R,
    {
        if let Some(path) = self.get(&key, options) {
            return Ok(path);
        }

        let path = trace(accessor, options)?;
        log::debug!("shared path cache miss, storing `{path}`");
        self.write().insert(key, options, path.clone());
        Ok(path)
    }

    #[inline]
    pub fn get(&self, key: &K, options: TraceOptions) -> Option<String> {
        self.read().get(key, options).map(ToOwned::to_owned)
    }

    #[inline]
    pub fn insert(&self, key: K, options: TraceOptions, path: String) -> Option<String> {
        self.write().insert(key, options, path)
    }

    #[inline]
    pub fn remove(&self, key: &K, options: TraceOptions) -> Option<String> {
        self.write().remove(key, options)
    }
}

// -----------------------------------------------------------------------------
// Tests
