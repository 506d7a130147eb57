//! A map whose values live only as long as their external owners.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash, RandomState};

use super::{Strong, WeakReference};

/// A key-unique map holding each value through a weak reference.
///
/// Once every [`Strong`] owner of a value is dropped, its entry behaves as
/// absent. Stale entries are not evicted eagerly: they are removed by the next
/// lookup, removal or iteration that meets them, or by [`sweep`](Self::sweep).
/// Because lookups can remove entries, they take `&mut self`.
///
/// # Examples
///
/// ```rust
/// use utilkit::map::{Strong, WeakRefMap};
///
/// let mut map = WeakRefMap::new();
/// let alive = Strong::new(1);
/// let doomed = Strong::new(2);
///
/// map.insert("alive", &alive);
/// map.insert("doomed", &doomed);
/// drop(doomed);
///
/// let keys: Vec<&str> = map.keys().collect();
/// assert_eq!(keys, vec!["alive"]);
/// assert_eq!(map.raw_len(), 1);
/// ```
pub struct WeakRefMap<K, V, S = RandomState> {
    entries: HashMap<K, WeakReference<V>, S>,
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(WeakRefMap<i32, String>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(WeakRefMap<i32, String>: Send, Sync);

impl<K, V> WeakRefMap<K, V, RandomState> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }
}

impl<K, V, S> WeakRefMap<K, V, S> {
    /// Creates an empty map using `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hasher),
        }
    }

    /// Returns the number of entries held, including stale ones not yet swept.
    pub fn raw_len(&self) -> usize {
        self.entries.len()
    }

    /// Drops every entry, live or stale.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes every stale entry now, returning how many were removed.
    pub fn sweep(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, reference| reference.strong_count() > 0);
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::trace!(removed, "swept stale weak references");
        }
        removed
    }
}

impl<K, V, S> WeakRefMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Stores a weak reference to `value` under `key`.
    ///
    /// Returns the previous value if it was still alive.
    pub fn insert(&mut self, key: K, value: &Strong<V>) -> Option<Strong<V>> {
        self.entries
            .insert(key, Strong::downgrade(value))
            .and_then(|previous| previous.upgrade())
    }

    /// Returns the value under `key` if it is still alive.
    ///
    /// A stale entry is removed.
    pub fn get<Q>(&mut self, key: &Q) -> Option<Strong<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.entries.get(key)?.upgrade();
        if value.is_none() {
            self.remove_stale(key);
        }
        value
    }

    /// Returns `true` if `key` maps to a live value.
    ///
    /// A stale entry is removed.
    pub fn contains_key<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.entries.get(key) {
            Some(reference) if reference.strong_count() > 0 => true,
            Some(_) => {
                self.remove_stale(key);
                false
            }
            None => false,
        }
    }

    /// Removes the entry under `key` whether or not its value is alive.
    ///
    /// Returns `true` only if a live entry was removed.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries
            .remove(key)
            .is_some_and(|reference| reference.strong_count() > 0)
    }

    fn remove_stale<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key);
        tracing::trace!("removed stale weak reference on lookup");
    }
}

impl<K, V, S> WeakRefMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Iterates over live entries, sweeping stale ones along the way.
    ///
    /// The set of keys is fixed when the iterator is created; each pass is
    /// single-use, and calling `iter` again starts a fresh one.
    pub fn iter(&mut self) -> Iter<'_, K, V, S> {
        let pending: Vec<K> = self.entries.keys().cloned().collect();
        Iter {
            entries: &mut self.entries,
            pending: pending.into_iter(),
        }
    }

    /// Iterates over keys of live entries.
    pub fn keys(&mut self) -> Keys<'_, K, V, S> {
        Keys { inner: self.iter() }
    }

    /// Iterates over live values.
    pub fn values(&mut self) -> Values<'_, K, V, S> {
        Values { inner: self.iter() }
    }

    /// Returns the number of live entries, sweeping stale ones.
    pub fn len(&mut self) -> usize {
        self.sweep();
        self.entries.len()
    }

    /// Returns `true` if no live entries remain, sweeping stale ones.
    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for WeakRefMap<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V, S> fmt::Debug for WeakRefMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|(key, reference)| {
                (key, if reference.strong_count() > 0 { "live" } else { "stale" })
            }))
            .finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over live `(key, value)` pairs of a [`WeakRefMap`].
pub struct Iter<'a, K, V, S> {
    entries: &'a mut HashMap<K, WeakReference<V>, S>,
    pending: std::vec::IntoIter<K>,
}

impl<K, V, S> Iterator for Iter<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (K, Strong<V>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let key = self.pending.next()?;
            let Some(reference) = self.entries.get(&key) else {
                continue;
            };
            match reference.upgrade() {
                Some(value) => return Some((key, value)),
                None => {
                    self.entries.remove(&key);
                    tracing::trace!("removed stale weak reference during iteration");
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.pending.len()))
    }
}

/// Iterator over keys of live entries of a [`WeakRefMap`].
pub struct Keys<'a, K, V, S> {
    inner: Iter<'a, K, V, S>,
}

impl<K, V, S> Iterator for Keys<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over live values of a [`WeakRefMap`].
pub struct Values<'a, K, V, S> {
    inner: Iter<'a, K, V, S>,
}

impl<K, V, S> Iterator for Values<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = Strong<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
