//! A map that answers misses with a configured default.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::Deref;

enum PolicyKind<K, V> {
    Value { value: V, duplicate: fn(&V) -> V },
    Compute(Box<dyn Fn(&K) -> V + Send + Sync>),
}

/// How a [`DefaultMap`] produces a value for a missing key.
///
/// A constant default must be `Clone` when the policy is built; lookups carry
/// no `Clone` bound.
pub struct DefaultPolicy<K, V> {
    kind: PolicyKind<K, V>,
}

impl<K, V> DefaultPolicy<K, V> {
    /// A constant, cloned on every miss.
    pub fn value(value: V) -> Self
    where
        V: Clone,
    {
        Self {
            kind: PolicyKind::Value {
                value,
                duplicate: V::clone,
            },
        }
    }

    /// A function of the missing key, called on every miss.
    pub fn compute<F>(function: F) -> Self
    where
        F: Fn(&K) -> V + Send + Sync + 'static,
    {
        Self {
            kind: PolicyKind::Compute(Box::new(function)),
        }
    }

    /// Returns the constant default, if this policy has one.
    pub const fn constant(&self) -> Option<&V> {
        match &self.kind {
            PolicyKind::Value { value, .. } => Some(value),
            PolicyKind::Compute(_) => None,
        }
    }

    fn produce(&self, key: &K) -> V {
        match &self.kind {
            PolicyKind::Value { value, duplicate } => duplicate(value),
            PolicyKind::Compute(function) => function(key),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for DefaultPolicy<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PolicyKind::Value { value, .. } => formatter.debug_tuple("Value").field(value).finish(),
            PolicyKind::Compute(_) => formatter.write_str("Compute(<fn>)"),
        }
    }
}

/// The result of [`DefaultMap::get`].
///
/// Dereferences to the value either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue<'a, V> {
    /// The value stored under the key.
    Stored(&'a V),
    /// A default produced for a missing key.
    Computed(V),
}

impl<V> DefaultValue<'_, V> {
    /// Returns `true` if the value came from the map itself.
    pub const fn is_stored(&self) -> bool {
        matches!(self, Self::Stored(_))
    }

    /// Converts into an owned value, cloning a stored one.
    pub fn into_owned(self) -> V
    where
        V: Clone,
    {
        match self {
            Self::Stored(value) => value.clone(),
            Self::Computed(value) => value,
        }
    }
}

impl<V> Deref for DefaultValue<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        match self {
            Self::Stored(value) => value,
            Self::Computed(value) => value,
        }
    }
}

/// A key-unique map with a fallback for absent keys.
///
/// Lookups that miss return the default without inserting it, so
/// [`contains_key`](Self::contains_key), [`len`](Self::len) and iteration only
/// ever see values that were explicitly inserted.
///
/// # Examples
///
/// ```rust
/// use utilkit::map::DefaultMap;
///
/// let map: DefaultMap<String, usize> = DefaultMap::with_fn(|key: &String| key.len());
///
/// assert_eq!(*map.get("four"), 4);
/// assert!(map.is_empty());
/// ```
pub struct DefaultMap<K, V, S = RandomState> {
    entries: HashMap<K, V, S>,
    policy: DefaultPolicy<K, V>,
}

impl<K, V> DefaultMap<K, V, RandomState> {
    /// Creates an empty map whose misses return clones of `value`.
    #[must_use]
    pub fn with_value(value: V) -> Self
    where
        V: Clone,
    {
        Self::with_policy(DefaultPolicy::value(value))
    }

    /// Creates an empty map whose misses return `function(key)`.
    #[must_use]
    pub fn with_fn<F>(function: F) -> Self
    where
        F: Fn(&K) -> V + Send + Sync + 'static,
    {
        Self::with_policy(DefaultPolicy::compute(function))
    }

    /// Creates an empty map with the given policy.
    #[must_use]
    pub fn with_policy(policy: DefaultPolicy<K, V>) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
        }
    }
}

impl<K: Eq + Hash, V> DefaultMap<K, V, RandomState> {
    /// Creates a map with the given policy and initial entries.
    ///
    /// Later entries replace earlier ones with the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::map::{DefaultMap, DefaultPolicy};
    ///
    /// let map = DefaultMap::from_entries(DefaultPolicy::value(-1), [("a", 1), ("b", 2)]);
    /// assert_eq!(*map.get(&"b"), 2);
    /// assert_eq!(*map.get(&"z"), -1);
    /// ```
    pub fn from_entries<I>(policy: DefaultPolicy<K, V>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries.into_iter().collect(),
            policy,
        }
    }
}

impl<K, V, S> DefaultMap<K, V, S> {
    /// Creates an empty map with the given policy and hasher.
    pub fn with_policy_and_hasher(policy: DefaultPolicy<K, V>, hasher: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hasher),
            policy,
        }
    }

    /// Returns the default policy.
    pub const fn policy(&self) -> &DefaultPolicy<K, V> {
        &self.policy
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every stored entry; the policy is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over stored entries.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Iterates over stored keys.
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Iterates over stored values.
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Borrows the underlying map.
    pub const fn as_map(&self) -> &HashMap<K, V, S> {
        &self.entries
    }
}

impl<K, V, S> DefaultMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns the stored value, or the default when the key is absent.
    ///
    /// A constant default is cloned; a computed default is recomputed on every
    /// call. The map is never modified. A computed default needs an owned key,
    /// which is why `Q` must convert into `K`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::map::DefaultMap;
    ///
    /// let mut map = DefaultMap::with_value(vec![0]);
    /// map.insert(1, vec![1, 1]);
    ///
    /// assert!(map.get(&1).is_stored());
    /// assert_eq!(map.get(&2).into_owned(), vec![0]);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> DefaultValue<'_, V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        match self.entries.get(key) {
            Some(value) => DefaultValue::Stored(value),
            None => DefaultValue::Computed(self.policy.produce(&key.to_owned())),
        }
    }

    /// Returns the stored value without consulting the default.
    pub fn get_stored<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns the stored value, inserting the default first if absent.
    ///
    /// This is the only lookup that stores a default.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V {
        match self.entries.entry(key) {
            hash_map::Entry::Occupied(entry) => entry.into_mut(),
            hash_map::Entry::Vacant(entry) => {
                let value = self.policy.produce(entry.key());
                entry.insert(value)
            }
        }
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key)
    }
}

impl<K, V, S> Extend<(K, V)> for DefaultMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V, S> IntoIterator for DefaultMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a DefaultMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for DefaultMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DefaultMap")
            .field("entries", &self.entries)
            .field("policy", &self.policy)
            .finish()
    }
}
