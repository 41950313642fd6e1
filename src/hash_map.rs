//! HashMap: separate chaining over `LinkedList` buckets with load-factor
//! driven doubling.
//!
//! Bucket of a key: `hash(key) mod capacity`. Each bucket is a
//! `LinkedList<HashEntry<K, V>>` holding entries in insertion order.
//!
//! Resize policy
//! - Only the new-key path of `put` (and the helpers built on it) can grow
//!   the table. Replacing the value of an existing key never resizes.
//! - Before linking a new entry, the projected ratio `(len + 1) / capacity`
//!   is compared against the threshold. While it is strictly greater, the
//!   target capacity doubles; the table is rebuilt once at the final target.
//!   The ratio can therefore sit exactly at the threshold, never above it.
//! - A rebuild drains the old buckets in index order and appends each entry
//!   to its new bucket, so relative order within a new bucket follows the
//!   old traversal order.
//! - Capacity never shrinks; `clear` keeps the bucket array.
//! - Every bucket is a `LinkedList` with its own node arena, and an empty
//!   arena already holds one heap allocation, so `capacity` buckets cost
//!   `capacity` allocations up front and on each rebuild.

use crate::config::HashMapConfig;
use crate::error::Result;
use crate::linked_list::{self, LinkedList};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::ops::Index;

pub use hashbrown::hash_map::DefaultHashBuilder;

/// A key with its value. The key is fixed once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashEntry<K, V> {
    key: K,
    value: V,
}

impl<K, V> HashEntry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

type Bucket<K, V> = LinkedList<HashEntry<K, V>>;

#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    hasher: S,
    pub(crate) buckets: Vec<Bucket<K, V>>,
    len: usize,
    load_factor_threshold: f64,
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Bucket<K, V>> {
    (0..capacity).map(|_| LinkedList::new()).collect()
}

impl<K, V> HashMap<K, V, DefaultHashBuilder>
where
    K: Eq + Hash,
{
    /// Empty map with the default configuration (16 buckets, 0.75).
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Empty map with `capacity` buckets. Zero is rejected.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(HashMapConfig::default().with_initial_capacity(capacity))
    }

    pub fn with_config(config: HashMapConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V> Default for HashMap<K, V, DefaultHashBuilder>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        let config = HashMapConfig::default();
        Self::from_parts(config, hasher)
    }

    pub fn with_config_and_hasher(config: HashMapConfig, hasher: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, hasher))
    }

    fn from_parts(config: HashMapConfig, hasher: S) -> Self {
        log::trace!(
            "new chained map: {} buckets, load factor threshold {}",
            config.initial_capacity,
            config.load_factor_threshold
        );
        Self {
            hasher,
            buckets: empty_buckets(config.initial_capacity),
            len: 0,
            load_factor_threshold: config.load_factor_threshold,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    pub(crate) fn bucket_index<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        (self.hasher.hash_one(q) % self.buckets.len() as u64) as usize
    }

    fn bucket<Q>(&self, q: &Q) -> &Bucket<K, V>
    where
        Q: ?Sized + Hash,
    {
        &self.buckets[self.bucket_index(q)]
    }

    /// Smallest `capacity * 2^k` that keeps `entries / capacity` within the
    /// threshold.
    fn target_capacity(&self, entries: usize) -> usize {
        let mut capacity = self.buckets.len();
        while entries as f64 / capacity as f64 > self.load_factor_threshold {
            match capacity.checked_mul(2) {
                Some(c) => capacity = c,
                None => break,
            }
        }
        capacity
    }

    /// Rebuilds the bucket array at `new_capacity`, re-bucketing every entry.
    fn rehash(&mut self, new_capacity: usize) {
        log::debug!(
            "resizing chained map: {} -> {} buckets ({} entries)",
            self.buckets.len(),
            new_capacity,
            self.len
        );
        let old = core::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        for bucket in old {
            for entry in bucket {
                let idx = self.bucket_index(&entry.key);
                self.buckets[idx].append(entry);
            }
        }
    }

    /// Links a key known to be absent, growing first if needed. Returns the
    /// bucket the entry landed in; the entry is that bucket's last node.
    fn insert_new(&mut self, key: K, value: V) -> usize {
        let target = self.target_capacity(self.len + 1);
        if target != self.buckets.len() {
            self.rehash(target);
        }
        let idx = self.bucket_index(&key);
        self.buckets[idx].append(HashEntry::new(key, value));
        self.len += 1;
        idx
    }

    /// Inserts or replaces. Returns the value previously stored under `key`.
    ///
    /// `get(&key)` yields `value` as soon as this returns.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        if let Some(entry) = self.buckets[idx].find_mut(|e| e.key == key) {
            return Some(core::mem::replace(&mut entry.value, value));
        }
        self.insert_new(key, value);
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.bucket(key)
            .find(|e| e.key.borrow() == key)
            .map(|e| &e.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .find_mut(|e| e.key.borrow() == key)
            .map(|e| &mut e.value)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.bucket(key).iter().any(|e| e.key.borrow() == key)
    }

    /// Removes `key`, handing back its value.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_index(key);
        let entry = self.buckets[idx].take_first(|e| e.key.borrow() == key)?;
        self.len -= 1;
        Some(entry.value)
    }

    /// Removes `key`. Returns whether it was present; a miss changes nothing.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.take(key).is_some()
    }

    /// Value under `key`, inserting `default` first if the key is absent.
    pub fn get_or_insert(&mut self, key: K, default: V) -> &mut V {
        self.get_or_insert_with(key, || default)
    }

    /// Like [`get_or_insert`](Self::get_or_insert); `default` only runs on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let idx = self.bucket_index(&key);
        if !self.buckets[idx].iter().any(|e| e.key == key) {
            let idx = self.insert_new(key, default());
            let entry = self.buckets[idx]
                .back_mut()
                .expect("bucket holds the entry just linked");
            return &mut entry.value;
        }
        let entry = self.buckets[idx]
            .find_mut(|e| e.key == key)
            .expect("key was found in this bucket");
        &mut entry.value
    }

    /// Drops every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Entries in bucket order, then insertion order within each bucket.
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.len,
        }
    }

    /// `(key, value)` pairs; see [`entries`](Self::entries) for the order.
    pub fn items(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries(),
        }
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.items()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.entries(),
        }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.entries(),
        }
    }
}

/// Iterator over `&HashEntry`, walking buckets `0..capacity`.
pub struct Entries<'a, K, V> {
    buckets: core::slice::Iter<'a, Bucket<K, V>>,
    current: Option<linked_list::Iter<'a, HashEntry<K, V>>>,
    remaining: usize,
}

impl<K, V> Clone for Entries<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = &'a HashEntry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(|it| it.next()) {
                self.remaining -= 1;
                return Some(entry);
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}
impl<K, V> FusedIterator for Entries<'_, K, V> {}

/// Iterator over `(&K, &V)`.
pub struct Iter<'a, K, V> {
    inner: Entries<'a, K, V>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

pub struct Keys<'a, K, V> {
    inner: Entries<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|e| &e.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

pub struct Values<'a, K, V> {
    inner: Entries<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|e| &e.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Owning iterator over `(K, V)`, in bucket order.
pub struct IntoIter<K, V> {
    buckets: std::vec::IntoIter<Bucket<K, V>>,
    current: Option<linked_list::IntoIter<HashEntry<K, V>>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(|it| it.next()) {
                self.remaining -= 1;
                return Some(entry.into_parts());
            }
            self.current = Some(self.buckets.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            remaining: self.len,
            buckets: self.buckets.into_iter(),
            current: None,
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K, Q, V, S> Index<&Q> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: ?Sized + Eq + Hash,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, S> fmt::Debug for HashMap<K, V, S>
where
    K: fmt::Debug + Eq + Hash,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
