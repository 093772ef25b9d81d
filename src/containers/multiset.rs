//! Ordered multiset: keys may repeat

use crate::config::{Config, TreeConfig};
use crate::error::Result;
use crate::tree::{AvlTree, Cursor, InsertMode, IntoKeys, Keys, RangeKeys};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Ordered multiset backed by an AVL tree
///
/// Equal keys are kept in insertion order.
///
/// # Examples
///
/// ```rust
/// use stdcoll::MultiSet;
///
/// let mut bag = MultiSet::new();
/// for k in [4, 1, 4, 4] {
///     bag.insert(k)?;
/// }
/// assert_eq!(bag.len(), 4);
/// assert_eq!(bag.count(&4), 3);
/// assert_eq!(bag.equal_range_iter(&4).count(), 3);
/// # Ok::<(), stdcoll::CollError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MultiSet<K> {
    tree: AvlTree<K, ()>,
}

impl<K> MultiSet<K> {
    /// Create an empty multiset
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
        }
    }

    /// Create an empty multiset with a validated tree configuration
    pub fn with_config(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tree: AvlTree::with_config(config),
        })
    }

    /// Number of keys, counting repeats
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check if the multiset is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Upper bound on the number of keys
    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Remove every key
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchange the contents of two multisets
    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Cursor to the smallest key
    pub fn begin(&self) -> Cursor {
        self.tree.begin()
    }

    /// Past-the-end cursor
    pub fn end(&self) -> Cursor {
        self.tree.end()
    }

    /// Cursor after `cursor`
    pub fn next(&self, cursor: Cursor) -> Cursor {
        self.tree.next(cursor)
    }

    /// Cursor before `cursor`
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        self.tree.prev(cursor)
    }

    /// Key at `cursor`
    pub fn get(&self, cursor: Cursor) -> Result<&K> {
        self.tree.get(cursor).map(|(k, _)| k)
    }

    /// Smallest key
    pub fn first(&self) -> Option<&K> {
        self.tree.first().map(|(k, _)| k)
    }

    /// Largest key
    pub fn last(&self) -> Option<&K> {
        self.tree.last().map(|(k, _)| k)
    }

    /// Keys in ascending order, repeats included
    pub fn iter(&self) -> Keys<'_, K, ()> {
        self.tree.keys()
    }

    /// Keys in the half-open cursor interval `[from, to)`
    pub fn range(&self, from: Cursor, to: Cursor) -> RangeKeys<'_, K, ()> {
        self.tree.range_keys(from, to)
    }
}

impl<K: Ord> MultiSet<K> {
    /// Insert `key` after every equal key; returns its cursor
    pub fn insert(&mut self, key: K) -> Result<Cursor> {
        self.tree
            .insert(key, (), InsertMode::Multi)
            .map(|(cursor, _)| cursor)
    }

    /// Insert each key in order; every outcome reports `true`
    pub fn insert_many<I>(&mut self, keys: I) -> Vec<Result<(Cursor, bool)>>
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter()
            .map(|key| self.tree.insert(key, (), InsertMode::Multi))
            .collect()
    }

    /// Number of keys equal to `key`
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.count(key)
    }

    /// Cursor to the first key equal to `key`, or `end()`
    pub fn find<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(key)
    }

    /// Check if at least one key equals `key`
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// First key not less than `key`
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.lower_bound(key)
    }

    /// First key greater than `key`
    pub fn upper_bound<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.upper_bound(key)
    }

    /// `(lower_bound(key), upper_bound(key))`
    pub fn equal_range<Q>(&self, key: &Q) -> (Cursor, Cursor)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.equal_range(key)
    }

    /// Every key equal to `key`, in insertion order
    pub fn equal_range_iter<Q>(&self, key: &Q) -> RangeKeys<'_, K, ()>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (from, to) = self.equal_range(key);
        self.range(from, to)
    }

    /// Remove the key at `cursor`
    pub fn erase(&mut self, cursor: Cursor) -> Result<K> {
        self.tree.erase(cursor).map(|(k, _)| k)
    }

    /// Remove the first key equal to `key`; returns whether one was present
    pub fn remove_one<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(key).is_some()
    }

    /// Remove every key equal to `key`; returns how many were removed
    pub fn remove_all<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut removed = 0;
        while self.tree.remove(key).is_some() {
            removed += 1;
        }
        removed
    }

    /// Move every key of `other` into this multiset, leaving `other` empty.
    /// Returns the number of moved keys.
    pub fn merge(&mut self, other: &mut Self) -> Result<usize> {
        self.tree.merge(&mut other.tree, InsertMode::Multi)
    }

    /// Full structural check of the underlying tree
    pub fn verify(&self) -> Result<()> {
        self.tree.verify()
    }
}

impl<K> Default for MultiSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for MultiSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for MultiSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord> Extend<K> for MultiSet<K> {
    /// # Panics
    ///
    /// Panics if the node arena is exhausted.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            if let Err(e) = self.insert(key) {
                panic!("MultiSet::extend failed: {}", e);
            }
        }
    }
}

impl<K> IntoIterator for MultiSet<K> {
    type Item = K;
    type IntoIter = IntoKeys<K, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_keys()
    }
}

impl<'a, K> IntoIterator for &'a MultiSet<K> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Serialize> Serialize for MultiSet<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, K: Deserialize<'de> + Ord> Deserialize<'de> for MultiSet<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let keys = Vec::<K>::deserialize(deserializer)?;
        let mut set = MultiSet::new();
        for key in keys {
            set.insert(key)
                .map_err(<D::Error as serde::de::Error>::custom)?;
        }
        Ok(set)
    }
}
