//! Ordered set with unique keys

use crate::config::{Config, TreeConfig};
use crate::error::Result;
use crate::tree::{AvlTree, Cursor, InsertMode, IntoKeys, Keys, RangeKeys};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Ordered set backed by an AVL tree
///
/// # Examples
///
/// ```rust
/// use stdcoll::Set;
///
/// let set: Set<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 7, 8, 9]);
/// assert!(set.contains(&4));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Set<K> {
    tree: AvlTree<K, ()>,
}

impl<K> Set<K> {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
        }
    }

    /// Create an empty set with a validated tree configuration
    pub fn with_config(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tree: AvlTree::with_config(config),
        })
    }

    /// Number of keys
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check if the set is empty
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

    /// Exchange the contents of two sets
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

    /// Cursor before `cursor`; `prev(end())` is the largest key
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

    /// Keys in ascending order
    pub fn iter(&self) -> Keys<'_, K, ()> {
        self.tree.keys()
    }

    /// Keys in the half-open cursor interval `[from, to)`
    pub fn range(&self, from: Cursor, to: Cursor) -> RangeKeys<'_, K, ()> {
        self.tree.range_keys(from, to)
    }
}

impl<K: Ord> Set<K> {
    /// Insert `key` unless present; returns its cursor and whether it was
    /// inserted
    pub fn insert(&mut self, key: K) -> Result<(Cursor, bool)> {
        self.tree.insert(key, (), InsertMode::Unique)
    }

    /// Insert each key in order; returns one outcome per key
    pub fn insert_many<I>(&mut self, keys: I) -> Vec<Result<(Cursor, bool)>>
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter().map(|key| self.insert(key)).collect()
    }

    /// Cursor to `key`, or `end()`
    pub fn find<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(key)
    }

    /// Check if `key` is present
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

    /// Remove the key at `cursor`
    pub fn erase(&mut self, cursor: Cursor) -> Result<K> {
        self.tree.erase(cursor).map(|(k, _)| k)
    }

    /// Remove `key`; returns whether it was present
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(key).is_some()
    }

    /// Move keys of `other` that are absent here; the rest stay in `other`.
    /// Returns the number of moved keys.
    pub fn merge(&mut self, other: &mut Self) -> Result<usize> {
        self.tree.merge(&mut other.tree, InsertMode::Unique)
    }

    /// Full structural check of the underlying tree
    pub fn verify(&self) -> Result<()> {
        self.tree.verify()
    }
}

impl<K> Default for Set<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for Set<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for Set<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord> Extend<K> for Set<K> {
    /// # Panics
    ///
    /// Panics if the node arena is exhausted.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            if let Err(e) = self.insert(key) {
                panic!("Set::extend failed: {}", e);
            }
        }
    }
}

impl<K> IntoIterator for Set<K> {
    type Item = K;
    type IntoIter = IntoKeys<K, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_keys()
    }
}

impl<'a, K> IntoIterator for &'a Set<K> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Serialize> Serialize for Set<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, K: Deserialize<'de> + Ord> Deserialize<'de> for Set<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let keys = Vec::<K>::deserialize(deserializer)?;
        let mut set = Set::new();
        for key in keys {
            set.insert(key)
                .map_err(<D::Error as serde::de::Error>::custom)?;
        }
        Ok(set)
    }
}
