//! Ordered map with unique keys

use crate::config::{Config, TreeConfig};
use crate::error::{CollError, Result};
use crate::memory::ArenaStats;
use crate::tree::{
    AvlTree, Cursor, InsertMode, IntoIter, IntoKeys, Iter, IterMut, Keys, Range, Values, ValuesMut,
};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

/// Ordered map backed by an AVL tree
///
/// Every key is stored at most once. Iteration yields entries in ascending
/// key order.
///
/// # Examples
///
/// ```rust
/// use stdcoll::Map;
///
/// let mut map = Map::new();
/// map.insert((1, "one"))?;
/// map.insert((2, "two"))?;
/// map.insert((3, "three"))?;
///
/// let pos = map.find(&2);
/// map.erase(pos)?;
/// assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&1, &"one"), (&3, &"three")]);
/// assert!(map.at(&2).unwrap_err().is_out_of_range());
/// # Ok::<(), stdcoll::CollError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Map<K, V> {
    tree: AvlTree<K, V>,
}

impl<K, V> Map<K, V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
        }
    }

    /// Create an empty map with a validated tree configuration
    pub fn with_config(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tree: AvlTree::with_config(config),
        })
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check if the map holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Upper bound on the number of entries
    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Node storage statistics
    pub fn arena_stats(&self) -> ArenaStats {
        self.tree.arena_stats()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchange the contents of two maps
    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Cursor to the entry with the smallest key
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

    /// Cursor before `cursor`; `prev(end())` is the last entry
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        self.tree.prev(cursor)
    }

    /// Entry at `cursor`
    pub fn get(&self, cursor: Cursor) -> Result<(&K, &V)> {
        self.tree.get(cursor)
    }

    /// Entry at `cursor` with a mutable value
    pub fn get_mut(&mut self, cursor: Cursor) -> Result<(&K, &mut V)> {
        self.tree.get_mut(cursor)
    }

    /// Entry with the smallest key
    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first()
    }

    /// Entry with the largest key
    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last()
    }

    /// Entries in ascending key order
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    /// Entries with mutable values
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.tree.iter_mut()
    }

    /// Keys in ascending order
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.tree.keys()
    }

    /// Values in key order
    pub fn values(&self) -> Values<'_, K, V> {
        self.tree.values()
    }

    /// Mutable values in key order
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        self.tree.values_mut()
    }

    /// Consume the map, yielding its keys
    pub fn into_keys(self) -> IntoKeys<K, V> {
        self.tree.into_keys()
    }

    /// Entries in the half-open cursor interval `[from, to)`
    pub fn range(&self, from: Cursor, to: Cursor) -> Range<'_, K, V> {
        self.tree.range(from, to)
    }
}

impl<K: Ord, V> Map<K, V> {
    /// Insert `entry` unless its key is present
    ///
    /// Returns the cursor of the entry holding the key and whether the
    /// insertion happened. An existing value is left untouched.
    pub fn insert(&mut self, entry: (K, V)) -> Result<(Cursor, bool)> {
        let (key, value) = entry;
        self.tree.insert(key, value, InsertMode::Unique)
    }

    /// Same as [`insert`](Self::insert) with separate key and value
    pub fn insert_kv(&mut self, key: K, value: V) -> Result<(Cursor, bool)> {
        self.tree.insert(key, value, InsertMode::Unique)
    }

    /// Insert `key` or overwrite its value; the flag is `true` on insertion
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Result<(Cursor, bool)> {
        let pos = self.tree.find(&key);
        if let Ok((_, slot)) = self.tree.get_mut(pos) {
            *slot = value;
            return Ok((pos, false));
        }
        self.tree.insert(key, value, InsertMode::Unique)
    }

    /// Insert each entry in order; returns one outcome per entry
    ///
    /// A failed insertion does not stop the batch, so every entry gets its
    /// own `Result`.
    pub fn insert_many<I>(&mut self, entries: I) -> Vec<Result<(Cursor, bool)>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        entries.into_iter().map(|entry| self.insert(entry)).collect()
    }

    /// Value for `key`
    ///
    /// # Errors
    ///
    /// [`CollError::KeyNotFound`] if the key is absent.
    pub fn at<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_value(key).ok_or_else(CollError::key_not_found)
    }

    /// Mutable value for `key`
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_value_mut(key).ok_or_else(CollError::key_not_found)
    }

    /// Value for `key`, inserting `V::default()` first when absent
    pub fn get_or_insert_default(&mut self, key: K) -> Result<&mut V>
    where
        V: Default,
    {
        let (pos, _) = self.tree.insert(key, V::default(), InsertMode::Unique)?;
        self.tree.get_mut(pos).map(|(_, v)| v)
    }

    /// Value for `key`, if present
    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_value(key)
    }

    /// Mutable value for `key`, if present
    pub fn lookup_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_value_mut(key)
    }

    /// Cursor to the entry for `key`, or `end()`
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

    /// First entry whose key is not less than `key`
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.lower_bound(key)
    }

    /// First entry whose key is greater than `key`
    pub fn upper_bound<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.upper_bound(key)
    }

    /// Remove the entry at `cursor`
    pub fn erase(&mut self, cursor: Cursor) -> Result<(K, V)> {
        self.tree.erase(cursor)
    }

    /// Remove the entry for `key` and return its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(key).map(|(_, v)| v)
    }

    /// Move entries of `other` whose keys are absent here; the rest stay in
    /// `other`. Returns the number of moved entries.
    pub fn merge(&mut self, other: &mut Self) -> Result<usize> {
        self.tree.merge(&mut other.tree, InsertMode::Unique)
    }

    /// Full structural check of the underlying tree
    pub fn verify(&self) -> Result<()> {
        self.tree.verify()
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

impl<K, V, Q> Index<&Q> for Map<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is absent.
    fn index(&self, key: &Q) -> &V {
        match self.lookup(key) {
            Some(value) => value,
            None => panic!("key not found in Map"),
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for Map<K, V> {
    /// Entries whose key is already present are dropped.
    ///
    /// # Panics
    ///
    /// Panics if the node arena is exhausted.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for entry in iter {
            if let Err(e) = self.insert(entry) {
                panic!("Map::extend failed: {}", e);
            }
        }
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut Map<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K: Serialize, V: Serialize> Serialize for Map<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct MapVisitor<K, V> {
    marker: PhantomData<fn() -> Map<K, V>>,
}

impl<'de, K, V> Visitor<'de> for MapVisitor<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    type Value = Map<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut map = Map::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert_or_assign(key, value)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for Map<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor {
            marker: PhantomData,
        })
    }
}
