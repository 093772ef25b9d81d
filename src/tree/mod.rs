//! Height-balanced (AVL) binary search tree
//!
//! [`AvlTree`] is the engine behind [`Map`](crate::Map), [`Set`](crate::Set)
//! and [`MultiSet`](crate::MultiSet). It stores key/value nodes in a
//! [`NodeArena`] and keeps them ordered by key and balanced by height:
//!
//! - every node caches the height of its subtree (1 for a leaf);
//! - after an insertion or erasure, every ancestor of the changed position
//!   is re-examined and at most one single or double rotation per level
//!   restores `|height(left) - height(right)| <= 1`;
//! - nodes keep a parent link, so in-order navigation needs no stack.
//!
//! The tree does not fix a key policy. Each insertion names an
//! [`InsertMode`]: `Unique` rejects a key that is already present, `Multi`
//! stores duplicates after every equal key, so equal keys iterate in
//! insertion order.
//!
//! # Examples
//!
//! ```rust
//! use stdcoll::tree::{AvlTree, InsertMode};
//!
//! let mut tree = AvlTree::new();
//! for k in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(k, k * 10, InsertMode::Unique)?;
//! }
//! let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![1, 3, 4, 5, 7, 8, 9]);
//!
//! let pos = tree.find(&4);
//! assert_eq!(tree.erase(pos)?, (4, 40));
//! tree.verify()?;
//! # Ok::<(), stdcoll::CollError>(())
//! ```

mod balance;
mod cursor;
mod iter;
mod node;
mod verify;

pub use cursor::Cursor;
pub use iter::{IntoIter, IntoKeys, Iter, IterMut, Keys, Range, RangeKeys, Values, ValuesMut};

use crate::config::TreeConfig;
use crate::error::{CollError, Result};
use crate::memory::{ArenaStats, NodeArena, SlotId, NIL};
use cursor::{leftmost, predecessor, rightmost, successor};
use iter::inorder_ids;
use node::{Node, TreeArena};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// Key policy for a single insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertMode {
    /// Keep the existing node when an equal key is present
    Unique,
    /// Always insert; duplicates go after every equal key
    Multi,
}

/// Self-balancing binary search tree with arena-allocated nodes
pub struct AvlTree<K, V> {
    pub(crate) arena: TreeArena<K, V>,
    pub(crate) root: SlotId,
    config: TreeConfig,
}

impl<K, V> AvlTree<K, V> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Create an empty tree with the given configuration
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            arena: NodeArena::with_capacity(config.initial_capacity),
            root: NIL,
            config,
        }
    }

    /// Configuration this tree was created with
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Check if the tree holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Upper bound on the number of elements a tree can hold
    pub fn max_size(&self) -> usize {
        NodeArena::<Node<K, V>>::max_capacity()
    }

    /// Node storage statistics
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    #[inline]
    fn cursor_of(&self, id: SlotId) -> Cursor {
        match self.arena.generation(id) {
            Some(generation) if id != NIL => Cursor {
                node: id,
                generation,
                owner: self.arena.owner(),
            },
            _ => Cursor::END,
        }
    }

    /// Slot named by `cursor`, if it is live in this tree
    fn resolve(&self, cursor: Cursor, operation: &'static str) -> Result<SlotId> {
        if !self.is_valid(cursor) {
            return Err(CollError::invalid_cursor(operation));
        }
        Ok(cursor.node)
    }

    /// Check whether `cursor` names a live element of this tree
    pub fn is_valid(&self, cursor: Cursor) -> bool {
        !cursor.is_end()
            && cursor.owner == self.arena.owner()
            && self.arena.is_live(cursor.node, cursor.generation)
    }

    /// Cursor to the smallest element, or `end()` when empty
    pub fn begin(&self) -> Cursor {
        self.cursor_of(leftmost(&self.arena, self.root))
    }

    /// Past-the-end cursor
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor::END
    }

    /// Cursor to the largest element, or `end()` when empty
    pub fn last_cursor(&self) -> Cursor {
        self.cursor_of(rightmost(&self.arena, self.root))
    }

    /// Cursor to the in-order successor of `cursor`
    ///
    /// The successor of the last element is `end()`. `end()` and invalid
    /// cursors also advance to `end()`.
    pub fn next(&self, cursor: Cursor) -> Cursor {
        match self.resolve(cursor, "next") {
            Ok(id) => self.cursor_of(successor(&self.arena, id)),
            Err(_) => Cursor::END,
        }
    }

    /// Cursor to the in-order predecessor of `cursor`
    ///
    /// Stepping back from `end()` lands on the last element; stepping back
    /// from the first element (or from an invalid cursor) yields `end()`.
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        if cursor.is_end() {
            return self.last_cursor();
        }
        match self.resolve(cursor, "prev") {
            Ok(id) => self.cursor_of(predecessor(&self.arena, id)),
            Err(_) => Cursor::END,
        }
    }

    /// Key and value at `cursor`
    pub fn get(&self, cursor: Cursor) -> Result<(&K, &V)> {
        let id = self.resolve(cursor, "get")?;
        let node = &self.arena[id];
        Ok((&node.key, &node.value))
    }

    /// Key and mutable value at `cursor`
    pub fn get_mut(&mut self, cursor: Cursor) -> Result<(&K, &mut V)> {
        let id = self.resolve(cursor, "get_mut")?;
        let node = &mut self.arena[id];
        Ok((&node.key, &mut node.value))
    }

    /// Smallest element
    pub fn first(&self) -> Option<(&K, &V)> {
        self.get(self.begin()).ok()
    }

    /// Largest element
    pub fn last(&self) -> Option<(&K, &V)> {
        self.get(self.last_cursor()).ok()
    }

    /// Iterate over the elements in ascending key order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(
            &self.arena,
            leftmost(&self.arena, self.root),
            rightmost(&self.arena, self.root),
            self.len(),
        )
    }

    /// Iterate over the elements with mutable values
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let order = inorder_ids(&self.arena, leftmost(&self.arena, self.root), self.len());
        IterMut::new(self.arena.entries_mut(), order)
    }

    /// Iterate over the keys in ascending order
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Iterate over the values in key order
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Iterate over mutable values in key order
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self.iter_mut())
    }

    /// Consume the tree, yielding its keys in ascending order
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys::new(self.into_iter())
    }

    /// Keys of the half-open interval `[from, to)`
    pub fn range_keys(&self, from: Cursor, to: Cursor) -> RangeKeys<'_, K, V> {
        RangeKeys::new(self.range(from, to))
    }

    /// Iterate over the half-open interval `[from, to)`
    ///
    /// `to` must be reachable from `from` by advancing (or be `end()`);
    /// otherwise iteration runs to the end of the tree.
    pub fn range(&self, from: Cursor, to: Cursor) -> Range<'_, K, V> {
        let front = if self.is_valid(from) { from.node } else { NIL };
        let end = if self.is_valid(to) { to.node } else { NIL };
        Range::new(&self.arena, front, end)
    }

    /// Remove every element
    pub fn clear(&mut self) {
        if !self.is_empty() {
            log::debug!("Clearing tree with {} nodes", self.len());
        }
        self.arena.clear();
        self.root = NIL;
    }

    /// Exchange the contents of two trees
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Remove the element at `cursor` and return it
    ///
    /// A node with two children is replaced by its in-order successor,
    /// which is relinked into the vacated position. Only cursors to the
    /// erased element become invalid.
    ///
    /// # Errors
    ///
    /// [`CollError::InvalidCursor`] if `cursor` is `end()` or no longer
    /// names a live element. The tree is left untouched.
    pub fn erase(&mut self, cursor: Cursor) -> Result<(K, V)> {
        let target = self.resolve(cursor, "erase")?;
        let node = &self.arena[target];
        let (left, right, parent) = (node.left, node.right, node.parent);

        let rebalance_at = if node.has_two_children() {
            let next = leftmost(&self.arena, right);
            let start = if self.arena[next].parent == target {
                next
            } else {
                let next_parent = self.arena[next].parent;
                let next_right = self.arena[next].right;
                if next_right != NIL {
                    self.arena[next_right].parent = next_parent;
                }
                self.replace_child(next_parent, next, next_right);
                self.arena[next].right = right;
                self.arena[right].parent = next;
                next_parent
            };
            self.replace_child(parent, target, next);
            self.arena[left].parent = next;
            let height = self.arena[target].height;
            let moved = &mut self.arena[next];
            moved.parent = parent;
            moved.left = left;
            moved.height = height;
            start
        } else {
            let child = if left != NIL { left } else { right };
            if child != NIL {
                self.arena[child].parent = parent;
            }
            self.replace_child(parent, target, child);
            parent
        };

        let removed = self
            .arena
            .free(target)
            .ok_or_else(|| CollError::corrupt(format!("erased slot {} was not live", target)))?;
        self.rebalance_from(rebalance_at);
        self.check_invariants("erase");
        Ok((removed.key, removed.value))
    }

    /// Run the configured structural self-check
    fn check_invariants(&self, operation: &str) {
        if !self.config.verify_invariants {
            return;
        }
        if let Err(e) = self.verify() {
            log::error!("Tree invariant violated after {}: {}", operation, e);
            panic!("tree invariant violated after {}: {}", operation, e);
        }
    }

    /// Insert `key` with `value`
    ///
    /// Returns a cursor to the inserted element and `true`, or, in
    /// [`InsertMode::Unique`] when an equal key exists, a cursor to the
    /// existing element and `false` (the tree is unchanged and `key`/`value`
    /// are dropped).
    ///
    /// # Errors
    ///
    /// [`CollError::OutOfMemory`] when the node arena is exhausted.
    pub fn insert(&mut self, key: K, value: V, mode: InsertMode) -> Result<(Cursor, bool)> {
        let mut parent = NIL;
        let mut cur = self.root;
        let mut go_left = false;

        while cur != NIL {
            let node = &self.arena[cur];
            parent = cur;
            match key.cmp(&node.key) {
                Ordering::Less => {
                    go_left = true;
                    cur = node.left;
                }
                Ordering::Greater => {
                    go_left = false;
                    cur = node.right;
                }
                Ordering::Equal => match mode {
                    InsertMode::Unique => return Ok((self.cursor_of(cur), false)),
                    InsertMode::Multi => {
                        go_left = false;
                        cur = node.right;
                    }
                },
            }
        }

        let id = self.arena.alloc(Node::leaf(key, value, parent))?;
        if parent == NIL {
            self.root = id;
        } else if go_left {
            self.arena[parent].left = id;
        } else {
            self.arena[parent].right = id;
        }
        self.rebalance_from(parent);
        self.check_invariants("insert");
        Ok((self.cursor_of(id), true))
    }

    /// First element whose key is not less than `key`
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root;
        let mut found = NIL;
        while cur != NIL {
            let node = &self.arena[cur];
            if node.key.borrow().cmp(key) != Ordering::Less {
                found = cur;
                cur = node.left;
            } else {
                cur = node.right;
            }
        }
        self.cursor_of(found)
    }

    /// First element whose key is greater than `key`
    pub fn upper_bound<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root;
        let mut found = NIL;
        while cur != NIL {
            let node = &self.arena[cur];
            if node.key.borrow().cmp(key) == Ordering::Greater {
                found = cur;
                cur = node.left;
            } else {
                cur = node.right;
            }
        }
        self.cursor_of(found)
    }

    /// Cursor to the leftmost element equal to `key`, or `end()`
    pub fn find<Q>(&self, key: &Q) -> Cursor
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let cursor = self.lower_bound(key);
        match self.get(cursor) {
            Ok((k, _)) if k.borrow().cmp(key) == Ordering::Equal => cursor,
            _ => Cursor::END,
        }
    }

    /// Check if an element with `key` exists
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        !self.find(key).is_end()
    }

    /// Value of the leftmost element equal to `key`
    pub fn get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(self.find(key)).ok().map(|(_, v)| v)
    }

    /// Mutable value of the leftmost element equal to `key`
    pub fn get_value_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let cursor = self.find(key);
        self.get_mut(cursor).ok().map(|(_, v)| v)
    }

    /// Number of elements equal to `key`
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let start = self.lower_bound(key);
        if start.is_end() {
            return 0;
        }
        self.range(start, Cursor::END)
            .take_while(|&(k, _)| k.borrow().cmp(key) == Ordering::Equal)
            .count()
    }

    /// `(lower_bound(key), upper_bound(key))`
    pub fn equal_range<Q>(&self, key: &Q) -> (Cursor, Cursor)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Remove the leftmost element equal to `key`
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let cursor = self.find(key);
        if cursor.is_end() {
            return None;
        }
        self.erase(cursor).ok()
    }

    /// Move the elements of `other` into `self`
    ///
    /// With [`InsertMode::Unique`], elements whose key is already present in
    /// `self` stay in `other`; with [`InsertMode::Multi`], `other` ends up
    /// empty. Returns the number of elements moved.
    ///
    /// Moved elements are erased from `other` one by one, so cursors to them
    /// become invalid while cursors to elements that stay keep working.
    ///
    /// # Errors
    ///
    /// [`CollError::OutOfMemory`] if `self` runs out of node slots. The check
    /// happens before an element leaves `other`, so nothing is lost.
    pub fn merge(&mut self, other: &mut Self, mode: InsertMode) -> Result<usize> {
        let incoming = other.len();
        let mut moved = 0;
        let mut cursor = other.begin();

        while !cursor.is_end() {
            let next = other.next(cursor);
            let (key, _) = other.get(cursor)?;
            if mode == InsertMode::Unique && self.contains(key) {
                cursor = next;
                continue;
            }
            if self.len() >= self.max_size() {
                log::debug!(
                    "Merge stopped after {} of {} elements: target is full",
                    moved,
                    incoming
                );
                return Err(CollError::out_of_memory(mem::size_of::<Node<K, V>>()));
            }
            let (key, value) = other.erase(cursor)?;
            self.insert(key, value, mode)?;
            moved += 1;
            cursor = next;
        }

        log::debug!(
            "Merged {} of {} elements ({} left in source)",
            moved,
            incoming,
            other.len()
        );
        Ok(moved)
    }
}

impl<K, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> AvlTree<K, V> {
    /// Copy the subtree at `id` into `dst`, preserving shape and heights
    fn clone_subtree(&self, dst: &mut TreeArena<K, V>, id: SlotId, parent: SlotId) -> SlotId {
        if id == NIL {
            return NIL;
        }
        let node = &self.arena[id];
        let copy = Node {
            key: node.key.clone(),
            value: node.value.clone(),
            left: NIL,
            right: NIL,
            parent,
            height: node.height,
        };
        let new_id = match dst.alloc(copy) {
            Ok(new_id) => new_id,
            Err(e) => panic!("clone exceeded node arena: {}", e),
        };
        let left = self.clone_subtree(dst, node.left, new_id);
        let right = self.clone_subtree(dst, node.right, new_id);
        dst[new_id].left = left;
        dst[new_id].right = right;
        new_id
    }
}

impl<K: Clone, V: Clone> Clone for AvlTree<K, V> {
    fn clone(&self) -> Self {
        let mut arena = NodeArena::with_capacity(self.len());
        let root = self.clone_subtree(&mut arena, self.root, NIL);
        Self {
            arena,
            root,
            config: self.config.clone(),
        }
    }
}

impl<K, V> IntoIterator for AvlTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let order = inorder_ids(&self.arena, leftmost(&self.arena, self.root), self.len());
        IntoIter::new(self.arena.into_entries(), order)
    }
}

impl<'a, K, V> IntoIterator for &'a AvlTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut AvlTree<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AvlTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for AvlTree<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
