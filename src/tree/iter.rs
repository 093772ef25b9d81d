//! Iterators over an [`AvlTree`](super::AvlTree).
//!
//! `Iter` and `Range` walk the tree with the parent-link navigation in
//! [`cursor`](super::cursor). `IterMut` and `IntoIter` need disjoint
//! mutable or owned access to nodes, so they fix the in-order sequence of
//! slot ids up front (using the same navigation) and then hand out nodes in
//! that order.

use super::cursor::{predecessor, successor};
use super::node::{Node, TreeArena};
use crate::memory::{SlotId, NIL};
use std::iter::FusedIterator;

/// In-order slot ids of every node, starting at `first`
pub(crate) fn inorder_ids<K, V>(arena: &TreeArena<K, V>, first: SlotId, len: usize) -> Vec<SlotId> {
    let mut ids = Vec::with_capacity(len);
    let mut cur = first;
    while cur != NIL {
        ids.push(cur);
        cur = successor(arena, cur);
    }
    ids
}

/// Borrowing in-order iterator over `(&K, &V)`
pub struct Iter<'a, K, V> {
    arena: &'a TreeArena<K, V>,
    front: SlotId,
    back: SlotId,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(arena: &'a TreeArena<K, V>, front: SlotId, back: SlotId, len: usize) -> Self {
        Self {
            arena,
            front,
            back,
            remaining: len,
        }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front;
        self.remaining -= 1;
        self.front = successor(self.arena, id);
        let node = &self.arena[id];
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back;
        self.remaining -= 1;
        self.back = predecessor(self.arena, id);
        let node = &self.arena[id];
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// Iterator over the half-open cursor interval `[from, to)`
pub struct Range<'a, K, V> {
    arena: &'a TreeArena<K, V>,
    front: SlotId,
    end: SlotId,
}

impl<'a, K, V> Range<'a, K, V> {
    pub(crate) fn new(arena: &'a TreeArena<K, V>, front: SlotId, end: SlotId) -> Self {
        Self { arena, front, end }
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.end || self.front == NIL {
            return None;
        }
        let id = self.front;
        self.front = successor(self.arena, id);
        let node = &self.arena[id];
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> FusedIterator for Range<'a, K, V> {}

/// In-order iterator over `(&K, &mut V)`
pub struct IterMut<'a, K, V> {
    nodes: Vec<Option<&'a mut Node<K, V>>>,
    order: std::vec::IntoIter<SlotId>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(nodes: Vec<Option<&'a mut Node<K, V>>>, order: Vec<SlotId>) -> Self {
        Self {
            nodes,
            order: order.into_iter(),
        }
    }

    fn take(&mut self, id: SlotId) -> Option<(&'a K, &'a mut V)> {
        let node = self.nodes.get_mut(id as usize)?.take()?;
        let Node { key, value, .. } = node;
        let key: &'a K = key;
        Some((key, value))
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.order.next()?;
        self.take(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.order.next_back()?;
        self.take(id)
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}
impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

/// Owning in-order iterator over `(K, V)`
pub struct IntoIter<K, V> {
    nodes: Vec<Option<Node<K, V>>>,
    order: std::vec::IntoIter<SlotId>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(nodes: Vec<Option<Node<K, V>>>, order: Vec<SlotId>) -> Self {
        Self {
            nodes,
            order: order.into_iter(),
        }
    }

    fn take(&mut self, id: SlotId) -> Option<(K, V)> {
        let node = self.nodes.get_mut(id as usize)?.take()?;
        Some((node.key, node.value))
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.order.next()?;
        self.take(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.order.next_back()?;
        self.take(id)
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

/// Iterator over the keys of a tree
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}
impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

/// Iterator over the values of a tree
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

/// Owning iterator over the keys of a tree
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

impl<K, V> IntoKeys<K, V> {
    pub(crate) fn new(inner: IntoIter<K, V>) -> Self {
        Self { inner }
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {}

/// Borrowing iterator over the keys in a cursor interval
pub struct RangeKeys<'a, K, V> {
    inner: Range<'a, K, V>,
}

impl<'a, K, V> RangeKeys<'a, K, V> {
    pub(crate) fn new(inner: Range<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for RangeKeys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// Iterator over mutable values in key order
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> ValuesMut<'a, K, V> {
    pub(crate) fn new(inner: IterMut<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for ValuesMut<'a, K, V> {}
