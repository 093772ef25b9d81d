//! Doubly linked list over a node arena
//!
//! Nodes are stored in a [`NodeArena`] and linked by slot id, the same way
//! tree nodes are. `end()` is the list's sentinel position: `next` of the
//! last element and `prev` of the first element both lead to it, and `prev`
//! of `end()` leads back to the last element, so the positions form a ring.
//!
//! Cursors ([`ListCursor`]) carry the slot generation, so a cursor to an
//! erased element is detected instead of silently aliasing a reused slot,
//! and a cursor handed to a different list (a clone included) is rejected.
//! `sort` and `reverse` relink nodes and keep every cursor valid.

use crate::error::{CollError, Result};
use crate::memory::{NodeArena, SlotId, NIL, NO_OWNER};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

#[derive(Debug, Clone)]
struct ListNode<T> {
    value: T,
    prev: SlotId,
    next: SlotId,
}

/// Position of an element in a [`List`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListCursor {
    node: SlotId,
    generation: u32,
    owner: u64,
}

impl ListCursor {
    /// The past-the-end (sentinel) position
    pub const END: ListCursor = ListCursor {
        node: NIL,
        generation: 0,
        owner: NO_OWNER,
    };

    /// Check if this is the past-the-end position
    #[inline]
    pub fn is_end(&self) -> bool {
        self.node == NIL
    }
}

impl Default for ListCursor {
    fn default() -> Self {
        Self::END
    }
}

/// Doubly linked list
///
/// # Examples
///
/// ```rust
/// use stdcoll::List;
///
/// let mut list: List<i32> = [3, 1, 2].into_iter().collect();
/// list.push_front(0)?;
/// list.sort();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
/// assert_eq!(list.pop_back()?, 3);
/// # Ok::<(), stdcoll::CollError>(())
/// ```
pub struct List<T> {
    arena: NodeArena<ListNode<T>>,
    head: SlotId,
    tail: SlotId,
}

impl<T> List<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: NIL,
            tail: NIL,
        }
    }

    /// Create a list of `len` default values
    pub fn with_len(len: usize) -> Result<Self>
    where
        T: Default,
    {
        let mut list = Self {
            arena: NodeArena::with_capacity(len),
            head: NIL,
            tail: NIL,
        };
        for _ in 0..len {
            list.push_back(T::default())?;
        }
        Ok(list)
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == NIL
    }

    /// Upper bound on the number of elements a list can hold
    pub fn max_size(&self) -> usize {
        NodeArena::<ListNode<T>>::max_capacity()
    }

    fn cursor_of(&self, id: SlotId) -> ListCursor {
        match self.arena.generation(id) {
            Some(generation) if id != NIL => ListCursor {
                node: id,
                generation,
                owner: self.arena.owner(),
            },
            _ => ListCursor::END,
        }
    }

    fn resolve(&self, cursor: ListCursor, operation: &'static str) -> Result<SlotId> {
        if !self.is_valid(cursor) {
            return Err(CollError::invalid_cursor(operation));
        }
        Ok(cursor.node)
    }

    /// Check whether `cursor` names a live element of this list
    pub fn is_valid(&self, cursor: ListCursor) -> bool {
        !cursor.is_end()
            && cursor.owner == self.arena.owner()
            && self.arena.is_live(cursor.node, cursor.generation)
    }

    /// Cursor to the first element, or `end()` when empty
    pub fn begin(&self) -> ListCursor {
        self.cursor_of(self.head)
    }

    /// Sentinel position
    #[inline]
    pub fn end(&self) -> ListCursor {
        ListCursor::END
    }

    /// Position after `cursor`; `next(end())` wraps to the first element
    pub fn next(&self, cursor: ListCursor) -> ListCursor {
        if cursor.is_end() {
            return self.begin();
        }
        match self.resolve(cursor, "next") {
            Ok(id) => self.cursor_of(self.arena[id].next),
            Err(_) => ListCursor::END,
        }
    }

    /// Position before `cursor`; `prev(end())` is the last element
    pub fn prev(&self, cursor: ListCursor) -> ListCursor {
        if cursor.is_end() {
            return self.cursor_of(self.tail);
        }
        match self.resolve(cursor, "prev") {
            Ok(id) => self.cursor_of(self.arena[id].prev),
            Err(_) => ListCursor::END,
        }
    }

    /// Element at `cursor`
    pub fn get(&self, cursor: ListCursor) -> Result<&T> {
        let id = self.resolve(cursor, "get")?;
        Ok(&self.arena[id].value)
    }

    /// Mutable element at `cursor`
    pub fn get_mut(&mut self, cursor: ListCursor) -> Result<&mut T> {
        let id = self.resolve(cursor, "get_mut")?;
        Ok(&mut self.arena[id].value)
    }

    /// First element
    pub fn front(&self) -> Result<&T> {
        self.arena
            .get(self.head)
            .map(|node| &node.value)
            .ok_or(CollError::empty("front"))
    }

    /// Last element
    pub fn back(&self) -> Result<&T> {
        self.arena
            .get(self.tail)
            .map(|node| &node.value)
            .ok_or(CollError::empty("back"))
    }

    /// Mutable first element
    pub fn front_mut(&mut self) -> Result<&mut T> {
        let head = self.head;
        self.arena
            .get_mut(head)
            .map(|node| &mut node.value)
            .ok_or(CollError::empty("front"))
    }

    /// Mutable last element
    pub fn back_mut(&mut self) -> Result<&mut T> {
        let tail = self.tail;
        self.arena
            .get_mut(tail)
            .map(|node| &mut node.value)
            .ok_or(CollError::empty("back"))
    }

    /// Link a new node holding `value` before slot `before` (`NIL` appends)
    fn link_before(&mut self, before: SlotId, value: T) -> Result<SlotId> {
        let prev = if before == NIL {
            self.tail
        } else {
            self.arena[before].prev
        };
        let id = self.arena.alloc(ListNode {
            value,
            prev,
            next: before,
        })?;
        if prev == NIL {
            self.head = id;
        } else {
            self.arena[prev].next = id;
        }
        if before == NIL {
            self.tail = id;
        } else {
            self.arena[before].prev = id;
        }
        Ok(id)
    }

    /// Detach slot `id` from its neighbours without freeing it
    fn unlink(&mut self, id: SlotId) {
        let (prev, next) = {
            let node = &self.arena[id];
            (node.prev, node.next)
        };
        if prev == NIL {
            self.head = next;
        } else {
            self.arena[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.arena[next].prev = prev;
        }
    }

    fn remove_slot(&mut self, id: SlotId) -> Result<T> {
        self.unlink(id);
        self.arena
            .free(id)
            .map(|node| node.value)
            .ok_or_else(|| CollError::corrupt(format!("list slot {} was not live", id)))
    }

    /// Prepend an element
    pub fn push_front(&mut self, value: T) -> Result<()> {
        let head = self.head;
        self.link_before(head, value).map(|_| ())
    }

    /// Append an element
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.link_before(NIL, value).map(|_| ())
    }

    /// Remove and return the first element
    pub fn pop_front(&mut self) -> Result<T> {
        if self.head == NIL {
            return Err(CollError::empty("pop_front"));
        }
        self.remove_slot(self.head)
    }

    /// Remove and return the last element
    pub fn pop_back(&mut self) -> Result<T> {
        if self.tail == NIL {
            return Err(CollError::empty("pop_back"));
        }
        self.remove_slot(self.tail)
    }

    /// Insert `value` before `pos` (`end()` appends); returns its cursor
    pub fn insert(&mut self, pos: ListCursor, value: T) -> Result<ListCursor> {
        let before = if pos.is_end() {
            NIL
        } else {
            self.resolve(pos, "insert")?
        };
        let id = self.link_before(before, value)?;
        Ok(self.cursor_of(id))
    }

    /// Insert every item of `iter` before `pos`, keeping their order
    ///
    /// Returns a cursor to the first inserted element, or `pos` when `iter`
    /// is empty. If an allocation fails, the elements inserted so far are
    /// removed again.
    pub fn insert_many<I>(&mut self, pos: ListCursor, iter: I) -> Result<ListCursor>
    where
        I: IntoIterator<Item = T>,
    {
        let before = if pos.is_end() {
            NIL
        } else {
            self.resolve(pos, "insert_many")?
        };
        let mut first = NIL;
        for item in iter {
            match self.link_before(before, item) {
                Ok(id) => {
                    if first == NIL {
                        first = id;
                    }
                }
                Err(e) => {
                    let mut cur = first;
                    while cur != NIL && cur != before {
                        let next = self.arena[cur].next;
                        let rolled_back = self.remove_slot(cur);
                        debug_assert!(rolled_back.is_ok(), "inserted slot {} was not live", cur);
                        cur = next;
                    }
                    return Err(e);
                }
            }
        }
        Ok(if first == NIL { pos } else { self.cursor_of(first) })
    }

    /// Append every item of `iter`
    pub fn insert_many_back<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_many(ListCursor::END, iter).map(|_| ())
    }

    /// Prepend the items of `iter`; they end up in argument order at the front
    pub fn insert_many_front<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let begin = self.begin();
        self.insert_many(begin, iter).map(|_| ())
    }

    /// Remove the element at `pos` and return it
    pub fn erase(&mut self, pos: ListCursor) -> Result<T> {
        let id = self.resolve(pos, "erase")?;
        self.remove_slot(id)
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    /// Exchange the contents of two lists
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Move every element of `other` before `pos`, leaving `other` empty
    ///
    /// Lists own separate arenas, so elements are moved one by one; cursors
    /// into `other` do not carry over. Returns a cursor to the first moved
    /// element, or `pos` when `other` is empty.
    ///
    /// # Errors
    ///
    /// [`CollError::OutOfMemory`] if `self` cannot hold every element of
    /// `other`. Nothing is moved in that case.
    pub fn splice(&mut self, pos: ListCursor, other: &mut Self) -> Result<ListCursor> {
        let before = if pos.is_end() {
            NIL
        } else {
            self.resolve(pos, "splice")?
        };
        let moved = other.len();
        if self.len().saturating_add(moved) > self.max_size() {
            return Err(CollError::out_of_memory(
                moved.saturating_mul(mem::size_of::<ListNode<T>>()),
            ));
        }

        let mut first = NIL;
        while let Ok(value) = other.pop_front() {
            let id = self.link_before(before, value)?;
            if first == NIL {
                first = id;
            }
        }
        log::debug!("Spliced {} list elements", moved);
        Ok(if first == NIL { pos } else { self.cursor_of(first) })
    }

    /// Reverse the order of the elements in place
    pub fn reverse(&mut self) {
        let mut cur = self.head;
        while cur != NIL {
            let node = &mut self.arena[cur];
            mem::swap(&mut node.prev, &mut node.next);
            cur = node.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Remove consecutive duplicates, keeping the first of each run.
    /// Returns the number of removed elements.
    pub fn unique(&mut self) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let mut cur = self.head;
        while cur != NIL {
            let next = self.arena[cur].next;
            if next != NIL && self.arena[next].value == self.arena[cur].value {
                let dropped = self.remove_slot(next);
                debug_assert!(dropped.is_ok(), "successor slot {} was not live", next);
                removed += 1;
            } else {
                cur = next;
            }
        }
        removed
    }

    /// Stable sort by relinking nodes; cursors stay attached to their
    /// elements
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a.cmp(b));
    }

    /// Stable sort with a comparator
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        if self.len() < 2 {
            return;
        }
        let mut ids = self.slot_order();
        let arena = &self.arena;
        ids.sort_by(|&a, &b| compare(&arena[a].value, &arena[b].value));
        self.relink(&ids);
        log::debug!("Sorted list of {} elements", ids.len());
    }

    /// Merge the sorted list `other` into this sorted list, leaving `other`
    /// empty. Equal elements from `self` stay ahead of those from `other`.
    pub fn merge(&mut self, other: &mut Self) -> Result<()>
    where
        T: Ord,
    {
        let incoming = other.len();
        if self.len().saturating_add(incoming) > self.max_size() {
            return Err(CollError::out_of_memory(
                incoming.saturating_mul(mem::size_of::<ListNode<T>>()),
            ));
        }
        let mut cur = self.head;
        while let Ok(value) = other.pop_front() {
            while cur != NIL && self.arena[cur].value <= value {
                cur = self.arena[cur].next;
            }
            self.link_before(cur, value)?;
        }
        log::debug!("Merged {} elements into list of {}", incoming, self.len());
        Ok(())
    }

    fn slot_order(&self) -> Vec<SlotId> {
        let mut ids = Vec::with_capacity(self.len());
        let mut cur = self.head;
        while cur != NIL {
            ids.push(cur);
            cur = self.arena[cur].next;
        }
        ids
    }

    fn relink(&mut self, ids: &[SlotId]) {
        for (i, &id) in ids.iter().enumerate() {
            let node = &mut self.arena[id];
            node.prev = if i == 0 { NIL } else { ids[i - 1] };
            node.next = ids.get(i + 1).copied().unwrap_or(NIL);
        }
        self.head = ids.first().copied().unwrap_or(NIL);
        self.tail = ids.last().copied().unwrap_or(NIL);
    }

    /// Iterate over the elements front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Iterate over mutable elements front to back
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let order = self.slot_order();
        IterMut {
            nodes: self.arena.entries_mut(),
            order: order.into_iter(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    /// # Panics
    ///
    /// Panics if the node arena is exhausted.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(e) = self.insert_many_back(iter) {
            panic!("List::extend failed: {}", e);
        }
    }
}

/// Borrowing iterator over a [`List`]
pub struct Iter<'a, T> {
    arena: &'a NodeArena<ListNode<T>>,
    front: SlotId,
    back: SlotId,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let node = &self.arena[self.front];
        self.front = node.next;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let node = &self.arena[self.back];
        self.back = node.prev;
        Some(&node.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Mutable iterator over a [`List`]
pub struct IterMut<'a, T> {
    nodes: Vec<Option<&'a mut ListNode<T>>>,
    order: std::vec::IntoIter<SlotId>,
}

impl<'a, T> IterMut<'a, T> {
    fn take(&mut self, id: SlotId) -> Option<&'a mut T> {
        let node = self.nodes.get_mut(id as usize)?.take()?;
        Some(&mut node.value)
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.order.next()?;
        self.take(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.order.next_back()?;
        self.take(id)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

/// Owning iterator over a [`List`]
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|items| items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_push_pop_both_ends() {
        let mut list = List::new();
        list.push_back(2).unwrap();
        list.push_front(1).unwrap();
        list.push_back(3).unwrap();
        assert_eq!(items(&list), vec![1, 2, 3]);
        assert_eq!(*list.front().unwrap(), 1);
        assert_eq!(*list.back().unwrap(), 3);

        assert_eq!(list.pop_front().unwrap(), 1);
        assert_eq!(list.pop_back().unwrap(), 3);
        assert_eq!(list.pop_back().unwrap(), 2);
        assert!(list.is_empty());

        let err = list.pop_front().unwrap_err();
        assert!(matches!(err, CollError::EmptyContainer { operation: "pop_front" }));
        assert!(list.front().is_err());
        assert!(list.back().is_err());
    }

    #[test]
    fn test_with_len() {
        let list: List<u8> = List::with_len(4).unwrap();
        assert_eq!(items(&list), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_cursor_ring() {
        let list: List<i32> = (1..=3).collect();
        let first = list.begin();
        assert_eq!(*list.get(first).unwrap(), 1);
        let last = list.prev(list.end());
        assert_eq!(*list.get(last).unwrap(), 3);
        assert!(list.next(last).is_end());
        assert!(list.prev(first).is_end());
        assert_eq!(list.next(list.end()), first);

        let empty: List<i32> = List::new();
        assert_eq!(empty.begin(), empty.end());
    }

    #[test]
    fn test_insert_and_erase_at_cursor() {
        let mut list: List<i32> = vec![1, 4].into_iter().collect();
        let four = list.next(list.begin());
        let two = list.insert(four, 2).unwrap();
        list.insert(four, 3).unwrap();
        list.insert(list.end(), 5).unwrap();
        assert_eq!(items(&list), vec![1, 2, 3, 4, 5]);

        assert_eq!(list.erase(two).unwrap(), 2);
        assert_eq!(items(&list), vec![1, 3, 4, 5]);
        assert!(matches!(
            list.erase(two),
            Err(CollError::InvalidCursor { operation: "erase" })
        ));
        assert!(list.erase(list.end()).is_err());
        assert_eq!(*list.get(four).unwrap(), 4);
    }

    #[test]
    fn test_stale_cursor_after_slot_reuse() {
        let mut list = List::new();
        list.push_back('a').unwrap();
        let a = list.begin();
        list.erase(a).unwrap();
        list.push_back('b').unwrap();
        assert!(list.get(a).is_err());
        assert!(!list.is_valid(a));
    }

    #[test]
    fn test_insert_many() {
        let mut list: List<i32> = vec![1, 5].into_iter().collect();
        let five = list.prev(list.end());
        let first = list.insert_many(five, vec![2, 3, 4]).unwrap();
        assert_eq!(*list.get(first).unwrap(), 2);
        assert_eq!(items(&list), vec![1, 2, 3, 4, 5]);

        let same = list.insert_many(five, Vec::new()).unwrap();
        assert_eq!(same, five);

        list.insert_many_front(vec![-1, 0]).unwrap();
        list.insert_many_back(vec![6, 7]).unwrap();
        assert_eq!(items(&list), vec![-1, 0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_splice() {
        let mut a: List<i32> = vec![1, 4].into_iter().collect();
        let mut b: List<i32> = vec![2, 3].into_iter().collect();
        let four = a.prev(a.end());
        let two_in_b = b.begin();
        let first = a.splice(four, &mut b).unwrap();
        assert_eq!(items(&a), vec![1, 2, 3, 4]);
        assert_eq!(*a.get(first).unwrap(), 2);
        assert_eq!(*a.get(four).unwrap(), 4);
        assert!(b.is_empty());
        assert!(b.get(two_in_b).is_err());
        assert!(a.get(two_in_b).is_err());
    }

    #[test]
    fn test_splice_empty_source() {
        let mut a: List<i32> = vec![1, 2].into_iter().collect();
        let mut b = List::new();
        let end = a.end();
        assert!(a.splice(end, &mut b).unwrap().is_end());
        assert_eq!(items(&a), vec![1, 2]);
    }

    #[test]
    fn test_splice_rejects_foreign_position() {
        let mut a: List<i32> = vec![1].into_iter().collect();
        let other: List<i32> = vec![5].into_iter().collect();
        let mut b: List<i32> = vec![2, 3].into_iter().collect();
        let foreign = other.begin();
        assert!(matches!(
            a.splice(foreign, &mut b),
            Err(CollError::InvalidCursor { .. })
        ));
        assert_eq!(items(&b), vec![2, 3]);
        assert_eq!(items(&a), vec![1]);
    }

    #[test]
    fn test_foreign_and_cloned_cursors_are_rejected() {
        let a: List<i32> = vec![10].into_iter().collect();
        let mut b: List<i32> = vec![99].into_iter().collect();
        let foreign = a.begin();
        assert!(!b.is_valid(foreign));
        assert!(b.get(foreign).is_err());
        assert!(b.erase(foreign).is_err());
        assert_eq!(items(&b), vec![99]);

        let mut copy = a.clone();
        assert!(copy.erase(foreign).is_err());
        assert_eq!(copy.len(), 1);
        assert_eq!(*a.get(foreign).unwrap(), 10);
    }

    #[test]
    fn test_reverse_keeps_cursors() {
        let mut list: List<i32> = (1..=5).collect();
        let three = list.next(list.next(list.begin()));
        list.reverse();
        assert_eq!(items(&list), vec![5, 4, 3, 2, 1]);
        assert_eq!(*list.get(three).unwrap(), 3);
        assert_eq!(*list.get(list.next(three)).unwrap(), 2);
        let back: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(back, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unique() {
        let mut list: List<i32> = vec![1, 1, 2, 2, 2, 1, 3, 3].into_iter().collect();
        let head = list.begin();
        let dup = list.next(head);
        assert_eq!(list.unique(), 4);
        assert_eq!(items(&list), vec![1, 2, 1, 3]);
        assert_eq!(list.len(), 4);
        assert_eq!(*list.get(head).unwrap(), 1);
        assert!(list.get(dup).is_err());
    }

    #[test]
    fn test_sort_is_stable() {
        let mut list: List<(i32, char)> =
            vec![(2, 'a'), (1, 'b'), (2, 'c'), (0, 'd'), (1, 'e')].into_iter().collect();
        let c = list.next(list.next(list.begin()));
        list.sort_by(|x, y| x.0.cmp(&y.0));
        assert_eq!(
            items(&list),
            vec![(0, 'd'), (1, 'b'), (1, 'e'), (2, 'a'), (2, 'c')]
        );
        assert_eq!(list.get(c).unwrap().1, 'c');
        assert!(list.next(c).is_end());
    }

    #[test]
    fn test_merge_sorted() {
        let mut a: List<i32> = vec![1, 3, 5, 7].into_iter().collect();
        let mut b: List<i32> = vec![0, 3, 4, 8].into_iter().collect();
        a.merge(&mut b).unwrap();
        assert_eq!(items(&a), vec![0, 1, 3, 3, 4, 5, 7, 8]);
        assert!(b.is_empty());
    }

    #[test]
    fn test_iter_mut_and_into_iter() {
        let mut list: List<i32> = (1..=4).collect();
        for v in list.iter_mut() {
            *v *= 10;
        }
        assert_eq!(list.iter_mut().rev().map(|v| *v).collect::<Vec<_>>(), vec![40, 30, 20, 10]);
        let mut owned = list.into_iter();
        assert_eq!(owned.next(), Some(10));
        assert_eq!(owned.next_back(), Some(40));
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn test_clone_eq_debug() {
        let list: List<i32> = (1..=3).collect();
        let mut copy = list.clone();
        assert_eq!(copy, list);
        copy.push_back(4).unwrap();
        assert_ne!(copy, list);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }

    #[test]
    fn test_clear_invalidates_cursors() {
        let mut list: List<i32> = (1..=3).collect();
        let first = list.begin();
        list.clear();
        assert!(list.is_empty());
        list.push_back(9).unwrap();
        assert!(list.get(first).is_err());
    }

    #[test]
    fn test_serde() {
        let list: List<String> = vec!["x".to_string(), "y".to_string()].into_iter().collect();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["x","y"]"#);
        let back: List<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
