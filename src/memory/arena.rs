//! Slot arena used as the node allocator for linked containers.
//!
//! Nodes live in a dense `Vec` of slots and are addressed by `u32` slot ids.
//! Freed slots are chained into a free list through their vacant entries and
//! reused by later allocations, so ids stay stable for the lifetime of a node
//! and links between nodes are plain integers instead of owning pointers.
//!
//! Every slot carries a generation counter that is bumped when the slot is
//! freed. A handle that remembers `(id, generation)` can therefore tell a live
//! node from a reused slot. Every arena also carries an owner tag, unique per
//! arena instance (clones get a fresh one), so a handle taken from one
//! container is never accepted by another.

use crate::error::{CollError, Result};
use std::mem;
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

/// Slot identifier
pub type SlotId = u32;

/// Null slot id ("no node")
pub const NIL: SlotId = u32::MAX;

/// Largest number of slots an arena can hand out
pub const MAX_SLOTS: usize = (u32::MAX - 1) as usize;

/// Owner tag that no arena carries
pub const NO_OWNER: u64 = 0;

static NEXT_OWNER: AtomicU64 = AtomicU64::new(NO_OWNER + 1);

fn next_owner() -> u64 {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied(T),
    /// Next free slot, or `NIL`
    Vacant(SlotId),
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Allocation statistics for a [`NodeArena`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Slots holding a live node
    pub live: usize,
    /// Slots on the free list
    pub free: usize,
    /// Slots reserved by the backing vector
    pub capacity: usize,
}

/// Slot allocator with a free list and per-slot generations
#[derive(Debug)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: SlotId,
    live: usize,
    owner: u64,
}

impl<T> NodeArena<T> {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an arena with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.min(MAX_SLOTS)),
            free_head: NIL,
            live: 0,
            owner: next_owner(),
        }
    }

    /// Tag identifying this arena instance; never [`NO_OWNER`]
    #[inline]
    pub fn owner(&self) -> u64 {
        self.owner
    }

    /// Theoretical upper bound on the number of live nodes
    pub fn max_capacity() -> usize {
        let slot_size = mem::size_of::<Slot<T>>().max(1);
        MAX_SLOTS.min(isize::MAX as usize / slot_size)
    }

    /// Number of live nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Check if no node is live
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Allocation statistics
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            live: self.live,
            free: self.slots.len() - self.live,
            capacity: self.slots.capacity(),
        }
    }

    /// Store `value` in a free slot and return its id
    pub fn alloc(&mut self, value: T) -> Result<SlotId> {
        if self.free_head != NIL {
            let id = self.free_head;
            let slot = &mut self.slots[id as usize];
            self.free_head = match slot.entry {
                Entry::Vacant(next) => next,
                Entry::Occupied(_) => {
                    return Err(CollError::corrupt(format!(
                        "free list points at occupied slot {}",
                        id
                    )))
                }
            };
            slot.entry = Entry::Occupied(value);
            self.live += 1;
            return Ok(id);
        }

        if self.slots.len() >= Self::max_capacity() {
            return Err(CollError::out_of_memory(
                self.slots.len().saturating_add(1) * mem::size_of::<Slot<T>>(),
            ));
        }
        if self.slots.len() == self.slots.capacity() {
            log::trace!(
                "Node arena growing past {} slots",
                self.slots.capacity()
            );
        }
        let id = self.slots.len() as SlotId;
        self.slots.push(Slot {
            generation: 0,
            entry: Entry::Occupied(value),
        });
        self.live += 1;
        Ok(id)
    }

    /// Release slot `id` and return the value stored in it
    ///
    /// Returns `None` if the slot is not live.
    pub fn free(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id as usize)?;
        if !matches!(slot.entry, Entry::Occupied(_)) {
            return None;
        }
        let entry = mem::replace(&mut slot.entry, Entry::Vacant(self.free_head));
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = id;
        self.live -= 1;
        match entry {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant(_) => None,
        }
    }

    /// Drop every node
    ///
    /// Slots are kept (with bumped generations) so that handles taken before
    /// the clear never match a node allocated after it.
    pub fn clear(&mut self) {
        let mut next = NIL;
        for (id, slot) in self.slots.iter_mut().enumerate().rev() {
            if matches!(slot.entry, Entry::Occupied(_)) {
                slot.generation = slot.generation.wrapping_add(1);
            }
            slot.entry = Entry::Vacant(next);
            next = id as SlotId;
        }
        self.free_head = next;
        self.live = 0;
    }

    /// Generation of slot `id`, if the slot exists
    #[inline]
    pub fn generation(&self, id: SlotId) -> Option<u32> {
        self.slots.get(id as usize).map(|slot| slot.generation)
    }

    /// Check that `id` is live and still carries `generation`
    #[inline]
    pub fn is_live(&self, id: SlotId, generation: u32) -> bool {
        match self.slots.get(id as usize) {
            Some(slot) => {
                slot.generation == generation && matches!(slot.entry, Entry::Occupied(_))
            }
            None => false,
        }
    }

    /// Shared access to a live node
    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id as usize) {
            Some(Slot {
                entry: Entry::Occupied(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }

    /// Mutable access to a live node
    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id as usize) {
            Some(Slot {
                entry: Entry::Occupied(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }

    /// One mutable reference per slot, indexed by slot id (`None` for vacant
    /// slots). Lets callers hand out disjoint mutable borrows in any order.
    pub fn entries_mut(&mut self) -> Vec<Option<&mut T>> {
        self.slots
            .iter_mut()
            .map(|slot| match &mut slot.entry {
                Entry::Occupied(value) => Some(value),
                Entry::Vacant(_) => None,
            })
            .collect()
    }

    /// Consume the arena, yielding one value per slot indexed by slot id
    pub fn into_entries(self) -> Vec<Option<T>> {
        self.slots
            .into_iter()
            .map(|slot| match slot.entry {
                Entry::Occupied(value) => Some(value),
                Entry::Vacant(_) => None,
            })
            .collect()
    }
}

impl<T: Clone> Clone for NodeArena<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            free_head: self.free_head,
            live: self.live,
            owner: next_owner(),
        }
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<SlotId> for NodeArena<T> {
    type Output = T;

    fn index(&self, id: SlotId) -> &Self::Output {
        match self.get(id) {
            Some(value) => value,
            None => panic!("slot {} is not live", id),
        }
    }
}

impl<T> IndexMut<SlotId> for NodeArena<T> {
    fn index_mut(&mut self, id: SlotId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("slot {} is not live", id),
        }
    }
}
