//! Cursors and in-order navigation.
//!
//! Navigation walks parent back-references, so neither cursors nor iterators
//! keep a stack of ancestors. The free functions here are the one traversal
//! algorithm shared by every iterator type.

use super::node::TreeArena;
use crate::memory::{SlotId, NIL, NO_OWNER};

/// Position of an element inside an [`AvlTree`](super::AvlTree) (or one of
/// the containers built on it).
///
/// A cursor is a plain copyable handle: it names a node by slot id and slot
/// generation, plus the tag of the tree that issued it, and does not borrow
/// the tree. Rotations never move nodes, so a cursor stays valid until the
/// node it names is erased. Using a cursor whose node is gone, or passing it
/// to a different tree (a clone included), fails with
/// [`CollError::InvalidCursor`](crate::CollError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) node: SlotId,
    pub(crate) generation: u32,
    pub(crate) owner: u64,
}

impl Cursor {
    /// The past-the-end position
    pub const END: Cursor = Cursor {
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

impl Default for Cursor {
    fn default() -> Self {
        Self::END
    }
}

/// Leftmost node of the subtree rooted at `id`
pub(crate) fn leftmost<K, V>(arena: &TreeArena<K, V>, mut id: SlotId) -> SlotId {
    if id == NIL {
        return NIL;
    }
    while arena[id].left != NIL {
        id = arena[id].left;
    }
    id
}

/// Rightmost node of the subtree rooted at `id`
pub(crate) fn rightmost<K, V>(arena: &TreeArena<K, V>, mut id: SlotId) -> SlotId {
    if id == NIL {
        return NIL;
    }
    while arena[id].right != NIL {
        id = arena[id].right;
    }
    id
}

/// In-order successor of `id`, or `NIL` after the last node
pub(crate) fn successor<K, V>(arena: &TreeArena<K, V>, id: SlotId) -> SlotId {
    let node = &arena[id];
    if node.right != NIL {
        return leftmost(arena, node.right);
    }
    let mut child = id;
    let mut parent = node.parent;
    while parent != NIL && arena[parent].right == child {
        child = parent;
        parent = arena[parent].parent;
    }
    parent
}

/// In-order predecessor of `id`, or `NIL` before the first node
pub(crate) fn predecessor<K, V>(arena: &TreeArena<K, V>, id: SlotId) -> SlotId {
    let node = &arena[id];
    if node.left != NIL {
        return rightmost(arena, node.left);
    }
    let mut child = id;
    let mut parent = node.parent;
    while parent != NIL && arena[parent].left == child {
        child = parent;
        parent = arena[parent].parent;
    }
    parent
}
