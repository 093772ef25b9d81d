//! Height bookkeeping, rotations and AVL rebalancing.
//!
//! Rotations relink slot ids and recompute the heights of the two nodes whose
//! subtrees changed. Keys and values never move.

use super::AvlTree;
use crate::memory::{SlotId, NIL};

impl<K, V> AvlTree<K, V> {
    #[inline]
    pub(crate) fn height(&self, id: SlotId) -> u32 {
        if id == NIL {
            0
        } else {
            self.arena[id].height
        }
    }

    #[inline]
    pub(crate) fn balance_factor(&self, id: SlotId) -> i64 {
        let node = &self.arena[id];
        self.height(node.left) as i64 - self.height(node.right) as i64
    }

    #[inline]
    fn update_height(&mut self, id: SlotId) {
        let node = &self.arena[id];
        let height = 1 + self.height(node.left).max(self.height(node.right));
        self.arena[id].height = height;
    }

    /// Point `parent`'s link to `old` at `new` instead (or the root when
    /// `parent` is `NIL`).
    pub(crate) fn replace_child(&mut self, parent: SlotId, old: SlotId, new: SlotId) {
        if parent == NIL {
            self.root = new;
            return;
        }
        let node = &mut self.arena[parent];
        if node.left == old {
            node.left = new;
        } else {
            debug_assert_eq!(node.right, old);
            node.right = new;
        }
    }

    /// Rotate the subtree rooted at `y` to the right; returns the new root.
    fn rotate_right(&mut self, y: SlotId) -> SlotId {
        let x = self.arena[y].left;
        let inner = self.arena[x].right;
        let parent = self.arena[y].parent;

        self.arena[y].left = inner;
        if inner != NIL {
            self.arena[inner].parent = y;
        }
        self.arena[x].right = y;
        self.arena[y].parent = x;
        self.arena[x].parent = parent;
        self.replace_child(parent, y, x);

        self.update_height(y);
        self.update_height(x);
        log::trace!("rotate right: slot {} replaced by slot {}", y, x);
        x
    }

    /// Rotate the subtree rooted at `x` to the left; returns the new root.
    fn rotate_left(&mut self, x: SlotId) -> SlotId {
        let y = self.arena[x].right;
        let inner = self.arena[y].left;
        let parent = self.arena[x].parent;

        self.arena[x].right = inner;
        if inner != NIL {
            self.arena[inner].parent = x;
        }
        self.arena[y].left = x;
        self.arena[x].parent = y;
        self.arena[y].parent = parent;
        self.replace_child(parent, x, y);

        self.update_height(x);
        self.update_height(y);
        log::trace!("rotate left: slot {} replaced by slot {}", x, y);
        y
    }

    /// Restore the balance of `id`; returns the root of the (possibly
    /// rotated) subtree that now occupies `id`'s position.
    fn rebalance(&mut self, id: SlotId) -> SlotId {
        self.update_height(id);
        let factor = self.balance_factor(id);

        if factor > 1 {
            let left = self.arena[id].left;
            if self.balance_factor(left) < 0 {
                self.rotate_left(left);
            }
            return self.rotate_right(id);
        }
        if factor < -1 {
            let right = self.arena[id].right;
            if self.balance_factor(right) > 0 {
                self.rotate_right(right);
            }
            return self.rotate_left(id);
        }
        id
    }

    /// Rebalance `id` and every ancestor up to the root.
    pub(crate) fn rebalance_from(&mut self, mut id: SlotId) {
        while id != NIL {
            let top = self.rebalance(id);
            id = self.arena[top].parent;
        }
    }
}
