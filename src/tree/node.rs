use crate::memory::{NodeArena, SlotId, NIL};

/// Arena type backing an [`AvlTree`](super::AvlTree)
pub(crate) type TreeArena<K, V> = NodeArena<Node<K, V>>;

/// Tree node. Links are slot ids into the owning tree's arena.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: SlotId,
    pub(crate) right: SlotId,
    pub(crate) parent: SlotId,
    /// 1 for a leaf; an absent child counts as 0
    pub(crate) height: u32,
}

impl<K, V> Node<K, V> {
    pub(crate) fn leaf(key: K, value: V, parent: SlotId) -> Self {
        Self {
            key,
            value,
            left: NIL,
            right: NIL,
            parent,
            height: 1,
        }
    }

    #[inline]
    pub(crate) fn has_two_children(&self) -> bool {
        self.left != NIL && self.right != NIL
    }
}
