//! Structural self-check for [`AvlTree`].

use super::AvlTree;
use crate::error::{CollError, Result};
use crate::memory::{SlotId, NIL};

/// Deeper than any balanced tree that fits in a `u32` slot space
const MAX_DEPTH: u32 = 96;

impl<K: Ord, V> AvlTree<K, V> {
    /// Check every structural invariant of the tree
    ///
    /// Verifies parent back-references, cached heights, the AVL balance
    /// condition, that the node count matches `len()`, and that an in-order
    /// walk yields keys in non-decreasing order.
    ///
    /// # Errors
    ///
    /// [`CollError::CorruptStructure`] describing the first violation found.
    pub fn verify(&self) -> Result<()> {
        if self.root == NIL {
            if self.len() != 0 {
                return Err(CollError::corrupt(format!(
                    "empty tree reports {} elements",
                    self.len()
                )));
            }
            return Ok(());
        }

        let mut visited = 0usize;
        self.verify_subtree(self.root, NIL, 1, &mut visited)?;
        if visited != self.len() {
            return Err(CollError::corrupt(format!(
                "reachable nodes {} != len {}",
                visited,
                self.len()
            )));
        }

        let mut keys = self.keys();
        if let Some(mut prev) = keys.next() {
            for key in keys {
                if key < prev {
                    return Err(CollError::corrupt("in-order keys are not sorted"));
                }
                prev = key;
            }
        }
        Ok(())
    }

    /// Returns the height of the subtree at `id`
    fn verify_subtree(
        &self,
        id: SlotId,
        parent: SlotId,
        depth: u32,
        visited: &mut usize,
    ) -> Result<u32> {
        if id == NIL {
            return Ok(0);
        }
        if depth > MAX_DEPTH {
            return Err(CollError::corrupt(format!("depth exceeds {}", MAX_DEPTH)));
        }
        let node = self
            .arena
            .get(id)
            .ok_or_else(|| CollError::corrupt(format!("link to vacant slot {}", id)))?;

        *visited += 1;
        if *visited > self.len() {
            return Err(CollError::corrupt("more reachable nodes than len"));
        }
        if node.parent != parent {
            return Err(CollError::corrupt(format!(
                "slot {} has parent {} but hangs under {}",
                id, node.parent, parent
            )));
        }

        let left = self.verify_subtree(node.left, id, depth + 1, visited)?;
        let right = self.verify_subtree(node.right, id, depth + 1, visited)?;
        let height = 1 + left.max(right);
        if node.height != height {
            return Err(CollError::corrupt(format!(
                "slot {} caches height {} but has height {}",
                id, node.height, height
            )));
        }
        if left.abs_diff(right) > 1 {
            return Err(CollError::corrupt(format!(
                "slot {} is out of balance ({} vs {})",
                id, left, right
            )));
        }
        Ok(height)
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::{AvlTree, InsertMode};

    fn sample() -> AvlTree<i32, ()> {
        let mut tree = AvlTree::new();
        for k in [4, 2, 6, 1, 3, 5, 7] {
            tree.insert(k, (), InsertMode::Unique).unwrap();
        }
        tree
    }

    #[test]
    fn test_valid_tree_passes() {
        sample().verify().unwrap();
    }

    #[test]
    fn test_detects_bad_height() {
        let mut tree = sample();
        let root = tree.root;
        tree.arena[root].height = 7;
        let err = tree.verify().unwrap_err();
        assert_eq!(err.category(), "invariant");
    }

    #[test]
    fn test_detects_bad_parent() {
        let mut tree = sample();
        let root = tree.root;
        let left = tree.arena[root].left;
        tree.arena[left].parent = left;
        assert!(tree.verify().is_err());
    }

    #[test]
    fn test_detects_unsorted_keys() {
        let mut tree = sample();
        let root = tree.root;
        let left = tree.arena[root].left;
        tree.arena[left].key = 100;
        assert!(tree.verify().is_err());
    }

    #[test]
    fn test_detects_imbalance() {
        let mut tree = sample();
        let root = tree.root;
        let right = tree.arena[root].right;
        let right_right = tree.arena[right].right;
        let right_left = tree.arena[right].left;
        // drop the left subtree of the root's right child and hang it further down
        tree.arena[right].left = crate::memory::NIL;
        tree.arena[right_right].left = right_left;
        tree.arena[right_left].parent = right_right;
        tree.arena[right_left].key = 7;
        assert!(tree.verify().is_err());
    }
}
