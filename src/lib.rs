//! # stdcoll: Generic Containers
//!
//! This crate provides a family of generic containers built around a single
//! self-balancing ordered tree.
//!
//! ## Key Features
//!
//! - **Ordered Containers**: `Map`, `Set` and `MultiSet` over an AVL tree with
//!   logarithmic insert, erase and lookup
//! - **Sequences**: a growable `Vector`, a doubly linked `List` and a
//!   fixed-size `Array`
//! - **Adapters**: `Stack` and `Queue` over `Vector`
//! - **Stable Cursors**: tree and list cursors survive unrelated insertions
//!   and erasures; stale cursors are detected and rejected
//! - **Arena Storage**: linked nodes live in a slot arena addressed by 32-bit
//!   ids, so no node is allocated individually
//! - **Self-Checks**: `verify()` walks the whole tree and reports any broken
//!   structural invariant
//!
//! ## Quick Start
//!
//! ```rust
//! use stdcoll::{Array, List, Map, MultiSet, Queue, Set, Stack, Vector};
//!
//! // Ordered map
//! let mut map = Map::new();
//! map.insert_kv("one", 1)?;
//! map.insert_kv("two", 2)?;
//! assert_eq!(*map.at(&"two")?, 2);
//!
//! // Ordered sets
//! let set: Set<i32> = [3, 1, 2].into_iter().collect();
//! assert_eq!(set.first(), Some(&1));
//! let bag: MultiSet<i32> = [2, 1, 2].into_iter().collect();
//! assert_eq!(bag.count(&2), 2);
//!
//! // Sequences
//! let mut vec = Vector::new();
//! vec.push(42)?;
//! let mut list = List::new();
//! list.push_back('b')?;
//! list.push_front('a')?;
//! assert_eq!(list.iter().collect::<String>(), "ab");
//! let arr: Array<u8, 3> = Array::from([1, 2, 3]);
//! assert_eq!(*arr.back()?, 3);
//!
//! // Adapters
//! let mut stack = Stack::new();
//! stack.push(1)?;
//! let mut queue = Queue::new();
//! queue.push(1)?;
//! assert_eq!(stack.pop()?, queue.pop()?);
//! # Ok::<(), stdcoll::CollError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod containers;
pub mod error;
pub mod memory;
pub mod tree;

// Re-export core types
pub use error::{CollError, Result};

// Re-export containers
pub use containers::{
    Array, Container, List, ListCursor, Map, MultiSet, Queue, Set, Stack, Vector,
};

// Re-export the tree core
pub use tree::{AvlTree, Cursor, InsertMode};

// Re-export configuration and storage statistics
pub use config::{Config, TreeConfig, VectorConfig};
pub use memory::ArenaStats;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing stdcoll v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_info() {
        assert!(VERSION.contains('.'));
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }

    #[test]
    fn test_root_reexports() {
        let mut tree: AvlTree<i32, ()> = AvlTree::new();
        tree.insert(1, (), InsertMode::Multi).unwrap();
        tree.insert(1, (), InsertMode::Multi).unwrap();
        assert_eq!(tree.len(), 2);

        let cursor: Cursor = tree.begin();
        assert!(tree.is_valid(cursor));

        let stats: ArenaStats = tree.arena_stats();
        assert_eq!(stats.live, 2);
    }
}
