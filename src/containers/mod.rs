//! Container types
//!
//! ## Ordered associative containers
//!
//! - **`Map<K, V>`** - unique keys with mapped values
//! - **`Set<K>`** - unique keys
//! - **`MultiSet<K>`** - duplicate keys kept in insertion order among equals
//!
//! All three are thin wrappers over [`crate::tree::AvlTree`].
//!
//! ## Sequences
//!
//! - **`Vector<T>`** - contiguous growable array with configurable growth
//! - **`List<T>`** - doubly linked list with stable cursors
//! - **`Array<T, N>`** - fixed-size inline array
//!
//! ## Adapters
//!
//! - **`Stack<T>`** and **`Queue<T>`** over `Vector<T>`

pub mod adapters;
pub mod array;
pub mod list;
pub mod map;
pub mod multiset;
pub mod set;
pub mod traits;
pub mod vector;

pub use adapters::{Queue, Stack};
pub use array::Array;
pub use list::{List, ListCursor};
pub use map::Map;
pub use multiset::MultiSet;
pub use set::Set;
pub use traits::Container;
pub use vector::Vector;
