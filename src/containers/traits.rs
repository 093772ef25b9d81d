//! Capacity surface shared by every container

use super::{Array, List, Map, MultiSet, Queue, Set, Stack, Vector};
use crate::tree::AvlTree;

/// Size queries and `clear`, common to all containers
///
/// # Examples
///
/// ```rust
/// use stdcoll::{Container, Set, Vector};
///
/// fn drain_all<C: Container>(c: &mut C) -> usize {
///     let n = c.len();
///     c.clear();
///     n
/// }
///
/// let mut set: Set<i32> = [1, 2, 3].into_iter().collect();
/// let mut vec: Vector<i32> = (0..5).collect();
/// assert_eq!(drain_all(&mut set) + drain_all(&mut vec), 8);
/// assert!(set.is_empty() && vec.is_empty());
/// ```
pub trait Container {
    /// Number of stored elements
    fn len(&self) -> usize;

    /// Upper bound on the number of elements
    fn max_size(&self) -> usize;

    /// Remove every element
    fn clear(&mut self);

    /// Check if no element is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_container {
    ($ty:ident < $($param:ident),* >) => {
        impl<$($param),*> Container for $ty<$($param),*> {
            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn max_size(&self) -> usize {
                $ty::max_size(self)
            }

            fn clear(&mut self) {
                $ty::clear(self)
            }
        }
    };
}

impl_container!(AvlTree<K, V>);
impl_container!(Map<K, V>);
impl_container!(Set<K>);
impl_container!(MultiSet<K>);
impl_container!(Vector<T>);
impl_container!(List<T>);
impl_container!(Stack<T>);
impl_container!(Queue<T>);

impl<T, const N: usize> Container for Array<T, N> {
    fn len(&self) -> usize {
        N
    }

    fn max_size(&self) -> usize {
        N
    }

    /// Fixed-size arrays cannot drop elements; this is a no-op
    fn clear(&mut self) {}
}
