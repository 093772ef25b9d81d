//! LIFO and FIFO adapters over [`Vector`]
//!
//! Both adapters expose a deliberately narrow interface. The element at the
//! top of a [`Stack`] is the vector's last element; a [`Queue`] pushes at the
//! back of its vector and pops from the front.

use super::vector::Vector;
use crate::config::VectorConfig;
use crate::error::{CollError, Result};
use serde::{Deserialize, Serialize};

/// Last-in first-out stack
///
/// # Examples
///
/// ```rust
/// use stdcoll::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1)?;
/// stack.push(2)?;
/// assert_eq!(*stack.top()?, 2);
/// assert_eq!(stack.pop()?, 2);
/// assert_eq!(stack.len(), 1);
/// # Ok::<(), stdcoll::CollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack<T> {
    data: Vector<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            data: Vector::new(),
        }
    }

    /// Create an empty stack whose storage follows `config`
    pub fn with_config(config: VectorConfig) -> Result<Self> {
        Ok(Self {
            data: Vector::with_config(config)?,
        })
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the stack is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Largest number of elements a stack can hold
    pub fn max_size(&self) -> usize {
        self.data.max_size()
    }

    /// Push `value` on top
    pub fn push(&mut self, value: T) -> Result<()> {
        self.data.push(value)
    }

    /// Remove and return the top element
    pub fn pop(&mut self) -> Result<T> {
        self.data.pop().ok_or(CollError::empty("pop"))
    }

    /// Top element
    pub fn top(&self) -> Result<&T> {
        self.data.back().map_err(|_| CollError::empty("top"))
    }

    /// Mutable top element
    pub fn top_mut(&mut self) -> Result<&mut T> {
        self.data.back_mut().map_err(|_| CollError::empty("top"))
    }

    /// Insert the items of `iter` beneath the existing elements, in argument
    /// order (the first item becomes the bottom of the stack)
    pub fn insert_many_front<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.data.insert_many(0, iter).map(|_| ())
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Exchange the contents of two stacks
    pub fn swap(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
    }

    /// Elements from bottom to top
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

/// First-in first-out queue
///
/// # Examples
///
/// ```rust
/// use stdcoll::Queue;
///
/// let mut queue = Queue::new();
/// queue.push('a')?;
/// queue.push('b')?;
/// assert_eq!(*queue.front()?, 'a');
/// assert_eq!(*queue.back()?, 'b');
/// assert_eq!(queue.pop()?, 'a');
/// # Ok::<(), stdcoll::CollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue<T> {
    data: Vector<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            data: Vector::new(),
        }
    }

    /// Create an empty queue whose storage follows `config`
    pub fn with_config(config: VectorConfig) -> Result<Self> {
        Ok(Self {
            data: Vector::with_config(config)?,
        })
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Largest number of elements a queue can hold
    pub fn max_size(&self) -> usize {
        self.data.max_size()
    }

    /// Append `value` at the back
    pub fn push(&mut self, value: T) -> Result<()> {
        self.data.push(value)
    }

    /// Remove and return the front element
    ///
    /// Shifts the remaining elements, so this is linear in `len()`.
    pub fn pop(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(CollError::empty("pop"));
        }
        self.data.erase(0)
    }

    /// Oldest element
    pub fn front(&self) -> Result<&T> {
        self.data.front()
    }

    /// Newest element
    pub fn back(&self) -> Result<&T> {
        self.data.back()
    }

    /// Append the items of `iter` in order
    pub fn insert_many_back<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.data.insert_many_back(iter)
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Exchange the contents of two queues
    pub fn swap(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
    }

    /// Elements from front to back
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_lifo() {
        let mut stack = Stack::new();
        for i in 1..=3 {
            stack.push(i).unwrap();
        }
        assert_eq!(*stack.top().unwrap(), 3);
        *stack.top_mut().unwrap() = 30;
        assert_eq!(stack.pop().unwrap(), 30);
        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.pop().unwrap(), 1);
        assert!(stack.is_empty());

        let err = stack.pop().unwrap_err();
        assert!(matches!(err, CollError::EmptyContainer { operation: "pop" }));
        assert!(stack.top().unwrap_err().is_precondition_violation());
    }

    #[test]
    fn test_stack_insert_many_front() {
        let mut stack: Stack<i32> = vec![10, 20].into_iter().collect();
        stack.insert_many_front(vec![1, 2, 3]).unwrap();
        assert_eq!(stack.as_slice(), &[1, 2, 3, 10, 20]);
        assert_eq!(*stack.top().unwrap(), 20);
        assert_eq!(stack.len(), 5);
    }

    #[test]
    fn test_stack_swap() {
        let mut a: Stack<i32> = (0..3).collect();
        let mut b = Stack::new();
        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_queue_fifo() {
        let mut queue = Queue::new();
        queue.insert_many_back(vec!["a", "b", "c"]).unwrap();
        queue.push("d").unwrap();
        assert_eq!(*queue.front().unwrap(), "a");
        assert_eq!(*queue.back().unwrap(), "d");
        assert_eq!(queue.pop().unwrap(), "a");
        assert_eq!(queue.pop().unwrap(), "b");
        assert_eq!(queue.as_slice(), &["c", "d"]);

        queue.clear();
        assert!(queue.front().is_err());
        assert!(matches!(
            queue.pop(),
            Err(CollError::EmptyContainer { operation: "pop" })
        ));
    }

    #[test]
    fn test_queue_with_config() {
        let config = VectorConfig {
            initial_capacity: 8,
            growth_factor: 2.0,
        };
        let mut queue = Queue::with_config(config).unwrap();
        queue.push(1u8).unwrap();
        assert_eq!(queue.len(), 1);
        assert!(queue.max_size() > 0);
    }

    #[test]
    fn test_adapters_serde() {
        let stack: Stack<i32> = (1..=3).collect();
        assert_eq!(serde_json::to_string(&stack).unwrap(), "[1,2,3]");
        let queue: Queue<i32> = serde_json::from_str("[4,5]").unwrap();
        assert_eq!(queue.as_slice(), &[4, 5]);
    }
}
