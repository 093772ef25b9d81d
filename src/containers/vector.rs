//! Vector: contiguous growable array using realloc for growth
//!
//! Elements live in one heap buffer obtained from the global allocator.
//! Growth goes through `realloc`, which can often extend the buffer in place
//! instead of copying, and follows the [`VectorConfig`] growth policy.
//! Every operation that may allocate returns a [`Result`] instead of
//! aborting on allocation failure.

use crate::config::{Config, VectorConfig};
use crate::error::{check_bounds, check_position, CollError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::alloc::{self, Layout};
use std::fmt;
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

/// Contiguous growable array
///
/// # Examples
///
/// ```rust
/// use stdcoll::Vector;
///
/// let mut vec = Vector::new();
/// vec.push(42)?;
/// vec.push(84)?;
/// assert_eq!(vec.len(), 2);
/// assert_eq!(vec[0], 42);
/// assert_eq!(*vec.back()?, 84);
/// # Ok::<(), stdcoll::CollError>(())
/// ```
pub struct Vector<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
    cap: usize,
    config: VectorConfig,
}

impl<T> Vector<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Create a new empty vector; nothing is allocated
    #[inline]
    pub fn new() -> Self {
        Self {
            ptr: None,
            len: 0,
            cap: 0,
            config: VectorConfig::default(),
        }
    }

    /// Create an empty vector with room for `cap` elements
    pub fn with_capacity(cap: usize) -> Result<Self> {
        let mut vec = Self::new();
        vec.ensure_capacity(cap)?;
        Ok(vec)
    }

    /// Create a vector holding `size` clones of `value`
    pub fn with_size(size: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(size)?;
        vec.resize(size, value)?;
        Ok(vec)
    }

    /// Create an empty vector with the given growth configuration
    ///
    /// The initial allocation (`config.initial_capacity`) happens here.
    pub fn with_config(config: VectorConfig) -> Result<Self> {
        config.validate()?;
        let initial = config.initial_capacity;
        let mut vec = Self {
            ptr: None,
            len: 0,
            cap: 0,
            config,
        };
        vec.realloc(initial)?;
        Ok(vec)
    }

    /// Growth configuration of this vector
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the vector is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current buffer can hold
    #[inline]
    pub fn capacity(&self) -> usize {
        if Self::IS_ZST {
            usize::MAX
        } else {
            self.cap
        }
    }

    /// Largest number of elements a vector of `T` can hold
    pub fn max_size(&self) -> usize {
        isize::MAX as usize / mem::size_of::<T>().max(1)
    }

    #[inline]
    fn as_ptr(&self) -> *const T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        }
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        }
    }

    /// The elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` elements are initialized; the pointer is
        // non-null and aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// The elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// The elements as a slice
    #[inline]
    pub fn data(&self) -> &[T] {
        self.as_slice()
    }

    /// Element at `index`
    pub fn at(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.len)?;
        Ok(&self.as_slice()[index])
    }

    /// Mutable element at `index`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        check_bounds(index, self.len)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// First element
    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(CollError::empty("front"))
    }

    /// Last element
    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(CollError::empty("back"))
    }

    /// Mutable last element
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().last_mut().ok_or(CollError::empty("back"))
    }

    /// Reserve space for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or_else(|| CollError::out_of_memory(usize::MAX))?;
        self.grow_to(required)
    }

    /// Ensure the vector can hold at least `min_cap` elements
    pub fn ensure_capacity(&mut self, min_cap: usize) -> Result<()> {
        self.grow_to(min_cap)
    }

    fn grow_to(&mut self, required: usize) -> Result<()> {
        if required <= self.capacity() {
            return Ok(());
        }
        let target = self
            .config
            .next_capacity(self.cap, required)
            .min(self.max_size())
            .max(required);
        self.realloc(target)
    }

    /// Move the buffer to an allocation of exactly `new_cap` elements
    fn realloc(&mut self, new_cap: usize) -> Result<()> {
        if Self::IS_ZST || new_cap == self.cap {
            return Ok(());
        }
        if new_cap < self.len {
            return Err(CollError::out_of_bounds(new_cap, self.len));
        }
        if new_cap == 0 {
            self.dealloc();
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap)
            .map_err(|_| CollError::out_of_memory(new_cap.saturating_mul(mem::size_of::<T>())))?;

        let new_ptr = match self.ptr {
            Some(ptr) if self.cap > 0 => {
                let old_layout = Layout::array::<T>(self.cap)
                    .map_err(|_| CollError::corrupt("vector capacity has no valid layout"))?;
                // SAFETY: `ptr` was allocated with `old_layout` and the new
                // size is non-zero and fits `isize`.
                unsafe {
                    alloc::realloc(ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) as *mut T
                }
            }
            // SAFETY: `new_layout` has non-zero size
            _ => unsafe { alloc::alloc(new_layout) as *mut T },
        };

        let ptr = NonNull::new(new_ptr).ok_or_else(|| CollError::out_of_memory(new_layout.size()))?;
        if new_cap > self.cap {
            log::trace!("Vector grew from {} to {} elements", self.cap, new_cap);
        }
        self.ptr = Some(ptr);
        self.cap = new_cap;
        Ok(())
    }

    fn dealloc(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            if !Self::IS_ZST && self.cap > 0 {
                if let Ok(layout) = Layout::array::<T>(self.cap) {
                    // SAFETY: `ptr` was allocated with this layout
                    unsafe { alloc::dealloc(ptr.as_ptr() as *mut u8, layout) };
                }
            }
        }
        self.cap = 0;
    }

    /// Append an element
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len == self.capacity() {
            self.reserve(1)?;
        }
        // SAFETY: capacity exceeds `len`
        unsafe {
            ptr::write(self.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: the element at the old last index is initialized and is
            // no longer counted by `len`
            Some(unsafe { ptr::read(self.as_ptr().add(self.len)) })
        }
    }

    /// Insert `value` before position `index` (`index == len()` appends)
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        check_position(index, self.len)?;
        if self.len == self.capacity() {
            self.reserve(1)?;
        }
        // SAFETY: capacity exceeds `len`; the tail moves one slot right
        unsafe {
            let ptr = self.as_mut_ptr().add(index);
            ptr::copy(ptr, ptr.add(1), self.len - index);
            ptr::write(ptr, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Insert every item of `iter` before position `index`, keeping the
    /// items' order. Returns the position of the first inserted item (equal
    /// to `index`).
    ///
    /// On allocation failure the vector is left as it was.
    pub fn insert_many<I>(&mut self, index: usize, iter: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        check_position(index, self.len)?;
        let old_len = self.len;
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0)?;
        for item in iter {
            if let Err(e) = self.push(item) {
                self.truncate(old_len);
                return Err(e);
            }
        }
        self.as_mut_slice()[index..].rotate_left(old_len - index);
        Ok(index)
    }

    /// Append every item of `iter`
    pub fn insert_many_back<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len;
        self.insert_many(len, iter).map(|_| ())
    }

    /// Remove and return the element at `index`, shifting the tail left
    pub fn erase(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.len)?;
        // SAFETY: `index < len`; the element is read out before the tail
        // moves over it
        unsafe {
            let ptr = self.as_mut_ptr().add(index);
            let value = ptr::read(ptr);
            ptr::copy(ptr.add(1), ptr, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Drop every element past `len`
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.len -= 1;
            // SAFETY: the element was initialized and is no longer counted
            unsafe {
                ptr::drop_in_place(self.as_mut_ptr().add(self.len));
            }
        }
    }

    /// Resize to `new_len`, cloning `value` into new slots
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        if new_len > self.len {
            self.ensure_capacity(new_len)?;
            while self.len < new_len {
                // SAFETY: capacity is at least `new_len`
                unsafe {
                    ptr::write(self.as_mut_ptr().add(self.len), value.clone());
                }
                self.len += 1;
            }
        } else {
            self.truncate(new_len);
        }
        Ok(())
    }

    /// Remove every element, keeping the buffer
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shrink the buffer to exactly `len()` elements
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        let len = self.len;
        self.realloc(len)
    }

    /// Exchange the contents of two vectors
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Convert into a standard `Vec` without copying
    pub fn into_vec(self) -> Vec<T> {
        let mut this = ManuallyDrop::new(self);
        let len = this.len;
        let cap = if Self::IS_ZST { 0 } else { this.cap };
        let ptr = this.as_mut_ptr();
        // SAFETY: the buffer came from the global allocator with
        // `Layout::array::<T>(cap)`, which is how `Vec` allocates; `this` is
        // never dropped, so ownership moves to the `Vec`.
        unsafe {
            ptr::drop_in_place(&mut this.config);
            Vec::from_raw_parts(ptr, len, cap)
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
        self.dealloc();
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut vec = ManuallyDrop::new(vec);
        let (ptr, len, cap) = (vec.as_mut_ptr(), vec.len(), vec.capacity());
        let cap = if Self::IS_ZST { 0 } else { cap };
        Self {
            ptr: if cap == 0 { None } else { NonNull::new(ptr) },
            len,
            cap,
            config: VectorConfig::default(),
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut copy: Self = self.as_slice().iter().cloned().collect();
        copy.config = self.config.clone();
        copy
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for Vector<T> {
    /// # Panics
    ///
    /// Panics if the buffer cannot grow; use
    /// [`insert_many_back`](Vector::insert_many_back) to handle that case.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(e) = self.insert_many_back(iter) {
            panic!("Vector::extend failed: {}", e);
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Serialize> Serialize for Vector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Vector::from)
    }
}

// Safety: Vector<T> owns its elements like Vec<T> does
unsafe impl<T: Send> Send for Vector<T> {}

// Safety: shared access only hands out &T
unsafe impl<T: Sync> Sync for Vector<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_new() {
        let vec: Vector<i32> = Vector::new();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
        assert!(vec.is_empty());
        assert!(vec.data().is_empty());
    }

    #[test]
    fn test_with_capacity() {
        let vec: Vector<i32> = Vector::with_capacity(10).unwrap();
        assert_eq!(vec.len(), 0);
        assert!(vec.capacity() >= 10);
    }

    #[test]
    fn test_with_config() {
        let config = VectorConfig {
            initial_capacity: 16,
            growth_factor: 1.5,
        };
        let mut vec = Vector::with_config(config).unwrap();
        assert_eq!(vec.capacity(), 16);
        for i in 0..17 {
            vec.push(i).unwrap();
        }
        assert_eq!(vec.capacity(), 24);

        let bad = VectorConfig {
            initial_capacity: 0,
            growth_factor: 1.0,
        };
        assert!(Vector::<i32>::with_config(bad).is_err());
    }

    #[test]
    fn test_push_pop() {
        let mut vec = Vector::new();
        vec.push(1).unwrap();
        vec.push(2).unwrap();
        vec.push(3).unwrap();

        assert_eq!(vec.len(), 3);
        assert_eq!(vec.pop(), Some(3));
        assert_eq!(vec.pop(), Some(2));
        assert_eq!(vec.len(), 1);
        assert_eq!(vec.pop(), Some(1));
        assert_eq!(vec.pop(), None);
    }

    #[test]
    fn test_checked_access() {
        let mut vec: Vector<i32> = (1..=3).collect();
        assert_eq!(*vec.at(0).unwrap(), 1);
        *vec.at_mut(2).unwrap() = 30;
        assert_eq!(vec.as_slice(), &[1, 2, 30]);

        let err = vec.at(3).unwrap_err();
        assert!(err.is_out_of_range());
        assert!(matches!(err, CollError::OutOfBounds { index: 3, size: 3 }));

        assert_eq!(*vec.front().unwrap(), 1);
        assert_eq!(*vec.back().unwrap(), 30);
        vec.clear();
        assert!(vec.front().unwrap_err().is_precondition_violation());
        assert!(vec.back().is_err());
    }

    #[test]
    fn test_index() {
        let mut vec = Vector::new();
        vec.push(42).unwrap();
        vec.push(84).unwrap();
        assert_eq!(vec[0], 42);
        vec[0] = 100;
        assert_eq!(vec[0], 100);
    }

    #[test]
    #[should_panic]
    fn test_index_bounds() {
        let vec: Vector<i32> = Vector::new();
        let _ = vec[0];
    }

    #[test]
    fn test_insert_erase() {
        let mut vec = Vector::new();
        vec.push(1).unwrap();
        vec.push(3).unwrap();

        vec.insert(1, 2).unwrap();
        assert_eq!(vec.as_slice(), &[1, 2, 3]);
        vec.insert(0, 0).unwrap();
        vec.insert(4, 4).unwrap();
        assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4]);

        assert_eq!(vec.erase(2).unwrap(), 2);
        assert_eq!(vec.erase(0).unwrap(), 0);
        assert_eq!(vec.erase(2).unwrap(), 4);
        assert_eq!(vec.as_slice(), &[1, 3]);

        assert!(vec.insert(5, 100).is_err());
        assert!(vec.erase(2).is_err());
        assert_eq!(vec.len(), 2);
    }

    #[test]
    fn test_insert_many() {
        let mut vec: Vector<i32> = vec![1, 5].into();
        let pos = vec.insert_many(1, vec![2, 3, 4]).unwrap();
        assert_eq!(pos, 1);
        assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5]);

        vec.insert_many_back(6..=7).unwrap();
        assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);

        let pos = vec.insert_many(0, std::iter::empty()).unwrap();
        assert_eq!(pos, 0);
        assert_eq!(vec.len(), 7);

        assert!(vec.insert_many(8, vec![0]).is_err());
        assert_eq!(vec.len(), 7);
    }

    #[test]
    fn test_resize() {
        let mut vec = Vector::new();
        vec.resize(5, 42).unwrap();
        assert_eq!(vec.as_slice(), &[42, 42, 42, 42, 42]);
        vec.resize(3, 0).unwrap();
        assert_eq!(vec.as_slice(), &[42, 42, 42]);
    }

    #[test]
    fn test_with_size() {
        let vec = Vector::with_size(5, 'x').unwrap();
        assert_eq!(vec.len(), 5);
        assert!(vec.iter().all(|&c| c == 'x'));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut vec: Vector<String> = vec!["a".to_string(), "b".to_string()].into();
        let cloned = vec.clone();
        vec[0].push('!');
        assert_eq!(cloned.as_slice(), &["a".to_string(), "b".to_string()]);
        assert_ne!(vec, cloned);
    }

    #[test]
    fn test_reserve_and_ensure_capacity() {
        let mut vec: Vector<i32> = Vector::new();
        vec.reserve(10).unwrap();
        assert!(vec.capacity() >= 10);
        let old_cap = vec.capacity();
        vec.reserve(5).unwrap();
        assert_eq!(vec.capacity(), old_cap);

        vec.ensure_capacity(15).unwrap();
        assert!(vec.capacity() >= 15);
        assert!(vec.reserve(usize::MAX).is_err());
    }

    #[test]
    fn test_shrink_to_fit() {
        let mut vec = Vector::with_capacity(100).unwrap();
        vec.push(1).unwrap();
        vec.push(2).unwrap();
        vec.push(3).unwrap();
        vec.shrink_to_fit().unwrap();
        assert_eq!(vec.capacity(), 3);
        assert_eq!(vec.as_slice(), &[1, 2, 3]);

        let mut empty: Vector<i32> = Vector::with_capacity(50).unwrap();
        empty.shrink_to_fit().unwrap();
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn test_growth_pattern() {
        let mut vec = Vector::new();
        for i in 0..1000 {
            vec.push(i).unwrap();
        }
        assert_eq!(vec.len(), 1000);
        assert!(vec.capacity() >= 1000);
        assert!(vec.capacity() < 2000);
    }

    #[test]
    fn test_swap() {
        let mut a: Vector<i32> = vec![1, 2].into();
        let mut b: Vector<i32> = vec![3].into();
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[3]);
        assert_eq!(b.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_into_iter_and_vec() {
        let vec: Vector<String> = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
        let back: Vec<String> = vec.clone().into_vec();
        assert_eq!(back, vec!["x", "y", "z"]);
        let joined: String = vec.into_iter().collect();
        assert_eq!(joined, "xyz");
    }

    #[test]
    fn test_zero_sized() {
        let mut vec = Vector::new();
        for _ in 0..10 {
            vec.push(()).unwrap();
        }
        assert_eq!(vec.len(), 10);
        vec.insert(3, ()).unwrap();
        assert_eq!(vec.erase(0).unwrap(), ());
        assert_eq!(vec.into_iter().count(), 10);
    }

    #[test]
    fn test_drop_elements() {
        let counter = Arc::new(AtomicUsize::new(0));

        #[derive(Clone)]
        struct DropCounter {
            counter: Arc<AtomicUsize>,
        }

        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.counter.fetch_add(1, Ordering::SeqCst);
            }
        }

        {
            let mut vec = Vector::new();
            for _ in 0..5 {
                vec.push(DropCounter {
                    counter: counter.clone(),
                })
                .unwrap();
            }

            drop(vec.erase(2).unwrap());
            assert_eq!(counter.load(Ordering::SeqCst), 1);

            let fill = DropCounter {
                counter: counter.clone(),
            };
            vec.resize(2, fill).unwrap();
            // 1 from erase + 2 truncated + the fill value
            assert_eq!(counter.load(Ordering::SeqCst), 4);

            vec.push(DropCounter {
                counter: counter.clone(),
            })
            .unwrap();
        }
        assert_eq!(counter.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_serde_round_trip() {
        let vec: Vector<i32> = vec![3, 1, 2].into();
        let json = serde_json::to_string(&vec).unwrap();
        assert_eq!(json, "[3,1,2]");
        let back: Vector<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Vector<i32>>();
        assert_sync::<Vector<i32>>();
    }

    #[test]
    fn test_max_size() {
        let vec: Vector<u64> = Vector::new();
        assert_eq!(vec.max_size(), isize::MAX as usize / 8);
    }
}
