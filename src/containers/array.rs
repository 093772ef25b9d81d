//! Fixed-size array with checked access

use crate::error::{check_bounds, CollError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Deref, DerefMut, Index, IndexMut};

/// Array of exactly `N` elements
///
/// # Examples
///
/// ```rust
/// use stdcoll::Array;
///
/// let arr: Array<i32, 4> = Array::from_items([1, 2])?;
/// assert_eq!(arr.data(), &[1, 2, 0, 0]);
/// assert!(arr.at(4).is_err());
/// # Ok::<(), stdcoll::CollError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Array<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Array of default values
    pub fn new() -> Self
    where
        T: Default,
    {
        Self {
            data: std::array::from_fn(|_| T::default()),
        }
    }

    /// Array holding the given items in order, default-filled past the last
    /// item
    ///
    /// # Errors
    ///
    /// [`CollError::OutOfBounds`] if more than `N` items are supplied.
    pub fn from_items<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Default,
    {
        let mut items = items.into_iter();
        let data = std::array::from_fn(|_| items.next().unwrap_or_default());
        if items.next().is_some() {
            return Err(CollError::out_of_bounds(N, N));
        }
        Ok(Self { data })
    }

    /// Number of elements (always `N`)
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if `N == 0`
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Same as [`len`](Self::len)
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Element at `index`
    pub fn at(&self, index: usize) -> Result<&T> {
        check_bounds(index, N)?;
        Ok(&self.data[index])
    }

    /// Mutable element at `index`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        check_bounds(index, N)?;
        Ok(&mut self.data[index])
    }

    /// First element
    pub fn front(&self) -> Result<&T> {
        self.data.first().ok_or(CollError::empty("front"))
    }

    /// Last element
    pub fn back(&self) -> Result<&T> {
        self.data.last().ok_or(CollError::empty("back"))
    }

    /// The elements as a slice
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The elements as a mutable slice
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Set every element to a clone of `value`
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Exchange contents element-wise with `other`
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate over mutable elements
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Unwrap into the underlying array
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> Deref for Array<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T, const N: usize> DerefMut for Array<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Serialize, const N: usize> Serialize for Array<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.iter())
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Array<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        let len = items.len();
        let data = <[T; N]>::try_from(items)
            .map_err(|_| D::Error::invalid_length(len, &format!("an array of {} elements", N).as_str()))?;
        Ok(Self { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_default_filled() {
        let arr: Array<String, 3> = Array::new();
        assert!(arr.iter().all(String::is_empty));
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.max_size(), 3);
        assert!(!arr.is_empty());
    }

    #[test]
    fn test_from_items() {
        let arr: Array<i32, 3> = Array::from_items([7, 8, 9]).unwrap();
        assert_eq!(arr.data(), &[7, 8, 9]);

        let short: Array<i32, 3> = Array::from_items([7]).unwrap();
        assert_eq!(short.data(), &[7, 0, 0]);

        let err = Array::<i32, 2>::from_items([1, 2, 3]).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_checked_access() {
        let mut arr: Array<i32, 2> = [1, 2].into();
        assert_eq!(*arr.at(1).unwrap(), 2);
        *arr.at_mut(0).unwrap() = 10;
        assert_eq!(arr[0], 10);
        assert!(matches!(
            arr.at(2),
            Err(CollError::OutOfBounds { index: 2, size: 2 })
        ));
        assert_eq!(*arr.front().unwrap(), 10);
        assert_eq!(*arr.back().unwrap(), 2);
    }

    #[test]
    fn test_zero_length() {
        let arr: Array<u8, 0> = Array::new();
        assert!(arr.is_empty());
        assert!(arr.front().unwrap_err().is_precondition_violation());
        assert!(arr.back().is_err());
        assert!(arr.at(0).is_err());
    }

    #[test]
    fn test_fill_and_swap() {
        let mut a: Array<char, 3> = Array::new();
        let mut b: Array<char, 3> = ['x', 'y', 'z'].into();
        a.fill('a');
        a.swap(&mut b);
        assert_eq!(a.data(), &['x', 'y', 'z']);
        assert_eq!(b.data(), &['a', 'a', 'a']);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let arr: Array<i32, 2> = Array::new();
        let _ = arr[2];
    }

    #[test]
    fn test_serde() {
        let arr: Array<u8, 3> = [1, 2, 3].into();
        let json = serde_json::to_string(&arr).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Array<u8, 3> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, arr);
        assert!(serde_json::from_str::<Array<u8, 3>>("[1,2]").is_err());
    }
}
