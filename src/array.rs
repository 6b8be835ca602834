//! Growable array with amortized O(1) append.
//!
//! Also known as an array-list or vector. The backing buffer doubles
//! whenever it fills, so a sequence of $n$ appends performs $O(n)$ total
//! element moves even though individual appends occasionally pay for a
//! reallocation.
//!
//! Growth invalidates references into the old buffer, so the API hands
//! out only index-based access and short-lived borrows.

use std::fmt;

use crate::error::{Error, Result};

/// The default initial capacity of a [`DynArray`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A contiguous growable sequence.
#[derive(Debug, Clone)]
pub struct DynArray<T> {
    buf: Vec<T>,
    cap: usize,
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynArray<T> {
    /// Create an empty array with capacity [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty array with the given initial capacity.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
            cap,
        }
    }

    /// Append `value` at the logical end, growing the buffer first if full.
    ///
    /// Amortized O(1).
    pub fn add(&mut self, value: T) {
        if self.buf.len() >= self.cap {
            self.grow();
        }
        self.buf.push(value);
    }

    /// Return a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.buf.get(index).ok_or(Error::IndexOutOfBounds(index))
    }

    /// Return a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.buf
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds(index))
    }

    /// Overwrite the element at `index` with `value`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Return the first element, or `None` if the array is empty.
    pub fn first(&self) -> Option<&T> {
        self.buf.first()
    }

    /// Return the last element, or `None` if the array is empty.
    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }

    /// Remove and return the last element, or `None` if the array is empty.
    pub fn remove_last(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Return the current logical length.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Return true if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Return the current capacity (slots available before the next growth).
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// View the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    fn grow(&mut self) {
        // Doubling, minimum 1. reserve_exact moves the elements; the old
        // buffer (and any references into it) is gone after this.
        let new_cap = (self.cap * 2).max(1);
        self.buf.reserve_exact(new_cap - self.buf.len());
        self.cap = new_cap;
    }
}

impl<T: PartialEq> DynArray<T> {
    /// Return true if any element equals `value`. O(n) linear scan.
    pub fn contains(&self, value: &T) -> bool {
        self.buf.iter().any(|e| e == value)
    }
}

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.buf.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut arr = DynArray::new();
        for i in 0..100 {
            arr.add(i);
        }
        assert_eq!(arr.len(), 100);
        for i in 0..100 {
            assert_eq!(*arr.get(i).unwrap(), i);
        }
        assert_eq!(arr.get(100), Err(Error::IndexOutOfBounds(100)));
    }

    #[test]
    fn test_growth_from_zero() {
        let mut arr = DynArray::with_capacity(0);
        arr.add(7u8);
        assert_eq!(arr.capacity(), 1);
        arr.add(8);
        assert_eq!(arr.capacity(), 2);
        arr.add(9);
        assert_eq!(arr.capacity(), 4);
        assert_eq!(arr.as_slice(), &[7, 8, 9]);
    }

    #[test]
    fn test_set_and_remove_last() {
        let mut arr = DynArray::new();
        arr.add("a");
        arr.add("b");
        arr.set(0, "z").unwrap();
        assert_eq!(arr.remove_last(), Some("b"));
        assert_eq!(arr.remove_last(), Some("z"));
        assert_eq!(arr.remove_last(), None);
        assert!(arr.set(0, "x").is_err());
    }

    #[test]
    fn test_contains() {
        let mut arr = DynArray::new();
        arr.add(1);
        arr.add(2);
        assert!(arr.contains(&2));
        assert!(!arr.contains(&3));
    }

    #[test]
    fn test_display() {
        let mut arr = DynArray::new();
        assert_eq!(arr.to_string(), "[]");
        arr.add(1);
        arr.add(2);
        arr.add(3);
        assert_eq!(arr.to_string(), "[1, 2, 3]");
    }
}
