//! Array-backed binary heap with a pluggable comparator.
//!
//! Also known as a priority queue. A min-heap over the natural order by
//! default; supply any total order at construction to get a max-heap or
//! a custom priority.
//!
//! # Theory
//!
//! The heap is a complete binary tree stored in an array:
//!
//! ```text
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//! ```
//!
//! Heap property: every non-root element orders at-or-after its parent
//! under the comparator. `push` appends and sifts up; `pop` swaps the
//! last element into the root and sifts it down. Both are $O(\log n)$.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// The default initial capacity of a [`Heap`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Natural-order comparator used by [`Heap::new`].
fn natural_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

/// A binary heap ordered by the comparator `F`.
#[derive(Clone)]
pub struct Heap<T, F = fn(&T, &T) -> Ordering>
where
    F: Fn(&T, &T) -> Ordering,
{
    buf: Vec<T>,
    cmp: F,
}

impl<T: Ord> Heap<T> {
    /// Create a min-heap over the natural order of `T`.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a natural-order min-heap with the given initial capacity.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
            cmp: natural_order,
        }
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create a heap ordered by `cmp`.
    ///
    /// The element the comparator orders first is the one `pop` returns,
    /// so reversing a natural order yields a max-heap.
    pub fn with_comparator(cmp: F) -> Self {
        Self::with_comparator_and_capacity(cmp, DEFAULT_CAPACITY)
    }

    /// Create a heap ordered by `cmp` with the given initial capacity.
    pub fn with_comparator_and_capacity(cmp: F, cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
            cmp,
        }
    }

    /// Insert `value`, growing the backing array if full. O(log n).
    pub fn push(&mut self, value: T) {
        self.buf.push(value);
        self.sift_up(self.buf.len() - 1);
    }

    /// Push every element of `values` in input order.
    ///
    /// O(n log n); this is repeated insertion, not a bulk heapify.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for v in values {
            self.push(v);
        }
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T> {
        if self.buf.is_empty() {
            return Err(Error::Empty("heap"));
        }
        let last = self.buf.len() - 1;
        self.buf.swap(0, last);
        let top = self.buf.pop().expect("len checked above");
        if !self.buf.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// Return the top element without removing it, or `None` if empty.
    pub fn top(&self) -> Option<&T> {
        self.buf.first()
    }

    /// Discard all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Return the number of elements held.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Return true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Verify the heap property at every node. O(n); intended for tests
    /// and debugging.
    pub fn is_heap(&self) -> bool {
        (1..self.buf.len()).all(|i| (self.cmp)(&self.buf[parent(i)], &self.buf[i]) != Ordering::Greater)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if (self.cmp)(&self.buf[i], &self.buf[p]) == Ordering::Less {
                self.buf.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.buf.len();
        loop {
            let mut smallest = i;
            let l = left(i);
            let r = right(i);
            if l < n && (self.cmp)(&self.buf[l], &self.buf[smallest]) == Ordering::Less {
                smallest = l;
            }
            if r < n && (self.cmp)(&self.buf[r], &self.buf[smallest]) == Ordering::Less {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.buf.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T: fmt::Debug, F: Fn(&T, &T) -> Ordering> fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap").field("buf", &self.buf).finish()
    }
}

impl<T: fmt::Display, F: Fn(&T, &T) -> Ordering> fmt::Display for Heap<T, F> {
    /// Render the elements in storage (array) order, not sorted order.
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
    fn test_pop_yields_minimum() {
        let mut h = Heap::new();
        h.push_all([5, 1, 4, 2, 3]);
        assert_eq!(h.top(), Some(&1));
        assert_eq!(h.pop().unwrap(), 1);
        assert_eq!(h.pop().unwrap(), 2);
        assert_eq!(h.pop().unwrap(), 3);
        assert_eq!(h.pop().unwrap(), 4);
        assert_eq!(h.pop().unwrap(), 5);
        assert_eq!(h.pop(), Err(Error::Empty("heap")));
    }

    #[test]
    fn test_heap_property_held_under_churn() {
        let mut h = Heap::new();
        for i in [9, 3, 7, 1, 8, 2, 6, 4, 5, 0] {
            h.push(i);
            assert!(h.is_heap());
        }
        while !h.is_empty() {
            h.pop().unwrap();
            assert!(h.is_heap());
        }
    }

    #[test]
    fn test_max_heap_via_comparator() {
        let mut h = Heap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        h.push_all([5, 1, 4, 2, 3]);
        assert_eq!(h.pop().unwrap(), 5);
        assert_eq!(h.pop().unwrap(), 4);
        assert!(h.is_heap());
    }

    #[test]
    fn test_strings_heapsort() {
        let words = ["Hello", "hello", "hEllo", "HellO", "HELLO", "ehLo", "asd", "HeLLo"];
        let mut h = Heap::new();
        h.push_all(words);
        let mut drained = Vec::new();
        while let Ok(w) = h.pop() {
            drained.push(w);
        }
        let mut expected = words.to_vec();
        expected.sort();
        assert_eq!(drained, expected);
    }

    #[test]
    fn test_clear_and_display() {
        let mut h = Heap::new();
        h.push_all([2, 1]);
        assert_eq!(h.to_string(), "[1, 2]");
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.to_string(), "[]");
        assert_eq!(h.top(), None);
    }
}
