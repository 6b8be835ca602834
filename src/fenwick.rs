//! Fenwick tree (binary indexed tree) for prefix sums.
//!
//! # Theory
//!
//! Slot $i$ of the backing array (1-indexed) aggregates the
//! $i \mathbin{\&} -i$ elements ending at position $i$, so both point
//! updates and prefix queries touch $O(\log n)$ slots: an update walks
//! upward by adding the lowest set bit, a query walks downward by
//! clearing it.
//!
//! Space is $n + 1$ elements; slot 0 is never written and stays zero.
//! The tree is built once over a fixed length and never resized.
//!
//! Accumulation happens in the element type itself, so overflow behaves
//! exactly like native arithmetic on that type.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{Error, Result};

/// A Fenwick tree over `n` elements of a numeric type `T`.
///
/// `T::default()` must be the additive zero, which holds for every
/// primitive integer and float type.
#[derive(Debug, Clone)]
pub struct FenwickTree<T> {
    backing: Vec<T>,
    len: usize,
}

impl<T> FenwickTree<T>
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T>,
{
    /// Create an all-zero tree over `n` elements.
    pub fn with_len(n: usize) -> Self {
        Self {
            backing: vec![T::default(); n + 1],
            len: n,
        }
    }

    /// Build a tree from an initial sequence.
    ///
    /// Applies `update(i, values[i])` per element in order: O(n log n).
    pub fn build(values: &[T]) -> Self {
        let mut tree = Self::with_len(values.len());
        for (i, &v) in values.iter().enumerate() {
            // Indices are in range by construction.
            let _ = tree.update(i, v);
        }
        tree
    }

    /// Return the number of elements the tree was built over.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the tree covers zero elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add `delta` to the element at `index` (0-based).
    pub fn update(&mut self, index: usize, delta: T) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds(index));
        }
        let mut i = index + 1;
        while i <= self.len {
            self.backing[i] = self.backing[i] + delta;
            i += lowbit(i);
        }
        Ok(())
    }

    /// Return the sum of the elements in `[0, to)` (exclusive prefix sum).
    pub fn query(&self, to: usize) -> Result<T> {
        if to > self.len {
            return Err(Error::IndexOutOfBounds(to));
        }
        let mut sum = T::default();
        let mut i = to;
        while i > 0 {
            sum = sum + self.backing[i];
            i -= lowbit(i);
        }
        Ok(sum)
    }

    /// Return the sum of the elements in `[from, to)`.
    ///
    /// Equivalent to `query(to) - query(from)`; requires `from <= to`.
    pub fn query_range(&self, from: usize, to: usize) -> Result<T> {
        if from > to {
            return Err(Error::InvalidRange { from, to });
        }
        Ok(self.query(to)? - self.query(from)?)
    }
}

/// Lowest set bit of `i`.
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

impl<T: fmt::Display> fmt::Display for FenwickTree<T> {
    /// Render the internal backing slots, including slot 0 (always zero).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.backing.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}
