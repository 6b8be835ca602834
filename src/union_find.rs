//! Disjoint-set forest with path compression and union by size.
//!
//! # Theory
//!
//! Elements are ids `0..n`. Each set is an inverted tree: every element
//! points at a parent, roots point at themselves. `find` walks to the
//! root and then re-points every visited element directly at it (path
//! compression); `merge` hangs the smaller root under the larger (union
//! by size). Together these make any sequence of $m$ operations run in
//! $O(m \, \alpha(n))$, effectively constant per operation.

use crate::error::{Error, Result};

/// A union-find (disjoint-set) structure over ids `0..n`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    /// Create `n` singleton sets, ids `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    /// Return the root id of the set containing `x`.
    ///
    /// Compresses the walked path as a side effect; the set membership
    /// of every element is unchanged.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        if x >= self.parent.len() {
            return Err(Error::IdOutOfRange {
                id: x,
                len: self.parent.len(),
            });
        }
        let mut root = x;
        while root != self.parent[root] {
            root = self.parent[root];
        }
        // Second pass: point everything on the path at the root.
        let mut i = x;
        while i != root {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }
        Ok(root)
    }

    /// Unite the sets containing `a` and `b`.
    ///
    /// Returns `true` if two distinct sets were merged, `false` if the
    /// elements were already joined.
    pub fn merge(&mut self, a: usize, b: usize) -> Result<bool> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }
        let (small, large) = if self.size[root_a] < self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.sets -= 1;
        Ok(true)
    }

    /// Return true if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Return the current number of disjoint sets.
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// Return the number of elements the structure was created with.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Return true if the structure covers zero elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_and_connectivity() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.find(3).unwrap(), 3);
        assert_eq!(uf.sets(), 5);

        assert!(uf.merge(1, 3).unwrap());
        assert_eq!(uf.sets(), 4);

        assert!(uf.merge(2, 1).unwrap());
        assert_eq!(uf.find(2).unwrap(), uf.find(3).unwrap());
        assert!(!uf.connected(2, 4).unwrap());

        assert!(uf.merge(2, 4).unwrap());
        assert!(uf.connected(2, 4).unwrap());
        assert_eq!(uf.sets(), 2);
    }

    #[test]
    fn test_merge_same_set_is_noop() {
        let mut uf = UnionFind::new(3);
        assert!(uf.merge(0, 1).unwrap());
        assert!(!uf.merge(1, 0).unwrap());
        assert_eq!(uf.sets(), 2);
    }

    #[test]
    fn test_out_of_range_id() {
        let mut uf = UnionFind::new(2);
        assert_eq!(uf.find(2), Err(Error::IdOutOfRange { id: 2, len: 2 }));
        assert!(uf.merge(0, 5).is_err());
        assert!(uf.connected(9, 0).is_err());
    }

    #[test]
    fn test_path_compression_flattens() {
        let mut uf = UnionFind::new(8);
        for i in 0..7 {
            uf.merge(i, i + 1).unwrap();
        }
        let root = uf.find(7).unwrap();
        // After compression every element points directly at the root.
        for i in 0..8 {
            assert_eq!(uf.find(i).unwrap(), root);
            assert_eq!(uf.parent[i], root);
        }
        assert_eq!(uf.sets(), 1);
    }
}
