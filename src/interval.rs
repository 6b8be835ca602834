//! Augmented interval tree for overlap queries.
//!
//! # Theory
//!
//! A binary search tree of closed intervals ordered by low endpoint,
//! where each node also caches `max_high`, the maximum high endpoint in
//! its subtree. An overlap search can then skip a left subtree whose
//! `max_high` lies entirely below the query: nothing in it can overlap.
//!
//! Two closed intervals overlap iff
//! `a.low <= b.high && b.low <= a.high`.
//!
//! # Search discipline
//!
//! The overlap walk visits the current node, descends left only when the
//! left child's `max_high` reaches the query's low endpoint, and always
//! descends right. The right side is bounded only by the parent's
//! low-endpoint ordering, which the search deliberately does not exploit
//! for pruning, so the walk can visit non-overlapping right descendants.
//! Every subtree it skips is provably overlap-free, so results are
//! exact; only the visit count is looser than a fully-pruned tree.
//!
//! The tree does not rebalance and supports no deletion. Equal low
//! endpoints go right.

use std::fmt;

use crate::error::{Error, Result};

/// A closed interval `[low, high]` with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    low: T,
    high: T,
}

impl<T: Copy + PartialOrd> Interval<T> {
    /// Create an interval, rejecting `low > high`.
    pub fn new(low: T, high: T) -> Result<Self> {
        if low > high {
            return Err(Error::InvalidInterval);
        }
        Ok(Self { low, high })
    }

    /// Create the degenerate interval `[value, value]`.
    pub fn point(value: T) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Return the low endpoint.
    pub fn low(&self) -> T {
        self.low
    }

    /// Return the high endpoint.
    pub fn high(&self) -> T {
        self.high
    }

    /// Closed-interval overlap test, endpoints inclusive.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.low, self.high)
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    interval: Interval<T>,
    max_high: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T: Copy + PartialOrd> Node<T> {
    fn new(interval: Interval<T>) -> Self {
        Self {
            max_high: interval.high,
            interval,
            left: None,
            right: None,
        }
    }
}

/// An augmented BST over intervals, ordered by low endpoint.
#[derive(Debug, Clone, Default)]
pub struct IntervalTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Copy + PartialOrd> IntervalTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `interval` as a BST leaf keyed on its low endpoint,
    /// refreshing `max_high` at every node on the insertion path.
    pub fn insert(&mut self, interval: Interval<T>) {
        self.len += 1;
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            if interval.high > node.max_high {
                node.max_high = interval.high;
            }
            cur = if interval.low < node.interval.low {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cur = Some(Box::new(Node::new(interval)));
    }

    /// Collect every stored interval overlapping `target`.
    pub fn query_all(&self, target: &Interval<T>) -> Vec<Interval<T>> {
        let mut found = Vec::new();
        self.process_overlaps(target, |ivl| found.push(ivl));
        found
    }

    /// Collect every stored interval containing the point `value`.
    pub fn query_point(&self, value: T) -> Vec<Interval<T>> {
        self.query_all(&Interval::point(value))
    }

    /// Invoke `visit` on every stored interval overlapping `target`.
    pub fn process_overlaps<F: FnMut(Interval<T>)>(&self, target: &Interval<T>, mut visit: F) {
        if let Some(root) = &self.root {
            Self::overlaps_at(root, target, &mut visit);
        }
    }

    /// Invoke `visit` on every stored interval containing `value`.
    pub fn process_point<F: FnMut(Interval<T>)>(&self, value: T, visit: F) {
        self.process_overlaps(&Interval::point(value), visit);
    }

    fn overlaps_at<F: FnMut(Interval<T>)>(node: &Node<T>, target: &Interval<T>, visit: &mut F) {
        if target.overlaps(&node.interval) {
            visit(node.interval);
        }
        if let Some(left) = &node.left {
            // Nothing under a max_high below target.low can overlap.
            if left.max_high >= target.low {
                Self::overlaps_at(left, target, visit);
            }
        }
        // The right side is never pruned; the low-endpoint ordering is
        // not used to bound it.
        if let Some(right) = &node.right {
            Self::overlaps_at(right, target, visit);
        }
    }

    /// In-order walk (ascending low endpoint) over all intervals.
    pub fn traverse<F: FnMut(Interval<T>)>(&self, mut visit: F) {
        Self::traverse_at(&self.root, &mut visit);
    }

    fn traverse_at<F: FnMut(Interval<T>)>(node: &Option<Box<Node<T>>>, visit: &mut F) {
        if let Some(node) = node {
            Self::traverse_at(&node.left, visit);
            visit(node.interval);
            Self::traverse_at(&node.right, visit);
        }
    }

    /// Return the number of stored intervals.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the tree holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivl(low: i32, high: i32) -> Interval<i32> {
        Interval::new(low, high).unwrap()
    }

    #[test]
    fn test_invalid_interval_rejected() {
        assert_eq!(Interval::new(4, 2), Err(Error::InvalidInterval));
        assert!(Interval::new(2, 2).is_ok());
    }

    #[test]
    fn test_overlap_is_inclusive() {
        assert!(ivl(1, 3).overlaps(&ivl(3, 5)));
        assert!(ivl(3, 5).overlaps(&ivl(1, 3)));
        assert!(!ivl(1, 2).overlaps(&ivl(3, 4)));
    }

    #[test]
    fn test_point_query() {
        let mut tree = IntervalTree::new();
        tree.insert(ivl(2, 4));
        tree.insert(ivl(3, 7));
        tree.insert(ivl(5, 8));
        tree.insert(ivl(1, 5));

        let hits = tree.query_point(3);
        assert_eq!(hits, vec![ivl(2, 4), ivl(1, 5), ivl(3, 7)]);

        let hits = tree.query_all(&ivl(6, 6));
        assert_eq!(hits, vec![ivl(3, 7), ivl(5, 8)]);
    }

    #[test]
    fn test_max_high_maintained_along_path() {
        let mut tree = IntervalTree::new();
        tree.insert(ivl(10, 11));
        tree.insert(ivl(5, 20));
        tree.insert(ivl(1, 2));
        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.max_high, 20);
        // (5,20) sits left of (10,11) and carries (1,2) on its own left.
        let left = root.left.as_ref().unwrap();
        assert_eq!(left.max_high, 20);
        assert_eq!(left.left.as_ref().unwrap().max_high, 2);
    }

    #[test]
    fn test_traverse_in_order() {
        let mut tree = IntervalTree::new();
        for (lo, hi) in [(5, 6), (2, 9), (8, 8), (2, 3)] {
            tree.insert(ivl(lo, hi));
        }
        let mut lows = Vec::new();
        tree.traverse(|i| lows.push(i.low()));
        assert_eq!(lows, vec![2, 2, 5, 8]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_empty_tree() {
        let tree: IntervalTree<i32> = IntervalTree::new();
        assert!(tree.is_empty());
        assert!(tree.query_point(1).is_empty());
        tree.traverse(|_| panic!("nothing to visit"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ivl(2, 4).to_string(), "[2 -> 4]");
    }
}
