//! # Classic Data Structures
//!
//! *Six small structures, precise contracts.*
//!
//! ## Intuition First
//!
//! Imagine a workshop wall of hand tools. None of them is exotic, but each
//! one does a single job with a guarantee you can state in one sentence:
//! the growable array appends in amortized constant time, the Fenwick tree
//! answers prefix sums in logarithmic time, the heap always hands you the
//! smallest element first.
//!
//! This crate is that wall: a dynamic array, a Fenwick (binary-indexed)
//! tree, a binary heap with a pluggable comparator, a union-find forest,
//! a counting trie, and an augmented interval tree. No component depends
//! on another at runtime; each is independently usable.
//!
//! ## Historical Context
//!
//! ```text
//! 1964  Williams       The binary heap, invented for heapsort
//! 1964  Galler-Fisher  Union-find as a forest of inverted trees
//! 1968  Morrison       PATRICIA: the trie family matures
//! 1975  Tarjan         Inverse-Ackermann analysis of path compression
//! 1989  Cormen et al.  Interval trees as an augmented search tree
//! 1994  Fenwick        The binary indexed tree for cumulative frequencies
//! ```
//!
//! ## Complexity Contracts
//!
//! - `DynArray::add`: amortized $O(1)$.
//! - `FenwickTree::{update, query}`: $O(\log n)$.
//! - `Heap::{push, pop}`: $O(\log n)$.
//! - `UnionFind::{find, merge}`: amortized near-$O(1)$ with path
//!   compression and union by size.
//! - `Trie::{insert, count}`: $O(|key|)$.
//! - `IntervalTree` overlap query: $O(\log n + k)$ on non-degenerate
//!   insertion orders (the tree is an unbalanced BST; see [`interval`]
//!   for the pruning rules it actually applies).
//!
//! ## What Could Go Wrong
//!
//! 1. **Shared mutation**: none of these structures is internally
//!    synchronized. Wrap an instance in a lock if you need concurrent
//!    access; the structures themselves stay single-threaded.
//! 2. **Numeric overflow**: the Fenwick tree accumulates in the element
//!    type. Summing `i32`s past `i32::MAX` wraps or panics exactly like
//!    native arithmetic would.
//!
//! ## Implementation Notes
//!
//! Out-of-range access and popping an empty heap are reported through the
//! crate-wide [`Error`] enum rather than panics, so callers can branch on
//! emptiness. "Maybe absent" reads (`top`, `first`, child lookup) return
//! `Option` instead.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod error;
pub mod fenwick;
pub mod heap;
pub mod interval;
pub mod trie;
pub mod union_find;

pub use array::DynArray;
pub use error::Error;
pub use fenwick::FenwickTree;
pub use heap::Heap;
pub use interval::{Interval, IntervalTree};
pub use trie::Trie;
pub use union_find::UnionFind;
