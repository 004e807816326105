//! Ordered key-value dictionaries under a caller-supplied total order, with
//! two interchangeable backing structures:
//!
//! - [`AvlTree`]: a height-balanced binary search tree.  Every node keeps a
//!   balance factor in `{-1, 0, +1}` and insertions/removals restore it with
//!   single or double rotations, giving `O(log n)` worst-case access.
//! - [`SkipList`]: a probabilistic multi-level linked list.  Each node gets a
//!   randomized *tower* of forward links, giving `O(log n)` expected access
//!   with no rebalancing at all:
//!
//! ```text
//! <head> ----------> [2] --------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------[7] ----------> [9] ---------->
//! <head> --> [1] --> [2] --> [3] --------> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! Both containers share one contract: unique keys in ascending comparator
//! order; `insert`/`probe`/`get`/`remove`/`clear`/`traverse`; a bidirectional
//! cursor; and an optional *drop hook* that receives every pair leaving the
//! container exactly once.  [`Dict`] wraps either behind a single handle for
//! callers that choose the structure at runtime.
//!
//! # Safety
//!
//! Both containers rely on a well-behaved comparison function.  Specifically,
//! given some ordering function `f(a, b)`, it **must** satisfy the following
//! properties:
//!
//! - Be well defined: `f(a, b)` should always return the same value.
//! - Be anti-symmetric: `f(a, b) == Greater` if and only if `f(b, a) ==
//!   Less`, and `f(a, b) == Equal == f(b, a)`.
//! - Be transitive: If `f(a, b) == Greater` and `f(b, c) == Greater` then
//!   `f(a, c) == Greater`.
//!
//! An ill-behaved comparator cannot corrupt memory, but lookups may miss
//! stored pairs and iteration order becomes meaningless.
//!
//! # Threading
//!
//! The containers are single-threaded by contract and deliberately implement
//! neither `Send` nor `Sync`; callers wanting shared access must wrap them in
//! external mutual exclusion on a single thread's worth of borrows.

// In this library, the 'height' of a skip node refers to how many links it
// has (the minimum height is 1).  'Levels' are the layers of the list, with
// level 0 the bottom-most.  For the tree, 'height' counts edges on the
// longest root-to-leaf path.

#![warn(missing_docs)]

pub mod avl;
pub mod dict;
pub mod level_generator;
pub mod skiplist;
mod skipnode;

pub use crate::avl::AvlTree;
pub use crate::dict::{Comparator, Dict, DictCursor, DropHook, InsertOutcome, ProbeOutcome};
pub use crate::level_generator::{Lcg, LcgError, LevelGenerator, MAX_LINK};
pub use crate::skiplist::SkipList;
