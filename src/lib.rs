//! A red-black tree ordered map for Rust.
//!
//! This crate provides [`OrderedMap`], a self-balancing binary search tree keyed
//! by a caller-supplied [`Comparator`]. It guarantees O(log n) `put`, `get` and
//! `remove` while iterating in sorted key order.
//!
//! # Example
//!
//! ```
//! use redblack_map::OrderedMap;
//!
//! let mut map = OrderedMap::natural()?;
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     map.put(key, key * 10)?;
//! }
//!
//! assert_eq!(map.get(&4), Some(&40));
//! assert_eq!(map.remove(&5), Some(50));
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, [1, 3, 4, 7, 8, 9]);
//! # Ok::<(), redblack_map::Error>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Fallible allocation** - Allocation failure is reported as [`Error::OutOfMemory`]
//!   and leaves the map untouched
//! - **Custom ordering** - Any closure `Fn(&K, &K) -> Ordering` can order the keys
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to each other through integer handles, so
//! parent back-references need no reference counting and no unsafe code. Two
//! reserved slots play the classic sentinel roles: a read-only BLACK `nil` for
//! absent children, and a root anchor whose left child is the root, so that the
//! root is rebalanced exactly like any other node.
//!
//! The map is not synchronized; wrap it in a lock to share it between threads.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod error;
mod raw;

pub mod ordered_map;

pub use compare::{Comparator, NaturalOrder};
pub use error::{Error, Result};
pub use ordered_map::OrderedMap;
