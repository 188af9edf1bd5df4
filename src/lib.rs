//! Ordered associative containers built on one arena-backed binary search tree.
//!
//! This crate provides four containers that share a single tree engine:
//!
//! | Container             | Equal keys     | Payload |
//! |-----------------------|----------------|---------|
//! | [`OrderedSet`]        | one            | no      |
//! | [`OrderedMap`]        | one            | yes     |
//! | [`OrderedMultiSet`]   | any number     | no      |
//! | [`OrderedMultiMap`]   | any number     | yes     |
//!
//! All four iterate in ascending key order and answer `lower_bound` /
//! `upper_bound` queries. The multi variants additionally expose
//! `equal_range`, and keep equal keys in insertion order.
//!
//! # Example
//!
//! ```
//! use ordtree::{Error, OrderedMap, OrderedMultiSet};
//!
//! let mut ages = OrderedMap::new();
//! ages.insert("ada", 36);
//! ages.insert("alan", 41);
//! assert_eq!(ages.at("ada"), Ok(&36));
//! assert_eq!(ages.at("grace"), Err(Error::KeyNotFound));
//! assert_eq!(ages.lower_bound("al"), Some(&"alan"));
//!
//! let scores = OrderedMultiSet::from([90, 75, 90, 60]);
//! assert_eq!(scores.count(&90), 2);
//! assert_eq!(scores.upper_bound(&75), Some(&90));
//! ```
//!
//! # Implementation
//!
//! Nodes live in a flat arena and refer to their children and parent by index,
//! which gives the delete algorithm its parent links without shared ownership.
//! The tree is not rebalanced: operations cost O(h) where h is the tree height,
//! which degrades to O(n) for sorted insertion order. Traversal, cloning and
//! teardown never recurse, so deep trees are slow but safe.
//!
//! Structural mutations emit [`tracing`] events at `TRACE` level.

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

mod error;
mod raw;

pub mod ordered_map;
pub mod ordered_multimap;
pub mod ordered_multiset;
pub mod ordered_set;

pub use error::{Error, Result};
pub use ordered_map::OrderedMap;
pub use ordered_multimap::OrderedMultiMap;
pub use ordered_multiset::OrderedMultiSet;
pub use ordered_set::OrderedSet;
