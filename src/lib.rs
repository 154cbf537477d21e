//! # Puzzlekit
//!
//! Puzzlekit is a Rust library of small counting and ordering algorithms.
//! Its two main workhorses are a permutation type whose cycle decomposition
//! gives the minimum number of swaps needed to sort a sequence, and a
//! streaming counter of geometric-progression triplets.
//!
//! Around those sit a handful of related puzzles: frequency queries over a
//! multiset, anagram pair counting, range-update maxima, queue bribes, a
//! leaderboard comparator and an arena-backed binary search tree.

pub mod arrays;
pub mod counter;
pub mod frequency;
pub mod permutation;
pub mod ranking;
pub mod tree;
pub mod triplets;
