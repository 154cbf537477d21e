//! Frequency-counting puzzles built on [`Counter`].
//!
//! - [`FrequencyTracker`] answers "does any value occur exactly `z` times?" in
//!   constant time while values are inserted and deleted.
//! - [`check_magazine`] decides whether a note can be cut out of a magazine.
//! - [`two_strings`] decides whether two strings share a substring.
//! - [`sherlock_and_anagrams`] counts pairs of anagrammatic substrings.

use std::hash::Hash;

use ahash::AHashSet;
use itertools::Itertools;
use thiserror::Error;

use crate::counter::Counter;

/// A multiset that also tracks how many distinct values share each multiplicity.
#[derive(Debug, Clone)]
pub struct FrequencyTracker<T: Eq + Hash> {
    occurrences: Counter<T>,
    /// multiplicity -> number of values occurring exactly that often
    frequencies: Counter<u64>,
}

impl<T: Eq + Hash> Default for FrequencyTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FrequencyTracker<T> {
    pub fn new() -> Self {
        FrequencyTracker {
            occurrences: Counter::new(),
            frequencies: Counter::new(),
        }
    }

    pub fn insert(&mut self, value: T) {
        let before = self.occurrences.get(&value);
        if before > 0 {
            self.frequencies.decrement(&before);
        }
        let after = self.occurrences.increment(value);
        self.frequencies.increment(after);
    }

    /// Removes one occurrence of `value`, returning `false` if there was none.
    pub fn delete(&mut self, value: &T) -> bool {
        let before = self.occurrences.get(value);
        if before == 0 {
            return false;
        }
        self.frequencies.decrement(&before);
        self.occurrences.decrement(value);
        if before > 1 {
            self.frequencies.increment(before - 1);
        }
        true
    }

    /// Whether some value occurs exactly `frequency` times. Always `false` for zero.
    pub fn has_frequency(&self, frequency: u64) -> bool {
        self.frequencies.get(&frequency) > 0
    }

    pub fn count(&self, value: &T) -> u64 {
        self.occurrences.get(value)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown query operation {0}, expected 1, 2 or 3")]
    UnknownOperation(u8),
}

/// One operation against a [`FrequencyTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub enum Query {
    Insert(u64),
    Delete(u64),
    Check(u64),
}

impl TryFrom<(u8, u64)> for Query {
    type Error = QueryError;

    fn try_from((op, value): (u8, u64)) -> Result<Self, Self::Error> {
        match op {
            1 => Ok(Query::Insert(value)),
            2 => Ok(Query::Delete(value)),
            3 => Ok(Query::Check(value)),
            other => Err(QueryError::UnknownOperation(other)),
        }
    }
}

/// Runs the queries in order and returns the answers to the `Check` queries.
///
/// # Examples
///
/// ```
/// # use puzzlekit::frequency::{run_queries, Query};
/// let raw: [(u8, u64); 8] = [(1, 5), (1, 6), (3, 2), (1, 10), (1, 10), (1, 6), (2, 5), (3, 2)];
/// let queries = raw
///     .into_iter()
///     .map(Query::try_from)
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(run_queries(queries), vec![false, true]);
/// ```
pub fn run_queries<I>(queries: I) -> Vec<bool>
where
    I: IntoIterator<Item = Query>,
{
    let mut tracker = FrequencyTracker::new();
    let mut answers = Vec::new();
    for query in queries {
        match query {
            Query::Insert(x) => tracker.insert(x),
            Query::Delete(y) => {
                tracker.delete(&y);
            }
            Query::Check(z) => answers.push(tracker.has_frequency(z)),
        }
    }
    answers
}

/// Whether every word of `note` can be taken from `magazine`, each magazine
/// word being usable once. Matching is case sensitive.
///
/// # Examples
///
/// ```
/// # use puzzlekit::frequency::check_magazine;
/// let magazine = "give me one grand today night".split_whitespace();
/// assert!(check_magazine(magazine, "give one grand today".split_whitespace()));
/// ```
pub fn check_magazine<'a, M, N>(magazine: M, note: N) -> bool
where
    M: IntoIterator<Item = &'a str>,
    N: IntoIterator<Item = &'a str>,
{
    let mut available: Counter<&str> = magazine.into_iter().collect();
    note.into_iter().all(|word| available.decrement(word))
}

/// Whether `a` and `b` share a common substring. Any shared substring contains
/// a shared character, so this reduces to a character set intersection.
pub fn two_strings(a: &str, b: &str) -> bool {
    let seen: AHashSet<char> = a.chars().collect();
    b.chars().any(|c| seen.contains(&c))
}

/// Number of unordered pairs of substrings (distinguished by position) that
/// are anagrams of each other.
///
/// Substrings are grouped by their sorted characters; a group of `c`
/// substrings contributes `c * (c - 1) / 2` pairs.
///
/// # Examples
///
/// ```
/// # use puzzlekit::frequency::sherlock_and_anagrams;
/// assert_eq!(sherlock_and_anagrams("abba"), 4);
/// assert_eq!(sherlock_and_anagrams("kkkk"), 10);
/// ```
pub fn sherlock_and_anagrams(s: &str) -> u64 {
    let chars: Vec<char> = s.chars().collect();
    let signatures: Counter<Vec<char>> = (0..=chars.len())
        .tuple_combinations::<(usize, usize)>()
        .map(|(i, j)| chars[i..j].iter().copied().sorted_unstable().collect())
        .collect();

    signatures.iter().map(|(_, c)| c * (c - 1) / 2).sum()
}
