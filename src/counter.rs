//! A value-to-count mapping with an explicit get-or-zero accessor.
//!
//! Absent keys read as zero and counts that drop to zero are removed, so a
//! `Counter` never stores a zero entry.

use std::{borrow::Borrow, hash::Hash};

use ahash::AHashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<K: Eq + Hash> {
    counts: AHashMap<K, u64>,
}

impl<K: Eq + Hash> Default for Counter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> Counter<K> {
    pub fn new() -> Self {
        Counter {
            counts: AHashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Counter {
            counts: AHashMap::with_capacity(capacity),
        }
    }

    /// Count stored for `key`, zero if it was never seen.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::counter::Counter;
    /// let mut words = Counter::new();
    /// words.increment("coconuts");
    /// assert_eq!(words.get("coconuts"), 1);
    /// assert_eq!(words.get("bananas"), 0);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, key: K) -> u64 {
        self.add(key, 1)
    }

    /// Adds `amount` to the count of `key` and returns the new count.
    /// Adding zero to an absent key leaves it absent.
    pub fn add(&mut self, key: K, amount: u64) -> u64 {
        if amount == 0 {
            return self.get(&key);
        }
        let count = self.counts.entry(key).or_insert(0);
        *count += amount;
        *count
    }

    /// Removes one occurrence of `key`. Returns `false` if the key was absent.
    pub fn decrement<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.counts.get_mut(key) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(key);
                true
            }
            None => false,
        }
    }

    /// Number of distinct keys with a non-zero count.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}

impl<K: Eq + Hash> Extend<K> for Counter<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.increment(key);
        }
    }
}

impl<K: Eq + Hash> FromIterator<K> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Counter::new();
        counter.extend(iter);
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_read_zero() {
        let counter: Counter<i64> = Counter::new();
        assert_eq!(counter.get(&42), 0);
        assert!(counter.is_empty());
    }

    #[test]
    fn counts_and_totals() {
        let counter: Counter<char> = "mississippi".chars().collect();
        assert_eq!(counter.get(&'s'), 4);
        assert_eq!(counter.get(&'i'), 4);
        assert_eq!(counter.get(&'p'), 2);
        assert_eq!(counter.get(&'m'), 1);
        assert_eq!(counter.len(), 4);
        assert_eq!(counter.total(), 11);
    }

    #[test]
    fn decrement_never_leaves_zero_entries() {
        let mut counter = Counter::new();
        counter.add("note", 2);
        assert!(counter.decrement("note"));
        assert_eq!(counter.get("note"), 1);
        assert!(counter.decrement("note"));
        assert_eq!(counter.get("note"), 0);
        assert_eq!(counter.len(), 0);
        assert!(!counter.decrement("note"));
        assert!(counter.iter().all(|(_, c)| c > 0));
    }

    #[test]
    fn adding_zero_is_a_no_op() {
        let mut counter = Counter::new();
        assert_eq!(counter.add(7u32, 0), 0);
        assert!(counter.is_empty());
        counter.increment(7);
        assert_eq!(counter.add(7, 0), 1);
    }
}
