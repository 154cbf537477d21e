//! # Permutations
//!
//! This module provides a `Permutation` struct for representing permutations
//! of `0..n`, together with the swap-counting routines built on its cycle
//! decomposition.
//!
//! ## Key Features:
//!
//! - **Representation**: A `Permutation` is stored by its direct mapping (`map[i]` is
//!   the image of `i`) and its inverse mapping.
//! - **Construction**:
//!   - Identity permutation: `Permutation::id(n)`.
//!   - From a mapping vector: `Permutation::from_map(vec![...])` (unchecked) or
//!     `Permutation::try_from_map(vec![...])` (validated).
//!   - From a sequence of `1..=n`: `Permutation::from_one_based(&[...])`.
//!   - From a slice to be sorted: `Permutation::sort(&[...])`.
//! - **Basic Operations**: `inverse`, `compose`, `apply_slice`, `sign`, `is_identity`.
//! - **Cycle Utilities**: `find_cycles`, `cycle_count`, `transpositions`, `min_swaps`.
//! - **Swap counting**:
//!   - [`minimum_swaps`]: greedy in-place cycle resolution on a sequence of `1..=n`.
//!   - [`minimum_swaps_checked`]: the same, validating its input and leaving it untouched.
//!   - [`minimum_swaps_to_sort`]: the swap count for any slice of distinct ordered values.
//!
//! Sorting a cycle of length `L` takes exactly `L - 1` swaps, so the minimum number
//! of swaps that sorts a permutation of `n` elements is `n` minus its number of cycles.

use std::{fmt, ops::Index};

use bitvec::vec::BitVec;
use thiserror::Error;

/// A permutation of `0..n`.
///
/// # Examples
///
/// ```
/// use puzzlekit::permutation::Permutation;
///
/// // Create a permutation that maps 0->2, 1->0, 2->1, 3->3
/// let p = Permutation::from_map(vec![2, 0, 1, 3]);
///
/// // Apply the permutation to a slice
/// let data = vec![10, 20, 30, 40];
/// let permuted = p.apply_slice(&data);
/// assert_eq!(permuted, vec![20, 30, 10, 40]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct Permutation {
    map: Vec<usize>,
    inv: Vec<usize>,
}

/// Errors raised when a sequence is not a bijection onto its index range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    #[error("value {value} at position {position} is outside the valid range for length {len}")]
    ValueOutOfRange {
        value: usize,
        position: usize,
        len: usize,
    },

    #[error("value {value} appears at both position {first} and position {second}")]
    Duplicate {
        value: usize,
        first: usize,
        second: usize,
    },
}

impl Permutation {
    // --------------------------------------------------------------------------------------------
    // Basic Constructors and Accessors
    // --------------------------------------------------------------------------------------------

    /// Creates the identity permutation of length `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::Permutation;
    /// let p = Permutation::id(4);
    /// assert_eq!(p.apply_slice(&[10, 20, 30, 40]), vec![10, 20, 30, 40]);
    /// ```
    pub fn id(n: usize) -> Self {
        Permutation {
            map: (0..n).collect(),
            inv: (0..n).collect(),
        }
    }

    /// Creates a permutation from a mapping vector.
    /// The `map` vector states where index `i` is sent: `map[i]` is the image of `i`.
    ///
    /// The caller guarantees that `map` is a bijection of `0..map.len()`;
    /// use [`Permutation::try_from_map`] for untrusted input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::Permutation;
    /// let p = Permutation::from_map(vec![2, 0, 1]);
    /// assert_eq!(p.apply_slice(&[10, 20, 30]), vec![20, 30, 10]);
    /// ```
    pub fn from_map(map: Vec<usize>) -> Self {
        let mut inv = vec![0; map.len()];
        for (i, &j) in map.iter().enumerate() {
            inv[j] = i;
        }
        Permutation { map, inv }
    }

    /// Creates a permutation from a inverse mapping vector.
    /// The `inv` vector states that index `i` is actually `inv[i]`.
    pub fn from_inv(inv: Vec<usize>) -> Self {
        let mut map = vec![0; inv.len()];
        for (i, &j) in inv.iter().enumerate() {
            map[j] = i;
        }
        Permutation { map, inv }
    }

    /// Validating version of [`Permutation::from_map`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::{Permutation, PermutationError};
    /// assert!(Permutation::try_from_map(vec![1, 2, 0]).is_ok());
    /// assert_eq!(
    ///     Permutation::try_from_map(vec![1, 1, 0]),
    ///     Err(PermutationError::Duplicate { value: 1, first: 0, second: 1 })
    /// );
    /// ```
    pub fn try_from_map(map: Vec<usize>) -> Result<Self, PermutationError> {
        let inv = Self::checked_inverse(&map, 0)?;
        Ok(Permutation { map, inv })
    }

    /// Reads a sequence containing each of `1..=n` exactly once.
    /// The value `v` found at position `i` sends `i` to `v - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::{Permutation, PermutationError};
    /// let p = Permutation::from_one_based([3, 1, 2]).unwrap();
    /// assert_eq!(p.map(), &[2, 0, 1]);
    ///
    /// assert_eq!(
    ///     Permutation::from_one_based([0, 1]),
    ///     Err(PermutationError::ValueOutOfRange { value: 0, position: 0, len: 2 })
    /// );
    /// ```
    pub fn from_one_based<S>(seq: S) -> Result<Self, PermutationError>
    where
        S: AsRef<[usize]>,
    {
        let seq = seq.as_ref();
        let inv = Self::checked_inverse(seq, 1)?;
        Ok(Permutation {
            map: seq.iter().map(|&v| v - 1).collect(),
            inv,
        })
    }

    /// Inverse of a sequence that must hold each of `base..base + len` once.
    fn checked_inverse(values: &[usize], base: usize) -> Result<Vec<usize>, PermutationError> {
        let len = values.len();
        let mut inv: Vec<Option<usize>> = vec![None; len];
        for (position, &value) in values.iter().enumerate() {
            if value < base || value - base >= len {
                return Err(PermutationError::ValueOutOfRange {
                    value,
                    position,
                    len,
                });
            }
            let slot = &mut inv[value - base];
            if let Some(first) = *slot {
                return Err(PermutationError::Duplicate {
                    value,
                    first,
                    second: position,
                });
            }
            *slot = Some(position);
        }
        Ok(inv.into_iter().flatten().collect())
    }

    /// Returns the direct mapping as a slice.
    pub fn map(&self) -> &[usize] {
        &self.map
    }

    /// Returns the inverse mapping as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::Permutation;
    /// let p = Permutation::from_map(vec![2, 0, 1]);
    /// assert_eq!(p.inv(), &[1, 2, 0]);
    /// ```
    pub fn inv(&self) -> &[usize] {
        &self.inv
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    // --------------------------------------------------------------------------------------------
    // Basic Operations
    // --------------------------------------------------------------------------------------------

    /// Returns the inverse of the permutation.
    pub fn inverse(&self) -> Self {
        Permutation {
            map: self.inv.clone(),
            inv: self.map.clone(),
        }
    }

    /// Applies `self` to a slice, returning a new `Vec<T>` in permuted order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::Permutation;
    /// let p = Permutation::from_map(vec![2, 0, 1]);
    /// let data = vec![10, 20, 30];
    /// assert_eq!(p.apply_slice(&data), vec![20, 30, 10]);
    /// ```
    pub fn apply_slice<T: Clone, S>(&self, slice: S) -> Vec<T>
    where
        S: AsRef<[T]>,
    {
        let s = slice.as_ref();
        self.inv.iter().map(|&idx| s[idx].clone()).collect()
    }

    /// Composes `self` with another permutation `other`, returning a new permutation:
    /// `(self ∘ other)(i) = self.map[other.map[i]]`.
    pub fn compose(&self, other: &Self) -> Self {
        let map = other.map.iter().map(|&i| self.map[i]).collect();
        Self::from_map(map)
    }

    /// Checks if this permutation is the identity permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::Permutation;
    /// assert!(Permutation::id(4).is_identity());
    /// assert!(Permutation::id(0).is_identity());
    ///
    /// let p = Permutation::from_map(vec![1, 0, 2]);
    /// assert!(!p.is_identity());
    /// assert!(p.compose(&p.inverse()).is_identity());
    /// ```
    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &m)| i == m)
    }

    /// Returns the sign (+1 or -1) of the permutation,
    /// indicating whether it is an even (+1) or odd (-1) permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::Permutation;
    /// let p = Permutation::from_map(vec![1, 0, 3, 2]);
    /// assert_eq!(p.sign(), 1);
    ///
    /// let q = Permutation::from_map(vec![2, 1, 0]);
    /// assert_eq!(q.sign(), -1);
    /// ```
    pub fn sign(&self) -> i8 {
        if self.min_swaps() % 2 == 0 {
            1
        } else {
            -1
        }
    }

    // --------------------------------------------------------------------------------------------
    // Sorting Utilities
    // --------------------------------------------------------------------------------------------

    /// Given a slice of items that implement `Ord`, returns the permutation that sorts them
    /// in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::Permutation;
    /// let data = vec![30, 10, 20, 40];
    /// let perm = Permutation::sort(&data);
    /// assert_eq!(perm.apply_slice(&data), vec![10, 20, 30, 40]);
    /// ```
    pub fn sort<T, S>(slice: S) -> Permutation
    where
        T: Ord,
        S: AsRef<[T]>,
    {
        let s = slice.as_ref();
        let mut permutation: Vec<usize> = (0..s.len()).collect();
        permutation.sort_by_key(|&i| &s[i]);
        Self::from_inv(permutation)
    }

    // --------------------------------------------------------------------------------------------
    // Cycles and Transpositions
    // --------------------------------------------------------------------------------------------

    /// Returns the cycle decomposition of `self`.
    /// Each cycle lists the indices of a single cycle, e.g. `[0, 2, 1]` means `0->2, 2->1, 1->0`.
    /// Fixed points are reported as cycles of length one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::Permutation;
    /// let p = Permutation::from_map(vec![2, 0, 1, 3]);
    /// assert_eq!(p.find_cycles(), vec![vec![0, 2, 1], vec![3]]);
    /// ```
    pub fn find_cycles(&self) -> Vec<Vec<usize>> {
        let mut visited: BitVec = BitVec::repeat(false, self.map.len());
        let mut cycles = Vec::new();
        for i in 0..self.map.len() {
            if visited[i] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut j = i;
            while !visited[j] {
                visited.set(j, true);
                cycle.push(j);
                j = self.map[j];
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// Number of disjoint cycles, fixed points included.
    pub fn cycle_count(&self) -> usize {
        let mut visited: BitVec = BitVec::repeat(false, self.map.len());
        let mut count = 0;
        for i in 0..self.map.len() {
            if visited[i] {
                continue;
            }
            count += 1;
            let mut j = i;
            while !visited[j] {
                visited.set(j, true);
                j = self.map[j];
            }
        }
        count
    }

    /// Converts a single cycle to the transpositions that produce it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::Permutation;
    /// let transpositions = Permutation::cycle_to_transpositions(&[0, 2, 1]);
    /// assert_eq!(transpositions, vec![(0, 1), (0, 2)]);
    /// ```
    pub fn cycle_to_transpositions(cycle: &[usize]) -> Vec<(usize, usize)> {
        let mut transpositions = Vec::new();
        for i in (1..cycle.len()).rev() {
            transpositions.push((cycle[0], cycle[i]));
        }
        transpositions
    }

    /// Returns the list of transpositions for `self`, by decomposing it into cycles
    /// and then converting each cycle to transpositions.
    pub fn transpositions(&self) -> Vec<(usize, usize)> {
        self.find_cycles()
            .iter()
            .flat_map(|cycle| Self::cycle_to_transpositions(cycle))
            .collect()
    }

    /// The minimum number of swaps turning `self` into the identity:
    /// `n` minus the number of cycles.
    ///
    /// # Examples
    ///
    /// ```
    /// # use puzzlekit::permutation::Permutation;
    /// let p = Permutation::from_one_based([7, 1, 3, 2, 4, 5, 6]).unwrap();
    /// assert_eq!(p.min_swaps(), 5);
    /// ```
    pub fn min_swaps(&self) -> usize {
        self.len() - self.cycle_count()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // cycle notation, non-trivial cycles only
        let mut first = true;
        for cycle in self.find_cycles() {
            if cycle.len() > 1 {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "(")?;
                for (i, &x) in cycle.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{x}")?;
                }
                write!(f, ")")?;
                first = false;
            }
        }
        if first {
            write!(f, "()")?;
        }

        // then one-line notation
        write!(f, " [")?;
        for (i, &x) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.map[index]
    }
}

// ------------------------------------------------------------------------------------------------
// Swap counting on raw sequences
// ------------------------------------------------------------------------------------------------

/// Counts the swaps needed to sort a sequence holding each of `1..=n` exactly once.
///
/// Positions are scanned left to right; while position `i` does not hold `i + 1`
/// its value is swapped into the slot it belongs to. Every swap puts one value in
/// its final place, so each cycle of length `L` is resolved in `L - 1` swaps.
///
/// The slice is borrowed exclusively and is left **sorted ascending** when the
/// function returns. Use [`minimum_swaps_checked`] to keep the input intact.
///
/// # Panics
///
/// Panics if the sequence is not a permutation of `1..=n`: a value outside that
/// range, or a value whose destination slot already holds it.
///
/// # Examples
///
/// ```
/// # use puzzlekit::permutation::minimum_swaps;
/// let mut seq = vec![4, 3, 1, 2];
/// assert_eq!(minimum_swaps(&mut seq), 3);
/// assert_eq!(seq, vec![1, 2, 3, 4]);
/// ```
pub fn minimum_swaps(seq: &mut [usize]) -> usize {
    let len = seq.len();
    let mut swaps = 0;
    for i in 0..len {
        while seq[i] != i + 1 {
            let value = seq[i];
            assert!(
                (1..=len).contains(&value),
                "value {value} at position {i} is outside 1..={len}"
            );
            let target = value - 1;
            assert!(seq[target] != value, "value {value} appears more than once");
            seq.swap(i, target);
            swaps += 1;
        }
    }
    swaps
}

/// Validating counterpart of [`minimum_swaps`].
///
/// Rejects anything that is not a permutation of `1..=n` and runs the greedy
/// resolution on a private copy, so the caller never observes a mutation.
///
/// # Examples
///
/// ```
/// # use puzzlekit::permutation::{minimum_swaps_checked, PermutationError};
/// let seq = [2, 3, 4, 1, 5];
/// assert_eq!(minimum_swaps_checked(&seq), Ok(3));
/// assert_eq!(seq, [2, 3, 4, 1, 5]);
///
/// assert!(matches!(
///     minimum_swaps_checked(&[1, 1]),
///     Err(PermutationError::Duplicate { value: 1, .. })
/// ));
/// ```
pub fn minimum_swaps_checked(seq: &[usize]) -> Result<usize, PermutationError> {
    Permutation::from_one_based(seq)?;
    let mut owned = seq.to_vec();
    Ok(minimum_swaps(&mut owned))
}

/// Minimum swaps sorting an arbitrary slice of distinct ordered values.
///
/// Equal values are ordered by position, so with duplicates the result is the
/// swap count towards one particular sorted arrangement.
///
/// # Examples
///
/// ```
/// # use puzzlekit::permutation::minimum_swaps_to_sort;
/// assert_eq!(minimum_swaps_to_sort(["pear", "apple", "fig"]), 2);
/// assert_eq!(minimum_swaps_to_sort::<u8, _>([]), 0);
/// ```
pub fn minimum_swaps_to_sort<T, S>(slice: S) -> usize
where
    T: Ord,
    S: AsRef<[T]>,
{
    Permutation::sort(slice).min_swaps()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn known_swap_counts() {
        let cases: [(&[usize], usize); 4] = [
            (&[2, 3, 4, 1, 5], 3),
            (&[4, 3, 1, 2], 3),
            (&[1, 3, 5, 2, 4, 6, 7], 3),
            (&[7, 1, 3, 2, 4, 5, 6], 5),
        ];

        for (seq, expected) in cases {
            let mut owned = seq.to_vec();
            assert_eq!(minimum_swaps(&mut owned), expected, "for {seq:?}");
            assert_eq!(minimum_swaps_checked(seq), Ok(expected));
            assert_eq!(
                Permutation::from_one_based(seq).unwrap().min_swaps(),
                expected
            );
        }
    }

    #[test]
    fn sorted_needs_no_swaps() {
        for n in 0..10 {
            let mut seq: Vec<usize> = (1..=n).collect();
            assert_eq!(minimum_swaps(&mut seq), 0);
        }
        let mut empty: [usize; 0] = [];
        assert_eq!(minimum_swaps(&mut empty), 0);
    }

    #[test]
    fn leaves_sequence_sorted() {
        let mut seq = vec![7, 1, 3, 2, 4, 5, 6];
        minimum_swaps(&mut seq);
        assert_eq!(seq, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn checked_does_not_mutate() {
        let seq = vec![4, 3, 1, 2];
        let before = seq.clone();
        minimum_swaps_checked(&seq).unwrap();
        assert_eq!(seq, before);
    }

    #[test]
    #[should_panic(expected = "appears more than once")]
    fn duplicate_panics() {
        let mut seq = vec![2, 2, 1];
        minimum_swaps(&mut seq);
    }

    #[test]
    #[should_panic(expected = "is outside 1..=3")]
    fn out_of_range_panics() {
        let mut seq = vec![1, 5, 2];
        minimum_swaps(&mut seq);
    }

    #[test]
    fn rejects_non_permutations() {
        assert_eq!(
            minimum_swaps_checked(&[1, 4, 2]),
            Err(PermutationError::ValueOutOfRange {
                value: 4,
                position: 1,
                len: 3
            })
        );
        assert_eq!(
            minimum_swaps_checked(&[3, 1, 3]),
            Err(PermutationError::Duplicate {
                value: 3,
                first: 0,
                second: 2
            })
        );
        assert_eq!(
            Permutation::try_from_map(vec![0, 3]),
            Err(PermutationError::ValueOutOfRange {
                value: 3,
                position: 1,
                len: 2
            })
        );
    }

    #[test]
    fn from_one_based_inverse() {
        let p = Permutation::from_one_based([2, 3, 4, 1, 5]).unwrap();
        assert_eq!(p.map(), &[1, 2, 3, 0, 4]);
        assert_eq!(p.inv(), &[3, 0, 1, 2, 4]);
        assert_eq!(p.compose(&p.inverse()), Permutation::id(5));
        assert_eq!(p[3], 0);
    }

    #[test]
    fn test_find_cycles() {
        let p = Permutation::from_map(vec![2, 0, 1, 3]);
        assert_eq!(p.find_cycles(), vec![vec![0, 2, 1], vec![3]]);
        assert_eq!(p.cycle_count(), 2);
    }

    #[test]
    fn test_transpositions() {
        let p = Permutation::from_map(vec![2, 0, 1, 3]);
        assert_eq!(p.transpositions(), vec![(0, 1), (0, 2)]);

        let p = Permutation::from_one_based([7, 1, 3, 2, 4, 5, 6]).unwrap();
        assert_eq!(p.transpositions().len(), p.min_swaps());
    }

    #[test]
    fn swaps_to_sort_arbitrary_values() {
        assert_eq!(minimum_swaps_to_sort([40, 10, 30, 20]), 2);
        assert_eq!(minimum_swaps_to_sort([-3, 0, 8]), 0);
        assert_eq!(minimum_swaps_to_sort(['c', 'b', 'a']), 1);
    }

    #[test]
    fn display() {
        let p = Permutation::from_map(vec![2, 0, 1, 3]);
        insta::assert_snapshot!(p.to_string(), @"(0 2 1) [2 0 1 3]");
        insta::assert_snapshot!(Permutation::id(3).to_string(), @"() [0 1 2]");
    }

    fn one_based_permutation() -> impl Strategy<Value = Vec<usize>> {
        (0usize..40).prop_flat_map(|n| Just((1..=n).collect::<Vec<usize>>()).prop_shuffle())
    }

    /// Independent cycle count: follow `i -> seq[i] - 1` until back at the start.
    fn count_cycles(seq: &[usize]) -> usize {
        let mut seen = vec![false; seq.len()];
        let mut cycles = 0;
        for start in 0..seq.len() {
            if seen[start] {
                continue;
            }
            cycles += 1;
            let mut j = start;
            while !seen[j] {
                seen[j] = true;
                j = seq[j] - 1;
            }
        }
        cycles
    }

    proptest! {
        #[test]
        fn swaps_are_n_minus_cycles(seq in one_based_permutation()) {
            let expected = seq.len() - count_cycles(&seq);
            let mut owned = seq.clone();
            prop_assert_eq!(minimum_swaps(&mut owned), expected);
            prop_assert!(owned.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(Permutation::from_one_based(&seq).unwrap().min_swaps(), expected);
        }

        #[test]
        fn transpositions_rebuild_the_sorted_order(seq in one_based_permutation()) {
            let p = Permutation::from_one_based(&seq).unwrap();
            let mut data = seq.clone();
            for &(i, j) in p.transpositions().iter().rev() {
                data.swap(i, j);
            }
            let sorted: Vec<usize> = (1..=seq.len()).collect();
            prop_assert_eq!(&data, &sorted);
            prop_assert_eq!(p.apply_slice(&seq), sorted);
            prop_assert_eq!(p.transpositions().len(), p.min_swaps());
        }
    }
}
