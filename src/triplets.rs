//! # Geometric triplets
//!
//! Counts index triples `i < j < k` whose values form a geometric progression
//! `v, v·r, v·r²` for a given ratio `r`, in a single pass and without ever
//! enumerating triples.
//!
//! Two transient [`Counter`]s are kept while scanning, both keyed by the value
//! that would *extend* a chain:
//!
//! - `pairs_ending_at[x]`: chains `(a, a·r)` seen so far whose next term would be `x`.
//! - `triples_ending_at[x]`: chains `(a, a·r)` seen so far that `x` would complete.
//!
//! For each value `v` the counter first collects `triples_ending_at[v]`, then
//! promotes the pairs waiting on `v` into triples waiting on `v·r`, and finally
//! registers `v` as the start of a pair waiting on `v·r`. The read happens before
//! the writes, so a single element never both starts and completes the same triple.
//!
//! Arithmetic is exact. Ratios are rationals kept in lowest terms; a product that
//! is not an integer, or that does not fit in the value type, has no successor.

use std::{fmt, hash::Hash};

use duplicate::duplicate;
use thiserror::Error;

use crate::counter::Counter;

/// Integer types usable as sequence values and ratio components.
pub trait Term: Copy + Ord + Hash + fmt::Debug + fmt::Display {
    const ZERO: Self;
    const ONE: Self;

    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_div(self, rhs: Self) -> Option<Self>;
    fn checked_rem(self, rhs: Self) -> Option<Self>;
    fn checked_neg(self) -> Option<Self>;
}

duplicate! {
    [int;
        [i32];
        [i64];
        [i128];
        [isize];
        [u32];
        [u64];
        [u128];
        [usize];
    ]

    impl Term for int {
        const ZERO: Self = 0;
        const ONE: Self = 1;

        #[inline]
        fn checked_mul(self, rhs: Self) -> Option<Self> {
            int::checked_mul(self, rhs)
        }

        #[inline]
        fn checked_div(self, rhs: Self) -> Option<Self> {
            int::checked_div(self, rhs)
        }

        #[inline]
        fn checked_rem(self, rhs: Self) -> Option<Self> {
            int::checked_rem(self, rhs)
        }

        #[inline]
        fn checked_neg(self) -> Option<Self> {
            int::checked_neg(self)
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioError {
    #[error("ratio denominator is zero")]
    ZeroDenominator,

    #[error("ratio cannot be normalised within the value type")]
    Unrepresentable,
}

/// An exact ratio `numer / denom`, in lowest terms with a positive denominator.
///
/// # Examples
///
/// ```
/// # use puzzlekit::triplets::Ratio;
/// let half = Ratio::new(-4i64, -8).unwrap();
/// assert_eq!((half.numer(), half.denom()), (1, 2));
/// assert_eq!(half.apply(10), Some(5));
/// assert_eq!(half.apply(7), None);
/// ```
///
/// Only the encoding side is derived: a decoded pair would skip the
/// normalisation in [`Ratio::new`]. Rebuild ratios through `Ratio::new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode))]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

impl<T: Term> Ratio<T> {
    pub fn new(numer: T, denom: T) -> Result<Self, RatioError> {
        if denom == T::ZERO {
            return Err(RatioError::ZeroDenominator);
        }

        let g = gcd(numer, denom);
        let mut numer = numer.checked_div(g).ok_or(RatioError::Unrepresentable)?;
        let mut denom = denom.checked_div(g).ok_or(RatioError::Unrepresentable)?;
        if denom < T::ZERO {
            numer = numer.checked_neg().ok_or(RatioError::Unrepresentable)?;
            denom = denom.checked_neg().ok_or(RatioError::Unrepresentable)?;
        }

        Ok(Ratio { numer, denom })
    }

    pub fn integer(r: T) -> Self {
        Ratio {
            numer: r,
            denom: T::ONE,
        }
    }

    pub fn numer(&self) -> T {
        self.numer
    }

    pub fn denom(&self) -> T {
        self.denom
    }

    /// Exact `value * self`, or `None` when the product is not an integer or
    /// overflows `T`.
    ///
    /// Since the ratio is in lowest terms, `value * numer` is divisible by
    /// `denom` exactly when `value` is, so dividing first never loses precision.
    pub fn apply(&self, value: T) -> Option<T> {
        if value.checked_rem(self.denom)? != T::ZERO {
            return None;
        }
        value.checked_div(self.denom)?.checked_mul(self.numer)
    }
}

impl<T: Term> From<T> for Ratio<T> {
    fn from(r: T) -> Self {
        Ratio::integer(r)
    }
}

impl<T: Term> fmt::Display for Ratio<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == T::ONE {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/// Euclid's algorithm. The sign of the result is irrelevant to its callers.
fn gcd<T: Term>(mut a: T, mut b: T) -> T {
    while b != T::ZERO {
        // only MIN % -1 overflows, and its remainder is zero
        let r = a.checked_rem(b).unwrap_or(T::ZERO);
        a = b;
        b = r;
    }
    a
}

/// Counts triples `i < j < k` with `values[j] = values[i] * ratio` and
/// `values[k] = values[j] * ratio`.
///
/// # Examples
///
/// ```
/// # use puzzlekit::triplets::count_triplets;
/// assert_eq!(count_triplets(&[1i64, 4, 16, 64], 4), 2);
/// assert_eq!(count_triplets(&[1i64, 2, 2, 4], 2), 2);
/// assert_eq!(count_triplets(&[1i64, 3, 9, 9, 27, 81], 3), 6);
/// ```
pub fn count_triplets<T: Term>(values: &[T], ratio: T) -> u64 {
    count_triplets_ratio(values, Ratio::integer(ratio))
}

/// [`count_triplets`] with an arbitrary exact ratio.
///
/// # Examples
///
/// ```
/// # use puzzlekit::triplets::{count_triplets_ratio, Ratio};
/// let half = Ratio::new(1i64, 2).unwrap();
/// assert_eq!(count_triplets_ratio(&[8, 4, 2, 1], half), 2);
/// ```
pub fn count_triplets_ratio<T: Term>(values: &[T], ratio: Ratio<T>) -> u64 {
    let mut pairs_ending_at: Counter<T> = Counter::with_capacity(values.len());
    let mut triples_ending_at: Counter<T> = Counter::with_capacity(values.len());
    let mut triplets = 0;

    for &value in values {
        triplets += triples_ending_at.get(&value);

        if let Some(next) = ratio.apply(value) {
            triples_ending_at.add(next, pairs_ending_at.get(&value));
            pairs_ending_at.increment(next);
        }
    }

    triplets
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    use super::*;

    /// Reference O(n³) enumeration.
    fn brute_force(values: &[i64], ratio: i64) -> u64 {
        let n = values.len();
        let mut count = 0;
        for i in 0..n {
            for j in i + 1..n {
                if values[j] != values[i] * ratio {
                    continue;
                }
                for k in j + 1..n {
                    if values[k] == values[j] * ratio {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    #[test]
    fn known_counts() {
        assert_eq!(count_triplets(&[1i64, 4, 16, 64], 4), 2);
        assert_eq!(count_triplets(&[1i64, 2, 2, 4], 2), 2);
        assert_eq!(count_triplets(&[1i64, 3, 9, 9, 27, 81], 3), 6);
        assert_eq!(count_triplets(&[1i64, 5, 5, 25, 125], 5), 4);
    }

    #[test]
    fn empty_and_short_inputs() {
        assert_eq!(count_triplets::<i64>(&[], 2), 0);
        assert_eq!(count_triplets(&[1i64, 2], 2), 0);
    }

    #[test]
    fn unit_ratio_counts_equal_values() {
        for m in 0u64..30 {
            let values = vec![7i64; m as usize];
            let expected = if m < 3 { 0 } else { m * (m - 1) * (m - 2) / 6 };
            assert_eq!(count_triplets(&values, 1), expected, "m = {m}");
        }
        assert_eq!(count_triplets(&[1i64, 1, 2, 1], 1), 1);
    }

    #[test]
    fn negative_and_zero_ratios() {
        assert_eq!(count_triplets(&[1i64, -2, 4, -8], -2), 2);
        assert_eq!(count_triplets(&[3i64, 0, 0], 0), 1);
        assert_eq!(count_triplets(&[2i64, -2, 2, -2], -1), 2);
    }

    #[test]
    fn fractional_ratios() {
        let third = Ratio::new(1i64, 3).unwrap();
        assert_eq!(count_triplets_ratio(&[81, 27, 9, 9, 3, 1], third), 6);

        let three_halves = Ratio::new(3i64, 2).unwrap();
        assert_eq!(count_triplets_ratio(&[4, 6, 9, 13], three_halves), 1);
    }

    #[test]
    fn overflowing_products_never_match() {
        // a wrapping multiply would turn 2^30 * 2 into i32::MIN
        assert_eq!(count_triplets(&[1 << 29, 1 << 30, i32::MIN], 2), 0);
        assert_eq!(count_triplets(&[u64::MAX, u64::MAX, u64::MAX], 1), 1);
    }

    #[test]
    fn ratio_normalisation() {
        assert_eq!(Ratio::new(6i64, 4).unwrap(), Ratio::new(3, 2).unwrap());
        assert_eq!(Ratio::new(3i64, -6).unwrap().numer(), -1);
        assert_eq!(Ratio::new(3i64, -6).unwrap().denom(), 2);
        assert_eq!(Ratio::new(1i64, 0), Err(RatioError::ZeroDenominator));
        assert_eq!(Ratio::new(i64::MIN, -1), Err(RatioError::Unrepresentable));
        assert_eq!(Ratio::new(0i64, -5).unwrap(), Ratio::integer(0));
        assert_eq!(Ratio::from(4u32).to_string(), "4");
        assert_eq!(Ratio::new(-2i32, 6).unwrap().to_string(), "-1/3");
    }

    #[test]
    fn matches_brute_force_on_random_sequences() {
        let mut rng = SmallRng::seed_from_u64(0x7219_11e5);
        let pool = [-27i64, -9, -4, -3, -2, -1, 1, 2, 3, 4, 8, 9, 16, 27];

        for _ in 0..500 {
            let n = rng.gen_range(0..=20);
            let values: Vec<i64> = (0..n).map(|_| pool[rng.gen_range(0..pool.len())]).collect();
            for ratio in [1, 2, 3, -1] {
                assert_eq!(
                    count_triplets(&values, ratio),
                    brute_force(&values, ratio),
                    "values = {values:?}, ratio = {ratio}"
                );
            }
        }
    }

    proptest! {
        #[test]
        fn agrees_with_enumeration(
            values in prop::collection::vec(-6i64..=6, 0..=20),
            ratio in prop::sample::select(vec![1i64, 2, 3, -1]),
        ) {
            prop_assert_eq!(count_triplets(&values, ratio), brute_force(&values, ratio));
        }
    }
}
