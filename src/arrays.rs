//! Array puzzles: range updates, rotations, hourglass sums, queue bribes and
//! a greedy shopping budget.

use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("query {query} covers {start}..={end}, outside 1..={len}")]
    RangeOutOfBounds {
        query: usize,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("grid of {rows}x{cols} has no room for a 3x3 hourglass")]
    GridTooSmall { rows: usize, cols: usize },

    #[error("row {row} has {len} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("element {position} does not fit in an i64 after the range updates")]
    ValueOverflow { position: usize },

    #[error("hourglass at ({row}, {col}) sums past the i64 range")]
    HourglassOverflow { row: usize, col: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BribeError {
    #[error("Too chaotic: person {person} moved forward more than two places")]
    TooChaotic { person: usize },

    #[error("sticker {sticker} at position {position} is not a person in this queue")]
    InvalidSticker { sticker: usize, position: usize },
}

/// Applies every `(start, end, amount)` query, an inclusive 1-based range
/// increment, to an array of `n` zeros and returns the largest resulting value.
///
/// Each query touches only the two ends of a difference array; one prefix
/// sum then recovers the values. Deltas are accumulated in `i128`, so only an
/// element that ends up outside the `i64` range is an error.
///
/// # Examples
///
/// ```
/// # use puzzlekit::arrays::array_manipulation;
/// let queries = [(1, 5, 3), (4, 8, 7), (6, 9, 1)];
/// assert_eq!(array_manipulation(10, &queries), Ok(10));
/// ```
pub fn array_manipulation(n: usize, queries: &[(usize, usize, i64)]) -> Result<i64, ArrayError> {
    let mut deltas = vec![0i128; n + 1];
    for (query, &(start, end, amount)) in queries.iter().enumerate() {
        if start == 0 || start > end || end > n {
            return Err(ArrayError::RangeOutOfBounds {
                query,
                start,
                end,
                len: n,
            });
        }
        deltas[start - 1] += i128::from(amount);
        deltas[end] -= i128::from(amount);
    }

    let mut running = 0i128;
    let mut max = 0i64;
    for (position, delta) in deltas[..n].iter().enumerate() {
        running += delta;
        let value = i64::try_from(running).map_err(|_| ArrayError::ValueOverflow { position })?;
        max = max.max(value);
    }
    Ok(max)
}

/// Rotates `slice` left by `d` places. `d` may exceed the length.
///
/// # Examples
///
/// ```
/// # use puzzlekit::arrays::rotate_left;
/// assert_eq!(rotate_left(&[1, 2, 3, 4, 5], 4), vec![5, 1, 2, 3, 4]);
/// assert_eq!(rotate_left(&[1, 2, 3, 4, 5], 6), vec![2, 3, 4, 5, 1]);
/// ```
pub fn rotate_left<T: Clone>(slice: &[T], d: usize) -> Vec<T> {
    if slice.is_empty() {
        return Vec::new();
    }
    let d = d % slice.len();
    [&slice[d..], &slice[..d]].concat()
}

/// Largest hourglass sum in a rectangular grid.
///
/// An hourglass is a 3x3 window without the two outer cells of its middle row:
///
/// ```text
/// a b c
///   d
/// e f g
/// ```
pub fn hourglass_sum<R>(grid: &[R]) -> Result<i64, ArrayError>
where
    R: AsRef<[i64]>,
{
    let rows = grid.len();
    let cols = grid.first().map_or(0, |row| row.as_ref().len());
    if let Some((row, len)) = grid
        .iter()
        .map(|r| r.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != cols)
    {
        return Err(ArrayError::RaggedGrid {
            row,
            len,
            expected: cols,
        });
    }
    if rows < 3 || cols < 3 {
        return Err(ArrayError::GridTooSmall { rows, cols });
    }

    (0..rows - 2)
        .cartesian_product(0..cols - 2)
        .map(|(row, col)| {
            let top = &grid[row].as_ref()[col..col + 3];
            let bottom = &grid[row + 2].as_ref()[col..col + 3];
            let waist = &grid[row + 1].as_ref()[col + 1];
            top.iter()
                .chain(std::iter::once(waist))
                .chain(bottom)
                .try_fold(0i64, |acc, &cell| acc.checked_add(cell))
                .ok_or(ArrayError::HourglassOverflow { row, col })
        })
        .try_fold(i64::MIN, |best, sum| sum.map(|sum| best.max(sum)))
}

/// Total number of bribes that turned the queue `1..=n` into `queue`, where
/// anyone may bribe the person directly ahead of them at most twice.
///
/// Everyone who overtook a person must now stand between that person's
/// original slot minus one and their current slot, so only that window is
/// scanned. The window is empty for someone who moved forward.
///
/// # Examples
///
/// ```
/// # use puzzlekit::arrays::{minimum_bribes, BribeError};
/// assert_eq!(minimum_bribes(&[2, 1, 5, 3, 4]), Ok(3));
/// assert_eq!(
///     minimum_bribes(&[2, 5, 1, 3, 4]),
///     Err(BribeError::TooChaotic { person: 5 })
/// );
/// ```
pub fn minimum_bribes(queue: &[usize]) -> Result<usize, BribeError> {
    let mut bribes = 0;
    for (position, &sticker) in queue.iter().enumerate() {
        if sticker == 0 || sticker > queue.len() {
            return Err(BribeError::InvalidSticker { sticker, position });
        }
        let original = sticker - 1;
        if original > position + 2 {
            return Err(BribeError::TooChaotic { person: sticker });
        }
        let start = original.saturating_sub(1).min(position);
        bribes += queue[start..position]
            .iter()
            .filter(|&&ahead| ahead > sticker)
            .count();
    }
    Ok(bribes)
}

/// How many items can be bought with `budget`, buying the cheapest first.
///
/// # Examples
///
/// ```
/// # use puzzlekit::arrays::maximum_toys;
/// assert_eq!(maximum_toys(&[1, 12, 5, 111, 200, 1000, 10], 50), 4);
/// ```
pub fn maximum_toys(prices: &[u64], budget: u64) -> usize {
    let mut heap: BinaryHeap<Reverse<u64>> = prices.iter().copied().map(Reverse).collect();
    let mut remaining = budget;
    let mut toys = 0;
    while let Some(Reverse(price)) = heap.pop() {
        if price > remaining {
            break;
        }
        remaining -= price;
        toys += 1;
    }
    toys
}
