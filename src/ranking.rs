//! Leaderboard ordering: higher scores first, ties broken alphabetically.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    fmt,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct Player {
    pub name: String,
    pub score: i64,
}

impl Player {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Player {
            name: name.into(),
            score,
        }
    }
}

/// `a < b` when `a` ranks above `b`: descending score, then ascending name.
impl Ord for Player {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Player {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.score)
    }
}

/// Heap of players that hands out the best-ranked one first.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    heap: BinaryHeap<Reverse<Player>>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, player: Player) {
        self.heap.push(Reverse(player));
    }

    /// Removes and returns the best-ranked player.
    pub fn pop(&mut self) -> Option<Player> {
        self.heap.pop().map(|Reverse(p)| p)
    }

    pub fn peek(&self) -> Option<&Player> {
        self.heap.peek().map(|Reverse(p)| p)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// All players, best first.
    pub fn into_sorted_vec(self) -> Vec<Player> {
        // Reverse flips the heap's ascending order back to ranking order
        self.heap
            .into_sorted_vec()
            .into_iter()
            .rev()
            .map(|Reverse(p)| p)
            .collect()
    }
}

impl Extend<Player> for Leaderboard {
    fn extend<I: IntoIterator<Item = Player>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(Reverse));
    }
}

impl FromIterator<Player> for Leaderboard {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Leaderboard {
            heap: iter.into_iter().map(Reverse).collect(),
        }
    }
}

/// Sorts players into leaderboard order.
///
/// # Examples
///
/// ```
/// # use puzzlekit::ranking::{sort_players, Player};
/// let sorted = sort_players(vec![
///     Player::new("Smith", 20),
///     Player::new("Jones", 15),
///     Player::new("Jones", 20),
/// ]);
/// let lines: Vec<String> = sorted.iter().map(ToString::to_string).collect();
/// assert_eq!(lines, ["Jones 20", "Smith 20", "Jones 15"]);
/// ```
pub fn sort_players(mut players: Vec<Player>) -> Vec<Player> {
    players.sort();
    players
}
