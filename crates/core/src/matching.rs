//! Match detection
//!
//! A match is a horizontal or vertical run of at least [`MIN_MATCH_LEN`]
//! identical colors. Rows and columns are scanned independently and the hits
//! are merged into one [`MatchSet`], so a cell that sits in both a matched row
//! and a matched column is reported once.

use std::collections::BTreeSet;

use crate::board::Board;
use crate::types::{Position, MIN_MATCH_LEN};

/// Deduplicated positions matched on one board snapshot
///
/// Iteration is row-major regardless of detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    positions: BTreeSet<Position>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    /// Returns `false` if the position was already present
    pub fn insert(&mut self, pos: Position) -> bool {
        self.positions.insert(pos)
    }
}

impl FromIterator<Position> for MatchSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// Find every cell that belongs to a run of 3 or more equal colors
///
/// # Examples
///
/// ```
/// use tile_match_core::{find_matches, Board};
/// use tile_match_core::types::Position;
///
/// let board = Board::from_rows(&[
///     vec![2, 2, 2, 0],
///     vec![2, 1, 0, 1],
///     vec![2, 0, 1, 0],
/// ], 3).unwrap();
///
/// let matches = find_matches(&board);
/// // Row 0 run plus column 0 run, sharing (0, 0).
/// assert_eq!(matches.len(), 5);
/// assert!(matches.contains(Position::new(2, 0)));
/// ```
pub fn find_matches(board: &Board) -> MatchSet {
    let mut matches = MatchSet::new();

    for row in 0..board.height() {
        mark_runs(board.width(), |i| Position::new(row, i), board, &mut matches);
    }
    for col in 0..board.width() {
        mark_runs(board.height(), |i| Position::new(i, col), board, &mut matches);
    }

    matches
}

/// Scan one line of `len` cells, addressed through `at`, and record its runs
fn mark_runs(
    len: u8,
    at: impl Fn(u8) -> Position,
    board: &Board,
    matches: &mut MatchSet,
) {
    let color = |i: u8| board.get(at(i));

    let mut run_start = 0u8;
    for i in 1..=len {
        // `i == len` closes the trailing run.
        if i < len && color(i) == color(run_start) {
            continue;
        }
        if (i - run_start) as usize >= MIN_MATCH_LEN {
            for j in run_start..i {
                matches.insert(at(j));
            }
        }
        run_start = i;
    }
}
