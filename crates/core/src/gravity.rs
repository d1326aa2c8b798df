//! Gravity step: clear matched cells, drop survivors, refill from the top
//!
//! Removal is tracked with [`Slot::Cleared`] on a private working grid. The
//! returned [`Board`] only ever holds real colors, so a half-cleared grid never
//! leaves this module.

use crate::board::Board;
use crate::matching::MatchSet;
use crate::rng::ColorSource;
use crate::types::{BlockColor, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Occupied(BlockColor),
    Cleared,
}

/// Remove `matches`, let each column fall, and fill the gaps with new blocks
///
/// Columns are handled independently. Surviving blocks keep their top-to-bottom
/// order and settle at the bottom of their column. New colors are drawn from
/// `rng` column by column, left to right, filling each column's gap from the
/// lowest vacated cell upward.
///
/// An empty match set returns a copy of `board` without drawing any colors.
///
/// # Panics
///
/// Panics if a matched position lies outside the board.
///
/// # Examples
///
/// ```
/// use tile_match_core::{clear_and_refill, find_matches, Board, SequenceColors};
///
/// let board = Board::from_rows(&[
///     vec![4],
///     vec![1],
///     vec![2],
///     vec![2],
///     vec![2],
/// ], 6).unwrap();
///
/// let matches = find_matches(&board);
/// let next = clear_and_refill(&board, &matches, &mut SequenceColors::new(vec![5, 0, 3]));
/// assert_eq!(next.to_rows(), vec![vec![3], vec![0], vec![5], vec![4], vec![1]]);
/// ```
pub fn clear_and_refill(board: &Board, matches: &MatchSet, rng: &mut impl ColorSource) -> Board {
    if matches.is_empty() {
        return board.clone();
    }

    let width = board.width() as usize;
    let height = board.height() as usize;

    let mut slots: Vec<Slot> = board.cells().iter().map(|&c| Slot::Occupied(c)).collect();
    for pos in matches.iter() {
        assert!(
            board.contains(pos),
            "match at {:?} outside {}x{} board",
            pos,
            board.width(),
            board.height()
        );
        slots[pos.row as usize * width + pos.col as usize] = Slot::Cleared;
    }

    let mut cells = vec![BlockColor::default(); width * height];
    for col in 0..width {
        // Walk bottom-up, writing survivors to the lowest free row.
        let mut write = height;
        for read in (0..height).rev() {
            if let Slot::Occupied(color) = slots[read * width + col] {
                write -= 1;
                cells[write * width + col] = color;
            }
        }
        for row in (0..write).rev() {
            cells[row * width + col] = rng.next_color(board.color_count());
        }
    }

    Board::from_parts(board.width(), board.height(), board.color_count(), cells)
}

/// Number of cells a gravity step would remove in each column
pub fn cleared_per_column(board: &Board, matches: &MatchSet) -> Vec<usize> {
    let mut counts = vec![0; board.width() as usize];
    for Position { col, .. } in matches.iter() {
        if let Some(n) = counts.get_mut(col as usize) {
            *n += 1;
        }
    }
    counts
}
