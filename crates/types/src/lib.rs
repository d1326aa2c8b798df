//! Core types module - shared data structures and constants
//!
//! Everything here is plain data: board dimensions, the block palette, grid
//! positions, configuration and the small set of game-level actions. The board
//! engine, the interaction controller and the terminal front end all speak in
//! these types.
//!
//! # Board Dimensions
//!
//! Default playfield is 6 columns by 5 rows. Rows are indexed top to bottom,
//! columns left to right, so `(0, 0)` is the top-left cell.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Front-end loop interval (~60 FPS) |
//! | `DEFAULT_STEP_DELAY_MS` | 300 | Pause between cascade steps |
//!
//! # Examples
//!
//! ```
//! use tile_match_types::{BlockColor, Position, DEFAULT_COLOR_COUNT, DEFAULT_WIDTH};
//!
//! let red = BlockColor::new(0);
//! assert_eq!(red.name(), "red");
//!
//! let a = Position::new(1, 1);
//! assert!(a.is_adjacent(Position::new(2, 2)));
//! assert!(!a.is_adjacent(Position::new(3, 1)));
//!
//! assert_eq!(DEFAULT_WIDTH, 6);
//! assert_eq!(DEFAULT_COLOR_COUNT, 6);
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig};

use serde::{Deserialize, Serialize};

/// Default board width in cells (6 columns)
pub const DEFAULT_WIDTH: u8 = 6;

/// Default board height in cells (5 rows)
pub const DEFAULT_HEIGHT: u8 = 5;

/// Largest accepted board side, in cells
pub const MAX_BOARD_SIDE: u8 = 32;

/// Default number of distinct block colors
pub const DEFAULT_COLOR_COUNT: u8 = 6;

/// Minimum run length that counts as a match
pub const MIN_MATCH_LEN: usize = 3;

/// Pause between two cascade steps (300ms)
pub const DEFAULT_STEP_DELAY_MS: u32 = 300;

/// Upper bound on gravity steps in a single cascade
pub const MAX_CASCADE_STEPS: usize = 64;

/// Front-end loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Symbolic names of the block palette, indexed by [`BlockColor`]
pub const PALETTE: [&str; 6] = ["red", "blue", "green", "yellow", "purple", "orange"];

/// Index into [`PALETTE`]
///
/// A board only ever stores colors below its configured color count. There is
/// no "empty" color: removal is tracked separately inside the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockColor(u8);

impl BlockColor {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Palette name, or `"?"` for an index past the palette
    pub fn name(self) -> &'static str {
        PALETTE.get(self.0 as usize).copied().unwrap_or("?")
    }
}

impl From<BlockColor> for u8 {
    fn from(value: BlockColor) -> Self {
        value.0
    }
}

/// A grid cell address
///
/// Ordering is row-major, which is also the iteration order of match sets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check whether the position lies on a `width` x `height` board
    pub fn in_bounds(self, width: u8, height: u8) -> bool {
        self.row < height && self.col < width
    }

    /// Chebyshev distance (king moves on a chessboard)
    pub fn distance(self, other: Position) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Check whether `other` is one of the 8 neighbours (diagonals included)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_match_types::Position;
    ///
    /// let p = Position::new(2, 3);
    /// assert!(p.is_adjacent(Position::new(1, 4)));
    /// assert!(!p.is_adjacent(p));
    /// assert!(!p.is_adjacent(Position::new(2, 5)));
    /// ```
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.distance(other) <= 1
    }
}

/// Pointer offset inside the grabbed cell, in the renderer's units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Game-level actions that are not part of a drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Throw away the board and deal a new one
    Restart,
    /// Finish a running cascade without waiting for the step delay
    SkipCascade,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_match_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("skipCascade"), Some(GameAction::SkipCascade));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "restart" => Some(GameAction::Restart),
            "skipcascade" => Some(GameAction::SkipCascade),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Restart => "restart",
            GameAction::SkipCascade => "skipCascade",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_board() {
        assert_eq!(DEFAULT_WIDTH, 6);
        assert_eq!(DEFAULT_HEIGHT, 5);
        assert_eq!(DEFAULT_COLOR_COUNT as usize, PALETTE.len());
        assert_eq!(DEFAULT_STEP_DELAY_MS, 300);
        assert_eq!(MIN_MATCH_LEN, 3);
    }

    #[test]
    fn adjacency_includes_diagonals() {
        let center = Position::new(2, 2);
        let mut neighbours = 0;
        for row in 0..5u8 {
            for col in 0..5u8 {
                if center.is_adjacent(Position::new(row, col)) {
                    neighbours += 1;
                }
            }
        }
        assert_eq!(neighbours, 8);
    }

    #[test]
    fn adjacency_at_corner() {
        let corner = Position::new(0, 0);
        assert!(corner.is_adjacent(Position::new(1, 1)));
        assert!(corner.is_adjacent(Position::new(0, 1)));
        assert!(!corner.is_adjacent(Position::new(0, 2)));
        assert!(!corner.is_adjacent(Position::new(2, 0)));
    }

    #[test]
    fn bounds_check() {
        assert!(Position::new(4, 5).in_bounds(6, 5));
        assert!(!Position::new(5, 0).in_bounds(6, 5));
        assert!(!Position::new(0, 6).in_bounds(6, 5));
    }

    #[test]
    fn palette_names() {
        assert_eq!(BlockColor::new(0).name(), "red");
        assert_eq!(BlockColor::new(5).name(), "orange");
        assert_eq!(BlockColor::new(9).name(), "?");
    }

    #[test]
    fn action_roundtrip_names() {
        for action in [GameAction::Restart, GameAction::SkipCascade] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
