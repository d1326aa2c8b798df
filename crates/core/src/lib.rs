//! Board engine - pure, deterministic, and testable
//!
//! This crate contains the rules of the board itself. It has **zero
//! dependencies** on UI, timing, or I/O:
//!
//! - **Deterministic**: every random block comes from a caller-supplied
//!   [`ColorSource`], so a seed replays a game exactly
//! - **Value semantics**: transforms take a board and return a new one; nothing
//!   is mutated behind the caller's back
//! - **Total**: every function is defined for every board the public
//!   constructors can build
//!
//! # Module Structure
//!
//! - [`board`]: flat row-major grid of [`BlockColor`](types::BlockColor) cells
//! - [`matching`]: run detection producing a deduplicated [`MatchSet`]
//! - [`gravity`]: the single clear → drop → refill step
//! - [`cascade`]: repeat gravity steps until the board is stable
//! - [`rng`]: seeded LCG and scripted color sources
//!
//! # Example
//!
//! ```
//! use tile_match_core::{find_matches, initialize_board, resolve_cascade, SimpleRng};
//! use tile_match_core::types::GameConfig;
//!
//! let config = GameConfig::default();
//! let mut rng = SimpleRng::new(12345);
//!
//! let board = initialize_board(&config, &mut rng);
//! let settled = resolve_cascade(board, &mut rng, config.max_cascade_steps).board;
//! assert!(find_matches(&settled).is_empty());
//! ```

pub mod board;
pub mod cascade;
pub mod gravity;
pub mod matching;
pub mod rng;

pub use tile_match_types as types;

pub use board::{Board, BoardError};
pub use cascade::{resolve_cascade, Cascade, CascadeStep, CascadeSummary, Resolution};
pub use gravity::{clear_and_refill, cleared_per_column};
pub use matching::{find_matches, MatchSet};
pub use rng::{ColorSource, SequenceColors, SimpleRng};

use types::GameConfig;

/// Deal a fresh board of the configured shape
///
/// Every cell gets an independent uniform color. No attempt is made to avoid
/// initial matches; a cascade resolves them afterwards.
pub fn initialize_board(config: &GameConfig, rng: &mut impl ColorSource) -> Board {
    Board::random(config, rng)
}
