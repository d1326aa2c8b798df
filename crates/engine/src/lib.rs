//! Interaction layer on top of the board engine
//!
//! [`Controller`] owns the authoritative board and turns pointer gestures into
//! swaps. It is driven entirely by the caller:
//!
//! - pointer events come in through [`Controller::grab`], [`Controller::move_to`]
//!   and [`Controller::release`]
//! - time comes in through [`Controller::tick`], which paces cascade steps
//! - rendering reads [`Controller::snapshot`]
//!
//! Screen geometry stays outside the controller. A renderer supplies a
//! [`CellResolver`] (usually a [`BoardRegion`]) so pointer coordinates can be
//! mapped to cells.
//!
//! # Example
//!
//! ```
//! use tile_match_engine::{Controller, TickOutcome};
//! use tile_match_engine::types::{GameConfig, PointerOffset, Position};
//!
//! let mut game = Controller::new(GameConfig { seed: Some(7), ..GameConfig::default() });
//! game.settle();
//!
//! game.grab(Position::new(0, 0), PointerOffset::default());
//! game.release();
//! while game.tick(16) != TickOutcome::Idle {}
//! assert!(!game.is_resolving());
//! ```

pub mod controller;
pub mod resolver;
pub mod snapshot;

pub use tile_match_core as core;
pub use tile_match_types as types;

pub use controller::{
    Controller, DragState, GrabOutcome, MoveOutcome, ReleaseOutcome, TickOutcome,
};
pub use resolver::{BoardRegion, CellCoord, CellResolver};
pub use snapshot::GameSnapshot;
