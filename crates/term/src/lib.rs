//! Terminal front end for the tile board.
//!
//! A small game-oriented rendering layer: no widget toolkit, just a
//! framebuffer that a [`BoardView`] draws into and a [`TerminalRenderer`]
//! flushes to the terminal.
//!
//! - Drawing is pure and unit-tested against the framebuffer
//! - The view that draws the board also maps mouse positions back to cells
//! - Blocks are 4x2 terminal cells so they stay roughly square

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tile_match_engine as engine;
pub use tile_match_types as types;

pub use board_view::{block_rgb, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
