//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and left-button mouse events into
//! [`PointerEvent`] gestures. Turning pointer coordinates into board cells is
//! left to whoever knows where the board was drawn.

pub mod map;
pub mod pointer;

pub use tile_match_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{handle_mouse_event, PointerEvent};
