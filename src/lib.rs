//! Tile-match puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so integration tests,
//! benches and the binary can write `tile_match::{core,engine,input,term,types}`.

pub use tile_match_core as core;
pub use tile_match_engine as engine;
pub use tile_match_input as input;
pub use tile_match_term as term;
pub use tile_match_types as types;
