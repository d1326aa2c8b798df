use serde::Serialize;

use crate::types::Position;

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub color_count: u8,
    /// Color indices, `board[row][col]`
    pub board: Vec<Vec<u8>>,
    pub grabbed: Option<Position>,
    pub resolving: bool,
    /// Gravity steps taken by the running (or last) cascade
    pub cascade_steps: u32,
    /// Increments every time the board changes
    pub board_id: u32,
}

impl GameSnapshot {
    pub fn cell(&self, row: u8, col: u8) -> Option<u8> {
        self.board
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    /// Input is only accepted while no cascade is running
    pub fn playable(&self) -> bool {
        !self.resolving
    }
}
