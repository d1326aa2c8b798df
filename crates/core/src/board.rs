//! Board module - the grid of colored blocks
//!
//! The board is `height` rows by `width` columns, stored as a flat row-major
//! buffer (`row * width + col`). Every cell always holds a color below the
//! board's `color_count`; boards are only built through constructors that check
//! this, so engine functions can treat a malformed board as a bug.

use derive_more::{Display, Error};

use crate::rng::ColorSource;
use crate::types::{BlockColor, GameConfig, Position};

/// Reasons a board cannot be built from explicit rows
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("board needs at least one row and one column")]
    Empty,
    #[display("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[display("board side {len} exceeds {max}")]
    TooLarge { len: usize, max: usize },
    #[display("color {color} at ({row}, {col}) is outside 0..{color_count}")]
    ColorOutOfRange {
        row: usize,
        col: usize,
        color: u8,
        color_count: u8,
    },
}

/// The game board - `width` columns x `height` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    color_count: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<BlockColor>,
}

impl Board {
    /// Fill a board of the configured shape with random colors
    ///
    /// Colors are drawn row by row, left to right. The result may already
    /// contain matches.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`GameConfig::validate`].
    pub fn random(config: &GameConfig, rng: &mut impl ColorSource) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid board config: {err}");
        }
        let cells = (0..config.cell_count())
            .map(|_| rng.next_color(config.color_count))
            .collect();
        Self {
            width: config.width,
            height: config.height,
            color_count: config.color_count,
            cells,
        }
    }

    /// Build a board from explicit rows of color indices
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_match_core::Board;
    /// use tile_match_core::types::Position;
    ///
    /// let board = Board::from_rows(&[vec![0, 1, 2], vec![3, 4, 5]], 6).unwrap();
    /// assert_eq!(board.width(), 3);
    /// assert_eq!(board.height(), 2);
    /// assert_eq!(board.get(Position::new(1, 2)).map(|c| c.index()), Some(5));
    ///
    /// assert!(Board::from_rows(&[vec![0, 9]], 6).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], color_count: u8) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(BoardError::Empty);
        }
        let max = u8::MAX as usize;
        if width > max || height > max {
            return Err(BoardError::TooLarge {
                len: width.max(height),
                max,
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(BoardError::RaggedRow {
                    row,
                    len: values.len(),
                    expected: width,
                });
            }
            for (col, &color) in values.iter().enumerate() {
                if color >= color_count {
                    return Err(BoardError::ColorOutOfRange {
                        row,
                        col,
                        color,
                        color_count,
                    });
                }
                cells.push(BlockColor::new(color));
            }
        }

        Ok(Self {
            width: width as u8,
            height: height as u8,
            color_count,
            cells,
        })
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !pos.in_bounds(self.width, self.height) {
            return None;
        }
        Some(pos.row as usize * self.width as usize + pos.col as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn color_count(&self) -> u8 {
        self.color_count
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.width, self.height)
    }

    /// Get cell at `pos`, `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<BlockColor> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Swap two cells, returning a new board
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swapped(&self, a: Position, b: Position) -> Board {
        let (Some(ia), Some(ib)) = (self.index(a), self.index(b)) else {
            panic!(
                "swap {:?} <-> {:?} outside {}x{} board",
                a, b, self.width, self.height
            );
        };
        let mut next = self.clone();
        next.cells.swap(ia, ib);
        next
    }

    /// Row `r` as a slice, `None` if out of bounds
    pub fn row(&self, r: u8) -> Option<&[BlockColor]> {
        if r >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = r as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[BlockColor]> {
        self.cells.chunks(self.width as usize)
    }

    /// Colors of column `c`, top to bottom
    pub fn column(&self, c: u8) -> Vec<BlockColor> {
        (0..self.height)
            .filter_map(|r| self.get(Position::new(r, c)))
            .collect()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[BlockColor] {
        &self.cells
    }

    /// Rows of raw color indices, for display and serialization
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.index()).collect())
            .collect()
    }

    /// Assemble a board from already-validated parts
    pub(crate) fn from_parts(width: u8, height: u8, color_count: u8, cells: Vec<BlockColor>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        debug_assert!(cells.iter().all(|c| c.index() < color_count));
        Self {
            width,
            height,
            color_count,
            cells,
        }
    }
}
