//! Pointer → grid cell resolution
//!
//! The controller never looks at rendered geometry itself. Whoever draws the
//! board hands it a [`CellResolver`] that turns pointer coordinates into a
//! (possibly out-of-range) cell; bounds and adjacency are then checked by the
//! controller.

/// Signed cell address produced by a resolver
///
/// Coordinates left of or above the board come out negative, which is why this
/// is not a [`Position`](crate::types::Position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: i32,
    pub col: i32,
}

impl CellCoord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Maps pointer coordinates onto a board of `rows` x `cols` cells
pub trait CellResolver {
    /// `None` means the geometry is unusable right now (e.g. nothing drawn yet)
    fn resolve(&self, x: f64, y: f64, rows: u8, cols: u8) -> Option<CellCoord>;
}

/// Axis-aligned rectangle the board was rendered into
///
/// Cells split the rectangle evenly: `cell_w = width / cols`,
/// `cell_h = height / rows`.
///
/// # Examples
///
/// ```
/// use tile_match_engine::{BoardRegion, CellCoord, CellResolver};
///
/// let region = BoardRegion::new(100.0, 50.0, 600.0, 500.0);
/// // 6 columns of 100 units, 5 rows of 100 units.
/// assert_eq!(region.resolve(150.0, 60.0, 5, 6), Some(CellCoord::new(0, 0)));
/// assert_eq!(region.resolve(699.0, 549.0, 5, 6), Some(CellCoord::new(4, 5)));
/// assert_eq!(region.resolve(90.0, 60.0, 5, 6), Some(CellCoord::new(0, -1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardRegion {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoardRegion {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner of a cell, `None` for a degenerate region
    pub fn cell_origin(&self, row: u8, col: u8, rows: u8, cols: u8) -> Option<(f64, f64)> {
        let (cell_w, cell_h) = self.cell_size(rows, cols)?;
        Some((
            self.left + col as f64 * cell_w,
            self.top + row as f64 * cell_h,
        ))
    }

    fn cell_size(&self, rows: u8, cols: u8) -> Option<(f64, f64)> {
        if rows == 0 || cols == 0 {
            return None;
        }
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(self.width) || !usable(self.height) {
            return None;
        }
        Some((self.width / cols as f64, self.height / rows as f64))
    }
}

impl CellResolver for BoardRegion {
    fn resolve(&self, x: f64, y: f64, rows: u8, cols: u8) -> Option<CellCoord> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let (cell_w, cell_h) = self.cell_size(rows, cols)?;
        let col = ((x - self.left) / cell_w).floor();
        let row = ((y - self.top) / cell_h).floor();
        // Saturating float → int casts keep far-away pointers out of range.
        Some(CellCoord::new(row as i32, col as i32))
    }
}
