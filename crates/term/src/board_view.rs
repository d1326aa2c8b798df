//! BoardView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It also owns the screen geometry of the
//! board, so the same view that drew a frame can turn mouse coordinates back
//! into cells through [`BoardView::board_region`] and [`BoardView::hit_test`].

use crate::engine::{BoardRegion, CellResolver, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, PointerOffset, Position};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const GLYPH_FG: Rgb = Rgb::new(20, 20, 28);
const PANEL_MIN_W: u16 = 12;

/// Screen placement of the framed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// Terminal renderer for the tile board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// Block width in terminal columns.
    cell_w: u16,
    /// Block height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 4x2 keeps blocks roughly square and gives the mouse a usable target.
        Self { cell_w: 4, cell_h: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let frame_w = snap.width as u16 * self.cell_w + 2;
        let frame_h = snap.height as u16 * self.cell_h + 2;
        Layout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Where the blocks of `snap` land on screen, in terminal cells.
    pub fn board_region(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardRegion {
        let layout = self.layout(snap, viewport);
        BoardRegion::new(
            (layout.start_x + 1) as f64,
            (layout.start_y + 1) as f64,
            (snap.width as u16 * self.cell_w) as f64,
            (snap.height as u16 * self.cell_h) as f64,
        )
    }

    /// Block under the pointer plus the pointer's offset inside that block.
    pub fn hit_test(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: f64,
        y: f64,
    ) -> Option<(Position, PointerOffset)> {
        let region = self.board_region(snap, viewport);
        let coord = region.resolve(x, y, snap.height, snap.width)?;
        let row = u8::try_from(coord.row).ok()?;
        let col = u8::try_from(coord.col).ok()?;
        let pos = Position::new(row, col);
        if !pos.in_bounds(snap.width, snap.height) {
            return None;
        }
        let (ox, oy) = region.cell_origin(row, col, snap.height, snap.width)?;
        Some((pos, PointerOffset::new(x - ox, y - oy)))
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the
    /// viewport and cleared first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap, viewport);
        if layout.frame_w > viewport.width || layout.frame_h > viewport.height {
            let msg = "terminal too small";
            let x = viewport.width.saturating_sub(msg.len() as u16) / 2;
            fb.put_str(x, viewport.height / 2, msg, CellStyle::default().bold());
            return;
        }

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, layout, border);

        for row in 0..snap.height {
            for col in 0..snap.width {
                let Some(color) = snap.cell(row, col) else {
                    continue;
                };
                let grabbed = snap.grabbed == Some(Position::new(row, col));
                self.draw_block(fb, layout, row, col, BlockColor::new(color), grabbed);
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        row: u8,
        col: u8,
        color: BlockColor,
        grabbed: bool,
    ) {
        let base = block_rgb(color);
        let bg = if grabbed { base.lighten(120) } else { base };
        let px = layout.start_x + 1 + col as u16 * self.cell_w;
        let py = layout.start_y + 1 + row as u16 * self.cell_h;

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::new(GLYPH_FG, bg));

        let glyph = color
            .name()
            .chars()
            .next()
            .map_or('?', |c| c.to_ascii_uppercase());
        let mut glyph_style = CellStyle::new(GLYPH_FG, bg);
        if grabbed {
            glyph_style = glyph_style.bold();
        }
        fb.put_char(
            px + self.cell_w / 2,
            py + (self.cell_h - 1) / 2,
            glyph,
            glyph_style,
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = value.dim();

        let state = if snap.resolving {
            "CASCADE"
        } else if snap.grabbed.is_some() {
            "DRAG"
        } else {
            "READY"
        };

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "STATE", label);
        y += 1;
        fb.put_str(panel_x, y, state, value);
        y += 2;

        fb.put_str(panel_x, y, "STEPS", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.cascade_steps, value);
        y += 2;

        fb.put_str(panel_x, y, "BOARD", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.width as u32, value);
        let x_at = panel_x + if snap.width >= 10 { 2 } else { 1 };
        fb.put_char(x_at, y, 'x', value);
        fb.put_u32(x_at + 1, y, snap.height as u32, value);
        y += 2;

        for line in ["drag  swap", "space skip", "r     new", "q     quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
    let Layout {
        start_x: x,
        start_y: y,
        frame_w: w,
        frame_h: h,
    } = layout;
    if w < 2 || h < 2 {
        return;
    }

    fb.fill_rect(x + 1, y + 1, w - 2, h - 2, ' ', CellStyle::new(style.fg, BOARD_BG));

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Screen color for each palette entry.
pub fn block_rgb(color: BlockColor) -> Rgb {
    match color.name() {
        "red" => Rgb::new(220, 70, 70),
        "blue" => Rgb::new(70, 110, 230),
        "green" => Rgb::new(80, 200, 100),
        "yellow" => Rgb::new(235, 210, 70),
        "purple" => Rgb::new(170, 90, 210),
        "orange" => Rgb::new(245, 150, 50),
        _ => Rgb::new(128, 128, 128),
    }
}
