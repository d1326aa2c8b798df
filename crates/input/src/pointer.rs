//! Mouse events reduced to the three gestures the board understands.
//!
//! Terminal mice report whole cells. Each report is turned into the centre of
//! that cell so that resolving it against a board region never lands exactly on
//! a cell boundary.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Drag { x: f64, y: f64 },
    Up { x: f64, y: f64 },
}

impl PointerEvent {
    pub fn position(&self) -> (f64, f64) {
        match *self {
            PointerEvent::Down { x, y } | PointerEvent::Drag { x, y } | PointerEvent::Up { x, y } => {
                (x, y)
            }
        }
    }
}

/// Map a left-button mouse event; everything else (other buttons, plain
/// motion, scrolling) is `None`.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<PointerEvent> {
    let x = mouse.column as f64 + 0.5;
    let y = mouse.row as f64 + 0.5;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Drag { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up { x, y }),
        _ => None,
    }
}
