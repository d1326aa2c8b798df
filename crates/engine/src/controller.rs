//! Interaction controller - owns the board and turns gestures into swaps
//!
//! The controller is a small state machine:
//!
//! ```text
//!            grab                 release / cancel
//!   Idle ───────────▶ Dragging ─────────────────────▶ Resolving ──▶ Idle
//!    ▲                  │  ▲ move_to (swap)              │ tick
//!    │                  └──┘                             │
//!    └───────────── release with no matches ─────────────┘
//! ```
//!
//! While a cascade is resolving it holds the board exclusively: grabs are
//! rejected with [`GrabOutcome::Busy`] and moves/releases are ignored. Reads
//! ([`Controller::current_board`], [`Controller::snapshot`]) are always allowed.
//!
//! Cascade pacing is driven from outside through [`Controller::tick`], so the
//! controller never sleeps and tests can feed synthetic time.

use tracing::{debug, trace, warn};

use crate::core::{initialize_board, Board, Cascade, CascadeStep, ColorSource, SimpleRng};
use crate::resolver::{CellCoord, CellResolver};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameConfig, PointerOffset, Position};

/// In-progress drag gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    grabbed: Position,
    offset: PointerOffset,
    last_pointer: Option<(f64, f64)>,
    swaps: u32,
}

impl DragState {
    fn new(grabbed: Position, offset: PointerOffset) -> Self {
        Self {
            grabbed,
            offset,
            last_pointer: None,
            swaps: 0,
        }
    }

    /// Cell currently carried by the pointer
    pub fn grabbed(&self) -> Position {
        self.grabbed
    }

    /// Pointer offset inside the cell at grab time
    pub fn offset(&self) -> PointerOffset {
        self.offset
    }

    pub fn last_pointer(&self) -> Option<(f64, f64)> {
        self.last_pointer
    }

    /// Swaps performed during this gesture
    pub fn swaps(&self) -> u32 {
        self.swaps
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabOutcome {
    Started,
    OutOfBounds,
    AlreadyDragging,
    /// A cascade is still resolving
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Swapped { from: Position, to: Position },
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No matches; the board is already final
    Settled,
    /// First gravity step applied; keep calling `tick`
    Resolving,
    NotDragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to resolve
    Idle,
    /// Waiting out the step delay
    Pending,
    /// At least one gravity step was applied; more may follow
    Stepped,
    /// The cascade finished during this tick
    Settled,
}

#[derive(Debug, Clone)]
struct PacedCascade {
    cascade: Cascade,
    delay_left_ms: u32,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Dragging(DragState),
    Resolving(PacedCascade),
}

/// Owns the board, the drag gesture and the running cascade
#[derive(Debug, Clone)]
pub struct Controller<R: ColorSource = SimpleRng> {
    config: GameConfig,
    rng: R,
    board: Board,
    phase: Phase,
    /// Monotonic board revision (increments on every board replacement).
    board_id: u32,
    last_cascade_steps: u32,
}

impl Controller<SimpleRng> {
    /// Create a controller seeded from `config.seed` (1 if unset)
    ///
    /// If the dealt board already contains matches, the initial cascade starts
    /// immediately and is paced by [`tick`](Controller::tick) like any other.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Self {
        let rng = SimpleRng::new(config.seed.unwrap_or(1));
        Self::with_rng(config, rng)
    }
}

impl<R: ColorSource> Controller<R> {
    /// Like [`new`](Controller::new), drawing colors from `rng`
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`GameConfig::validate`].
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let board = initialize_board(&config, &mut rng);
        let mut controller = Self {
            config,
            rng,
            board,
            phase: Phase::Idle,
            board_id: 0,
            last_cascade_steps: 0,
        };
        controller.begin_cascade();
        controller
    }

    /// Start from an explicit board; no initial cascade is run
    ///
    /// # Panics
    ///
    /// Panics if the board's shape or palette differs from `config`.
    pub fn with_board(config: GameConfig, board: Board, rng: R) -> Self {
        assert_eq!(
            (board.width(), board.height(), board.color_count()),
            (config.width, config.height, config.color_count),
            "board shape does not match config"
        );
        Self {
            config,
            rng,
            board,
            phase: Phase::Idle,
            board_id: 0,
            last_cascade_steps: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Present board, including mid-cascade states
    pub fn current_board(&self) -> &Board {
        &self.board
    }

    pub fn board_id(&self) -> u32 {
        self.board_id
    }

    pub fn grabbed(&self) -> Option<Position> {
        self.drag_state().map(DragState::grabbed)
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        match &self.phase {
            Phase::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self.phase, Phase::Resolving(_))
    }

    /// Gravity steps of the running cascade, or of the last finished one
    pub fn cascade_steps(&self) -> u32 {
        match &self.phase {
            Phase::Resolving(paced) => paced.cascade.steps() as u32,
            _ => self.last_cascade_steps,
        }
    }

    /// Pick up the block at `pos`
    pub fn grab(&mut self, pos: Position, offset: PointerOffset) -> GrabOutcome {
        match self.phase {
            Phase::Resolving(_) => {
                debug!(?pos, "grab rejected: cascade in progress");
                return GrabOutcome::Busy;
            }
            Phase::Dragging(_) => return GrabOutcome::AlreadyDragging,
            Phase::Idle => {}
        }
        if !self.board.contains(pos) {
            trace!(?pos, "grab outside board");
            return GrabOutcome::OutOfBounds;
        }

        debug!(?pos, "grab");
        self.phase = Phase::Dragging(DragState::new(pos, offset));
        GrabOutcome::Started
    }

    /// Follow the pointer to `(x, y)`, swapping if it entered a neighbouring cell
    ///
    /// Without a resolver, or when the resolver cannot place the pointer, this
    /// does nothing.
    pub fn move_to(
        &mut self,
        x: f64,
        y: f64,
        resolver: Option<&dyn CellResolver>,
    ) -> MoveOutcome {
        let Phase::Dragging(drag) = &mut self.phase else {
            return MoveOutcome::Ignored;
        };
        let Some(resolver) = resolver else {
            trace!("move ignored: no board geometry");
            return MoveOutcome::Ignored;
        };
        drag.last_pointer = Some((x, y));

        match resolver.resolve(x, y, self.board.height(), self.board.width()) {
            Some(coord) => self.drag_to(coord),
            None => MoveOutcome::Ignored,
        }
    }

    /// Cell-level form of [`move_to`](Controller::move_to)
    ///
    /// The grabbed block swaps with `target` only if `target` is on the board,
    /// is not the grabbed cell, and touches it (diagonals included). The
    /// grabbed position then follows the block.
    pub fn drag_to(&mut self, target: CellCoord) -> MoveOutcome {
        let Phase::Dragging(drag) = &mut self.phase else {
            return MoveOutcome::Ignored;
        };

        let Some(to) = checked_position(target, self.board.width(), self.board.height()) else {
            trace!(?target, "move ignored: outside board");
            return MoveOutcome::Ignored;
        };
        let from = drag.grabbed;
        if !from.is_adjacent(to) {
            trace!(?from, ?to, "move ignored: not adjacent");
            return MoveOutcome::Ignored;
        }

        self.board = self.board.swapped(from, to);
        self.board_id = self.board_id.wrapping_add(1);
        drag.grabbed = to;
        drag.swaps += 1;
        debug!(?from, ?to, "swap");
        MoveOutcome::Swapped { from, to }
    }

    /// End the gesture and start resolving matches
    ///
    /// The drag state is dropped whether or not anything was swapped.
    pub fn release(&mut self) -> ReleaseOutcome {
        let Phase::Dragging(drag) = &self.phase else {
            return ReleaseOutcome::NotDragging;
        };
        debug!(grabbed = ?drag.grabbed, swaps = drag.swaps, "release");
        self.phase = Phase::Idle;
        self.begin_cascade()
    }

    /// Pointer cancellation behaves exactly like a release
    pub fn cancel(&mut self) -> ReleaseOutcome {
        self.release()
    }

    /// Advance the running cascade by `elapsed_ms` of wall time
    ///
    /// Each time the step delay runs out, the board is checked again and one
    /// more gravity step is applied if it still has matches. Leftover time
    /// carries into the next delay, so one long tick may apply several steps.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickOutcome {
        let Phase::Resolving(paced) = &mut self.phase else {
            return TickOutcome::Idle;
        };

        let mut budget = elapsed_ms;
        let mut stepped = false;
        loop {
            if paced.delay_left_ms > budget {
                paced.delay_left_ms -= budget;
                return if stepped {
                    TickOutcome::Stepped
                } else {
                    TickOutcome::Pending
                };
            }
            budget -= paced.delay_left_ms;
            paced.delay_left_ms = 0;

            match paced.cascade.advance(&self.board, &mut self.rng) {
                CascadeStep::Cleared { board, cleared } => {
                    self.board = board;
                    self.board_id = self.board_id.wrapping_add(1);
                    paced.delay_left_ms = self.config.step_delay_ms;
                    stepped = true;
                    debug!(step = paced.cascade.steps(), cleared, "cascade step");
                }
                CascadeStep::Settled => break,
                CascadeStep::Exhausted => {
                    warn!(
                        steps = paced.cascade.steps(),
                        "cascade hit step cap with matches left"
                    );
                    break;
                }
            }
        }

        self.finish_cascade();
        TickOutcome::Settled
    }

    /// Run whatever is left of the cascade right now, ignoring the step delay
    pub fn settle(&mut self) -> &Board {
        self.drain_cascade();
        &self.board
    }

    /// Deal a new board; any drag or cascade in progress is dropped
    pub fn restart(&mut self) {
        debug!("restart");
        self.board = initialize_board(&self.config, &mut self.rng);
        self.board_id = self.board_id.wrapping_add(1);
        self.phase = Phase::Idle;
        self.last_cascade_steps = 0;
        self.begin_cascade();
    }

    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Restart => self.restart(),
            GameAction::SkipCascade => {
                self.settle();
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            color_count: self.board.color_count(),
            board: self.board.to_rows(),
            grabbed: self.grabbed(),
            resolving: self.is_resolving(),
            cascade_steps: self.cascade_steps(),
            board_id: self.board_id,
        }
    }

    /// Check for matches now and apply the first gravity step if there are any
    fn begin_cascade(&mut self) -> ReleaseOutcome {
        let mut cascade = Cascade::new(self.config.max_cascade_steps);
        match cascade.advance(&self.board, &mut self.rng) {
            CascadeStep::Cleared { board, cleared } => {
                self.board = board;
                self.board_id = self.board_id.wrapping_add(1);
                debug!(step = 1, cleared, "cascade started");
                self.phase = Phase::Resolving(PacedCascade {
                    cascade,
                    delay_left_ms: self.config.step_delay_ms,
                });
                ReleaseOutcome::Resolving
            }
            CascadeStep::Settled | CascadeStep::Exhausted => {
                self.last_cascade_steps = 0;
                ReleaseOutcome::Settled
            }
        }
    }

    /// Run the cascade to the end with zero delay between steps
    fn drain_cascade(&mut self) {
        while self.is_resolving() {
            if let Phase::Resolving(paced) = &mut self.phase {
                paced.delay_left_ms = 0;
            }
            self.tick(0);
        }
    }

    fn finish_cascade(&mut self) {
        let Phase::Resolving(paced) = std::mem::replace(&mut self.phase, Phase::Idle) else {
            return;
        };
        let summary = paced.cascade.into_summary();
        debug!(
            steps = summary.steps(),
            cleared = summary.total_cleared(),
            "cascade settled"
        );
        self.last_cascade_steps = summary.steps() as u32;
    }
}

fn checked_position(coord: CellCoord, width: u8, height: u8) -> Option<Position> {
    let row = u8::try_from(coord.row).ok()?;
    let col = u8::try_from(coord.col).ok()?;
    let pos = Position::new(row, col);
    pos.in_bounds(width, height).then_some(pos)
}
