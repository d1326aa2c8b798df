//! Cascade resolution
//!
//! A cascade repeats detect → clear → refill until the board has no matches.
//! [`Cascade`] exposes this as a step machine with no notion of time: the caller
//! decides when to take the next step, which is how the interaction controller
//! paces steps for display. [`resolve_cascade`] runs the machine to completion
//! in one go.
//!
//! Refills can create fresh matches, so termination is only probabilistic.
//! Every cascade is capped at a fixed number of gravity steps.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::gravity::clear_and_refill;
use crate::matching::find_matches;
use crate::rng::ColorSource;
use crate::types::MAX_CASCADE_STEPS;

/// Outcome of one [`Cascade::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeStep {
    /// Matches were found and one gravity step produced `board`
    Cleared { board: Board, cleared: usize },
    /// The board has no matches; the cascade is over
    Settled,
    /// The step cap was reached while matches remained
    Exhausted,
}

/// Cells cleared by each gravity step of a cascade, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    cleared: ArrayVec<u16, MAX_CASCADE_STEPS>,
    exhausted: bool,
}

impl CascadeSummary {
    /// Number of gravity steps taken
    pub fn steps(&self) -> usize {
        self.cleared.len()
    }

    pub fn cleared_per_step(&self) -> &[u16] {
        &self.cleared
    }

    pub fn total_cleared(&self) -> u32 {
        self.cleared.iter().map(|&n| n as u32).sum()
    }

    /// True if the cascade stopped at the step cap with matches left
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Step machine for one cascade
#[derive(Debug, Clone)]
pub struct Cascade {
    max_steps: usize,
    summary: CascadeSummary,
    done: bool,
}

impl Cascade {
    /// `max_steps` is clamped to `1..=MAX_CASCADE_STEPS`
    pub fn new(max_steps: usize) -> Self {
        Self {
            max_steps: max_steps.clamp(1, MAX_CASCADE_STEPS),
            summary: CascadeSummary::default(),
            done: false,
        }
    }

    /// Check `board` and, if it has matches, apply one gravity step
    ///
    /// Once the cascade has settled or been exhausted, further calls keep
    /// returning the same terminal step without touching `rng`.
    pub fn advance(&mut self, board: &Board, rng: &mut impl ColorSource) -> CascadeStep {
        if self.done {
            return if self.summary.exhausted {
                CascadeStep::Exhausted
            } else {
                CascadeStep::Settled
            };
        }

        let matches = find_matches(board);
        if matches.is_empty() {
            self.done = true;
            return CascadeStep::Settled;
        }
        if self.summary.steps() >= self.max_steps {
            self.done = true;
            self.summary.exhausted = true;
            return CascadeStep::Exhausted;
        }

        let next = clear_and_refill(board, &matches, rng);
        let cleared = matches.len();
        self.summary
            .cleared
            .push(cleared.min(u16::MAX as usize) as u16);
        CascadeStep::Cleared {
            board: next,
            cleared,
        }
    }

    pub fn steps(&self) -> usize {
        self.summary.steps()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn summary(&self) -> &CascadeSummary {
        &self.summary
    }

    pub fn into_summary(self) -> CascadeSummary {
        self.summary
    }
}

/// Final board of a cascade plus what happened along the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub board: Board,
    pub summary: CascadeSummary,
}

/// Run a cascade to its fixed point without any pacing
///
/// # Examples
///
/// ```
/// use tile_match_core::{find_matches, resolve_cascade, Board, SimpleRng};
///
/// let board = Board::from_rows(&[
///     vec![0, 1, 2, 3, 4, 5],
///     vec![3, 3, 3, 0, 1, 2],
///     vec![1, 2, 0, 4, 5, 3],
/// ], 6).unwrap();
///
/// let resolution = resolve_cascade(board, &mut SimpleRng::new(7), 64);
/// assert!(resolution.summary.steps() >= 1);
/// assert!(find_matches(&resolution.board).is_empty());
/// ```
pub fn resolve_cascade(board: Board, rng: &mut impl ColorSource, max_steps: usize) -> Resolution {
    let mut cascade = Cascade::new(max_steps);
    let mut board = board;
    loop {
        match cascade.advance(&board, rng) {
            CascadeStep::Cleared { board: next, .. } => board = next,
            CascadeStep::Settled | CascadeStep::Exhausted => break,
        }
    }
    Resolution {
        board,
        summary: cascade.into_summary(),
    }
}
