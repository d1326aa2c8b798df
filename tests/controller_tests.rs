//! Controller tests - drag gestures, swaps and paced cascades end to end

use tile_match::core::{find_matches, Board, SequenceColors, SimpleRng};
use tile_match::engine::{
    BoardRegion, CellCoord, Controller, GrabOutcome, MoveOutcome, ReleaseOutcome, TickOutcome,
};
use tile_match::types::{GameAction, GameConfig, PointerOffset, Position};

fn config() -> GameConfig {
    GameConfig {
        step_delay_ms: 300,
        ..GameConfig::default()
    }
}

/// 5x6 board with no runs anywhere; row 0 starts `[1, 1, 2, ...]`.
fn quiet_rows() -> Vec<Vec<u8>> {
    vec![
        vec![1, 1, 2, 3, 4, 5],
        vec![2, 3, 4, 5, 0, 1],
        vec![4, 5, 0, 1, 2, 3],
        vec![0, 1, 2, 3, 4, 5],
        vec![2, 3, 4, 5, 0, 1],
    ]
}

/// One swap of (2, 3) into (2, 2) turns row 2 into `[3, 3, 3, 0, 1, 2]`.
fn almost_rows() -> Vec<Vec<u8>> {
    vec![
        vec![0, 1, 2, 3, 4, 5],
        vec![2, 3, 4, 5, 0, 1],
        vec![3, 3, 0, 3, 1, 2],
        vec![0, 1, 2, 4, 4, 5],
        vec![2, 3, 4, 5, 0, 1],
    ]
}

fn with_rows<R: tile_match::core::ColorSource>(rows: Vec<Vec<u8>>, rng: R) -> Controller<R> {
    let board = Board::from_rows(&rows, 6).unwrap();
    Controller::with_board(config(), board, rng)
}

#[test]
fn swap_happens_before_any_cascade() {
    let mut game = with_rows(quiet_rows(), SimpleRng::new(1));

    assert_eq!(
        game.grab(Position::new(0, 2), PointerOffset::default()),
        GrabOutcome::Started
    );
    assert_eq!(
        game.drag_to(CellCoord::new(0, 1)),
        MoveOutcome::Swapped {
            from: Position::new(0, 2),
            to: Position::new(0, 1),
        }
    );
    assert_eq!(game.current_board().to_rows()[0], vec![1, 2, 1, 3, 4, 5]);
    assert!(!game.is_resolving());

    assert_eq!(game.release(), ReleaseOutcome::Settled);
    assert_eq!(game.current_board().to_rows()[0], vec![1, 2, 1, 3, 4, 5]);
}

#[test]
fn release_clears_run_with_one_gravity_step() {
    let mut game = with_rows(almost_rows(), SequenceColors::new(vec![5, 4, 5]));

    game.grab(Position::new(2, 3), PointerOffset::default());
    game.drag_to(CellCoord::new(2, 2));
    assert_eq!(game.current_board().to_rows()[2], vec![3, 3, 3, 0, 1, 2]);

    assert_eq!(game.release(), ReleaseOutcome::Resolving);
    assert_eq!(
        game.current_board().to_rows(),
        vec![
            vec![5, 4, 5, 3, 4, 5],
            vec![0, 1, 2, 5, 0, 1],
            vec![2, 3, 4, 0, 1, 2],
            vec![0, 1, 2, 4, 4, 5],
            vec![2, 3, 4, 5, 0, 1],
        ]
    );

    game.settle();
    assert!(!game.is_resolving());
    assert_eq!(game.cascade_steps(), 1);
    assert!(find_matches(game.current_board()).is_empty());
}

#[test]
fn release_with_random_refill_keeps_untouched_columns() {
    let mut game = with_rows(almost_rows(), SimpleRng::new(8080));
    game.grab(Position::new(2, 3), PointerOffset::default());
    game.drag_to(CellCoord::new(2, 2));
    game.release();

    let after_first_step = game.current_board().to_rows();
    for row in 1..3 {
        assert_eq!(after_first_step[row][..3], almost_rows()[row - 1][..3]);
    }
    for row in 3..5 {
        assert_eq!(after_first_step[row], almost_rows()[row]);
    }

    let settled = game.settle().clone();
    assert!(find_matches(&settled).is_empty());
}

#[test]
fn pointer_moves_resolve_through_board_region() {
    let mut game = with_rows(quiet_rows(), SimpleRng::new(1));
    // 6 columns x 5 rows of 10x10 units, offset by (100, 20).
    let region = BoardRegion::new(100.0, 20.0, 60.0, 50.0);

    game.grab(Position::new(0, 2), PointerOffset::new(3.0, 4.0));

    // Still inside the grabbed cell.
    assert_eq!(game.move_to(125.0, 25.0, Some(&region)), MoveOutcome::Ignored);
    // Into (0, 1).
    assert!(matches!(
        game.move_to(115.0, 25.0, Some(&region)),
        MoveOutcome::Swapped { .. }
    ));
    // Off the left edge of the board.
    assert_eq!(game.move_to(95.0, 25.0, Some(&region)), MoveOutcome::Ignored);
    // Two cells away.
    assert_eq!(game.move_to(135.0, 25.0, Some(&region)), MoveOutcome::Ignored);

    assert_eq!(game.grabbed(), Some(Position::new(0, 1)));
    assert_eq!(game.drag_state().unwrap().last_pointer(), Some((135.0, 25.0)));
    assert_eq!(game.current_board().to_rows()[0], vec![1, 2, 1, 3, 4, 5]);
}

#[test]
fn diagonal_neighbour_swaps() {
    let mut game = with_rows(quiet_rows(), SimpleRng::new(1));
    game.grab(Position::new(1, 1), PointerOffset::default());
    assert_eq!(
        game.drag_to(CellCoord::new(2, 2)),
        MoveOutcome::Swapped {
            from: Position::new(1, 1),
            to: Position::new(2, 2),
        }
    );
    let rows = game.current_board().to_rows();
    assert_eq!((rows[1][1], rows[2][2]), (0, 3));
}

#[test]
fn grab_is_refused_while_cascade_runs() {
    let mut game = with_rows(almost_rows(), SequenceColors::new(vec![5, 4, 5]));
    game.grab(Position::new(2, 3), PointerOffset::default());
    game.drag_to(CellCoord::new(2, 2));
    game.release();

    assert!(game.is_resolving());
    assert_eq!(
        game.grab(Position::new(4, 4), PointerOffset::default()),
        GrabOutcome::Busy
    );
    assert_eq!(game.drag_to(CellCoord::new(4, 5)), MoveOutcome::Ignored);
    assert_eq!(game.release(), ReleaseOutcome::NotDragging);

    while game.tick(16) != TickOutcome::Settled {}
    assert_eq!(
        game.grab(Position::new(4, 4), PointerOffset::default()),
        GrabOutcome::Started
    );
}

#[test]
fn long_tick_runs_several_steps() {
    // Clearing the vertical 5s drops the 2 into the bottom row, completing
    // a second run.
    let rows = vec![vec![2, 0, 1], vec![5, 1, 0], vec![5, 0, 1], vec![5, 2, 2]];
    let config = GameConfig {
        width: 3,
        height: 4,
        step_delay_ms: 300,
        ..GameConfig::default()
    };
    let board = Board::from_rows(&rows, 6).unwrap();
    let rng = SequenceColors::new(vec![3, 4, 3, 5, 2, 5]);
    let mut game = Controller::with_board(config, board, rng);

    // A grab and release with no movement still checks the board.
    game.grab(Position::new(0, 0), PointerOffset::default());
    assert_eq!(game.release(), ReleaseOutcome::Resolving);
    assert_eq!(game.cascade_steps(), 1);

    assert_eq!(game.tick(299), TickOutcome::Pending);
    assert_eq!(game.tick(301), TickOutcome::Settled);
    assert_eq!(game.cascade_steps(), 2);
    assert_eq!(
        game.current_board().to_rows(),
        vec![vec![5, 2, 5], vec![3, 0, 1], vec![4, 1, 0], vec![3, 0, 1]]
    );
}

#[test]
fn step_by_step_ticks_report_progress() {
    let rows = vec![vec![2, 0, 1], vec![5, 1, 0], vec![5, 0, 1], vec![5, 2, 2]];
    let config = GameConfig {
        width: 3,
        height: 4,
        step_delay_ms: 100,
        ..GameConfig::default()
    };
    let board = Board::from_rows(&rows, 6).unwrap();
    let mut game =
        Controller::with_board(config, board, SequenceColors::new(vec![3, 4, 3, 5, 2, 5]));
    game.grab(Position::new(3, 2), PointerOffset::default());
    game.release();

    assert_eq!(game.tick(100), TickOutcome::Stepped);
    assert_eq!(game.cascade_steps(), 2);
    assert_eq!(game.tick(50), TickOutcome::Pending);
    assert_eq!(game.tick(50), TickOutcome::Settled);
    assert_eq!(game.tick(50), TickOutcome::Idle);
}

#[test]
fn cascade_cap_stops_and_unlocks_input() {
    let config = GameConfig {
        width: 3,
        height: 2,
        color_count: 2,
        max_cascade_steps: 2,
        ..config()
    };
    let board = Board::from_rows(&[vec![0, 0, 0], vec![1, 0, 1]], 2).unwrap();
    let mut game = Controller::with_board(config, board, SequenceColors::new(vec![0]));
    game.grab(Position::new(1, 1), PointerOffset::default());
    game.release();

    game.settle();
    assert!(!game.is_resolving());
    assert_eq!(game.cascade_steps(), 2);
    assert!(!find_matches(game.current_board()).is_empty());
    assert_eq!(
        game.grab(Position::new(0, 0), PointerOffset::default()),
        GrabOutcome::Started
    );
}

#[test]
fn new_game_starts_without_visible_matches_once_settled() {
    for seed in [1, 7, 99, 31337] {
        let mut game = Controller::new(GameConfig {
            seed: Some(seed),
            ..config()
        });
        game.apply_action(GameAction::SkipCascade);
        assert!(find_matches(game.current_board()).is_empty());
        assert_eq!(game.current_board().width(), 6);
        assert_eq!(game.current_board().height(), 5);
    }
}

#[test]
fn same_seed_replays_same_game() {
    let cfg = GameConfig {
        seed: Some(555),
        ..config()
    };
    let mut a = Controller::new(cfg.clone());
    let mut b = Controller::new(cfg);
    a.settle();
    b.settle();
    assert_eq!(a.current_board(), b.current_board());

    for game in [&mut a, &mut b] {
        game.grab(Position::new(2, 2), PointerOffset::default());
        game.drag_to(CellCoord::new(2, 3));
        game.release();
        game.settle();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
