//! Board engine tests - matching, gravity and cascades through the public API

use tile_match::core::{
    clear_and_refill, cleared_per_column, find_matches, initialize_board, resolve_cascade, Board,
    BoardError, SequenceColors, SimpleRng,
};
use tile_match::types::{GameConfig, Position, MAX_CASCADE_STEPS};

fn board(rows: &[&[u8]]) -> Board {
    Board::from_rows(rows, 6).unwrap()
}

#[test]
fn test_initialize_board_uses_config_shape() {
    let config = GameConfig {
        width: 8,
        height: 3,
        color_count: 4,
        ..GameConfig::default()
    };
    let b = initialize_board(&config, &mut SimpleRng::new(5));
    assert_eq!((b.width(), b.height(), b.color_count()), (8, 3, 4));
    assert!(b.cells().iter().all(|c| c.index() < 4));
}

#[test]
fn test_same_seed_same_board() {
    let config = GameConfig::default();
    let a = initialize_board(&config, &mut SimpleRng::new(2024));
    let b = initialize_board(&config, &mut SimpleRng::new(2024));
    assert_eq!(a, b);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert_eq!(Board::from_rows::<Vec<u8>>(&[], 6), Err(BoardError::Empty));
    assert!(matches!(
        Board::from_rows(&[vec![0, 1], vec![2]], 6),
        Err(BoardError::RaggedRow { row: 1, .. })
    ));
    assert!(matches!(
        Board::from_rows(&[vec![0, 6]], 6),
        Err(BoardError::ColorOutOfRange { col: 1, color: 6, .. })
    ));
}

#[test]
fn test_find_matches_on_reference_board() {
    // Five rows of six; only the middle row holds a run.
    let b = board(&[
        &[0, 1, 2, 3, 4, 5],
        &[2, 3, 4, 5, 0, 1],
        &[3, 3, 3, 0, 1, 2],
        &[0, 1, 2, 4, 4, 5],
        &[2, 3, 4, 5, 0, 1],
    ]);
    let matches = find_matches(&b);
    let found: Vec<Position> = matches.iter().collect();
    assert_eq!(
        found,
        vec![Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)]
    );
}

#[test]
fn test_runs_longer_than_three_and_crossing_runs() {
    let b = board(&[
        &[1, 0, 2, 3],
        &[1, 1, 1, 1],
        &[1, 4, 5, 2],
    ]);
    let matches = find_matches(&b);
    // Row 1 (4 cells) plus column 0 (3 cells) share (1, 0).
    assert_eq!(matches.len(), 6);
    assert!(matches.contains(Position::new(0, 0)));
    assert!(matches.contains(Position::new(1, 3)));
    assert!(!matches.contains(Position::new(0, 1)));
}

#[test]
fn test_matches_ending_on_the_edge_are_found() {
    let b = board(&[
        &[0, 1, 2, 2, 2],
        &[1, 0, 3, 4, 5],
        &[2, 3, 4, 5, 5],
        &[3, 4, 5, 0, 5],
    ]);
    let matches = find_matches(&b);
    assert_eq!(matches.len(), 6);
    assert!(matches.contains(Position::new(0, 4)));
    assert!(matches.contains(Position::new(3, 4)));
}

#[test]
fn test_clear_and_refill_shifts_columns_down() {
    let b = board(&[
        &[0, 1, 2, 3, 4, 5],
        &[2, 3, 4, 5, 0, 1],
        &[3, 3, 3, 0, 1, 2],
        &[0, 1, 2, 4, 4, 5],
        &[2, 3, 4, 5, 0, 1],
    ]);
    let matches = find_matches(&b);
    assert_eq!(cleared_per_column(&b, &matches), vec![1, 1, 1, 0, 0, 0]);

    let next = clear_and_refill(&b, &matches, &mut SequenceColors::new(vec![5, 4, 5]));
    assert_eq!(
        next.to_rows(),
        vec![
            vec![5, 4, 5, 3, 4, 5],
            vec![0, 1, 2, 5, 0, 1],
            vec![2, 3, 4, 0, 1, 2],
            vec![0, 1, 2, 4, 4, 5],
            vec![2, 3, 4, 5, 0, 1],
        ]
    );
    // The input board is untouched.
    assert_eq!(b.row(2).map(|r| r[0].index()), Some(3));
}

#[test]
fn test_vertical_clear_refills_whole_top_of_column() {
    let b = board(&[&[1, 0], &[4, 2], &[4, 3], &[4, 1]]);
    let matches = find_matches(&b);
    let mut rng = SequenceColors::new(vec![0, 2, 5]);
    let next = clear_and_refill(&b, &matches, &mut rng);
    // Survivor 1 lands at the bottom; refill goes bottom-up above it.
    assert_eq!(next.column(0).iter().map(|c| c.index()).collect::<Vec<_>>(), vec![5, 2, 0, 1]);
    assert_eq!(next.column(1), b.column(1));
    assert_eq!(rng.drawn(), 3);
}

#[test]
fn test_resolve_cascade_reaches_fixed_point() {
    let config = GameConfig::default();
    let mut rng = SimpleRng::new(404);
    for _ in 0..200 {
        let b = initialize_board(&config, &mut rng);
        let res = resolve_cascade(b, &mut rng, MAX_CASCADE_STEPS);
        assert!(find_matches(&res.board).is_empty());
        assert_eq!(res.summary.steps(), res.summary.cleared_per_step().len());
        assert!(res.summary.cleared_per_step().iter().all(|&n| n >= 3));
    }
}

#[test]
fn test_two_color_board_can_exhaust_the_cap() {
    let b = Board::from_rows(&[vec![0, 0, 0], vec![1, 1, 1]], 2).unwrap();
    let res = resolve_cascade(b, &mut SequenceColors::new(vec![1]), 3);
    assert!(res.summary.exhausted());
    assert_eq!(res.summary.steps(), 3);
    // The board is returned as it stood when the cap hit.
    assert!(!find_matches(&res.board).is_empty());
}
