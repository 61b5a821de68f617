//! 着手助言と終盤探索の整合性テスト
//!
//! 全展開を避け、終盤近くの小さな部分木で助言の契約を検証する。

use std::cmp::Ordering;

use fusagi_core::{Board, Mask, Minimax, Outcome, Solver, Square};

/// 最小添字の合法手を選ぶ固定方針で `target` 手まで進める
fn playout_to(target: u32) -> (Board, Mask) {
    let mut board = Board::EMPTY;
    let mut mask = Mask::EMPTY;
    while board.ply() < target && !board.is_complete(mask) {
        if board.has_no_moves(mask) {
            board = board.pass();
            mask = mask.pass();
            continue;
        }
        let sq = Square::all().find(|&sq| mask.is_valid_move(sq)).unwrap();
        board = board.place(sq);
        mask = mask.place(sq);
    }
    (board, mask)
}

#[test]
fn test_suggest_returns_only_optimal_moves() {
    let (board, mask) = playout_to(12);
    assert!(!board.is_complete(mask));

    let mut solver = Solver::<Minimax>::with_table_bits(16);
    let suggested = solver.suggest(board, mask).unwrap();
    assert!(!suggested.is_empty());

    let mover = board.side_to_move();
    let mut best: Option<fusagi_core::Score> = None;
    for sq in Square::all() {
        if !mask.is_valid_move(sq) {
            continue;
        }
        let value = solver.evaluate(board.place(sq), mask.place(sq)).unwrap();
        best = Some(match best {
            None => value,
            Some(b) if Minimax::prefer(mover, value, b) == Ordering::Greater => value,
            Some(b) => b,
        });
    }
    let best = best.unwrap();

    // 助言された手はすべて最適値を達成し、最適値を達成する手は漏れなく入る
    for sq in Square::all() {
        if !mask.is_valid_move(sq) {
            assert!(!suggested.contains(sq));
            continue;
        }
        let value = solver.evaluate(board.place(sq), mask.place(sq)).unwrap();
        assert_eq!(suggested.contains(sq), value == best, "square {sq}");
    }
}

#[test]
fn test_suggest_empty_iff_no_moves() {
    // 終局まで進めると合法手がなく、助言は空になる
    let (board, mask) = playout_to(u32::MAX);
    assert!(board.is_complete(mask));
    assert!(board.has_no_moves(mask));

    let mut solver = Solver::<Minimax>::with_table_bits(16);
    let suggested = solver.suggest(board, mask).unwrap();
    assert!(suggested.is_empty());
}

#[test]
fn test_evaluate_is_memoized_and_stable() {
    let (board, mask) = playout_to(12);
    let mut solver = Solver::<Minimax>::with_table_bits(16);
    let first = solver.evaluate(board, mask).unwrap();
    let states = solver.states();
    // 再評価は純粋な読み取りで、値もテーブルも変化しない
    let second = solver.evaluate(board, mask).unwrap();
    assert_eq!(first, second);
    assert_eq!(solver.states(), states);
}

#[test]
fn test_symmetric_positions_share_evaluation() {
    let (board, mask) = playout_to(12);
    let mut solver = Solver::<Minimax>::with_table_bits(16);
    let value = solver.evaluate(board, mask).unwrap();

    let image = board.transpose().flip_vertical();
    let image_mask = image.derive_mask();
    let states = solver.states();
    let image_value = solver.evaluate(image, image_mask).unwrap();
    assert_eq!(value, image_value);
    // 対称像は同じ正準キーに当たるため新しい局面は増えない
    assert_eq!(solver.states(), states);
}
