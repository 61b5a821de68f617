//! Greedy space-claiming heuristic.
//!
//! Picks the moves that forbid the most new squares to the opponent. This is
//! not actually a good strategy; it exists only to measure how often a cheap
//! picker diverges from the solver's perfect play (`fusagi check`).

use fusagi_core::{Board, Mask, MoveSet, Square};

/// Return the legal moves that claim the most opponent squares.
pub fn suggest_moves(board: Board, mask: Mask) -> MoveSet {
    let opponent = board.side_to_move().opponent();
    let before = mask.forbidden(opponent).len();

    let mut best = 0usize;
    let mut moves = MoveSet::EMPTY;
    for sq in Square::all() {
        if !mask.is_valid_move(sq) {
            continue;
        }
        let claimed = mask.place(sq).forbidden(opponent).len() - before;
        if claimed > best {
            best = claimed;
            moves = MoveSet::EMPTY;
            moves.insert(sq);
        } else if claimed == best {
            moves.insert(sq);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_prefers_interior_squares() {
        // 盤の内側の升だけが相手の5升を塞ぐ。初手では中央が除かれる。
        let moves = suggest_moves(Board::EMPTY, Mask::EMPTY);
        assert_eq!(moves.len(), 8);
        for sq in moves {
            assert!(sq.x() >= 1 && sq.x() <= 3, "square {sq}");
            assert!(sq.y() >= 1 && sq.y() <= 3, "square {sq}");
            assert_ne!(sq, Square::CENTER);
        }
    }

    #[test]
    fn test_returns_empty_without_legal_moves() {
        // 最小添字方針で終局まで進めると合法手が尽きる
        let mut board = Board::EMPTY;
        let mut mask = Mask::EMPTY;
        while !board.is_complete(mask) {
            if board.has_no_moves(mask) {
                board = board.pass();
                mask = mask.pass();
                continue;
            }
            let sq = Square::all().find(|&sq| mask.is_valid_move(sq)).unwrap();
            board = board.place(sq);
            mask = mask.place(sq);
        }
        assert!(suggest_moves(board, mask).is_empty());
    }

    #[test]
    fn test_all_suggestions_are_legal() {
        let board = Board::EMPTY.place(Square::new(6));
        let mask = board.derive_mask();
        let moves = suggest_moves(board, mask);
        assert!(!moves.is_empty());
        for sq in moves {
            assert!(mask.is_valid_move(sq));
        }
    }
}
