//! ANSI terminal rendering of boards and score grids.

use std::io::{self, Write};

use anyhow::Result;
use fusagi_core::{Board, Color, Mask, Minimax, Solver, Square};

const BLUE: &str = "\x1b[94m";
const RED: &str = "\x1b[91m";
const YELLOW: &str = "\x1b[93m";
const RESET: &str = "\x1b[0m";

/// Draw the board: stones as colored `X`, forbidden squares as colored `~`
/// (yellow when forbidden to both players), free squares as `.`.
pub fn board(w: &mut impl Write, board: Board, mask: Mask) -> io::Result<()> {
    for y in 0..Square::SIDE {
        for x in 0..Square::SIDE {
            let sq = Square::from_xy(x, y);
            let first = board.occupancy(Color::First) >> sq.index() & 1 == 1;
            let second = board.occupancy(Color::Second) >> sq.index() & 1 == 1;
            // 禁止マークはその升を「取った」側の色で塗る
            let claimed_by_first = mask.forbidden(Color::Second).contains(sq);
            let claimed_by_second = mask.forbidden(Color::First).contains(sq);
            if first {
                write!(w, "{BLUE}X{RESET}")?;
            } else if second {
                write!(w, "{RED}X{RESET}")?;
            } else if claimed_by_first && claimed_by_second {
                write!(w, "{YELLOW}~{RESET}")?;
            } else if claimed_by_first {
                write!(w, "{BLUE}~{RESET}")?;
            } else if claimed_by_second {
                write!(w, "{RED}~{RESET}")?;
            } else {
                write!(w, ".")?;
            }
        }
        writeln!(w)?;
    }
    writeln!(w)
}

/// Draw the perfect-play score of every legal move as a hex digit, colored
/// by the winning side; `-` marks illegal squares.
pub fn score_grid(
    w: &mut impl Write,
    solver: &mut Solver<Minimax>,
    board: Board,
    mask: Mask,
) -> Result<()> {
    for sq in Square::all() {
        if mask.is_valid_move(sq) {
            let score = solver.evaluate(board.place(sq), mask.place(sq))?.raw();
            if score > 0 {
                write!(w, "{BLUE}{score:x}{RESET}")?;
            } else if score < 0 {
                write!(w, "{RED}{:x}{RESET}", -score)?;
            } else {
                write!(w, "0")?;
            }
        } else {
            write!(w, "-")?;
        }
        if sq.x() == Square::SIDE - 1 {
            writeln!(w)?;
        }
    }
    writeln!(w)?;
    Ok(())
}
