//! Interactive play session.
//!
//! Drives the solver's advice from human input: positions are entered as
//! 1-25, 0 passes, -1 restarts. The solver explores lazily, so the first
//! advice for a fresh board pays the full exploration cost once.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use fusagi_core::{Board, Mask, Minimax, Solver};

use crate::render;

pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    let mut solver = Solver::<Minimax>::new();
    let mut board = Board::EMPTY;
    let mut mask = Mask::EMPTY;
    let mut first_prompt = true;

    loop {
        render::score_grid(&mut out, &mut solver, board, mask)?;
        render::board(&mut out, board, mask)?;

        if first_prompt {
            writeln!(out, "(Positions are 1-25, 0 passes, -1 restarts.)")?;
            first_prompt = false;
        }

        if board.is_complete(mask) {
            writeln!(out, "Game over! Score: {}", board.score())?;
        } else {
            let moves = solver.suggest(board, mask)?;
            if moves.is_empty() {
                writeln!(out, "Suggestion: 0 (pass)")?;
            } else {
                let plural = if moves.len() == 1 { "" } else { "s" };
                write!(out, "Suggestion{plural}:")?;
                for sq in moves {
                    write!(out, " {sq}")?;
                }
                writeln!(out)?;
            }
        }

        loop {
            write!(out, ">>> ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let input: i32 = match line?.trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    writeln!(out, "INVALID")?;
                    continue;
                }
            };
            match input {
                -1 => {
                    board = Board::EMPTY;
                    mask = Mask::EMPTY;
                    break;
                }
                0 => {
                    board = board.pass();
                    mask = mask.pass();
                    break;
                }
                1..=25 => {
                    let sq = fusagi_core::Square::new(input as usize - 1);
                    if mask.is_valid_move(sq) {
                        board = board.place(sq);
                        mask = mask.place(sq);
                        break;
                    }
                    writeln!(out, "INVALID")?;
                }
                _ => writeln!(out, "INVALID")?,
            }
        }
    }
}
