// Command line front-end for the fusagi solver. Everything here consumes
// the core's read/derive interface; no search logic lives in this crate.

mod heuristic;
mod render;
mod session;

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fusagi_core::{Board, Minimax, Solver, Tally};

#[derive(Parser, Debug)]
#[command(author, version, about = "Exhaustive solver for the 5x5 blocking-stone game")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the full game tree and report perfect-play statistics
    Solve,
    /// Count every terminal playout (no symmetry reduction at the leaves)
    Tally,
    /// Play interactively with perfect-play advice
    Play,
    /// Measure how often the greedy heuristic diverges from perfect play
    Check,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .init();

    match args.command.unwrap_or(Command::Play) {
        Command::Solve => run_solve(),
        Command::Tally => run_tally(),
        Command::Play => session::run(),
        Command::Check => run_check(),
    }
}

fn run_solve() -> Result<()> {
    let started = Instant::now();
    let mut solver = Solver::<Minimax>::new();
    let score = solver.solve()?;
    log::info!("full exploration took {:.3}s", started.elapsed().as_secs_f64());

    let endings = solver.endings();
    println!("Perfect-play score: {score}");
    println!("Canonical states:   {}", solver.states());
    println!("Total endings:      {}", endings.total());
    println!("Player 1 wins:      {}", endings.first_wins);
    println!("Player 2 wins:      {}", endings.second_wins);
    println!("Ties:               {}", endings.ties);
    Ok(())
}

fn run_tally() -> Result<()> {
    let started = Instant::now();
    let mut solver = Solver::<Tally>::new();
    let tally = solver.solve()?;
    log::info!("full exploration took {:.3}s", started.elapsed().as_secs_f64());

    let total = tally.total();
    let percent = |n: u64| n as f64 * 100.0 / total as f64;
    println!("Playouts: {total}");
    println!("  P1  = {:>17} ({:.17} %)", tally.first_wins, percent(tally.first_wins));
    println!("  P2  = {:>17} ({:.17} %)", tally.second_wins, percent(tally.second_wins));
    println!("  TIE = {:>17} ({:.17} %)", tally.ties, percent(tally.ties));
    println!("Canonical states: {}", solver.states());
    Ok(())
}

/// Replay every stored canonical position and count those where the greedy
/// heuristic proposes a move outside the perfect set. The count is reported
/// for non-regression tracking; it is not expected to be zero.
fn run_check() -> Result<()> {
    let mut solver = Solver::<Minimax>::new();
    solver.solve()?;

    let positions: Vec<Board> = solver.entries().map(|(board, _)| board).collect();
    let mut checked = 0u64;
    let mut diverged = 0u64;
    for board in positions {
        let mask = board.derive_mask();
        if board.has_no_moves(mask) {
            continue;
        }
        checked += 1;
        let perfect = solver.suggest(board, mask)?;
        let greedy = heuristic::suggest_moves(board, mask);
        if !greedy.is_subset_of(perfect) {
            diverged += 1;
            log::debug!(
                "divergence at ply {}: perfect {:?} greedy {:?}",
                board.ply(),
                perfect.iter().map(|sq| sq.index() + 1).collect::<Vec<_>>(),
                greedy.iter().map(|sq| sq.index() + 1).collect::<Vec<_>>(),
            );
        }
    }
    println!("Positions checked:    {checked}");
    println!("Heuristic divergence: {diverged}");
    Ok(())
}
