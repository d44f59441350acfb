//! Command-line interface for solving a single board

use crate::algorithm::placement::{Placement, sample_placement};
use crate::algorithm::solver::{DecompositionSolver, SolverConfig};
use crate::io::board_file::load_board;
use crate::io::configuration::{DEFAULT_BOARD_SIZE, DEFAULT_SEED};
use crate::io::error::Result;
use crate::io::progress::SolveProgress;
use crate::spatial::board::BitBoard;
use clap::{ArgAction, Parser};
use num_bigint::BigInt;
use num_traits::One;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rookpoly")]
#[command(
    author,
    version,
    about = "Compute the rook polynomial of a board with forbidden cells"
)]
/// Command-line arguments for the rook polynomial solver
pub struct Cli {
    /// Number of board rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_BOARD_SIZE, conflicts_with = "board")]
    pub height: usize,

    /// Number of board columns
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE, conflicts_with = "board")]
    pub width: usize,

    /// Forbidden cell as ROW,COL (0-based, repeatable)
    #[arg(
        short,
        long = "forbid",
        value_name = "ROW,COL",
        value_parser = parse_cell,
        conflicts_with = "board"
    )]
    pub forbidden: Vec<(usize, usize)>,

    /// Read the board from a text file instead
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Print the polynomial in math typesetting form
    #[arg(short, long)]
    pub latex: bool,

    /// Also draw a random placement of this many rooks
    #[arg(short, long, value_name = "ROOKS")]
    pub sample: Option<usize>,

    /// Random seed for reproducible placements
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Abort after this many solver steps
    #[arg(long, value_name = "STEPS")]
    pub max_steps: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter directive for the verbosity level
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Install the stderr log subscriber
    ///
    /// `RUST_LOG` takes precedence over the verbosity flags.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_filter()));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Build the board described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the board file cannot be loaded or the
    /// dimensions and forbidden cells are invalid
    pub fn build_board(&self) -> Result<BitBoard> {
        match &self.board {
            Some(path) => load_board(path),
            None => BitBoard::new(self.height, self.width, self.forbidden.iter().copied()),
        }
    }

    /// Solver settings derived from the arguments
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            max_steps: self.max_steps,
            ..SolverConfig::default()
        }
    }
}

/// Solves the board described by the CLI arguments and writes the results
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve the board and write the polynomial (and optional placement) to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the board is invalid, the step budget runs out,
    /// no placement can be drawn or writing to `out` fails
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let board = self.cli.build_board()?;
        info!(
            height = board.height(),
            width = board.width(),
            allowed = board.allowed_count(),
            "board ready"
        );

        let solver = DecompositionSolver::new(self.cli.solver_config());
        let progress = self
            .cli
            .should_show_progress()
            .then(|| SolveProgress::start(board.height(), board.width()));

        let start_time = Instant::now();
        let result = solver.solve_observed(&board, |stats| {
            if let Some(progress) = &progress {
                progress.update(stats);
            }
        });
        if let Some(progress) = &progress {
            progress.finish();
        }
        let outcome = result?;
        info!(
            elapsed = ?start_time.elapsed(),
            steps = outcome.stats.steps,
            cache_hits = outcome.stats.cache.hits,
            placements = %outcome.polynomial.evaluate(&BigInt::one()),
            "solve finished"
        );

        if self.cli.latex {
            writeln!(out, "{}", outcome.polynomial.format_latex())?;
        } else {
            writeln!(out, "{}", outcome.polynomial)?;
        }

        if let Some(rooks) = self.cli.sample {
            let mut rng = StdRng::seed_from_u64(self.cli.seed);
            let placement = sample_placement(&board, rooks, &mut rng)?;
            write!(out, "{}", render_placement(&board, &placement))?;
        }

        Ok(())
    }
}

/// Parse a `ROW,COL` cell argument
///
/// # Errors
///
/// Returns a message if the value is not two comma-separated integers
pub fn parse_cell(value: &str) -> std::result::Result<(usize, usize), String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but found '{value}'"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|error| format!("invalid row '{row}': {error}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|error| format!("invalid column '{col}': {error}"))?;
    Ok((row, col))
}

/// Draw the board with `R` for rooks, `.` for free and `#` for forbidden cells
fn render_placement(board: &BitBoard, placement: &Placement) -> String {
    let mut text = String::new();
    for row in 0..board.height() {
        for col in 0..board.width() {
            let glyph = if placement.contains(&(row, col)) {
                'R'
            } else if board.is_allowed(row, col) {
                '.'
            } else {
                '#'
            };
            text.push(glyph);
        }
        text.push('\n');
    }
    text
}
