//! Deletion-expansion solver for rook polynomials
//!
//! For a fixed allowed cell `c`, every placement either avoids `c` or puts a
//! rook on it, which removes the rest of its row and column:
//!
//! ```text
//! R(B) = R(B without c) + x * R(B without row(c) and col(c))
//! ```
//!
//! The recursion is driven by an explicit work stack so board size is not
//! limited by the native call stack. Each frame finishes by leaving its
//! polynomial in a single result register. Empty boards, single cells and solid
//! rectangles are answered directly; everything else is memoized in a cache
//! that lives for one top-level solve.

use std::convert::Infallible;

use num_traits::One;
use tracing::{debug, trace};

use crate::algorithm::bits::{find_msb, is_single_bit};
use crate::algorithm::cache::{CacheStats, PolynomialCache};
use crate::algorithm::rectangle::find_rectangle;
use crate::io::configuration::PROGRESS_REPORT_INTERVAL;
use crate::io::error::{Result, RookError};
use crate::math::combinatorics::rectangle_rook_polynomial;
use crate::math::polynomial::Polynomial;
use crate::spatial::board::{BitBoard, BoardKey};

/// Runtime settings for a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of work-stack steps before giving up, unlimited if `None`
    pub max_steps: Option<usize>,
    /// Steps between observer callbacks
    pub report_interval: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            report_interval: PROGRESS_REPORT_INTERVAL,
        }
    }
}

/// Counters collected during one solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Work-stack frames processed
    pub steps: usize,
    /// Boards answered by the rectangle closed form
    pub rectangle_shortcuts: usize,
    /// Cache hits and misses
    pub cache: CacheStats,
    /// Deepest work stack observed
    pub max_stack_depth: usize,
}

/// Result of a solve together with its statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Rook polynomial of the board
    pub polynomial: Polynomial,
    /// Counters collected while solving
    pub stats: SolveStats,
}

/// Memoized deletion-expansion solver
#[derive(Debug, Clone, Default)]
pub struct DecompositionSolver {
    config: SolverConfig,
}

impl DecompositionSolver {
    /// Create a solver with the given settings
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Settings this solver runs with
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compute the rook polynomial of a board
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhausted` if the configured step budget runs out
    pub fn solve(&self, board: &BitBoard) -> Result<SolveOutcome> {
        self.solve_observed(board, |_| {})
    }

    /// Compute the rook polynomial, reporting progress to `observer`
    ///
    /// The observer receives the running statistics every
    /// `report_interval` steps.
    ///
    /// # Errors
    ///
    /// Returns `ResourceExhausted` if the configured step budget runs out
    pub fn solve_observed<F>(&self, board: &BitBoard, observer: F) -> Result<SolveOutcome>
    where
        F: FnMut(&SolveStats),
    {
        let interval = self.config.report_interval;
        match self.config.max_steps {
            Some(limit) => run(board, &mut StepLimit { limit }, interval, observer),
            None => {
                let Ok(outcome) = run(board, &mut Unlimited, interval, observer);
                Ok(outcome)
            }
        }
    }
}

/// Compute the rook polynomial of a board without a step budget
pub fn solve(board: &BitBoard) -> Polynomial {
    let Ok(outcome) = run(board, &mut Unlimited, PROGRESS_REPORT_INTERVAL, |_| {});
    outcome.polynomial
}

/// Admission check applied to every work-stack step
trait StepBudget {
    type Error;

    fn charge(&mut self, steps: usize) -> std::result::Result<(), Self::Error>;
}

struct Unlimited;

impl StepBudget for Unlimited {
    type Error = Infallible;

    fn charge(&mut self, _steps: usize) -> std::result::Result<(), Infallible> {
        Ok(())
    }
}

struct StepLimit {
    limit: usize,
}

impl StepBudget for StepLimit {
    type Error = RookError;

    fn charge(&mut self, steps: usize) -> Result<()> {
        if steps > self.limit {
            return Err(RookError::ResourceExhausted {
                steps,
                limit: self.limit,
            });
        }
        Ok(())
    }
}

enum Frame {
    /// Solve a board into the result register
    Enter(BitBoard),
    /// The register holds the exclude result; the include board is next
    Include { key: BoardKey, include: BitBoard },
    /// The register holds the include result; combine, cache and store
    Combine { key: BoardKey, exclude: Polynomial },
}

fn run<B, F>(
    board: &BitBoard,
    budget: &mut B,
    report_interval: usize,
    mut observer: F,
) -> std::result::Result<SolveOutcome, B::Error>
where
    B: StepBudget,
    F: FnMut(&SolveStats),
{
    debug!(
        height = board.height(),
        width = board.width(),
        allowed = board.allowed_count(),
        "solving rook polynomial"
    );

    let mut cache = PolynomialCache::new();
    let mut stats = SolveStats::default();
    let mut frames = vec![Frame::Enter(board.clone())];
    // Polynomial of the most recently finished board
    let mut result = Polynomial::one();

    while let Some(frame) = frames.pop() {
        stats.steps += 1;
        budget.charge(stats.steps)?;
        if report_interval > 0 && stats.steps % report_interval == 0 {
            stats.cache = cache.stats;
            observer(&stats);
        }

        match frame {
            Frame::Enter(current) => match resolve_directly(&current, &mut cache, &mut stats) {
                Some(polynomial) => result = polynomial,
                None => {
                    let (exclude, include) = split_on_canonical_cell(&current);
                    frames.push(Frame::Include {
                        key: current.key(),
                        include,
                    });
                    frames.push(Frame::Enter(exclude));
                }
            },
            Frame::Include { key, include } => {
                let exclude = std::mem::take(&mut result);
                frames.push(Frame::Combine { key, exclude });
                frames.push(Frame::Enter(include));
            }
            Frame::Combine { key, exclude } => {
                result = &exclude + &result.shifted(1);
                cache.insert(key, result.clone());
            }
        }
        stats.max_stack_depth = stats.max_stack_depth.max(frames.len());
    }

    stats.cache = cache.stats;
    debug!(
        steps = stats.steps,
        cache_hits = stats.cache.hits,
        cache_entries = cache.len(),
        rectangle_shortcuts = stats.rectangle_shortcuts,
        degree = ?result.degree(),
        "solved rook polynomial"
    );

    Ok(SolveOutcome {
        polynomial: result,
        stats,
    })
}

/// Answer a board from the cache, a base case or the rectangle closed form
fn resolve_directly(
    board: &BitBoard,
    cache: &mut PolynomialCache,
    stats: &mut SolveStats,
) -> Option<Polynomial> {
    if let Some(cached) = cache.lookup(board.rows()) {
        trace!("cache hit");
        return Some(cached.clone());
    }

    if board.is_empty() {
        return Some(Polynomial::one());
    }

    if is_single_cell(board) {
        return Some(Polynomial::from(vec![1, 1]));
    }

    let rectangle = find_rectangle(board)?;
    trace!(
        width = rectangle.width,
        height = rectangle.height,
        "rectangle shortcut"
    );
    stats.rectangle_shortcuts += 1;
    let polynomial = rectangle_rook_polynomial(rectangle.width, rectangle.height);
    cache.insert(board.key(), polynomial.clone());
    Some(polynomial)
}

/// Exactly one allowed cell, with at least one fully forbidden row
fn is_single_cell(board: &BitBoard) -> bool {
    let rows = board.rows();
    let mut occupied = rows.iter().filter(|&&row| row != 0);
    let has_empty_row = rows.contains(&0);
    match (occupied.next(), occupied.next()) {
        (Some(&row), None) => has_empty_row && is_single_bit(row),
        _ => false,
    }
}

/// Highest allowed bit of the first non-empty row, as `(row, bit)`
pub(crate) fn canonical_cell(board: &BitBoard) -> Option<(usize, u32)> {
    board
        .rows()
        .iter()
        .enumerate()
        .find(|&(_, &row)| row != 0)
        .map(|(index, &row)| (index, find_msb(row) - 1))
}

/// Split on the canonical cell
///
/// Returns `(exclude, include)`: the board without that cell, and the board
/// without its row and column.
fn split_on_canonical_cell(board: &BitBoard) -> (BitBoard, BitBoard) {
    match canonical_cell(board) {
        Some((row, bit)) => (
            board.without_cell(row, bit),
            board.without_row_and_column(row, bit),
        ),
        None => (board.clone(), board.clone()),
    }
}
