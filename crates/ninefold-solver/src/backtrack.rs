//! Exhaustive backtracking search.

use ninefold_core::{Digit, Grid, Position};
use tinyvec::ArrayVec;

use crate::{ConflictKind, conflicts, find_inconsistency};

/// An error that occurs when a puzzle has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The givens already duplicate a digit within a group, so no completion
    /// can exist.
    #[display("duplicate {digit} in {kind}")]
    Inconsistent {
        /// The violated group kind.
        kind: ConflictKind,
        /// The duplicated digit.
        digit: Digit,
    },
    /// The search exhausted every candidate without completing the grid.
    #[display("no solution exists")]
    Unsolvable,
}

/// Search counters collected during a solve.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_solver::BacktrackSolver;
///
/// let grid: Grid =
///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
///         .parse()?;
/// let (solution, stats) = BacktrackSolver::new().solve_with_stats(&grid)?;
/// assert!(solution.is_complete());
/// // Every backtrack undoes one placement.
/// assert!(stats.placements() >= stats.backtracks());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackStats {
    placements: usize,
    backtracks: usize,
}

impl BacktrackStats {
    /// Returns how many candidate placements were made.
    #[must_use]
    pub const fn placements(&self) -> usize {
        self.placements
    }

    /// Returns how many placements were later undone.
    #[must_use]
    pub const fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns `true` if the solve never undid a placement.
    #[must_use]
    pub const fn solved_without_backtracking(&self) -> bool {
        self.backtracks == 0
    }
}

/// A depth-first solver that completes grids by exhaustive search.
///
/// Empty cells are visited in row-major order and candidates are tried in
/// ascending order, so of all completions the lexicographically smallest
/// (reading the grid row-major) is found first. Repeated solves of the same
/// input return the same solution.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_solver::BacktrackSolver;
///
/// let grid: Grid =
///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
///         .parse()?;
/// let solution = BacktrackSolver::new().solve(&grid)?;
/// assert_eq!(
///     solution.to_string(),
///     "135762984946381257728459613694517832812936745357824196473298561581673429269145378",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Solves `grid`, returning the completed grid.
    ///
    /// The input is not modified and its givens are preserved in the
    /// solution.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Inconsistent`] if the givens already duplicate a
    /// digit within a row, column, or region, and [`SolveError::Unsolvable`]
    /// if no completion exists. A complete grid that violates a constraint is
    /// therefore an error, never a solution.
    pub fn solve(&self, grid: &Grid) -> Result<Grid, SolveError> {
        let (solution, _stats) = self.solve_with_stats(grid)?;
        Ok(solution)
    }

    /// Solves `grid`, returning the completed grid and search counters.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`solve`](Self::solve).
    pub fn solve_with_stats(&self, grid: &Grid) -> Result<(Grid, BacktrackStats), SolveError> {
        if let Some(found) = find_inconsistency(grid) {
            return Err(SolveError::Inconsistent {
                kind: found.kind,
                digit: found.digit,
            });
        }

        let empties: ArrayVec<[Position; 81]> = Position::ALL
            .into_iter()
            .filter(|&pos| grid.get(pos).is_none())
            .collect();

        let mut work = grid.clone();
        let mut stats = BacktrackStats::default();
        if fill(&mut work, &empties, &mut stats) {
            Ok((work, stats))
        } else {
            Err(SolveError::Unsolvable)
        }
    }
}

/// Fills `empties` in order, trying candidates ascending. Returns `false`
/// with `grid` restored to its state on entry when no candidate works.
fn fill(grid: &mut Grid, empties: &[Position], stats: &mut BacktrackStats) -> bool {
    let Some((&pos, rest)) = empties.split_first() else {
        return true;
    };
    for digit in Digit::ALL {
        if conflicts(grid, pos, digit).is_empty() {
            grid.set(pos, digit);
            stats.placements += 1;
            if fill(grid, rest, stats) {
                return true;
            }
            grid.clear(pos);
            stats.backtracks += 1;
        }
    }
    false
}
