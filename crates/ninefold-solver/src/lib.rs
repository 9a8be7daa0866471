//! Constraint checking and backtracking search for 9x9 sudoku puzzles.
//!
//! The crate has two halves that share the same row, column, and region
//! scans so their verdicts cannot drift apart:
//!
//! - [`check_placement`] and [`conflicts`] judge a single placement against
//!   the grid as it stands, reporting the violated groups as [`Conflicts`].
//! - [`BacktrackSolver`] completes a grid by exhaustive depth-first search,
//!   after [`find_inconsistency`] has ruled out grids whose givens already
//!   clash.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::Grid;
//! use ninefold_solver::BacktrackSolver;
//!
//! let grid: Grid =
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//!         .parse()?;
//! let solution = BacktrackSolver::new().solve(&grid)?;
//! assert!(solution.is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{backtrack::*, conflict::*, engine::*};

mod backtrack;
mod conflict;
mod engine;
