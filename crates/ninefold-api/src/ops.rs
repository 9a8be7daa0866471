//! Request handlers shared by every transport.
//!
//! Both operations take raw optional fields so that transports can hand over
//! request bodies without pre-validating them. Field presence is checked
//! first, then the puzzle, then (for [`check`]) the coordinate and the value,
//! and the first failure wins.

use ninefold_core::{Coordinate, Digit, Grid};
use ninefold_solver::{BacktrackSolver, Placement, check_placement};

use crate::ApiError;

/// Solves a puzzle string.
///
/// An absent or empty `puzzle` field is rejected before parsing. A puzzle
/// with no consistent completion, including one whose givens already clash,
/// is reported as [`ApiError::Unsolvable`].
///
/// # Errors
///
/// Returns an error if the puzzle is missing, malformed, or unsolvable.
///
/// # Examples
///
/// ```
/// let puzzle =
///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
/// let solution = ninefold_api::solve(Some(puzzle))?;
/// assert!(solution.is_complete());
/// # Ok::<(), ninefold_api::ApiError>(())
/// ```
pub fn solve(puzzle: Option<&str>) -> Result<Grid, ApiError> {
    let puzzle = present(puzzle).ok_or(ApiError::MissingField)?;
    let grid: Grid = puzzle.parse()?;
    let (solution, stats) = BacktrackSolver::new()
        .solve_with_stats(&grid)
        .inspect_err(|err| log::debug!("puzzle rejected: {err}"))?;
    log::debug!(
        "puzzle solved: placements={} backtracks={}",
        stats.placements(),
        stats.backtracks()
    );
    Ok(solution)
}

/// Checks a single placement against a puzzle string.
///
/// All three fields must be present and non-empty. The coordinate names a
/// cell as a row letter `A`-`I` (case-insensitive) followed by a column
/// digit `1`-`9`, and the value must be a single digit `1`-`9`. The cell
/// named by the coordinate may already be filled; re-stating its current
/// digit is valid, and any other digit is judged against the rest of the
/// grid.
///
/// # Errors
///
/// Returns an error if any field is missing or if the puzzle, coordinate,
/// or value is malformed.
///
/// # Examples
///
/// ```
/// let puzzle =
///     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
/// let placement = ninefold_api::check(Some(puzzle), Some("A2"), Some("7"))?;
/// assert!(placement.is_valid());
/// # Ok::<(), ninefold_api::ApiError>(())
/// ```
pub fn check(
    puzzle: Option<&str>,
    coordinate: Option<&str>,
    value: Option<&str>,
) -> Result<Placement, ApiError> {
    let (Some(puzzle), Some(coordinate), Some(value)) =
        (present(puzzle), present(coordinate), present(value))
    else {
        return Err(ApiError::MissingFields);
    };
    let grid: Grid = puzzle.parse()?;
    let coordinate: Coordinate = coordinate.parse()?;
    let digit = parse_value(value)?;
    let placement = check_placement(&grid, coordinate.position(), digit);
    log::debug!("checked {digit} at {coordinate}: {placement:?}");
    Ok(placement)
}

/// Treats an empty field the same as an absent one.
fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}

fn parse_value(value: &str) -> Result<Digit, ApiError> {
    let mut chars = value.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(ApiError::InvalidValue);
    };
    Digit::from_char(c).ok_or(ApiError::InvalidValue)
}
