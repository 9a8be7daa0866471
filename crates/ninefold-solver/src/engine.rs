//! Placement checking against row, column, and region constraints.

use ninefold_core::{Digit, Grid, Position};

use crate::{ConflictKind, Conflicts};

/// The verdict for a single placement.
///
/// Returned by [`check_placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Placement {
    /// The placement violates no constraint group.
    Valid,
    /// The placement duplicates its digit in one or more constraint groups.
    Conflicting(Conflicts),
}

impl Placement {
    /// Returns the violated constraint groups, empty when valid.
    #[must_use]
    pub const fn conflicts(self) -> Conflicts {
        match self {
            Self::Valid => Conflicts::empty(),
            Self::Conflicting(conflicts) => conflicts,
        }
    }
}

/// Checks whether placing `digit` at `pos` is consistent with `grid`.
///
/// A cell that already holds `digit` is trivially valid; otherwise the cell
/// at `pos` is excluded from every scan. The grid is not modified, and
/// solvability is not considered: a placement can be valid here yet lead
/// nowhere.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
/// use ninefold_solver::check_placement;
///
/// let grid: Grid =
///     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6.."
///         .parse()?;
/// // Placing 7 at A2 violates nothing.
/// assert!(check_placement(&grid, Position::new(1, 0), Digit::D7).is_valid());
/// // Placing 5 at A1 duplicates 5 in the row, the column, and the region.
/// assert!(check_placement(&grid, Position::new(0, 0), Digit::D5).is_conflicting());
/// # Ok::<(), ninefold_core::ParseGridError>(())
/// ```
#[must_use]
pub fn check_placement(grid: &Grid, pos: Position, digit: Digit) -> Placement {
    if grid.get(pos) == Some(digit) {
        return Placement::Valid;
    }
    let found = conflicts(grid, pos, digit);
    if found.is_empty() {
        Placement::Valid
    } else {
        Placement::Conflicting(found)
    }
}

/// Returns the constraint groups in which `digit` already appears, judged
/// from `pos`.
///
/// The cell at `pos` itself is excluded from each scan, and each group
/// contributes its flag at most once, however many cells in it hold `digit`.
/// Unlike [`check_placement`], this never consults the current content of
/// the cell.
#[must_use]
pub fn conflicts(grid: &Grid, pos: Position, digit: Digit) -> Conflicts {
    let mut found = Conflicts::empty();
    if digit_in_row(grid, pos, digit) {
        found |= Conflicts::ROW;
    }
    if digit_in_column(grid, pos, digit) {
        found |= Conflicts::COLUMN;
    }
    if digit_in_region(grid, pos, digit) {
        found |= Conflicts::REGION;
    }
    found
}

fn digit_in_row(grid: &Grid, pos: Position, digit: Digit) -> bool {
    grid.row(pos.y())
        .any(|(other, held)| other != pos && held == Some(digit))
}

fn digit_in_column(grid: &Grid, pos: Position, digit: Digit) -> bool {
    grid.column(pos.x())
        .any(|(other, held)| other != pos && held == Some(digit))
}

fn digit_in_region(grid: &Grid, pos: Position, digit: Digit) -> bool {
    grid.region(pos.region_index())
        .any(|(other, held)| other != pos && held == Some(digit))
}

/// A duplicated digit among a grid's filled cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inconsistency {
    /// The kind of group containing the duplicate.
    pub kind: ConflictKind,
    /// The duplicated digit.
    pub digit: Digit,
    /// The second occurrence of the digit within the group.
    pub position: Position,
}

/// Searches the grid's filled cells for a duplicated digit.
///
/// Groups are scanned rows first, then columns, then regions, each in
/// ascending index order; the first duplicate found is returned. A grid with
/// an inconsistency has no completion, complete or not.
#[must_use]
pub fn find_inconsistency(grid: &Grid) -> Option<Inconsistency> {
    for kind in ConflictKind::ALL {
        for index in 0..9 {
            let found = match kind {
                ConflictKind::Row => find_duplicate(grid.row(index)),
                ConflictKind::Column => find_duplicate(grid.column(index)),
                ConflictKind::Region => find_duplicate(grid.region(index)),
            };
            if let Some((digit, position)) = found {
                return Some(Inconsistency {
                    kind,
                    digit,
                    position,
                });
            }
        }
    }
    None
}

/// Returns `true` if no filled cell duplicates a digit within its row,
/// column, or region.
#[must_use]
pub fn is_consistent(grid: &Grid) -> bool {
    find_inconsistency(grid).is_none()
}

fn find_duplicate<I>(cells: I) -> Option<(Digit, Position)>
where
    I: Iterator<Item = (Position, Option<Digit>)>,
{
    let mut seen = [false; 9];
    for (pos, held) in cells {
        let Some(digit) = held else { continue };
        let slot = &mut seen[usize::from(digit.value() - 1)];
        if *slot {
            return Some((digit, pos));
        }
        *slot = true;
    }
    None
}
