//! The 9x9 grid and its string format.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9x9 puzzle grid.
///
/// Each cell holds a [`Digit`] or is empty. The canonical string format is a
/// flat 81-character sequence in row-major order, one character per cell,
/// with `.` marking empty cells.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
///
/// let grid: Grid =
///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
///         .parse()?;
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D1));
/// assert_eq!(grid.get(Position::new(1, 0)), None);
/// assert!(!grid.is_complete());
/// # Ok::<(), ninefold_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places `digit` at `pos`, replacing any existing digit.
    pub fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Empties the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Digit>)> {
        Position::ALL.into_iter().map(move |pos| (pos, self.get(pos)))
    }

    /// Returns an iterator over the 9 cells of row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    pub fn row(&self, y: u8) -> impl Iterator<Item = (Position, Option<Digit>)> {
        assert!(y < 9);
        (0..9).map(move |x| {
            let pos = Position::new(x, y);
            (pos, self.get(pos))
        })
    }

    /// Returns an iterator over the 9 cells of column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    pub fn column(&self, x: u8) -> impl Iterator<Item = (Position, Option<Digit>)> {
        assert!(x < 9);
        (0..9).map(move |y| {
            let pos = Position::new(x, y);
            (pos, self.get(pos))
        })
    }

    /// Returns an iterator over the 9 cells of a 3x3 region, row-major within
    /// the region.
    ///
    /// # Panics
    ///
    /// Panics if `region_index` is not in the range 0-8.
    pub fn region(&self, region_index: u8) -> impl Iterator<Item = (Position, Option<Digit>)> {
        assert!(region_index < 9);
        (0..9).map(move |cell_index| {
            let pos = Position::from_region(region_index, cell_index);
            (pos, self.get(pos))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            f.write_char(cell.map_or('.', Digit::to_char))?;
        }
        Ok(())
    }
}

/// An error that occurs when parsing a [`Grid`] from a string.
///
/// `InvalidCharacter` takes precedence over `WrongLength`: every character is
/// inspected before the input's length is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input contains a character other than `1`-`9` and `.`.
    #[display("invalid character in puzzle: {found:?}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
    /// The input is not exactly 81 characters.
    #[display("expected 81 characters, found {len}")]
    WrongLength {
        /// Number of characters in the input.
        len: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(found) = s.chars().find(|&c| c != '.' && Digit::from_char(c).is_none()) {
            return Err(ParseGridError::InvalidCharacter { found });
        }
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseGridError::WrongLength { len });
        }
        let mut grid = Self::new();
        for (cell, c) in grid.cells.iter_mut().zip(s.chars()) {
            *cell = Digit::from_char(c);
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

    #[track_caller]
    fn parse(s: &str) -> Grid {
        s.parse().expect("test fixture must parse")
    }

    #[test]
    fn test_parse_maps_cells_row_major() {
        let grid = parse(PUZZLE);
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D1));
        assert_eq!(grid.get(Position::new(1, 0)), None);
        assert_eq!(grid.get(Position::new(2, 0)), Some(Digit::D5));
        // First cell of the second row is the tenth character.
        assert_eq!(grid.get(Position::new(0, 1)), None);
        assert_eq!(grid.get(Position::new(2, 1)), Some(Digit::D6));
        // Last cell.
        assert_eq!(grid.get(Position::new(8, 8)), None);
        assert_eq!(grid.get(Position::new(7, 8)), Some(Digit::D7));
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(parse(PUZZLE).to_string(), PUZZLE);
        let empty = ".".repeat(81);
        assert_eq!(parse(&empty).to_string(), empty);
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let input = PUZZLE.replace('2', "k");
        assert_eq!(
            input.parse::<Grid>(),
            Err(ParseGridError::InvalidCharacter { found: 'k' })
        );
        let zeros = "0".repeat(81);
        assert_eq!(
            zeros.parse::<Grid>(),
            Err(ParseGridError::InvalidCharacter { found: '0' })
        );
    }

    #[test]
    fn test_invalid_character_reported_before_wrong_length() {
        // Both checks fail here; the character error must win.
        assert_eq!(
            "1.x".parse::<Grid>(),
            Err(ParseGridError::InvalidCharacter { found: 'x' })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            ".".repeat(80).parse::<Grid>(),
            Err(ParseGridError::WrongLength { len: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<Grid>(),
            Err(ParseGridError::WrongLength { len: 82 })
        );
        assert_eq!("".parse::<Grid>(), Err(ParseGridError::WrongLength { len: 0 }));
    }

    #[test]
    fn test_set_get_clear() {
        let mut grid = Grid::new();
        let pos = Position::new(4, 4);
        assert_eq!(grid.get(pos), None);
        grid.set(pos, Digit::D5);
        assert_eq!(grid.get(pos), Some(Digit::D5));
        grid.set(pos, Digit::D6);
        assert_eq!(grid.get(pos), Some(Digit::D6));
        grid.clear(pos);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_is_complete() {
        let mut grid = Grid::new();
        assert!(!grid.is_complete());
        for pos in Position::ALL {
            grid.set(pos, Digit::D1);
        }
        assert!(grid.is_complete());
        grid.clear(Position::new(8, 8));
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_row_view() {
        let grid = parse(PUZZLE);
        let digits: Vec<_> = grid.row(0).map(|(_, digit)| digit).collect();
        assert_eq!(
            digits,
            [
                Some(Digit::D1),
                None,
                Some(Digit::D5),
                None,
                None,
                Some(Digit::D2),
                None,
                Some(Digit::D8),
                Some(Digit::D4),
            ]
        );
    }

    #[test]
    fn test_column_view() {
        let grid = parse(PUZZLE);
        let digits: Vec<_> = grid.column(0).map(|(_, digit)| digit).collect();
        assert_eq!(
            digits,
            [
                Some(Digit::D1),
                None,
                None,
                None,
                Some(Digit::D8),
                Some(Digit::D3),
                Some(Digit::D4),
                None,
                Some(Digit::D2),
            ]
        );
    }

    #[test]
    fn test_region_view() {
        let grid = parse(PUZZLE);
        let digits: Vec<_> = grid.region(0).map(|(_, digit)| digit).collect();
        assert_eq!(
            digits,
            [
                Some(Digit::D1),
                None,
                Some(Digit::D5),
                None,
                None,
                Some(Digit::D6),
                None,
                Some(Digit::D2),
                None,
            ]
        );
    }

    #[test]
    fn test_views_cover_each_position_three_times() {
        let grid = Grid::new();
        let mut seen = [0_u8; 81];
        for index in 0..9 {
            for (pos, _) in grid.row(index) {
                seen[pos.index()] += 1;
            }
            for (pos, _) in grid.column(index) {
                seen[pos.index()] += 1;
            }
            for (pos, _) in grid.region(index) {
                seen[pos.index()] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count == 3));
    }

    proptest! {
        #[test]
        fn test_parse_display_round_trip(s in "[.1-9]{81}") {
            let grid: Grid = s.parse().expect("81 puzzle characters must parse");
            prop_assert_eq!(grid.to_string(), s);
        }

        #[test]
        fn test_any_foreign_character_is_rejected(
            head in "[.1-9]{0,40}",
            bad in "[^.1-9]",
            tail in "[.1-9]{0,40}",
        ) {
            let input = format!("{head}{bad}{tail}");
            let rejected = matches!(
                input.parse::<Grid>(),
                Err(ParseGridError::InvalidCharacter { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn test_wrong_length_is_rejected(s in "[.1-9]{0,120}") {
            prop_assume!(s.chars().count() != 81);
            let len = s.chars().count();
            prop_assert_eq!(s.parse::<Grid>(), Err(ParseGridError::WrongLength { len }));
        }
    }
}
