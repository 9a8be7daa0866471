//! User-facing cell addresses.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, Position};

/// A cell address in the `"A1"` format.
///
/// The letter names the row (`A`-`I`, top to bottom) and the digit names the
/// column (`1`-`9`, left to right). Parsing accepts lowercase row letters;
/// [`Display`] always prints the uppercase form.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Coordinate, Position};
///
/// let coordinate: Coordinate = "b7".parse()?;
/// assert_eq!(coordinate.position(), Position::new(6, 1));
/// assert_eq!(coordinate.to_string(), "B7");
/// # Ok::<(), ninefold_core::ParseCoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    position: Position,
}

impl Coordinate {
    /// Creates a coordinate addressing the given position.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self { position }
    }

    /// Returns the addressed position.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Returns the row letter (`'A'`-`'I'`).
    #[must_use]
    pub const fn row_letter(self) -> char {
        (b'A' + self.position.y()) as char
    }

    /// Returns the column digit (`'1'`-`'9'`).
    #[must_use]
    pub const fn column_digit(self) -> char {
        (b'1' + self.position.x()) as char
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column_digit())
    }
}

/// An error that occurs when parsing a [`Coordinate`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCoordinateError {
    /// The input is not exactly two characters.
    #[display("expected two characters, found {len}")]
    InvalidLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The first character is not a row letter `A`-`I`.
    #[display("invalid row letter: {found:?}")]
    InvalidRowLetter {
        /// The offending character.
        found: char,
    },
    /// The second character is not a column digit `1`-`9`.
    #[display("invalid column digit: {found:?}")]
    InvalidColumnDigit {
        /// The offending character.
        found: char,
    },
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(row), Some(column), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCoordinateError::InvalidLength {
                len: s.chars().count(),
            });
        };
        let y = match row.to_ascii_uppercase() {
            'A' => 0,
            'B' => 1,
            'C' => 2,
            'D' => 3,
            'E' => 4,
            'F' => 5,
            'G' => 6,
            'H' => 7,
            'I' => 8,
            _ => return Err(ParseCoordinateError::InvalidRowLetter { found: row }),
        };
        let Some(digit) = Digit::from_char(column) else {
            return Err(ParseCoordinateError::InvalidColumnDigit { found: column });
        };
        Ok(Self::new(Position::new(digit.value() - 1, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corners() {
        let a1: Coordinate = "A1".parse().unwrap();
        assert_eq!(a1.position(), Position::new(0, 0));
        let i9: Coordinate = "I9".parse().unwrap();
        assert_eq!(i9.position(), Position::new(8, 8));
    }

    #[test]
    fn test_parse_accepts_lowercase() {
        let upper: Coordinate = "C5".parse().unwrap();
        let lower: Coordinate = "c5".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.to_string(), "C5");
    }

    #[test]
    fn test_display_round_trip() {
        for pos in Position::ALL {
            let coordinate = Coordinate::new(pos);
            let parsed: Coordinate = coordinate.to_string().parse().unwrap();
            assert_eq!(parsed, coordinate);
        }
    }

    #[test]
    fn test_parse_rejects_bad_row_letter() {
        for input in ["X1", "J1", "11", ".5", "z9"] {
            assert!(
                matches!(
                    input.parse::<Coordinate>(),
                    Err(ParseCoordinateError::InvalidRowLetter { .. })
                ),
                "expected {input:?} to have an invalid row letter"
            );
        }
    }

    #[test]
    fn test_parse_rejects_bad_column_digit() {
        for input in ["A0", "Ag", "B.", "ix"] {
            assert!(
                matches!(
                    input.parse::<Coordinate>(),
                    Err(ParseCoordinateError::InvalidColumnDigit { .. })
                ),
                "expected {input:?} to have an invalid column digit"
            );
        }
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        for (input, len) in [("", 0), ("A", 1), ("A10", 3), ("A1 ", 3)] {
            assert_eq!(
                input.parse::<Coordinate>(),
                Err(ParseCoordinateError::InvalidLength { len }),
                "input: {input:?}"
            );
        }
    }
}
