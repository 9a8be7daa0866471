//! User-visible request errors.

use ninefold_core::{ParseCoordinateError, ParseGridError};
use ninefold_solver::SolveError;

/// A rejected request.
///
/// The display form of each variant is the exact message clients see, so it
/// must not be reworded.
///
/// # Examples
///
/// ```
/// use ninefold_api::ApiError;
///
/// assert_eq!(
///     ApiError::WrongLength.to_string(),
///     "Expected puzzle to be 81 characters long",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ApiError {
    /// A solve request arrived without a puzzle.
    #[display("Required field missing")]
    MissingField,
    /// A check request arrived without a puzzle, coordinate, or value.
    #[display("Required field(s) missing")]
    MissingFields,
    /// The puzzle contains a character other than `1`-`9` and `.`.
    #[display("Invalid characters in puzzle")]
    InvalidCharacters,
    /// The puzzle is not exactly 81 characters long.
    #[display("Expected puzzle to be 81 characters long")]
    WrongLength,
    /// The puzzle has no consistent completion.
    #[display("Puzzle cannot be solved")]
    Unsolvable,
    /// The coordinate is not a row letter `A`-`I` followed by a column digit
    /// `1`-`9`.
    #[display("Invalid coordinate")]
    InvalidCoordinate,
    /// The value is not a single digit `1`-`9`.
    #[display("Invalid value")]
    InvalidValue,
}

impl From<ParseGridError> for ApiError {
    fn from(err: ParseGridError) -> Self {
        match err {
            ParseGridError::InvalidCharacter { .. } => Self::InvalidCharacters,
            ParseGridError::WrongLength { .. } => Self::WrongLength,
        }
    }
}

impl From<ParseCoordinateError> for ApiError {
    fn from(_: ParseCoordinateError) -> Self {
        Self::InvalidCoordinate
    }
}

impl From<SolveError> for ApiError {
    fn from(_: SolveError) -> Self {
        Self::Unsolvable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_the_wire_strings() {
        assert_eq!(ApiError::MissingField.to_string(), "Required field missing");
        assert_eq!(
            ApiError::MissingFields.to_string(),
            "Required field(s) missing"
        );
        assert_eq!(
            ApiError::InvalidCharacters.to_string(),
            "Invalid characters in puzzle"
        );
        assert_eq!(
            ApiError::WrongLength.to_string(),
            "Expected puzzle to be 81 characters long"
        );
        assert_eq!(ApiError::Unsolvable.to_string(), "Puzzle cannot be solved");
        assert_eq!(ApiError::InvalidCoordinate.to_string(), "Invalid coordinate");
        assert_eq!(ApiError::InvalidValue.to_string(), "Invalid value");
    }

    #[test]
    fn test_parse_error_conversions() {
        assert_eq!(
            ApiError::from(ParseGridError::InvalidCharacter { found: 'k' }),
            ApiError::InvalidCharacters
        );
        assert_eq!(
            ApiError::from(ParseGridError::WrongLength { len: 76 }),
            ApiError::WrongLength
        );
        assert_eq!(
            ApiError::from(ParseCoordinateError::InvalidRowLetter { found: 'X' }),
            ApiError::InvalidCoordinate
        );
        assert_eq!(ApiError::from(SolveError::Unsolvable), ApiError::Unsolvable);
    }
}
