//! Core data types for 9x9 sudoku puzzles.
//!
//! This crate defines the data model shared by the placement checker and the
//! solver:
//!
//! - [`digit`]: type-safe cell values in the range 1-9
//! - [`position`]: board positions with row-major and region indexing
//! - [`coordinate`]: the user-facing `"A1"` cell addressing format
//! - [`grid`]: the 9x9 grid and its flat 81-character string format
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Coordinate, Digit, Grid};
//!
//! let grid: Grid =
//!     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6.."
//!         .parse()?;
//!
//! // Address cells the way the wire format does.
//! let coordinate: Coordinate = "A3".parse()?;
//! assert_eq!(grid.get(coordinate.position()), Some(Digit::D9));
//!
//! // The string format round-trips.
//! assert_eq!(grid.to_string().len(), 81);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod coordinate;
pub mod digit;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    coordinate::{Coordinate, ParseCoordinateError},
    digit::Digit,
    grid::{Grid, ParseGridError},
    position::Position,
};
