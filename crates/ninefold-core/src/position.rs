//! Board positions.

/// A cell position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Cells are ordered row-major: the top-left cell has
/// [`index`](Self::index) 0 and the bottom-right cell has index 80.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 4);
/// assert_eq!(pos.index(), 40);
/// assert_eq!(pos.region_index(), 4);
/// assert_eq!(Position::from_index(40), pos);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = ((index % 9) as u8, (index / 9) as u8);
        Self { x, y }
    }

    /// Returns the index of the 3x3 region containing this position.
    ///
    /// Regions are numbered 0-8, left to right then top to bottom.
    #[must_use]
    pub const fn region_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Creates a position from a region index and a cell index within the
    /// region.
    ///
    /// Cells within a region are numbered 0-8, left to right then top to
    /// bottom.
    ///
    /// # Panics
    ///
    /// Panics if `region_index` or `cell_index` is not in the range 0-8.
    #[must_use]
    pub const fn from_region(region_index: u8, cell_index: u8) -> Self {
        assert!(region_index < 9 && cell_index < 9);
        Self {
            x: region_index % 3 * 3 + cell_index % 3,
            y: region_index / 3 * 3 + cell_index / 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), pos);
        }
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(8, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    fn test_region_layout() {
        assert_eq!(Position::new(0, 0).region_index(), 0);
        assert_eq!(Position::new(3, 0).region_index(), 1);
        assert_eq!(Position::new(8, 2).region_index(), 2);
        assert_eq!(Position::new(0, 3).region_index(), 3);
        assert_eq!(Position::new(4, 4).region_index(), 4);
        assert_eq!(Position::new(8, 8).region_index(), 8);
    }

    #[test]
    fn test_from_region_round_trip() {
        for region_index in 0..9 {
            for cell_index in 0..9 {
                let pos = Position::from_region(region_index, cell_index);
                assert_eq!(pos.region_index(), region_index);
            }
        }
        // Cells within a region are themselves row-major.
        assert_eq!(Position::from_region(4, 0), Position::new(3, 3));
        assert_eq!(Position::from_region(4, 1), Position::new(4, 3));
        assert_eq!(Position::from_region(4, 3), Position::new(3, 4));
        assert_eq!(Position::from_region(8, 8), Position::new(8, 8));
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }

    #[test]
    #[should_panic(expected = "index < 81")]
    fn test_from_index_rejects_out_of_range() {
        let _ = Position::from_index(81);
    }
}
