//! Conflict classification for placements.

bitflags::bitflags! {
    /// The set of constraint groups a placement violates.
    ///
    /// [`kinds`](Self::kinds) iterates in reporting order: row, column,
    /// region.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Conflicts: u8 {
        /// Another cell in the same row holds the digit.
        const ROW = 0b001;
        /// Another cell in the same column holds the digit.
        const COLUMN = 0b010;
        /// Another cell in the same 3x3 region holds the digit.
        const REGION = 0b100;
    }
}

impl Conflicts {
    /// Returns the conflict kinds present in this set, in reporting order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_solver::{ConflictKind, Conflicts};
    ///
    /// let conflicts = Conflicts::REGION | Conflicts::ROW;
    /// let kinds: Vec<_> = conflicts.kinds().collect();
    /// assert_eq!(kinds, [ConflictKind::Row, ConflictKind::Region]);
    /// ```
    pub fn kinds(self) -> impl Iterator<Item = ConflictKind> {
        ConflictKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(kind.flag()))
    }
}

/// One kind of constraint group.
///
/// The display form is the label used in check responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConflictKind {
    /// A row of 9 cells.
    #[display("row")]
    Row,
    /// A column of 9 cells.
    #[display("column")]
    Column,
    /// A 3x3 region of 9 cells.
    #[display("region")]
    Region,
}

impl ConflictKind {
    /// All kinds in reporting order.
    pub const ALL: [Self; 3] = [Self::Row, Self::Column, Self::Region];

    /// Returns the flag form of this kind.
    #[must_use]
    pub const fn flag(self) -> Conflicts {
        match self {
            Self::Row => Conflicts::ROW,
            Self::Column => Conflicts::COLUMN,
            Self::Region => Conflicts::REGION,
        }
    }
}
