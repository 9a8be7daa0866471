//! Typed puzzle digits.

use std::fmt::{self, Display};

/// A filled-cell value in the range 1-9.
///
/// Grid cells either hold a `Digit` or are empty, so out-of-range values such
/// as 0 are unrepresentable in a [`Grid`](crate::Grid).
///
/// # Examples
///
/// ```
/// use ninefold_core::Digit;
///
/// let digit = Digit::from_char('7').unwrap();
/// assert_eq!(digit, Digit::D7);
/// assert_eq!(digit.value(), 7);
/// assert_eq!(digit.to_char(), '7');
///
/// // Characters outside 1-9 do not name a digit.
/// assert_eq!(Digit::from_char('.'), None);
/// assert_eq!(Digit::from_char('0'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All digits in ascending order.
    ///
    /// The solver tries candidates in this order, so the array must stay
    /// sorted.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a numeric value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside the range 1-9. Use [`from_char`](Self::from_char)
    /// when the value comes from untrusted input.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(3), Digit::D3);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("digit value out of range: {value}"),
        }
    }

    /// Creates a digit from its character form `'1'`-`'9'`.
    ///
    /// Returns `None` for any other character, including `'0'` and the empty
    /// cell marker `'.'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Digit;
    ///
    /// assert_eq!(Digit::from_char('1'), Some(Digit::D1));
    /// assert_eq!(Digit::from_char('g'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::D1),
            '2' => Some(Self::D2),
            '3' => Some(Self::D3),
            '4' => Some(Self::D4),
            '5' => Some(Self::D5),
            '6' => Some(Self::D6),
            '7' => Some(Self::D7),
            '8' => Some(Self::D8),
            '9' => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the character form of this digit (`'1'`-`'9'`).
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.to_char()
    }
}
