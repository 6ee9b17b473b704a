//! Peg colours
//!
//! The game draws its colours from a fixed, ordered palette of eight.
//! A game played with C colours uses the first C entries.

use std::fmt;

/// Size of the full palette
pub const MAX_COLOURS: usize = 8;

const CODES: [char; MAX_COLOURS] = ['r', 'g', 'b', 'c', 'm', 'y', 'o', 'p'];

const NAMES: [&str; MAX_COLOURS] = [
    "red", "green", "blue", "cyan", "magenta", "yellow", "orange", "purple",
];

/// A single coloured peg
///
/// Stored as the colour's index into the palette, so pegs order the same way
/// the palette does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Peg(u8);

impl Peg {
    /// Every peg in palette order
    pub const ALL: [Self; MAX_COLOURS] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Peg at a palette index, or `None` past the end of the palette
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Palette index (0-7)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// One-letter code used for input and compact display
    #[inline]
    #[must_use]
    pub const fn code(self) -> char {
        CODES[self.0 as usize]
    }

    /// Full colour name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    /// Look up a peg by its code, ignoring case
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Peg;
    ///
    /// assert_eq!(Peg::from_code('Y').map(Peg::name), Some("yellow"));
    /// assert_eq!(Peg::from_code('z'), None);
    /// ```
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        CODES
            .iter()
            .position(|&c| c == code)
            .and_then(Self::new)
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_lookup() {
        for peg in Peg::ALL {
            assert_eq!(Peg::from_code(peg.code()), Some(peg));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Peg::from_code('R'), Peg::new(0));
        assert_eq!(Peg::from_code('p'), Peg::new(7));
    }

    #[test]
    fn unknown_codes_rejected() {
        assert_eq!(Peg::from_code('x'), None);
        assert_eq!(Peg::from_code('1'), None);
        assert_eq!(Peg::new(MAX_COLOURS), None);
    }

    #[test]
    fn pegs_order_by_palette_position() {
        let red = Peg::from_code('r').unwrap();
        let purple = Peg::from_code('p').unwrap();
        assert!(red < purple);
        assert_eq!(purple.index(), 7);
        assert_eq!(format!("{purple}"), "p");
    }
}
