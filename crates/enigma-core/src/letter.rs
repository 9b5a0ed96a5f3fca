//! Alphabet arithmetic.
//!
//! Every value flowing through the machine is a [`Letter`]: an index into the
//! 26-letter alphabet. Rotor positions, wiring contacts and plugboard ends all
//! share the same representation, so offsets are plain modular addition.

use std::{fmt, str::FromStr};

use crate::error::ConfigError;

/// Number of letters on every rotor, reflector and plugboard.
pub const ALPHABET_LEN: usize = 26;

/// One letter of the uppercase alphabet, stored as its index (`A` = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Letter(u8);

impl Letter {
    /// `A`, the zero position.
    pub const A: Self = Self(0);

    /// All 26 letters in alphabetical order.
    pub const ALL: [Self; ALPHABET_LEN] = {
        let mut all = [Self(0); ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Convert an uppercase ASCII byte. Anything outside `A`-`Z` is rejected.
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_uppercase() { Some(Self(byte - b'A')) } else { None }
    }

    /// Convert an uppercase `char`. Anything outside `A`-`Z` is rejected.
    pub fn from_char(c: char) -> Option<Self> {
        u8::try_from(c).ok().and_then(Self::from_ascii)
    }

    /// Letter at alphabet index `index`, if `index < 26`.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN { Some(Self(index as u8)) } else { None }
    }

    /// Alphabet index, `0..26`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase character for this letter.
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// `(self + by) mod 26`.
    pub const fn offset(self, by: Self) -> Self {
        Self((self.0 + by.0) % ALPHABET_LEN as u8)
    }

    /// `(self - by) mod 26`.
    pub const fn unoffset(self, by: Self) -> Self {
        Self((self.0 + ALPHABET_LEN as u8 - by.0) % ALPHABET_LEN as u8)
    }

    /// The following letter, wrapping `Z` back to `A`.
    pub const fn next(self) -> Self {
        self.offset(Self(1))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Letter {
    type Err = ConfigError;

    /// Parses exactly one letter, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c.to_ascii_uppercase())
                .ok_or_else(|| ConfigError::InvalidLetter { value: s.to_string() }),
            _ => Err(ConfigError::InvalidLetter { value: s.to_string() }),
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.to_char()
    }
}
