//! Rotor and reflector wiring tables.
//!
//! A [`Rotor`] is a fixed permutation of the alphabet plus the notch letter
//! that carries the next rotor along. Reflectors share the representation but
//! have no notch and never rotate.
//!
//! # Invariants
//!
//! - Wiring is a bijection over `A`-`Z`. This is checked at construction, at
//!   compile time for the built-in catalogue.
//! - Reflector wiring is an involution with no fixed point.
//! - Tables are immutable. They are shared by reference between any number of
//!   machines.

use std::{borrow::Cow, fmt, str::FromStr};

use crate::{
    error::ConfigError,
    letter::{ALPHABET_LEN, Letter},
};

/// Fixed wiring of a rotor or reflector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: Cow<'static, str>,
    wiring: [Letter; ALPHABET_LEN],
    notch: Option<Letter>,
}

/// Rotor I, notch at `R`.
pub static ROTOR_I: Rotor = Rotor::builtin("I", b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", b'R');
/// Rotor II, notch at `F`.
pub static ROTOR_II: Rotor = Rotor::builtin("II", b"AJDKSIRUXBLHWTMCQGZNPYFVOE", b'F');
/// Rotor III, notch at `W`.
pub static ROTOR_III: Rotor = Rotor::builtin("III", b"BDFHJLCPRTXVZNYEIWGAKMUSQO", b'W');
/// Rotor IV, notch at `K`.
pub static ROTOR_IV: Rotor = Rotor::builtin("IV", b"ESOVPZJAYQUIRHXLNFTGKDCMWB", b'K');
/// Rotor V, notch at `A`.
pub static ROTOR_V: Rotor = Rotor::builtin("V", b"VZBRGITYUPSDNHLXAWMJQOFECK", b'A');
/// Wide reflector B.
pub static REFLECTOR_B: Rotor = Rotor::builtin_reflector("B", b"YRUHQSLDPXNGOKMIEBFZCWVJAT");
/// Wide reflector C.
pub static REFLECTOR_C: Rotor = Rotor::builtin_reflector("C", b"FVPJIAOYEDRZXWGCTKUQSBNMHL");

impl Rotor {
    const fn builtin(name: &'static str, wiring: &[u8; ALPHABET_LEN], notch: u8) -> Self {
        let notch = Letter::from_ascii(notch);
        assert!(notch.is_some(), "notch must be A-Z");
        Self { name: Cow::Borrowed(name), wiring: decode_static(wiring), notch }
    }

    const fn builtin_reflector(name: &'static str, wiring: &[u8; ALPHABET_LEN]) -> Self {
        let wiring = decode_static(wiring);
        let mut i = 0;
        while i < ALPHABET_LEN {
            let wired = wiring[i].index();
            assert!(wired != i, "reflector must not map a letter to itself");
            assert!(wiring[wired].index() == i, "reflector wiring must be an involution");
            i += 1;
        }
        Self { name: Cow::Borrowed(name), wiring, notch: None }
    }

    /// Build a rotor from a 26-letter wiring string and a notch letter.
    ///
    /// `wiring` lists the output letter for each input contact `A`..`Z`.
    /// Lowercase input is accepted.
    pub fn try_new(
        name: impl Into<Cow<'static, str>>,
        wiring: &str,
        notch: char,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let wiring = decode_wiring(&name, wiring)?;
        let notch = Letter::from_char(notch.to_ascii_uppercase())
            .ok_or_else(|| ConfigError::InvalidNotch { name: name.to_string(), notch })?;

        Ok(Self { name, wiring, notch: Some(notch) })
    }

    /// Build a reflector from a 26-letter wiring string.
    ///
    /// The wiring must pair every letter with a different letter.
    pub fn try_reflector(
        name: impl Into<Cow<'static, str>>,
        wiring: &str,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let wiring = decode_wiring(&name, wiring)?;

        for (contact, wired) in Letter::ALL.iter().zip(wiring.iter()) {
            if contact == wired {
                return Err(ConfigError::NotAReflector {
                    name: name.to_string(),
                    reason: format!("{contact} is wired to itself"),
                });
            }
            if wiring[wired.index()] != *contact {
                return Err(ConfigError::NotAReflector {
                    name: name.to_string(),
                    reason: format!("{contact} -> {wired} is not reciprocal"),
                });
            }
        }

        Ok(Self { name, wiring, notch: None })
    }

    /// Catalogue name (`I`..`V`, `B`, `C`) or the name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Notch letter, `None` for reflectors.
    pub fn notch(&self) -> Option<Letter> {
        self.notch
    }

    /// Whether this table is a reflector.
    pub fn is_reflector(&self) -> bool {
        self.notch.is_none()
    }

    /// Output letter wired to input `contact`.
    ///
    /// `contact` must already include the rotor's rotational offset.
    pub fn forward(&self, contact: Letter) -> Letter {
        self.wiring[contact.index()]
    }

    /// Input contact wired to output `letter`.
    ///
    /// Linear scan of the forward table.
    pub fn inverse(&self, letter: Letter) -> Letter {
        match self.wiring.iter().position(|&wired| wired == letter) {
            Some(contact) => Letter::ALL[contact],
            None => unreachable!("rotor {} wiring is not a permutation", self.name),
        }
    }

    /// The wiring as a 26-character string.
    pub fn wiring(&self) -> String {
        self.wiring.iter().map(|l| l.to_char()).collect()
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

const fn decode_static(wiring: &[u8; ALPHABET_LEN]) -> [Letter; ALPHABET_LEN] {
    let mut letters = [Letter::A; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        let letter = match Letter::from_ascii(wiring[i]) {
            Some(letter) => letter,
            None => Letter::A,
        };
        assert!(wiring[i].is_ascii_uppercase(), "wiring must only contain A-Z");
        assert!(!seen[letter.index()], "wiring must be a permutation");
        seen[letter.index()] = true;
        letters[i] = letter;
        i += 1;
    }
    letters
}

fn decode_wiring(name: &str, wiring: &str) -> Result<[Letter; ALPHABET_LEN], ConfigError> {
    let invalid =
        |reason: String| ConfigError::InvalidWiring { name: name.to_string(), reason };

    let count = wiring.chars().count();
    if count != ALPHABET_LEN {
        return Err(invalid(format!("expected {ALPHABET_LEN} letters, got {count}")));
    }

    let mut letters = [Letter::A; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    for (slot, c) in letters.iter_mut().zip(wiring.chars()) {
        let letter = Letter::from_char(c.to_ascii_uppercase())
            .ok_or_else(|| invalid(format!("{c:?} is not a letter")))?;
        if seen[letter.index()] {
            return Err(invalid(format!("{letter} appears more than once")));
        }
        seen[letter.index()] = true;
        *slot = letter;
    }

    Ok(letters)
}

/// Catalogue rotor identifiers.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorId {
    /// Rotor I.
    I,
    /// Rotor II.
    II,
    /// Rotor III.
    III,
    /// Rotor IV.
    IV,
    /// Rotor V.
    V,
}

impl RotorId {
    /// Every catalogue rotor.
    pub const ALL: [Self; 5] = [Self::I, Self::II, Self::III, Self::IV, Self::V];

    /// Wiring table for this identifier.
    pub fn rotor(self) -> &'static Rotor {
        match self {
            Self::I => &ROTOR_I,
            Self::II => &ROTOR_II,
            Self::III => &ROTOR_III,
            Self::IV => &ROTOR_IV,
            Self::V => &ROTOR_V,
        }
    }
}

impl FromStr for RotorId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "I" => Ok(Self::I),
            "II" => Ok(Self::II),
            "III" => Ok(Self::III),
            "IV" => Ok(Self::IV),
            "V" => Ok(Self::V),
            _ => Err(ConfigError::UnknownRotor { name: s.to_string() }),
        }
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rotor().name())
    }
}

/// Catalogue reflector identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorId {
    /// Reflector B.
    B,
    /// Reflector C.
    C,
}

impl ReflectorId {
    /// Every catalogue reflector.
    pub const ALL: [Self; 2] = [Self::B, Self::C];

    /// Wiring table for this identifier.
    pub fn reflector(self) -> &'static Rotor {
        match self {
            Self::B => &REFLECTOR_B,
            Self::C => &REFLECTOR_C,
        }
    }
}

impl FromStr for ReflectorId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(ConfigError::UnknownReflector { name: s.to_string() }),
        }
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reflector().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn all_tables() -> Vec<&'static Rotor> {
        RotorId::ALL
            .iter()
            .map(|id| id.rotor())
            .chain(ReflectorId::ALL.iter().map(|id| id.reflector()))
            .collect()
    }

    #[test]
    fn every_table_is_a_permutation() {
        for table in all_tables() {
            let mut outputs: Vec<Letter> = Letter::ALL.iter().map(|&l| table.forward(l)).collect();
            outputs.sort();
            assert_eq!(outputs, Letter::ALL.to_vec(), "{table} is not a bijection");
        }
    }

    #[test]
    fn inverse_undoes_forward() {
        for table in all_tables() {
            for &contact in &Letter::ALL {
                assert_eq!(table.inverse(table.forward(contact)), contact);
            }
        }
    }

    #[test]
    fn reflectors_are_fixed_point_free_involutions() {
        for id in ReflectorId::ALL {
            let reflector = id.reflector();
            assert!(reflector.is_reflector());
            for &l in &Letter::ALL {
                let reflected = reflector.forward(l);
                assert_ne!(reflected, l);
                assert_eq!(reflector.forward(reflected), l);
            }
        }
    }

    #[test]
    fn catalogue_notches() {
        let notches: String =
            RotorId::ALL.iter().filter_map(|id| id.rotor().notch()).map(Letter::to_char).collect();
        assert_eq!(notches, "RFWKA");
        assert_eq!(REFLECTOR_B.notch(), None);
    }

    #[test]
    fn reflector_b_maps_a_to_y() {
        assert_eq!(REFLECTOR_B.forward(Letter::A), letter('Y'));
    }

    #[test]
    fn rotor_iv_has_full_wiring() {
        assert_eq!(ROTOR_IV.wiring(), "ESOVPZJAYQUIRHXLNFTGKDCMWB");
        assert_eq!(ROTOR_IV.forward(letter('Z')), letter('B'));
    }

    #[test]
    fn parse_identifiers() {
        assert_eq!("iii".parse::<RotorId>().unwrap(), RotorId::III);
        assert_eq!("V".parse::<RotorId>().unwrap(), RotorId::V);
        assert!(matches!("VI".parse::<RotorId>(), Err(ConfigError::UnknownRotor { .. })));
        assert_eq!("c".parse::<ReflectorId>().unwrap(), ReflectorId::C);
        assert!(matches!("A".parse::<ReflectorId>(), Err(ConfigError::UnknownReflector { .. })));
        assert_eq!(RotorId::IV.to_string(), "IV");
    }

    #[test]
    fn try_new_accepts_catalogue_wiring() {
        let rotor = Rotor::try_new("custom", "ekmflgdqvzntowyhxuspaibrcj", 'q').unwrap();
        assert_eq!(rotor.wiring(), ROTOR_I.wiring());
        assert_eq!(rotor.notch(), Some(letter('Q')));
        assert_eq!(rotor.name(), "custom");
    }

    #[test]
    fn try_new_rejects_bad_wiring() {
        let short = Rotor::try_new("short", "ABC", 'A');
        assert!(matches!(short, Err(ConfigError::InvalidWiring { .. })));

        let repeated = Rotor::try_new("repeated", "AACDEFGHIJKLMNOPQRSTUVWXYZ", 'A');
        assert!(matches!(repeated, Err(ConfigError::InvalidWiring { .. })));

        let digits = Rotor::try_new("digits", "0BCDEFGHIJKLMNOPQRSTUVWXYZ", 'A');
        assert!(matches!(digits, Err(ConfigError::InvalidWiring { .. })));

        let notch = Rotor::try_new("notch", "ABCDEFGHIJKLMNOPQRSTUVWXYZ", '!');
        assert!(matches!(notch, Err(ConfigError::InvalidNotch { .. })));
    }

    #[test]
    fn try_reflector_validates_involution() {
        let b = Rotor::try_reflector("B", &REFLECTOR_B.wiring()).unwrap();
        assert_eq!(b, REFLECTOR_B);

        // Rotor I is a permutation but not reciprocal
        let rotor_wiring = ROTOR_I.wiring();
        assert!(matches!(
            Rotor::try_reflector("I", &rotor_wiring),
            Err(ConfigError::NotAReflector { .. })
        ));

        // Identity has fixed points
        assert!(matches!(
            Rotor::try_reflector("id", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(ConfigError::NotAReflector { .. })
        ));
    }
}
