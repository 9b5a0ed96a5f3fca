//! Steckerboard.
//!
//! Up to [`MAX_PLUGS`] cables each swap a pair of letters before the signal
//! enters the rotors and again after it leaves them.

use crate::{
    error::ConfigError,
    letter::{ALPHABET_LEN, Letter},
};

/// Number of cables supplied with the machine.
pub const MAX_PLUGS: usize = 10;

/// One cable connecting two distinct letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plug {
    a: Letter,
    b: Letter,
}

impl Plug {
    /// Connect `a` and `b`.
    pub fn new(a: Letter, b: Letter) -> Result<Self, ConfigError> {
        if a == b {
            return Err(ConfigError::SelfPlug { letter: a.to_char() });
        }
        Ok(Self { a, b })
    }

    /// Both ends of the cable, in the order given.
    pub fn ends(&self) -> (Letter, Letter) {
        (self.a, self.b)
    }
}

/// A validated set of plugs.
///
/// Every letter is used by at most one plug, so the substitution is a
/// symmetric involution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    plugs: Vec<Plug>,
    wiring: [Letter; ALPHABET_LEN],
}

impl Plugboard {
    /// Board with no cables. Every letter maps to itself.
    pub fn empty() -> Self {
        Self { plugs: Vec::new(), wiring: Letter::ALL }
    }

    /// Build a board from `plugs`.
    ///
    /// Rejects more than [`MAX_PLUGS`] cables and any letter that appears in
    /// two plugs.
    pub fn new(plugs: impl IntoIterator<Item = Plug>) -> Result<Self, ConfigError> {
        let plugs: Vec<Plug> = plugs.into_iter().collect();
        if plugs.len() > MAX_PLUGS {
            return Err(ConfigError::TooManyPlugs { count: plugs.len(), max: MAX_PLUGS });
        }

        let mut wiring = Letter::ALL;
        let mut used = [false; ALPHABET_LEN];
        for plug in &plugs {
            for end in [plug.a, plug.b] {
                if used[end.index()] {
                    return Err(ConfigError::DuplicatePlugLetter { letter: end.to_char() });
                }
                used[end.index()] = true;
            }
            wiring[plug.a.index()] = plug.b;
            wiring[plug.b.index()] = plug.a;
        }

        Ok(Self { plugs, wiring })
    }

    /// Swap `letter` with its partner, or return it unchanged when unplugged.
    pub fn substitute(&self, letter: Letter) -> Letter {
        self.wiring[letter.index()]
    }

    /// Plugs in insertion order.
    pub fn plugs(&self) -> &[Plug] {
        &self.plugs
    }

    /// Number of cables in use.
    pub fn len(&self) -> usize {
        self.plugs.len()
    }

    /// Whether no cables are in use.
    pub fn is_empty(&self) -> bool {
        self.plugs.is_empty()
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}
