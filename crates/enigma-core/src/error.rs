//! Configuration error types.
//!
//! These are only produced while building rotors, plugboards and machine
//! configurations. Once a configuration exists the engine cannot fail.

use thiserror::Error;

/// Errors from constructing machine components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value is not a single letter `A`-`Z`.
    #[error("invalid letter: {value:?}")]
    InvalidLetter {
        /// The rejected input.
        value: String,
    },

    /// Wiring table is not a permutation of the alphabet.
    #[error("wiring for {name} is not a permutation of A-Z: {reason}")]
    InvalidWiring {
        /// Name of the rotor or reflector.
        name: String,
        /// What is wrong with the table.
        reason: String,
    },

    /// Reflector wiring is not a fixed-point-free involution.
    #[error("{name} cannot be used as a reflector: {reason}")]
    NotAReflector {
        /// Name of the reflector.
        name: String,
        /// Which reflector property is violated.
        reason: String,
    },

    /// Notch is not a letter.
    #[error("invalid notch {notch:?} for rotor {name}")]
    InvalidNotch {
        /// Name of the rotor.
        name: String,
        /// The rejected notch.
        notch: char,
    },

    /// Plug connects a letter to itself.
    #[error("plug connects {letter} to itself")]
    SelfPlug {
        /// The letter on both ends.
        letter: char,
    },

    /// Letter appears in more than one plug.
    #[error("letter {letter} is used by more than one plug")]
    DuplicatePlugLetter {
        /// The letter that was reused.
        letter: char,
    },

    /// More plugs than the board has cables for.
    #[error("too many plugs: {count} (max {max})")]
    TooManyPlugs {
        /// Number of plugs requested.
        count: usize,
        /// Maximum supported.
        max: usize,
    },

    /// Rotor identifier does not name a catalogue rotor.
    #[error("rotor {name} does not exist (available: I, II, III, IV, V)")]
    UnknownRotor {
        /// The rejected identifier.
        name: String,
    },

    /// Reflector identifier does not name a catalogue reflector.
    #[error("reflector {name} does not exist (available: B, C)")]
    UnknownReflector {
        /// The rejected identifier.
        name: String,
    },
}
