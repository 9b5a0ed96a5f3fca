//! Enigma machine core.
//!
//! Emulates the signal path and rotor stepping of a three-rotor Enigma with a
//! reflector and a steckerboard. The cipher is reciprocal: enciphering the
//! ciphertext with the same starting configuration yields the plaintext.
//!
//! ## Architecture
//!
//! ```text
//! enigma-core
//!   ├─ Letter          (alphabet index arithmetic)
//!   ├─ Rotor           (immutable wiring tables + catalogue)
//!   ├─ Plugboard       (validated letter swaps)
//!   ├─ MachineState    (rotor positions + pending double step)
//!   ├─ MachineConfig   (resolved, validated input)
//!   └─ Enigma          (stepping + signal path per letter)
//! ```
//!
//! All validation happens while building the configuration. Encoding itself
//! cannot fail.
//!
//! # Example
//!
//! ```
//! use enigma_core::{MachineConfig, encode};
//!
//! let config = MachineConfig::default();
//! let cipher = encode(&config, "enigma");
//! assert_eq!(cipher, "FQGAHW");
//! assert_eq!(encode(&config, &cipher), "ENIGMA");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod letter;
pub mod machine;
pub mod plugboard;
pub mod rotor;
pub mod stepping;

pub use config::MachineConfig;
pub use error::ConfigError;
pub use letter::{ALPHABET_LEN, Letter};
pub use machine::{Enigma, encode, forward_pass, inverse_pass, reflect};
pub use plugboard::{MAX_PLUGS, Plug, Plugboard};
pub use rotor::{
    REFLECTOR_B, REFLECTOR_C, ROTOR_I, ROTOR_II, ROTOR_III, ROTOR_IV, ROTOR_V, ReflectorId, Rotor,
    RotorId,
};
pub use stepping::{MachineState, Movement};
