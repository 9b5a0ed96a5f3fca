//! Resolved machine configuration.

use crate::{
    letter::Letter,
    plugboard::Plugboard,
    rotor::{REFLECTOR_B, ROTOR_I, ROTOR_II, ROTOR_III, Rotor},
};

/// Everything the engine needs to encipher a message.
///
/// Built once per invocation from already-validated parts. The engine never
/// mutates it; rotor positions evolve in a separate
/// [`MachineState`](crate::MachineState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig<'a> {
    /// Rotors left to right (slow to fast).
    pub rotors: [&'a Rotor; 3],
    /// Reflector.
    pub reflector: &'a Rotor,
    /// Initial rotor positions, left to right.
    pub positions: [Letter; 3],
    /// Steckerboard.
    pub plugboard: Plugboard,
    /// Emit a per-letter trace through `tracing`.
    pub trace: bool,
}

impl<'a> MachineConfig<'a> {
    /// Configuration with the given wheel order, positions `A,A,A` and an
    /// empty plugboard.
    ///
    /// # Panics
    ///
    /// If a rotor has no notch or the reflector has one.
    pub fn new(rotors: [&'a Rotor; 3], reflector: &'a Rotor) -> Self {
        for rotor in rotors {
            assert!(!rotor.is_reflector(), "{rotor} is a reflector, not a rotor");
        }
        assert!(reflector.is_reflector(), "{reflector} is a rotor, not a reflector");

        Self {
            rotors,
            reflector,
            positions: [Letter::A; 3],
            plugboard: Plugboard::empty(),
            trace: false,
        }
    }

    /// Set the initial rotor positions, left to right.
    pub fn with_positions(mut self, positions: [Letter; 3]) -> Self {
        self.positions = positions;
        self
    }

    /// Set the steckerboard.
    pub fn with_plugboard(mut self, plugboard: Plugboard) -> Self {
        self.plugboard = plugboard;
        self
    }

    /// Enable or disable the per-letter trace.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

impl Default for MachineConfig<'static> {
    /// Rotors I, II, III with reflector B.
    fn default() -> Self {
        Self::new([&ROTOR_I, &ROTOR_II, &ROTOR_III], &REFLECTOR_B)
    }
}
