//! Cipher engine.
//!
//! ## Signal path
//!
//! ```text
//! key ─▶ plugboard ─▶ rotor 2 ─▶ rotor 1 ─▶ rotor 0 ─┐
//!                                                    reflector
//! lamp ◀─ plugboard ◀─ rotor 2 ◀─ rotor 1 ◀─ rotor 0 ◀┘
//! ```
//!
//! The rotors step before every letter. Because the reflector is an
//! involution without fixed points, the whole path is its own inverse for a
//! given rotor position: enciphering the ciphertext from the same starting
//! positions recovers the plaintext.

use tracing::debug;

use crate::{
    config::MachineConfig,
    letter::Letter,
    rotor::Rotor,
    stepping::{LEFT, MachineState, RIGHT},
};

/// Spaces are keyed as this letter.
const SPACE_SUBSTITUTE: Letter = match Letter::from_ascii(b'X') {
    Some(letter) => letter,
    None => Letter::A,
};

/// Pass `letter` through the rotors right to left.
///
/// Each rotor sees the signal shifted by its position and shifts the result
/// back, so every stage hands an absolute letter to the next.
pub fn forward_pass(rotors: &[&Rotor; 3], positions: [Letter; 3], letter: Letter) -> Letter {
    (LEFT..=RIGHT).rev().fold(letter, |signal, i| {
        let offset = positions[i];
        rotors[i].forward(signal.offset(offset)).unoffset(offset)
    })
}

/// Bounce `letter` off the reflector. The reflector never rotates.
pub fn reflect(reflector: &Rotor, letter: Letter) -> Letter {
    reflector.forward(letter)
}

/// Pass `letter` back through the rotors left to right.
pub fn inverse_pass(rotors: &[&Rotor; 3], positions: [Letter; 3], letter: Letter) -> Letter {
    (LEFT..=RIGHT).fold(letter, |signal, i| {
        let offset = positions[i];
        rotors[i].inverse(signal.offset(offset)).unoffset(offset)
    })
}

/// Encipher `message` from the configuration's starting positions.
///
/// Each call uses a fresh [`MachineState`], so calls never affect each other.
pub fn encode(config: &MachineConfig<'_>, message: &str) -> String {
    Enigma::new(config).encode(message)
}

/// A machine keyed with one configuration.
///
/// Owns the rotor state for a single run. The configuration and its wiring
/// tables are borrowed and may be shared by any number of machines.
#[derive(Debug, Clone)]
pub struct Enigma<'c, 'a> {
    config: &'c MachineConfig<'a>,
    state: MachineState,
}

impl<'c, 'a> Enigma<'c, 'a> {
    /// Machine at the configuration's starting positions.
    pub fn new(config: &'c MachineConfig<'a>) -> Self {
        Self { config, state: MachineState::new(config.positions) }
    }

    /// Current rotor state.
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Return the rotors to the starting positions and clear any pending
    /// double step.
    pub fn reset(&mut self) {
        self.state = MachineState::new(self.config.positions);
    }

    /// Press one key: step the rotors, then run the signal path.
    pub fn encode_letter(&mut self, input: Letter) -> Letter {
        let config = self.config;
        let movement = self.state.step(&config.rotors);
        let positions = self.state.positions();

        let plugged = config.plugboard.substitute(input);
        let forward = forward_pass(&config.rotors, positions, plugged);
        let reflected = reflect(config.reflector, forward);
        let inverse = inverse_pass(&config.rotors, positions, reflected);
        let output = config.plugboard.substitute(inverse);

        if config.trace {
            debug!(
                positions = %positions.iter().map(ToString::to_string).collect::<String>(),
                double_step = movement.double_step,
                double_step_armed = movement.double_step_armed,
                %input,
                %plugged,
                %forward,
                %reflected,
                %inverse,
                %output,
                "key pressed"
            );
        }

        output
    }

    /// Encipher a message.
    ///
    /// Each character is upper-cased on its own and spaces become `X`.
    /// Anything else outside `A`-`Z`, including characters whose uppercase
    /// form is more than one character (`ß`), is dropped without stepping the
    /// rotors.
    pub fn encode(&mut self, message: &str) -> String {
        if self.config.trace {
            debug!(len = message.len(), "encoding message");
        }

        message
            .chars()
            .filter_map(keyboard_letter)
            .map(|letter| self.encode_letter(letter).to_char())
            .collect()
    }
}

fn keyboard_letter(c: char) -> Option<Letter> {
    if c == ' ' {
        return Some(SPACE_SUBSTITUTE);
    }

    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => Letter::from_char(single),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotor::{REFLECTOR_B, ROTOR_I, ROTOR_II, ROTOR_III};

    static STANDARD: [&Rotor; 3] = [&ROTOR_I, &ROTOR_II, &ROTOR_III];

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn positions(s: &str) -> [Letter; 3] {
        let letters: Vec<Letter> = s.chars().map(letter).collect();
        [letters[0], letters[1], letters[2]]
    }

    fn forward(start: &str, input: char) -> char {
        forward_pass(&STANDARD, positions(start), letter(input)).to_char()
    }

    fn inverse(start: &str, input: char) -> char {
        inverse_pass(&STANDARD, positions(start), letter(input)).to_char()
    }

    #[test]
    fn forward_pass_at_start_positions() {
        assert_eq!(forward("AAA", 'A'), 'Z');
        assert_eq!(forward("AAA", 'B'), 'N');
    }

    #[test]
    fn forward_pass_applies_rotor_offset() {
        assert_eq!(forward("AAB", 'A'), 'F');
        assert_eq!(forward("AAG", 'A'), 'G');
    }

    #[test]
    fn inverse_pass_at_start_positions() {
        assert_eq!(inverse("AAA", 'A'), 'D');
    }

    #[test]
    fn inverse_pass_applies_rotor_offset() {
        assert_eq!(inverse("AAB", 'A'), 'P');
        assert_eq!(inverse("AAG", 'A'), 'H');
        assert_eq!(inverse("AAG", 'L'), 'W');
    }

    #[test]
    fn inverse_pass_undoes_forward_pass() {
        for start in ["AAA", "QEV", "ZZZ", "MCK"] {
            for &l in &Letter::ALL {
                let there = forward_pass(&STANDARD, positions(start), l);
                assert_eq!(inverse_pass(&STANDARD, positions(start), there), l);
            }
        }
    }

    #[test]
    fn reflector_ignores_rotor_positions() {
        assert_eq!(reflect(&REFLECTOR_B, Letter::A), letter('Y'));
    }

    #[test]
    fn encode_letter_steps_before_enciphering() {
        let config = MachineConfig::default();
        let mut machine = Enigma::new(&config);

        assert_eq!(machine.encode_letter(Letter::A), letter('B'));
        assert_eq!(machine.state().positions(), positions("AAB"));
    }

    #[test]
    fn non_letters_do_not_step() {
        let config = MachineConfig::default();
        let mut machine = Enigma::new(&config);

        assert_eq!(machine.encode("1234,.!?\t\n"), "");
        assert_eq!(machine.state().positions(), positions("AAA"));
    }

    #[test]
    fn expanding_uppercase_is_dropped_without_stepping() {
        let config = MachineConfig::default();
        let mut machine = Enigma::new(&config);

        assert_eq!(machine.encode("ß\u{fb01}"), "");
        assert_eq!(machine.state().positions(), positions("AAA"));
    }

    #[test]
    fn keyboard_letter_maps_one_char_to_one_key() {
        assert_eq!(keyboard_letter('a'), Some(letter('A')));
        assert_eq!(keyboard_letter(' '), Some(letter('X')));
        assert_eq!(keyboard_letter('\u{131}'), Some(letter('I')));
        assert_eq!(keyboard_letter('ß'), None);
        assert_eq!(keyboard_letter('é'), None);
    }

    #[test]
    fn reset_restores_start_positions() {
        let config = MachineConfig::default().with_positions(positions("AEV"));
        let mut machine = Enigma::new(&config);

        let first = machine.encode("HELLO");
        assert_ne!(machine.state().positions(), positions("AEV"));

        machine.reset();
        assert_eq!(machine.state(), &MachineState::new(positions("AEV")));
        assert_eq!(machine.encode("HELLO"), first);
    }

    #[test]
    fn trace_does_not_change_output() {
        let plain = MachineConfig::default();
        let traced = MachineConfig::default().with_trace(true);
        assert_eq!(encode(&plain, "enigma"), encode(&traced, "enigma"));
    }

    #[test]
    fn no_letter_encrypts_to_itself() {
        let config = MachineConfig::default();
        let plain: String = "A".repeat(500);
        let cipher = encode(&config, &plain);
        assert_eq!(cipher.len(), 500);
        assert!(!cipher.contains('A'));
    }
}
