//! Property-based tests for the cipher engine.
//!
//! Configurations are drawn from the full catalogue: any wheel order, any
//! reflector, any starting positions and up to ten plugs.

use enigma_core::{
    Enigma, Letter, MAX_PLUGS, MachineConfig, Plug, Plugboard, ReflectorId, RotorId, encode,
};
use proptest::prelude::*;

fn arb_plugboard() -> impl Strategy<Value = Plugboard> {
    (Just(Letter::ALL.to_vec()).prop_shuffle(), 0..=MAX_PLUGS).prop_map(|(letters, count)| {
        let plugs =
            letters.chunks(2).take(count).map(|pair| Plug::new(pair[0], pair[1]).unwrap());
        Plugboard::new(plugs).unwrap()
    })
}

fn arb_config() -> impl Strategy<Value = MachineConfig<'static>> {
    let rotors = proptest::array::uniform3(proptest::sample::select(RotorId::ALL.to_vec()));
    let reflector = proptest::sample::select(ReflectorId::ALL.to_vec());
    let positions = proptest::array::uniform3(proptest::sample::select(Letter::ALL.to_vec()));

    (rotors, reflector, positions, arb_plugboard()).prop_map(
        |(rotors, reflector, positions, plugboard)| {
            MachineConfig::new(rotors.map(RotorId::rotor), reflector.reflector())
                .with_positions(positions)
                .with_plugboard(plugboard)
        },
    )
}

proptest! {
    #[test]
    fn prop_encoding_is_reciprocal(config in arb_config(), message in "[A-Z]{0,200}") {
        let cipher = encode(&config, &message);
        prop_assert_eq!(encode(&config, &cipher), message);
    }

    #[test]
    fn prop_length_counts_letters_and_spaces(config in arb_config(), message in "[ -~]{0,120}") {
        let keyed = message.chars().filter(|c| c.is_ascii_alphabetic() || *c == ' ').count();
        prop_assert_eq!(encode(&config, &message).len(), keyed);
    }

    #[test]
    fn prop_non_letters_are_transparent(config in arb_config(), message in "[ -~]{0,120}") {
        let keyed: String = message
            .chars()
            .filter_map(|c| match c {
                ' ' => Some('X'),
                c if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
                _ => None,
            })
            .collect();
        prop_assert_eq!(encode(&config, &message), encode(&config, &keyed));
    }

    #[test]
    fn prop_no_letter_maps_to_itself(config in arb_config(), message in "[A-Z]{1,200}") {
        let cipher = encode(&config, &message);
        for (plain, enciphered) in message.chars().zip(cipher.chars()) {
            prop_assert_ne!(plain, enciphered);
        }
    }

    #[test]
    fn prop_each_key_press_steps_once(config in arb_config(), message in "[A-Z]{0,100}") {
        let mut machine = Enigma::new(&config);
        let mut reference = Enigma::new(&config);
        machine.encode(&message);
        for c in message.chars() {
            reference.encode_letter(Letter::from_char(c).unwrap());
        }
        prop_assert_eq!(machine.state(), reference.state());
    }
}
