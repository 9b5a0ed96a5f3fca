//! Rotor stepping state machine.
//!
//! Before every letter the rotors advance:
//!
//! ```text
//! pending double step?  ──yes──▶ left += 1, middle += 1, clear flag
//!          │
//!          ▼
//!     right += 1
//!          │
//! right on its notch?   ──yes──▶ middle += 1
//!                                    │
//!                       middle on its notch? ──yes──▶ set pending flag
//! ```
//!
//! The pending flag reproduces the double-step anomaly: when the middle rotor
//! is carried onto its own notch, the next key press advances it again along
//! with the left rotor.

use crate::{letter::Letter, rotor::Rotor};

/// Index of the leftmost, slowest rotor.
pub const LEFT: usize = 0;
/// Index of the middle rotor.
pub const MIDDLE: usize = 1;
/// Index of the rightmost, fastest rotor.
pub const RIGHT: usize = 2;

/// Mutable rotor state for one encryption run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MachineState {
    positions: [Letter; 3],
    pending_double_step: bool,
}

/// Which rotors moved during a single step.
///
/// The right rotor always moves and is not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Movement {
    /// Left rotor advanced (only via a double step).
    pub left: bool,
    /// Middle rotor advanced (double step or carry from the right rotor).
    pub middle: bool,
    /// The pending double step fired on this step.
    pub double_step: bool,
    /// The middle rotor landed on its notch and a double step is now pending.
    pub double_step_armed: bool,
}

impl MachineState {
    /// State at the given starting positions, left to right.
    pub fn new(positions: [Letter; 3]) -> Self {
        Self { positions, pending_double_step: false }
    }

    /// Current positions, left to right.
    pub fn positions(&self) -> [Letter; 3] {
        self.positions
    }

    /// Whether the next step will advance the left and middle rotors.
    pub fn pending_double_step(&self) -> bool {
        self.pending_double_step
    }

    /// Advance the rotors by one key press.
    ///
    /// `rotors` supply the notch letters, left to right.
    pub fn step(&mut self, rotors: &[&Rotor; 3]) -> Movement {
        let mut movement = Movement::default();

        if self.pending_double_step {
            self.advance(LEFT);
            self.advance(MIDDLE);
            self.pending_double_step = false;
            movement.left = true;
            movement.middle = true;
            movement.double_step = true;
        }

        self.advance(RIGHT);

        if Some(self.positions[RIGHT]) == rotors[RIGHT].notch() {
            self.advance(MIDDLE);
            movement.middle = true;

            if Some(self.positions[MIDDLE]) == rotors[MIDDLE].notch() {
                self.pending_double_step = true;
                movement.double_step_armed = true;
            }
        }

        movement
    }

    fn advance(&mut self, rotor: usize) {
        self.positions[rotor] = self.positions[rotor].next();
    }
}
