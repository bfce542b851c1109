//! Rotor: the atomic cipher unit, a fixed wiring plus a rotational position.
//!
//! A rotor substitutes alphabet indices through its wiring permutation,
//! offset by the current angular position. The forward formula is
//! `wiring[(i + position) mod 26]`; the backward (decrypt) formula is the
//! exact inverse, `(inverse[i] - position) mod 26`. Both directions must stay
//! algebraic mirrors of each other or the encrypt/decrypt symmetry of the
//! whole machine silently breaks.

use crate::catalog::{RotorSpec, ALPHABET_LEN};

/// One active rotor: a reference to its immutable catalog spec and the
/// current position (0..=25).
#[derive(Debug, Clone)]
pub(crate) struct Rotor {
    spec: &'static RotorSpec,
    position: u8,
}

impl Rotor {
    /// Creates a rotor at position 0.
    pub(crate) fn new(spec: &'static RotorSpec) -> Self {
        Rotor { spec, position: 0 }
    }

    /// Replaces the wiring spec, keeping the rotor in place at position 0.
    pub(crate) fn load(&mut self, spec: &'static RotorSpec) {
        self.spec = spec;
        self.position = 0;
    }

    /// Current angular position.
    pub(crate) fn position(&self) -> u8 {
        self.position
    }

    /// Sets the position, wrapping modulo 26 (54 means two full revolutions
    /// plus two steps, so it lands on 2; negative values wrap the other way).
    pub(crate) fn set_position(&mut self, position: i32) {
        self.position = position.rem_euclid(ALPHABET_LEN as i32) as u8;
    }

    /// Advances the rotor one step.
    pub(crate) fn advance(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN as u8;
    }

    /// Returns true if the rotor currently sits at one of its notches.
    pub(crate) fn at_notch(&self) -> bool {
        self.spec.is_notch(self.position)
    }

    /// Forward substitution: `wiring[(i + position) mod 26]`.
    ///
    /// Used for both legs of the encrypt path (before and after the
    /// reflector), matching the machine's signal-path algebra.
    pub(crate) fn substitute(&self, index: u8) -> u8 {
        self.spec
            .forward((index + self.position) % ALPHABET_LEN as u8)
    }

    /// Backward substitution: `(inverse[i] - position) mod 26`.
    ///
    /// Inverts [`substitute`](Self::substitute) at the same position; used
    /// for both legs of the decrypt path.
    pub(crate) fn substitute_inverse(&self, index: u8) -> u8 {
        (self.spec.backward(index) + ALPHABET_LEN as u8 - self.position) % ALPHABET_LEN as u8
    }
}
