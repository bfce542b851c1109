//! RotorBank: the three active rotors and the notch-driven stepping rule.
//!
//! The bank holds the right (fast), middle and left (slow) rotors. The
//! signal enters at the right rotor, so public triples are ordered
//! `[right, middle, left]` — the first element is the first wheel the
//! signal hits and the one that steps on every letter.
//!
//! Stepping fires exactly once per processed letter, after that letter's
//! substitution, so the position used to cipher a symbol is the position
//! before the symbol's own step.

use crate::catalog::RotorSpec;
use crate::rotor::Rotor;

/// Three rotors plus the single state-transition rule of the machine.
#[derive(Debug, Clone)]
pub(crate) struct RotorBank {
    right: Rotor,
    middle: Rotor,
    left: Rotor,
}

impl RotorBank {
    /// Creates a bank from `[right, middle, left]` specs, all at position 0.
    pub(crate) fn new(specs: [&'static RotorSpec; 3]) -> Self {
        RotorBank {
            right: Rotor::new(specs[0]),
            middle: Rotor::new(specs[1]),
            left: Rotor::new(specs[2]),
        }
    }

    /// Swaps in a new rotor selection, resetting all positions to 0.
    pub(crate) fn load(&mut self, specs: [&'static RotorSpec; 3]) {
        self.right.load(specs[0]);
        self.middle.load(specs[1]);
        self.left.load(specs[2]);
    }

    /// Sets all three positions (`[right, middle, left]`), wrapping mod 26.
    pub(crate) fn set_positions(&mut self, positions: [i32; 3]) {
        self.right.set_position(positions[0]);
        self.middle.set_position(positions[1]);
        self.left.set_position(positions[2]);
    }

    /// Current positions as `[right, middle, left]`.
    pub(crate) fn positions(&self) -> [u8; 3] {
        [
            self.right.position(),
            self.middle.position(),
            self.left.position(),
        ]
    }

    /// Inbound encrypt leg: right, middle, left forward substitution.
    pub(crate) fn forward_inbound(&self, index: u8) -> u8 {
        self.left
            .substitute(self.middle.substitute(self.right.substitute(index)))
    }

    /// Return encrypt leg after the reflector: left, middle, right, still
    /// using the forward formula. The palindromic path composed with the
    /// reflector involution is what the inverse path unwinds; substituting a
    /// table-inverse here would break the encrypt/decrypt symmetry.
    pub(crate) fn forward_return(&self, index: u8) -> u8 {
        self.right
            .substitute(self.middle.substitute(self.left.substitute(index)))
    }

    /// Inbound decrypt leg: right, middle, left inverse substitution.
    pub(crate) fn inverse_inbound(&self, index: u8) -> u8 {
        self.left.substitute_inverse(
            self.middle
                .substitute_inverse(self.right.substitute_inverse(index)),
        )
    }

    /// Return decrypt leg: left, middle, right inverse substitution.
    pub(crate) fn inverse_return(&self, index: u8) -> u8 {
        self.right.substitute_inverse(
            self.middle
                .substitute_inverse(self.left.substitute_inverse(index)),
        )
    }

    /// Advances the rotor system one step.
    ///
    /// The right rotor always moves. If it sat at one of its notches, the
    /// carry propagates: the middle rotor's current position is tested
    /// against the middle rotor's own notch table — a hit advances the
    /// middle and left rotors together (the double-step), a miss advances
    /// the middle rotor alone.
    pub(crate) fn step(&mut self) {
        if self.right.at_notch() {
            self.right.advance();
            if self.middle.at_notch() {
                self.middle.advance();
                self.left.advance();
            } else {
                self.middle.advance();
            }
        } else {
            self.right.advance();
        }
    }
}
