//! Immutable rotor and reflector reference data.
//!
//! Holds the fixed set of eight rotor wirings with their notch positions and
//! the single reflector wiring, all taken from the historical commercial
//! machine. The tables are permutations of the 26-letter alphabet stored in
//! index form (`wiring[i]` is the output *index* for input index `i`) and are
//! built at compile time, so every machine instance shares the same
//! `&'static` data and no letter↔index parsing happens on the cipher path.

use crate::error::{Result, RotorCipherError};

/// Number of symbols in the cipher alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Number of rotors in the catalog.
pub const NUM_ROTORS: usize = 8;

/// Immutable description of one rotor: its wiring permutation, the
/// precomputed inverse permutation, and the notch positions at which the
/// next rotor in the stack is forced to advance.
///
/// Single-notch rotors repeat the notch value, so `notches` is always a
/// two-entry table and notch membership is a plain two-way comparison.
#[derive(Debug)]
pub struct RotorSpec {
    id: u8,
    wiring: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
    notches: [u8; 2],
}

impl RotorSpec {
    /// Returns the rotor's catalog id (1..=8).
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Forward wiring: output index for input index `i`.
    pub(crate) fn forward(&self, i: u8) -> u8 {
        self.wiring[i as usize]
    }

    /// Inverse wiring: the input index that the forward wiring maps to `i`.
    pub(crate) fn backward(&self, i: u8) -> u8 {
        self.inverse[i as usize]
    }

    /// Returns true if `position` is one of this rotor's notch positions.
    pub fn is_notch(&self, position: u8) -> bool {
        position == self.notches[0] || position == self.notches[1]
    }

    /// The notch positions (duplicated for single-notch rotors).
    pub fn notches(&self) -> [u8; 2] {
        self.notches
    }
}

/// Parses a letter-form wiring string (e.g. `b"EKMF..."`) into an index-form
/// permutation table.
const fn parse_wiring(letters: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut table = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        table[i] = letters[i] - b'A';
        i += 1;
    }
    table
}

/// Inverts an index-form permutation table.
const fn invert(table: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut inverse = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

/// Builds one catalog entry at compile time.
const fn spec(id: u8, letters: &[u8; ALPHABET_LEN], notches: [u8; 2]) -> RotorSpec {
    let wiring = parse_wiring(letters);
    RotorSpec {
        id,
        wiring,
        inverse: invert(&wiring),
        notches,
    }
}

/// The eight rotor wirings of the commercial machine. Rotors 6, 7 and 8
/// carry two notches; the rest repeat their single notch.
static ROTOR_CATALOG: [RotorSpec; NUM_ROTORS] = [
    spec(1, b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", [16, 16]),
    spec(2, b"AJDKSIRUXBLHWTMCQGZNPYFVOE", [3, 3]),
    spec(3, b"BDFHJLCPRTXVZNYEIWGAKMUSQO", [20, 20]),
    spec(4, b"ESOVPZJAYQUIRHXLNFTGKDCMWB", [8, 8]),
    spec(5, b"VZBRGITYUPSDNHLXAWMJQOFECK", [24, 24]),
    spec(6, b"JPGVOUMFYQBENHZRDKASXLICTW", [11, 24]),
    spec(7, b"NZJHGRCXMYSWBOUFAIVLPEKQDT", [11, 24]),
    spec(8, b"FKQHTLXOCBJSPDZRAMEWNIUYGV", [11, 24]),
];

/// The reflector wiring in index form: an involution with no fixed points,
/// so the reflector is its own inverse and never maps a letter to itself.
static REFLECTOR: [u8; ALPHABET_LEN] = parse_wiring(b"EJMZALYXVBWFCRQUONTSPIKHGD");

/// Looks up a rotor spec by catalog id.
///
/// # Errors
/// Returns [`RotorCipherError::UnknownRotor`] if `id` is not in 1..=8.
pub fn rotor_spec(id: u8) -> Result<&'static RotorSpec> {
    if id == 0 || id as usize > NUM_ROTORS {
        return Err(RotorCipherError::UnknownRotor(id));
    }
    Ok(&ROTOR_CATALOG[id as usize - 1])
}

/// The spec loaded into all three slots of a freshly built machine.
pub(crate) fn default_spec() -> &'static RotorSpec {
    &ROTOR_CATALOG[0]
}

/// Returns the reflector wiring table.
pub fn reflector() -> &'static [u8; ALPHABET_LEN] {
    &REFLECTOR
}

/// Converts an ASCII uppercase letter to its alphabet index.
pub(crate) fn letter_to_index(letter: char) -> u8 {
    letter as u8 - b'A'
}

/// Converts an alphabet index back to an ASCII uppercase letter.
pub(crate) fn index_to_letter(index: u8) -> char {
    (b'A' + index) as char
}
