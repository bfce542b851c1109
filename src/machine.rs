//! RotorMachine: the cipher machine orchestrator.
//!
//! Composes plugboard → rotor stack (forward) → reflector → rotor stack
//! (backward) → plugboard into one letter transform, steps the rotor system
//! once per processed letter, and iterates messages symbol by symbol with an
//! optional fixed-width re-chunking of the ciphertext.
//!
//! Encryption runs every rotor pass with the forward formula, including the
//! return leg after the reflector; decryption runs the identical topology
//! with the inverse lookup at each rotor. Because the path is palindromic
//! and the reflector is an involution, the decrypt traversal unwinds the
//! encrypt traversal exactly, letter for letter, as long as both sides step
//! in lockstep.

use crate::catalog::{self, index_to_letter, letter_to_index, RotorSpec};
use crate::error::Result;
use crate::plugboard::Plugboard;
use crate::rotor_bank::RotorBank;

/// A stateful, reversible rotor cipher machine.
///
/// One instance owns its rotor positions and plugboard exclusively; each
/// logical session (one caller encoding one message) should use its own
/// instance, since position setters and stepping side effects are not atomic
/// with respect to each other.
///
/// # Examples
///
/// Encrypt and decrypt under matching state:
///
/// ```
/// use rotorcipher::RotorMachine;
///
/// let mut encoder = RotorMachine::new();
/// encoder.configure([2, 4, 6], [3, 21, 6], &["AB", "CT"], 0).unwrap();
///
/// let mut decoder = RotorMachine::new();
/// decoder.configure([2, 4, 6], [3, 21, 6], &["AB", "CT"], 0).unwrap();
///
/// let ciphertext = encoder.encrypt("HELLO WORLD", None, None).unwrap();
/// assert_eq!(decoder.decrypt(&ciphertext, None, None).unwrap(), "HELLO WORLD");
/// ```
///
/// The default machine (rotors 1, 1, 1 at positions 0, 0, 0, empty
/// plugboard) turns "A" into "S":
///
/// ```
/// use rotorcipher::RotorMachine;
///
/// let mut machine = RotorMachine::new();
/// assert_eq!(machine.encrypt("A", None, None).unwrap(), "S");
/// ```
#[derive(Debug, Clone)]
pub struct RotorMachine {
    bank: RotorBank,
    plugboard: Plugboard,
    chunk_width: usize,
    home_positions: [u8; 3],
}

impl Default for RotorMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RotorMachine {
    /// Creates a machine with the default configuration: rotors (1, 1, 1),
    /// all positions 0, an empty plugboard, and chunk width 0 (preserve the
    /// original message layout).
    pub fn new() -> Self {
        let spec = catalog::default_spec();
        RotorMachine {
            bank: RotorBank::new([spec, spec, spec]),
            plugboard: Plugboard::new(),
            chunk_width: 0,
            home_positions: [0; 3],
        }
    }

    /// Replaces the whole machine configuration.
    ///
    /// `rotors` and `positions` are ordered `[right, middle, left]`; the
    /// right rotor is the fast one the signal hits first. Position values
    /// wrap modulo 26. `pairs` replaces the plugboard wholesale.
    ///
    /// Validation happens before any mutation: an unknown rotor id or a
    /// malformed plugboard pair leaves the machine exactly as it was.
    ///
    /// # Parameters
    /// - `rotors`: catalog ids (1..=8) as `[right, middle, left]`.
    /// - `positions`: starting positions as `[right, middle, left]`.
    /// - `pairs`: plugboard pairs, e.g. `&["AB", "CT"]`.
    /// - `chunk_width`: 0 preserves the message layout; n > 0 re-chunks the
    ///   ciphertext into blocks of n non-space symbols.
    ///
    /// # Errors
    /// Returns [`UnknownRotor`](crate::RotorCipherError::UnknownRotor) or
    /// [`InvalidPlugPair`](crate::RotorCipherError::InvalidPlugPair).
    pub fn configure(
        &mut self,
        rotors: [u8; 3],
        positions: [i32; 3],
        pairs: &[&str],
        chunk_width: usize,
    ) -> Result<()> {
        let specs: [&'static RotorSpec; 3] = [
            catalog::rotor_spec(rotors[0])?,
            catalog::rotor_spec(rotors[1])?,
            catalog::rotor_spec(rotors[2])?,
        ];
        let mut plugboard = Plugboard::new();
        for pair in pairs {
            plugboard.add_pair(pair)?;
        }

        self.bank.load(specs);
        self.bank.set_positions(positions);
        self.home_positions = self.bank.positions();
        self.plugboard = plugboard;
        self.chunk_width = chunk_width;
        Ok(())
    }

    /// Encrypts a message.
    ///
    /// Letters are substituted (always to upper case) and advance the rotor
    /// system once each; every other symbol passes through unchanged without
    /// stepping. With chunk width 0 the output mirrors the input layout
    /// one-for-one. With chunk width n, input spaces are dropped and a
    /// single space separates each run of n output symbols.
    ///
    /// # Parameters
    /// - `message`: the plaintext.
    /// - `position`: optional `[right, middle, left]` override applied first.
    /// - `pairs`: optional plugboard override: `None` keeps the current
    ///   pairs, `Some(&[])` clears the board, anything else adds pairs on
    ///   top of the existing ones.
    ///
    /// # Errors
    /// Returns [`InvalidPlugPair`](crate::RotorCipherError::InvalidPlugPair)
    /// if a pair override is malformed; the machine state is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcipher::RotorMachine;
    ///
    /// let mut machine = RotorMachine::new();
    /// assert_eq!(machine.encrypt("AAA", None, None).unwrap(), "SRQ");
    /// ```
    pub fn encrypt(
        &mut self,
        message: &str,
        position: Option<[i32; 3]>,
        pairs: Option<&[&str]>,
    ) -> Result<String> {
        self.apply_overrides(position, pairs)?;
        if self.chunk_width == 0 {
            let mut out = String::with_capacity(message.len());
            for symbol in message.chars() {
                out.push(self.cipher_symbol(symbol, Direction::Encrypt));
            }
            Ok(out)
        } else {
            Ok(self.encrypt_chunked(message))
        }
    }

    /// Decrypts a message.
    ///
    /// Applies the same optional overrides as [`encrypt`](Self::encrypt),
    /// then runs the inverse letter transform. Decryption always preserves
    /// the literal one-for-one symbol sequence of its input — it never
    /// re-merges chunked blocks; spaces in the ciphertext are treated as
    /// ordinary pass-through symbols.
    ///
    /// # Errors
    /// Returns [`InvalidPlugPair`](crate::RotorCipherError::InvalidPlugPair)
    /// if a pair override is malformed.
    pub fn decrypt(
        &mut self,
        message: &str,
        position: Option<[i32; 3]>,
        pairs: Option<&[&str]>,
    ) -> Result<String> {
        self.apply_overrides(position, pairs)?;
        let mut out = String::with_capacity(message.len());
        for symbol in message.chars() {
            out.push(self.cipher_symbol(symbol, Direction::Decrypt));
        }
        Ok(out)
    }

    /// Adds one plugboard pair (see [`Plugboard::add_pair`]).
    ///
    /// # Errors
    /// Returns [`InvalidPlugPair`](crate::RotorCipherError::InvalidPlugPair).
    pub fn add_plug_pair(&mut self, pair: &str) -> Result<()> {
        self.plugboard.add_pair(pair)
    }

    /// Removes the plugboard pair containing `letter`, if any.
    ///
    /// # Errors
    /// Returns [`InvalidLetter`](crate::RotorCipherError::InvalidLetter).
    pub fn remove_plug_letter(&mut self, letter: &str) -> Result<()> {
        self.plugboard.remove_letter(letter)
    }

    /// Lists the current plugboard pairs.
    pub fn plug_pairs(&self) -> Vec<(char, char)> {
        self.plugboard.pairs()
    }

    /// Sets the rotor positions (`[right, middle, left]`, wrapping mod 26)
    /// and remembers them as the home positions for
    /// [`reset_positions`](Self::reset_positions).
    pub fn set_positions(&mut self, positions: [i32; 3]) {
        self.bank.set_positions(positions);
        self.home_positions = self.bank.positions();
    }

    /// Current rotor positions as `[right, middle, left]`.
    pub fn positions(&self) -> [u8; 3] {
        self.bank.positions()
    }

    /// Rewinds the rotors to the most recently set starting positions.
    ///
    /// After a reset, encrypting the same message reproduces the same
    /// ciphertext as the run that followed the original position set.
    pub fn reset_positions(&mut self) {
        let home = self.home_positions.map(i32::from);
        self.bank.set_positions(home);
    }

    /// Sets the ciphertext chunk width (0 preserves the message layout).
    pub fn set_chunk_width(&mut self, chunk_width: usize) {
        self.chunk_width = chunk_width;
    }

    /// Current chunk width.
    pub fn chunk_width(&self) -> usize {
        self.chunk_width
    }

    // ──────── Overrides ────────

    /// Applies the optional plugboard and position overrides, plugboard
    /// first. Pair overrides are validated against a scratch copy of the
    /// board before anything is applied, so a malformed pair mid-list
    /// cannot leave a half-updated configuration behind.
    fn apply_overrides(
        &mut self,
        position: Option<[i32; 3]>,
        pairs: Option<&[&str]>,
    ) -> Result<()> {
        match pairs {
            None => {}
            Some([]) => self.plugboard.clear(),
            Some(pairs) => {
                let mut board = self.plugboard.clone();
                for pair in pairs {
                    board.add_pair(pair)?;
                }
                self.plugboard = board;
            }
        }
        if let Some(positions) = position {
            self.set_positions(positions);
        }
        Ok(())
    }

    // ──────── Cipher path ────────

    /// Transforms one symbol. Letters run the full cipher path and step the
    /// rotors once; everything else bypasses the path untouched.
    fn cipher_symbol(&mut self, symbol: char, direction: Direction) -> char {
        if !symbol.is_ascii_alphabetic() {
            return symbol;
        }
        let letter = symbol.to_ascii_uppercase();
        let out = match direction {
            Direction::Encrypt => self.encrypt_letter(letter),
            Direction::Decrypt => self.decrypt_letter(letter),
        };
        // The position used for this symbol is the position before its step.
        self.bank.step();
        out
    }

    /// One letter through the encrypt path: plugboard, rotors forward,
    /// reflector, rotors forward on the return leg, plugboard.
    fn encrypt_letter(&self, letter: char) -> char {
        let entered = self.plugboard.swap(letter);
        let index = letter_to_index(entered);
        let index = self.bank.forward_inbound(index);
        let index = catalog::reflector()[index as usize];
        let index = self.bank.forward_return(index);
        self.plugboard.swap(index_to_letter(index))
    }

    /// One letter through the decrypt path: identical topology, inverse
    /// lookup at every rotor. The reflector is an involution, so its own
    /// table serves as its inverse.
    fn decrypt_letter(&self, letter: char) -> char {
        let entered = self.plugboard.swap(letter);
        let index = letter_to_index(entered);
        let index = self.bank.inverse_inbound(index);
        let index = catalog::reflector()[index as usize];
        let index = self.bank.inverse_return(index);
        self.plugboard.swap(index_to_letter(index))
    }

    // ──────── Chunked output ────────

    /// Encrypts with fixed-width re-chunking: input spaces are skipped
    /// entirely, every other symbol counts toward the block, and a single
    /// space separates consecutive blocks (no trailing separator).
    fn encrypt_chunked(&mut self, message: &str) -> String {
        let width = self.chunk_width;
        let mut out = String::with_capacity(message.len() + message.len() / width.max(1));
        let mut emitted = 0usize;
        for symbol in message.chars() {
            if symbol == ' ' {
                continue;
            }
            let ciphered = self.cipher_symbol(symbol, Direction::Encrypt);
            if emitted > 0 && emitted % width == 0 {
                out.push(' ');
            }
            out.push(ciphered);
            emitted += 1;
        }
        out
    }
}

/// Direction of a letter transform through the cipher path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}
