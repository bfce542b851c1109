//! rotorcipher: an electromechanical rotor cipher machine simulator.
//!
//! Simulates a stateful, reversible substitution cipher whose permutation
//! changes after every processed symbol. Each letter travels through the
//! plugboard, three rotors, a reflector, and back; the rotor system then
//! advances one step, so the same letter comes out different every time it
//! is pressed. Encrypting and decrypting are mutual inverses as long as both
//! machines start from the same rotor selection, positions and plugboard.
//!
//! # Architecture
//!
//! ```text
//! Rotor       (atomic unit — a fixed wiring permutation + angular position)
//!     × 3 grouped right/middle/left
//! RotorBank   (signal path legs + the notch-driven stepping rule)
//!     plugboard → rotors → reflector → rotors → plugboard
//! RotorMachine (orchestrator — cipher path, message pipeline, chunking)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use rotorcipher::RotorMachine;
//!
//! let mut encoder = RotorMachine::new();
//! encoder.configure([1, 3, 5], [3, 21, 6], &["AB", "CT"], 0).unwrap();
//!
//! let mut decoder = RotorMachine::new();
//! decoder.configure([1, 3, 5], [3, 21, 6], &["AB", "CT"], 0).unwrap();
//!
//! let ciphertext = encoder.encrypt("This is a secret message!", None, None).unwrap();
//! let plaintext = decoder.decrypt(&ciphertext, None, None).unwrap();
//! assert_eq!(plaintext, "THIS IS A SECRET MESSAGE!");
//! ```
//!
//! Re-chunk the ciphertext into five-letter blocks for transmission:
//!
//! ```
//! use rotorcipher::RotorMachine;
//!
//! let mut machine = RotorMachine::new();
//! machine.set_chunk_width(5);
//! let ciphertext = machine.encrypt("HELLOWORLD", None, None).unwrap();
//! assert_eq!(ciphertext.len(), 11);
//! assert_eq!(ciphertext.chars().filter(|&c| c == ' ').count(), 1);
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod error;

mod machine;
mod plugboard;
mod rotor;
mod rotor_bank;

pub use error::{Result, RotorCipherError};
pub use machine::RotorMachine;
pub use plugboard::Plugboard;
