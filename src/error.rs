//! Error types for the rotorcipher library.

use thiserror::Error;

/// Errors produced by the rotorcipher library.
///
/// Every failure is a caller-input problem reported synchronously; the
/// engine performs no I/O and has no transient or retryable error states.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RotorCipherError {
    /// Plugboard pair is not exactly two letters.
    #[error("plugboard pair must be exactly two letters, got {0:?}")]
    InvalidPlugPair(String),
    /// Input is not exactly one letter.
    #[error("expected exactly one letter, got {0:?}")]
    InvalidLetter(String),
    /// Rotor id is not present in the catalog.
    #[error("unknown rotor id {0}: the catalog provides rotors 1 through 8")]
    UnknownRotor(u8),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RotorCipherError>;
