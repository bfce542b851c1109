//! Plugboard: a mutable symmetric pairing of letters.
//!
//! The plugboard swaps paired letters before and after the rotor/reflector
//! traversal. Pairs are stored as a letter→partner table, so "each letter
//! belongs to at most one pair" is enforced by the representation itself
//! rather than checked after the fact.

use crate::catalog::{index_to_letter, ALPHABET_LEN};
use crate::error::{Result, RotorCipherError};

/// A partial matching on the 26-letter alphabet.
///
/// Letters are case-insensitive on input and treated as upper-case
/// internally. An unpaired letter (and any non-letter symbol) passes through
/// [`swap`](Self::swap) unchanged.
///
/// # Examples
///
/// ```
/// use rotorcipher::Plugboard;
///
/// let mut board = Plugboard::new();
/// board.add_pair("ab").unwrap();
/// assert_eq!(board.swap('a'), 'B');
/// assert_eq!(board.swap('C'), 'C');
/// assert_eq!(board.swap('!'), '!');
/// ```
#[derive(Debug, Clone, Default)]
pub struct Plugboard {
    partner: [Option<u8>; ALPHABET_LEN],
}

impl Plugboard {
    /// Creates an empty plugboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the unordered pair of letters in `pair`.
    ///
    /// Case-insensitive. A pair of the same letter twice is a silent no-op
    /// (there is no meaningful self-swap), as is inserting a pair that is
    /// already present. If either letter currently belongs to another pair,
    /// that pair is removed first, so the at-most-one-partner invariant holds
    /// before and after every call.
    ///
    /// # Errors
    /// Returns [`RotorCipherError::InvalidPlugPair`] if `pair` is not exactly
    /// two ASCII letters. Nothing is mutated on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcipher::Plugboard;
    ///
    /// let mut board = Plugboard::new();
    /// board.add_pair("AB").unwrap();
    /// board.add_pair("BC").unwrap(); // evicts A-B
    /// assert_eq!(board.swap('A'), 'A');
    /// assert_eq!(board.swap('B'), 'C');
    /// ```
    pub fn add_pair(&mut self, pair: &str) -> Result<()> {
        let (a, b) = parse_pair(pair)?;
        if a == b {
            return Ok(());
        }
        if self.partner[a as usize] == Some(b) {
            return Ok(());
        }
        self.unplug(a);
        self.unplug(b);
        self.partner[a as usize] = Some(b);
        self.partner[b as usize] = Some(a);
        Ok(())
    }

    /// Removes the pair containing `letter`, if any.
    ///
    /// # Errors
    /// Returns [`RotorCipherError::InvalidLetter`] if `letter` is not exactly
    /// one ASCII letter.
    pub fn remove_letter(&mut self, letter: &str) -> Result<()> {
        let index = parse_letter(letter)?;
        self.unplug(index);
        Ok(())
    }

    /// Swaps `symbol` with its partner if it is a paired letter.
    ///
    /// Input is case-insensitive; paired output is always upper-case.
    /// Unpaired letters and non-letter symbols are returned unchanged.
    pub fn swap(&self, symbol: char) -> char {
        if !symbol.is_ascii_alphabetic() {
            return symbol;
        }
        let index = symbol.to_ascii_uppercase() as u8 - b'A';
        match self.partner[index as usize] {
            Some(partner) => index_to_letter(partner),
            None => symbol,
        }
    }

    /// Removes every pair.
    pub fn clear(&mut self) {
        self.partner = [None; ALPHABET_LEN];
    }

    /// Returns true if no letters are paired.
    pub fn is_empty(&self) -> bool {
        self.partner.iter().all(Option::is_none)
    }

    /// Lists the current pairs, each once, alphabetically by first letter.
    pub fn pairs(&self) -> Vec<(char, char)> {
        let mut out = Vec::new();
        for (i, partner) in self.partner.iter().enumerate() {
            if let Some(p) = partner {
                if (i as u8) < *p {
                    out.push((index_to_letter(i as u8), index_to_letter(*p)));
                }
            }
        }
        out
    }

    /// Drops the pair containing the letter at `index`, if any.
    fn unplug(&mut self, index: u8) {
        if let Some(partner) = self.partner[index as usize].take() {
            self.partner[partner as usize] = None;
        }
    }
}

/// Parses a two-letter pair string into a pair of alphabet indices.
fn parse_pair(pair: &str) -> Result<(u8, u8)> {
    let mut chars = pair.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => Ok((
            a.to_ascii_uppercase() as u8 - b'A',
            b.to_ascii_uppercase() as u8 - b'A',
        )),
        _ => Err(RotorCipherError::InvalidPlugPair(pair.to_string())),
    }
}

/// Parses a one-letter string into an alphabet index.
fn parse_letter(letter: &str) -> Result<u8> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(l), None) if l.is_ascii_alphabetic() => Ok(l.to_ascii_uppercase() as u8 - b'A'),
        _ => Err(RotorCipherError::InvalidLetter(letter.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// No letter may appear in two pairs, whatever the mutation history.
    fn assert_matching_invariant(board: &Plugboard) {
        for i in 0..ALPHABET_LEN {
            if let Some(p) = board.partner[i] {
                assert_ne!(p as usize, i, "letter {} paired with itself", i);
                assert_eq!(
                    board.partner[p as usize],
                    Some(i as u8),
                    "pairing not symmetric at {}",
                    i
                );
            }
        }
    }

    #[test]
    fn test_add_and_swap() {
        let mut board = Plugboard::new();
        board.add_pair("AB").unwrap();
        assert_eq!(board.swap('A'), 'B');
        assert_eq!(board.swap('B'), 'A');
        assert_eq!(board.swap('C'), 'C');
        assert_matching_invariant(&board);
    }

    #[test]
    fn test_case_insensitive_input_uppercase_output() {
        let mut board = Plugboard::new();
        board.add_pair("kt").unwrap();
        assert_eq!(board.swap('k'), 'T');
        assert_eq!(board.swap('T'), 'K');
    }

    #[test]
    fn test_self_pair_is_noop() {
        let mut board = Plugboard::new();
        board.add_pair("AA").unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn test_duplicate_pair_is_noop() {
        let mut board = Plugboard::new();
        board.add_pair("AB").unwrap();
        board.add_pair("BA").unwrap();
        assert_eq!(board.pairs(), vec![('A', 'B')]);
    }

    #[test]
    fn test_conflicting_pair_evicts_both_holders() {
        let mut board = Plugboard::new();
        board.add_pair("AB").unwrap();
        board.add_pair("CD").unwrap();
        // A-D conflicts with both existing pairs: A-B and C-D must go.
        board.add_pair("AD").unwrap();
        assert_eq!(board.pairs(), vec![('A', 'D')]);
        assert_eq!(board.swap('B'), 'B');
        assert_eq!(board.swap('C'), 'C');
        assert_matching_invariant(&board);
    }

    #[test]
    fn test_remove_letter() {
        let mut board = Plugboard::new();
        board.add_pair("AB").unwrap();
        board.remove_letter("b").unwrap();
        assert!(board.is_empty());
        // Removing an unpaired letter is a no-op.
        board.remove_letter("Z").unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn test_malformed_inputs_rejected() {
        let mut board = Plugboard::new();
        for bad in ["", "A", "ABC", "A1", "1A", "??"] {
            assert!(matches!(
                board.add_pair(bad),
                Err(RotorCipherError::InvalidPlugPair(_))
            ));
        }
        for bad in ["", "AB", "1"] {
            assert!(matches!(
                board.remove_letter(bad),
                Err(RotorCipherError::InvalidLetter(_))
            ));
        }
        // Failed calls must not have mutated anything.
        assert!(board.is_empty());
    }

    #[test]
    fn test_non_letter_symbols_pass_through_swap() {
        let board = Plugboard::new();
        for symbol in [' ', '!', ',', '7', 'ß'] {
            assert_eq!(board.swap(symbol), symbol);
        }
    }

    #[test]
    fn test_invariant_under_mutation_sequences() {
        let mut board = Plugboard::new();
        let ops = [
            "AB", "CD", "EF", "BC", "DE", "FA", "XY", "YZ", "ZX", "MN", "NM",
        ];
        for pair in ops {
            board.add_pair(pair).unwrap();
            assert_matching_invariant(&board);
        }
        board.remove_letter("X").unwrap();
        board.remove_letter("A").unwrap();
        assert_matching_invariant(&board);
    }

    #[test]
    fn test_clear() {
        let mut board = Plugboard::new();
        board.add_pair("AB").unwrap();
        board.add_pair("CD").unwrap();
        board.clear();
        assert!(board.is_empty());
        assert!(board.pairs().is_empty());
    }
}
