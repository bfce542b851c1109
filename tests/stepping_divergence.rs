//! Regression tests for the notch-driven stepping rule.
//!
//! The cascade condition is the machine's one real trap: testing one
//! rotor's position against another rotor's notch table silently
//! desynchronizes encode and decode somewhere deep inside a long message,
//! with no error at the point of failure. The cascade check here reads the
//! middle rotor's position against the middle rotor's own notch table, and
//! these tests pin that choice down.
//!
//! The long-message tests run several hundred letters through rotor
//! selections with two-notch rotors (6, 7, 8), where carries and
//! double-steps are most frequent, and verify letter-for-letter
//! synchronization between encoder and decoder.

use rotorcipher::RotorMachine;

/// Rotor selections that maximize carry traffic: two-notch rotors step the
/// middle and left wheels far more often than single-notch ones.
const NOTCH_HEAVY_SELECTIONS: [[u8; 3]; 4] = [
    [6, 7, 8],
    [8, 6, 7],
    [7, 7, 7],
    [6, 6, 6],
];

/// Builds a deterministic all-letter message of `n` symbols.
fn letter_stream(n: usize) -> String {
    (0..n).map(|i| (b'A' + (i % 26) as u8) as char).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Long-message encode/decode synchronization
// ═══════════════════════════════════════════════════════════════════════

/// 520 letters through every notch-heavy selection: if the cascade
/// condition read the wrong rotor's notch table, encoder and decoder would
/// drift apart at the first divergent carry and every later letter would
/// decrypt wrong.
#[test]
fn long_message_stays_synchronized() {
    let message = letter_stream(520);
    for rotors in NOTCH_HEAVY_SELECTIONS {
        for positions in [[0, 0, 0], [10, 2, 24], [25, 25, 25]] {
            let mut encoder = RotorMachine::new();
            encoder.configure(rotors, positions, &["AB", "XQ"], 0).unwrap();
            let mut decoder = RotorMachine::new();
            decoder.configure(rotors, positions, &["AB", "XQ"], 0).unwrap();

            let ciphertext = encoder.encrypt(&message, None, None).unwrap();
            let plaintext = decoder.decrypt(&ciphertext, None, None).unwrap();
            assert_eq!(
                plaintext, message,
                "desync for rotors={:?} positions={:?}",
                rotors, positions
            );
            // Both machines consumed the same number of steps.
            assert_eq!(encoder.positions(), decoder.positions());
        }
    }
}

/// The same 520-letter run, decoded letter by letter: pinpoints the first
/// divergent position if the stepping rule ever regresses, instead of just
/// reporting a garbled tail.
#[test]
fn long_message_letter_by_letter_sync() {
    let message = letter_stream(520);
    let mut encoder = RotorMachine::new();
    encoder.configure([6, 7, 8], [10, 2, 24], &[], 0).unwrap();
    let mut decoder = RotorMachine::new();
    decoder.configure([6, 7, 8], [10, 2, 24], &[], 0).unwrap();

    for (i, letter) in message.chars().enumerate() {
        assert_eq!(
            encoder.positions(),
            decoder.positions(),
            "positions diverged before letter {}",
            i
        );
        let ciphered = encoder.encrypt(&letter.to_string(), None, None).unwrap();
        let deciphered = decoder.decrypt(&ciphered, None, None).unwrap();
        assert_eq!(
            deciphered,
            letter.to_string(),
            "letter {} decrypted wrong",
            i
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Stepping determinism
// ═══════════════════════════════════════════════════════════════════════

/// The position triple after N letters is a pure function of N: no hidden
/// state, no dependence on which letters were processed.
#[test]
fn positions_depend_only_on_letter_count() {
    let mut by_a = RotorMachine::new();
    by_a.configure([6, 7, 8], [9, 23, 11], &[], 0).unwrap();
    let mut by_z = RotorMachine::new();
    by_z.configure([6, 7, 8], [9, 23, 11], &[], 0).unwrap();

    for n in 0..400 {
        assert_eq!(
            by_a.positions(),
            by_z.positions(),
            "position sequences diverged after {} letters",
            n
        );
        by_a.encrypt("A", None, None).unwrap();
        by_z.encrypt("Z", None, None).unwrap();
    }
}

/// Non-letters never step: a message drowned in punctuation leaves the
/// rotors exactly where the letters alone would have.
#[test]
fn punctuation_does_not_step() {
    let mut noisy = RotorMachine::new();
    noisy.configure([6, 7, 8], [0, 0, 0], &[], 0).unwrap();
    let mut clean = RotorMachine::new();
    clean.configure([6, 7, 8], [0, 0, 0], &[], 0).unwrap();

    noisy.encrypt("A!B, C... D?E; (F) G-H", None, None).unwrap();
    clean.encrypt("ABCDEFGH", None, None).unwrap();
    assert_eq!(noisy.positions(), clean.positions());
}

// ═══════════════════════════════════════════════════════════════════════
// Cascade semantics — the middle rotor's own notch table gates the
// double-step
// ═══════════════════════════════════════════════════════════════════════

/// Rotor 6 notches at 11 and 24. With right at a notch and middle at its
/// own notch, one letter advances all three wheels.
#[test]
fn double_step_advances_all_three_wheels() {
    let mut machine = RotorMachine::new();
    machine.configure([6, 6, 1], [11, 24, 0], &[], 0).unwrap();
    machine.encrypt("A", None, None).unwrap();
    assert_eq!(machine.positions(), [12, 25, 1]);
}

/// With right at a notch but middle off its own notches, only right and
/// middle move. Crucially, the middle check must read the *middle* rotor's
/// position: here the right rotor's position (11) IS a notch value of the
/// middle rotor's table, so a mixed-up comparison would double-step.
#[test]
fn carry_without_middle_notch_leaves_left_wheel() {
    let mut machine = RotorMachine::new();
    machine.configure([6, 6, 1], [11, 5, 0], &[], 0).unwrap();
    machine.encrypt("A", None, None).unwrap();
    assert_eq!(machine.positions(), [12, 6, 0]);
}

/// The middle rotor sitting on its notch does nothing without a carry from
/// the right rotor.
#[test]
fn middle_notch_alone_is_inert() {
    let mut machine = RotorMachine::new();
    machine.configure([6, 6, 1], [0, 11, 0], &[], 0).unwrap();
    machine.encrypt("A", None, None).unwrap();
    assert_eq!(machine.positions(), [1, 11, 0]);
}

/// Frozen 60-step position trace for a two-notch stack, captured from the
/// stepping rule directly: right steps always; a carry fires whenever right
/// leaves 11 or 24; the left wheel moves only when the carry lands while
/// the middle wheel sits on 11 or 24.
#[test]
fn sixty_step_position_walk() {
    let mut machine = RotorMachine::new();
    machine.configure([6, 6, 6], [8, 10, 0], &[], 0).unwrap();

    let mut expected_right = 8u8;
    let mut expected_middle = 10u8;
    let mut expected_left = 0u8;
    for step in 0..60 {
        assert_eq!(
            machine.positions(),
            [expected_right, expected_middle, expected_left],
            "walk diverged at step {}",
            step
        );
        // Reference model of the rule, evolved independently.
        if expected_right == 11 || expected_right == 24 {
            if expected_middle == 11 || expected_middle == 24 {
                expected_left = (expected_left + 1) % 26;
            }
            expected_middle = (expected_middle + 1) % 26;
        }
        expected_right = (expected_right + 1) % 26;
        machine.encrypt("X", None, None).unwrap();
    }
}
