//! Property-based tests for Reed-Solomon encoding and decoding
//!
//! These tests use proptest to validate the codec with randomly generated
//! messages and error patterns for a few code sizes and both locator
//! algorithms.

use proptest::prelude::*;
use rsfec::{GaloisField, Gf, LocatorAlgorithm, ReedSolomon};

/// (symbol size, correction capability, locator)
const CODES: [(u32, usize, LocatorAlgorithm); 6] = [
    (4, 3, LocatorAlgorithm::BerlekampMassey),
    (4, 3, LocatorAlgorithm::PetersonGorensteinZierler),
    (5, 4, LocatorAlgorithm::BerlekampMassey),
    (6, 6, LocatorAlgorithm::PetersonGorensteinZierler),
    (8, 16, LocatorAlgorithm::BerlekampMassey),
    (8, 5, LocatorAlgorithm::PetersonGorensteinZierler),
];

/// A code, a message for it and an error pattern of at most t errors
/// given as (index, nonzero value).
fn code_message_errors() -> impl Strategy<Value = (ReedSolomon, Vec<u16>, Vec<(usize, u16)>)> {
    (0..CODES.len()).prop_flat_map(|c| {
        let (m, t, algorithm) = CODES[c];
        let rs = ReedSolomon::builder(m, t).locator(algorithm).build().unwrap();
        let n = rs.codeword_size();
        let max = ((1u32 << m) - 1) as u16;
        let message = prop::collection::vec(0..=max, rs.message_size());
        let positions = prop::sample::subsequence((0..n).collect::<Vec<_>>(), 0..=t);
        let values = prop::collection::vec(1..=max, t);
        (Just(rs), message, positions, values).prop_map(|(rs, message, positions, values)| {
            let errors = positions.into_iter().zip(values).collect();
            (rs, message, errors)
        })
    })
}

proptest! {
    /// Property: decoding an encoded message returns the message
    #[test]
    fn prop_round_trip((rs, message, _) in code_message_errors()) {
        let codeword = rs.generate_codeword(&message);
        prop_assert_eq!(rs.recover_message(&codeword), Some(message));
    }

    /// Property: the codeword starts with the message
    #[test]
    fn prop_systematic((rs, message, _) in code_message_errors()) {
        let codeword = rs.generate_codeword(&message);
        prop_assert_eq!(codeword.len(), rs.codeword_size());
        prop_assert_eq!(&codeword[..rs.message_size()], &message[..]);
        prop_assert!(rs.is_codeword(&codeword));
    }

    /// Property: up to t errors at arbitrary positions are corrected
    #[test]
    fn prop_correct_at_capacity((rs, message, errors) in code_message_errors()) {
        let codeword = rs.generate_codeword(&message);
        let mut received = codeword.clone();
        for (i, e) in errors.iter() {
            received[*i] ^= *e;
        }
        prop_assert_eq!(rs.recover_codeword(&mut received), Ok(errors.len()));
        prop_assert_eq!(received, codeword);
    }

    /// Property: a failed recovery leaves the codeword as received, a
    /// successful one always yields a valid codeword
    #[test]
    fn prop_no_partial_correction(
        (rs, message, errors) in code_message_errors(),
        extra in 1usize..4,
    ) {
        let codeword = rs.generate_codeword(&message);
        let mut received = codeword.clone();
        let n = rs.codeword_size();
        // push the pattern beyond capacity by adding errors after the last one
        let start = errors.last().map_or(0, |(i, _)| i + 1);
        for (i, e) in errors.iter() {
            received[*i] ^= *e;
        }
        for i in (start..n).take(rs.correction_capability() + extra) {
            received[i] ^= 1;
        }
        let before = received.clone();
        match rs.recover_codeword(&mut received) {
            Ok(_) => prop_assert!(rs.is_codeword(&received)),
            Err(_) => prop_assert_eq!(received, before),
        }
    }

    /// Property: field multiplication distributes over addition
    #[test]
    fn prop_field_distributive(
        bits in 2u32..=16,
        a in any::<u16>(),
        b in any::<u16>(),
        c in any::<u16>(),
    ) {
        let gf = GaloisField::new(bits).unwrap();
        let mask = gf.order() as u16;
        let (a, b, c) = (Gf(a & mask), Gf(b & mask), Gf(c & mask));
        prop_assert_eq!(gf.mul(a, b + c), gf.mul(a, b) + gf.mul(a, c));
        prop_assert_eq!(gf.mul(a, b), gf.mul(b, a));
        if b != Gf(0) {
            prop_assert_eq!(gf.mul(gf.div(a, b), b), a);
        }
    }
}

#[test]
fn table_round_trip() {
    for bits in 2..=16 {
        let gf = GaloisField::new(bits).unwrap();
        for a in 1..=gf.order() {
            let a = Gf(a as u16);
            assert_eq!(gf.primitive_power(gf.log(a)), a);
        }
    }
}
