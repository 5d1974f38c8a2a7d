//! Known vectors for RS(15, 9) with 4 bit symbols.

use pretty_assertions::assert_eq;
use rsfec::{DecodingError, LocatorAlgorithm, ReedSolomon};

const MESSAGE: [u16; 9] = [6, 15, 8, 9, 8, 3, 0, 0, 5];
const CODEWORD: [u16; 15] = [6, 15, 8, 9, 8, 3, 0, 0, 5, 0, 12, 11, 2, 0, 9];

const ALGORITHMS: [LocatorAlgorithm; 2] = [
    LocatorAlgorithm::BerlekampMassey,
    LocatorAlgorithm::PetersonGorensteinZierler,
];

fn rs15(algorithm: LocatorAlgorithm) -> ReedSolomon {
    ReedSolomon::builder(4, 3).locator(algorithm).build().unwrap()
}

fn zeroed(indices: &[usize]) -> [u16; 15] {
    let mut received = CODEWORD;
    for i in indices {
        received[*i] = 0;
    }
    received
}

#[test]
fn parameters() {
    let rs = rs15(LocatorAlgorithm::default());
    assert_eq!(rs.codeword_size(), 15);
    assert_eq!(rs.message_size(), 9);
    assert_eq!(rs.fec_size(), 6);
    assert_eq!(rs.symbol_size(), 4);
}

#[test]
fn encode() {
    let rs = rs15(LocatorAlgorithm::default());
    let codeword = rs.generate_codeword(&MESSAGE);
    assert_eq!(codeword, CODEWORD.to_vec());
    assert_eq!(&codeword[..9], &MESSAGE[..]);
}

#[test]
fn recover_up_to_three_errors() {
    for algorithm in ALGORITHMS {
        let rs = rs15(algorithm);
        for errors in [&[2][..], &[2, 3][..], &[2, 3, 11][..]] {
            let mut received = zeroed(errors);
            assert_eq!(
                rs.recover_codeword(&mut received),
                Ok(errors.len()),
                "{:?} with errors at {:?}",
                algorithm,
                errors
            );
            assert_eq!(received, CODEWORD);
        }
    }
}

#[test]
fn recover_message_up_to_three_errors() {
    for algorithm in ALGORITHMS {
        let rs = rs15(algorithm);
        for errors in [&[2][..], &[2, 3][..], &[2, 3, 11][..]] {
            let received = zeroed(errors);
            assert_eq!(rs.recover_message(&received), Some(MESSAGE.to_vec()));
        }
    }
}

#[test]
fn four_errors_fail() {
    for algorithm in ALGORITHMS {
        let rs = rs15(algorithm);
        let mut received = zeroed(&[0, 2, 3, 11]);
        let error = rs.recover_codeword(&mut received).unwrap_err();
        assert!(matches!(
            error,
            DecodingError::TooManyErrors | DecodingError::Malfunction
        ));
        assert_eq!(received, zeroed(&[0, 2, 3, 11]));
        assert_eq!(rs.recover_message(&received), None);
    }
}

#[test]
fn valid_codeword_unchanged() {
    let rs = rs15(LocatorAlgorithm::default());
    let mut received = CODEWORD;
    assert_eq!(rs.recover_codeword(&mut received), Ok(0));
    assert_eq!(received, CODEWORD);
    assert_eq!(rs.recover_message(&CODEWORD), Some(MESSAGE.to_vec()));
}

#[test]
fn errors_in_parity_only() {
    let rs = rs15(LocatorAlgorithm::default());
    let mut received = CODEWORD;
    received[9] = 15;
    received[14] = 0;
    assert_eq!(rs.recover_codeword(&mut received), Ok(2));
    assert_eq!(received, CODEWORD);
}

#[test]
fn ccsds_sized_code() {
    // RS(255, 223)
    let rs = ReedSolomon::new(8, 16).unwrap();
    let message: Vec<u16> = (0..223).map(|i| (i * 7 % 256) as u16).collect();
    let codeword = rs.generate_codeword(&message);
    assert!(rs.is_codeword(&codeword));
    let mut received = codeword.clone();
    for i in 0..16 {
        received[i * 15 + 3] ^= 0xA5;
    }
    assert_eq!(rs.recover_codeword(&mut received), Ok(16));
    assert_eq!(received, codeword);
}

#[test]
fn wide_symbols() {
    // RS(4095, 4063) with 12 bit symbols
    let rs = ReedSolomon::new(12, 16).unwrap();
    assert_eq!(rs.codeword_size(), 4095);
    let message: Vec<u16> = (0..rs.message_size())
        .map(|i| (i * 1021 % 4096) as u16)
        .collect();
    let codeword = rs.generate_codeword(&message);
    let mut received = codeword.clone();
    for (i, idx) in [0, 1, 2000, 4062, 4063, 4094].iter().enumerate() {
        received[*idx] ^= 0xFFF - i as u16;
    }
    assert_eq!(rs.recover_message(&received), Some(message));
}
