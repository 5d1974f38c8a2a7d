//! Syndrome based decoding.
//!
//! The decoder is classically made of four main steps:
//!
//! 1. Compute the syndrome values.
//! 2. Compute the error locator polynomial.
//! 3. Compute the error locations (Chien search).
//! 4. Compute the error values (Forney).
//!
//! Step 2 is done either by the Berlekamp-Massey algorithm or by solving
//! the syndrome matrix system directly (Peterson-Gorenstein-Zierler), see
//! [LocatorAlgorithm]. Both results are checked against all syndromes, so
//! the checks after step 2 and 3 are what keeps the decoder from returning
//! a wrong codeword when there were more than t errors.
mod berlekamp_massey;
mod forney;
mod pgz;

use log::{debug, trace};
use smallvec::{smallvec, SmallVec};

use crate::error::DecodingError;
use crate::galois::{GaloisField, Gf};
use crate::polynomial;

/// Call local buffer, stays on the stack for up to 64 parity symbols.
pub(crate) type Scratch<T> = SmallVec<[T; 64]>;

/// Algorithm used to find the error locator polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocatorAlgorithm {
    /// Iterative Berlekamp-Massey algorithm, O(t^2).
    #[default]
    BerlekampMassey,
    /// Solve the syndrome matrix equations with a LU decomposition,
    /// Peterson-Gorenstein-Zierler. O(t^4) in the worst case.
    PetersonGorensteinZierler,
}

/// Evaluate the `received` polynomial at α, α^2, α^3, ... and write the
/// result to `out` in that order.
///
/// Returns true if any of the values is nonzero.
pub(crate) fn primitive_element_evaluation(
    gf: &GaloisField,
    received: &[u16],
    out: &mut [Gf],
) -> bool {
    let mut errors = false;
    for (j, o) in out.iter_mut().enumerate() {
        *o = polynomial::eval(gf, received, gf.primitive_power(j + 1));
        errors = errors || (*o != Gf(0));
    }
    errors
}

/// Find the zeros of the error locator `lambda` among the nonzero field
/// elements and return the codeword indices they point to.
///
/// A zero α^e corresponds to the error location X = α^-e, so index n - e.
fn chien_search(gf: &GaloisField, lambda: &[Gf]) -> Scratch<usize> {
    let n = gf.order();
    (0..n)
        .filter(|e| polynomial::eval(gf, lambda, gf.primitive_power(*e)) == Gf(0))
        .map(|e| (n - e) % n)
        .collect()
}

/// Check the linear recurrence defined by `lambda` for all syndromes.
fn generates_syndromes(gf: &GaloisField, syn: &[Gf], lambda: &[Gf]) -> bool {
    let v = lambda.len() - 1;
    (v..syn.len()).all(|r| {
        lambda
            .iter()
            .enumerate()
            .map(|(i, li)| gf.mul(*li, syn[r - i]))
            .sum::<Gf>()
            == Gf(0)
    })
}

/// Correct up to `fec_len / 2` errors in `codeword` in-place.
///
/// The symbols at indices `codeword.len() - fec_len..` are the parity.
/// Returns the number of corrected symbols. If an error is returned the
/// codeword is unchanged.
pub(crate) fn decode(
    gf: &GaloisField,
    codeword: &mut [u16],
    fec_len: usize,
    algorithm: LocatorAlgorithm,
) -> Result<usize, DecodingError> {
    let t = fec_len / 2;
    assert!(fec_len >= 1, "degree of generator polynomial must be >= 1");
    assert!(
        codeword.len() > fec_len,
        "codeword shorter than error code suffix"
    );

    // 1. Calculate syndromes
    let mut syndromes: Scratch<Gf> = smallvec![Gf(0); fec_len];
    let have_non_zero = primitive_element_evaluation(gf, codeword, &mut syndromes);
    if !have_non_zero {
        return Ok(0);
    }
    trace!("syndromes {:?}", syndromes);

    // 2. Find the error locator polynomial
    let mut lambda = match algorithm {
        LocatorAlgorithm::BerlekampMassey => berlekamp_massey::find_error_locator(gf, &syndromes),
        LocatorAlgorithm::PetersonGorensteinZierler => pgz::find_error_locator(gf, &syndromes),
    }
    .inspect_err(|e| debug!("no error locator: {}", e))?;
    let v = match polynomial::degree(&lambda) {
        Some(v) if (1..=t).contains(&v) => v,
        _ => {
            debug!("error locator {:?} has invalid degree", lambda);
            return Err(DecodingError::TooManyErrors);
        }
    };
    lambda.truncate(v + 1);
    trace!("error locator {:?}", lambda);

    // Check for malfunction, cf.
    // M. Srinivasan and D. V. Sarwate, Malfunction in the Peterson-Gorenstein-Zierler Decoder,
    // IEEE Trans. Inf. Theory.
    if !generates_syndromes(gf, &syndromes, &lambda) {
        debug!("error locator does not generate the syndromes");
        return Err(DecodingError::Malfunction);
    }

    // 3. Find error locations
    let locations = chien_search(gf, &lambda);
    debug_assert!(locations.iter().all(|i| *i < codeword.len()));
    if locations.len() != v {
        debug!(
            "found {} error locations for a locator of degree {}",
            locations.len(),
            v
        );
        return Err(DecodingError::Malfunction);
    }

    // 4. Find error values
    let values = forney::find_error_values(gf, &syndromes, &lambda, &locations)
        .inspect_err(|e| debug!("error values: {}", e))?;

    // 5. Correct errors
    for (loc, err) in locations.iter().zip(values.iter()) {
        codeword[*loc] = (Gf(codeword[*loc]) - *err).into();
    }
    debug!("corrected {} symbols at {:?}", v, locations);
    Ok(v)
}

#[cfg(test)]
fn rs15_codeword() -> Vec<u16> {
    vec![6, 15, 8, 9, 8, 3, 0, 0, 5, 0, 12, 11, 2, 0, 9]
}

#[test]
fn test_evaluate_primitive() {
    let gf = GaloisField::new(4).unwrap();
    let mut out = vec![Gf(0); 6];
    assert!(!primitive_element_evaluation(&gf, &rs15_codeword(), &mut out));
    assert_eq!(out, vec![Gf(0); 6]);

    // single error e at index i gives S_j = e * α^(i j)
    let mut received = rs15_codeword();
    received[4] ^= 7;
    assert!(primitive_element_evaluation(&gf, &received, &mut out));
    for (j, s) in out.iter().enumerate() {
        assert_eq!(*s, gf.mul(Gf(7), gf.primitive_power(4 * (j + 1))));
    }
}

#[test]
fn test_chien_search() {
    let gf = GaloisField::new(4).unwrap();
    // (1 - α^2 x)(1 - α^11 x)
    let x1 = gf.primitive_power(2);
    let x2 = gf.primitive_power(11);
    let lambda = [Gf(1), x1 + x2, gf.mul(x1, x2)];
    let mut found = chien_search(&gf, &lambda).to_vec();
    found.sort_unstable();
    assert_eq!(found, vec![2, 11]);
    // 1 + x^2 = (1 + x)^2 has a double root at 1
    assert_eq!(chien_search(&gf, &[Gf(1), Gf(0), Gf(1)]).to_vec(), vec![0]);
}

#[test]
fn test_chien_search_indices_in_codeword() {
    let gf = GaloisField::new(4).unwrap();
    // 1 + x^15 vanishes at every nonzero element
    let mut lambda = vec![Gf(0); 16];
    lambda[0] = Gf(1);
    lambda[15] = Gf(1);
    let mut found = chien_search(&gf, &lambda).to_vec();
    found.sort_unstable();
    assert_eq!(found, (0..15).collect::<Vec<_>>());
}

#[test]
fn test_decode_both_algorithms() {
    let gf = GaloisField::new(4).unwrap();
    for algorithm in [
        LocatorAlgorithm::BerlekampMassey,
        LocatorAlgorithm::PetersonGorensteinZierler,
    ] {
        let expected = rs15_codeword();
        for errors in [&[2][..], &[2, 3][..], &[2, 3, 11][..]] {
            let mut received = expected.clone();
            for i in errors {
                received[*i] = 0;
            }
            let corrected = decode(&gf, &mut received, 6, algorithm);
            assert_eq!(corrected, Ok(errors.len()), "{:?}", algorithm);
            assert_eq!(received, expected);
        }

        let mut received = expected.clone();
        for i in [0, 2, 3, 11] {
            received[i] = 0;
        }
        let damaged = received.clone();
        assert!(decode(&gf, &mut received, 6, algorithm).is_err());
        assert_eq!(received, damaged);
    }
}

#[test]
fn test_decode_clean() {
    let gf = GaloisField::new(4).unwrap();
    let mut received = rs15_codeword();
    assert_eq!(
        decode(&gf, &mut received, 6, LocatorAlgorithm::default()),
        Ok(0)
    );
    assert_eq!(received, rs15_codeword());
}
