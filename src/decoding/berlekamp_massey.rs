//! The Berlekamp-Massey (BM) algorithm for finding the error locator.
//!
//! BM computes the shortest linear feedback shift register (LFSR) that
//! generates the syndrome sequence. Its connection polynomial is the error
//! locator Λ(x) = (1 - X_1 x)...(1 - X_v x).
use smallvec::smallvec;

use super::Scratch;
use crate::error::DecodingError;
use crate::galois::{GaloisField, Gf};

/// Return the error locator, lowest power first, with `lambda[0] = 1`.
pub(super) fn find_error_locator(
    gf: &GaloisField,
    syn: &[Gf],
) -> Result<Scratch<Gf>, DecodingError> {
    let len = syn.len();
    let mut len_lfsr = 0; // current length of the LFSR
    let mut cur: Scratch<Gf> = smallvec![Gf(0); len + 1]; // current connection polynomial
    let mut prev: Scratch<Gf> = smallvec![Gf(0); len + 1]; // connection polynomial before last length change
    let mut tmp: Scratch<Gf> = smallvec![Gf(0); len + 1];
    cur[0] = Gf(1);
    prev[0] = Gf(1);
    let mut l = 1; // l is k - m, the amount of shift in update
    let mut discrepancy_m = Gf(1); // previous discrepancy
    for k in 0..len {
        // compute discrepancy
        let discrepancy = syn[k]
            + (1..=len_lfsr)
                .map(|i| gf.mul(cur[i], syn[k - i]))
                .sum::<Gf>();
        if discrepancy == Gf(0) {
            l += 1;
            continue;
        }

        let coeff = gf.div(discrepancy, discrepancy_m);
        if 2 * len_lfsr > k {
            // update without length change
            for (ci, pj) in cur[l..].iter_mut().zip(prev.iter()) {
                *ci -= gf.mul(coeff, *pj);
            }
            l += 1;
        } else {
            // update cur with length change
            tmp.copy_from_slice(&cur);
            for (ci, pj) in cur[l..].iter_mut().zip(prev.iter()) {
                *ci -= gf.mul(coeff, *pj);
            }
            len_lfsr = k + 1 - len_lfsr;
            core::mem::swap(&mut prev, &mut tmp);
            discrepancy_m = discrepancy;
            l = 1;
        }
    }

    if len_lfsr > len / 2 {
        Err(DecodingError::TooManyErrors)
    } else {
        cur.truncate(len_lfsr + 1);
        Ok(cur)
    }
}

#[test]
fn test_single_error() {
    let gf = GaloisField::new(8).unwrap();
    // error value 9 at index 5, S_j = 9 α^(5j)
    let syn: Vec<Gf> = (1..=4)
        .map(|j| gf.mul(Gf(9), gf.primitive_power(5 * j)))
        .collect();
    let lambda = find_error_locator(&gf, &syn).unwrap();
    assert_eq!(lambda.to_vec(), vec![Gf(1), gf.primitive_power(5)]);
}

#[test]
fn test_two_errors() {
    let gf = GaloisField::new(4).unwrap();
    let (x1, x2) = (gf.primitive_power(2), gf.primitive_power(3));
    let (e1, e2) = (Gf(8), Gf(9));
    let syn: Vec<Gf> = (1..=6)
        .map(|j| {
            gf.mul(e1, gf.primitive_power(2 * j)) + gf.mul(e2, gf.primitive_power(3 * j))
        })
        .collect();
    let lambda = find_error_locator(&gf, &syn).unwrap();
    assert_eq!(lambda.to_vec(), vec![Gf(1), x1 + x2, gf.mul(x1, x2)]);
}

#[test]
fn test_too_many_errors() {
    let gf = GaloisField::new(4).unwrap();
    // no LFSR of length <= 2 generates 0, 0, 0, 1
    let syn = [Gf(0), Gf(0), Gf(0), Gf(1)];
    assert_eq!(
        find_error_locator(&gf, &syn).unwrap_err(),
        DecodingError::TooManyErrors
    );
}
