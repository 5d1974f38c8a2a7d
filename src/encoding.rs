//! Systematic encoding.
use crate::galois::{GaloisField, Gf};

/// Compute the parity symbols for `message` and write them to `ecc`.
///
/// `g` is the generator polynomial, lowest power first, and `ecc` must
/// have `g.len() - 1` symbols.
pub fn ecc_block(gf: &GaloisField, message: &[u16], g: &[Gf], ecc: &mut [u16]) {
    // Let m be the message polynomial (k coefficients) and g the generator
    // polynomial with d + 1 coefficients.
    //
    // We use a variant of euclidean polynomial division on the input
    // polynomials m(x) * x^d and g to get a quotient q and remainder r such that
    //
    //     m(x) * x^d = q(x) g(x) + r(x).
    //
    // The parity then is -r(x) = r(x), because m(x) * x^d - r(x) is divisible
    // by g. The quotient is never computed, `ecc` holds the intermediate
    // remainder of a shift register that is fed the message from the highest
    // power down.
    //
    // Placing the message at indices 0..k and the parity at k..n gives
    // x^k * r(x) + m(x), which is a cyclic shift of the codeword above and
    // therefore a codeword of the same cyclic code.
    let ecc_len = g.len() - 1;
    assert_eq!(ecc.len(), ecc_len, "parity buffer does not match generator");
    ecc.fill(0);
    for a in message.iter().rev() {
        let k = Gf(ecc[ecc_len - 1]) + Gf(*a);
        for j in (1..ecc_len).rev() {
            ecc[j] = (Gf(ecc[j - 1]) + gf.mul(k, g[j])).into();
        }
        ecc[0] = gf.mul(k, g[0]).into();
    }
}

#[test]
fn ecc_block_rs15() {
    let gf = GaloisField::new(4).unwrap();
    let g = crate::polynomial::generator(&gf, 6);
    let mut ecc = vec![0; 6];
    ecc_block(&gf, &[6, 15, 8, 9, 8, 3, 0, 0, 5], &g, &mut ecc);
    assert_eq!(ecc, vec![0, 12, 11, 2, 0, 9]);
}

#[test]
fn ecc_block_zero_message() {
    let gf = GaloisField::new(8).unwrap();
    let g = crate::polynomial::generator(&gf, 10);
    let mut ecc = vec![7; 10];
    ecc_block(&gf, &[0; 245], &g, &mut ecc);
    assert_eq!(ecc, vec![0; 10]);
}

#[test]
fn ecc_block_is_codeword() {
    let gf = GaloisField::new(8).unwrap();
    let g = crate::polynomial::generator(&gf, 8);
    let mut codeword: Vec<u16> = (0..247).map(|i| (i * 7 + 3) % 256).collect();
    let mut ecc = vec![0; 8];
    ecc_block(&gf, &codeword, &g, &mut ecc);
    codeword.extend_from_slice(&ecc);
    for j in 1..=8 {
        let s = crate::polynomial::eval(&gf, &codeword, gf.primitive_power(j));
        assert_eq!(s, Gf(0), "syndrome {}", j);
    }
}
