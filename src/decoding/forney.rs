//! Error values with Forney's algorithm.
use super::Scratch;
use crate::error::DecodingError;
use crate::galois::{GaloisField, Gf};
use crate::polynomial;

/// Find the error values using Forney's algorithm.
///
/// # Params
///
/// - `syn` are the syndromes S_1, ..., S_2t,
/// - `lambda` is the error locator polynomial (starting with lowest power),
/// - `locations` are the codeword indices of the errors, index i stands
///   for the error location X = α^i.
///
/// With S(x) = S_1 x + ... + S_2t x^2t and Ω(x) = S(x) Λ(x) mod x^(2t + 1)
/// the error value at X is X Ω(1/X) / Λ'(1/X).
pub(super) fn find_error_values(
    gf: &GaloisField,
    syn: &[Gf],
    lambda: &[Gf],
    locations: &[usize],
) -> Result<Scratch<Gf>, DecodingError> {
    let n = syn.len();
    // compute Ω(x), the constant coefficient of S(x) is zero
    let mut omega: Scratch<Gf> = Scratch::from_elem(Gf(0), n + 1);
    polynomial::mul_truncated(gf, syn, lambda, &mut omega[1..]);

    locations
        .iter()
        .map(|loc| {
            let x = gf.primitive_power(*loc);
            let x_inv = gf.inv(x);
            let lambda_der_x = polynomial::eval_derivative(gf, lambda, x_inv);
            if lambda_der_x == Gf(0) {
                // repeated root, the locator does not describe distinct errors
                return Err(DecodingError::Malfunction);
            }
            let omega_x = polynomial::eval(gf, &omega, x_inv);
            let value = gf.div(gf.mul(x, omega_x), lambda_der_x);
            if value == Gf(0) {
                return Err(DecodingError::Malfunction);
            }
            Ok(-value)
        })
        .collect()
}

#[test]
fn test_error_values() {
    let gf = GaloisField::new(4).unwrap();
    let errors = [(2, Gf(8)), (3, Gf(9)), (11, Gf(11))];
    let syn: Vec<Gf> = (1..=6)
        .map(|j| {
            errors
                .iter()
                .map(|(i, e)| gf.mul(*e, gf.primitive_power(i * j)))
                .sum()
        })
        .collect();
    // Λ(x) = (1 + X_1 x)(1 + X_2 x)(1 + X_3 x)
    let mut lambda = vec![Gf(1)];
    for (i, _) in errors.iter() {
        let x = gf.primitive_power(*i);
        let mut next = vec![Gf(0); lambda.len() + 1];
        polynomial::mul_truncated(&gf, &lambda, &[Gf(1), x], &mut next);
        lambda = next;
    }
    let locations: Vec<usize> = errors.iter().map(|(i, _)| *i).collect();
    let values = find_error_values(&gf, &syn, &lambda, &locations).unwrap();
    let expected: Vec<Gf> = errors.iter().map(|(_, e)| *e).collect();
    assert_eq!(values.to_vec(), expected);
}
