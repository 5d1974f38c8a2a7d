//! Polynomials over GF(2^m).
//!
//! Coefficients are stored lowest power first, so `c[i]` belongs to x^i.
//! This matches the codeword layout: the symbol at index i of a codeword is
//! the coefficient of x^i.
use crate::galois::{GaloisField, Gf};

/// Evaluate the polynomial with coefficients `c` at `x` (Horner's method).
pub fn eval<T: Into<Gf> + Copy>(gf: &GaloisField, c: &[T], x: Gf) -> Gf {
    c.iter()
        .rev()
        .fold(Gf(0), |acc, ci| gf.mul(acc, x) + (*ci).into())
}

/// Evaluate the formal derivative of `c` at `x`.
///
/// In characteristic 2 only the odd powers survive the derivative.
pub fn eval_derivative(gf: &GaloisField, c: &[Gf], x: Gf) -> Gf {
    let mut acc = Gf(0);
    for (k, ck) in c.iter().enumerate().skip(1).rev() {
        // notice that ck is multiplied with usize, this is NOT multiplication
        // in GF, see Mul<usize> implementation for Gf.
        acc = gf.mul(acc, x) + *ck * k;
    }
    acc
}

/// Degree of `c`, `None` for the zero polynomial.
pub fn degree(c: &[Gf]) -> Option<usize> {
    c.iter().rposition(|ci| *ci != Gf(0))
}

/// Compute `a * b mod x^out.len()` and store it in `out`.
pub fn mul_truncated(gf: &GaloisField, a: &[Gf], b: &[Gf], out: &mut [Gf]) {
    let len = out.len();
    out.fill(Gf(0));
    for (i, ai) in a.iter().enumerate().take(len) {
        for (j, bj) in b.iter().take(len - i).enumerate() {
            out[i + j] += gf.mul(*ai, *bj);
        }
    }
}

/// Compute the generator polynomial (x - α^1)(x - α^2)...(x - α^degree).
///
/// The result is monic and has `degree + 1` coefficients.
pub fn generator(gf: &GaloisField, degree: usize) -> Vec<Gf> {
    let mut g = Vec::with_capacity(degree + 1);
    g.push(Gf(1));
    for i in 1..=degree {
        // multiply by (x + α^i), the new highest coefficient is 1
        let root = gf.primitive_power(i);
        g.push(Gf(1));
        for j in (1..g.len() - 1).rev() {
            g[j] = g[j - 1] + gf.mul(g[j], root);
        }
        g[0] = gf.mul(g[0], root);
    }
    g
}

#[test]
fn test_generator_rs15() {
    let gf = GaloisField::new(4).unwrap();
    let g = generator(&gf, 6);
    assert_eq!(
        g,
        [12, 10, 12, 3, 9, 7, 1].iter().map(|c| Gf(*c)).collect::<Vec<_>>()
    );
    for i in 1..=6 {
        assert_eq!(eval(&gf, &g, gf.primitive_power(i)), Gf(0));
    }
    assert_ne!(eval(&gf, &g, gf.primitive_power(7)), Gf(0));
    assert_ne!(eval(&gf, &g, Gf(1)), Gf(0));
}

#[test]
fn test_eval() {
    let gf = GaloisField::new(8).unwrap();
    // 1 + x^2 at x = 2
    assert_eq!(eval(&gf, &[Gf(1), Gf(0), Gf(1)], Gf(2)), Gf(5));
    assert_eq!(eval::<Gf>(&gf, &[], Gf(7)), Gf(0));
    assert_eq!(eval(&gf, &[3u16], Gf(7)), Gf(3));
}

#[test]
fn test_derivative() {
    let gf = GaloisField::new(8).unwrap();
    // d/dx (1 + 5x + 7x^2 + 9x^3) = 5 + 9x^2 in characteristic 2
    let c = [Gf(1), Gf(5), Gf(7), Gf(9)];
    let x = Gf(3);
    let expected = Gf(5) + gf.mul(Gf(9), gf.mul(x, x));
    assert_eq!(eval_derivative(&gf, &c, x), expected);
    assert_eq!(eval_derivative(&gf, &[Gf(4)], x), Gf(0));
}

#[test]
fn test_mul_truncated() {
    let gf = GaloisField::new(4).unwrap();
    // (1 + x)(1 + x) = 1 + x^2
    let mut out = [Gf(0); 3];
    mul_truncated(&gf, &[Gf(1), Gf(1)], &[Gf(1), Gf(1)], &mut out);
    assert_eq!(out, [Gf(1), Gf(0), Gf(1)]);
    let mut out = [Gf(0); 2];
    mul_truncated(&gf, &[Gf(1), Gf(2), Gf(3)], &[Gf(1), Gf(1)], &mut out);
    assert_eq!(out, [Gf(1), Gf(3)]);
}

#[test]
fn test_degree() {
    assert_eq!(degree(&[Gf(1), Gf(0), Gf(3), Gf(0)]), Some(2));
    assert_eq!(degree(&[Gf(0), Gf(0)]), None);
    assert_eq!(degree(&[]), None);
}
