//! Implementation of the Peterson-Gorenstein-Zierler algorithm
//! for finding the error locator.
//!
//! Actually, Wikipedia has a nice description of the algorithm at
//! the time of writing this, see
//!
//! <https://en.wikipedia.org/wiki/Reed%E2%80%93Solomon_error_correction#Peterson%E2%80%93Gorenstein%E2%80%93Zierler_decoder>
use super::Scratch;
use crate::error::DecodingError;
use crate::galois::{GaloisField, Gf};

/// Solve the syndrome matrix equation for v, v - 1, ..., 1 using a
/// LU decomposition.
///
/// The syndrome matrix of size v is regular iff. there are exactly v
/// errors, so the first v with a solution is the number of errors.
/// Returns the error locator, lowest power first.
pub(super) fn find_error_locator(
    gf: &GaloisField,
    syndromes: &[Gf],
) -> Result<Scratch<Gf>, DecodingError> {
    let v = syndromes.len() / 2;

    // build syndrome matrix
    let mut matrix: Scratch<Gf> = Scratch::with_capacity(v * v); // row major order
    for i in 0..v {
        matrix.extend_from_slice(&syndromes[i..i + v]);
    }

    // try solving for decreasing v
    for vi in (1..=v).rev() {
        let mut m = matrix.clone();
        let mut b: Scratch<Gf> = Scratch::from_slice(&syndromes[vi..2 * vi]);
        if solve(gf, &mut m, &mut b, v) {
            // b = [Λ_vi, ..., Λ_1]
            b.push(Gf(1));
            b.reverse();
            return Ok(b);
        }
    }
    // background: since vi = 1,...,v were checked we know
    // there are too many (> v).
    Err(DecodingError::TooManyErrors)
}

/// Solve the linear system `mat` * x = `b` for x, x is written to `b`.
///
/// The upper left `b.len()` square of `mat` is used, rows are `row_stride`
/// apart. `mat` is overwritten with its LU decomposition.
///
/// Returns true if a solution was found.
fn solve(gf: &GaloisField, mat: &mut [Gf], b: &mut [Gf], row_stride: usize) -> bool {
    let n = b.len();
    let c = |i: usize, j: usize| i * row_stride + j;
    for i in 0..(n - 1) {
        // find non-zero entry
        if let Some(i_nz) = (i..n).find(|k| mat[c(*k, i)] != Gf(0)) {
            // swap rows
            if i_nz != i {
                b.swap(i, i_nz);
                for j in 0..n {
                    mat.swap(c(i, j), c(i_nz, j));
                }
            }
        } else {
            return false;
        };

        for k in i + 1..n {
            // compute L
            mat[c(k, i)] = gf.div(mat[c(k, i)], mat[c(i, i)]);
            // compute U
            for j in i + 1..n {
                let u = gf.mul(mat[c(k, i)], mat[c(i, j)]);
                mat[c(k, j)] -= u;
            }
        }
    }

    if mat[c(n - 1, n - 1)] == Gf(0) {
        return false;
    }

    // solve Lx = b
    for i in 0..n {
        for j in 0..i {
            let b_j = b[j];
            b[i] -= gf.mul(mat[c(i, j)], b_j);
        }
    }
    // solve Ux = b
    for i in (0..n).rev() {
        for j in i + 1..n {
            let b_j = b[j];
            b[i] -= gf.mul(mat[c(i, j)], b_j);
        }
        b[i] = gf.div(b[i], mat[c(i, i)]);
    }
    true
}

/// Syndromes S_1, ..., S_len of the error pattern `errors` (index, value).
#[cfg(test)]
fn syndromes_of(gf: &GaloisField, errors: &[(usize, u16)], len: usize) -> Vec<Gf> {
    (1..=len)
        .map(|j| {
            errors
                .iter()
                .map(|(i, e)| gf.mul(Gf(*e), gf.primitive_power(i * j)))
                .sum()
        })
        .collect()
}

/// The v x v syndrome (Hankel) matrix, row major.
#[cfg(test)]
fn hankel(syn: &[Gf], v: usize) -> Vec<Gf> {
    (0..v).flat_map(|i| syn[i..i + v].to_vec()).collect()
}

#[test]
fn test_solve_three_errors() {
    let gf = GaloisField::new(4).unwrap();
    let syn = syndromes_of(&gf, &[(0, 6), (7, 3), (13, 12)], 6);
    let matrix = hankel(&syn, 3);
    let mut mat = matrix.clone();
    let mut b = syn[3..6].to_vec();
    assert!(solve(&gf, &mut mat, &mut b, 3));
    for i in 0..3 {
        let lhs: Gf = (0..3).map(|j| gf.mul(matrix[i * 3 + j], b[j])).sum();
        assert_eq!(lhs, syn[3 + i], "row {}", i);
    }
}

#[test]
fn test_solve_needs_pivoting() {
    let gf = GaloisField::new(4).unwrap();
    // α * α^1 + 1 * α^2 = 0, so S_1 vanishes and rows must be swapped
    let syn = syndromes_of(&gf, &[(1, 2), (2, 1)], 4);
    assert_eq!(syn[0], Gf(0));
    let mut mat = hankel(&syn, 2);
    let mut b = syn[2..4].to_vec();
    assert!(solve(&gf, &mut mat, &mut b, 2));
    let (x1, x2) = (gf.primitive_power(1), gf.primitive_power(2));
    // b = [Λ_2, Λ_1]
    assert_eq!(b, vec![gf.mul(x1, x2), x1 + x2]);
}

#[test]
fn test_solve_singular_for_fewer_errors() {
    let gf = GaloisField::new(4).unwrap();
    // two errors give a singular 3 x 3 syndrome matrix
    let syn = syndromes_of(&gf, &[(4, 9), (10, 5)], 6);
    let mut mat = hankel(&syn, 3);
    let mut b = syn[3..6].to_vec();
    assert!(!solve(&gf, &mut mat, &mut b, 3));
}

#[test]
fn test_solve_upper_left_block() {
    let gf = GaloisField::new(4).unwrap();
    // single error at index 5: S_2 = X S_1 with X = α^5
    let syn = syndromes_of(&gf, &[(5, 7)], 6);
    let mut mat = hankel(&syn, 3);
    let mut b = vec![syn[1]];
    assert!(solve(&gf, &mut mat, &mut b, 3));
    assert_eq!(b, vec![gf.primitive_power(5)]);
}

#[test]
fn test_locator_two_errors() {
    let gf = GaloisField::new(4).unwrap();
    let (x1, x2) = (gf.primitive_power(2), gf.primitive_power(11));
    let syn: Vec<Gf> = (1..=6)
        .map(|j| {
            gf.mul(Gf(4), gf.primitive_power(2 * j)) + gf.mul(Gf(11), gf.primitive_power(11 * j))
        })
        .collect();
    let lambda = find_error_locator(&gf, &syn).unwrap();
    assert_eq!(lambda.to_vec(), vec![Gf(1), x1 + x2, gf.mul(x1, x2)]);
}
