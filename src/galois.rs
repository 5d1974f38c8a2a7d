//! Arithmetic in the binary extension fields GF(2^m), 2 <= m <= 16.
//!
//! An element of GF(2^m) is stored in an u16. Its bits correspond to the
//! coefficients of a polynomial of degree at most m - 1 with the least
//! significant bit being the coefficient for 1. For example, in GF(16):
//!
//! > 11 = 0b1011 = x^3 + x + 1.
//!
//! Addition can be done coefficient by coefficient, so it is a XOR of the
//! bits. Every element is its own additive inverse.
//!
//! Multiplying two polynomials can lead to powers of x higher than m - 1.
//! So multiplication is defined modulo a fixed polynomial of degree m. If
//! this polynomial is primitive, the powers 1, x, x^2, ..., x^(n - 1) with
//! n = 2^m - 1 enumerate all nonzero elements, and x^n = 1. We say "x is a
//! generator" and call it α.
//!
//! So we can identify any nonzero element with a power i of α. To multiply
//! a and b we look up their powers i and j, then a * b = α^(i + j). The two
//! lookup tables are called `log` and `anti_log` in this module. In contrast
//! to a fixed size field they are computed at runtime, once per field.
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::error::ParameterError;

/// Primitive polynomials used by default, indexed by the symbol size m.
const PRIMITIVE_POLYNOMIALS: [u32; 17] = [
    0, 0, 0x7, 0xB, 0x13, 0x25, 0x43, 0x89, 0x11D, 0x211, 0x409, 0x805, 0x1053, 0x201B, 0x4443,
    0x8003, 0x1100B,
];

/// Smallest supported symbol size in bits.
pub const MIN_SYMBOL_SIZE: u32 = 2;

/// Largest supported symbol size in bits.
pub const MAX_SYMBOL_SIZE: u32 = 16;

/// An element of GF(2^m).
///
/// Addition and subtraction do not depend on the field polynomial and are
/// available as operators. Multiplication needs the lookup tables and is
/// done through [GaloisField].
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Gf(pub u16);

impl fmt::Debug for Gf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_fmt(format_args!("{}₂", self.0))
    }
}

impl fmt::Display for Gf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<Gf> for Gf {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Gf(self.0 ^ rhs.0)
    }
}

impl AddAssign<Gf> for Gf {
    fn add_assign(&mut self, rhs: Gf) {
        *self = *self + rhs;
    }
}

impl Sub<Gf> for Gf {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl SubAssign<Gf> for Gf {
    fn sub_assign(&mut self, rhs: Gf) {
        *self = *self - rhs;
    }
}

impl Mul<usize> for Gf {
    type Output = Self;

    fn mul(self, rhs: usize) -> Self {
        // Multiplication with usize is interpretated as
        // n-times addition. Because elements are their own additive inverse
        // we only check if the number of additions is even or odd.
        Gf(self.0 * (rhs % 2) as u16)
    }
}

impl Neg for Gf {
    type Output = Self;

    fn neg(self) -> Self {
        self
    }
}

impl From<u16> for Gf {
    fn from(i: u16) -> Self {
        Gf(i)
    }
}

impl From<Gf> for u16 {
    fn from(a: Gf) -> Self {
        a.0
    }
}

impl Sum for Gf {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Gf(0), |a, b| a + b)
    }
}

/// Lookup tables for GF(2^m) and the table driven arithmetic.
///
/// The tables are built once in the constructor and never change, so a
/// field can be shared between threads.
#[derive(Clone)]
pub struct GaloisField {
    bits: u32,
    polynomial: u32,
    /// `anti_log[i]` is α^i, for i in 0..n.
    anti_log: Vec<u16>,
    /// `log[a]` is i with α^i = a, `log[0]` is unused.
    log: Vec<u16>,
}

impl GaloisField {
    /// Create GF(2^bits) with the default primitive polynomial.
    pub fn new(bits: u32) -> Result<Self, ParameterError> {
        Self::with_polynomial(bits, Self::default_polynomial(bits)?)
    }

    /// Create GF(2^bits) defined by `polynomial`.
    ///
    /// The polynomial is given in bit representation including the leading
    /// term, for example `0x13` for x^4 + x + 1. It must be primitive.
    pub fn with_polynomial(bits: u32, polynomial: u32) -> Result<Self, ParameterError> {
        if !(MIN_SYMBOL_SIZE..=MAX_SYMBOL_SIZE).contains(&bits) {
            return Err(ParameterError::SymbolSize(bits));
        }
        let not_primitive = ParameterError::NotPrimitive { bits, polynomial };
        if polynomial >> bits != 1 {
            return Err(not_primitive);
        }

        let order = (1usize << bits) - 1;
        let mut anti_log = vec![0u16; order];
        let mut log = vec![0u16; order + 1];
        let mut p: u32 = 1; // polynomial representation
        for i in 0..order {
            // Coming back to 1 (or any visited element) before all
            // nonzero elements were seen means x is not a generator.
            if p == 0 || (i > 0 && (p == 1 || log[p as usize] != 0)) {
                return Err(not_primitive);
            }
            anti_log[i] = p as u16;
            log[p as usize] = i as u16;

            // compute x^(i + 1)
            p <<= 1;
            if p > order as u32 {
                p ^= polynomial;
            }
        }
        if p != 1 {
            return Err(not_primitive);
        }

        Ok(Self {
            bits,
            polynomial,
            anti_log,
            log,
        })
    }

    /// The primitive polynomial used by [GaloisField::new] for `bits`.
    pub fn default_polynomial(bits: u32) -> Result<u32, ParameterError> {
        PRIMITIVE_POLYNOMIALS
            .get(bits as usize)
            .copied()
            .filter(|p| *p != 0)
            .ok_or(ParameterError::SymbolSize(bits))
    }

    /// Symbol size m in bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The field polynomial in bit representation.
    pub fn polynomial(&self) -> u32 {
        self.polynomial
    }

    /// Order n = 2^m - 1 of the multiplicative group.
    pub fn order(&self) -> usize {
        self.anti_log.len()
    }

    /// Check that `a` fits into m bits.
    pub fn contains(&self, a: Gf) -> bool {
        (a.0 as usize) <= self.order()
    }

    /// Return α^i, the exponent is taken modulo n.
    pub fn primitive_power(&self, i: usize) -> Gf {
        Gf(self.anti_log[i % self.order()])
    }

    /// Return i in 0..n such that α^i = a.
    pub fn log(&self, a: Gf) -> usize {
        assert_ne!(a.0, 0, "log of 0");
        self.log[a.0 as usize] as usize
    }

    pub fn mul(&self, a: Gf, b: Gf) -> Gf {
        debug_assert!(self.contains(a) && self.contains(b));
        if a.0 == 0 || b.0 == 0 {
            return Gf(0);
        }
        let ia = self.log[a.0 as usize] as usize;
        let ib = self.log[b.0 as usize] as usize;
        Gf(self.anti_log[(ia + ib) % self.order()])
    }

    /// Multiplicative inverse, panics for 0.
    pub fn inv(&self, a: Gf) -> Gf {
        assert_ne!(a.0, 0, "inverse of zero");
        let n = self.order();
        Gf(self.anti_log[(n - self.log[a.0 as usize] as usize) % n])
    }

    pub fn div(&self, a: Gf, b: Gf) -> Gf {
        assert_ne!(b.0, 0, "division by zero");
        if a.0 == 0 {
            return Gf(0);
        }
        let n = self.order();
        let ia = self.log[a.0 as usize] as usize;
        let ib = self.log[b.0 as usize] as usize;
        Gf(self.anti_log[(ia + n - ib) % n])
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("bits", &self.bits)
            .field("polynomial", &format_args!("{:#x}", self.polynomial))
            .finish()
    }
}

#[test]
fn sanity_check_tables() {
    use std::collections::HashSet;

    for bits in MIN_SYMBOL_SIZE..=MAX_SYMBOL_SIZE {
        let gf = GaloisField::new(bits).unwrap();
        let n = gf.order();
        assert_eq!(n, (1 << bits) - 1);

        let anti_log: HashSet<u16> = gf.anti_log.iter().cloned().collect();
        assert_eq!(anti_log.len(), n);

        for i in 0..n {
            assert_eq!(i, gf.log[gf.anti_log[i] as usize] as usize);
            assert_eq!(i + 1, gf.anti_log[gf.log[i + 1] as usize] as usize);
        }
    }
}

#[test]
fn gf16_tables() {
    let gf = GaloisField::new(4).unwrap();
    assert_eq!(
        gf.anti_log,
        vec![1, 2, 4, 8, 3, 6, 12, 11, 5, 10, 7, 14, 15, 13, 9]
    );
}

#[test]
fn gf256_mul() {
    let gf = GaloisField::new(8).unwrap();
    assert_eq!(gf.mul(Gf(123), Gf(1)), Gf(123));
    assert_eq!(gf.mul(Gf(234), Gf(0)), Gf(0));
    assert_eq!(gf.mul(Gf(0), Gf(23)), Gf(0));
    let product = [4, 8, 16, 32]
        .iter()
        .fold(Gf(2), |acc, b| gf.mul(acc, Gf(*b)));
    assert_eq!(product, gf.primitive_power(15));
    assert_eq!(product, Gf(38));
}

#[test]
fn gf256_div_mul() {
    let gf = GaloisField::new(8).unwrap();
    for a in 0..=255 {
        for b in 1..=255 {
            let a_div_b = gf.div(Gf(a), Gf(b));
            assert_eq!(gf.mul(a_div_b, Gf(b)), Gf(a));
        }
    }
}

#[test]
fn gf16_inverse() {
    let gf = GaloisField::new(4).unwrap();
    for a in 1..16 {
        assert_eq!(gf.mul(Gf(a), gf.inv(Gf(a))), Gf(1));
    }
}

#[test]
fn test_power_wraps() {
    let gf = GaloisField::new(5).unwrap();
    let mut a = Gf(1);
    for i in 0..100 {
        assert_eq!(gf.primitive_power(i), a);
        a = gf.mul(a, Gf(2));
    }
}

#[test]
fn test_neg() {
    for a in 0..255 {
        let a = Gf(a);
        let ma = -a;
        assert_eq!(a + ma, Gf(0), "{:?}, {:?}", a, ma);
    }
}

#[test]
fn test_mul_usize() {
    assert_eq!(Gf(5) * 1, Gf(5));
    assert_eq!(Gf(5) * 2, Gf(5) + Gf(5));
    assert_eq!(Gf(5) * 3, Gf(5));
}

#[test]
fn reject_bad_parameters() {
    assert_eq!(GaloisField::new(1).unwrap_err(), ParameterError::SymbolSize(1));
    assert_eq!(
        GaloisField::new(17).unwrap_err(),
        ParameterError::SymbolSize(17)
    );
    // x^4 + x^3 + x^2 + x + 1 is irreducible but x has order 5
    assert_eq!(
        GaloisField::with_polynomial(4, 0x1F).unwrap_err(),
        ParameterError::NotPrimitive {
            bits: 4,
            polynomial: 0x1F
        }
    );
    // wrong degree
    assert!(GaloisField::with_polynomial(4, 0x11D).is_err());
    // x^4 + x^3 + 1 is primitive as well
    let gf = GaloisField::with_polynomial(4, 0x19).unwrap();
    assert_eq!(gf.primitive_power(4), Gf(9));
}
