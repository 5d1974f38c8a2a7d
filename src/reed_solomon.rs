//! The codec, tying field, encoder and decoder together.
use log::debug;

use crate::decoding::{self, LocatorAlgorithm};
use crate::encoding::ecc_block;
use crate::error::{DecodingError, ParameterError};
use crate::galois::{GaloisField, Gf};
use crate::polynomial;

/// A Reed-Solomon code RS(n, k) over GF(2^m) correcting up to t errors.
///
/// Codewords have n = 2^m - 1 symbols, the first k = n - 2t are the message
/// and the last 2t the parity. The field tables and the generator polynomial
/// are computed once in the constructor. All methods take `&self` and keep
/// their working memory local to the call, so one instance can be shared
/// by many threads.
#[derive(Debug, Clone)]
pub struct ReedSolomon {
    gf: GaloisField,
    generator: Vec<Gf>,
    algorithm: LocatorAlgorithm,
}

/// Builder for [ReedSolomon] with non-default settings.
#[derive(Debug, Clone)]
pub struct Builder {
    symbol_size: u32,
    correction_capability: usize,
    polynomial: Option<u32>,
    algorithm: LocatorAlgorithm,
}

impl Builder {
    /// Use `polynomial` instead of the default primitive polynomial.
    ///
    /// See [GaloisField::with_polynomial] for the representation.
    pub fn polynomial(mut self, polynomial: u32) -> Self {
        self.polynomial = Some(polynomial);
        self
    }

    /// Select the algorithm used to find the error locator.
    pub fn locator(mut self, algorithm: LocatorAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn build(self) -> Result<ReedSolomon, ParameterError> {
        let gf = match self.polynomial {
            Some(p) => GaloisField::with_polynomial(self.symbol_size, p)?,
            None => GaloisField::new(self.symbol_size)?,
        };
        let t = self.correction_capability;
        let n = gf.order();
        if t == 0 || 2 * t >= n {
            return Err(ParameterError::CorrectionCapability { t, n });
        }
        let generator = polynomial::generator(&gf, 2 * t);
        debug!(
            "RS({}, {}) over GF(2^{}) with polynomial {:#x}",
            n,
            n - 2 * t,
            gf.bits(),
            gf.polynomial()
        );
        Ok(ReedSolomon {
            gf,
            generator,
            algorithm: self.algorithm,
        })
    }
}

impl ReedSolomon {
    /// Create a code with `symbol_size` bits per symbol correcting up to
    /// `correction_capability` symbol errors.
    ///
    /// Fails if the symbol size is not in 2..=16 or if not 1 <= t and 2t < n.
    pub fn new(symbol_size: u32, correction_capability: usize) -> Result<Self, ParameterError> {
        Self::builder(symbol_size, correction_capability).build()
    }

    pub fn builder(symbol_size: u32, correction_capability: usize) -> Builder {
        Builder {
            symbol_size,
            correction_capability,
            polynomial: None,
            algorithm: LocatorAlgorithm::default(),
        }
    }

    /// Number of symbols n in a codeword.
    pub fn codeword_size(&self) -> usize {
        self.gf.order()
    }

    /// Number of message symbols k in a codeword.
    pub fn message_size(&self) -> usize {
        self.codeword_size() - self.fec_size()
    }

    /// Number of parity symbols 2t.
    pub fn fec_size(&self) -> usize {
        self.generator.len() - 1
    }

    /// Bits m per symbol.
    pub fn symbol_size(&self) -> u32 {
        self.gf.bits()
    }

    /// Maximal number t of symbol errors which can be corrected.
    pub fn correction_capability(&self) -> usize {
        self.fec_size() / 2
    }

    pub fn locator_algorithm(&self) -> LocatorAlgorithm {
        self.algorithm
    }

    pub fn field(&self) -> &GaloisField {
        &self.gf
    }

    /// Coefficients of the generator polynomial, lowest power first.
    pub fn generator_polynomial(&self) -> &[Gf] {
        &self.generator
    }

    /// Compute the parity symbols of `message` and write them to `parity`.
    ///
    /// # Panics
    ///
    /// If `message` does not have [message_size](Self::message_size) symbols
    /// or `parity` does not have [fec_size](Self::fec_size) symbols.
    pub fn encode_parity(&self, message: &[u16], parity: &mut [u16]) {
        assert_eq!(message.len(), self.message_size(), "wrong message size");
        debug_assert!(
            message.iter().all(|s| self.gf.contains(Gf(*s))),
            "message symbol out of range"
        );
        ecc_block(&self.gf, message, &self.generator, parity);
    }

    /// Compute the codeword for `message`, the message followed by the parity.
    ///
    /// # Panics
    ///
    /// If `message` does not have [message_size](Self::message_size) symbols.
    pub fn generate_codeword(&self, message: &[u16]) -> Vec<u16> {
        let k = self.message_size();
        assert_eq!(message.len(), k, "wrong message size");
        let mut codeword = vec![0; self.codeword_size()];
        codeword[..k].copy_from_slice(message);
        let (message, parity) = codeword.split_at_mut(k);
        self.encode_parity(message, parity);
        codeword
    }

    /// Syndromes S_1, ..., S_2t of `codeword`, all zero for a valid codeword.
    pub fn syndromes(&self, codeword: &[u16]) -> Vec<u16> {
        self.check_codeword_size(codeword);
        let mut out = vec![Gf(0); self.fec_size()];
        decoding::primitive_element_evaluation(&self.gf, codeword, &mut out);
        out.into_iter().map(u16::from).collect()
    }

    /// Check if `codeword` is a valid codeword.
    pub fn is_codeword(&self, codeword: &[u16]) -> bool {
        self.syndromes(codeword).iter().all(|s| *s == 0)
    }

    /// Correct up to t symbol errors in `codeword` in-place.
    ///
    /// Returns the number of corrected symbols. On error the codeword
    /// could not be recovered and is left as received.
    ///
    /// # Panics
    ///
    /// If `codeword` does not have [codeword_size](Self::codeword_size) symbols.
    pub fn recover_codeword(&self, codeword: &mut [u16]) -> Result<usize, DecodingError> {
        self.check_codeword_size(codeword);
        decoding::decode(&self.gf, codeword, self.fec_size(), self.algorithm)
    }

    /// Recover the message from a received codeword.
    ///
    /// The codeword itself is not modified, `None` is returned if there were
    /// too many errors.
    pub fn recover_message(&self, codeword: &[u16]) -> Option<Vec<u16>> {
        let mut corrected = codeword.to_vec();
        self.recover_codeword(&mut corrected).ok()?;
        corrected.truncate(self.message_size());
        Some(corrected)
    }

    fn check_codeword_size(&self, codeword: &[u16]) {
        assert_eq!(
            codeword.len(),
            self.codeword_size(),
            "wrong codeword size"
        );
        debug_assert!(
            codeword.iter().all(|s| self.gf.contains(Gf(*s))),
            "codeword symbol out of range"
        );
    }
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
const MESSAGE: [u16; 9] = [6, 15, 8, 9, 8, 3, 0, 0, 5];

#[cfg(test)]
const CODEWORD: [u16; 15] = [6, 15, 8, 9, 8, 3, 0, 0, 5, 0, 12, 11, 2, 0, 9];

#[test]
fn test_sizes() {
    let rs = ReedSolomon::new(4, 3).unwrap();
    assert_eq!(rs.codeword_size(), 15);
    assert_eq!(rs.message_size(), 9);
    assert_eq!(rs.fec_size(), 6);
    assert_eq!(rs.symbol_size(), 4);
    assert_eq!(rs.correction_capability(), 3);

    let rs = ReedSolomon::new(8, 16).unwrap();
    assert_eq!(rs.codeword_size(), 255);
    assert_eq!(rs.message_size(), 223);
    assert_eq!(rs.fec_size(), 32);
}

#[test]
fn test_invalid_parameters() {
    assert_eq!(
        ReedSolomon::new(4, 0).unwrap_err(),
        ParameterError::CorrectionCapability { t: 0, n: 15 }
    );
    assert_eq!(
        ReedSolomon::new(4, 8).unwrap_err(),
        ParameterError::CorrectionCapability { t: 8, n: 15 }
    );
    assert_eq!(
        ReedSolomon::new(0, 1).unwrap_err(),
        ParameterError::SymbolSize(0)
    );
    assert_eq!(
        ReedSolomon::builder(4, 2).polynomial(0x1F).build().unwrap_err(),
        ParameterError::NotPrimitive {
            bits: 4,
            polynomial: 0x1F
        }
    );
    // largest possible t for GF(16)
    let rs = ReedSolomon::new(4, 7).unwrap();
    assert_eq!(rs.message_size(), 1);
    // smallest field
    let rs = ReedSolomon::new(2, 1).unwrap();
    assert_eq!(rs.codeword_size(), 3);
}

#[test]
fn test_generate_codeword() {
    let rs = ReedSolomon::new(4, 3).unwrap();
    assert_eq!(rs.generate_codeword(&MESSAGE), CODEWORD.to_vec());
    assert!(rs.is_codeword(&CODEWORD));
    assert_eq!(rs.syndromes(&CODEWORD), vec![0; 6]);
}

#[test]
#[should_panic(expected = "wrong message size")]
fn test_generate_codeword_wrong_size() {
    let rs = ReedSolomon::new(4, 3).unwrap();
    rs.generate_codeword(&MESSAGE[..8]);
}

#[test]
fn test_recover() {
    let rs = ReedSolomon::new(4, 3).unwrap();
    let mut received = CODEWORD;
    received[2] = 0;
    assert!(!rs.is_codeword(&received));
    assert_eq!(rs.recover_message(&received), Some(MESSAGE.to_vec()));
    assert_eq!(rs.recover_codeword(&mut received), Ok(1));
    assert_eq!(received, CODEWORD);
    // already valid
    assert_eq!(rs.recover_codeword(&mut received), Ok(0));
    assert_eq!(received, CODEWORD);
}

#[test]
fn test_recover_too_many() {
    for algorithm in [
        LocatorAlgorithm::BerlekampMassey,
        LocatorAlgorithm::PetersonGorensteinZierler,
    ] {
        let rs = ReedSolomon::builder(4, 3).locator(algorithm).build().unwrap();
        let mut received = CODEWORD;
        for i in [0, 2, 3, 11] {
            received[i] = 0;
        }
        let damaged = received;
        assert!(rs.recover_codeword(&mut received).is_err());
        assert_eq!(received, damaged);
        assert_eq!(rs.recover_message(&received), None);
    }
}

#[test]
fn test_custom_polynomial() {
    // x^8 + x^5 + x^3 + x^2 + 1 as used by Data Matrix
    let rs = ReedSolomon::builder(8, 5).polynomial(0x12D).build().unwrap();
    let message: Vec<u16> = (0..245).map(|i| (i * 31 % 256) as u16).collect();
    let codeword = rs.generate_codeword(&message);
    let mut received = codeword.clone();
    for (i, idx) in [0, 17, 100, 244, 254].iter().enumerate() {
        received[*idx] ^= 1 + i as u16;
    }
    assert_eq!(rs.recover_codeword(&mut received), Ok(5));
    assert_eq!(received, codeword);
}

#[test]
fn test_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReedSolomon>();

    let rs = ReedSolomon::new(8, 8).unwrap();
    std::thread::scope(|s| {
        for worker in 0..4u16 {
            let rs = &rs;
            s.spawn(move || {
                let message: Vec<u16> = (0..rs.message_size())
                    .map(|i| (i as u16).wrapping_mul(worker + 3) % 256)
                    .collect();
                let mut codeword = rs.generate_codeword(&message);
                for i in 0..8 {
                    codeword[i * 30 + worker as usize] ^= 0x55;
                }
                assert_eq!(rs.recover_codeword(&mut codeword), Ok(8));
                assert_eq!(&codeword[..rs.message_size()], &message[..]);
            });
        }
    });
}
