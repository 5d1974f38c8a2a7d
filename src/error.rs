//! Error types for codec construction and decoding

use thiserror::Error;

/// Invalid parameters passed when constructing a field or a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// Symbol width outside of the supported range of 2 to 16 bits.
    #[error("symbol size must be between 2 and 16 bits, got {0}")]
    SymbolSize(u32),

    /// The correction capability `t` must satisfy `1 <= t` and `2t < n`.
    #[error("cannot correct {t} errors with a codeword of {n} symbols (need 1 <= t and 2t < n)")]
    CorrectionCapability { t: usize, n: usize },

    /// The polynomial does not generate the multiplicative group of GF(2^bits).
    #[error("polynomial {polynomial:#x} is not primitive for GF(2^{bits})")]
    NotPrimitive { bits: u32, polynomial: u32 },
}

/// A received codeword could not be corrected.
///
/// This is an expected outcome on a bad channel, the codeword is left as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// No error locator of degree at most `t` explains the syndromes.
    #[error("too many errors to correct")]
    TooManyErrors,

    /// The error locator did not lead to a consistent correction.
    ///
    /// Wrong number of roots, roots outside the codeword or a vanishing
    /// derivative. This usually means there were more than `t` errors.
    #[error("error locator is inconsistent with the received codeword")]
    Malfunction,
}
