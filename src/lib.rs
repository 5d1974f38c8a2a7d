//! Reed-Solomon forward error correction.
//!
//! Assuming you have never heard of coding theory: by putting some
//! redundancy into transmitted data one can recover from transmission
//! errors without asking for the data again. A clever way to add redundancy
//! is the Reed-Solomon code. The details are relatively math heavy and
//! involve, for example, "higher" algebra (Galois fields). Any book about
//! coding theory should cover it, for example "Error Correction Coding:
//! Mathematical Methods and Algorithms" by Moon.
//!
//! A code is fixed by the symbol size m in bits and the number t of symbol
//! errors it can correct. A message of k = 2^m - 1 - 2t symbols is encoded
//! into a codeword of n = 2^m - 1 symbols, the message followed by 2t
//! parity symbols (_systematic encoding_). Each symbol is an u16 smaller
//! than 2^m.
//!
//! The decoder is syndrome based, see [LocatorAlgorithm] for the choices in
//! finding the error locator. If there are more than t errors the decoder
//! reports a [DecodingError] instead of returning a wrong codeword, but note
//! that this is not guaranteed for all error patterns: with enough errors
//! the received word can be closer to another codeword.
//!
//! ```
//! use rsfec::ReedSolomon;
//!
//! // RS(15, 9), 4 bit symbols, corrects 3 errors
//! let rs = ReedSolomon::new(4, 3).unwrap();
//! let message = [6, 15, 8, 9, 8, 3, 0, 0, 5];
//! let mut codeword = rs.generate_codeword(&message);
//! assert_eq!(&codeword[9..], &[0, 12, 11, 2, 0, 9]);
//!
//! codeword[2] = 0;
//! codeword[3] = 0;
//! codeword[11] = 0;
//! assert_eq!(rs.recover_message(&codeword), Some(message.to_vec()));
//! assert_eq!(rs.recover_codeword(&mut codeword), Ok(3));
//! ```
mod decoding;
mod encoding;
mod error;
pub mod galois;
mod polynomial;
mod reed_solomon;

pub use decoding::LocatorAlgorithm;
pub use error::{DecodingError, ParameterError};
pub use galois::{GaloisField, Gf};
pub use reed_solomon::{Builder, ReedSolomon};
