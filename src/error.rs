//! Error types for elliptic curve operations

use num_bigint::BigUint;
use thiserror::Error;

/// Result type for eckit operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for eckit operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Curve name is not present in the registry
    #[error("Unknown curve: {name}")]
    UnknownCurve {
        /// The name that failed the lookup
        name: String,
    },

    /// Coordinates do not satisfy the curve equation
    #[error("Point ({x}, {y}) is not on the curve")]
    PointNotOnCurve {
        /// x-coordinate of the rejected point
        x: BigUint,
        /// y-coordinate of the rejected point
        y: BigUint,
    },

    /// Modular inverse does not exist (operand not coprime to the modulus)
    #[error("No modular inverse of {value} modulo {modulus}")]
    NoModularInverse {
        /// Value whose inverse was requested
        value: BigUint,
        /// The modulus
        modulus: BigUint,
    },

    /// Message could not be embedded as a curve point
    #[error("Koblitz encoding failed: {context}")]
    Encoding {
        /// Reason the encoding was rejected
        context: &'static str,
    },

    /// A (point, j) pair does not correspond to a valid plaintext
    #[error("Koblitz decoding failed: {context}")]
    Decoding {
        /// Reason the decoding was rejected
        context: &'static str,
    },

    /// Caller-supplied scalar is outside the range the operation requires
    #[error("{context}: scalar out of range")]
    ScalarOutOfRange {
        /// Operation that rejected the scalar
        context: &'static str,
    },
}
