//! Prime-field elliptic curve primitives
//!
//! This crate implements the group law for short-Weierstrass curves
//! y² = x³ + ax + b over a prime field, using arbitrary-precision
//! integers so the same engine drives every curve from secp192k1 up to
//! secp521r1. On top of the arithmetic sit four constructions:
//!
//! - ECDSA signature generation and verification ([`ecdsa`])
//! - Koblitz deterministic message-to-point encoding ([`koblitz`])
//! - Elliptic-curve Diffie-Hellman key agreement ([`ecdh`])
//! - The Massey-Omura three-pass protocol ([`massey_omura`])
//!
//! Scalar multiplication runs in either affine or Jacobian coordinates,
//! chosen per curve at construction, and repeated results are memoized
//! in a bounded process-wide LRU (see [`cache`]).
//!
//! # Security
//!
//! This is an educational library. The arithmetic is variable-time and
//! makes no attempt to resist side channels; do not use it to protect
//! real secrets.
//!
//! # Example
//!
//! ```
//! use eckit::{curves, ecdsa::{self, Ecdsa}};
//! use num_bigint::BigUint;
//! use rand::rngs::OsRng;
//!
//! let signer = Ecdsa::new(curves::secp192k1(), BigUint::from(7u8))?;
//! let hash = BigUint::from(123_457u32);
//! let signature = signer.sign(&hash, &mut OsRng)?;
//! assert!(ecdsa::verify_signature(
//!     signer.curve(),
//!     signer.public_key(),
//!     &hash,
//!     &signature,
//! ));
//! # Ok::<(), eckit::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cache;
pub mod curves;
pub mod ec;
pub mod ecdh;
pub mod ecdsa;
pub mod error;
pub mod koblitz;
pub mod massey_omura;
pub mod math;

pub use ec::{Coordinates, EllipticCurve, Point};
pub use error::{Error, Result};
