//! Koblitz message-to-point encoding
//!
//! Embeds a byte string into a curve point deterministically and
//! reversibly. The message bytes, read big-endian, form an integer M;
//! the encoder probes x = M·A + j for j = 0, 1, 2, … (A = 256, the byte
//! alphabet) until the curve equation has a square root at x. The
//! witness j travels with the point and is all the decoder needs besides
//! the x-coordinate.
//!
//! Only curves with cofactor 1 are supported: on them the embedded point
//! is guaranteed to live in the prime-order group.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::ec::{EllipticCurve, Point};
use crate::error::{Error, Result};
use crate::math;

/// Size of the byte alphabet, and the cap on embedding attempts.
const ALPHABET_SIZE: u32 = 256;

/// Encoder bound to one curve.
#[derive(Clone, Debug)]
pub struct Koblitz {
    curve: EllipticCurve,
}

impl Koblitz {
    /// Bind the encoder to a curve.
    ///
    /// Fails with [`Error::Encoding`] when the cofactor is not 1.
    pub fn new(curve: EllipticCurve) -> Result<Self> {
        if curve.h != 1 {
            return Err(Error::Encoding {
                context: "curve cofactor must be 1",
            });
        }
        Ok(Koblitz { curve })
    }

    /// The curve this encoder embeds into.
    pub fn curve(&self) -> &EllipticCurve {
        &self.curve
    }

    /// Largest chunk, in bytes, that always fits under the field prime.
    pub fn chunk_capacity(&self) -> usize {
        (((self.curve.p.bits() - 1) / 8) as usize).saturating_sub(1)
    }

    /// Encode a message as a curve point plus its witness j.
    ///
    /// Fails with [`Error::Encoding`] when the message integer would
    /// overrun the field prime (too long) or no embedding is found
    /// within the attempt budget.
    pub fn encode(&self, message: &[u8]) -> Result<(Point, u32)> {
        let m = BigUint::from_bytes_be(message);
        let alphabet = BigUint::from(ALPHABET_SIZE);
        if &m * &alphabet + &alphabet >= self.curve.p {
            return Err(Error::Encoding {
                context: "message integer overruns the field prime",
            });
        }
        let base = m * &alphabet;
        for j in 0..=ALPHABET_SIZE {
            let x = &base + j;
            let rhs = (&x * &x * &x + &self.curve.a * &x + &self.curve.b) % &self.curve.p;
            if let Some(y) = math::sqrt_mod_p(&rhs, &self.curve.p) {
                return Ok((Point::new(x, y), j));
            }
        }
        Err(Error::Encoding {
            context: "no quadratic residue within the attempt budget",
        })
    }

    /// Encode a message of any length as a sequence of (point, witness)
    /// pairs, chunked to fit under the field prime.
    pub fn encode_chunked(&self, message: &[u8]) -> Result<Vec<(Point, u32)>> {
        let capacity = self.chunk_capacity();
        if capacity == 0 {
            return Err(Error::Encoding {
                context: "field prime is too small for chunked encoding",
            });
        }
        message
            .chunks(capacity)
            .map(|chunk| self.encode(chunk))
            .collect()
    }
}

/// Recover the message bytes from an encoded point and its witness.
///
/// Needs no curve: the message is a function of the x-coordinate and j
/// alone. Fails with [`Error::Decoding`] when the pair cannot have come
/// out of [`Koblitz::encode`].
pub fn decode(point: &Point, j: u32) -> Result<Vec<u8>> {
    let Point::Affine { x, .. } = point else {
        return Err(Error::Decoding {
            context: "the identity encodes no message",
        });
    };
    let j_big = BigUint::from(j);
    if *x < j_big {
        return Err(Error::Decoding {
            context: "witness exceeds the x-coordinate",
        });
    }
    let (m, remainder) = (x - &j_big).div_rem(&BigUint::from(ALPHABET_SIZE));
    if !remainder.is_zero() {
        return Err(Error::Decoding {
            context: "x - j is not a multiple of the alphabet size",
        });
    }
    if m.is_zero() {
        return Ok(Vec::new());
    }
    Ok(m.to_bytes_be())
}

/// Decode a chunked encoding, concatenating the chunks in order.
pub fn decode_chunked(pairs: &[(Point, u32)]) -> Result<Vec<u8>> {
    let mut message = Vec::new();
    for (point, j) in pairs {
        message.extend(decode(point, *j)?);
    }
    Ok(message)
}

#[cfg(test)]
mod tests;
