//! ECDSA signature generation and verification
//!
//! The message hash enters as an integer; producing it is the caller's
//! concern. Nonces come from a caller-supplied CSPRNG such as
//! `rand::rngs::OsRng`.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use once_cell::sync::OnceCell;
use rand::{CryptoRng, RngCore};

use crate::cache;
use crate::ec::{EllipticCurve, Point};
use crate::error::Result;

/// An ECDSA signature: the pair (r, s), both in [1, n-1].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// First signature component
    pub r: BigUint,
    /// Second signature component
    pub s: BigUint,
}

/// Signing context: a private scalar on a curve, with the public key
/// derived on first use.
#[derive(Clone, Debug)]
pub struct Ecdsa {
    curve: EllipticCurve,
    private_key: BigUint,
    public_key: OnceCell<Point>,
}

impl Ecdsa {
    /// Create a signing context from an existing private key.
    ///
    /// The key must lie in [1, n-1].
    pub fn new(curve: EllipticCurve, private_key: BigUint) -> Result<Self> {
        curve.check_private_scalar(&private_key, "ECDSA private key")?;
        Ok(Ecdsa {
            curve,
            private_key,
            public_key: OnceCell::new(),
        })
    }

    /// Generate a fresh key pair with a uniform private key in [1, n-1].
    pub fn generate<R: CryptoRng + RngCore>(curve: EllipticCurve, rng: &mut R) -> Self {
        let private_key = rng.gen_biguint_range(&BigUint::one(), &curve.n);
        Ecdsa {
            curve,
            private_key,
            public_key: OnceCell::new(),
        }
    }

    /// The curve this context signs on.
    pub fn curve(&self) -> &EllipticCurve {
        &self.curve
    }

    /// The private scalar d.
    pub fn private_key(&self) -> &BigUint {
        &self.private_key
    }

    /// The public key Q = d·G, computed on first access and memoized.
    pub fn public_key(&self) -> &Point {
        self.public_key
            .get_or_init(|| self.curve.multiply_point(&self.private_key, &self.curve.g))
    }

    /// Sign an integer message hash.
    ///
    /// Samples the nonce k uniformly from [1, n-1], resampling whenever
    /// r or s comes out zero.
    pub fn sign<R: CryptoRng + RngCore>(
        &self,
        message_hash: &BigUint,
        rng: &mut R,
    ) -> Result<Signature> {
        let n = &self.curve.n;
        loop {
            let k = rng.gen_biguint_range(&BigUint::one(), n);
            let nonce_point = self.curve.multiply_point(&k, &self.curve.g);
            let Some(x) = nonce_point.x() else {
                // k·G = O cannot happen for k in [1, n-1]; resample
                // rather than trust the caller's curve order.
                continue;
            };
            let r = x % n;
            if r.is_zero() {
                continue;
            }
            let k_inv = cache::cached_mmi(&k, n)?;
            let s = ((message_hash + &r * &self.private_key) * k_inv) % n;
            if s.is_zero() {
                continue;
            }
            return Ok(Signature { r, s });
        }
    }
}

/// Verify a signature against a public key and message hash.
///
/// Invalid or out-of-range signatures yield `false`, never an error.
pub fn verify_signature(
    curve: &EllipticCurve,
    public_key: &Point,
    message_hash: &BigUint,
    signature: &Signature,
) -> bool {
    let n = &curve.n;
    if signature.r.is_zero()
        || signature.s.is_zero()
        || signature.r >= *n
        || signature.s >= *n
    {
        return false;
    }
    let Ok(w) = cache::cached_mmi(&signature.s, n) else {
        return false;
    };
    let u1 = (message_hash * &w) % n;
    let u2 = (&signature.r * &w) % n;
    let candidate = curve.add_points(
        &curve.multiply_point(&u1, &curve.g),
        &curve.multiply_point(&u2, public_key),
    );
    match candidate.x() {
        Some(x) => x % n == signature.r,
        None => false,
    }
}
