//! Elliptic-curve Diffie-Hellman shared-secret derivation
//!
//! Wraps a private scalar and derives the public key lazily. The shared
//! secret is returned as a raw curve point; deriving a symmetric key
//! from it (typically by hashing the x-coordinate) is the caller's
//! concern.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use once_cell::sync::OnceCell;
use rand::{CryptoRng, RngCore};

use crate::ec::{EllipticCurve, Point};
use crate::error::Result;

/// One party's key material for an ECDH exchange.
#[derive(Clone, Debug)]
pub struct DiffieHellman {
    curve: EllipticCurve,
    private_key: BigUint,
    public_key: OnceCell<Point>,
}

impl DiffieHellman {
    /// Wrap an existing private key, which must lie in [1, n-1].
    pub fn new(curve: EllipticCurve, private_key: BigUint) -> Result<Self> {
        curve.check_private_scalar(&private_key, "ECDH private key")?;
        Ok(DiffieHellman {
            curve,
            private_key,
            public_key: OnceCell::new(),
        })
    }

    /// Generate a fresh key pair with a uniform private key in [1, n-1].
    pub fn generate<R: CryptoRng + RngCore>(curve: EllipticCurve, rng: &mut R) -> Self {
        let private_key = rng.gen_biguint_range(&BigUint::one(), &curve.n);
        DiffieHellman {
            curve,
            private_key,
            public_key: OnceCell::new(),
        }
    }

    /// The curve the exchange runs on.
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

    /// The shared secret d·Q_other.
    pub fn compute_shared_secret(&self, other_public_key: &Point) -> Point {
        self.curve
            .multiply_point(&self.private_key, other_public_key)
    }
}
