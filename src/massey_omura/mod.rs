//! Massey-Omura three-pass commutative encryption
//!
//! Both parties hold private keys e in [1, n-1] with inverses
//! d = e⁻¹ mod n. Scalar multiplications by e and d commute, so a
//! message point travels sender -> receiver -> sender -> receiver and
//! comes out in the clear without either party learning the other's key:
//!
//! 1. sender:   C1 = e_A · M
//! 2. receiver: C2 = e_B · C1
//! 3. sender:   C3 = d_A · C2  (= e_B · M)
//! 4. receiver: M  = d_B · C3
//!
//! Step ordering is not enforced; calling the steps out of order
//! produces a wrong point, never a panic.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use once_cell::sync::OnceCell;
use rand::{CryptoRng, RngCore};

use crate::ec::{EllipticCurve, Point};
use crate::error::Result;
use crate::math;

/// One party's key material for a Massey-Omura exchange.
#[derive(Clone, Debug)]
pub struct MasseyOmura {
    curve: EllipticCurve,
    private_key: BigUint,
    inverse_key: BigUint,
    public_key: OnceCell<Point>,
}

impl MasseyOmura {
    /// Wrap an existing private key in [1, n-1].
    ///
    /// The decryption scalar e⁻¹ mod n is computed here once; on the
    /// prime-order registry curves it always exists.
    pub fn new(curve: EllipticCurve, private_key: BigUint) -> Result<Self> {
        curve.check_private_scalar(&private_key, "Massey-Omura private key")?;
        let inverse_key = math::mmi(&private_key, &curve.n)?;
        Ok(MasseyOmura {
            curve,
            private_key,
            inverse_key,
            public_key: OnceCell::new(),
        })
    }

    /// Generate a fresh key pair with a uniform private key in [1, n-1].
    pub fn generate<R: CryptoRng + RngCore>(curve: EllipticCurve, rng: &mut R) -> Result<Self> {
        let private_key = rng.gen_biguint_range(&BigUint::one(), &curve.n);
        Self::new(curve, private_key)
    }

    /// The curve the exchange runs on.
    pub fn curve(&self) -> &EllipticCurve {
        &self.curve
    }

    /// The public key e·G, computed on first access and memoized.
    pub fn public_key(&self) -> &Point {
        self.public_key
            .get_or_init(|| self.curve.multiply_point(&self.private_key, &self.curve.g))
    }

    /// First pass: the sender wraps the message point with its key.
    pub fn first_encryption_step(&self, message: &Point) -> Point {
        self.curve.multiply_point(&self.private_key, message)
    }

    /// Second pass: the receiver wraps the already-encrypted point with
    /// its own key.
    pub fn second_encryption_step(&self, received: &Point) -> Point {
        self.first_encryption_step(received)
    }

    /// Remove this party's encryption layer using e⁻¹ mod n.
    ///
    /// Called by the sender on the doubly-encrypted point (third pass)
    /// and by the receiver on the result (fourth pass).
    pub fn partial_decryption_step(&self, encrypted: &Point) -> Point {
        self.curve.multiply_point(&self.inverse_key, encrypted)
    }
}
