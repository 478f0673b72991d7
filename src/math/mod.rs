//! Modular arithmetic over arbitrary-precision integers
//!
//! These are the number-theoretic building blocks the group law is made
//! of: Euclidean gcd, the extended Euclidean algorithm and the modular
//! multiplicative inverse derived from it, plus the square root shortcut
//! for primes p ≡ 3 (mod 4).

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(0, 0)` is defined as 0.
pub fn gcd(m: &BigUint, n: &BigUint) -> BigUint {
    let mut a = m.clone();
    let mut b = n.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `g = gcd(|m|, |n|)` non-negative and
/// `m*x + n*y = g`. Zero inputs never divide.
pub fn egcd(m: &BigInt, n: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut old_r = m.clone();
    let mut r = n.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();
    let mut old_t = BigInt::zero();
    let mut t = BigInt::one();

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        let next_s = &old_s - &q * &s;
        let next_t = &old_t - &q * &t;
        old_r = r;
        r = next_r;
        old_s = s;
        s = next_s;
        old_t = t;
        t = next_t;
    }

    // Truncated division keeps m*old_s + n*old_t = old_r throughout; the
    // remainder chain can terminate on a negative gcd for negative inputs.
    if old_r.is_negative() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Modular multiplicative inverse of `a` modulo `m`, in the range `[0, m)`.
///
/// Fails with [`Error::NoModularInverse`] when `gcd(a, m) != 1`.
pub fn mmi(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(Error::NoModularInverse {
            value: a.clone(),
            modulus: m.clone(),
        });
    }
    let a_int = BigInt::from(a.clone());
    let m_int = BigInt::from(m.clone());
    let (g, x, _) = egcd(&a_int, &m_int);
    if !g.is_one() {
        return Err(Error::NoModularInverse {
            value: a.clone(),
            modulus: m.clone(),
        });
    }
    // mod_floor with a positive modulus is non-negative, so the magnitude
    // is the value itself.
    let inv = x.mod_floor(&m_int);
    Ok(inv.magnitude().clone())
}

/// Square root of `r` modulo a prime `p` with `p ≡ 3 (mod 4)`.
///
/// Returns the smaller of the two roots so repeated calls are
/// deterministic, or `None` when `r` is not a quadratic residue. Every
/// curve in the registry has a field prime of this form.
pub fn sqrt_mod_p(r: &BigUint, p: &BigUint) -> Option<BigUint> {
    let reduced = r % p;
    let exp = (p + BigUint::one()) >> 2;
    let root = reduced.modpow(&exp, p);
    if (&root * &root) % p != reduced {
        return None;
    }
    let mirror = p - &root;
    if root <= mirror {
        Some(root)
    } else {
        Some(mirror)
    }
}
