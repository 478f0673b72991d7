//! Jacobian projective backend
//!
//! A triple (X, Y, Z) with Z != 0 represents the affine point
//! (X/Z², Y/Z³); Z = 0 is the identity. Working projectively defers the
//! expensive field inversion to a single conversion at the end of each
//! scalar multiplication.

use num_bigint::BigUint;

use super::{EllipticCurve, JacobianPoint, Point};

impl EllipticCurve {
    /// Jacobian point addition.
    pub(crate) fn jacobian_add(&self, p1: &JacobianPoint, p2: &JacobianPoint) -> JacobianPoint {
        if p1.is_identity() {
            return p2.clone();
        }
        if p2.is_identity() {
            return p1.clone();
        }

        let z1z1 = self.fmul(&p1.z, &p1.z);
        let z2z2 = self.fmul(&p2.z, &p2.z);
        let z1_cubed = self.fmul(&z1z1, &p1.z);
        let z2_cubed = self.fmul(&z2z2, &p2.z);

        let u1 = self.fmul(&p1.x, &z2z2);
        let u2 = self.fmul(&p2.x, &z1z1);
        let s1 = self.fmul(&p1.y, &z2_cubed);
        let s2 = self.fmul(&p2.y, &z1_cubed);

        if u1 == u2 {
            if s1 != s2 {
                return JacobianPoint::identity();
            }
            return self.jacobian_double(p1);
        }

        let h = self.fsub(&u2, &u1);
        let r = self.fsub(&s2, &s1);
        let h_squared = self.fmul(&h, &h);
        let h_cubed = self.fmul(&h_squared, &h);
        let v = self.fmul(&u1, &h_squared);

        // X3 = R² - H³ - 2·U1·H²
        let two_v = self.fmul(&BigUint::from(2u8), &v);
        let x3 = self.fsub(&self.fsub(&self.fmul(&r, &r), &h_cubed), &two_v);

        // Y3 = R·(U1·H² - X3) - S1·H³
        let y3 = self.fsub(
            &self.fmul(&r, &self.fsub(&v, &x3)),
            &self.fmul(&s1, &h_cubed),
        );

        // Z3 = H·Z1·Z2
        let z3 = self.fmul(&self.fmul(&h, &p1.z), &p2.z);

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Jacobian point doubling.
    ///
    /// A 2-torsion point (Y = 0) falls out naturally: Z' = 2·Y·Z = 0.
    pub(crate) fn jacobian_double(&self, point: &JacobianPoint) -> JacobianPoint {
        if point.is_identity() {
            return JacobianPoint::identity();
        }

        let y_squared = self.fmul(&point.y, &point.y);
        let z_squared = self.fmul(&point.z, &point.z);

        // S = 4·X·Y²
        let s = self.fmul(&self.fmul(&BigUint::from(4u8), &point.x), &y_squared);

        // M = 3·X² + a·Z⁴
        let z_fourth = self.fmul(&z_squared, &z_squared);
        let m = (BigUint::from(3u8) * &point.x * &point.x + &self.a * z_fourth) % &self.p;

        // X' = M² - 2·S
        let two_s = self.fmul(&BigUint::from(2u8), &s);
        let x3 = self.fsub(&self.fmul(&m, &m), &two_s);

        // Y' = M·(S - X') - 8·Y⁴
        let eight_y_fourth = self.fmul(&BigUint::from(8u8), &self.fmul(&y_squared, &y_squared));
        let y3 = self.fsub(&self.fmul(&m, &self.fsub(&s, &x3)), &eight_y_fourth);

        // Z' = 2·Y·Z
        let z3 = self.fmul(&self.fmul(&BigUint::from(2u8), &point.y), &point.z);

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Left-to-right double-and-add over the bits of k, most significant
    /// first, starting from the identity.
    pub(crate) fn jacobian_multiply(&self, k: &BigUint, point: &JacobianPoint) -> JacobianPoint {
        let mut acc = JacobianPoint::identity();
        for i in (0..k.bits()).rev() {
            acc = self.jacobian_double(&acc);
            if k.bit(i) {
                acc = self.jacobian_add(&acc, point);
            }
        }
        acc
    }

    /// Drop back to affine coordinates; the single inversion of the
    /// whole multiplication happens here.
    pub(crate) fn jacobian_to_affine(&self, point: &JacobianPoint) -> Point {
        if point.is_identity() {
            return Point::Infinity;
        }
        let z_inv = self.finv(&point.z);
        let z_inv_squared = self.fmul(&z_inv, &z_inv);
        let z_inv_cubed = self.fmul(&z_inv_squared, &z_inv);
        Point::Affine {
            x: self.fmul(&point.x, &z_inv_squared),
            y: self.fmul(&point.y, &z_inv_cubed),
        }
    }
}
