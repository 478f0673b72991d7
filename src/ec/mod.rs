//! Short-Weierstrass curve arithmetic
//!
//! Implements the group law for curves y² = x³ + ax + b over a prime
//! field, with two interchangeable backends: straight affine formulas
//! (one field inversion per step) and Jacobian projective coordinates
//! (a single inversion per scalar multiplication). The backend is fixed
//! when the curve is constructed and `multiply_point` dispatches once.
//!
//! All operations are total: identity and opposite-point cases produce
//! the point at infinity, never an error.

mod jacobian;
mod point;

pub use point::Point;
pub(crate) use point::JacobianPoint;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::cache::{self, OpKey};
use crate::error::{Error, Result};

/// Internal coordinate system used during scalar multiplication
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coordinates {
    /// Affine (x, y) formulas; one field inversion per group operation
    Affine,
    /// Jacobian (X, Y, Z) formulas; one field inversion per multiply
    Jacobian,
}

/// Domain parameters and arithmetic of a prime-field curve.
///
/// The tuple (p, a, b, g, n, h) follows SEC 1: p is the field prime,
/// a and b the curve coefficients with 4a³ + 27b² ≠ 0 (mod p), g the
/// generator, n the (prime) order of g and h the cofactor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EllipticCurve {
    /// Field prime
    pub p: BigUint,
    /// Coefficient a of the curve equation
    pub a: BigUint,
    /// Coefficient b of the curve equation
    pub b: BigUint,
    /// Generator point
    pub g: Point,
    /// Order of the generator
    pub n: BigUint,
    /// Cofactor
    pub h: u32,
    /// Backend used during scalar multiplication
    pub coordinates: Coordinates,
}

impl EllipticCurve {
    /// Add two points on the curve.
    pub fn add_points(&self, p1: &Point, p2: &Point) -> Point {
        if p1.is_infinity() {
            return p2.clone();
        }
        if p2.is_infinity() {
            return p1.clone();
        }
        let key = OpKey::Add {
            p: self.p.clone(),
            a: self.a.clone(),
            b: self.b.clone(),
            lhs: p1.clone(),
            rhs: p2.clone(),
        };
        cache::memoize_point(key, || match self.coordinates {
            Coordinates::Affine => self.affine_add(p1, p2),
            Coordinates::Jacobian => {
                let sum = self.jacobian_add(
                    &JacobianPoint::from_affine(p1),
                    &JacobianPoint::from_affine(p2),
                );
                self.jacobian_to_affine(&sum)
            }
        })
    }

    /// Double a point on the curve.
    pub fn double_point(&self, point: &Point) -> Point {
        if point.is_infinity() {
            return Point::Infinity;
        }
        let key = OpKey::Double {
            p: self.p.clone(),
            a: self.a.clone(),
            b: self.b.clone(),
            point: point.clone(),
        };
        cache::memoize_point(key, || match self.coordinates {
            Coordinates::Affine => self.affine_double(point),
            Coordinates::Jacobian => {
                let doubled = self.jacobian_double(&JacobianPoint::from_affine(point));
                self.jacobian_to_affine(&doubled)
            }
        })
    }

    /// Scalar multiplication k·P by left-to-right double-and-add.
    ///
    /// k = 0 yields the identity. k >= n is permitted and produces the
    /// mathematically correct multiple; callers wanting reduction must
    /// reduce modulo n themselves.
    pub fn multiply_point(&self, k: &BigUint, point: &Point) -> Point {
        if k.is_zero() || point.is_infinity() {
            return Point::Infinity;
        }
        let key = OpKey::Multiply {
            p: self.p.clone(),
            a: self.a.clone(),
            b: self.b.clone(),
            k: k.clone(),
            point: point.clone(),
        };
        cache::memoize_point(key, || match self.coordinates {
            Coordinates::Affine => self.affine_multiply(k, point),
            Coordinates::Jacobian => {
                let product = self.jacobian_multiply(k, &JacobianPoint::from_affine(point));
                self.jacobian_to_affine(&product)
            }
        })
    }

    /// Does the point satisfy y² = x³ + ax + b (mod p)?
    ///
    /// The identity is reported as not on the curve.
    pub fn is_point_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => false,
            Point::Affine { x, y } => {
                let lhs = (y * y) % &self.p;
                let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
                lhs == rhs
            }
        }
    }

    /// Validated point constructor.
    ///
    /// Fails with [`Error::PointNotOnCurve`] when the coordinates do not
    /// satisfy the curve equation.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        let candidate = Point::new(x, y);
        if self.is_point_on_curve(&candidate) {
            Ok(candidate)
        } else {
            let Point::Affine { x, y } = candidate else {
                unreachable!("constructed affine");
            };
            Err(Error::PointNotOnCurve { x, y })
        }
    }

    /// The additive inverse -P = (x, p - y); the identity negates to
    /// itself.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: (&self.p - y) % &self.p,
            },
        }
    }

    /// Require a private scalar in [1, n-1].
    pub(crate) fn check_private_scalar(
        &self,
        scalar: &BigUint,
        context: &'static str,
    ) -> Result<()> {
        if scalar.is_zero() || *scalar >= self.n {
            return Err(Error::ScalarOutOfRange { context });
        }
        Ok(())
    }

    // --- affine backend ---

    fn affine_add(&self, p1: &Point, p2: &Point) -> Point {
        let (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) = (p1, p2) else {
            unreachable!("identity handled by caller");
        };
        if x1 == x2 {
            // Vertical line: opposite points, or doubling a 2-torsion
            // point (y = 0).
            if y1 != y2 || y1.is_zero() {
                return Point::Infinity;
            }
            return self.affine_double(p1);
        }
        let num = self.fsub(y2, y1);
        let den = self.fsub(x2, x1);
        let lambda = self.fmul(&num, &self.finv(&den));
        self.chord_tangent(&lambda, x1, y1, x2)
    }

    fn affine_double(&self, point: &Point) -> Point {
        let Point::Affine { x, y } = point else {
            unreachable!("identity handled by caller");
        };
        if y.is_zero() {
            return Point::Infinity;
        }
        let num = (BigUint::from(3u8) * x * x + &self.a) % &self.p;
        let den = (BigUint::from(2u8) * y) % &self.p;
        let lambda = self.fmul(&num, &self.finv(&den));
        self.chord_tangent(&lambda, x, y, x)
    }

    /// Shared tail of addition and doubling:
    /// x3 = λ² - x1 - x2, y3 = λ(x1 - x3) - y1.
    fn chord_tangent(&self, lambda: &BigUint, x1: &BigUint, y1: &BigUint, x2: &BigUint) -> Point {
        let x3 = self.fsub(&self.fsub(&self.fmul(lambda, lambda), x1), x2);
        let y3 = self.fsub(&self.fmul(lambda, &self.fsub(x1, &x3)), y1);
        Point::Affine { x: x3, y: y3 }
    }

    fn affine_multiply(&self, k: &BigUint, point: &Point) -> Point {
        let mut acc = Point::Infinity;
        for i in (0..k.bits()).rev() {
            acc = self.double_point(&acc);
            if k.bit(i) {
                acc = self.add_points(&acc, point);
            }
        }
        acc
    }

    // --- field helpers; operands are assumed reduced into [0, p) ---

    pub(crate) fn fmul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    pub(crate) fn fsub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        ((a + &self.p) - b) % &self.p
    }

    pub(crate) fn finv(&self, a: &BigUint) -> BigUint {
        cache::cached_mmi(a, &self.p)
            .expect("nonzero field element is invertible modulo a prime")
    }
}

#[cfg(test)]
mod tests;
