//! Affine and Jacobian point representations

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A point on a short-Weierstrass curve: either the point at infinity
/// (the group identity) or an affine pair (x, y) with 0 <= x, y < p.
///
/// Points are immutable values with structural equality: two points are
/// equal iff both are the identity or both carry identical coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity
    Infinity,
    /// An affine point (x, y)
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Construct an affine point from its coordinates.
    ///
    /// No curve membership check happens here; use
    /// [`EllipticCurve::point`](crate::EllipticCurve::point) for a
    /// validated constructor.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// The point at infinity
    pub fn infinity() -> Self {
        Point::Infinity
    }

    /// Is this the identity point?
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// x-coordinate, `None` for the identity
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Affine { x, .. } => Some(x),
            Point::Infinity => None,
        }
    }

    /// y-coordinate, `None` for the identity
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Affine { y, .. } => Some(y),
            Point::Infinity => None,
        }
    }
}

/// Jacobian projective triple (X, Y, Z).
///
/// Z = 0 encodes the identity; otherwise the triple represents the
/// affine point (X/Z^2, Y/Z^3). Never exposed to callers.
#[derive(Clone, Debug)]
pub(crate) struct JacobianPoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
}

impl JacobianPoint {
    /// Identity in Jacobian form: (1, 1, 0)
    pub(crate) fn identity() -> Self {
        JacobianPoint {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Lift an affine point: (x, y) -> (x, y, 1)
    pub(crate) fn from_affine(point: &Point) -> Self {
        match point {
            Point::Infinity => JacobianPoint::identity(),
            Point::Affine { x, y } => JacobianPoint {
                x: x.clone(),
                y: y.clone(),
                z: BigUint::one(),
            },
        }
    }
}
