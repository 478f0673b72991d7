//! Group law unit tests
//!
//! Known-answer vectors are on secp192k1; the structural properties are
//! exercised on several registry curves and on both backends.

use super::*;
use crate::curves;

fn h(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 16).expect("test vector hex")
}

fn u(v: u64) -> BigUint {
    BigUint::from(v)
}

/// A fixed point on secp192k1 (a known multiple of G)
fn sample_point_1() -> Point {
    Point::new(
        h("F091CF6331B1747684F5D2549CD1D4B3A8BED93B94F93CB6"),
        h("FD7AF42E1E7565A02E6268661C5E42E603DA2D98A18F2ED5"),
    )
}

fn sample_point_2() -> Point {
    Point::new(
        h("6E43B7DCAE2FD5E0BF2A1BA7615CA3B9065487C9A67B4583"),
        h("C48DCEA47AE08E84D5FEDC3D09E4C19606A290F7A19A6A58"),
    )
}

mod addition_tests {
    use super::*;

    #[test]
    fn test_known_point_addition() {
        let curve = curves::secp192k1();
        let expected = Point::new(
            h("3CD61E370D02CA0687C0B5F7EBF6D0373F4DD0CCCCB7CC2D"),
            h("2C4BEFD9B02F301EB4014504F0533AA7EB19E9EA56441F78"),
        );
        let sum = curve.add_points(&sample_point_1(), &sample_point_2());
        assert_eq!(sum, expected);
    }

    #[test]
    fn test_addition_with_identity() {
        let curve = curves::secp192k1();
        let p = sample_point_1();
        assert_eq!(curve.add_points(&p, &Point::Infinity), p);
        assert_eq!(curve.add_points(&Point::Infinity, &p), p);
        assert_eq!(
            curve.add_points(&Point::Infinity, &Point::Infinity),
            Point::Infinity
        );
    }

    #[test]
    fn test_addition_is_commutative() {
        let curve = curves::secp192k1();
        let p = sample_point_1();
        let q = sample_point_2();
        assert_eq!(curve.add_points(&p, &q), curve.add_points(&q, &p));
    }

    #[test]
    fn test_addition_is_associative() {
        let curve = curves::secp256k1();
        let g = curve.g.clone();
        let p = curve.multiply_point(&u(2), &g);
        let q = curve.multiply_point(&u(5), &g);
        let r = curve.multiply_point(&u(11), &g);
        let left = curve.add_points(&curve.add_points(&p, &q), &r);
        let right = curve.add_points(&p, &curve.add_points(&q, &r));
        assert_eq!(left, right);
    }

    #[test]
    fn test_addition_of_opposites_is_identity() {
        let curve = curves::secp192k1();
        let p = sample_point_1();
        let minus_p = curve.negate(&p);
        assert!(curve.is_point_on_curve(&minus_p));
        assert_eq!(curve.add_points(&p, &minus_p), Point::Infinity);
    }

    #[test]
    fn test_adding_a_point_to_itself_doubles() {
        let curve = curves::secp192k1();
        let p = sample_point_1();
        assert_eq!(curve.add_points(&p, &p), curve.double_point(&p));
    }
}

mod doubling_tests {
    use super::*;

    #[test]
    fn test_known_point_doubling() {
        let curve = curves::secp192k1();
        let expected = Point::new(
            h("EA525DD5A1353762A14E9E78B9063316D1F2D5E792F87862"),
            h("A936D583530982690C445427CDF2C5B0BB1C88749247B02E"),
        );
        assert_eq!(curve.double_point(&sample_point_1()), expected);
    }

    #[test]
    fn test_doubling_identity() {
        let curve = curves::secp192k1();
        assert_eq!(curve.double_point(&Point::Infinity), Point::Infinity);
    }

    #[test]
    fn test_doubling_two_torsion_point_is_identity() {
        // y² = x³ + 3 over F_11 contains (2, 0), its own inverse.
        let curve = EllipticCurve {
            p: u(11),
            a: u(0),
            b: u(3),
            g: Point::new(u(2), u(0)),
            n: u(2),
            h: 1,
            coordinates: Coordinates::Affine,
        };
        let two_torsion = Point::new(u(2), u(0));
        assert!(curve.is_point_on_curve(&two_torsion));
        assert_eq!(curve.double_point(&two_torsion), Point::Infinity);

        let projective = EllipticCurve {
            coordinates: Coordinates::Jacobian,
            ..curve
        };
        assert_eq!(projective.double_point(&two_torsion), Point::Infinity);
    }

    #[test]
    fn test_generator_doubling_equals_generator_sum() {
        for name in ["secp192k1", "secp256r1", "secp521r1"] {
            let curve = curves::get(name).unwrap();
            let g = curve.g.clone();
            let doubled = curve.double_point(&g);
            assert_eq!(doubled, curve.add_points(&g, &g));
            assert!(curve.is_point_on_curve(&doubled));
        }
    }
}

mod multiplication_tests {
    use super::*;

    #[test]
    fn test_known_scalar_multiplication() {
        let curve = curves::secp192k1();
        let expected = Point::new(
            h("EA525DD5A1353762A14E9E78B9063316D1F2D5E792F87862"),
            h("A936D583530982690C445427CDF2C5B0BB1C88749247B02E"),
        );
        assert_eq!(curve.multiply_point(&u(2), &sample_point_1()), expected);
    }

    #[test]
    fn test_multiplication_by_zero_is_identity() {
        let curve = curves::secp192k1();
        assert_eq!(
            curve.multiply_point(&u(0), &sample_point_1()),
            Point::Infinity
        );
    }

    #[test]
    fn test_multiplication_of_identity_is_identity() {
        let curve = curves::secp192k1();
        assert_eq!(
            curve.multiply_point(&u(7), &Point::Infinity),
            Point::Infinity
        );
    }

    #[test]
    fn test_multiplication_matches_repeated_addition() {
        let curve = curves::secp192k1();
        let g = curve.g.clone();
        let mut acc = Point::Infinity;
        for k in 1u64..=10 {
            acc = curve.add_points(&acc, &g);
            assert_eq!(curve.multiply_point(&u(k), &g), acc);
        }
    }

    #[test]
    fn test_order_times_generator_is_identity() {
        let curve = curves::secp192k1();
        let n = curve.n.clone();
        assert_eq!(curve.multiply_point(&n, &curve.g.clone()), Point::Infinity);
    }

    #[test]
    fn test_scalar_larger_than_order_wraps() {
        let curve = curves::secp192k1();
        let g = curve.g.clone();
        let k = &curve.n + u(5);
        assert_eq!(curve.multiply_point(&k, &g), curve.multiply_point(&u(5), &g));
    }

    #[test]
    fn test_multiples_stay_on_curve() {
        let curve = curves::secp256k1();
        let g = curve.g.clone();
        for k in [1u64, 2, 3, 17, 1 << 40, u64::MAX] {
            let point = curve.multiply_point(&u(k), &g);
            assert!(curve.is_point_on_curve(&point));
        }
    }
}

mod backend_tests {
    use super::*;

    #[test]
    fn test_backends_agree_on_small_multiples() {
        let projective = curves::secp192k1();
        let affine =
            curves::get_with_coordinates("secp192k1", Coordinates::Affine).unwrap();
        let g = projective.g.clone();
        for k in 1u64..=20 {
            assert_eq!(
                projective.multiply_point(&u(k), &g),
                affine.multiply_point(&u(k), &g),
                "backends disagree at k = {k}"
            );
        }
    }

    #[test]
    fn test_backends_agree_on_large_scalar() {
        let projective = curves::secp256k1();
        let affine =
            curves::get_with_coordinates("secp256k1", Coordinates::Affine).unwrap();
        let g = projective.g.clone();
        let k = h("DEADBEEFCAFEBABE0123456789ABCDEF");
        assert_eq!(
            projective.multiply_point(&k, &g),
            affine.multiply_point(&k, &g)
        );
    }

    #[test]
    fn test_backends_agree_on_addition() {
        let projective = curves::secp192k1();
        let affine =
            curves::get_with_coordinates("secp192k1", Coordinates::Affine).unwrap();
        let p = sample_point_1();
        let q = sample_point_2();
        assert_eq!(projective.add_points(&p, &q), affine.add_points(&p, &q));
        assert_eq!(projective.double_point(&p), affine.double_point(&p));
    }
}

mod validation_tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_generator_is_on_curve() {
        for name in curves::names() {
            let curve = curves::get(name).unwrap();
            assert!(
                curve.is_point_on_curve(&curve.g.clone()),
                "generator of {name} fails the curve equation"
            );
        }
    }

    #[test]
    fn test_identity_is_not_on_curve() {
        let curve = curves::secp192k1();
        assert!(!curve.is_point_on_curve(&Point::Infinity));
    }

    #[test]
    fn test_bumped_coordinate_leaves_curve() {
        let curve = curves::secp192k1();
        let point = curve.multiply_point(&u(42), &curve.g.clone());
        let (x, y) = match &point {
            Point::Affine { x, y } => (x.clone(), y.clone()),
            Point::Infinity => panic!("42·G is not the identity"),
        };
        let bumped = Point::new(x, (y + u(1)) % &curve.p);
        assert!(!curve.is_point_on_curve(&bumped));
    }

    #[test]
    fn test_validated_constructor() {
        let curve = curves::secp192k1();
        let p = sample_point_1();
        let (x, y) = (p.x().unwrap().clone(), p.y().unwrap().clone());
        assert_eq!(curve.point(x.clone(), y.clone()).unwrap(), p);

        let err = curve.point(u(200), u(119)).unwrap_err();
        assert_eq!(
            err,
            Error::PointNotOnCurve {
                x: u(200),
                y: u(119),
            }
        );
    }

    #[test]
    fn test_negation_of_identity() {
        let curve = curves::secp192k1();
        assert_eq!(curve.negate(&Point::Infinity), Point::Infinity);
    }

    #[test]
    fn test_point_accessors() {
        let p = Point::new(u(3), u(6));
        assert!(!p.is_infinity());
        assert_eq!(p.x(), Some(&u(3)));
        assert_eq!(p.y(), Some(&u(6)));
        assert!(Point::infinity().is_infinity());
        assert_eq!(Point::infinity().x(), None);
    }
}
