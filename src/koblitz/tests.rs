//! Koblitz encoding tests

use super::*;
use crate::curves;
use crate::ec::Coordinates;

const LOREM_64: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit integer.";

fn u(v: u64) -> BigUint {
    BigUint::from(v)
}

mod round_trip_tests {
    use super::*;

    #[test]
    fn test_encode_decode_short_message() {
        let encoder = Koblitz::new(curves::secp192k1()).unwrap();
        let (point, j) = encoder.encode(b"Hello, EC!").unwrap();
        assert!(encoder.curve().is_point_on_curve(&point));
        assert_eq!(decode(&point, j).unwrap(), b"Hello, EC!");
    }

    #[test]
    fn test_encode_decode_64_bytes_on_secp521r1() {
        let encoder = Koblitz::new(curves::secp521r1()).unwrap();
        assert_eq!(LOREM_64.len(), 64);
        let (point, j) = encoder.encode(LOREM_64).unwrap();
        assert!(encoder.curve().is_point_on_curve(&point));
        assert_eq!(decode(&point, j).unwrap(), LOREM_64);
    }

    #[test]
    fn test_chunked_round_trip_on_secp521r1() {
        let encoder = Koblitz::new(curves::secp521r1()).unwrap();
        let message = &LOREM_64[..32];
        let pairs = encoder.encode_chunked(message).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(decode_chunked(&pairs).unwrap(), message);
    }

    #[test]
    fn test_chunked_round_trip_spans_multiple_chunks() {
        let encoder = Koblitz::new(curves::secp192k1()).unwrap();
        let pairs = encoder.encode_chunked(LOREM_64).unwrap();
        assert!(pairs.len() > 1);
        for (point, _) in &pairs {
            assert!(encoder.curve().is_point_on_curve(point));
        }
        assert_eq!(decode_chunked(&pairs).unwrap(), LOREM_64);
    }

    #[test]
    fn test_empty_message_round_trips() {
        let encoder = Koblitz::new(curves::secp192k1()).unwrap();
        let (point, j) = encoder.encode(b"").unwrap();
        assert_eq!(decode(&point, j).unwrap(), b"");
        assert_eq!(encoder.encode_chunked(b"").unwrap(), Vec::new());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let encoder = Koblitz::new(curves::secp256k1()).unwrap();
        let first = encoder.encode(b"determinism").unwrap();
        let second = encoder.encode(b"determinism").unwrap();
        assert_eq!(first, second);
    }
}

mod capacity_tests {
    use super::*;

    #[test]
    fn test_chunk_capacity_per_curve() {
        let k192 = Koblitz::new(curves::secp192k1()).unwrap();
        assert_eq!(k192.chunk_capacity(), 22);
        let r521 = Koblitz::new(curves::secp521r1()).unwrap();
        assert_eq!(r521.chunk_capacity(), 64);
    }

    #[test]
    fn test_message_longer_than_field_is_rejected() {
        let encoder = Koblitz::new(curves::secp192k1()).unwrap();
        let oversized = [0xFFu8; 24];
        let err = encoder.encode(&oversized).unwrap_err();
        assert!(matches!(err, Error::Encoding { .. }));
        // Chunked mode handles the same message fine.
        assert!(encoder.encode_chunked(&oversized).is_ok());
    }
}

mod rejection_tests {
    use super::*;
    use crate::ec::EllipticCurve;

    #[test]
    fn test_cofactor_two_curve_is_rejected() {
        let mut curve = curves::secp192k1();
        curve.h = 2;
        let err = Koblitz::new(curve).unwrap_err();
        assert_eq!(
            err,
            Error::Encoding {
                context: "curve cofactor must be 1",
            }
        );
    }

    #[test]
    fn test_tiny_field_rejects_chunked_mode() {
        // 16-bit prime: floor(log_256 p) - 1 = 0 usable bytes per chunk.
        let curve = EllipticCurve {
            p: u(0xFFF1),
            a: u(0),
            b: u(7),
            g: Point::new(u(1), u(2)),
            n: u(1),
            h: 1,
            coordinates: Coordinates::Affine,
        };
        let encoder = Koblitz::new(curve).unwrap();
        assert!(matches!(
            encoder.encode_chunked(b"hi"),
            Err(Error::Encoding { .. })
        ));
    }

    #[test]
    fn test_decode_identity_fails() {
        assert!(matches!(
            decode(&Point::Infinity, 0),
            Err(Error::Decoding { .. })
        ));
    }

    #[test]
    fn test_decode_witness_larger_than_x_fails() {
        let point = Point::new(u(5), u(1));
        assert!(matches!(decode(&point, 10), Err(Error::Decoding { .. })));
    }

    #[test]
    fn test_decode_inexact_division_fails() {
        // 257 - 0 is not a multiple of 256.
        let point = Point::new(u(257), u(1));
        assert!(matches!(decode(&point, 0), Err(Error::Decoding { .. })));
        // 258 - 2 = 256 decodes to the single byte 0x01.
        let point = Point::new(u(258), u(1));
        assert_eq!(decode(&point, 2).unwrap(), vec![0x01]);
    }
}
