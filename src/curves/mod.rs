//! Registry of named SEC curves
//!
//! Domain parameters for the prime-field SEC 2 curves, keyed by their
//! standard names. Lookups build a fresh [`EllipticCurve`]; the Jacobian
//! backend is the default, matching [`get_with_coordinates`] called with
//! [`Coordinates::Jacobian`].

use num_bigint::BigUint;

use crate::ec::{Coordinates, EllipticCurve, Point};
use crate::error::{Error, Result};

struct CurveParams {
    name: &'static str,
    p: &'static str,
    a: &'static str,
    b: &'static str,
    gx: &'static str,
    gy: &'static str,
    n: &'static str,
    h: u32,
}

impl CurveParams {
    fn build(&self, coordinates: Coordinates) -> EllipticCurve {
        EllipticCurve {
            p: hex(self.p),
            a: hex(self.a),
            b: hex(self.b),
            g: Point::new(hex(self.gx), hex(self.gy)),
            n: hex(self.n),
            h: self.h,
            coordinates,
        }
    }
}

fn hex(digits: &'static str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 16).expect("registry parameters are valid hex")
}

/// SEC 2 domain parameters. All eight curves have cofactor 1 and a field
/// prime p ≡ 3 (mod 4).
const REGISTRY: [CurveParams; 8] = [
    CurveParams {
        name: "secp192k1",
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFEE37",
        a: "0",
        b: "3",
        gx: "DB4FF10EC057E9AE26B07D0280B7F4341DA5D1B1EAE06C7D",
        gy: "9B2F2F6D9C5628A7844163D015BE86344082AA88D95E2F9D",
        n: "FFFFFFFFFFFFFFFFFFFFFFFE26F2FC170F69466A74DEFD8D",
        h: 1,
    },
    CurveParams {
        name: "secp192r1",
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF",
        a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFC",
        b: "64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1",
        gx: "188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012",
        gy: "07192B95FFC8DA78631011ED6B24CDD573F977A11E794811",
        n: "FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831",
        h: 1,
    },
    CurveParams {
        name: "secp224k1",
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFE56D",
        a: "0",
        b: "5",
        gx: "A1455B334DF099DF30FC28A169A467E9E47075A90F7E650EB6B7A45C",
        gy: "7E089FED7FBA344282CAFBD6F7E319F7C0B0BD59E2CA4BDB556D61A5",
        n: "010000000000000000000000000001DCE8D2EC6184CAF0A971769FB1F7",
        h: 1,
    },
    CurveParams {
        name: "secp224r1",
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001",
        a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE",
        b: "B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4",
        gx: "B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21",
        gy: "BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34",
        n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D",
        h: 1,
    },
    CurveParams {
        name: "secp256k1",
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
        a: "0",
        b: "7",
        gx: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        gy: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
        n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        h: 1,
    },
    CurveParams {
        name: "secp256r1",
        p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
        a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
        b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
        gx: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
        gy: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
        n: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
        h: 1,
    },
    CurveParams {
        name: "secp384r1",
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE\
            FFFFFFFF0000000000000000FFFFFFFF",
        a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE\
            FFFFFFFF0000000000000000FFFFFFFC",
        b: "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875A\
            C656398D8A2ED19D2A85C8EDD3EC2AEF",
        gx: "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A38\
            5502F25DBF55296C3A545E3872760AB7",
        gy: "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C0\
            0A60B1CE1D7E819D7A431D7C90EA0E5F",
        n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF\
            581A0DB248B0A77AECEC196ACCC52973",
        h: 1,
    },
    CurveParams {
        name: "secp521r1",
        p: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
            FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
            FFFFFFFF",
        a: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
            FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
            FFFFFFFC",
        b: "0051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF1\
            09E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B50\
            3F00",
        gx: "00C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D\
            3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5\
            BD66",
        gy: "011839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E\
            662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD1\
            6650",
        n: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
            FFFFFFFFFFFFFFFA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AE\
            BB6FB71E91386409",
        h: 1,
    },
];

/// Look up a curve by its SEC name, using the Jacobian backend.
pub fn get(name: &str) -> Result<EllipticCurve> {
    get_with_coordinates(name, Coordinates::Jacobian)
}

/// Look up a curve by its SEC name with an explicit coordinate backend.
pub fn get_with_coordinates(name: &str, coordinates: Coordinates) -> Result<EllipticCurve> {
    REGISTRY
        .iter()
        .find(|params| params.name == name)
        .map(|params| params.build(coordinates))
        .ok_or_else(|| Error::UnknownCurve {
            name: name.to_string(),
        })
}

/// All names the registry recognizes, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|params| params.name)
}

macro_rules! named_curve {
    ($name:ident) => {
        #[doc = concat!("The ", stringify!($name), " curve with the Jacobian backend")]
        pub fn $name() -> EllipticCurve {
            get(stringify!($name)).expect("curve is registered")
        }
    };
}

named_curve!(secp192k1);
named_curve!(secp192r1);
named_curve!(secp224k1);
named_curve!(secp224r1);
named_curve!(secp256k1);
named_curve!(secp256r1);
named_curve!(secp384r1);
named_curve!(secp521r1);
