//! Standard curve parameter sets.
//!
//! Constants are taken from FIPS 186-4 (P-256, P-384) and RFC 7748
//! (Curve25519) and validated like any other parameters on construction.

use num_bigint::BigInt;

use crate::errors::{Error, Result};
use crate::{BigPrime, CurveParameters, CurvePoint, MontgomeryCurveEquation, WeierstrassCurveEquation};

fn hex(digits: &str) -> Result<BigInt> {
    BigInt::parse_bytes(digits.as_bytes(), 16).ok_or(Error::InvalidArgument("malformed curve constant"))
}

fn decimal(digits: &str) -> Result<BigInt> {
    BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(Error::InvalidArgument("malformed curve constant"))
}

impl CurveParameters<WeierstrassCurveEquation> {
    /// NIST P-256 (secp256r1), cofactor 1.
    pub fn nist_p256() -> Result<Self> {
        let prime = hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff")?;
        let equation = WeierstrassCurveEquation::new(
            BigPrime::new_unchecked(prime),
            BigInt::from(-3),
            hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b")?,
        )?;
        let generator = CurvePoint::new(
            hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296")?,
            hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5")?,
        );
        let order = hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551")?;

        CurveParameters::new(equation, generator, BigPrime::new_unchecked(order), BigInt::from(1))
    }

    /// NIST P-384 (secp384r1), cofactor 1.
    pub fn nist_p384() -> Result<Self> {
        let prime = hex(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
        )?;
        let equation = WeierstrassCurveEquation::new(
            BigPrime::new_unchecked(prime),
            BigInt::from(-3),
            hex("b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef")?,
        )?;
        let generator = CurvePoint::new(
            hex("aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7")?,
            hex("3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f")?,
        );
        let order = hex(
            "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
        )?;

        CurveParameters::new(equation, generator, BigPrime::new_unchecked(order), BigInt::from(1))
    }

    /// NIST P-521 (secp521r1) over the Mersenne prime 2^521 - 1, cofactor 1.
    pub fn nist_p521() -> Result<Self> {
        let prime = (BigInt::from(1) << 521) - 1;
        let equation = WeierstrassCurveEquation::new(
            BigPrime::new_unchecked(prime),
            BigInt::from(-3),
            hex(concat!(
                "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1",
                "09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
            ))?,
        )?;
        let generator = CurvePoint::new(
            hex(concat!(
                "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d",
                "3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
            ))?,
            hex(concat!(
                "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e",
                "662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
            ))?,
        );
        let order = hex(concat!(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
        ))?;

        CurveParameters::new(equation, generator, BigPrime::new_unchecked(order), BigInt::from(1))
    }
}

impl CurveParameters<MontgomeryCurveEquation> {
    /// Curve25519: p = 2^255 - 19, A = 486662, B = 1, cofactor 8.
    pub fn curve25519() -> Result<Self> {
        let prime = (BigInt::from(1) << 255) - 19;
        let equation = MontgomeryCurveEquation::new(
            BigPrime::new_unchecked(prime),
            BigInt::from(486662),
            BigInt::from(1),
        )?;
        let generator = CurvePoint::new(
            BigInt::from(9),
            decimal("14781619447589544791020593568409986887264606134616475288964881837755586237401")?,
        );
        let order = (BigInt::from(1) << 252) + decimal("27742317777372353535851937790883648493")?;

        CurveParameters::new(equation, generator, BigPrime::new_unchecked(order), BigInt::from(8))
    }
}
