//! Arithmetic modulo a prime.

use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::prime::BigPrime;

/// The field of integers modulo a prime `p`.
///
/// Elements are plain [`BigInt`] values; every operation returns the canonical
/// representative in `[0, p)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimeField {
    modulus: BigPrime,
}

impl PrimeField {
    pub fn new(modulus: BigPrime) -> Self {
        PrimeField { modulus }
    }

    #[inline]
    pub fn modulus(&self) -> &BigInt {
        self.modulus.value()
    }

    #[inline]
    pub fn prime(&self) -> &BigPrime {
        &self.modulus
    }

    #[inline]
    pub fn element_bit_length(&self) -> usize {
        self.modulus.bit_length()
    }

    /// Bytes needed to hold any element: `ceil(bits(p) / 8)`.
    #[inline]
    pub fn element_byte_length(&self) -> usize {
        self.element_bit_length().div_ceil(8)
    }

    /// Reduce any integer, negative ones included, into `[0, p)`.
    pub fn reduce(&self, value: &BigInt) -> BigInt {
        let p = self.modulus();
        ((value % p) + p) % p
    }

    /// `value^exponent mod p`. Negative exponents are rejected.
    pub fn pow(&self, value: &BigInt, exponent: &BigInt) -> Result<BigInt> {
        if exponent.sign() == Sign::Minus {
            return Err(Error::InvalidArgument("exponent must not be negative"));
        }
        Ok(self.reduce(value).modpow(exponent, self.modulus()))
    }

    #[inline]
    pub fn square(&self, value: &BigInt) -> BigInt {
        self.reduce(&(value * value))
    }

    /// Multiplicative inverse by Fermat's little theorem, `value^(p-2)`.
    ///
    /// The result is meaningless (zero) when `value ≡ 0 mod p`; callers must
    /// rule that case out themselves.
    pub fn invert_mult(&self, value: &BigInt) -> BigInt {
        let exponent = self.modulus() - 2u32;
        self.reduce(value).modpow(&exponent, self.modulus())
    }

    /// Whether `value` is a canonical element, `0 <= value < p`.
    #[inline]
    pub fn is_element(&self, value: &BigInt) -> bool {
        value.sign() != Sign::Minus && value < self.modulus()
    }

    /// Euler's criterion. Zero counts as a square.
    pub fn is_quadratic_residue(&self, value: &BigInt) -> bool {
        let reduced = self.reduce(value);
        if reduced.sign() == Sign::NoSign {
            return true;
        }
        let exponent = (self.modulus() - 1u32) >> 1;
        reduced.modpow(&exponent, self.modulus()) == BigInt::from(1)
    }

    /// Fixed-width little-endian encoding, zero padded to
    /// [`element_byte_length`](Self::element_byte_length) bytes.
    pub fn to_bytes(&self, value: &BigInt) -> Vec<u8> {
        let (_, mut bytes) = self.reduce(value).to_bytes_le();
        bytes.resize(self.element_byte_length(), 0);
        bytes
    }

    /// Decode the first element width of `buffer`. Anything after it is
    /// ignored; the value is not reduced, so out-of-field encodings survive for
    /// the caller's membership check.
    pub fn from_bytes(&self, buffer: &[u8]) -> Result<BigInt> {
        let width = self.element_byte_length();
        if buffer.len() < width {
            return Err(Error::InvalidArgument("buffer is shorter than a field element"));
        }
        Ok(BigInt::from_bytes_le(Sign::Plus, &buffer[..width]))
    }
}
