//! Prime-order subgroups of the multiplicative group of a prime field.

use core::f64::consts::LN_2;

use num_bigint::{BigInt, Sign};
use subtle::Choice;

use crate::algebra::GroupAlgebra;
use crate::errors::{Error, Result};
use crate::field::PrimeField;
use crate::prime::BigPrime;
use crate::select::select_integer;

/// Group algebra of the order-`q` subgroup of `Z_p^*`, written additively:
/// the group operation is multiplication mod `p`, negation is inversion and
/// the neutral element is `1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MultiplicativeGroupAlgebra {
    field: PrimeField,
    order: BigPrime,
    cofactor: BigInt,
    generator: BigInt,
    neutral: BigInt,
}

impl MultiplicativeGroupAlgebra {
    /// Fails with [`Error::InvalidArgument`] unless `order` divides `p - 1`
    /// and `generator` is an element of order exactly `order`.
    pub fn new(prime: BigPrime, order: BigPrime, generator: BigInt) -> Result<Self> {
        let field = PrimeField::new(prime);
        let neutral = BigInt::from(1);

        let group_size = field.modulus() - 1u32;
        if (&group_size % order.value()).sign() != Sign::NoSign {
            return Err(Error::InvalidArgument("order does not divide p - 1"));
        }
        let cofactor = group_size / order.value();

        if generator < neutral || !field.is_element(&generator) {
            return Err(Error::InvalidArgument("generator is not a unit of the field"));
        }
        if generator == neutral {
            return Err(Error::InvalidArgument("generator must not be the neutral element"));
        }
        if field.pow(&generator, order.value())? != neutral {
            return Err(Error::InvalidArgument("generator does not have the given order"));
        }

        Ok(MultiplicativeGroupAlgebra {
            field,
            order,
            cofactor,
            generator,
            neutral,
        })
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }
}

/// NIST SP 800-56B estimate of the bits of security of a finite field of the
/// given bit length against the general number field sieve.
fn number_field_sieve_security(bit_length: usize) -> usize {
    let n = bit_length as f64 * LN_2;
    let work = 1.923 * n.cbrt() * n.ln().powi(2).cbrt() - 4.69;
    (work / LN_2).max(0.0) as usize
}

impl GroupAlgebra for MultiplicativeGroupAlgebra {
    type Element = BigInt;

    #[inline]
    fn generator(&self) -> &BigInt {
        &self.generator
    }

    #[inline]
    fn order(&self) -> &BigPrime {
        &self.order
    }

    #[inline]
    fn cofactor(&self) -> &BigInt {
        &self.cofactor
    }

    #[inline]
    fn neutral_element(&self) -> &BigInt {
        &self.neutral
    }

    fn element_bit_length(&self) -> usize {
        self.field.element_bit_length()
    }

    /// The weaker of Pollard's rho in the subgroup and the number field sieve
    /// in the whole field.
    fn security_level(&self) -> usize {
        let rho = self.order_bit_length() / 2;
        rho.min(number_field_sieve_security(self.field.element_bit_length()))
    }

    fn add(&self, left: &BigInt, right: &BigInt) -> Result<BigInt> {
        Ok(self.field.reduce(&(left * right)))
    }

    fn negate(&self, element: &BigInt) -> Result<BigInt> {
        Ok(self.field.invert_mult(element))
    }

    fn select(&self, choice: Choice, when_unset: &BigInt, when_set: &BigInt) -> BigInt {
        select_integer(choice, when_unset, when_set, self.field.element_byte_length())
    }

    fn is_potential_element(&self, element: &BigInt) -> bool {
        element >= &self.neutral && self.field.is_element(element)
    }

    fn from_bytes(&self, buffer: &[u8]) -> Result<BigInt> {
        self.field.from_bytes(buffer)
    }

    fn to_bytes(&self, element: &BigInt) -> Vec<u8> {
        self.field.to_bytes(element)
    }
}
