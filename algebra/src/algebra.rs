use core::fmt::Debug;
use core::hash::Hash;

use num_bigint::{BigInt, Sign};
use rand::Rng;
use subtle::Choice;

use crate::errors::{Error, Result};
use crate::prime::BigPrime;
use crate::random::random_below;
use crate::select::ScalarBits;

/// Algebraic operations of a cyclic group of prime order, generic over the
/// representation of its elements.
///
/// Implementations are immutable after construction and hold no interior
/// state, so a single instance can serve any number of threads.
pub trait GroupAlgebra: Send + Sync {
    type Element: Clone + Debug + PartialEq + Eq + Hash + Send + Sync;

    fn generator(&self) -> &Self::Element;

    /// Order of the subgroup spanned by the generator.
    fn order(&self) -> &BigPrime;

    fn cofactor(&self) -> &BigInt;

    fn neutral_element(&self) -> &Self::Element;

    /// Bit length of the element representation.
    fn element_bit_length(&self) -> usize;

    /// Estimated security in bits against the best known generic attacks.
    fn security_level(&self) -> usize;

    #[inline]
    fn order_bit_length(&self) -> usize {
        self.order().bit_length()
    }

    fn add(&self, left: &Self::Element, right: &Self::Element) -> Result<Self::Element>;

    fn negate(&self, element: &Self::Element) -> Result<Self::Element>;

    /// `when_unset` for a zero choice, `when_set` otherwise, without a
    /// data-dependent branch.
    fn select(&self, choice: Choice, when_unset: &Self::Element, when_set: &Self::Element) -> Self::Element;

    /// Whether `element` is well formed for the underlying structure (field
    /// membership and, for curves, the curve equation), without checking the
    /// subgroup.
    fn is_potential_element(&self, element: &Self::Element) -> bool;

    fn from_bytes(&self, buffer: &[u8]) -> Result<Self::Element>;

    fn to_bytes(&self, element: &Self::Element) -> Vec<u8>;

    /// Multiply `element` by a non-negative `factor` of at most
    /// `factor_bit_length` bits, without validating either.
    ///
    /// Double-and-add over exactly `factor_bit_length` bits, least significant
    /// first. Every iteration computes both the sum and the doubling and only
    /// selects the result, so the sequence of group operations depends on the
    /// bit length alone and never on the bits of `factor`.
    fn multiply_scalar_unchecked(
        &self,
        element: &Self::Element,
        factor: &BigInt,
        factor_bit_length: usize,
    ) -> Result<Self::Element> {
        let bits = ScalarBits::new(factor, factor_bit_length);
        let mut result = self.neutral_element().clone();
        let mut running = element.clone();

        for index in 0..bits.bit_length() {
            let sum = self.add(&result, &running)?;
            result = self.select(bits.bit(index), &result, &sum);
            running = self.add(&running, &running)?;
        }

        Ok(result)
    }

    /// Multiply `element` by a non-negative `factor`.
    ///
    /// Iterates over the order's bit length, or over the factor's own bit
    /// length if it is wider than the order.
    fn multiply_scalar(&self, element: &Self::Element, factor: &BigInt) -> Result<Self::Element> {
        if factor.sign() == Sign::Minus {
            return Err(Error::OutOfRange("scalar must not be negative"));
        }
        let bit_length = self.order_bit_length().max(factor.bits() as usize);
        self.multiply_scalar_unchecked(element, factor, bit_length)
    }

    /// Multiply `element` by a non-negative `factor` known to fit into
    /// `factor_bit_length` bits, iterating over exactly that many bits.
    fn multiply_scalar_bounded(
        &self,
        element: &Self::Element,
        factor: &BigInt,
        factor_bit_length: usize,
    ) -> Result<Self::Element> {
        if factor.sign() == Sign::Minus {
            return Err(Error::OutOfRange("scalar must not be negative"));
        }
        if factor.bits() as usize > factor_bit_length {
            return Err(Error::OutOfRange("scalar exceeds the declared bit length"));
        }
        self.multiply_scalar_unchecked(element, factor, factor_bit_length)
    }

    /// `index * generator`, for indices of at most the order's bit length.
    fn generate_element(&self, index: &BigInt) -> Result<Self::Element> {
        self.multiply_scalar_bounded(self.generator(), index, self.order_bit_length())
    }

    /// Full validation: well formed and annihilated by the group order, which
    /// rejects every element outside the prime-order subgroup.
    fn is_element(&self, element: &Self::Element) -> bool {
        if !self.is_potential_element(element) {
            return false;
        }
        self.multiply_scalar_unchecked(element, self.order().value(), self.order_bit_length())
            .is_ok_and(|multiple| multiple == *self.neutral_element())
    }

    /// A valid element other than the neutral element.
    fn is_safe_element(&self, element: &Self::Element) -> bool {
        element != self.neutral_element() && self.is_element(element)
    }

    /// Sample a uniform index in `[0, order)` and return it with its element.
    fn generate_random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(BigInt, Self::Element)>
    where
        Self: Sized,
    {
        let index = random_below(self.order().value(), rng)?;
        let element = self.generate_element(&index)?;
        Ok((index, element))
    }
}
