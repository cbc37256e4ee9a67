//! Type-safe façade binding elements to the algebra that defines them.

use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};
use std::sync::{Arc, OnceLock};

use num_bigint::BigInt;
use rand::Rng;

use crate::algebra::GroupAlgebra;
use crate::errors::{Error, Result};
use crate::prime::BigPrime;

/// A group described by a shared [`GroupAlgebra`].
///
/// Elements handed out by a `CryptoGroup` are validated and remember their
/// algebra, so arithmetic between elements of different groups is caught at
/// run time. The neutral element and the security level are computed on
/// first use and cached; later reads take no lock.
pub struct CryptoGroup<A: GroupAlgebra> {
    algebra: Arc<A>,
    neutral: OnceLock<GroupElement<A>>,
    security_level: OnceLock<usize>,
}

impl<A: GroupAlgebra + PartialEq> CryptoGroup<A> {
    pub fn new(algebra: A) -> Self {
        Self::from_shared(Arc::new(algebra))
    }

    pub fn from_shared(algebra: Arc<A>) -> Self {
        CryptoGroup {
            algebra,
            neutral: OnceLock::new(),
            security_level: OnceLock::new(),
        }
    }

    #[inline]
    pub fn algebra(&self) -> &Arc<A> {
        &self.algebra
    }

    #[inline]
    pub fn order(&self) -> &BigPrime {
        self.algebra.order()
    }

    pub fn security_level(&self) -> usize {
        *self.security_level.get_or_init(|| self.algebra.security_level())
    }

    pub fn neutral_element(&self) -> &GroupElement<A> {
        self.neutral
            .get_or_init(|| GroupElement::bind(self.algebra.neutral_element().clone(), &self.algebra))
    }

    pub fn generator(&self) -> GroupElement<A> {
        GroupElement::bind(self.algebra.generator().clone(), &self.algebra)
    }

    /// Wrap `value` after full validation; fails with
    /// [`Error::InvalidArgument`] for anything outside the group.
    pub fn element(&self, value: A::Element) -> Result<GroupElement<A>> {
        if !self.algebra.is_element(&value) {
            return Err(Error::InvalidArgument("value is not an element of the group"));
        }
        Ok(GroupElement::bind(value, &self.algebra))
    }

    pub fn generate(&self, index: &BigInt) -> Result<GroupElement<A>> {
        let value = self.algebra.generate_element(index)?;
        Ok(GroupElement::bind(value, &self.algebra))
    }

    pub fn generate_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(BigInt, GroupElement<A>)> {
        let (index, value) = self.algebra.generate_random_element(rng)?;
        Ok((index, GroupElement::bind(value, &self.algebra)))
    }

    /// Decode and validate an element.
    pub fn from_bytes(&self, buffer: &[u8]) -> Result<GroupElement<A>> {
        self.element(self.algebra.from_bytes(buffer)?)
    }
}

impl<A: GroupAlgebra> Debug for CryptoGroup<A>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoGroup").field("algebra", &self.algebra).finish()
    }
}

/// An element together with the algebra it belongs to.
///
/// Two elements are equal when their values are equal and their algebras are
/// equal; algebras compare structurally, so separately constructed copies of
/// the same group interoperate.
pub struct GroupElement<A: GroupAlgebra> {
    value: A::Element,
    algebra: Arc<A>,
}

impl<A: GroupAlgebra + PartialEq> GroupElement<A> {
    fn bind(value: A::Element, algebra: &Arc<A>) -> Self {
        GroupElement {
            value,
            algebra: Arc::clone(algebra),
        }
    }

    #[inline]
    pub fn value(&self) -> &A::Element {
        &self.value
    }

    #[inline]
    pub fn algebra(&self) -> &Arc<A> {
        &self.algebra
    }

    pub fn is_same_group(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.algebra, &other.algebra) || *self.algebra == *other.algebra
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.algebra.to_bytes(&self.value)
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        if !self.is_same_group(other) {
            return Err(Error::InvalidArgument("elements belong to different groups"));
        }
        let value = self.algebra.add(&self.value, &other.value)?;
        Ok(Self::bind(value, &self.algebra))
    }

    pub fn try_neg(&self) -> Result<Self> {
        let value = self.algebra.negate(&self.value)?;
        Ok(Self::bind(value, &self.algebra))
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.try_add(&other.try_neg()?)
    }

    pub fn try_mul(&self, factor: &BigInt) -> Result<Self> {
        let value = self.algebra.multiply_scalar(&self.value, factor)?;
        Ok(Self::bind(value, &self.algebra))
    }
}

impl<A: GroupAlgebra> Clone for GroupElement<A> {
    fn clone(&self) -> Self {
        GroupElement {
            value: self.value.clone(),
            algebra: Arc::clone(&self.algebra),
        }
    }
}

impl<A: GroupAlgebra> Debug for GroupElement<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupElement").field("value", &self.value).finish()
    }
}

impl<A: GroupAlgebra + PartialEq> PartialEq for GroupElement<A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.is_same_group(other)
    }
}

impl<A: GroupAlgebra + PartialEq> Eq for GroupElement<A> {}

impl<A: GroupAlgebra> Hash for GroupElement<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<A: GroupAlgebra + PartialEq> Add<&GroupElement<A>> for &GroupElement<A> {
    type Output = Result<GroupElement<A>>;

    fn add(self, other: &GroupElement<A>) -> Self::Output {
        self.try_add(other)
    }
}

impl<A: GroupAlgebra + PartialEq> Add for GroupElement<A> {
    type Output = Result<GroupElement<A>>;

    fn add(self, other: GroupElement<A>) -> Self::Output {
        self.try_add(&other)
    }
}

impl<A: GroupAlgebra + PartialEq> Sub<&GroupElement<A>> for &GroupElement<A> {
    type Output = Result<GroupElement<A>>;

    fn sub(self, other: &GroupElement<A>) -> Self::Output {
        self.try_sub(other)
    }
}

impl<A: GroupAlgebra + PartialEq> Neg for &GroupElement<A> {
    type Output = Result<GroupElement<A>>;

    fn neg(self) -> Self::Output {
        self.try_neg()
    }
}

impl<A: GroupAlgebra + PartialEq> Neg for GroupElement<A> {
    type Output = Result<GroupElement<A>>;

    fn neg(self) -> Self::Output {
        self.try_neg()
    }
}

impl<A: GroupAlgebra + PartialEq> Mul<&BigInt> for &GroupElement<A> {
    type Output = Result<GroupElement<A>>;

    fn mul(self, factor: &BigInt) -> Self::Output {
        self.try_mul(factor)
    }
}

impl<A: GroupAlgebra + PartialEq> Mul<BigInt> for GroupElement<A> {
    type Output = Result<GroupElement<A>>;

    fn mul(self, factor: BigInt) -> Self::Output {
        self.try_mul(&factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_curves::{montgomery_parameters_41, weierstrass_parameters_23};
    use crate::{
        CurveGroupAlgebra, CurveParameters, CurvePoint, MultiplicativeGroupAlgebra, WeierstrassCurveEquation,
        XOnlyMontgomeryAlgebra,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn group_23() -> CryptoGroup<CurveGroupAlgebra<WeierstrassCurveEquation>> {
        CryptoGroup::new(CurveGroupAlgebra::new(weierstrass_parameters_23()))
    }

    #[test]
    fn test_element_validates() {
        let group = group_23();
        assert!(group.element(CurvePoint::from((16, 5))).is_ok());
        assert_eq!(
            group.element(CurvePoint::from((10, 0))),
            Err(Error::InvalidArgument("value is not an element of the group"))
        );
        assert!(group.element(CurvePoint::from((5, 5))).is_err());
    }

    #[test]
    fn test_operators() {
        let group = group_23();
        let g = group.generator();
        let two_g = (&g + &g).unwrap();
        assert_eq!(two_g.value(), &CurvePoint::from((16, 5)));

        let three_g = (&g * &BigInt::from(3)).unwrap();
        assert_eq!(three_g, (&two_g + &g).unwrap());
        assert_eq!((&three_g - &g).unwrap(), two_g);

        let minus_g = (-&g).unwrap();
        assert_eq!(minus_g.value(), &CurvePoint::from((5, 20)));
        assert_eq!(&(&g + &minus_g).unwrap(), group.neutral_element());
        assert_eq!((g.clone() * BigInt::from(11)).unwrap(), *group.neutral_element());
    }

    #[test]
    fn test_scalar_must_not_be_negative() {
        let group = group_23();
        assert!(matches!(
            &group.generator() * &BigInt::from(-1),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn test_cross_group_arithmetic_is_rejected() {
        let group = group_23();
        let equation = WeierstrassCurveEquation::new(
            BigPrime::new_unchecked(BigInt::from(18392027)),
            BigInt::from(11),
            BigInt::from(-171),
        )
        .unwrap();
        let other_parameters = CurveParameters::new(
            equation,
            CurvePoint::from((5, 3)),
            BigPrime::new_unchecked(BigInt::from(18388483)),
            BigInt::from(1),
        )
        .unwrap();
        let other = CryptoGroup::new(CurveGroupAlgebra::new(other_parameters));

        let g = group.generator();
        let h = other.generator();
        assert_eq!(g.value(), h.value());
        assert_ne!(g, h);
        assert_eq!(
            &g + &h,
            Err(Error::InvalidArgument("elements belong to different groups"))
        );
    }

    #[test]
    fn test_structurally_equal_groups_interoperate() {
        let first = group_23();
        let second = group_23();
        let g = first.generator();
        let h = second.generator();
        assert_eq!(g, h);
        assert!((&g + &h).is_ok());
    }

    #[test]
    fn test_hash_by_value() {
        let group = group_23();
        let elements: HashSet<_> = (0..15u32)
            .map(|index| group.generate(&BigInt::from(index)).unwrap())
            .collect();
        assert_eq!(elements.len(), 11);
    }

    #[test]
    fn test_byte_round_trip() {
        let group = CryptoGroup::new(CurveGroupAlgebra::new(montgomery_parameters_41()));
        let mut rng = StdRng::seed_from_u64(42);
        let (index, element) = group.generate_random(&mut rng).unwrap();
        assert!(index < BigInt::from(11));
        assert_eq!(group.from_bytes(&element.to_bytes()).unwrap(), element);

        // (6, 9) has order 22
        assert!(group.from_bytes(&[6, 9]).is_err());
    }

    #[test]
    fn test_x_only_group() {
        let group = CryptoGroup::new(XOnlyMontgomeryAlgebra::new(montgomery_parameters_41()));
        let g = group.generator();
        assert!(matches!(&g + &g, Err(Error::Unsupported(_))));
        assert!(matches!(-&g, Err(Error::Unsupported(_))));
        // x = 6 lies on the curve but has order 22
        assert!(group.element(BigInt::from(6)).is_err());
        assert!(group.from_bytes(&[6]).is_err());
        assert_eq!((&g * &BigInt::from(2)).unwrap().value(), &BigInt::from(38));
    }

    #[test]
    fn test_multiplicative_group() {
        let algebra = MultiplicativeGroupAlgebra::new(
            BigPrime::new_unchecked(BigInt::from(23)),
            BigPrime::new_unchecked(BigInt::from(11)),
            BigInt::from(2),
        )
        .unwrap();
        let group = CryptoGroup::new(algebra);
        let g = group.generator();
        assert_eq!((&g + &g).unwrap().value(), &BigInt::from(4));
        assert_eq!((-&g).unwrap().value(), &BigInt::from(12));
        assert_eq!(group.neutral_element().value(), &BigInt::from(1));
    }

    #[test]
    fn test_cached_values_are_shared_across_threads() {
        let group = group_23();
        let first = group.neutral_element();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(group.security_level(), 2);
                    assert!(std::ptr::eq(group.neutral_element(), first));
                });
            }
        });
        assert_eq!(group.neutral_element().value(), &CurvePoint::infinity());
    }
}
