//! x-only arithmetic on Montgomery curves.
//!
//! Elements are bare affine x-coordinates. Scalar multiplication runs the
//! Montgomery ladder on projective `(X : Z)` pairs and normalizes once at the
//! end. Without y a single x-coordinate does not determine a signed sum, so
//! general addition and negation are not available here.

use num_bigint::{BigInt, Sign};
use subtle::Choice;

use crate::algebra::GroupAlgebra;
use crate::equation::CurveEquation;
use crate::errors::{Error, Result};
use crate::field::PrimeField;
use crate::montgomery::MontgomeryCurveEquation;
use crate::parameters::CurveParameters;
use crate::prime::BigPrime;
use crate::select::{conditional_swap, select_integer, ScalarBits};

/// Projective x-only point (X : Z) with x = X / Z.
/// The point at infinity is represented as (1 : 0).
#[derive(Clone, Debug, PartialEq, Eq)]
struct ProjectivePoint {
    x: BigInt,
    z: BigInt,
}

impl ProjectivePoint {
    fn infinity() -> Self {
        ProjectivePoint {
            x: BigInt::from(1),
            z: BigInt::from(0),
        }
    }

    fn from_affine(x: &BigInt) -> Self {
        ProjectivePoint {
            x: x.clone(),
            z: BigInt::from(1),
        }
    }
}

/// Group algebra on the x-coordinates of a Montgomery curve's prime-order
/// subgroup.
///
/// The neutral element is represented by `0`. This collides with the
/// x-coordinate of the order-two point `(0, 0)`: a result of `0` means "the
/// point at infinity or `(0, 0)`", and the representation cannot tell them
/// apart. Subgroup validation looks at the projective result instead, so
/// `is_element` still rejects points of order `2 * order`. Elements encode as
/// a single field element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct XOnlyMontgomeryAlgebra {
    parameters: CurveParameters<MontgomeryCurveEquation>,
    generator: BigInt,
    neutral: BigInt,
    /// (A + 2) / 4
    a24: BigInt,
}

impl XOnlyMontgomeryAlgebra {
    pub fn new(parameters: CurveParameters<MontgomeryCurveEquation>) -> Self {
        let field = parameters.equation().field();
        let a24 = field.reduce(&((parameters.equation().a() + 2u32) * field.invert_mult(&BigInt::from(4))));
        let generator = parameters.generator().x().clone();

        XOnlyMontgomeryAlgebra {
            parameters,
            generator,
            neutral: BigInt::from(0),
            a24,
        }
    }

    #[inline]
    pub fn parameters(&self) -> &CurveParameters<MontgomeryCurveEquation> {
        &self.parameters
    }

    #[inline]
    fn field(&self) -> &PrimeField {
        self.parameters.equation().field()
    }

    /// `P + Q` from `P`, `Q` and the affine x of their difference `P - Q`.
    /// Only valid inside the ladder, where the difference is the base point.
    fn x_only_add(&self, p: &ProjectivePoint, q: &ProjectivePoint, difference: &BigInt) -> ProjectivePoint {
        let field = self.field();
        let u = field.reduce(&((&p.x - &p.z) * (&q.x + &q.z)));
        let v = field.reduce(&((&p.x + &p.z) * (&q.x - &q.z)));
        let sum = &u + &v;
        let diff = &u - &v;

        ProjectivePoint {
            x: field.square(&sum),
            z: field.reduce(&(difference * field.square(&diff))),
        }
    }

    fn x_only_double(&self, p: &ProjectivePoint) -> ProjectivePoint {
        let field = self.field();
        let sum_squared = field.square(&(&p.x + &p.z));
        let diff_squared = field.square(&(&p.x - &p.z));
        // 4XZ
        let cross = field.reduce(&(&sum_squared - &diff_squared));

        ProjectivePoint {
            x: field.reduce(&(&sum_squared * &diff_squared)),
            z: field.reduce(&(&cross * (&diff_squared + &self.a24 * &cross))),
        }
    }

    fn swap(&self, choice: Choice, p: &mut ProjectivePoint, q: &mut ProjectivePoint) {
        let width = self.field().element_byte_length();
        conditional_swap(choice, &mut p.x, &mut q.x, width);
        conditional_swap(choice, &mut p.z, &mut q.z, width);
    }

    fn ladder(&self, element: &BigInt, factor: &BigInt, factor_bit_length: usize) -> ProjectivePoint {
        let bits = ScalarBits::new(factor, factor_bit_length);
        let mut r0 = ProjectivePoint::infinity();
        let mut r1 = ProjectivePoint::from_affine(&self.field().reduce(element));

        for index in (0..bits.bit_length()).rev() {
            let choice = bits.bit(index);
            self.swap(choice, &mut r0, &mut r1);
            r1 = self.x_only_add(&r0, &r1, element);
            r0 = self.x_only_double(&r0);
            self.swap(choice, &mut r0, &mut r1);
        }

        r0
    }

    /// `X / Z`; the point at infinity normalizes to `0` since `0^(p-2) = 0`.
    fn to_affine(&self, p: &ProjectivePoint) -> BigInt {
        let field = self.field();
        field.reduce(&(&p.x * field.invert_mult(&p.z)))
    }
}

impl GroupAlgebra for XOnlyMontgomeryAlgebra {
    type Element = BigInt;

    #[inline]
    fn generator(&self) -> &BigInt {
        &self.generator
    }

    #[inline]
    fn order(&self) -> &BigPrime {
        self.parameters.order()
    }

    #[inline]
    fn cofactor(&self) -> &BigInt {
        self.parameters.cofactor()
    }

    #[inline]
    fn neutral_element(&self) -> &BigInt {
        &self.neutral
    }

    fn element_bit_length(&self) -> usize {
        self.field().element_bit_length()
    }

    fn security_level(&self) -> usize {
        self.order_bit_length() / 2
    }

    fn add(&self, _left: &BigInt, _right: &BigInt) -> Result<BigInt> {
        Err(Error::Unsupported(
            "x-only elements cannot be added; use the full-coordinate curve algebra",
        ))
    }

    fn negate(&self, _element: &BigInt) -> Result<BigInt> {
        Err(Error::Unsupported(
            "x-only elements cannot be negated; use the full-coordinate curve algebra",
        ))
    }

    fn select(&self, choice: Choice, when_unset: &BigInt, when_set: &BigInt) -> BigInt {
        select_integer(choice, when_unset, when_set, self.field().element_byte_length())
    }

    /// `x` is a field element and `(x^3 + A*x^2 + x) / B` is a square, so some
    /// `y` completes it to a point on the curve rather than its twist.
    fn is_potential_element(&self, element: &BigInt) -> bool {
        let field = self.field();
        if !field.is_element(element) {
            return false;
        }
        let equation = self.parameters.equation();
        let x2 = element * element;
        let rhs = &x2 * element + equation.a() * &x2 + element;
        field.is_quadratic_residue(&(rhs * field.invert_mult(equation.b())))
    }

    fn from_bytes(&self, buffer: &[u8]) -> Result<BigInt> {
        self.field().from_bytes(buffer)
    }

    fn to_bytes(&self, element: &BigInt) -> Vec<u8> {
        self.field().to_bytes(element)
    }

    /// Montgomery ladder over `factor_bit_length` bits, most significant
    /// first, keeping `r1 = r0 + element` throughout. Each bit costs one
    /// conditional swap, one differential addition, one doubling and a swap
    /// back, whatever its value.
    fn multiply_scalar_unchecked(&self, element: &BigInt, factor: &BigInt, factor_bit_length: usize) -> Result<BigInt> {
        Ok(self.to_affine(&self.ladder(element, factor, factor_bit_length)))
    }

    /// Decides on the projective `Z` of `order * element`: normalizing would
    /// map the order-two point `(0, 0)` to `0` and let points of order
    /// `2 * order` pass as subgroup members.
    fn is_element(&self, element: &BigInt) -> bool {
        if !self.is_potential_element(element) {
            return false;
        }
        // the neutral encoding; as a ladder base it degenerates
        if element.sign() == Sign::NoSign {
            return true;
        }
        let multiple = self.ladder(element, self.order().value(), self.order_bit_length());
        self.field().reduce(&multiple.z).sign() == Sign::NoSign
    }
}
