//! Curves in Montgomery form: B*y^2 = x^3 + A*x^2 + x

use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

use crate::equation::CurveEquation;
use crate::errors::{Error, Result};
use crate::field::PrimeField;
use crate::point::CurvePoint;
use crate::prime::BigPrime;

/// Montgomery curve equation `B*y^2 = x^3 + A*x^2 + x` over a prime field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MontgomeryCurveEquation {
    field: PrimeField,
    a: BigInt,
    b: BigInt,
}

impl MontgomeryCurveEquation {
    /// Build the equation, reducing `a` and `b` into the field. Singular
    /// curves, where `B*(A^2 - 4) ≡ 0`, are rejected.
    pub fn new(prime: BigPrime, a: BigInt, b: BigInt) -> Result<Self> {
        let field = PrimeField::new(prime);
        let a = field.reduce(&a);
        let b = field.reduce(&b);

        let discriminant = field.reduce(&(&b * (&a * &a - 4u32)));
        if discriminant.sign() == Sign::NoSign {
            return Err(Error::InvalidArgument("curve equation is singular"));
        }

        Ok(MontgomeryCurveEquation { field, a, b })
    }
}

impl CurveEquation for MontgomeryCurveEquation {
    #[inline]
    fn field(&self) -> &PrimeField {
        &self.field
    }

    #[inline]
    fn a(&self) -> &BigInt {
        &self.a
    }

    #[inline]
    fn b(&self) -> &BigInt {
        &self.b
    }

    fn is_point_on_curve(&self, point: &CurvePoint) -> bool {
        if point.is_infinity() {
            return true;
        }

        let x = point.x();
        let x2 = x * x;
        let lhs = self.field.reduce(&(&self.b * self.field.square(point.y())));
        let rhs = self.field.reduce(&(&x2 * x + &self.a * &x2 + x));

        lhs == rhs
    }

    fn tangent_slope(&self, point: &CurvePoint) -> BigInt {
        // λ = (3x^2 + 2Ax + 1) / (2By)
        let x = point.x();
        let numerator = BigInt::from(3) * x * x + BigInt::from(2) * &self.a * x + 1u32;
        let denominator = self.field.invert_mult(&(BigInt::from(2) * &self.b * point.y()));
        self.field.reduce(&(numerator * denominator))
    }

    fn sum_x(&self, lambda: &BigInt, left: &CurvePoint, right: &CurvePoint) -> BigInt {
        // x3 = Bλ^2 - x1 - x2 - A
        self.field
            .reduce(&(&self.b * lambda * lambda - left.x() - right.x() - &self.a))
    }
}
