//! Curves in short Weierstrass form: y^2 = x^3 + A*x + B

use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

use crate::equation::CurveEquation;
use crate::errors::{Error, Result};
use crate::field::PrimeField;
use crate::point::CurvePoint;
use crate::prime::BigPrime;

/// Short Weierstrass curve equation `y^2 = x^3 + A*x + B` over a prime field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeierstrassCurveEquation {
    field: PrimeField,
    a: BigInt,
    b: BigInt,
}

impl WeierstrassCurveEquation {
    /// Build the equation, reducing `a` and `b` into the field. Singular
    /// curves, where `4A^3 + 27B^2 ≡ 0`, are rejected.
    pub fn new(prime: BigPrime, a: BigInt, b: BigInt) -> Result<Self> {
        let field = PrimeField::new(prime);
        let a = field.reduce(&a);
        let b = field.reduce(&b);

        let discriminant = field.reduce(&(BigInt::from(4) * &a * &a * &a + BigInt::from(27) * &b * &b));
        if discriminant.sign() == Sign::NoSign {
            return Err(Error::InvalidArgument("curve equation is singular"));
        }

        Ok(WeierstrassCurveEquation { field, a, b })
    }
}

impl CurveEquation for WeierstrassCurveEquation {
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
        let y2 = self.field.square(point.y());
        let rhs = self.field.reduce(&(x * x * x + &self.a * x + &self.b));

        y2 == rhs
    }

    fn tangent_slope(&self, point: &CurvePoint) -> BigInt {
        // λ = (3x^2 + a) / (2y)
        let x = point.x();
        let numerator = BigInt::from(3) * x * x + &self.a;
        let denominator = self.field.invert_mult(&(BigInt::from(2) * point.y()));
        self.field.reduce(&(numerator * denominator))
    }

    fn sum_x(&self, lambda: &BigInt, left: &CurvePoint, right: &CurvePoint) -> BigInt {
        // x3 = λ^2 - x1 - x2
        self.field.reduce(&(lambda * lambda - left.x() - right.x()))
    }
}
