use num_bigint::{BigInt, Sign};
use subtle::Choice;

use crate::algebra::GroupAlgebra;
use crate::equation::CurveEquation;
use crate::errors::{Error, Result};
use crate::parameters::CurveParameters;
use crate::point::CurvePoint;
use crate::prime::BigPrime;
use crate::select::{select_flag, select_integer};

/// Group algebra over the points of an elliptic curve in affine coordinates.
///
/// Points encode as `x || y`, each coordinate little-endian and zero padded to
/// the field element width. The point at infinity encodes as all zeros.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurveGroupAlgebra<C> {
    parameters: CurveParameters<C>,
    neutral: CurvePoint,
}

impl<C: CurveEquation> CurveGroupAlgebra<C> {
    pub fn new(parameters: CurveParameters<C>) -> Self {
        CurveGroupAlgebra {
            parameters,
            neutral: CurvePoint::infinity(),
        }
    }

    #[inline]
    pub fn parameters(&self) -> &CurveParameters<C> {
        &self.parameters
    }

    #[inline]
    pub fn equation(&self) -> &C {
        self.parameters.equation()
    }
}

impl<C: CurveEquation> GroupAlgebra for CurveGroupAlgebra<C> {
    type Element = CurvePoint;

    #[inline]
    fn generator(&self) -> &CurvePoint {
        self.parameters.generator()
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
    fn neutral_element(&self) -> &CurvePoint {
        &self.neutral
    }

    fn element_bit_length(&self) -> usize {
        2 * self.equation().field().element_bit_length()
    }

    /// Pollard's rho needs about `sqrt(order)` steps.
    fn security_level(&self) -> usize {
        self.order_bit_length() / 2
    }

    fn add(&self, left: &CurvePoint, right: &CurvePoint) -> Result<CurvePoint> {
        Ok(self.equation().add(left, right))
    }

    fn negate(&self, element: &CurvePoint) -> Result<CurvePoint> {
        Ok(self.equation().negate(element))
    }

    fn select(&self, choice: Choice, when_unset: &CurvePoint, when_set: &CurvePoint) -> CurvePoint {
        // the byte image drops signs, so coordinates are reduced first
        let field = self.equation().field();
        let width = field.element_byte_length();
        let x = select_integer(choice, &field.reduce(when_unset.x()), &field.reduce(when_set.x()), width);
        let y = select_integer(choice, &field.reduce(when_unset.y()), &field.reduce(when_set.y()), width);
        let is_infinity = select_flag(choice, when_unset.is_infinity(), when_set.is_infinity());
        CurvePoint::from_raw_parts(x, y, is_infinity)
    }

    fn is_potential_element(&self, element: &CurvePoint) -> bool {
        self.equation().is_point_in_field(element) && self.equation().is_point_on_curve(element)
    }

    /// Decode the first two element widths of `buffer`; trailing bytes are
    /// ignored. The result is not validated.
    fn from_bytes(&self, buffer: &[u8]) -> Result<CurvePoint> {
        let field = self.equation().field();
        let width = field.element_byte_length();
        if buffer.len() < 2 * width {
            return Err(Error::InvalidArgument("buffer is shorter than two field elements"));
        }

        let x = field.from_bytes(&buffer[..width])?;
        let y = field.from_bytes(&buffer[width..2 * width])?;
        if x.sign() == Sign::NoSign && y.sign() == Sign::NoSign {
            return Ok(CurvePoint::infinity());
        }
        Ok(CurvePoint::new(x, y))
    }

    fn to_bytes(&self, element: &CurvePoint) -> Vec<u8> {
        let field = self.equation().field();
        let mut buffer = field.to_bytes(element.x());
        buffer.extend(field.to_bytes(element.y()));
        buffer
    }
}
