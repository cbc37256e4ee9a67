use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

use crate::equation::CurveEquation;
use crate::errors::{Error, Result};
use crate::point::CurvePoint;
use crate::prime::BigPrime;

/// A curve equation together with a generator of a prime-order subgroup.
///
/// Construction validates the generator, so a `CurveParameters` value always
/// describes a usable group. Deserialized values go through the same checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "UncheckedCurveParameters<C>",
    bound(deserialize = "C: CurveEquation + Deserialize<'de>")
)]
pub struct CurveParameters<C> {
    equation: C,
    generator: CurvePoint,
    order: BigPrime,
    cofactor: BigInt,
}

#[derive(Deserialize)]
struct UncheckedCurveParameters<C> {
    equation: C,
    generator: CurvePoint,
    order: BigPrime,
    cofactor: BigInt,
}

impl<C: CurveEquation> TryFrom<UncheckedCurveParameters<C>> for CurveParameters<C> {
    type Error = Error;

    fn try_from(raw: UncheckedCurveParameters<C>) -> Result<Self> {
        CurveParameters::new(raw.equation, raw.generator, raw.order, raw.cofactor)
    }
}

impl<C: CurveEquation> CurveParameters<C> {
    /// Validate and bundle curve parameters.
    ///
    /// Fails with [`Error::InvalidArgument`] unless the generator is a finite
    /// point with field coordinates that satisfies the equation and is
    /// annihilated by `order`, and the cofactor is positive. The primality of
    /// `order` is the caller's evidence carried by [`BigPrime`].
    pub fn new(equation: C, generator: CurvePoint, order: BigPrime, cofactor: BigInt) -> Result<Self> {
        if cofactor.sign() != Sign::Plus {
            return Err(Error::InvalidArgument("cofactor must be positive"));
        }
        if generator.is_infinity() {
            return Err(Error::InvalidArgument("generator must not be the point at infinity"));
        }
        if !equation.is_point_in_field(&generator) {
            return Err(Error::InvalidArgument("generator coordinates are not field elements"));
        }
        if !equation.is_point_on_curve(&generator) {
            return Err(Error::InvalidArgument("generator is not on the curve"));
        }
        if !multiply_vartime(&equation, &generator, order.value()).is_infinity() {
            return Err(Error::InvalidArgument("generator does not have the given order"));
        }

        Ok(CurveParameters {
            equation,
            generator,
            order,
            cofactor,
        })
    }

    #[inline]
    pub fn equation(&self) -> &C {
        &self.equation
    }

    #[inline]
    pub fn generator(&self) -> &CurvePoint {
        &self.generator
    }

    #[inline]
    pub fn order(&self) -> &BigPrime {
        &self.order
    }

    #[inline]
    pub fn cofactor(&self) -> &BigInt {
        &self.cofactor
    }
}

/// Plain double-and-add over public values, for setup-time checks only.
fn multiply_vartime<C: CurveEquation>(equation: &C, point: &CurvePoint, factor: &BigInt) -> CurvePoint {
    let mut result = CurvePoint::infinity();
    let mut running = point.clone();
    let mut bits = factor.clone();
    let one = BigInt::from(1);

    while bits.sign() == Sign::Plus {
        if &bits & &one == one {
            result = equation.add(&result, &running);
        }
        running = equation.add(&running, &running);
        bits >>= 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_curves::{montgomery_parameters_41, weierstrass_equation_23, weierstrass_parameters_23};
    use crate::WeierstrassCurveEquation;

    fn prime(value: u64) -> BigPrime {
        BigPrime::new_unchecked(BigInt::from(value))
    }

    #[test]
    fn test_valid_parameters() {
        let parameters = weierstrass_parameters_23();
        assert_eq!(parameters.generator(), &CurvePoint::from((5, 3)));
        assert_eq!(parameters.order(), &prime(11));
        assert_eq!(parameters.cofactor(), &BigInt::from(2));

        let parameters = montgomery_parameters_41();
        assert_eq!(parameters.generator(), &CurvePoint::from((7, 10)));
    }

    #[test]
    fn test_rejects_generator_off_curve() {
        let result = CurveParameters::new(
            weierstrass_equation_23(),
            CurvePoint::from((5, 5)),
            prime(11),
            BigInt::from(2),
        );
        assert_eq!(result, Err(Error::InvalidArgument("generator is not on the curve")));
    }

    #[test]
    fn test_rejects_generator_of_wrong_order() {
        // (1, 10) has order 22
        let result = CurveParameters::new(
            weierstrass_equation_23(),
            CurvePoint::from((1, 10)),
            prime(11),
            BigInt::from(2),
        );
        assert_eq!(result, Err(Error::InvalidArgument("generator does not have the given order")));

        // (10, 0) has order 2
        let result = CurveParameters::new(
            weierstrass_equation_23(),
            CurvePoint::from((10, 0)),
            prime(11),
            BigInt::from(2),
        );
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_infinity_and_out_of_field_generators() {
        let result = CurveParameters::new(
            weierstrass_equation_23(),
            CurvePoint::infinity(),
            prime(11),
            BigInt::from(2),
        );
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let result = CurveParameters::new(
            weierstrass_equation_23(),
            CurvePoint::from((28, 3)),
            prime(11),
            BigInt::from(2),
        );
        assert_eq!(result, Err(Error::InvalidArgument("generator coordinates are not field elements")));
    }

    #[test]
    fn test_rejects_non_positive_cofactor() {
        let result = CurveParameters::new(
            weierstrass_equation_23(),
            CurvePoint::from((5, 3)),
            prime(11),
            BigInt::from(0),
        );
        assert_eq!(result, Err(Error::InvalidArgument("cofactor must be positive")));
    }

    #[test]
    fn test_multiply_vartime() {
        let equation = weierstrass_equation_23();
        let g = CurvePoint::from((5, 3));
        assert_eq!(multiply_vartime(&equation, &g, &BigInt::from(0)), CurvePoint::infinity());
        assert_eq!(multiply_vartime(&equation, &g, &BigInt::from(4)), CurvePoint::from((0, 20)));
        assert_eq!(multiply_vartime(&equation, &g, &BigInt::from(10)), CurvePoint::from((5, 20)));
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let parameters = weierstrass_parameters_23();
        let encoded = bincode::serialize(&parameters).unwrap();
        let decoded: CurveParameters<WeierstrassCurveEquation> = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, parameters);

        let forged = UncheckedCurveParameters {
            equation: weierstrass_equation_23(),
            generator: CurvePoint::from((1, 10)),
            order: prime(11),
            cofactor: BigInt::from(2),
        };
        assert!(CurveParameters::try_from(forged).is_err());
    }
}
