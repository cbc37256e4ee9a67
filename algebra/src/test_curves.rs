//! Small curves with hand-checked arithmetic, shared by the unit tests.

use num_bigint::BigInt;

use crate::{BigPrime, CurveParameters, CurvePoint, MontgomeryCurveEquation, WeierstrassCurveEquation};

/// y^2 = x^3 - 2x + 9 over F_23; 22 points, so cofactor 2 for order 11.
pub(crate) fn weierstrass_equation_23() -> WeierstrassCurveEquation {
    WeierstrassCurveEquation::new(
        BigPrime::new_unchecked(BigInt::from(23)),
        BigInt::from(-2),
        BigInt::from(9),
    )
    .unwrap()
}

pub(crate) fn weierstrass_parameters_23() -> CurveParameters<WeierstrassCurveEquation> {
    CurveParameters::new(
        weierstrass_equation_23(),
        CurvePoint::from((5, 3)),
        BigPrime::new_unchecked(BigInt::from(11)),
        BigInt::from(2),
    )
    .unwrap()
}

/// 3y^2 = x^3 + 4x^2 + x over F_41; 44 points, so cofactor 4 for order 11.
pub(crate) fn montgomery_equation_41() -> MontgomeryCurveEquation {
    MontgomeryCurveEquation::new(
        BigPrime::new_unchecked(BigInt::from(41)),
        BigInt::from(4),
        BigInt::from(3),
    )
    .unwrap()
}

pub(crate) fn montgomery_parameters_41() -> CurveParameters<MontgomeryCurveEquation> {
    CurveParameters::new(
        montgomery_equation_41(),
        CurvePoint::from((7, 10)),
        BigPrime::new_unchecked(BigInt::from(11)),
        BigInt::from(4),
    )
    .unwrap()
}
