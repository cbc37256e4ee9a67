//! Generic elliptic curve group algebra over prime fields.
//!
//! Curves are described by a [`CurveEquation`] (short Weierstrass or
//! Montgomery form) over a [`PrimeField`], bundled with a generator and its
//! order in [`CurveParameters`]. Any [`GroupAlgebra`] gets constant-time
//! double-and-add scalar multiplication, validation and random generation;
//! [`CurveGroupAlgebra`] implements it with affine points, and
//! [`XOnlyMontgomeryAlgebra`] with x-coordinates and the Montgomery ladder.
//! [`CryptoGroup`] wraps an algebra so that its elements carry their group.

mod algebra;
mod crypto_group;
mod curve_algebra;
mod equation;
mod errors;
mod field;
mod montgomery;
mod multiplicative;
mod named;
mod parameters;
mod point;
mod prime;
mod random;
mod select;
mod weierstrass;
mod xonly;

#[cfg(test)]
mod test_curves;

pub use algebra::GroupAlgebra;
pub use crypto_group::{CryptoGroup, GroupElement};
pub use curve_algebra::CurveGroupAlgebra;
pub use equation::CurveEquation;
pub use errors::{Error, Result};
pub use field::PrimeField;
pub use montgomery::MontgomeryCurveEquation;
pub use multiplicative::MultiplicativeGroupAlgebra;
pub use num_bigint::BigInt;
pub use parameters::CurveParameters;
pub use point::CurvePoint;
pub use prime::{is_probable_prime, BigPrime};
pub use random::{random_below, random_between};
pub use select::{conditional_swap, select_flag, select_integer, ScalarBits};
pub use weierstrass::WeierstrassCurveEquation;
pub use xonly::XOnlyMontgomeryAlgebra;
