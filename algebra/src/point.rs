use core::fmt::{self, Display, Formatter};

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// A curve point in affine coordinates `(x, y)`, or the point at infinity.
///
/// The point at infinity always carries zero coordinates, so the derived
/// equality and hash, which compare `(is_infinity, x, y)`, never depend on
/// them in a meaningful way.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurvePoint {
    x: BigInt,
    y: BigInt,
    is_infinity: bool,
}

impl CurvePoint {
    /// A finite point; coordinates are taken as given, unreduced.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        CurvePoint {
            x,
            y,
            is_infinity: false,
        }
    }

    /// The neutral element of every curve group.
    pub fn infinity() -> Self {
        CurvePoint {
            x: BigInt::from(0),
            y: BigInt::from(0),
            is_infinity: true,
        }
    }

    #[inline]
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Assemble a point from selected components. For `is_infinity` the
    /// coordinates must already be zero.
    pub(crate) fn from_raw_parts(x: BigInt, y: BigInt, is_infinity: bool) -> Self {
        debug_assert!(!is_infinity || (x == BigInt::from(0) && y == BigInt::from(0)));
        CurvePoint { x, y, is_infinity }
    }
}

impl From<(u64, u64)> for CurvePoint {
    fn from((x, y): (u64, u64)) -> Self {
        CurvePoint::new(BigInt::from(x), BigInt::from(y))
    }
}

impl Display for CurvePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_infinity {
            return f.write_str("(infinity)");
        }
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity() {
        let inf = CurvePoint::infinity();
        assert!(inf.is_infinity());
        assert_eq!(inf, CurvePoint::infinity());
        assert_ne!(inf, CurvePoint::from((0, 0)));
    }

    #[test]
    fn test_value_equality() {
        let p = CurvePoint::from((5, 3));
        assert_eq!(p, CurvePoint::new(BigInt::from(5), BigInt::from(3)));
        assert_ne!(p, CurvePoint::from((5, 20)));
        assert!(!p.is_infinity());
    }

    #[test]
    fn test_from_raw_parts() {
        let point = CurvePoint::from_raw_parts(BigInt::from(0), BigInt::from(0), true);
        assert_eq!(point, CurvePoint::infinity());
        let point = CurvePoint::from_raw_parts(BigInt::from(7), BigInt::from(9), false);
        assert_eq!(point, CurvePoint::from((7, 9)));
    }

    #[test]
    fn test_display() {
        assert_eq!(CurvePoint::from((5, 3)).to_string(), "(5, 3)");
        assert_eq!(CurvePoint::infinity().to_string(), "(infinity)");
    }

    #[test]
    fn test_serde_round_trip() {
        let point = CurvePoint::from((15, 14));
        let encoded = bincode::serialize(&point).unwrap();
        let decoded: CurvePoint = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, point);
    }
}
