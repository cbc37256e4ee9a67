//! The contract shared by the supported curve shapes.

use core::fmt::Debug;
use core::hash::Hash;

use num_bigint::BigInt;

use crate::field::PrimeField;
use crate::point::CurvePoint;

/// A curve equation over a prime field, parameterized by coefficients `A` and
/// `B`.
///
/// Shapes supply their tangent slope, the x-coordinate of the chord's third
/// intersection and the membership test; addition and negation are shared.
///
/// Addition branches on infinity operands, on negations and on doubling, so it
/// is NOT constant time: an observer with side-channel access can tell these
/// cases apart. Constant-time guarantees live in scalar multiplication only.
pub trait CurveEquation: Clone + Debug + PartialEq + Eq + Hash + Send + Sync {
    fn field(&self) -> &PrimeField;

    fn a(&self) -> &BigInt;

    fn b(&self) -> &BigInt;

    /// Whether `point` satisfies the curve equation. The point at infinity
    /// lies on every curve.
    fn is_point_on_curve(&self, point: &CurvePoint) -> bool;

    /// Slope of the tangent at `point`, which must not be a point of order
    /// two.
    fn tangent_slope(&self, point: &CurvePoint) -> BigInt;

    /// x-coordinate of the sum of `left` and `right` for the line of slope
    /// `lambda` through them.
    fn sum_x(&self, lambda: &BigInt, left: &CurvePoint, right: &CurvePoint) -> BigInt;

    /// Whether both coordinates are field elements. Infinity always is.
    fn is_point_in_field(&self, point: &CurvePoint) -> bool {
        point.is_infinity()
            || (self.field().is_element(point.x()) && self.field().is_element(point.y()))
    }

    fn negate(&self, point: &CurvePoint) -> CurvePoint {
        if point.is_infinity() {
            return point.clone();
        }
        CurvePoint::new(point.x().clone(), self.field().reduce(&-point.y()))
    }

    fn are_negations(&self, left: &CurvePoint, right: &CurvePoint) -> bool {
        self.negate(left) == *right
    }

    /// Affine chord-and-tangent addition.
    fn add(&self, left: &CurvePoint, right: &CurvePoint) -> CurvePoint {
        // infinity is the identity
        if left.is_infinity() {
            return right.clone();
        }
        if right.is_infinity() {
            return left.clone();
        }

        // vertical chord
        if self.are_negations(left, right) {
            return CurvePoint::infinity();
        }

        let field = self.field();
        let lambda = if left == right {
            self.tangent_slope(left)
        } else {
            // λ = (y2 - y1) / (x2 - x1); x2 != x1 since the points are neither
            // equal nor negations
            let numerator = right.y() - left.y();
            let denominator = field.invert_mult(&(right.x() - left.x()));
            field.reduce(&(numerator * denominator))
        };

        let x = self.sum_x(&lambda, left, right);
        // y3 = λ(x1 - x3) - y1, shared by both shapes
        let y = field.reduce(&(&lambda * (left.x() - &x) - left.y()));

        CurvePoint::new(x, y)
    }
}
