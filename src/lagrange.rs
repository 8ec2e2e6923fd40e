//! Lagrange polynomial interpolation.
//!
//! The interpolating polynomial through the nodes `(xs[i], ys[i])` is
//! evaluated with the basis-polynomial sum
//!
//! ```text
//! L(x) = Σ_i ys[i] * Π_{j≠i} (x - xs[j]) / (xs[i] - xs[j])
//! ```
//!
//! which is O(N²) per evaluated value. Node abscissas must be pairwise
//! distinct: coincident values divide by zero and the result is infinite or
//! NaN. That is left to the caller, the parametrizations in this crate only
//! produce such values for degenerate control polygons (e.g. two consecutive
//! coincident points under a distance parametrization).

use num_traits::Float;

use crate::error::CurveError;
use crate::point::Point;
use crate::point_ops::split_coordinates;

/// Evaluates at `x` the Lagrange polynomial passing through `(xs[i], ys[i])`.
pub fn lagrange<F: Float>(x: F, xs: &[F], ys: &[F]) -> Result<F, CurveError> {
    if xs.len() != ys.len() {
        return Err(CurveError::LengthMismatch {
            expected: xs.len(),
            found: ys.len(),
        });
    }
    Ok(lagrange_unchecked(x, xs, ys))
}

fn lagrange_unchecked<F: Float>(x: F, xs: &[F], ys: &[F]) -> F {
    debug_assert_eq!(xs.len(), ys.len());
    let mut sum = F::zero();
    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut basis = F::one();
        for (j, &xj) in xs.iter().enumerate() {
            if i != j {
                basis = basis * (x - xj) / (xi - xj);
            }
        }
        sum = sum + yi * basis;
    }
    sum
}

/// Evaluates at `x` the polynomial `y = f(x)` passing through the given points.
pub fn lagrange_points<P: Point>(x: P::Scalar, points: &[P]) -> P::Scalar {
    let (xs, ys) = split_coordinates(points);
    lagrange_unchecked(x, &xs, &ys)
}

/// Reconstructs one point per value of `t_eval`, interpolating the x
/// coordinates `xs` and the y coordinates `ys` independently against the
/// parameters `t` of the nodes.
pub fn apply_lagrange_subdivision<P: Point>(
    xs: &[P::Scalar],
    ys: &[P::Scalar],
    t: &[P::Scalar],
    t_eval: &[P::Scalar],
) -> Result<Vec<P>, CurveError> {
    for coords in [xs, ys] {
        if coords.len() != t.len() {
            return Err(CurveError::LengthMismatch {
                expected: t.len(),
                found: coords.len(),
            });
        }
    }
    Ok(t_eval
        .iter()
        .map(|&s| P::from_xy(lagrange_unchecked(s, t, xs), lagrange_unchecked(s, t, ys)))
        .collect())
}

/// Same as [`apply_lagrange_subdivision`] with the nodes given as points.
pub fn apply_lagrange_subdivision_points<P: Point>(
    points: &[P],
    t: &[P::Scalar],
    t_eval: &[P::Scalar],
) -> Result<Vec<P>, CurveError> {
    let (xs, ys) = split_coordinates(points);
    apply_lagrange_subdivision(&xs, &ys, t, t_eval)
}
