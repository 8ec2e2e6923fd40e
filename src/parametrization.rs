//! Parametrizations of a control polygon.
//!
//! A parametrization assigns one parameter value per control point (the
//! knots `T`). Interpolating the x and y coordinates against `T` and
//! evaluating at evenly spaced samples of `[min(T), max(T)]` (see
//! [`create_samples`]) yields the interpolation curve.
//!
//! | scheme         | T[0]                  | T[i]                                  |
//! |----------------|-----------------------|---------------------------------------|
//! | uniform        | 0                     | i                                     |
//! | distance       | 0                     | T[i-1] + \|p[i] - p[i-1]\|            |
//! | root distance  | 0                     | T[i-1] + sqrt(\|p[i] - p[i-1]\|)      |
//! | Chebyshev      | cos(π / 2N)           | cos((2i+1)π / 2N)                     |

use log::debug;
use num_traits::{Float, Zero};

use crate::cast;
use crate::error::CurveError;
use crate::point::{Point, Scalar};

/// Parameter values of the nodes and the samples to evaluate the curve at
pub type Subdivision<F> = (Vec<F>, Vec<F>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parametrization {
    /// Node index as parameter
    Uniform,
    /// Cumulative chord length
    Distance,
    /// Cumulative square root of the chord length (centripetal)
    RootDistance,
    /// Chebyshev nodes of the first kind, decreasing from near 1 to near -1
    Chebyshev,
}

impl Parametrization {
    pub const ALL: [Parametrization; 4] = [
        Parametrization::Uniform,
        Parametrization::Distance,
        Parametrization::RootDistance,
        Parametrization::Chebyshev,
    ];

    /// Computes the knots `T` of the control points, one value per point
    pub fn knots<P: Point>(&self, points: &[P]) -> Vec<P::Scalar> {
        match self {
            Parametrization::Uniform => uniform_knots(points.len()),
            Parametrization::Distance => distance_knots(points),
            Parametrization::RootDistance => root_distance_knots(points),
            Parametrization::Chebyshev => chebyshev_knots(points),
        }
    }

    /// Computes the knots of the control points and the samples spaced by `step` covering them
    pub fn subdivide<P: Point>(
        &self,
        step: P::Scalar,
        points: &[P],
    ) -> Result<Subdivision<P::Scalar>, CurveError> {
        let t = self.knots(points);
        let t_eval = create_samples(step, &t)?;
        debug!(
            "{:?} parametrization of {} points: {} samples",
            self,
            points.len(),
            t_eval.len()
        );
        Ok((t, t_eval))
    }
}

/// Generates `step + 1` values from 0 to 1 with an increment of `1 / step`.
/// The last value is exactly 1.
pub fn uniform_parametrization<F: Float>(step: usize) -> Vec<F> {
    if step == 0 {
        return vec![F::one()];
    }
    let increment = F::one() / cast::<F, _>(step);
    (0..step)
        .map(|i| cast::<F, _>(i) * increment)
        .chain(core::iter::once(F::one()))
        .collect()
}

/// Knots `0, 1, ..., n - 1`
pub fn uniform_knots<F: Float>(n: usize) -> Vec<F> {
    (0..n).map(cast::<F, usize>).collect()
}

/// Cumulative distance along the control polygon, starting at 0
pub fn distance_knots<P: Point>(points: &[P]) -> Vec<P::Scalar> {
    cumulative_knots(points, |d| d)
}

/// Cumulative square root of the distances along the control polygon, starting at 0
pub fn root_distance_knots<P: Point>(points: &[P]) -> Vec<P::Scalar> {
    cumulative_knots(points, |d| d.sqrt())
}

fn cumulative_knots<P, W>(points: &[P], weight: W) -> Vec<P::Scalar>
where
    P: Point,
    W: Fn(P::Scalar) -> P::Scalar,
{
    let mut t = Vec::with_capacity(points.len());
    if points.is_empty() {
        return t;
    }
    let mut acc = P::Scalar::zero();
    t.push(acc);
    for pair in points.windows(2) {
        acc = acc + weight(pair[0].distance(pair[1]));
        t.push(acc);
    }
    t
}

/// Chebyshev nodes `cos((2i + 1)π / (2(N - 1) + 2))`, strictly decreasing within `[-1, 1]`
pub fn chebyshev_knots<P: Point>(points: &[P]) -> Vec<P::Scalar> {
    chebyshev_nodes(points.len())
}

fn chebyshev_nodes<F: Scalar>(n: usize) -> Vec<F> {
    if n == 0 {
        return Vec::new();
    }
    let denom: F = cast(2 * (n - 1) + 2);
    (0..n)
        .map(|i| {
            let k: F = cast(2 * i + 1);
            (k * F::PI() / denom).cos()
        })
        .collect()
}

/// Generates samples spaced by `step` over `[min(t), max(t)]`.
///
/// The first sample is `min(t)` and the last one is exactly `max(t)`: when the
/// regular grid stops short of it, `max(t)` is appended as an extra sample,
/// so only the last gap may be shorter than `step`. A single knot yields a
/// single sample and no knots yield no samples.
pub fn create_samples<F: Float>(step: F, t: &[F]) -> Result<Vec<F>, CurveError> {
    if !(step.is_finite() && step > F::zero()) {
        return Err(CurveError::InvalidStep);
    }
    let (lo, hi) = match min_max(t) {
        Some(bounds) => bounds,
        None => return Ok(Vec::new()),
    };
    if hi <= lo {
        return Ok(vec![lo]);
    }

    let n = ((hi - lo) / step).floor().to_usize().unwrap_or(0);
    let mut samples: Vec<F> = (0..=n).map(|i| lo + cast::<F, _>(i) * step).collect();
    let last = samples[n];
    if last > hi {
        // rounding pushed the last grid value past the end
        samples[n] = hi;
    } else if last < hi {
        samples.push(hi);
    }
    Ok(samples)
}

fn min_max<F: Float>(values: &[F]) -> Option<(F, F)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Knots `0..n` and their samples spaced by `step`
pub fn uniform_subdivision<F: Float>(n: usize, step: F) -> Result<Subdivision<F>, CurveError> {
    let t = uniform_knots(n);
    let t_eval = create_samples(step, &t)?;
    Ok((t, t_eval))
}

pub fn distance_subdivision<P: Point>(
    step: P::Scalar,
    points: &[P],
) -> Result<Subdivision<P::Scalar>, CurveError> {
    Parametrization::Distance.subdivide(step, points)
}

pub fn root_distance_subdivision<P: Point>(
    step: P::Scalar,
    points: &[P],
) -> Result<Subdivision<P::Scalar>, CurveError> {
    Parametrization::RootDistance.subdivide(step, points)
}

pub fn chebyshev_subdivision<P: Point>(
    step: P::Scalar,
    points: &[P],
) -> Result<Subdivision<P::Scalar>, CurveError> {
    Parametrization::Chebyshev.subdivide(step, points)
}
