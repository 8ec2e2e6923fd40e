use log::debug;
use num_traits::One;
use tinyvec::TinyVec;

use crate::cast;
use crate::control_points::{ControlPoints, CurveModel};
use crate::error::CurveError;
use crate::point::Point;
use crate::point_ops::lerp;

/// Evaluates the Bézier curve of `points[start..=end]` at `t` with De Casteljau's algorithm.
/// Adjacent points are interpolated `end - start` times, each pass reducing
/// the working set by one until a single point remains.
/// Panics if `end` is out of bounds or `start > end`.
pub fn de_casteljau<P: Point>(points: &[P], start: usize, end: usize, t: P::Scalar) -> P {
    // small control polygons are reduced on the stack
    let mut p: TinyVec<[P; 16]> = points[start..=end].iter().copied().collect();
    for i in (1..p.len()).rev() {
        for j in 0..i {
            p[j] = lerp(p[j], p[j + 1], t);
        }
    }
    p[0]
}

/// Polygonal approximation of the Bézier curve defined by the control points.
///
/// The curve is sampled at `steps + 1` evenly spaced parameters `t_i = i / steps`,
/// `t_0 = 0` and `t_steps = 1` included, and kept up to date on every edit:
/// appending a control point patches the existing samples, any other edit
/// rebuilds them.
#[derive(Debug, Clone)]
pub struct BezierCurve<P: Point> {
    steps: usize,
    control_points: ControlPoints<P>,
    curve_points: Vec<P>,
}

impl<P: Point> BezierCurve<P> {
    /// Creates an empty curve sampled with `steps` segments
    pub fn new(steps: usize) -> Result<Self, CurveError> {
        if steps == 0 {
            return Err(CurveError::InvalidSteps);
        }
        Ok(BezierCurve {
            steps,
            control_points: ControlPoints::new(),
            curve_points: Vec::with_capacity(steps + 1),
        })
    }

    /// Creates a curve from a whole control polygon
    pub fn from_points(steps: usize, points: Vec<P>) -> Result<Self, CurveError> {
        let mut curve = Self::new(steps)?;
        curve.make_from_points(points);
        Ok(curve)
    }

    /// Replaces the control polygon and rebuilds the curve
    pub fn make_from_points(&mut self, points: Vec<P>) {
        self.control_points.set_points(points);
        self.make();
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Sampled points of the curve, empty without control points
    pub fn curve_points(&self) -> &[P] {
        &self.curve_points
    }

    /// Evaluates the curve at `t`, `None` without control points
    pub fn eval(&self, t: P::Scalar) -> Option<P> {
        let points = self.control_points.as_slice();
        if points.is_empty() {
            return None;
        }
        Some(de_casteljau(points, 0, points.len() - 1, t))
    }

    /// Sampling parameter of sample `i`, exactly 1 for the last one
    fn sample_parameter(&self, i: usize) -> P::Scalar {
        if i == self.steps {
            P::Scalar::one()
        } else {
            cast::<P::Scalar, _>(i) / cast::<P::Scalar, _>(self.steps)
        }
    }

    /// Rebuilds all samples from the control points
    fn make(&mut self) {
        self.curve_points.clear();
        let points = self.control_points.as_slice();
        if points.is_empty() {
            return;
        }
        let end = points.len() - 1;
        for i in 0..=self.steps {
            let t = self.sample_parameter(i);
            self.curve_points.push(de_casteljau(points, 0, end, t));
        }
        debug!(
            "rebuilt Bezier curve of degree {} ({} samples)",
            end,
            self.curve_points.len()
        );
    }

    /// Updates the samples after a control point was appended.
    /// B_{0..n}(t) = (1 - t) * B_{0..n-1}(t) + t * B_{1..n}(t), where the
    /// current samples hold B_{0..n-1}.
    fn extend(&mut self) {
        let n = self.control_points.len();
        if n == 1 {
            self.make();
            return;
        }
        let points = self.control_points.as_slice();
        for i in 0..=self.steps {
            let t = self.sample_parameter(i);
            let tail = de_casteljau(points, 1, n - 1, t);
            self.curve_points[i] = lerp(self.curve_points[i], tail, t);
        }
        debug!("extended Bezier curve to degree {}", n - 1);
    }
}

impl<P: Point> CurveModel<P> for BezierCurve<P> {
    fn control_points(&self) -> &ControlPoints<P> {
        &self.control_points
    }

    fn add(&mut self, p: P) {
        self.control_points.push(p);
        self.extend();
    }

    fn delete_control_point(&mut self, p: P, threshold: P::Scalar) -> bool {
        if self.control_points.remove_closest(p, threshold) {
            self.make();
            return true;
        }
        false
    }

    fn update_control_point(&mut self, p_old: P, p_new: P, threshold: P::Scalar) -> bool {
        if self.control_points.move_closest(p_old, p_new, threshold) {
            self.make();
            return true;
        }
        false
    }

    fn update_control_point_at_index(
        &mut self,
        idx: usize,
        p_new: P,
        _threshold: P::Scalar,
    ) -> Result<(), CurveError> {
        self.control_points.set_at(idx, p_new)?;
        self.make();
        Ok(())
    }

    fn reset(&mut self) {
        self.control_points.clear();
        self.curve_points.clear();
    }
}
