use log::{debug, error};
use num_traits::{Float, ToPrimitive};

use crate::cast;
use crate::control_points::{ControlPoints, CurveModel};
use crate::error::CurveError;
use crate::lagrange::{apply_lagrange_subdivision_points, lagrange_points};
use crate::parametrization::Parametrization;
use crate::point::Point;
use crate::NativeFloat;

/// Sample step of the Chebyshev curve, used instead of the configured step.
/// Chebyshev knots always lie within `[-1, 1]`.
pub const CHEBYSHEV_SAMPLE_STEP: NativeFloat = 0.01;

/// Sampling configuration of an [`InterpolationCurve`].
/// `xmin`/`xmax` bound the functional curve, `step` is the sample spacing of
/// the functional, uniform, distance and root-distance curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationParameters<F = NativeFloat> {
    xmin: F,
    xmax: F,
    step: F,
}

impl<F: Float> InterpolationParameters<F> {
    /// Validates and builds the parameters.
    /// Requires finite bounds with `xmin <= xmax` and a finite, strictly positive step.
    pub fn new(xmin: F, xmax: F, step: F) -> Result<Self, CurveError> {
        let finite = xmin.is_finite() && xmax.is_finite() && step.is_finite();
        if !finite || xmin > xmax || step <= F::zero() {
            return Err(CurveError::InvalidParameters);
        }
        Ok(InterpolationParameters { xmin, xmax, step })
    }

    pub fn xmin(&self) -> F {
        self.xmin
    }

    pub fn xmax(&self) -> F {
        self.xmax
    }

    pub fn step(&self) -> F {
        self.step
    }
}

/// `{ xmin: 0, xmax: 100, step: 0.1 }`
impl<F: Float> Default for InterpolationParameters<F> {
    fn default() -> Self {
        InterpolationParameters {
            xmin: F::zero(),
            xmax: cast(100),
            step: cast(0.1),
        }
    }
}

/// The curves derived by an [`InterpolationCurve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationKind {
    /// `y = L(x)` through the control points, sampled over `[xmin, xmax]`
    Functional,
    Uniform,
    Distance,
    RootDistance,
    Chebyshev,
}

impl InterpolationKind {
    pub const ALL: [InterpolationKind; 5] = [
        InterpolationKind::Functional,
        InterpolationKind::Uniform,
        InterpolationKind::Distance,
        InterpolationKind::RootDistance,
        InterpolationKind::Chebyshev,
    ];

    /// Parametrization the curve is built with, `None` for the functional curve
    pub fn parametrization(&self) -> Option<Parametrization> {
        match self {
            InterpolationKind::Functional => None,
            InterpolationKind::Uniform => Some(Parametrization::Uniform),
            InterpolationKind::Distance => Some(Parametrization::Distance),
            InterpolationKind::RootDistance => Some(Parametrization::RootDistance),
            InterpolationKind::Chebyshev => Some(Parametrization::Chebyshev),
        }
    }
}

/// Lagrange interpolation of the control points.
///
/// Five curves are derived and rebuilt on every edit as long as there are at
/// least two control points; with fewer all of them are empty:
/// - functional: `y = L(x)` with the control points as `(x, y)` nodes,
/// - parametric: x and y interpolated independently against the knots of
///   the uniform, distance, root-distance and Chebyshev parametrizations.
///
/// Control points sharing an x coordinate (functional curve) or consecutive
/// coincident control points (distance curves) yield non-finite samples.
#[derive(Debug, Clone)]
pub struct InterpolationCurve<P: Point> {
    params: InterpolationParameters<P::Scalar>,
    control_points: ControlPoints<P>,
    functional_curve: Vec<P>,
    uniform_curve: Vec<P>,
    distance_curve: Vec<P>,
    root_distance_curve: Vec<P>,
    chebyshev_curve: Vec<P>,
}

impl<P: Point> Default for InterpolationCurve<P> {
    fn default() -> Self {
        Self::new(InterpolationParameters::default())
    }
}

impl<P: Point> InterpolationCurve<P> {
    pub fn new(params: InterpolationParameters<P::Scalar>) -> Self {
        InterpolationCurve {
            params,
            control_points: ControlPoints::new(),
            functional_curve: Vec::new(),
            uniform_curve: Vec::new(),
            distance_curve: Vec::new(),
            root_distance_curve: Vec::new(),
            chebyshev_curve: Vec::new(),
        }
    }

    pub fn parameters(&self) -> &InterpolationParameters<P::Scalar> {
        &self.params
    }

    pub fn functional_curve(&self) -> &[P] {
        &self.functional_curve
    }

    pub fn uniform_curve(&self) -> &[P] {
        &self.uniform_curve
    }

    pub fn distance_curve(&self) -> &[P] {
        &self.distance_curve
    }

    pub fn root_distance_curve(&self) -> &[P] {
        &self.root_distance_curve
    }

    pub fn chebyshev_curve(&self) -> &[P] {
        &self.chebyshev_curve
    }

    pub fn curve(&self, kind: InterpolationKind) -> &[P] {
        match kind {
            InterpolationKind::Functional => &self.functional_curve,
            InterpolationKind::Uniform => &self.uniform_curve,
            InterpolationKind::Distance => &self.distance_curve,
            InterpolationKind::RootDistance => &self.root_distance_curve,
            InterpolationKind::Chebyshev => &self.chebyshev_curve,
        }
    }

    /// Rebuilds all curves, or clears them with fewer than two control points
    fn make(&mut self) {
        if self.control_points.len() < 2 {
            self.clear_curves();
            return;
        }
        if let Err(err) = self.try_make() {
            error!("rebuilding interpolation curves failed: {}", err);
            self.clear_curves();
            return;
        }
        debug!(
            "rebuilt interpolation curves of {} points: {} functional, {} uniform, {} distance, {} root distance, {} chebyshev samples",
            self.control_points.len(),
            self.functional_curve.len(),
            self.uniform_curve.len(),
            self.distance_curve.len(),
            self.root_distance_curve.len(),
            self.chebyshev_curve.len(),
        );
    }

    fn try_make(&mut self) -> Result<(), CurveError> {
        let step = self.params.step;
        self.functional_curve = self.make_functional();
        self.uniform_curve = self.make_parametric(Parametrization::Uniform, step)?;
        self.distance_curve = self.make_parametric(Parametrization::Distance, step)?;
        self.root_distance_curve = self.make_parametric(Parametrization::RootDistance, step)?;
        self.chebyshev_curve =
            self.make_parametric(Parametrization::Chebyshev, cast(CHEBYSHEV_SAMPLE_STEP))?;
        Ok(())
    }

    fn make_functional(&self) -> Vec<P> {
        let InterpolationParameters { xmin, xmax, step } = self.params;
        let points = self.control_points.as_slice();
        let n = ((xmax - xmin) / step).floor().to_usize().unwrap_or(0);
        (0..=n)
            .map(|i| {
                let x = xmin + cast::<P::Scalar, _>(i) * step;
                P::from_xy(x, lagrange_points(x, points))
            })
            .collect()
    }

    fn make_parametric(
        &self,
        scheme: Parametrization,
        step: P::Scalar,
    ) -> Result<Vec<P>, CurveError> {
        let points = self.control_points.as_slice();
        let (t, t_eval) = scheme.subdivide(step, points)?;
        apply_lagrange_subdivision_points(points, &t, &t_eval)
    }

    fn clear_curves(&mut self) {
        self.functional_curve.clear();
        self.uniform_curve.clear();
        self.distance_curve.clear();
        self.root_distance_curve.clear();
        self.chebyshev_curve.clear();
    }
}

impl<P: Point> CurveModel<P> for InterpolationCurve<P> {
    fn control_points(&self) -> &ControlPoints<P> {
        &self.control_points
    }

    fn add(&mut self, p: P) {
        self.control_points.push(p);
        if self.control_points.len() > 1 {
            self.make();
        }
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
        self.clear_curves();
    }
}
