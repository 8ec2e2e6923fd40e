//! Interactive 2D curve modeling.
//!
//! A curve model owns an ordered set of control points and keeps one or more
//! derived curves (plain point sequences, ready to be drawn as line strips)
//! consistent with them after every edit:
//!
//! - [`BezierCurve`] samples the Bézier curve of the control polygon with
//!   de Casteljau's algorithm.
//! - [`InterpolationCurve`] interpolates the control points with Lagrange
//!   polynomials under four parametrizations plus a functional `y = f(x)` fit.
//!
//! Both implement [`CurveModel`], the editing interface a UI drives
//! (add/delete/update/reset and threshold based picking).
//!
//! ```rust
//! use casteljau_lagrange::{BezierCurve, CurveModel, Point2d};
//!
//! let mut curve = BezierCurve::new(100).unwrap();
//! curve.add(Point2d::new(0.0, 0.0));
//! curve.add(Point2d::new(50.0, 100.0));
//! curve.add(Point2d::new(100.0, 0.0));
//! assert_eq!(curve.curve_points().len(), 101);
//! ```

pub mod adapters;
pub mod bezier_curve;
pub mod control_points;
pub mod error;
pub mod interpolation_curve;
pub mod lagrange;
pub mod parametrization;
pub mod point;
pub mod point2;
pub mod point_ops;

use num_traits::{Float, NumCast, ToPrimitive};

pub use bezier_curve::{de_casteljau, BezierCurve};
pub use control_points::{ControlPoints, CurveModel};
pub use error::CurveError;
pub use interpolation_curve::{InterpolationCurve, InterpolationKind, InterpolationParameters};
pub use parametrization::{create_samples, Parametrization};
pub use point::{Point, Scalar};
pub use point2::{Point2, Point2d};

// Compiler-native float used by the default point type
pub type NativeFloat = f64;

// Tolerance used when comparing computed points
pub const EPSILON: NativeFloat = 1e-10;

/// Converts a primitive number into the scalar type of a point.
/// Every primitive float can represent any `usize` (possibly rounded), so the
/// NaN fallback only triggers for exotic `Float` implementations.
#[inline]
pub(crate) fn cast<F: Float, N: ToPrimitive>(n: N) -> F {
    <F as NumCast>::from(n).unwrap_or_else(F::nan)
}
