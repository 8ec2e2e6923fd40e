use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::{Float, FloatConst};

/// Scalar type of a point's coordinates.
/// Blanket implemented for every float that also provides its constants (`f32`, `f64`).
pub trait Scalar: Float + FloatConst + Debug + Default {}

impl<T> Scalar for T where T: Float + FloatConst + Debug + Default {}

/// Trait defined over generic 2D points.
/// Many libraries already provide point types and the arithmetic needed for
/// working with curves, so implementing this mostly means wrapping.
/// Keeping the trait minimal makes integration with other libraries easy
/// (see the `adapters` module).
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
    + Default
    + Debug
{
    type Scalar: Scalar;

    /// Builds a point from its two coordinates
    fn from_xy(x: Self::Scalar, y: Self::Scalar) -> Self;

    fn x(&self) -> Self::Scalar;

    fn y(&self) -> Self::Scalar;

    /// Returns the squared L2 norm of the point interpreted as a vector
    fn squared_length(&self) -> Self::Scalar {
        self.x() * self.x() + self.y() * self.y()
    }

    /// Returns the euclidean distance between self and other
    fn distance(&self, other: Self) -> Self::Scalar {
        (*self - other).squared_length().sqrt()
    }
}
