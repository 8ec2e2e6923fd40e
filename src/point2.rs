use core::ops::{Add, Mul, Sub};

use super::point::{Point, Scalar};
use super::NativeFloat;

/// Plain 2D point, the default point type of the crate.
#[derive(Debug, Copy, Clone, Default)]
pub struct Point2<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

/// Double precision point, the type the editing front ends work with
pub type Point2d = Point2<NativeFloat>;

impl<T> Point2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }
}

impl<T: Copy> Point2<T> {
    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }
}

impl<T> PartialEq for Point2<T>
where
    T: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        (self.x == other.x) && (self.y == other.y)
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    // scaling multiplies both coordinates by the same scalar
    T: Mul<T, Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> Point2<T> {
    /// Returns the coordinates as an `(x, y)` tuple, the form plotting backends expect
    pub fn into_tuple(self) -> (T, T) {
        (self.x, self.y)
    }
}

impl<T: Scalar> Point for Point2<T> {
    type Scalar = T;

    fn from_xy(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}
