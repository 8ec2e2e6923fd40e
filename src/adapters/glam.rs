//! Glam adapter implementations.
//!
//! Enable this adapter with the `glam` feature to use `glam::DVec2` and
//! `glam::Vec2` as a `Point`, so a host that already keeps its geometry in
//! glam types can drive the curve models directly.
//!
//! # Example
//! ```rust,no_run
//! use glam::DVec2;
//! use casteljau_lagrange::{BezierCurve, CurveModel};
//!
//! let mut curve = BezierCurve::<DVec2>::new(64).unwrap();
//! curve.add(DVec2::new(0.0, 0.0));
//! curve.add(DVec2::new(1.0, 1.0));
//! # let _ = curve.curve_points();
//! ```

use glam::{DVec2, Vec2};

use crate::point::Point;

impl Point for DVec2 {
    type Scalar = f64;

    fn from_xy(x: f64, y: f64) -> Self {
        DVec2::new(x, y)
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Point for Vec2 {
    type Scalar = f32;

    fn from_xy(x: f32, y: f32) -> Self {
        Vec2::new(x, y)
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }
}
