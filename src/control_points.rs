use core::slice;

use log::trace;

use crate::error::CurveError;
use crate::point::Point;
use crate::point_ops;

/// Editing interface shared by every curve model.
///
/// Implementors own a [`ControlPoints`] sequence, forward each mutation to it
/// and then bring their derived curves up to date before returning, so a
/// caller always observes a consistent model.
pub trait CurveModel<P: Point> {
    /// The control points the model is built from
    fn control_points(&self) -> &ControlPoints<P>;

    /// Appends a control point
    fn add(&mut self, p: P);

    /// Removes the control point closest to `p` within `threshold`.
    /// Returns false (and leaves the model untouched) if there is none.
    fn delete_control_point(&mut self, p: P, threshold: P::Scalar) -> bool;

    /// Moves the control point closest to `p_old` within `threshold` to `p_new`.
    /// Returns false (and leaves the model untouched) if there is none.
    fn update_control_point(&mut self, p_old: P, p_new: P, threshold: P::Scalar) -> bool;

    /// Moves the control point at `idx` to `p_new`.
    /// The index is authoritative, `threshold` is not used for the lookup.
    fn update_control_point_at_index(
        &mut self,
        idx: usize,
        p_new: P,
        threshold: P::Scalar,
    ) -> Result<(), CurveError>;

    /// Removes all control points and everything derived from them
    fn reset(&mut self);

    fn closest_point(&self, p: P, threshold: P::Scalar) -> Option<P> {
        self.control_points().closest_point(p, threshold)
    }

    fn index_closest_point(&self, p: P, threshold: P::Scalar) -> Option<usize> {
        self.control_points().index_closest_point(p, threshold)
    }

    fn points(&self) -> &[P] {
        self.control_points().as_slice()
    }

    fn len(&self) -> usize {
        self.control_points().len()
    }

    fn is_empty(&self) -> bool {
        self.control_points().is_empty()
    }
}

/// Ordered sequence of control points.
/// Insertion order defines the curve topology; coincident points are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPoints<P: Point> {
    points: Vec<P>,
}

impl<P: Point> ControlPoints<P> {
    pub fn new() -> Self {
        ControlPoints { points: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[P] {
        &self.points
    }

    pub fn iter(&self) -> slice::Iter<'_, P> {
        self.points.iter()
    }

    /// Replaces the whole sequence
    pub fn set_points(&mut self, points: Vec<P>) {
        self.points = points;
    }

    pub fn push(&mut self, p: P) {
        trace!("add control point {:?} (#{})", p, self.points.len());
        self.points.push(p);
    }

    pub fn remove_closest(&mut self, p: P, threshold: P::Scalar) -> bool {
        let removed = point_ops::delete_point(&mut self.points, p, threshold);
        trace!("delete control point near {:?}: {}", p, removed);
        removed
    }

    pub fn move_closest(&mut self, p_old: P, p_new: P, threshold: P::Scalar) -> bool {
        let moved = point_ops::update_point(&mut self.points, p_old, p_new, threshold);
        trace!("move control point near {:?} to {:?}: {}", p_old, p_new, moved);
        moved
    }

    pub fn set_at(&mut self, idx: usize, p_new: P) -> Result<(), CurveError> {
        point_ops::update_point_at_index(&mut self.points, idx, p_new)?;
        trace!("move control point #{} to {:?}", idx, p_new);
        Ok(())
    }

    pub fn remove_at(&mut self, idx: usize) -> Result<(), CurveError> {
        point_ops::delete_point_at_index(&mut self.points, idx)?;
        trace!("delete control point #{}", idx);
        Ok(())
    }

    pub fn clear(&mut self) {
        trace!("clear {} control points", self.points.len());
        self.points.clear();
    }

    pub fn closest_point(&self, p: P, threshold: P::Scalar) -> Option<P> {
        point_ops::closest_point(&self.points, p, threshold)
    }

    pub fn index_closest_point(&self, p: P, threshold: P::Scalar) -> Option<usize> {
        point_ops::closest_point_index(&self.points, p, threshold)
    }
}

impl<P: Point> From<Vec<P>> for ControlPoints<P> {
    fn from(points: Vec<P>) -> Self {
        ControlPoints { points }
    }
}

impl<'a, P: Point> IntoIterator for &'a ControlPoints<P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> slice::Iter<'a, P> {
        self.points.iter()
    }
}

/// The bare sequence is a curve model without derived curves: nothing is recomputed.
impl<P: Point> CurveModel<P> for ControlPoints<P> {
    fn control_points(&self) -> &ControlPoints<P> {
        self
    }

    fn add(&mut self, p: P) {
        self.push(p);
    }

    fn delete_control_point(&mut self, p: P, threshold: P::Scalar) -> bool {
        self.remove_closest(p, threshold)
    }

    fn update_control_point(&mut self, p_old: P, p_new: P, threshold: P::Scalar) -> bool {
        self.move_closest(p_old, p_new, threshold)
    }

    fn update_control_point_at_index(
        &mut self,
        idx: usize,
        p_new: P,
        _threshold: P::Scalar,
    ) -> Result<(), CurveError> {
        self.set_at(idx, p_new)
    }

    fn reset(&mut self) {
        self.clear();
    }
}
