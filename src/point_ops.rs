//! Free functions over point sequences: interpolation between two points,
//! threshold based picking and index based editing.

use num_traits::One;

use crate::error::CurveError;
use crate::point::Point;

/// Linear interpolation between `p1` and `p2`: `(1 - t) * p1 + t * p2`.
/// `t` is not restricted to `[0, 1]`, values outside extrapolate.
#[inline]
pub fn lerp<P: Point>(p1: P, p2: P, t: P::Scalar) -> P {
    p1 * (P::Scalar::one() - t) + p2 * t
}

/// Returns the index of the point closest to `p` among those within `threshold`.
/// On equal distances the first point in sequence order wins.
pub fn closest_point_index<P: Point>(points: &[P], p: P, threshold: P::Scalar) -> Option<usize> {
    let mut closest: Option<(usize, P::Scalar)> = None;
    for (i, candidate) in points.iter().enumerate() {
        let dist = candidate.distance(p);
        if dist > threshold {
            continue;
        }
        match closest {
            Some((_, best)) if dist >= best => {}
            _ => closest = Some((i, dist)),
        }
    }
    closest.map(|(i, _)| i)
}

/// Returns the point closest to `p` within `threshold`, see [`closest_point_index`].
pub fn closest_point<P: Point>(points: &[P], p: P, threshold: P::Scalar) -> Option<P> {
    closest_point_index(points, p, threshold).map(|i| points[i])
}

/// Removes the point at `idx`, keeping the order of the remaining points.
pub fn delete_point_at_index<P: Point>(points: &mut Vec<P>, idx: usize) -> Result<(), CurveError> {
    if idx >= points.len() {
        return Err(CurveError::IndexOutOfBounds {
            index: idx,
            len: points.len(),
        });
    }
    points.remove(idx);
    Ok(())
}

/// Overwrites the point at `idx` with `p_new`.
pub fn update_point_at_index<P: Point>(
    points: &mut [P],
    idx: usize,
    p_new: P,
) -> Result<(), CurveError> {
    match points.get_mut(idx) {
        Some(p) => {
            *p = p_new;
            Ok(())
        }
        None => Err(CurveError::IndexOutOfBounds {
            index: idx,
            len: points.len(),
        }),
    }
}

/// Deletes the point closest to `p` within `threshold`.
/// Returns false if no point qualifies.
pub fn delete_point<P: Point>(points: &mut Vec<P>, p: P, threshold: P::Scalar) -> bool {
    match closest_point_index(points, p, threshold) {
        Some(idx) => {
            points.remove(idx);
            true
        }
        None => false,
    }
}

/// Moves the point closest to `p_old` within `threshold` to `p_new`.
/// Returns false if no point qualifies.
pub fn update_point<P: Point>(points: &mut [P], p_old: P, p_new: P, threshold: P::Scalar) -> bool {
    match closest_point_index(points, p_old, threshold) {
        Some(idx) => {
            points[idx] = p_new;
            true
        }
        None => false,
    }
}

/// Splits a point sequence into its x and y coordinate sequences.
pub fn split_coordinates<P: Point>(points: &[P]) -> (Vec<P::Scalar>, Vec<P::Scalar>) {
    points.iter().map(|p| (p.x(), p.y())).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point2d, EPSILON};

    fn diagonal() -> Vec<Point2d> {
        vec![
            Point2d::new(-2.0, -2.0),
            Point2d::new(-1.0, -1.0),
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(2.0, 2.0),
        ]
    }

    #[test]
    fn lerp_identity() {
        let a = Point2d::new(-1.0, -1.0);
        let b = Point2d::new(1.0, 1.0);
        let expected = [
            (0.0, Point2d::new(-1.0, -1.0)),
            (0.25, Point2d::new(-0.5, -0.5)),
            (0.5, Point2d::new(0.0, 0.0)),
            (0.75, Point2d::new(0.5, 0.5)),
            (1.0, Point2d::new(1.0, 1.0)),
        ];
        for (t, p) in expected {
            assert!(lerp(a, b, t).distance(p) < EPSILON);
        }
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(1.0, 2.0);
        assert!(lerp(a, b, 2.0).distance(Point2d::new(2.0, 4.0)) < EPSILON);
        assert!(lerp(a, b, -1.0).distance(Point2d::new(-1.0, -2.0)) < EPSILON);
    }

    #[test]
    fn closest_point_identity() {
        let points = diagonal();
        for (idx, p) in points.iter().enumerate() {
            for threshold in [0.0, 0.01, 0.1, 1.0, 10.0, 100.0] {
                assert_eq!(closest_point_index(&points, *p, threshold), Some(idx));
                assert_eq!(closest_point(&points, *p, threshold), Some(*p));
            }
        }
    }

    #[test]
    fn closest_point_threshold() {
        let points = diagonal();
        let query = Point2d::new(0.5, 0.5);
        assert_eq!(closest_point_index(&points, query, 0.1), None);
        // (0, 0) and (1, 1) are equally far away, the first one wins
        assert_eq!(closest_point_index(&points, query, 1.0), Some(2));

        let midpoints = [
            Point2d::new(-2.5, -2.5),
            Point2d::new(-1.5, -1.5),
            Point2d::new(0.5, 0.5),
            Point2d::new(1.5, 1.5),
            Point2d::new(2.5, 2.5),
        ];
        let expected = [0, 0, 2, 3, 4];
        for (p, idx) in midpoints.iter().zip(expected) {
            for threshold in [0.01, 0.1, 1.0, 10.0, 100.0] {
                let res = closest_point_index(&points, *p, threshold);
                if threshold > 0.5 {
                    assert_eq!(res, Some(idx));
                    assert!(points[idx].distance(*p) < threshold);
                } else {
                    assert_eq!(res, None);
                }
            }
        }
    }

    #[test]
    fn closest_point_empty() {
        let points: Vec<Point2d> = Vec::new();
        assert_eq!(closest_point_index(&points, Point2d::new(0.0, 0.0), 1e9), None);
        assert_eq!(closest_point(&points, Point2d::new(0.0, 0.0), 1e9), None);
    }

    #[test]
    fn update_at_index() {
        let end = Point2d::new(-1.5, 6.5);
        let mut points = diagonal();
        for idx in 0..points.len() {
            for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
                let p_new = lerp(points[idx], end, t);
                update_point_at_index(&mut points, idx, p_new).unwrap();
                assert!(points[idx].distance(p_new) < EPSILON);
            }
        }
        for idx in [10, 100, 22, 43, 46] {
            assert_eq!(
                update_point_at_index(&mut points, idx, Point2d::default()),
                Err(CurveError::IndexOutOfBounds { index: idx, len: 5 })
            );
        }
    }

    #[test]
    fn delete_at_index() {
        let mut points = diagonal();
        for idx in [10, 100, 22, 43, 46] {
            assert_eq!(
                delete_point_at_index(&mut points, idx),
                Err(CurveError::IndexOutOfBounds { index: idx, len: 5 })
            );
        }
        assert_eq!(points, diagonal());
        for idx in [2, 3, 0] {
            let removed = points[idx];
            let len = points.len();
            delete_point_at_index(&mut points, idx).unwrap();
            assert_eq!(points.len(), len - 1);
            assert!(points[idx.min(points.len() - 1)].distance(removed) > 1.0);
        }
        assert_eq!(points, vec![Point2d::new(-1.0, -1.0), Point2d::new(1.0, 1.0)]);
        for idx in [10, 100, 22, 43, 46] {
            assert!(matches!(
                delete_point_at_index(&mut points, idx),
                Err(CurveError::IndexOutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn delete_and_update_by_value() {
        let mut points = diagonal();
        assert!(!delete_point(&mut points, Point2d::new(0.5, 0.5), 0.1));
        assert_eq!(points.len(), 5);
        assert!(delete_point(&mut points, Point2d::new(0.1, 0.0), 0.5));
        assert_eq!(points.len(), 4);
        assert!(!points.contains(&Point2d::new(0.0, 0.0)));

        assert!(!update_point(&mut points, Point2d::new(10.0, 10.0), Point2d::default(), 1.0));
        assert!(update_point(&mut points, Point2d::new(1.1, 1.0), Point2d::new(7.0, 7.0), 0.5));
        assert_eq!(points[2], Point2d::new(7.0, 7.0));
    }

    #[test]
    fn coincident_points_are_kept() {
        let mut points = vec![Point2d::new(1.0, 1.0), Point2d::new(1.0, 1.0)];
        assert_eq!(closest_point_index(&points, Point2d::new(1.0, 1.0), 0.0), Some(0));
        assert!(delete_point(&mut points, Point2d::new(1.0, 1.0), 0.0));
        assert_eq!(points, vec![Point2d::new(1.0, 1.0)]);
    }

    #[test]
    fn split_into_coordinates() {
        let (xs, ys) = split_coordinates(&diagonal()[..2]);
        assert_eq!(xs, vec![-2.0, -1.0]);
        assert_eq!(ys, vec![-2.0, -1.0]);
    }
}
