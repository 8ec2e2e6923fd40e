//! Drives the curve models the way an interactive front end does:
//! clicks add points, drags move the picked point, right clicks delete it.

use approx::assert_abs_diff_eq;
use casteljau_lagrange::{
    BezierCurve, ControlPoints, CurveError, CurveModel, InterpolationCurve, InterpolationKind,
    InterpolationParameters, Point2d,
};

const CLICK_THRESHOLD: f64 = 50.0;

fn clicks() -> Vec<Point2d> {
    vec![
        Point2d::new(100.0, 100.0),
        Point2d::new(250.0, 400.0),
        Point2d::new(400.0, 150.0),
        Point2d::new(600.0, 450.0),
    ]
}

/// Replays the same edit session on any curve model
fn edit_session<M: CurveModel<Point2d>>(model: &mut M) {
    for p in clicks() {
        model.add(p);
    }
    // drag the second point, grabbed a bit off its center
    let grabbed = model.index_closest_point(Point2d::new(260.0, 390.0), CLICK_THRESHOLD);
    assert_eq!(grabbed, Some(1));
    model
        .update_control_point_at_index(1, Point2d::new(300.0, 500.0), CLICK_THRESHOLD)
        .unwrap();
    // a click in empty space neither deletes nor moves anything
    assert!(!model.delete_control_point(Point2d::new(900.0, 900.0), CLICK_THRESHOLD));
    assert!(!model.update_control_point(
        Point2d::new(900.0, 900.0),
        Point2d::new(0.0, 0.0),
        CLICK_THRESHOLD
    ));
    assert_eq!(model.len(), 4);
    assert_eq!(model.points()[1], Point2d::new(300.0, 500.0));
}

#[test]
fn models_share_editing_semantics() {
    let mut plain = ControlPoints::new();
    let mut bezier = BezierCurve::new(100).unwrap();
    let mut interpolation = InterpolationCurve::new(
        InterpolationParameters::new(0.0, 800.0, 1.0).unwrap(),
    );
    edit_session(&mut plain);
    edit_session(&mut bezier);
    edit_session(&mut interpolation);
    assert_eq!(plain.points(), bezier.points());
    assert_eq!(plain.points(), interpolation.points());
}

#[test]
fn bezier_follows_edits() {
    let mut bezier = BezierCurve::new(100).unwrap();
    edit_session(&mut bezier);
    let expected = BezierCurve::from_points(100, bezier.points().to_vec()).unwrap();
    for (a, b) in bezier.curve_points().iter().zip(expected.curve_points()) {
        assert_abs_diff_eq!(a.x(), b.x(), epsilon = 1e-9);
        assert_abs_diff_eq!(a.y(), b.y(), epsilon = 1e-9);
    }
    let first = bezier.curve_points()[0];
    let last = bezier.curve_points()[100];
    assert_eq!(first, Point2d::new(100.0, 100.0));
    assert_eq!(last, Point2d::new(600.0, 450.0));
}

#[test]
fn interpolation_follows_edits() {
    let mut curve = InterpolationCurve::new(InterpolationParameters::new(0.0, 800.0, 1.0).unwrap());
    edit_session(&mut curve);
    assert_eq!(curve.functional_curve().len(), 801);
    for kind in InterpolationKind::ALL {
        assert!(!curve.curve(kind).is_empty(), "{:?} curve is empty", kind);
    }

    // remove points one by one: with a single point left nothing is drawn
    for p in curve.points().to_vec().into_iter().skip(1) {
        assert!(curve.delete_control_point(p, 1.0));
    }
    assert_eq!(curve.len(), 1);
    for kind in InterpolationKind::ALL {
        assert!(curve.curve(kind).is_empty());
    }

    curve.reset();
    assert!(curve.is_empty());
    assert_eq!(curve.closest_point(Point2d::new(100.0, 100.0), CLICK_THRESHOLD), None);
}

#[test]
fn out_of_range_index_is_reported() {
    let mut bezier = BezierCurve::new(10).unwrap();
    bezier.add(Point2d::new(0.0, 0.0));
    let err = bezier
        .update_control_point_at_index(3, Point2d::new(1.0, 1.0), CLICK_THRESHOLD)
        .unwrap_err();
    assert_eq!(err, CurveError::IndexOutOfBounds { index: 3, len: 1 });
    assert_eq!(err.to_string(), "index 3 of the point is out of bounds (len 1)");
    // the failed edit left the curve untouched
    assert_eq!(bezier.curve_points(), &[Point2d::new(0.0, 0.0); 11][..]);
}
