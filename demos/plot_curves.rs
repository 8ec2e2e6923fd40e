//! Renders the curves of a small control polygon to `interpolation_curves.png`.
//! Run with `RUST_LOG=debug cargo run --example plot_curves` to see the rebuilds.

extern crate plotters;
use plotters::prelude::*;

use casteljau_lagrange::{
    BezierCurve, CurveModel, InterpolationCurve, InterpolationKind, InterpolationParameters,
    Point2d,
};

fn to_tuples(points: &[Point2d]) -> Vec<(f64, f64)> {
    points.iter().map(|p| p.into_tuple()).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let control = [
        Point2d::new(0.0, 1.0),
        Point2d::new(2.0, 5.0),
        Point2d::new(4.0, 17.0),
        Point2d::new(6.0, 7.0),
        Point2d::new(8.0, 9.0),
    ];

    let mut bezier = BezierCurve::new(200)?;
    let mut interpolation = InterpolationCurve::new(InterpolationParameters::new(0.0, 8.0, 0.05)?);
    for p in control {
        bezier.add(p);
        interpolation.add(p);
    }
    log::info!(
        "{} control points, {} Bezier samples",
        bezier.len(),
        bezier.curve_points().len()
    );

    let root = BitMapBackend::new("interpolation_curves.png", (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Bezier and Lagrange curves", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-1.0..9.0, -15.0..30.0)?;

    chart.configure_mesh().draw()?;

    // draw the control polygon
    chart
        .draw_series(LineSeries::new(to_tuples(bezier.points()), &BLUE))?
        .label("Control Polygon")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(to_tuples(bezier.curve_points()), &RED))?
        .label("Bezier")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    let colors = [GREEN, MAGENTA, CYAN, BLACK, YELLOW];
    for (kind, color) in InterpolationKind::ALL.into_iter().zip(colors) {
        chart
            .draw_series(LineSeries::new(
                to_tuples(interpolation.curve(kind)),
                color.stroke_width(1),
            ))?
            .label(format!("{:?}", kind))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(1)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
