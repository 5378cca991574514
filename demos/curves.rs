use shapegeom::{
    core::{
        math::{cubic_bezier_value, quadratic_bezier_value, Vector2},
        traits::FuzzyEq,
    },
    segment::{CurveSeg, FlattenOptions},
};

fn main() {
    scalar_evaluation();
    curve_segments();
}

fn scalar_evaluation() {
    println!("Testing scalar Bezier evaluation...");

    // end points are interpolated exactly
    assert!(cubic_bezier_value(0.0_f64, 1.0, 2.0, 3.0, 4.0).fuzzy_eq(1.0));
    assert!(cubic_bezier_value(1.0_f64, 1.0, 2.0, 3.0, 4.0).fuzzy_eq(4.0));

    for i in 0..=4 {
        let t = i as f64 / 4.0;
        let q = quadratic_bezier_value(t, 0.0, 10.0, 0.0);
        let c = cubic_bezier_value(t, 0.0, 0.0, 10.0, 10.0);
        println!("t = {t:.2}: quadratic = {q:.4}, cubic = {c:.4}");
    }
}

fn curve_segments() {
    println!("Testing curve segments...");

    let curve: CurveSeg = CurveSeg::cubic(
        Vector2::new(0.0, 0.0),
        Vector2::new(0.0, 10.0),
        Vector2::new(10.0, 10.0),
        Vector2::new(10.0, 0.0),
    );

    let mid = curve.point_at(0.5);
    assert!(mid.fuzzy_eq(Vector2::new(5.0, 7.5)));
    println!("midpoint = ({}, {})", mid.x, mid.y);

    let (left, right) = curve.split_at(0.5);
    assert!(left.end().fuzzy_eq(mid));
    assert!(right.start().fuzzy_eq(mid));
    println!("split at t = 0.5 joins at the midpoint");

    let points = curve.flatten(&FlattenOptions { segment_count: 8 });
    assert_eq!(points.len(), 9);
    println!("flattened into {} points", points.len());

    let bounds = curve.control_bounds();
    println!(
        "control bounds: min = ({}, {}), size = {} x {}",
        bounds.min_x, bounds.min_y, bounds.width, bounds.height
    );
}
