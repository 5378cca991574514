use shapegeom::{
    core::{math::Vector2, Control},
    rect::{Rect, RectIndex, RectIndexError},
    segment::CurveSeg,
};

/// Bounding rects for a small group of chart shapes: bars along the x axis plus a legend box.
fn chart_shapes() -> Vec<Rect> {
    let mut shapes: Vec<Rect> = (0..5)
        .map(|i| Rect::new(i as f64 * 20.0, 0.0, 10.0, (i + 1) as f64 * 15.0))
        .collect();
    // a hidden shape with no bounds yet
    shapes.push(Rect::non_existent());
    // legend
    shapes.push(Rect::new(70.0, 80.0, 25.0, 15.0));
    shapes
}

#[test]
fn hit_test_bars() {
    let shapes = chart_shapes();
    let index = RectIndex::new(&shapes).unwrap();
    assert_eq!(index.len(), 6);
    assert_eq!(index.query_point(Vector2::new(45.0, 30.0)), vec![2]);
    assert_eq!(index.query_point(Vector2::new(45.0, 50.0)), Vec::<usize>::new());
    assert_eq!(index.query_point(Vector2::new(80.0, 90.0)), vec![6]);
    assert_eq!(index.query_point(Vector2::new(85.0, 70.0)), vec![4]);
    assert_eq!(index.query_point(Vector2::new(85.0, 74.0)), vec![4]);
    // a small box spanning the gap above the tallest bar reaches the legend
    assert_eq!(
        index.query(&Rect::new(84.0, 74.0, 2.0, 7.0)),
        vec![4, 6]
    );
}

#[test]
fn selection_box() {
    let shapes = chart_shapes();
    let index = RectIndex::new(&shapes).unwrap();
    let selected = index.query(&Rect::new(15.0, 40.0, 50.0, 10.0));
    assert_eq!(selected, vec![2, 3]);
    assert!(index.query(&Rect::non_existent()).is_empty());
}

#[test]
fn overall_bounds_skip_hidden_shape() {
    let index = RectIndex::new(&chart_shapes()).unwrap();
    assert_eq!(index.bounds(), Some(Rect::new(0.0, 0.0, 95.0, 95.0)));
}

#[test]
fn line_query() {
    let index = RectIndex::new(&chart_shapes()).unwrap();
    // a horizontal line at y = 50 crosses the two tallest bars
    assert_eq!(
        index.query_line(Vector2::new(-10.0, 50.0), Vector2::new(200.0, 50.0)),
        vec![3, 4]
    );
}

#[test]
fn curve_bounds_in_index() {
    let curves = [
        CurveSeg::quadratic(
            Vector2::new(0.0, 0.0),
            Vector2::new(5.0, 10.0),
            Vector2::new(10.0, 0.0),
        ),
        CurveSeg::cubic(
            Vector2::new(20.0, 0.0),
            Vector2::new(20.0, 5.0),
            Vector2::new(25.0, 5.0),
            Vector2::new(25.0, 0.0),
        ),
    ];
    let rects: Vec<Rect> = curves.iter().map(|c| c.control_bounds()).collect();
    let index = RectIndex::new(&rects).unwrap();
    assert_eq!(index.query_point(Vector2::new(22.0, 2.0)), vec![1]);
}

#[test]
fn first_hit_with_visitor() {
    let shapes = chart_shapes();
    let index = RectIndex::new(&shapes).unwrap();
    let tall = index.visit_query(&Rect::new(-1.0, -1.0, 200.0, 200.0), |i| {
        if shapes[i].height > 70.0 {
            Control::Break(i)
        } else {
            Control::Continue
        }
    });
    assert_eq!(tall, Some(4));
}

#[test]
fn infinite_rect_rejected() {
    let shapes = [Rect::new(0.0, 0.0, f64::INFINITY, 1.0)];
    match RectIndex::new(&shapes) {
        Err(RectIndexError::NonFiniteRect { position }) => assert_eq!(position, 0),
        other => panic!("unexpected result: {other:?}"),
    }
}
