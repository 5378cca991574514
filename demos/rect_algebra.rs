use shapegeom::{
    core::math::Vector2,
    rect::{bounds_of_points, bounds_union, Rect},
};

fn main() {
    intersection_and_union();
    growing_bounds();
}

fn print_rect(label: &str, r: &Rect) {
    println!(
        "{label}: ({}, {}) {} x {}",
        r.min_x, r.min_y, r.width, r.height
    );
}

fn intersection_and_union() {
    println!("Testing rect intersection and union...");

    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, -5.0, 10.0, 10.0);

    let overlap = a.intersection(&b).expect("rects overlap");
    assert_eq!(overlap, Rect::new(5.0, 0.0, 5.0, 5.0));
    print_rect("a & b", &overlap);

    let far = Rect::new(20.0, 20.0, 1.0, 1.0);
    assert_eq!(a.intersection(&far), None);
    println!("a & far: none");

    let both = a.union(&b);
    assert_eq!(both, Rect::new(0.0, -5.0, 15.0, 15.0));
    print_rect("a | b", &both);

    // the non-existent rect leaves the other side unchanged
    assert_eq!(Rect::non_existent().union(&a), a);
    assert_eq!(a.union(&Rect::non_existent()), a);
    println!("non-existent rect is the union identity");
}

fn growing_bounds() {
    println!("Testing bounds accumulation...");

    let points = [
        Vector2::new(3.0, 4.0),
        Vector2::new(-1.0, 6.0),
        Vector2::new(2.0, -2.0),
    ];

    let mut bounds = Rect::non_existent();
    for p in points {
        bounds = bounds.update_bounds(p);
    }
    assert_eq!(bounds, Rect::new(-1.0, -2.0, 4.0, 8.0));
    print_rect("grown from sentinel", &bounds);

    let collected = bounds_of_points(points);
    assert_eq!(collected, Some(bounds));
    assert_eq!(bounds_of_points(std::iter::empty::<Vector2>()), None);

    let merged = bounds_union(collected, None);
    assert_eq!(merged, Some(bounds));
    if let Some(merged) = merged {
        print_rect("merged with nothing", &merged);
    }
}
