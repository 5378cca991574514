use shapegeom::{
    core::{
        math::{
            distance, point_line_dist, point_seg_dist, relative_ccw, segs_intersect, Vector2,
        },
        traits::FuzzyEq,
    },
    segment::LineSeg,
};

fn main() {
    point_distances();
    segment_relations();
}

fn point_distances() {
    println!("Testing point distance calculations...");

    let p0: Vector2 = Vector2::new(0.0, 0.0);
    let p1 = Vector2::new(10.0, 0.0);

    let d = distance(p0, Vector2::new(3.0, 4.0));
    assert!(d.fuzzy_eq(5.0), "3-4-5 triangle hypotenuse should be 5");
    println!("distance((0, 0), (3, 4)) = {d}");

    // past the end of the segment the infinite line and the segment disagree
    let beyond = Vector2::new(13.0, 4.0);
    let line_d = point_line_dist(p0, p1, beyond);
    let seg_d = point_seg_dist(p0, p1, beyond);
    assert!(line_d.fuzzy_eq(4.0));
    assert!(seg_d.fuzzy_eq(5.0));
    println!("point (13, 4): line distance = {line_d}, segment distance = {seg_d}");

    let seg = LineSeg::new(p0, p1);
    let closest = seg.closest_point(Vector2::new(4.0, -2.0));
    assert!(closest.fuzzy_eq(Vector2::new(4.0, 0.0)));
    println!("closest point on segment to (4, -2) = ({}, {})", closest.x, closest.y);
}

fn segment_relations() {
    println!("Testing segment orientation and crossing...");

    let p0: Vector2 = Vector2::new(0.0, 0.0);
    let p1 = Vector2::new(10.0, 0.0);

    assert_eq!(relative_ccw(p0, p1, Vector2::new(5.0, 5.0)), -1);
    assert_eq!(relative_ccw(p0, p1, Vector2::new(5.0, -5.0)), 1);
    assert_eq!(relative_ccw(p0, p1, Vector2::new(5.0, 0.0)), 0);
    println!("relative_ccw sides: above = -1, below = 1, on = 0");

    let crossing = segs_intersect(p0, p1, Vector2::new(5.0, -5.0), Vector2::new(5.0, 5.0));
    let apart = segs_intersect(p0, p1, Vector2::new(20.0, -5.0), Vector2::new(20.0, 5.0));
    assert!(crossing);
    assert!(!apart);
    println!("vertical segment at x = 5 crosses, at x = 20 does not");
}
