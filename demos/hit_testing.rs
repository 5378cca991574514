use shapegeom::{
    core::{math::Vector2, Control},
    rect::{Outcode, Rect, RectIndex},
    segment::LineSeg,
};

fn main() {
    // RUST_LOG=debug shows index construction, RUST_LOG=trace shows clip steps
    env_logger::init();

    outcodes();
    line_hits();
    indexed_hits();
}

fn outcodes() {
    println!("Testing outcodes...");

    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    let samples = [
        Vector2::new(5.0, 5.0),
        Vector2::new(-1.0, 5.0),
        Vector2::new(11.0, -1.0),
        Vector2::new(5.0, 11.0),
    ];

    for p in samples {
        let code = r.outcode(p);
        println!("({}, {}) -> {:?} (bits {:#06b})", p.x, p.y, code, code.bits());
    }

    assert_eq!(r.outcode(samples[2]), Outcode::RIGHT | Outcode::TOP);
}

fn line_hits() {
    println!("Testing line against rect...");

    let r = Rect::new(0.0, 0.0, 10.0, 10.0);

    let through = LineSeg::new(Vector2::new(-5.0, 5.0), Vector2::new(15.0, 5.0));
    assert!(through.intersects_rect(&r));
    let clipped = r.clip_line(through.start, through.end);
    if let Some((a, b)) = clipped {
        println!("horizontal line clipped to ({}, {}) - ({}, {})", a.x, a.y, b.x, b.y);
    }

    let corner_miss = LineSeg::new(Vector2::new(-5.0, 0.0), Vector2::new(0.0, -5.0));
    assert!(!corner_miss.intersects_rect(&r));
    println!("line passing outside the corner misses");
}

fn indexed_hits() {
    println!("Testing indexed hit testing...");

    // bars of a small chart plus a legend, one shape not laid out yet
    let shapes = [
        Rect::new(10.0, 40.0, 10.0, 60.0),
        Rect::new(30.0, 20.0, 10.0, 80.0),
        Rect::new(50.0, 70.0, 10.0, 30.0),
        Rect::non_existent(),
        Rect::new(70.0, 0.0, 30.0, 20.0),
    ];

    let index = match RectIndex::new(&shapes) {
        Ok(index) => index,
        Err(e) => {
            log::error!("failed to build index: {e}");
            return;
        }
    };

    println!("indexed {} of {} shapes", index.len(), shapes.len());

    let hits = index.query_point(Vector2::new(35.0, 50.0));
    assert_eq!(hits, vec![1]);
    println!("click at (35, 50) hits {hits:?}");

    let selection = index.query(&Rect::new(0.0, 60.0, 45.0, 10.0));
    assert_eq!(selection, vec![0, 1]);
    println!("selection box hits {selection:?}");

    let crossed = index.query_line(Vector2::new(0.0, 90.0), Vector2::new(100.0, 90.0));
    assert_eq!(crossed, vec![0, 1, 2]);
    println!("horizontal guide at y = 90 crosses {crossed:?}");

    let first_tall = index.visit_query(&Rect::new(0.0, 0.0, 100.0, 100.0), |i| {
        if shapes[i].height > 70.0 {
            Control::Break(i)
        } else {
            Control::Continue
        }
    });
    assert_eq!(first_tall, Some(1));
    println!("first shape taller than 70: {first_tall:?}");
}
