use shapegeom::{
    core::{math::Vector2, traits::FuzzyEq},
    rect::Rect,
    units::{convert, convert_point, convert_rect, DistanceUnit},
};

fn main() {
    conversion_table();
    parsing();
    page_layout();
}

fn conversion_table() {
    println!("One inch in every unit:");
    for unit in DistanceUnit::ALL {
        let v = convert(1.0_f64, DistanceUnit::Inches, unit);
        println!("  {v:>14.6} {unit} ({})", unit.name());
    }

    assert!(convert(1.0_f64, DistanceUnit::Inches, DistanceUnit::Millimeters).fuzzy_eq(25.4));
    assert!(convert(1.0_f64, DistanceUnit::Picas, DistanceUnit::Points).fuzzy_eq(12.0));
}

fn parsing() {
    println!("Testing unit parsing...");

    for text in ["mm", "Feet", "nautical mile", "furlong"] {
        match text.parse::<DistanceUnit>() {
            Ok(unit) => println!("'{text}' -> {unit} (code {})", unit.to_u32()),
            Err(e) => println!("{e}"),
        }
    }
}

fn page_layout() {
    println!("Testing layout conversion...");

    // letter page margin box in points, converted for a millimeter based renderer
    let margin_box = Rect::new(72.0, 72.0, 468.0, 648.0);
    let mm = convert_rect(margin_box, DistanceUnit::Points, DistanceUnit::Millimeters);
    assert!(mm.fuzzy_eq(&Rect::new(25.4, 25.4, 165.1, 228.6)));
    println!(
        "margin box in mm: ({:.1}, {:.1}) {:.1} x {:.1}",
        mm.min_x, mm.min_y, mm.width, mm.height
    );

    let anchor = convert_point(
        Vector2::new(306.0, 396.0),
        DistanceUnit::Points,
        DistanceUnit::Inches,
    );
    assert!(anchor.fuzzy_eq(Vector2::new(4.25, 5.5)));
    println!("page center in inches: ({}, {})", anchor.x, anchor.y);
}
