use shapegeom::{
    core::{math::Vector2, traits::FuzzyEq},
    rect::Rect,
    units::{conversion_factor, convert, convert_point, convert_rect, DistanceUnit},
};

#[test]
fn meters_to_meters_is_exact() {
    assert_eq!(convert(1.0, DistanceUnit::Meters, DistanceUnit::Meters), 1.0);
    // 0.1 is not exact in binary, identity must not round trip through a factor
    assert_eq!(convert(0.1, DistanceUnit::Feet, DistanceUnit::Feet), 0.1);
}

#[test]
fn round_trip_relative_tolerance() {
    for a in DistanceUnit::ALL {
        for b in DistanceUnit::ALL {
            for v in [1.0_f64, -42.0, 0.003, 6.02e23, -1e-12] {
                let back = convert(convert(v, a, b), b, a);
                assert!(((back - v) / v).abs() <= 1e-9, "{v} via {a} and {b} got {back}");
            }
        }
    }
}

#[test]
fn factor_matches_convert() {
    for a in DistanceUnit::ALL {
        for b in DistanceUnit::ALL {
            let f: f64 = conversion_factor(a, b);
            assert_eq!(convert(2.0_f64, a, b), 2.0 * f);
            assert_eq!(convert(-0.3_f64, a, b), -0.3 * f);
        }
    }
}

#[test]
fn print_units_on_a_page() {
    // a letter page in points converted to inches
    let page = Rect::new(0.0, 0.0, 612.0, 792.0);
    let inches = convert_rect(page, DistanceUnit::Points, DistanceUnit::Inches);
    assert!(inches.fuzzy_eq(&Rect::new(0.0, 0.0, 8.5, 11.0)));

    let margin = convert_point(
        Vector2::new(1.0, 0.5),
        DistanceUnit::Inches,
        DistanceUnit::Points,
    );
    assert!(margin.fuzzy_eq(Vector2::new(72.0, 36.0)));
}
