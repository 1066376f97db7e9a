use terminus_geometry::{assert_fuzzy_eq, core::traits::FuzzyEq, point, Circle, Point};

fn main() {
    env_logger::init();

    let a = point(1.0, 1.0);
    let b = Point::new_3d(4.0, 5.0, 0.0);
    println!("distance {a:?} -> {b:?} = {}", a.distance(b));
    assert_eq!(a.distance(b), 5.0);

    let mid = a.midpoint(b);
    println!("midpoint = {mid:?}");
    assert_eq!(mid, point(2.5, 3.0));

    // computed results rarely compare exactly equal
    let computed = point(0.1f64 + 0.2, 0.0);
    assert_ne!(computed, point(0.3, 0.0));
    assert_fuzzy_eq!(computed, point(0.3, 0.0));
    println!("{computed:?} fuzzy equals (0.3, 0.0)");

    let unit: Circle = match Circle::new(Point::origin(), 1.0) {
        Ok(c) => c,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    let bb = unit.bounding_box();
    println!(
        "unit circle bounding box: ({}, {}) to ({}, {})",
        bb.min_x, bb.min_y, bb.max_x, bb.max_y
    );
    let on_boundary = point(0.6, 0.8);
    assert!(unit.point_on_boundary(on_boundary));
    assert!(unit.radius().fuzzy_eq(on_boundary.distance(Point::origin())));
}
