use terminus_geometry::{
    point, Circle, CircleIntrOptions, GeometryError, IntersectPoints, IntersectionResult,
};

fn main() -> Result<(), GeometryError> {
    // RUST_LOG=trace shows which branch classified each pair
    env_logger::init();

    classify_pairs()?;
    custom_tolerance()?;
    invalid_radius();
    Ok(())
}

fn describe(name: &str, c1: &Circle, c2: &Circle) -> IntersectionResult {
    let result = c1.intersection(c2);
    match result {
        IntersectionResult::Empty => println!("{name}: no shared points"),
        IntersectionResult::Points(IntersectPoints::One(p)) => {
            println!("{name}: tangent at ({}, {})", p.x, p.y)
        }
        IntersectionResult::Points(IntersectPoints::Two(p1, p2)) => {
            println!(
                "{name}: crossing at ({}, {}) and ({}, {})",
                p1.x, p1.y, p2.x, p2.y
            )
        }
        IntersectionResult::SameCircle(c) => println!("{name}: same circle {c:?}"),
    }
    result
}

fn classify_pairs() -> Result<(), GeometryError> {
    println!("Classifying circle pairs...");

    let base = Circle::from_coords(0.0, 0.0, 2.0)?;

    let far = Circle::from_coords(6.0, 6.0, 3.0)?;
    assert!(describe("separate", &base, &far).is_empty());

    let inside = Circle::from_coords(0.5, 0.0, 1.0)?;
    assert!(describe("nested", &base, &inside).is_empty());

    let concentric = Circle::from_coords(0.0, 0.0, 5.0)?;
    assert!(describe("concentric", &base, &concentric).is_empty());

    let touching = Circle::from_coords(3.0, 0.0, 1.0)?;
    let result = describe("external tangent", &base, &touching);
    assert_eq!(result.points(), vec![point(2.0, 0.0)]);

    let inner = Circle::from_coords(1.0, 0.0, 1.0)?;
    let result = describe("internal tangent", &base, &inner);
    assert_eq!(result.points(), vec![point(2.0, 0.0)]);

    let crossing = Circle::from_coords(2.0, 2.0, 2.0)?;
    let result = describe("two points", &base, &crossing);
    assert_eq!(result.points(), vec![point(2.0, 0.0), point(0.0, 2.0)]);

    assert!(describe("itself", &base, &base).is_same_circle());

    Ok(())
}

fn custom_tolerance() -> Result<(), GeometryError> {
    println!("Comparing default and loose tangency tolerance...");

    let c1 = Circle::from_coords(0.0, 0.0, 2.0)?;
    let c2 = Circle::from_coords(3.0005, 0.0, 1.0)?;

    let strict = c1.intersection(&c2);
    println!("default options: {strict:?}");
    assert!(strict.is_empty());

    let mut options = CircleIntrOptions::new();
    options.relative_eps = 1e-3;
    let loose = c1.intersection_opt(&c2, &options);
    println!("relative_eps = {}: {loose:?}", options.relative_eps);
    assert_eq!(loose.points().len(), 1);

    Ok(())
}

fn invalid_radius() {
    match Circle::from_coords(0.0, 0.0, -1.0) {
        Ok(c) => panic!("negative radius accepted: {c:?}"),
        Err(err) => {
            log::warn!("rejected circle: {err}");
            println!("negative radius rejected: {err}");
        }
    }
}
