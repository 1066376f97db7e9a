use terminus_geometry::{
    point, Circle, CircleIntrOptions, GeometryError, IntersectPoints::*,
    IntersectionResult::*, Point,
};

macro_rules! assert_case_eq {
    ($left:expr, $right:expr) => {
        match ($left, $right) {
            (Empty, Empty) => {}
            (Points(One(a1)), Points(One(a2))) if a1.fuzzy_eq(a2) => {}
            (Points(Two(a1, b1)), Points(Two(a2, b2))) if a1.fuzzy_eq(a2) && b1.fuzzy_eq(b2) => {}
            (SameCircle(c1), SameCircle(c2)) if c1 == c2 => (),
            _ => panic!(
                "intersect cases do not match: left: {:?}, right: {:?}",
                $left, $right
            ),
        };
    };
}

fn circle_at(x: f64, y: f64, radius: f64) -> Circle {
    terminus_geometry::circle!(x, y, radius).unwrap()
}

#[test]
fn one_point_with_circles_not_nested() {
    let c1 = circle_at(0.0, 0.0, 2.0);
    let c2 = circle_at(3.0, 0.0, 1.0);
    assert_eq!(c1.intersection(&c2), Points(One(point(2.0, 0.0))));

    let c1 = circle_at(0.0, 0.0, 2.0);
    let c2 = circle_at(0.0, 3.0, 1.0);
    assert_eq!(c1.intersection(&c2), Points(One(point(0.0, 2.0))));
}

#[test]
fn one_point_with_nested_circles() {
    let c1 = circle_at(0.0, 0.0, 4.0);
    let c2 = circle_at(2.0, 0.0, 2.0);
    assert_eq!(c1.intersection(&c2), Points(One(point(4.0, 0.0))));

    let c1 = circle_at(0.0, 0.0, 4.0);
    let c2 = circle_at(0.0, 2.0, 2.0);
    assert_eq!(c1.intersection(&c2), Points(One(point(0.0, 4.0))));
}

#[test]
fn one_point_when_smaller_circle_is_self() {
    let small = circle_at(2.0, 0.0, 2.0);
    let large = circle_at(0.0, 0.0, 4.0);
    assert_eq!(small.intersection(&large), Points(One(point(4.0, 0.0))));
}

#[test]
fn two_points_centers_differ_in_x_and_y() {
    let c1 = circle_at(0.0, 0.0, 1.0);
    let c2 = circle_at(1.0, 1.0, 1.0);
    assert_eq!(
        c1.intersection(&c2),
        Points(Two(point(1.0, 0.0), point(0.0, 1.0)))
    );
}

#[test]
fn two_points_each_center_outside_the_other_circle() {
    let c1 = circle_at(-3.0, 0.0, 5.0);
    let c2 = circle_at(3.0, 0.0, 5.0);
    assert_eq!(
        c1.intersection(&c2),
        Points(Two(point(0.0, 4.0), point(0.0, -4.0)))
    );

    let c1 = circle_at(0.0, -3.0, 5.0);
    let c2 = circle_at(0.0, 3.0, 5.0);
    assert_eq!(
        c1.intersection(&c2),
        Points(Two(point(4.0, 0.0), point(-4.0, 0.0)))
    );
}

#[test]
fn two_points_each_center_inside_the_other_circle() {
    let c1 = circle_at(0.0, 0.0, 65f64.sqrt());
    let c2 = circle_at(4.0, 0.0, 5.0);
    assert_case_eq!(
        c1.intersection(&c2),
        Points(Two(point(7.0, 4.0), point(7.0, -4.0)))
    );

    let c1 = circle_at(0.0, 0.0, 65f64.sqrt());
    let c2 = circle_at(0.0, 4.0, 5.0);
    assert_case_eq!(
        c1.intersection(&c2),
        Points(Two(point(4.0, 7.0), point(-4.0, 7.0)))
    );
}

#[test]
fn two_points_chord_through_a_center() {
    let c1 = circle_at(0.0, 0.0, 5.0);
    let c2 = circle_at(-4.0, 0.0, 3.0);
    assert_eq!(
        c1.intersection(&c2),
        Points(Two(point(-4.0, 3.0), point(-4.0, -3.0)))
    );

    let c1 = circle_at(0.0, 0.0, 5.0);
    let c2 = circle_at(0.0, -4.0, 3.0);
    assert_eq!(
        c1.intersection(&c2),
        Points(Two(point(3.0, -4.0), point(-3.0, -4.0)))
    );
}

#[test]
fn two_points_chord_between_centers() {
    let c1 = circle_at(0.0, 0.0, 3.0);
    let c2 = circle_at(2.0, 0.0, 3.0);
    assert_eq!(
        c1.intersection(&c2),
        Points(Two(point(1.0, 8f64.sqrt()), point(1.0, -(8f64.sqrt()))))
    );
}

#[test]
fn two_points_center_on_other_perimeter() {
    let half_sqrt3 = (3.0f64 / 4.0).sqrt();

    let c1 = circle_at(0.0, 0.0, 1.0);
    let c2 = circle_at(1.0, 0.0, 1.0);
    assert_eq!(
        c1.intersection(&c2),
        Points(Two(point(0.5, half_sqrt3), point(0.5, -half_sqrt3)))
    );

    let c1 = circle_at(0.0, 0.0, 1.0);
    let c2 = circle_at(0.0, 1.0, 1.0);
    assert_eq!(
        c1.intersection(&c2),
        Points(Two(point(half_sqrt3, 0.5), point(-half_sqrt3, 0.5)))
    );
}

#[test]
fn no_intersect_circles_not_nested() {
    let c1 = circle_at(0.0, 0.0, 2.0);
    let c2 = circle_at(6.0, 6.0, 3.0);
    assert_eq!(c1.intersection(&c2), Empty);
}

#[test]
fn no_intersect_nested_circles() {
    let c1 = circle_at(0.0, 0.0, 4.0);
    let c2 = circle_at(2.0, 0.0, 1.0);
    assert_eq!(c1.intersection(&c2), Empty);
    assert_eq!(c2.intersection(&c1), Empty);
}

#[test]
fn same_circle() {
    let c = circle_at(45.0, 7.0, 9.0);
    let result = c.intersection(&c);
    assert_eq!(result, SameCircle(c));
    assert!(result.is_same_circle());
    assert!(!result.is_empty());
    assert!(result.points().is_empty());

    let copy = circle_at(45.0, 7.0, 9.0);
    assert_eq!(c.intersection(&copy), SameCircle(c));
}

#[test]
fn concentric_circles() {
    let c1 = circle_at(3.0, 3.0, 6.0);
    let c2 = circle_at(3.0, 3.0, 8.0);
    assert_eq!(c1.intersection(&c2), Empty);
    assert_eq!(c2.intersection(&c1), Empty);
}

#[test]
fn symmetric_in_argument_order() {
    let pairs = [
        (circle_at(0.0, 0.0, 1.0), circle_at(1.0, 1.0, 1.0)),
        (circle_at(-3.0, 0.0, 5.0), circle_at(3.0, 0.0, 5.0)),
        (circle_at(0.0, 0.0, 65f64.sqrt()), circle_at(4.0, 0.0, 5.0)),
        (circle_at(0.0, 0.0, 5.0), circle_at(0.0, -4.0, 3.0)),
        (circle_at(0.0, 1.0, 3.0), circle_at(5.0, 5.0, 4.0)),
        (circle_at(0.0, 0.0, 2.0), circle_at(3.0, 0.0, 1.0)),
        (circle_at(0.0, 0.0, 4.0), circle_at(0.0, 2.0, 2.0)),
        (circle_at(0.0, 0.0, 2.0), circle_at(6.0, 6.0, 3.0)),
    ];

    for (a, b) in pairs {
        assert_case_eq!(a.intersection(&b), b.intersection(&a));
    }
}

#[test]
fn intersection_points_lie_on_both_circles() {
    let c1 = circle_at(-2.5, 1.25, 3.5);
    let c2 = circle_at(1.75, -0.5, 2.25);
    let points = c1.intersection(&c2).points();
    assert_eq!(points.len(), 2);
    for p in points {
        assert!(c1.point_on_boundary(p), "{p:?} not on {c1:?}");
        assert!(c2.point_on_boundary(p), "{p:?} not on {c2:?}");
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let c1 = circle_at(0.0, 0.0, 65f64.sqrt());
    let c2 = circle_at(4.0, 0.0, 5.0);
    let first = c1.intersection(&c2);
    for _ in 0..10 {
        assert_eq!(c1.intersection(&c2), first);
    }
}

#[test]
fn output_points_are_planar() {
    let c1 = Circle::new(Point::new_3d(0.0, 0.0, 3.0), 1.0).unwrap();
    let c2 = Circle::new(Point::new_3d(1.0, 1.0, -3.0), 1.0).unwrap();
    for p in c1.intersection(&c2).points() {
        assert_eq!(p.z, 0.0);
    }
}

#[test]
fn custom_options() {
    let c1 = circle_at(0.0, 0.0, 2.0);
    let c2 = circle_at(3.0 + 1e-4, 0.0, 1.0);
    assert_eq!(c1.intersection(&c2), Empty);

    let options = CircleIntrOptions {
        relative_eps: 1e-3,
        ..Default::default()
    };
    assert_case_eq!(
        c1.intersection_opt(&c2, &options),
        Points(One(point(2.0, 0.0)))
    );
}

#[test]
fn equal_radii_near_concentric_boundary() {
    // tolerance for r = 5 is 1e-8
    let c1 = circle_at(2.0, -1.0, 5.0);
    for offset in [1e-12, 1e-10, 5e-9] {
        let c2 = circle_at(2.0 + offset, -1.0, 5.0);
        assert_eq!(c1.intersection(&c2), SameCircle(c1));
        let c3 = circle_at(2.0, -1.0 + offset, 5.0);
        assert_eq!(c1.intersection(&c3), SameCircle(c1));
    }

    for offset in [1e-7, 1e-4, 0.1] {
        let c2 = circle_at(2.0 + offset, -1.0, 5.0);
        let result = c1.intersection(&c2);
        assert!(matches!(result, Points(Two(..))), "offset {offset}: {result:?}");
        for p in result.points() {
            assert!(c1.point_on_boundary_eps(p, 1e-6), "{p:?} not on {c1:?}");
            assert!(c2.point_on_boundary_eps(p, 1e-6), "{p:?} not on {c2:?}");
        }
    }
}

#[test]
fn sub_unit_scale_needs_smaller_epsilons() {
    let c1 = circle_at(0.0, 0.0, 1e-10);
    let c2 = circle_at(1e-10, 0.0, 1e-10);
    assert_eq!(c1.intersection(&c2), SameCircle(c1));

    let options = CircleIntrOptions {
        relative_eps: 1e-20,
        pos_equal_eps: 1e-20,
    };
    let result = c1.intersection_opt(&c2, &options);
    assert!(matches!(result, Points(Two(..))), "{result:?}");
    let half_sqrt3 = 0.75f64.sqrt() * 1e-10;
    assert_points_eq_eps(
        result.points(),
        vec![point(5e-11, half_sqrt3), point(5e-11, -half_sqrt3)],
        1e-20,
    );
}

fn assert_points_eq_eps(actual: Vec<Point>, expected: Vec<Point>, eps: f64) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(&expected) {
        assert!(a.fuzzy_eq_eps(*e, eps), "{actual:?} vs {expected:?}");
    }
}

#[test]
fn negative_radius_rejected() {
    assert_eq!(
        Circle::new(point(0.0, 0.0), -1.0),
        Err(GeometryError::InvalidRadius { radius: -1.0 })
    );
    assert!(terminus_geometry::circle!(0.0, 0.0, -1e-300).is_err());
}
