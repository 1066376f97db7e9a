use super::{Circle, CircleIntrOptions, IntersectPoints, IntersectionResult};
use crate::{core::traits::Real, Point};
use log::trace;
use std::cmp::Ordering;

/// Finds the intersects between two circles.
///
/// Classification order: same center (same circle or concentric), too far apart, nested without
/// touching, external tangent, internal tangent, two points. Tangency and separation compare
/// using `options.tolerance(r1 + r2)` so true tangency is not split into two points or none by
/// rounding.
///
/// The algorithm is planar, `z` of the centers is ignored and all result points have `z = 0`.
/// Products are formed before divisions and the squared center distance is used directly so
/// integer inputs with integer answers produce exact results.
///
/// # Examples
///
/// ```
/// # use terminus_geometry::*;
/// let c1 = Circle::from_coords(0.0, 0.0, 4.0).unwrap();
/// let c2 = Circle::from_coords(2.0, 0.0, 2.0).unwrap();
/// let result = circle_circle_intr(&c1, &c2, &CircleIntrOptions::new());
/// assert_eq!(result, IntersectionResult::Points(IntersectPoints::One(point(4.0, 0.0))));
/// ```
pub fn circle_circle_intr<T>(
    circle1: &Circle<T>,
    circle2: &Circle<T>,
    options: &CircleIntrOptions<T>,
) -> IntersectionResult<T>
where
    T: Real,
{
    // Reference algorithm: http://paulbourke.net/geometry/circlesphere/
    use IntersectionResult::*;

    let c1 = Point::new(circle1.center().x, circle1.center().y);
    let c2 = Point::new(circle2.center().x, circle2.center().y);
    let r1 = circle1.radius();
    let r2 = circle2.radius();
    let tol = options.tolerance(r1 + r2);

    let cv = c2 - c1;
    if cv.x == T::zero() && cv.y == T::zero() {
        if r1 == r2 {
            trace!("circle_circle_intr: same circle {:?}", circle1);
            return SameCircle(*circle1);
        }
        trace!("circle_circle_intr: concentric, radii {:?} and {:?}", r1, r2);
        return Empty;
    }

    let d2 = cv.length_squared();
    let d = d2.sqrt();

    let rad_sum = r1 + r2;
    let rad_diff = (r1 - r2).abs();

    // centers too close to define a direction between them, or equal radii with a center offset
    // inside the tangency tolerance (indistinguishable from the same circle)
    if d.fuzzy_eq_zero_eps(options.pos_equal_eps) || (d <= tol && rad_diff <= tol) {
        if r1.fuzzy_eq_eps(r2, tol) {
            trace!("circle_circle_intr: same circle (fuzzy) {:?}", circle1);
            return SameCircle(*circle1);
        }
        trace!("circle_circle_intr: concentric (fuzzy), radii {:?} and {:?}", r1, r2);
        return Empty;
    }

    if d > rad_sum + tol {
        trace!("circle_circle_intr: separate, distance {:?}", d);
        return Empty;
    }

    if d < rad_diff - tol {
        trace!("circle_circle_intr: nested, distance {:?}", d);
        return Empty;
    }

    if (d - rad_sum).abs() <= tol {
        // r1 along the center line toward circle2
        let point = Point::new(c1.x + cv.x * r1 / d, c1.y + cv.y * r1 / d);
        trace!("circle_circle_intr: external tangent at {:?}", point);
        return Points(IntersectPoints::One(point));
    }

    // equal radii never touch internally, offset centers cross at two points
    if rad_diff > tol && (d - rad_diff).abs() <= tol {
        // point of the larger circle closest to the smaller circle's center
        let signed_r1 = if r1 >= r2 { r1 } else { -r1 };
        let point = Point::new(
            c1.x + cv.x * signed_r1 / d,
            c1.y + cv.y * signed_r1 / d,
        );
        trace!("circle_circle_intr: internal tangent at {:?}", point);
        return Points(IntersectPoints::One(point));
    }

    // a = (r1^2 - r2^2 + d^2) / (2d) is the distance from c1 to the chord midpoint
    let rad1_sq = r1 * r1;
    let numer = rad1_sq - r2 * r2 + d2;
    let a_over_d = numer / (T::two() * d2);
    let a_sq = numer * numer / (T::four() * d2);
    let midpoint = Point::new(c1.x + cv.x * a_over_d, c1.y + cv.y * a_over_d);
    let diff = rad1_sq - a_sq;

    if diff <= T::zero() {
        trace!("circle_circle_intr: tangent (zero chord) at {:?}", midpoint);
        return Points(IntersectPoints::One(midpoint));
    }

    let h = diff.sqrt();
    let x_term = cv.y * h / d;
    let y_term = cv.x * h / d;

    let pt1 = Point::new(midpoint.x + x_term, midpoint.y - y_term);
    let pt2 = Point::new(midpoint.x - x_term, midpoint.y + y_term);

    if pt1.fuzzy_eq_eps(pt2, options.pos_equal_eps) {
        trace!("circle_circle_intr: tangent (fuzzy chord) at {:?}", midpoint);
        return Points(IntersectPoints::One(midpoint));
    }

    let (point1, point2) = order_points(pt1, pt2, options.pos_equal_eps);
    trace!(
        "circle_circle_intr: two intersects {:?} and {:?}",
        point1,
        point2
    );
    Points(IntersectPoints::Two(point1, point2))
}

/// Orders by descending x, falling back to descending y when x is fuzzy equal. Independent of
/// which circle was passed first.
#[inline]
fn order_points<T>(pt1: Point<T>, pt2: Point<T>, pos_equal_eps: T) -> (Point<T>, Point<T>)
where
    T: Real,
{
    let pt1_first = match pt1.x.fuzzy_cmp_eps(pt2.x, pos_equal_eps) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => pt1.y >= pt2.y,
    };

    if pt1_first {
        (pt1, pt2)
    } else {
        (pt2, pt1)
    }
}
