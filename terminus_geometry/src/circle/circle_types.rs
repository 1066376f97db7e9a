use super::Circle;
use crate::{core::traits::Real, Point};
#[cfg(feature = "serde")]
use crate::GeometryError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One tangent point or two crossing points of a circle/circle intersect.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(deserialize = "T: Real + Deserialize<'de>"))
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IntersectPoints<T = f64> {
    /// Circles touch at a single tangent point.
    One(Point<T>),
    /// Circles cross at two points, ordered by descending x then descending y.
    Two(Point<T>, Point<T>),
}

impl<T> IntersectPoints<T>
where
    T: Real,
{
    /// Number of points held (1 or 2).
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            IntersectPoints::One(_) => 1,
            IntersectPoints::Two(..) => 2,
        }
    }

    /// The first point (the only point for [IntersectPoints::One]).
    #[inline]
    pub fn first(&self) -> Point<T> {
        match *self {
            IntersectPoints::One(p) | IntersectPoints::Two(p, _) => p,
        }
    }

    pub fn to_vec(&self) -> Vec<Point<T>> {
        match *self {
            IntersectPoints::One(p) => vec![p],
            IntersectPoints::Two(p1, p2) => vec![p1, p2],
        }
    }

    /// Fuzzy equal comparison (same count, each point fuzzy equal in order).
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        match (*self, other) {
            (IntersectPoints::One(a), IntersectPoints::One(b)) => a.fuzzy_eq_eps(b, fuzzy_epsilon),
            (IntersectPoints::Two(a1, b1), IntersectPoints::Two(a2, b2)) => {
                a1.fuzzy_eq_eps(a2, fuzzy_epsilon) && b1.fuzzy_eq_eps(b2, fuzzy_epsilon)
            }
            _ => false,
        }
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

/// Result of intersecting two circles.
///
/// "Same circle" is its own variant rather than a special point list, callers must match it
/// explicitly.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(deserialize = "T: Real + Deserialize<'de>"))
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IntersectionResult<T = f64> {
    /// Circles share no points.
    Empty,
    /// Circles touch or cross at the points held.
    Points(IntersectPoints<T>),
    /// Both circles are the same circle (every point is shared), holds that circle.
    SameCircle(Circle<T>),
}

impl<T> IntersectionResult<T>
where
    T: Real,
{
    /// Returns `true` only for [IntersectionResult::Empty].
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, IntersectionResult::Empty)
    }

    #[inline]
    pub fn is_same_circle(&self) -> bool {
        matches!(self, IntersectionResult::SameCircle(_))
    }

    /// Intersect points as a list, empty for both [IntersectionResult::Empty] and
    /// [IntersectionResult::SameCircle] (use [IntersectionResult::is_same_circle] to tell them
    /// apart).
    pub fn points(&self) -> Vec<Point<T>> {
        match self {
            IntersectionResult::Points(pts) => pts.to_vec(),
            IntersectionResult::Empty | IntersectionResult::SameCircle(_) => Vec::new(),
        }
    }

    /// Fuzzy equal comparison, variants must match and points/circles be fuzzy equal.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        match (*self, other) {
            (IntersectionResult::Empty, IntersectionResult::Empty) => true,
            (IntersectionResult::Points(a), IntersectionResult::Points(b)) => {
                a.fuzzy_eq_eps(b, fuzzy_epsilon)
            }
            (IntersectionResult::SameCircle(a), IntersectionResult::SameCircle(b)) => {
                a.center().fuzzy_eq_eps(b.center(), fuzzy_epsilon)
                    && a.radius().fuzzy_eq_eps(b.radius(), fuzzy_epsilon)
            }
            _ => false,
        }
    }

    /// Fuzzy equal comparison using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

/// Options for circle/circle intersection.
///
/// Both tolerances are absolute below unit scale: `relative_eps` is scaled by `max(1, r1 + r2)`
/// and `pos_equal_eps` is not scaled at all. With the defaults, circles whose radii and center
/// distance are around `1e-9` or smaller are indistinguishable (crossing circles of radius
/// `1e-10` report [IntersectionResult::SameCircle]). Lower both epsilons for geometry at that
/// scale.
#[derive(Debug, Copy, Clone)]
pub struct CircleIntrOptions<T>
where
    T: Real,
{
    /// Relative tolerance for tangency and separation tests. The absolute tolerance used is
    /// `relative_eps * max(1, r1 + r2)`.
    pub relative_eps: T,
    /// Fuzzy comparison epsilon used for determining if two center positions are equal when
    /// they are not exactly equal.
    pub pos_equal_eps: T,
}

impl<T> CircleIntrOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            relative_eps: T::fuzzy_epsilon(),
            pos_equal_eps: T::fuzzy_epsilon(),
        }
    }

    /// Absolute tolerance for comparing distances against radii of magnitude `radius_sum`.
    #[inline]
    pub fn tolerance(&self, radius_sum: T) -> T {
        if radius_sum > T::one() {
            self.relative_eps * radius_sum
        } else {
            self.relative_eps
        }
    }
}

impl<T> Default for CircleIntrOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated circle fields, deserialized first and then checked by [Circle::new].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Real + Deserialize<'de>"))]
pub struct CircleData<T> {
    center: Point<T>,
    radius: T,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<CircleData<T>> for Circle<T>
where
    T: Real,
{
    type Error = GeometryError;

    fn try_from(data: CircleData<T>) -> Result<Self, Self::Error> {
        Circle::new(data.center, data.radius)
    }
}
