//! Circles and circle/circle intersection.
mod circle_intersect;
mod circle_types;

pub use circle_intersect::circle_circle_intr;
pub use circle_types::{CircleIntrOptions, IntersectPoints, IntersectionResult};

use crate::{core::traits::Real, GeometryError, Point};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_aabb2d_index::AABB;
use std::cmp::Ordering;

/// A circle defined by a center [Point] and a non-negative radius.
///
/// Circles are immutable values, the radius is validated once by [Circle::new] so every circle
/// in existence has `radius >= 0`. A zero radius is a valid degenerate point circle.
///
/// # Examples
///
/// ```
/// # use terminus_geometry::*;
/// let circle = Circle::new(Point::new(0.0, 0.0), 2.0).unwrap();
/// assert_eq!(circle.radius(), 2.0);
/// assert!(Circle::new(Point::new(0.0, 0.0), -1.0).is_err());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "circle_types::CircleData<T>",
        bound(deserialize = "T: Real + Deserialize<'de>")
    )
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle<T = f64> {
    center: Point<T>,
    radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    /// Create a new circle, fails with [GeometryError::InvalidRadius] if `radius` is negative or
    /// NaN.
    pub fn new(center: Point<T>, radius: T) -> Result<Self, GeometryError> {
        match radius.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(Circle { center, radius }),
            // negative or NaN
            Some(Ordering::Less) | None => Err(GeometryError::InvalidRadius {
                radius: radius.as_f64(),
            }),
        }
    }

    /// Same as [Circle::new] with the center given as coordinates.
    #[inline]
    pub fn from_coords(center_x: T, center_y: T, radius: T) -> Result<Self, GeometryError> {
        Circle::new(Point::new(center_x, center_y), radius)
    }

    #[inline]
    pub fn center(&self) -> Point<T> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    #[inline]
    pub fn area(&self) -> T {
        T::pi() * self.radius * self.radius
    }

    #[inline]
    pub fn circumference(&self) -> T {
        T::tau() * self.radius
    }

    /// Axis aligned bounding box of the circle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use terminus_geometry::*;
    /// let circle = Circle::from_coords(1.0, 2.0, 3.0).unwrap();
    /// let bb = circle.bounding_box();
    /// assert_eq!((bb.min_x, bb.min_y, bb.max_x, bb.max_y), (-2.0, -1.0, 4.0, 5.0));
    /// ```
    pub fn bounding_box(&self) -> AABB<T> {
        let c = self.center;
        let r = self.radius;
        AABB::new(c.x - r, c.y - r, c.x + r, c.y + r)
    }

    /// Returns `true` if `point` is inside or on the circle, using `epsilon` for the boundary.
    #[inline]
    pub fn contains_point_eps(&self, point: Point<T>, epsilon: T) -> bool {
        self.center
            .distance(point)
            .fuzzy_lt_eps(self.radius, epsilon)
    }

    /// Same as [Circle::contains_point_eps] using T::fuzzy_epsilon().
    #[inline]
    pub fn contains_point(&self, point: Point<T>) -> bool {
        self.contains_point_eps(point, T::fuzzy_epsilon())
    }

    /// Returns `true` if `point` lies on the circle boundary (within `epsilon`).
    #[inline]
    pub fn point_on_boundary_eps(&self, point: Point<T>, epsilon: T) -> bool {
        self.center
            .distance(point)
            .fuzzy_eq_eps(self.radius, epsilon)
    }

    /// Same as [Circle::point_on_boundary_eps] using T::fuzzy_epsilon().
    #[inline]
    pub fn point_on_boundary(&self, point: Point<T>) -> bool {
        self.point_on_boundary_eps(point, T::fuzzy_epsilon())
    }

    /// Find the intersects between this circle and `other` using default options.
    ///
    /// See [Circle::intersection_opt] for the classification rules.
    ///
    /// # Examples
    ///
    /// ```
    /// # use terminus_geometry::*;
    /// let c1 = Circle::from_coords(0.0, 0.0, 1.0).unwrap();
    /// let c2 = Circle::from_coords(1.0, 1.0, 1.0).unwrap();
    /// assert_eq!(c1.intersection(&c2).points(), vec![point(1.0, 0.0), point(0.0, 1.0)]);
    ///
    /// match c1.intersection(&c1) {
    ///     IntersectionResult::SameCircle(c) => assert_eq!(c, c1),
    ///     other => panic!("expected same circle, got {other:?}"),
    /// }
    /// ```
    #[inline]
    pub fn intersection(&self, other: &Circle<T>) -> IntersectionResult<T> {
        self.intersection_opt(other, &CircleIntrOptions::new())
    }

    /// Find the intersects between this circle and `other`.
    ///
    /// Result is [IntersectionResult::SameCircle] when both circles are the same circle,
    /// [IntersectionResult::Empty] when the circles are concentric with different radii or do
    /// not touch, otherwise [IntersectionResult::Points] holding the tangent point or the two
    /// crossing points. Two points are ordered by descending x, then descending y, so the
    /// result does not depend on which circle is `self`.
    #[inline]
    pub fn intersection_opt(
        &self,
        other: &Circle<T>,
        options: &CircleIntrOptions<T>,
    ) -> IntersectionResult<T> {
        circle_circle_intr(self, other, options)
    }

    /// Returns `true` if the circles share at least one point.
    #[inline]
    pub fn intersects(&self, other: &Circle<T>) -> bool {
        !self.intersection(other).is_empty()
    }
}
