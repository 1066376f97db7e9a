use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops;

/// A position in the plane with an optional `z` tag.
///
/// All geometry in this crate is 2D, `z` only exists so points from 3D aware callers round trip
/// unchanged. It defaults to zero and is ignored by [Point::distance].
///
/// Equality through `==` is exact component wise comparison, use [Point::fuzzy_eq] for computed
/// values.
///
/// # Examples
///
/// ```
/// # use terminus_geometry::*;
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new_3d(3.0, 4.0, 0.0);
/// assert_eq!(a.distance(b), 5.0);
/// assert_eq!(b, point(3.0, 4.0));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point<T = f64> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
    /// Z tag, zero for 2D points.
    #[cfg_attr(feature = "serde", serde(default))]
    pub z: T,
}

impl<T> Point<T>
where
    T: Real,
{
    /// Create a new 2D point, `z` is set to zero.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Point { x, y, z: T::zero() }
    }

    /// Create a new point with an explicit `z` value.
    #[inline]
    pub fn new_3d(x: T, y: T, z: T) -> Self {
        Point { x, y, z }
    }

    /// Point at (0, 0, 0).
    #[inline]
    pub fn origin() -> Self {
        Point::new(T::zero(), T::zero())
    }

    /// Uniformly scale all components by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        Point::new_3d(
            scale_factor * self.x,
            scale_factor * self.y,
            scale_factor * self.z,
        )
    }

    /// Dot product in the xy plane.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared length of the xy components (treating the point as a vector from the origin).
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the xy components (treating the point as a vector from the origin).
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Squared euclidean distance in the xy plane.
    #[inline]
    pub fn distance_squared(&self, other: Self) -> T {
        (other - self).length_squared()
    }

    /// Euclidean distance in the xy plane, `z` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use terminus_geometry::*;
    /// let a = Point::new_3d(1.0, 1.0, 10.0);
    /// let b = Point::new(4.0, 5.0);
    /// assert_eq!(a.distance(b), 5.0);
    /// ```
    #[inline]
    pub fn distance(&self, other: Self) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Point halfway between `self` and `other` (all three components).
    #[inline]
    pub fn midpoint(&self, other: Self) -> Self {
        Point::new_3d(
            (self.x + other.x) / T::two(),
            (self.y + other.y) / T::two(),
            (self.z + other.z) / T::two(),
        )
    }

    /// Rotate 90 degrees counter clockwise about the origin in the xy plane.
    #[inline]
    pub fn perp(&self) -> Self {
        Point::new_3d(-self.y, self.x, self.z)
    }

    /// Fuzzy equal comparison with another point using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon)
            && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
            && self.z.fuzzy_eq_eps(other.z, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another point using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn point<T>(x: T, y: T) -> Point<T>
where
    T: Real,
{
    Point::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Point<T>> for Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new_3d(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<T: Real> ops::$op_trait<&Point<T>> for Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: &Point<T>) -> Self::Output {
                Point::new_3d(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Point<T>> for &'a Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: &'b Point<T>) -> Self::Output {
                Point::new_3d(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<T: Real> ops::$op_trait<Point<T>> for &Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new_3d(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Neg for Point<T> {
    type Output = Point<T>;
    fn neg(self) -> Self::Output {
        Point::new_3d(-self.x, -self.y, -self.z)
    }
}

impl<T: Real> ops::Neg for &Point<T> {
    type Output = Point<T>;
    fn neg(self) -> Self::Output {
        Point::new_3d(-self.x, -self.y, -self.z)
    }
}

impl<T: Real> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Point::new(x, y)
    }
}

impl<T: Real> From<(T, T, T)> for Point<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Point::new_3d(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_binary_op {
        ($p1:ident, $p2:ident, $op:tt, $expected:expr) => {
            assert_eq!($p1 $op $p2, $expected);
            assert_eq!(&$p1 $op $p2, $expected);
            assert_eq!($p1 $op &$p2, $expected);
            assert_eq!(&$p1 $op &$p2, $expected);
        };
    }

    #[test]
    fn ops() {
        let p1 = Point::new_3d(4.0, 5.0, 1.0);
        let p2 = point(1.0, 2.0);
        test_binary_op!(p1, p2, +, Point::new_3d(5.0, 7.0, 1.0));
        test_binary_op!(p1, p2, -, Point::new_3d(3.0, 3.0, 1.0));
        assert_eq!(-p1, Point::new_3d(-4.0, -5.0, -1.0));
        assert_eq!(-&p2, point(-1.0, -2.0));
    }

    #[test]
    fn z_defaults_to_zero() {
        let p = Point::new(1.5, -2.0);
        assert_eq!(p.z, 0.0);
        assert_eq!(p, Point::new_3d(1.5, -2.0, 0.0));
        assert_eq!(Point::from((1.5, -2.0)), p);
        assert_ne!(Point::from((1.5, -2.0, 0.5)), p);
    }

    #[test]
    fn distance_ignores_z() {
        let a = Point::new_3d(0.0, 0.0, 7.0);
        let b = Point::new_3d(6.0, 8.0, -3.0);
        assert_eq!(a.distance(b), 10.0);
        assert_eq!(b.distance(a), 10.0);
        assert_eq!(a.distance_squared(b), 100.0);
    }

    #[test]
    fn midpoint() {
        let a = Point::new_3d(-2.0, 4.0, 1.0);
        let b = Point::new_3d(6.0, 0.0, 3.0);
        assert_eq!(a.midpoint(b), Point::new_3d(2.0, 2.0, 2.0));
    }

    #[test]
    fn perp_and_dot() {
        let p = point(3.0, 1.0);
        assert_eq!(p.perp(), point(-1.0, 3.0));
        assert_eq!(p.dot(p.perp()), 0.0);
        assert_eq!(p.scale(2.0), point(6.0, 2.0));
    }

    #[test]
    fn fuzzy_eq_vs_exact_eq() {
        let p = point(0.1f64 + 0.2, 1.0);
        let q = point(0.3, 1.0);
        assert_ne!(p, q);
        assert!(p.fuzzy_eq(q));
        assert!(!p.fuzzy_eq_eps(point(0.31, 1.0), 1e-3));
        assert!(!point(0.0, 0.0).fuzzy_eq(Point::new_3d(0.0, 0.0, 1.0)));
    }
}
