/// Assert two values are fuzzy equal. Works with any type exposing `fuzzy_eq` and
/// `fuzzy_eq_eps` (numbers, [Point](crate::Point), [IntersectionResult](crate::IntersectionResult)).
///
/// # Examples
///
/// ```
/// # use terminus_geometry::*;
/// # use terminus_geometry::core::traits::*;
/// assert_fuzzy_eq!(0.1f64 + 0.2, 0.3);
/// assert_fuzzy_eq!(point(1.0f64, 2.0), point(1.0 + 1e-12, 2.0));
/// assert_fuzzy_eq!(point(1.0f64, 2.0), point(1.01, 2.0), 0.1);
/// ```
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let (left, right) = (&$left, &$right);
        assert!(
            left.fuzzy_eq(*right),
            "fuzzy equality assertion failed\n  left: {:?}\n right: {:?}",
            left,
            right
        );
    }};
    ($left:expr, $right:expr, $eps:expr $(,)?) => {{
        let (left, right, eps) = (&$left, &$right, $eps);
        assert!(
            left.fuzzy_eq_eps(*right, eps),
            "fuzzy equality assertion failed\n  left: {:?}\n right: {:?}\n   eps: {:?}",
            left,
            right,
            eps
        );
    }};
}

/// Construct a [Circle](crate::Circle) from `(x, y, radius)`, returning the `Result` of
/// [Circle::new](crate::Circle::new).
///
/// # Examples
///
/// ```
/// # use terminus_geometry::*;
/// let c = circle!(1.0, 2.0, 3.0).unwrap();
/// assert_eq!(c.center(), point(1.0, 2.0));
/// assert!(circle!(1.0, 2.0, -3.0).is_err());
/// ```
#[macro_export]
macro_rules! circle {
    ($x:expr, $y:expr, $radius:expr $(,)?) => {
        $crate::Circle::new($crate::Point::new($x, $y), $radius)
    };
}
