use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Coordinate type for points and circles (`f32` or `f64`). Can be fuzzy compared and ordered,
/// and used as a bounding box coordinate.
pub trait Real:
    num_traits::real::Real + FuzzyOrd + Default + std::fmt::Debug + IndexableNum + Send + Sync + 'static
{
    fn pi() -> Self;

    fn tau() -> Self;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    /// Widening conversion to `f64`, used for error and log reporting.
    fn as_f64(self) -> f64;
}

macro_rules! impl_real {
    ($ty:ident) => {
        impl Real for $ty {
            #[inline]
            fn pi() -> Self {
                std::$ty::consts::PI
            }

            #[inline]
            fn tau() -> Self {
                std::$ty::consts::TAU
            }

            #[inline]
            fn two() -> Self {
                2.0
            }

            #[inline]
            fn four() -> Self {
                4.0
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self.into()
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);
