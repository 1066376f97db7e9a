use super::FuzzyEq;
use std::cmp::Ordering;

/// Ordering comparisons that treat values within an epsilon of each other as equal.
pub trait FuzzyOrd: FuzzyEq + PartialOrd {
    /// Compare with `other`, returning [Ordering::Equal] when the values are within
    /// `fuzzy_epsilon` (and for NaN, which has no ordering).
    ///
    /// # Examples
    ///
    /// ```
    /// # use terminus_geometry::core::traits::*;
    /// use std::cmp::Ordering;
    /// assert_eq!(1.0f64.fuzzy_cmp_eps(1.05, 0.1), Ordering::Equal);
    /// assert_eq!(1.0f64.fuzzy_cmp_eps(1.5, 0.1), Ordering::Less);
    /// assert_eq!(2.0f64.fuzzy_cmp_eps(1.5, 0.1), Ordering::Greater);
    /// ```
    #[inline]
    fn fuzzy_cmp_eps(&self, other: Self, fuzzy_epsilon: Self) -> Ordering {
        if self.fuzzy_eq_eps(other, fuzzy_epsilon) {
            return Ordering::Equal;
        }
        self.partial_cmp(&other).unwrap_or(Ordering::Equal)
    }

    /// Same as [FuzzyOrd::fuzzy_cmp_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_cmp(&self, other: Self) -> Ordering {
        self.fuzzy_cmp_eps(other, Self::fuzzy_epsilon())
    }

    /// Less than or within `fuzzy_epsilon` of `other`.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Greater than or within `fuzzy_epsilon` of `other`.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self <= other + fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self + fuzzy_epsilon >= other
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);
