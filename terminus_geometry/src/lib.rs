//! 2D points and circles with exact circle/circle intersection.
//!
//! ```
//! use terminus_geometry::*;
//!
//! let c1 = Circle::new(Point::new(0.0, 0.0), 2.0)?;
//! let c2 = Circle::new(Point::new(3.0, 0.0), 1.0)?;
//! match c1.intersection(&c2) {
//!     IntersectionResult::Empty => println!("no shared points"),
//!     IntersectionResult::Points(pts) => assert_eq!(pts.to_vec(), vec![point(2.0, 0.0)]),
//!     IntersectionResult::SameCircle(c) => println!("same circle {c:?}"),
//! }
//! # Ok::<(), GeometryError>(())
//! ```
#[macro_use]
mod macros;
mod circle;
pub mod core;
mod error;
mod point;

pub use static_aabb2d_index::AABB;

pub use crate::circle::*;
pub use crate::error::GeometryError;
pub use crate::point::*;
