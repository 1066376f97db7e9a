//! Core module has the numeric traits shared by all geometric types.
pub mod traits;
