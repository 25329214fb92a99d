pub mod geometry;
pub mod mechanics;
