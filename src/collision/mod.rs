//! Two-stage sprite collision testing
//!
//! Bounding-box resolution, rectangle intersection, and the pixel-exact
//! alpha comparison that together implement the two-stage overlap test.

pub mod bounds;
pub mod intersect;
pub mod pixel;

pub use bounds::get_bounds;
pub use intersect::calculate_intersection;
pub use pixel::{check_rect_collision, PixelCollider};
