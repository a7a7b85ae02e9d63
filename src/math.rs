//! Math utilities and types
//!
//! Provides the fundamental 2D types used throughout collision testing.
//! Vector and point types are thin aliases over nalgebra, keeping world
//! coordinates in f32 like the host rendering frameworks this crate
//! collaborates with.

/// 2D vector type
pub type Vec2 = nalgebra::Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// An axis-aligned rectangle in a shared coordinate space.
///
/// `width` and `height` are never negative; zero extent on either axis
/// means the rectangle is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Origin x (left edge)
    pub x: f32,
    /// Origin y (top edge)
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Rect {
    /// Degenerate "no bounds" sentinel: infinite origin, zero extent.
    ///
    /// Produced by bounds resolution when an entity has no resolvable
    /// visible frame or a group has no children. Intersecting anything
    /// against it comes out empty.
    pub const NONE: Self = Self {
        x: f32::INFINITY,
        y: f32::INFINITY,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle from origin and extent
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half extents along each axis
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True when the rectangle has no area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
