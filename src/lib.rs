//! # Sprite Collision
//!
//! Pixel-perfect collision detection for 2D renderable sprites.
//!
//! Determines whether two sprites overlap using a two-stage test: a cheap
//! bounding-box/proximity check followed by an exact per-pixel alpha
//! comparison restricted to the overlapping region. Image decoding,
//! rendering surfaces, and the scene-graph object model stay in the host
//! framework; the core reads frame and transform state through the
//! [`Renderable`] trait and requests RGBA samples on demand.
//!
//! ## Quick start
//!
//! Rectangle-only tests are free functions:
//!
//! ```rust
//! use sprite_collision::{calculate_intersection, Rect};
//!
//! let a = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let b = Rect::new(5.0, 5.0, 10.0, 10.0);
//!
//! let overlap = calculate_intersection(&a, &b).unwrap();
//! assert_eq!(overlap, Rect::new(5.0, 5.0, 5.0, 5.0));
//! ```
//!
//! Pixel tests go through a [`PixelCollider`], which owns the reusable
//! scratch surfaces the overlap regions are rendered into:
//!
//! ```rust,ignore
//! let mut collider = PixelCollider::new();
//! if collider.check_pixel_collision(&player, &bullet, 0.0) {
//!     // hit
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod cache;
pub mod collision;
pub mod math;
pub mod raster;
pub mod sprite;

pub use collision::{calculate_intersection, check_rect_collision, get_bounds, PixelCollider};
pub use math::{Point2, Rect, Vec2};
pub use raster::RasterSurface;
pub use sprite::{FrameSize, RasterError, Renderable, SampleRequest};

/// Common imports for collision users
pub mod prelude {
    pub use crate::{
        cache::{FrameKey, FrameRasterCache},
        collision::{calculate_intersection, check_rect_collision, get_bounds, PixelCollider},
        math::{Point2, Rect, Vec2},
        raster::RasterSurface,
        sprite::{FrameSize, RasterError, Renderable, SampleRequest},
    };
}
