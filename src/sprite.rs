//! Host-framework boundary for renderable sprites
//!
//! The collision core never owns, creates, or mutates sprites. It reads
//! transform and frame state through the [`Renderable`] trait at call time
//! and asks the host to rasterize overlap sub-regions on demand.

use thiserror::Error;

use crate::math::{Point2, Vec2};
use crate::raster::RasterSurface;

/// Extent of a sprite's current visible frame, in local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSize {
    /// Frame width
    pub width: f32,
    /// Frame height
    pub height: f32,
}

impl FrameSize {
    /// Creates a new frame extent
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Errors surfaced by the host's raster sampling.
///
/// The collision core treats every variant as "no alpha at this entity's
/// pixels" and degrades to a no-collision result; nothing propagates to
/// the caller as an error.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The entity's current frame image has not finished loading
    #[error("frame image not yet available")]
    FrameNotReady,
    /// The host could not render the requested region
    #[error("failed to render sample region: {0}")]
    RenderFailed(String),
}

/// Parameters for rasterizing a sprite's portion of an overlap region.
///
/// Describes the entity's own rendering transform applied to a scratch
/// surface that covers only the overlap: rotate by `rotation` degrees,
/// scale by `scale`, then translate so `local_origin` lands at the surface
/// origin before drawing the current frame at (0, 0).
#[derive(Debug, Clone, Copy)]
pub struct SampleRequest {
    /// Region width in pixels
    pub width: u32,
    /// Region height in pixels
    pub height: u32,
    /// The overlap origin inverted into the entity's local space
    pub local_origin: Point2,
    /// The entity's own rotation in degrees
    pub rotation: f32,
    /// The entity's own scale factors
    pub scale: Vec2,
}

/// A renderable entity from the host framework.
///
/// Polymorphic over capability: a leaf sprite reports its current frame
/// through [`frame_size`](Self::frame_size) and rasterizes itself through
/// [`sample_region`](Self::sample_region); a group reports `Some` from
/// [`children`](Self::children) and is resolved recursively.
pub trait Renderable {
    /// Current visible frame extent in local units, or `None` when the
    /// frame image is not yet available.
    fn frame_size(&self) -> Option<FrameSize>;

    /// Raw world-space position, used by the distance precheck.
    fn position(&self) -> Point2;

    /// Scale factors applied by the entity's own transform.
    fn scale(&self) -> Vec2;

    /// Rotation applied by the entity's own transform, in degrees.
    fn rotation(&self) -> f32;

    /// Maps a point in the entity's local space to world space, composing
    /// the entity's scale, rotation, translation, and ancestor transforms.
    fn local_to_world(&self, local: Point2) -> Point2;

    /// Maps a world-space point into the entity's local space.
    fn world_to_local(&self, world: Point2) -> Point2;

    /// Ordered children when this entity is a group, `None` for leaf
    /// sprites. An empty slice is an empty group, which resolves to no
    /// bounds.
    fn children(&self) -> Option<&[Box<dyn Renderable>]> {
        None
    }

    /// Renders the requested sub-region of the current frame into `target`
    /// as RGBA bytes. `target` arrives sized to the request with every
    /// channel cleared to 0.
    fn sample_region(
        &self,
        request: &SampleRequest,
        target: &mut RasterSurface,
    ) -> Result<(), RasterError>;
}
