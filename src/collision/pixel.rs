//! Pixel Comparator: the two-stage collision test
//!
//! Orchestrates the cheap distance precheck, bounding-box intersection,
//! overlap-region raster sampling, and the alpha-threshold scan.

use log::{debug, trace};

use crate::collision::bounds::get_bounds;
use crate::collision::intersect::calculate_intersection;
use crate::math::{Point2, Rect};
use crate::raster::RasterSurface;
use crate::sprite::{FrameSize, Renderable, SampleRequest};

/// Highest accepted alpha threshold.
///
/// Alpha is normalized by dividing by 255, so a threshold of exactly 1.0
/// could never be exceeded; clamping here keeps fully opaque pixels
/// collidable.
const MAX_ALPHA_THRESHOLD: f32 = 0.99999;

/// Bounding-box-only collision test.
///
/// Resolves both entities' world-space bounds and intersects them. Cheap
/// variant for callers that do not need pixel accuracy; returns the
/// overlap rectangle when the boxes collide.
pub fn check_rect_collision(a: &dyn Renderable, b: &dyn Renderable) -> Option<Rect> {
    calculate_intersection(&get_bounds(a), &get_bounds(b))
}

/// Pixel-exact collision tester.
///
/// Owns the two scratch raster surfaces the overlap regions are sampled
/// into. The surfaces are resized per call and reused across calls, so a
/// long-lived collider amortizes allocation. Keep one collider per thread:
/// the surfaces are mutated during a test, so sharing one across
/// concurrent tests would corrupt both.
#[derive(Debug, Default)]
pub struct PixelCollider {
    surface_a: RasterSurface,
    surface_b: RasterSurface,
}

impl PixelCollider {
    /// Creates a collider with empty scratch surfaces
    pub fn new() -> Self {
        Self::default()
    }

    /// Tests whether two entities have overlapping pixels with alpha above
    /// `alpha_threshold` (normalized; clamped into `[0, 0.99999]`).
    ///
    /// Runs the two-stage test: a distance precheck on raw positions and
    /// scaled frame sizes, then bounds intersection, and only then raster
    /// sampling of the overlap region and the per-pixel alpha scan. The
    /// scan short-circuits on the first position where both entities
    /// exceed the threshold. Missing frame data on either side degrades to
    /// `false`, never an error.
    pub fn check_pixel_collision(
        &mut self,
        a: &dyn Renderable,
        b: &dyn Renderable,
        alpha_threshold: f32,
    ) -> bool {
        if !distance_precheck(a, b) {
            trace!("pixel collision rejected by distance precheck");
            return false;
        }

        let Some(intersection) = check_rect_collision(a, b) else {
            return false;
        };

        let threshold = alpha_threshold.clamp(0.0, MAX_ALPHA_THRESHOLD);

        let width = intersection.width as u32;
        let height = intersection.height as u32;
        if width == 0 || height == 0 {
            return false;
        }

        self.surface_a.resize(width, height);
        self.surface_b.resize(width, height);

        if !sample_overlap(a, &intersection, width, height, &mut self.surface_a) {
            return false;
        }
        if !sample_overlap(b, &intersection, width, height, &mut self.surface_b) {
            return false;
        }

        compare_alpha(&self.surface_a, &self.surface_b, width, height, threshold)
    }
}

/// Cheap rejection test on raw position deltas and declared scale.
///
/// Intentionally more conservative than full bounds resolution: it ignores
/// rotation and ancestor transforms, so it only rejects pairs that are
/// certainly too far apart on either axis. A missing frame contributes
/// zero extent.
fn distance_precheck(a: &dyn Renderable, b: &dyn Renderable) -> bool {
    let frame_a = a.frame_size().unwrap_or(FrameSize::new(0.0, 0.0));
    let frame_b = b.frame_size().unwrap_or(FrameSize::new(0.0, 0.0));
    let pos_a = a.position();
    let pos_b = b.position();
    let scale_a = a.scale();
    let scale_b = b.scale();

    (pos_b.x - pos_a.x).abs() < frame_b.width * scale_b.x + frame_a.width * scale_a.x
        && (pos_b.y - pos_a.y).abs() < frame_b.height * scale_b.y + frame_a.height * scale_a.y
}

/// Renders `entity`'s portion of the overlap region into `target`.
///
/// The overlap origin is inverted into the entity's local space so the
/// host can reproduce the entity's own rotation and scale onto a surface
/// covering only the overlap. Returns `false` when the host reports the
/// frame unavailable, which the caller treats as no collision.
fn sample_overlap(
    entity: &dyn Renderable,
    intersection: &Rect,
    width: u32,
    height: u32,
    target: &mut RasterSurface,
) -> bool {
    let local_origin = entity.world_to_local(Point2::new(intersection.x, intersection.y));
    let request = SampleRequest {
        width,
        height,
        local_origin,
        rotation: entity.rotation(),
        scale: entity.scale(),
    };

    match entity.sample_region(&request, target) {
        Ok(()) => true,
        Err(err) => {
            debug!("raster sampling unavailable, treating as no collision: {err}");
            false
        }
    }
}

/// Scans both rasters row-major for a position where both alpha values
/// exceed the threshold, short-circuiting on the first hit.
///
/// Alpha is the fourth channel of each 4-byte pixel, normalized by 255.
/// Reads past a short buffer count as fully transparent.
fn compare_alpha(
    a: &RasterSurface,
    b: &RasterSurface,
    width: u32,
    height: u32,
    threshold: f32,
) -> bool {
    let mut offset = 3_usize;
    for _y in 0..height {
        for _x in 0..width {
            let alpha_a = f32::from(a.alpha_at(offset)) / 255.0;
            let alpha_b = f32::from(b.alpha_at(offset)) / 255.0;

            if alpha_a > threshold && alpha_b > threshold {
                return true;
            }
            offset += 4;
        }
    }

    false
}
