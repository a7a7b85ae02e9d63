//! Rectangle Intersector: axis-aligned overlap computation

use crate::math::Rect;

/// Computes the overlap of two axis-aligned rectangles, or `None` when
/// they are separated on at least one axis.
///
/// Uses the center/half-extent separation test. The reported overlap is
/// capped so it never exceeds either input's own extent, and its origin is
/// the componentwise max of the input origins. Existence is symmetric in
/// the arguments; the reported rectangle follows that capping policy.
pub fn calculate_intersection(a: &Rect, b: &Rect) -> Option<Rect> {
    let center_a = a.center();
    let center_b = b.center();
    let half_a = a.half_extents();
    let half_b = b.half_extents();

    // Separation per axis: negative means the projections overlap
    let dx = (center_a.x - center_b.x).abs() - (half_a.x + half_b.x);
    let dy = (center_a.y - center_b.y).abs() - (half_a.y + half_b.y);

    if dx < 0.0 && dy < 0.0 {
        Some(Rect::new(
            a.x.max(b.x),
            a.y.max(b.y),
            a.width.min(b.width).min(-dx),
            a.height.min(b.height).min(-dy),
        ))
    } else {
        None
    }
}
