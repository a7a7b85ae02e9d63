//! Bounds Resolver: world-space axis-aligned bounding boxes

use crate::math::{Point2, Rect};
use crate::sprite::Renderable;

/// Computes the world-space axis-aligned bounding box of an entity.
///
/// Leaf sprites map the four corners of their local frame through
/// [`Renderable::local_to_world`] and reduce to a min/max box, so rotation,
/// scale, and ancestor transforms are all accounted for. An entity with no
/// resolvable frame yields [`Rect::NONE`].
///
/// Groups aggregate children with the minimum child origin paired with the
/// MAXIMUM child width/height, not the union extent. That matches the
/// long-standing behavior of this routine and is kept for compatibility;
/// callers that need exact group boxes should resolve children
/// individually.
pub fn get_bounds(entity: &dyn Renderable) -> Rect {
    if let Some(children) = entity.children() {
        return group_bounds(children);
    }

    let Some(frame) = entity.frame_size() else {
        return Rect::NONE;
    };

    let corners = [
        entity.local_to_world(Point2::new(0.0, 0.0)),
        entity.local_to_world(Point2::new(frame.width, frame.height)),
        entity.local_to_world(Point2::new(frame.width, 0.0)),
        entity.local_to_world(Point2::new(0.0, frame.height)),
    ];

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for corner in &corners {
        min_x = min_x.min(corner.x);
        min_y = min_y.min(corner.y);
        max_x = max_x.max(corner.x);
        max_y = max_y.max(corner.y);
    }

    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

fn group_bounds(children: &[Box<dyn Renderable>]) -> Rect {
    let mut bounds = Rect::NONE;
    for child in children {
        let child_bounds = get_bounds(child.as_ref());
        if child_bounds.x < bounds.x {
            bounds.x = child_bounds.x;
        }
        if child_bounds.y < bounds.y {
            bounds.y = child_bounds.y;
        }
        if child_bounds.width > bounds.width {
            bounds.width = child_bounds.width;
        }
        if child_bounds.height > bounds.height {
            bounds.height = child_bounds.height;
        }
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::raster::RasterSurface;
    use crate::sprite::{FrameSize, RasterError, SampleRequest};
    use approx::assert_relative_eq;

    /// Leaf sprite with a translate + rotate + scale transform
    struct TestSprite {
        position: Point2,
        scale: Vec2,
        rotation: f32,
        frame: Option<FrameSize>,
    }

    impl TestSprite {
        fn at(x: f32, y: f32, width: f32, height: f32) -> Self {
            Self {
                position: Point2::new(x, y),
                scale: Vec2::new(1.0, 1.0),
                rotation: 0.0,
                frame: Some(FrameSize::new(width, height)),
            }
        }
    }

    impl Renderable for TestSprite {
        fn frame_size(&self) -> Option<FrameSize> {
            self.frame
        }

        fn position(&self) -> Point2 {
            self.position
        }

        fn scale(&self) -> Vec2 {
            self.scale
        }

        fn rotation(&self) -> f32 {
            self.rotation
        }

        fn local_to_world(&self, local: Point2) -> Point2 {
            let (sin, cos) = self.rotation.to_radians().sin_cos();
            let x = local.x * self.scale.x;
            let y = local.y * self.scale.y;
            Point2::new(
                self.position.x + x * cos - y * sin,
                self.position.y + x * sin + y * cos,
            )
        }

        fn world_to_local(&self, world: Point2) -> Point2 {
            let (sin, cos) = self.rotation.to_radians().sin_cos();
            let dx = world.x - self.position.x;
            let dy = world.y - self.position.y;
            Point2::new(
                (dx * cos + dy * sin) / self.scale.x,
                (-dx * sin + dy * cos) / self.scale.y,
            )
        }

        fn sample_region(
            &self,
            _request: &SampleRequest,
            _target: &mut RasterSurface,
        ) -> Result<(), RasterError> {
            Ok(())
        }
    }

    /// Group of boxed children, identity transform of its own
    struct TestGroup {
        children: Vec<Box<dyn Renderable>>,
    }

    impl Renderable for TestGroup {
        fn frame_size(&self) -> Option<FrameSize> {
            None
        }

        fn position(&self) -> Point2 {
            Point2::origin()
        }

        fn scale(&self) -> Vec2 {
            Vec2::new(1.0, 1.0)
        }

        fn rotation(&self) -> f32 {
            0.0
        }

        fn local_to_world(&self, local: Point2) -> Point2 {
            local
        }

        fn world_to_local(&self, world: Point2) -> Point2 {
            world
        }

        fn children(&self) -> Option<&[Box<dyn Renderable>]> {
            Some(&self.children)
        }

        fn sample_region(
            &self,
            _request: &SampleRequest,
            _target: &mut RasterSurface,
        ) -> Result<(), RasterError> {
            Err(RasterError::FrameNotReady)
        }
    }

    #[test]
    fn test_untransformed_sprite_bounds() {
        let sprite = TestSprite::at(0.0, 0.0, 10.0, 20.0);

        assert_eq!(get_bounds(&sprite), Rect::new(0.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn test_translated_and_scaled_sprite_bounds() {
        let mut sprite = TestSprite::at(3.0, 4.0, 10.0, 20.0);
        sprite.scale = Vec2::new(2.0, 0.5);

        assert_eq!(get_bounds(&sprite), Rect::new(3.0, 4.0, 20.0, 10.0));
    }

    #[test]
    fn test_rotated_sprite_bounds() {
        let mut sprite = TestSprite::at(0.0, 0.0, 10.0, 20.0);
        sprite.rotation = 90.0;

        let bounds = get_bounds(&sprite);
        assert_relative_eq!(bounds.x, -20.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.width, 20.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.height, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_missing_frame_yields_no_bounds() {
        let sprite = TestSprite {
            position: Point2::new(5.0, 5.0),
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
            frame: None,
        };

        assert_eq!(get_bounds(&sprite), Rect::NONE);
    }

    #[test]
    fn test_group_uses_min_origin_and_max_size() {
        let group = TestGroup {
            children: vec![
                Box::new(TestSprite::at(0.0, 0.0, 5.0, 5.0)),
                Box::new(TestSprite::at(2.0, 2.0, 10.0, 10.0)),
            ],
        };

        assert_eq!(get_bounds(&group), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_empty_group_yields_no_bounds() {
        let group = TestGroup { children: vec![] };

        assert_eq!(get_bounds(&group), Rect::NONE);
    }

    #[test]
    fn test_nested_group_bounds() {
        let inner = TestGroup {
            children: vec![Box::new(TestSprite::at(-4.0, 1.0, 3.0, 3.0))],
        };
        let group = TestGroup {
            children: vec![
                Box::new(inner) as Box<dyn Renderable>,
                Box::new(TestSprite::at(0.0, 0.0, 2.0, 2.0)),
            ],
        };

        assert_eq!(get_bounds(&group), Rect::new(-4.0, 0.0, 3.0, 3.0));
    }
}
