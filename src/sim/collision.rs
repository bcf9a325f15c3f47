//! Axis-aligned collision detection
//!
//! Every pair in the game (ball/paddle, ball/block) is tested with the same
//! box overlap. The ball collides as its bounding square.

/// An axis-aligned box: top-left corner plus extent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Check whether two boxes overlap on both axes
///
/// Comparisons are strict, so boxes that only share an edge do not collide.
#[inline]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes() {
        let ball = Aabb::new(200.0, 285.0, 9.0, 9.0);
        let paddle = Aabb::new(170.0, 290.0, 60.0, 10.0);
        assert!(intersects(&ball, &paddle));
    }

    #[test]
    fn test_separated_boxes() {
        let ball = Aabb::new(200.0, 155.0, 9.0, 9.0);
        let paddle = Aabb::new(170.0, 290.0, 60.0, 10.0);
        assert!(!intersects(&ball, &paddle));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(!intersects(&a, &Aabb::new(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge
        assert!(!intersects(&a, &Aabb::new(0.0, 10.0, 10.0, 10.0)));
        // Shares a corner
        assert!(!intersects(&a, &Aabb::new(10.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_zero_extent_boxes() {
        let point = Aabb::new(5.0, 5.0, 0.0, 0.0);
        assert!(!intersects(&point, &point));
        // Two zero-width boxes on the same x have no overlap on that axis
        assert!(!intersects(&Aabb::new(5.0, 5.0, 0.0, 10.0), &Aabb::new(5.0, 0.0, 0.0, 10.0)));
        // A point strictly inside a box still overlaps it
        assert!(intersects(&point, &Aabb::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_containment_collides() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(intersects(&outer, &inner));
        assert!(intersects(&inner, &outer));
    }

    fn any_box() -> impl Strategy<Value = Aabb> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Aabb::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_intersects_is_symmetric(a in any_box(), b in any_box()) {
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }

        #[test]
        fn prop_translated_past_right_edge_misses(a in any_box(), b in any_box()) {
            let moved = Aabb { x: a.right(), ..b };
            prop_assert!(!intersects(&a, &moved));
        }
    }
}
