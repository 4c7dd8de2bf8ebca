//! Axis-aligned collider with collision category bits.
//!
//! The collider is an AABB anchored to an entity's
//! [`MapPosition`](super::mapposition::MapPosition) via `offset`. Each collider
//! carries a `category` bit and a `contact_mask`: the collision detector only
//! reports overlapping pairs where at least one side's mask selects the other
//! side's category. The vine cutting code additionally uses
//! [`BoxCollider::segment_hits`] to sweep the pointer motion against vine
//! segments.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Collision category bits.
pub mod category {
    pub const VINE_HOLDER: u32 = 1 << 0;
    pub const VINE: u32 = 1 << 1;
    pub const PRIZE: u32 = 1 << 2;
    pub const CROCODILE: u32 = 1 << 3;
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
    /// Category bit of this collider.
    pub category: u32,
    /// Categories this collider reports contacts against.
    pub contact_mask: u32,
}

impl BoxCollider {
    /// Collider anchored at the entity position (top-left corner).
    pub fn new(width: f32, height: f32, category: u32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
            category,
            contact_mask: 0,
        }
    }

    /// Collider centered on the entity position.
    pub fn centered(width: f32, height: f32, category: u32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::new(-width * 0.5, -height * 0.5),
            category,
            contact_mask: 0,
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_contact_mask(mut self, mask: u32) -> Self {
        self.contact_mask = mask;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Whether this collider's mask selects the other collider's category.
    pub fn wants_contact_with(&self, other: &Self) -> bool {
        self.contact_mask & other.category != 0
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Point containment in world space.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Swept test: does the line segment `from` -> `to` cross this collider?
    ///
    /// Liang-Barsky clipping of the segment against the AABB. A zero-length
    /// segment degenerates to a point containment test.
    pub fn segment_hits(&self, position: Vector2, from: Vector2, to: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        let d = to - from;

        let mut t0 = 0.0f32;
        let mut t1 = 1.0f32;
        let edges = [
            (-d.x, from.x - min.x),
            (d.x, max.x - from.x),
            (-d.y, from.y - min.y),
            (d.y, max.y - from.y),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                // parallel to this edge; outside means no hit at all
                if q < 0.0 {
                    return false;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    t0 = t0.max(r);
                } else {
                    t1 = t1.min(r);
                }
                if t0 > t1 {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vine_box() -> BoxCollider {
        // 8x20 collider centered on the entity position
        BoxCollider::centered(8.0, 20.0, category::VINE)
    }

    #[test]
    fn test_aabb_centered() {
        let c = vine_box();
        let (min, max) = c.aabb(Vector2::new(100.0, 100.0));
        assert_eq!(min.x, 96.0);
        assert_eq!(min.y, 90.0);
        assert_eq!(max.x, 104.0);
        assert_eq!(max.y, 110.0);
    }

    #[test]
    fn test_overlaps() {
        let a = BoxCollider::centered(10.0, 10.0, category::PRIZE);
        let b = BoxCollider::centered(10.0, 10.0, category::CROCODILE);
        assert!(a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(5.0, 5.0)));
        assert!(!a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(20.0, 0.0)));
    }

    #[test]
    fn test_contains_point() {
        let c = vine_box();
        assert!(c.contains_point(Vector2::new(50.0, 50.0), Vector2::new(51.0, 58.0)));
        assert!(!c.contains_point(Vector2::new(50.0, 50.0), Vector2::new(60.0, 50.0)));
    }

    #[test]
    fn test_contact_mask() {
        let croc = BoxCollider::centered(40.0, 30.0, category::CROCODILE)
            .with_contact_mask(category::PRIZE);
        let prize = BoxCollider::centered(36.0, 36.0, category::PRIZE);
        let vine = vine_box();
        assert!(croc.wants_contact_with(&prize));
        assert!(!croc.wants_contact_with(&vine));
        assert!(!prize.wants_contact_with(&croc));
    }

    #[test]
    fn test_segment_crosses_horizontally() {
        let c = vine_box();
        let pos = Vector2::new(100.0, 100.0);
        assert!(c.segment_hits(pos, Vector2::new(80.0, 100.0), Vector2::new(120.0, 100.0)));
    }

    #[test]
    fn test_segment_misses_above() {
        let c = vine_box();
        let pos = Vector2::new(100.0, 100.0);
        assert!(!c.segment_hits(pos, Vector2::new(80.0, 80.0), Vector2::new(120.0, 80.0)));
    }

    #[test]
    fn test_segment_diagonal_through_corner_region() {
        let c = vine_box();
        let pos = Vector2::new(100.0, 100.0);
        assert!(c.segment_hits(pos, Vector2::new(90.0, 85.0), Vector2::new(110.0, 115.0)));
    }

    #[test]
    fn test_segment_endpoint_inside() {
        let c = vine_box();
        let pos = Vector2::new(100.0, 100.0);
        assert!(c.segment_hits(pos, Vector2::new(100.0, 100.0), Vector2::new(200.0, 200.0)));
    }

    #[test]
    fn test_segment_stops_short() {
        let c = vine_box();
        let pos = Vector2::new(100.0, 100.0);
        assert!(!c.segment_hits(pos, Vector2::new(50.0, 100.0), Vector2::new(90.0, 100.0)));
    }

    #[test]
    fn test_degenerate_segment_is_point_test() {
        let c = vine_box();
        let pos = Vector2::new(100.0, 100.0);
        let inside = Vector2::new(101.0, 101.0);
        let outside = Vector2::new(150.0, 100.0);
        assert!(c.segment_hits(pos, inside, inside));
        assert!(!c.segment_hits(pos, outside, outside));
    }
}
