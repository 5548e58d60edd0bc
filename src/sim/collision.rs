//! Collision detection between bodies
//!
//! Boxes are centered, axis-aligned rectangles. Overlap uses strict
//! comparisons, so boxes that only share an edge do not collide.

use super::body::Body;

/// Whether two bodies collide
///
/// False when either body is non-colliding, when both are the same entity,
/// or when their boxes are separated on either axis. Symmetric in `a`/`b`.
pub fn colliding(a: &Body, b: &Body) -> bool {
    if a.non_colliding() || b.non_colliding() || a.id == b.id {
        return false;
    }
    boxes_overlap(a, b)
}

/// Strict AABB overlap test on both axes
#[inline]
pub fn boxes_overlap(a: &Body, b: &Body) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());

    a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
}
