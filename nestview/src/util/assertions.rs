//Various checks to verify correctness of the rendered geometry
//Used in debug_assert!() blocks and tests

use itertools::Itertools;

use crate::entities::Slot;
use crate::geometry::compute_bounding_box;
use crate::geometry::primitives::Point;
use crate::util::FPA;

/// Checks whether two polygons have the same points in the same order, within tolerance.
pub fn polygons_almost_equal(a: &[Point], b: &[Point]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip_eq(b.iter())
            .all(|(p, q)| FPA(p.0) == FPA(q.0) && FPA(p.1) == FPA(q.1))
}

/// Checks whether the bottom-left corner of the outline's bounding box lands on the slot's position.
pub fn outline_anchored_in_slot(outline: &[Point], slot: &Slot) -> bool {
    let bbox = compute_bounding_box(outline);
    FPA(bbox.x_min) == FPA(slot.x) && FPA(bbox.y_min) == FPA(slot.y)
}
