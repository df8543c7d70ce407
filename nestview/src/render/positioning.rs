use log::trace;

use crate::entities::Placement;
use crate::error::SkipReason;
use crate::geometry::primitives::{BoundingBox, Point};
use crate::geometry::{compute_bounding_box, polygon_to_path, transform};
use crate::util::assertions;

/// A part outline positioned in sheet coordinates (bottom-left origin, Y-up).
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedOutline {
    pub part_id: String,
    pub points: Vec<Point>,
    /// SVG path data of `points`
    pub path: String,
    pub bbox: BoundingBox,
    /// Center of the padded slot
    pub label_anchor: Point,
    pub tooltip: String,
}

/// Positions the profile of a placement on its sheet.
///
/// The raw profile is rotated about the center of its own bounding box, after which it is
/// translated such that the bottom-left corner of the rotated bounding box lands exactly on the
/// bottom-left corner of the slot.
pub fn position_outline(placement: &Placement) -> Result<PositionedOutline, SkipReason> {
    let profile = placement
        .profile
        .as_deref()
        .ok_or(SkipReason::MissingProfile)?;
    let slot = placement
        .slot
        .filter(|s| s.x.is_finite() && s.y.is_finite())
        .ok_or(SkipReason::MissingSlot)?;

    let orig_bbox = compute_bounding_box(profile);
    if orig_bbox.is_collapsed() && !profile.is_empty() {
        return Err(SkipReason::Collapsed);
    }

    let rotated = transform(profile, 0.0, 0.0, placement.rotation, orig_bbox.center());
    let rotated_bbox = compute_bounding_box(&rotated);
    if rotated_bbox.is_collapsed() && !rotated.is_empty() {
        return Err(SkipReason::Collapsed);
    }

    let (dx, dy) = (slot.x - rotated_bbox.x_min, slot.y - rotated_bbox.y_min);
    let points = transform(&rotated, dx, dy, 0.0, Point(0.0, 0.0));

    let path = polygon_to_path(&points);
    if path.is_empty() {
        return Err(SkipReason::NothingToDraw);
    }
    debug_assert!(assertions::outline_anchored_in_slot(&points, &slot));

    trace!(
        "part {} positioned with rotation {} and translation ({dx:.3}, {dy:.3})",
        placement.part_id, placement.rotation
    );

    Ok(PositionedOutline {
        part_id: placement.part_id.clone(),
        bbox: compute_bounding_box(&points),
        points,
        path,
        label_anchor: slot.center(),
        tooltip: format!(
            "{} @ ({:.1}, {:.1}) R:{}°",
            placement.display_name(),
            slot.x,
            slot.y,
            placement.rotation
        ),
    })
}
