use itertools::Itertools;
use log::warn;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::{BoundingBox, Point};

/// Computes the axis-aligned bounding box of a polygon.
///
/// Points with a non-finite coordinate are skipped with a warning. If no valid point remains,
/// the [degenerate](BoundingBox::degenerate) all-zero box is returned.
/// Width and height are rounded to two decimals.
pub fn compute_bounding_box(polygon: &[Point]) -> BoundingBox {
    let valid = valid_points(polygon, "bounding box");

    let x_extent = valid.iter().map(|p| p.0).minmax_by(f64::total_cmp).into_option();
    let y_extent = valid.iter().map(|p| p.1).minmax_by(f64::total_cmp).into_option();

    match (x_extent, y_extent) {
        (Some((x_min, x_max)), Some((y_min, y_max))) => {
            BoundingBox::from_extremes(x_min, y_min, x_max, y_max)
        }
        _ => {
            if !polygon.is_empty() {
                warn!("no valid points among {} for bounding box", polygon.len());
            }
            BoundingBox::degenerate()
        }
    }
}

/// Rotates every valid point of `polygon` by `rotate_degrees` around `pivot`,
/// and then translates it by (`dx`, `dy`).
///
/// Invalid points are removed from the output.
/// The inverse is `transform(out, -dx, -dy, -rotate_degrees, pivot + (dx, dy))`.
pub fn transform(
    polygon: &[Point],
    dx: f64,
    dy: f64,
    rotate_degrees: f64,
    pivot: Point,
) -> Vec<Point> {
    let t = Transformation::from_rotation_about(rotate_degrees.to_radians(), pivot.into())
        .translate((dx, dy));

    polygon
        .iter()
        .filter(|p| p.is_finite())
        .map(|p| p.transform_clone(&t))
        .collect()
}

/// Serializes the valid points of a polygon into SVG path data.
///
/// Returns an empty string when fewer than two valid points remain: there is nothing to draw.
pub fn polygon_to_path(polygon: &[Point]) -> String {
    let valid = valid_points(polygon, "path");
    if valid.len() < 2 {
        return String::new();
    }

    // adding 0.0 turns -0.0 into 0.0
    let mut path = format!("M {},{}", valid[0].0 + 0.0, valid[0].1 + 0.0);
    for point in valid.iter().skip(1) {
        path.push_str(&format!(" L {},{}", point.0 + 0.0, point.1 + 0.0));
    }
    path.push_str(" z");
    path
}

fn valid_points(polygon: &[Point], purpose: &str) -> Vec<Point> {
    polygon
        .iter()
        .filter(|p| {
            let finite = p.is_finite();
            if !finite {
                warn!("invalid point skipped for {purpose}: {p:?}");
            }
            finite
        })
        .copied()
        .collect()
}
