use serde::Serialize;

use crate::geometry::primitives::Point;

/// Axis-aligned bounding box of a polygon.
///
/// `width` and `height` are stored separately from the extremes because they are rounded to
/// two decimals, which is the precision the packing engine reports its slots in.
#[derive(Clone, Debug, PartialEq, Copy, Default, Serialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// The all-zero box, returned when a polygon holds no valid points.
    pub const fn degenerate() -> Self {
        BoundingBox {
            x_min: 0.0,
            y_min: 0.0,
            x_max: 0.0,
            y_max: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn from_extremes(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        BoundingBox {
            x_min,
            y_min,
            x_max,
            y_max,
            width: round_2dp(x_max - x_min),
            height: round_2dp(y_max - y_min),
        }
    }

    /// True if both the (rounded) width and height are zero.
    pub fn is_collapsed(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    pub fn bottom_left(&self) -> Point {
        Point(self.x_min, self.y_min)
    }

    /// Center of the box, derived from the rounded width and height.
    pub fn center(&self) -> Point {
        Point(self.x_min + self.width / 2.0, self.y_min + self.height / 2.0)
    }
}

pub(crate) fn round_2dp(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
