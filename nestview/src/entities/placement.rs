use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

/// Assignment of one part instance to a position and rotation on a specific sheet instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Identifier of the part (shared by all instances of the same part)
    pub part_id: String,
    /// Identifier of this specific instance of the part
    pub part_instance_id: Option<String>,
    /// Human readable name of the part, used in tooltips
    pub original_name: Option<String>,
    /// Sheet instance the part was placed on, see [`crate::grouping::resolve_sheet_definition`]
    pub sheet_id: Option<String>,
    /// Rotation in degrees, counter-clockwise
    pub rotation: f64,
    /// Outer loop of the part's 2D profile in its own coordinate system
    pub profile: Option<Vec<Point>>,
    /// Padded position assigned by the packing engine
    pub slot: Option<Slot>,
    /// Precise outline of the placed part as SVG path data, already in sheet coordinates
    pub precise_outline: Option<String>,
}

impl Placement {
    /// Name shown in tooltips: the original name if known, the part id otherwise.
    pub fn display_name(&self) -> &str {
        self.original_name.as_deref().unwrap_or(&self.part_id)
    }
}

/// The padded bounding box position assigned to a placement by the packing engine,
/// inclusive of spacing margins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Slot {
    pub fn bottom_left(&self) -> Point {
        Point(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
