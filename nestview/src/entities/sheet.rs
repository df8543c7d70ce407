use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geometry::compute_bounding_box;
use crate::geometry::primitives::Point;

/// Origin of a sheet definition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetSource {
    /// Declared by hand with explicit dimensions
    #[default]
    Manual,
    /// Derived from the profile of an uploaded part
    #[serde(alias = "part-derived")]
    Part,
}

/// A declared raw-material sheet type.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetDefinition {
    pub id: String,
    /// Width in millimeters. NaN when the external representation held no number.
    pub width: f64,
    /// Height in millimeters. NaN when the external representation held no number.
    pub height: f64,
    pub thickness: Option<f64>,
    pub source: SheetSource,
    /// Number of instances available to the packing engine
    pub quantity: u32,
    pub original_name: Option<String>,
}

impl SheetDefinition {
    pub fn manual(index: usize, width: f64, height: f64, thickness: f64, quantity: u32) -> Self {
        SheetDefinition {
            id: format!("manual_{index}"),
            width,
            height,
            thickness: Some(thickness),
            source: SheetSource::Manual,
            quantity,
            original_name: None,
        }
    }

    /// Derives a sheet from the 2D profile of an uploaded part:
    /// its dimensions are those of the profile's bounding box.
    pub fn from_part_profile(
        file_name: &str,
        original_name: Option<String>,
        profile: &[Point],
        thickness: Option<f64>,
        quantity: u32,
    ) -> Self {
        let bbox = compute_bounding_box(profile);
        SheetDefinition {
            id: format!("part_{file_name}"),
            width: bbox.width,
            height: bbox.height,
            thickness,
            source: SheetSource::Part,
            quantity,
            original_name,
        }
    }

    /// Whether both dimensions are finite and strictly positive.
    pub fn has_valid_dimensions(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Display for SheetSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetSource::Manual => write!(f, "manual"),
            SheetSource::Part => write!(f, "part"),
        }
    }
}
