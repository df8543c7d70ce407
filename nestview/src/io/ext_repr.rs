use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{SheetSource, SheetStat, Statistics};

/// External representation of a [`NestingResult`](crate::entities::NestingResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtNestingResult {
    /// Whether the packing engine completed the job
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub placements: Vec<ExtPlacement>,
    #[serde(default)]
    pub unplaced: Vec<ExtUnplaced>,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub sheet_stats: Vec<SheetStat>,
    /// Sheets the job was run with, when the packing engine echoes them back
    #[serde(default, alias = "sheets")]
    pub sheet_definitions: Vec<ExtSheetDefinition>,
}

fn default_success() -> bool {
    true
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtPlacement {
    pub part_instance_id: Option<String>,
    pub part_id: Option<String>,
    pub original_name: Option<String>,
    pub sheet_id: Option<String>,
    /// Rotation in degrees, 0 if not specified
    pub rotation: Option<f64>,
    #[serde(rename = "profile2d")]
    pub profile_2d: Option<ExtProfile>,
    /// Padded slot of the placement
    pub bbox: Option<ExtSlot>,
    /// Flat slot fields, used when `bbox` is absent
    #[serde(rename = "x_bl_bbox", skip_serializing_if = "Option::is_none")]
    pub x_bl_bbox: Option<f64>,
    #[serde(rename = "y_bl_bbox", skip_serializing_if = "Option::is_none")]
    pub y_bl_bbox: Option<f64>,
    #[serde(rename = "width_bbox", skip_serializing_if = "Option::is_none")]
    pub width_bbox: Option<f64>,
    #[serde(rename = "height_bbox", skip_serializing_if = "Option::is_none")]
    pub height_bbox: Option<f64>,
    /// Precise outline of the placed part as SVG path data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

/// 2D profile of a part, only the outer loop is used
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtProfile {
    pub outer: Option<Vec<ExtPoint>>,
}

/// A point of a profile. Anything which is not a pair of numbers is kept as-is and dropped on import.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtPoint {
    Pair(f64, f64),
    Malformed(Value),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtSlot {
    pub x: Option<ExtNumber>,
    pub y: Option<ExtNumber>,
    pub width: Option<ExtNumber>,
    pub height: Option<ExtNumber>,
}

/// External representation of a [`SheetDefinition`](crate::entities::SheetDefinition).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtSheetDefinition {
    pub id: String,
    #[serde(default)]
    pub source: SheetSource,
    #[serde(default)]
    pub width: ExtNumber,
    #[serde(default)]
    pub height: ExtNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<ExtNumber>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// A number which may turn out not to be one
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtNumber {
    Number(f64),
    Other(Value),
}

impl ExtNumber {
    /// The numeric value, NaN if the external value was not a number.
    pub fn value(&self) -> f64 {
        match self {
            ExtNumber::Number(n) => *n,
            ExtNumber::Other(_) => f64::NAN,
        }
    }
}

impl Default for ExtNumber {
    fn default() -> Self {
        ExtNumber::Other(Value::Null)
    }
}

impl From<f64> for ExtNumber {
    fn from(n: f64) -> Self {
        ExtNumber::Number(n)
    }
}

/// A part (or some of its instances) which could not be placed
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtUnplaced {
    pub id: Option<String>,
    pub original_name: Option<String>,
    pub quantity: Option<u64>,
    /// Legacy name of `quantity`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}
