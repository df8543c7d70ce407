use serde::{Deserialize, Serialize};

use crate::entities::{Placement, SheetDefinition};

/// Complete output of one nesting job, as consumed by the viewer.
///
/// Replaced wholesale on every new job, never patched in place.
#[derive(Clone, Debug, Default)]
pub struct NestingResult {
    pub placements: Vec<Placement>,
    pub unplaced: Vec<UnplacedPart>,
    pub statistics: Statistics,
    pub sheet_stats: Vec<SheetStat>,
    pub sheet_definitions: Vec<SheetDefinition>,
}

/// A part (or a number of its instances) the packing engine could not place
#[derive(Clone, Debug, PartialEq)]
pub struct UnplacedPart {
    pub part_id: String,
    pub name: Option<String>,
    pub quantity: Option<u64>,
}

impl UnplacedPart {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.part_id)
    }
}

/// Global statistics reported by the packing engine. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub total_parts_requested: Option<u64>,
    pub total_parts_placed: Option<u64>,
    pub total_parts_unplaced: Option<u64>,
    pub initially_skipped: Option<u64>,
    pub unplaced_during_nesting: Option<u64>,
    /// Overall material usage, in percent
    pub total_efficiency: Option<f64>,
    pub nesting_time_seconds: Option<f64>,
    pub preparation_time_seconds: Option<f64>,
    pub loading_time_seconds: Option<f64>,
}

/// Material usage of a single sheet instance, in percent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetStat {
    pub sheet_id: String,
    pub efficiency: f64,
}
