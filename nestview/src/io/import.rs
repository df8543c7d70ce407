use anyhow::{Context, Result, ensure};
use log::{debug, warn};

use crate::entities::{NestingResult, Placement, SheetDefinition, Slot, UnplacedPart};
use crate::geometry::primitives::Point;
use crate::io::ext_repr::{
    ExtNestingResult, ExtNumber, ExtPlacement, ExtPoint, ExtProfile, ExtSheetDefinition, ExtSlot, ExtUnplaced,
};

/// Parses the packing engine's JSON output.
pub fn parse_nesting_result(json: &str) -> Result<ExtNestingResult> {
    serde_json::from_str(json).context("could not parse nesting result")
}

/// Parses a JSON array of sheet definitions.
pub fn parse_sheet_definitions(json: &str) -> Result<Vec<ExtSheetDefinition>> {
    serde_json::from_str(json).context("could not parse sheet definitions")
}

/// Imports a nesting result into the library.
///
/// `sheet_definitions`, when supplied, replace the ones embedded in the result.
/// Fails if the packing engine reported that the job did not succeed.
pub fn import_nesting_result(
    ext: &ExtNestingResult,
    sheet_definitions: Option<&[ExtSheetDefinition]>,
) -> Result<NestingResult> {
    ensure!(
        ext.success,
        "packing engine reported a failure: {}",
        ext.message.as_deref().unwrap_or("no message")
    );

    let ext_sheets = sheet_definitions.unwrap_or(&ext.sheet_definitions);
    if ext_sheets.is_empty() && !ext.placements.is_empty() {
        warn!("nesting result has placements but no sheet definitions, every sheet will be unresolved");
    }

    let result = NestingResult {
        placements: ext.placements.iter().map(import_placement).collect(),
        unplaced: ext.unplaced.iter().map(import_unplaced).collect(),
        statistics: ext.statistics.clone(),
        sheet_stats: ext.sheet_stats.clone(),
        sheet_definitions: ext_sheets.iter().map(import_sheet_definition).collect(),
    };
    debug!(
        "imported {} placements, {} unplaced, {} sheet definitions",
        result.placements.len(),
        result.unplaced.len(),
        result.sheet_definitions.len()
    );
    Ok(result)
}

pub fn import_placement(ext: &ExtPlacement) -> Placement {
    let part_id = ext.part_id.clone().unwrap_or_else(|| "?".to_owned());
    let slot = match &ext.bbox {
        Some(bbox) => import_slot(bbox),
        None => match (ext.x_bl_bbox, ext.y_bl_bbox, ext.width_bbox, ext.height_bbox) {
            (Some(x), Some(y), Some(width), Some(height)) => Some(Slot {
                x,
                y,
                width,
                height,
            }),
            _ => None,
        },
    };
    if slot.is_none() {
        warn!("placement of part {part_id} has no usable slot");
    }

    Placement {
        part_instance_id: ext.part_instance_id.clone(),
        original_name: ext.original_name.clone(),
        sheet_id: ext.sheet_id.clone(),
        rotation: ext.rotation.unwrap_or(0.0),
        profile: ext.profile_2d.as_ref().and_then(import_profile),
        slot,
        precise_outline: ext.svg.clone(),
        part_id,
    }
}

/// Imports the outer loop of a profile. Points which are not a pair of numbers are dropped.
pub fn import_profile(ext: &ExtProfile) -> Option<Vec<Point>> {
    let outer = ext.outer.as_ref()?;
    let points = outer
        .iter()
        .filter_map(|p| match p {
            ExtPoint::Pair(x, y) => Some(Point(*x, *y)),
            ExtPoint::Malformed(value) => {
                warn!("malformed profile point dropped: {value}");
                None
            }
        })
        .collect();
    Some(points)
}

fn import_slot(ext: &ExtSlot) -> Option<Slot> {
    let field = |n: &Option<ExtNumber>| n.as_ref().map(ExtNumber::value);
    match (field(&ext.x), field(&ext.y), field(&ext.width), field(&ext.height)) {
        (Some(x), Some(y), Some(width), Some(height))
            if [x, y, width, height].iter().all(|v| v.is_finite()) =>
        {
            Some(Slot {
                x,
                y,
                width,
                height,
            })
        }
        _ => None,
    }
}

pub fn import_sheet_definition(ext: &ExtSheetDefinition) -> SheetDefinition {
    let sheet = SheetDefinition {
        id: ext.id.clone(),
        width: ext.width.value(),
        height: ext.height.value(),
        thickness: ext.thickness.as_ref().map(|t| t.value()),
        source: ext.source,
        quantity: ext.quantity,
        original_name: ext.original_name.clone(),
    };
    if !sheet.has_valid_dimensions() {
        warn!(
            "sheet definition {} has non-numeric or non-positive dimensions",
            sheet.id
        );
    }
    sheet
}

fn import_unplaced(ext: &ExtUnplaced) -> UnplacedPart {
    UnplacedPart {
        part_id: ext.id.clone().unwrap_or_else(|| "?".to_owned()),
        name: ext.original_name.clone(),
        quantity: ext.quantity.or(ext.count),
    }
}
