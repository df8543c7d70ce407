use std::sync::LazyLock;

use indexmap::IndexMap;
use log::{debug, warn};
use regex::Regex;

use crate::entities::{Placement, SheetDefinition};

static INSTANCE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<definition>.+)_inst_\d+$").expect("instance suffix regex is valid")
});

/// Buckets placements per sheet instance id.
///
/// Keys iterate in the order in which a sheet id is first seen in `placements`, never sorted.
/// Placements without a sheet id are left out entirely.
pub fn group_by_sheet(placements: &[Placement]) -> IndexMap<&str, Vec<&Placement>> {
    let mut groups: IndexMap<&str, Vec<&Placement>> = IndexMap::new();
    for p in placements {
        match p.sheet_id.as_deref() {
            Some(sheet_id) => groups.entry(sheet_id).or_default().push(p),
            None => debug!("placement of part {} has no sheet id, excluded", p.part_id),
        }
    }
    groups
}

/// Derives the sheet definition id from a sheet instance id by stripping the trailing `_inst_<n>`.
///
/// Only the last suffix is stripped, so definition ids containing digits or `_inst_` themselves
/// are preserved. An id without suffix is returned unchanged.
pub fn definition_id(instance_id: &str) -> &str {
    INSTANCE_SUFFIX
        .captures(instance_id)
        .and_then(|c| c.name("definition"))
        .map_or(instance_id, |m| m.as_str())
}

/// Resolves a sheet instance id to its sheet definition by exact id equality.
pub fn resolve_sheet_definition<'a>(
    instance_id: &str,
    sheet_definitions: &'a [SheetDefinition],
) -> Option<&'a SheetDefinition> {
    let def_id = definition_id(instance_id);
    let found = sheet_definitions.iter().find(|d| d.id == def_id);
    if found.is_none() {
        warn!(
            "sheet instance {instance_id} (definition {def_id}) does not match any of the {} sheet definitions",
            sheet_definitions.len()
        );
    }
    found
}
