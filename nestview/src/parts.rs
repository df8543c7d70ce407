use indexmap::IndexMap;
use log::{debug, warn};

use crate::entities::SheetDefinition;
use crate::geometry::primitives::Point;

/// An auxiliary 3D preview tied to a part row, owned by an external viewer.
pub trait ViewerHandle {
    /// Releases every resource held by the viewer. Called exactly once per handle.
    fn dispose(&mut self);
}

/// Live viewer handles keyed by row id.
#[derive(Default)]
pub struct ViewerRegistry {
    viewers: IndexMap<String, Box<dyn ViewerHandle>>,
}

impl ViewerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a viewer to a row, disposing the one previously attached to it.
    pub fn attach(&mut self, row_id: &str, handle: Box<dyn ViewerHandle>) {
        if let Some(mut previous) = self.viewers.insert(row_id.to_owned(), handle) {
            debug!("replacing viewer of row {row_id}");
            previous.dispose();
        }
    }

    /// Disposes and removes the viewer of a row. Returns false if the row had none.
    pub fn dispose(&mut self, row_id: &str) -> bool {
        match self.viewers.shift_remove(row_id) {
            Some(mut handle) => {
                handle.dispose();
                debug!("disposed viewer of row {row_id}");
                true
            }
            None => false,
        }
    }

    pub fn dispose_all(&mut self) {
        for (_, mut handle) in self.viewers.drain(..) {
            handle.dispose();
        }
    }

    pub fn contains(&self, row_id: &str) -> bool {
        self.viewers.contains_key(row_id)
    }

    pub fn len(&self) -> usize {
        self.viewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewers.is_empty()
    }
}

impl Drop for ViewerRegistry {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

/// An uploaded part, as produced by the geometry service.
#[derive(Clone, Debug, PartialEq)]
pub struct PartRow {
    /// File name assigned by the server, unique per upload
    pub file_name: String,
    pub original_name: String,
    pub thickness: Option<f64>,
    /// Outer loop of the selected face
    pub profile: Option<Vec<Point>>,
    /// Number of instances to nest
    pub quantity: u32,
    /// Whether the part itself should be offered as a sheet
    pub use_as_sheet: bool,
    pub sheet_quantity: u32,
}

/// Uploaded part rows in insertion order, together with the viewers tied to them.
#[derive(Default)]
pub struct PartTable {
    rows: IndexMap<String, PartRow>,
    viewers: ViewerRegistry,
}

impl PartTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row, or replaces the row with the same file name.
    /// The viewer tied to a replaced row is disposed before its data is discarded.
    pub fn upsert(&mut self, row: PartRow) -> Option<PartRow> {
        if self.rows.contains_key(&row.file_name) {
            self.viewers.dispose(&row.file_name);
        }
        self.rows.insert(row.file_name.clone(), row)
    }

    /// Removes a row, disposing its viewer first.
    pub fn remove(&mut self, file_name: &str) -> Option<PartRow> {
        self.viewers.dispose(file_name);
        self.rows.shift_remove(file_name)
    }

    /// Attaches a viewer to an existing row. Returns false (and disposes the handle) for unknown rows.
    pub fn attach_viewer(&mut self, file_name: &str, mut handle: Box<dyn ViewerHandle>) -> bool {
        match self.rows.contains_key(file_name) {
            true => {
                self.viewers.attach(file_name, handle);
                true
            }
            false => {
                warn!("no part row {file_name} to attach a viewer to");
                handle.dispose();
                false
            }
        }
    }

    pub fn get(&self, file_name: &str) -> Option<&PartRow> {
        self.rows.get(file_name)
    }

    pub fn rows(&self) -> impl Iterator<Item = &PartRow> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn viewers(&self) -> &ViewerRegistry {
        &self.viewers
    }
}

/// A sheet declared by hand, values as entered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManualSheet {
    pub index: usize,
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub quantity: u32,
}

impl ManualSheet {
    pub const DEFAULT_WIDTH: f64 = 2500.0;
    pub const DEFAULT_HEIGHT: f64 = 1250.0;
    pub const DEFAULT_THICKNESS: f64 = 3.0;

    pub fn new(index: usize) -> Self {
        ManualSheet {
            index,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            thickness: Self::DEFAULT_THICKNESS,
            quantity: 1,
        }
    }
}

/// Builds the sheet list of a nesting job: the valid manual sheets followed by the
/// part rows flagged to be used as sheet. Invalid entries are skipped.
pub fn collect_sheet_definitions(manual: &[ManualSheet], parts: &PartTable) -> Vec<SheetDefinition> {
    let manual_sheets = manual.iter().filter_map(|m| {
        let valid = m.width > 0.0 && m.height > 0.0 && m.thickness.is_finite() && m.quantity > 0;
        match valid {
            true => Some(SheetDefinition::manual(
                m.index, m.width, m.height, m.thickness, m.quantity,
            )),
            false => {
                warn!("invalid values for manual sheet {}, skipped", m.index);
                None
            }
        }
    });

    let part_sheets = parts.rows().filter(|r| r.use_as_sheet).filter_map(|r| {
        match (&r.profile, r.sheet_quantity) {
            (Some(profile), q) if q > 0 => Some(SheetDefinition::from_part_profile(
                &r.file_name,
                Some(r.original_name.clone()),
                profile,
                r.thickness,
                q,
            )),
            _ => {
                warn!("part {} cannot be used as sheet, skipped", r.file_name);
                None
            }
        }
    });

    manual_sheets.chain(part_sheets).collect()
}
