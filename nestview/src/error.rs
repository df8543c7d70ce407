use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Failures of the rendering and pagination engine.
///
/// None of them is fatal: each degrades to a visible message and disabled affordances.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    /// The sheet cannot be drawn, e.g. because its dimensions are not positive numbers
    #[error("invalid input for sheet {sheet_id}: {reason}")]
    InvalidInput { sheet_id: String, reason: String },
    /// A sheet instance id does not resolve to any sheet definition
    #[error("no sheet definition found for sheet instance {instance_id}")]
    MissingReference { instance_id: String },
    /// A placement collapsed to nothing after being positioned
    #[error("placement of part {part_id} collapsed to a degenerate outline")]
    DegenerateGeometry { part_id: String },
    #[error("no sheet is currently rendered, nothing to export")]
    ExportWithNoDrawing,
}

/// Why a placement was left out of a rendered sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingProfile,
    MissingSlot,
    /// The bounding box of the (rotated) profile has zero width and height
    Collapsed,
    /// Fewer than two valid points remain after positioning
    NothingToDraw,
}

/// A placement which was skipped while rendering a sheet, the rest of the sheet is unaffected.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPlacement {
    pub part_id: String,
    pub reason: SkipReason,
}

impl SkippedPlacement {
    /// Geometric skips map onto [`ViewError::DegenerateGeometry`], missing data does not.
    pub fn as_error(&self) -> Option<ViewError> {
        match self.reason {
            SkipReason::Collapsed | SkipReason::NothingToDraw => {
                Some(ViewError::DegenerateGeometry {
                    part_id: self.part_id.clone(),
                })
            }
            SkipReason::MissingProfile | SkipReason::MissingSlot => None,
        }
    }
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkipReason::MissingProfile => "no profile",
            SkipReason::MissingSlot => "no slot",
            SkipReason::Collapsed => "collapsed bounding box",
            SkipReason::NothingToDraw => "nothing to draw",
        };
        write!(f, "{s}")
    }
}
