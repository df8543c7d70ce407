mod layout_to_svg;
mod positioning;

/// Drawing options, themes and small helpers for building SVG nodes
pub mod svg_util;

#[doc(inline)]
pub use layout_to_svg::{SheetDrawing, SheetLayout, abbreviate_label, render_sheet, to_surface};
#[doc(inline)]
pub use positioning::{PositionedOutline, position_outline};
