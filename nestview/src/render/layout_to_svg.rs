use std::borrow::Cow;

use log::{debug, warn};
use svg::Document;
use svg::node::element::{Group, Rectangle, Style, Text, Title};

use crate::entities::{Placement, SheetDefinition};
use crate::error::{SkippedPlacement, ViewError};
use crate::geometry::primitives::Point;
use crate::render::positioning::{PositionedOutline, position_outline};
use crate::render::svg_util;
use crate::render::svg_util::SvgDrawOptions;

/// Result of rendering a single sheet.
#[derive(Clone, Debug)]
pub enum SheetDrawing {
    Layout(SheetLayout),
    /// Shown in place of the drawing when the sheet cannot be rendered at all
    InlineError(ViewError),
}

impl SheetDrawing {
    /// The rendered document, if this is an actual drawing.
    pub fn document(&self) -> Option<&Document> {
        match self {
            SheetDrawing::Layout(layout) => Some(&layout.document),
            SheetDrawing::InlineError(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ViewError> {
        match self {
            SheetDrawing::Layout(_) => None,
            SheetDrawing::InlineError(e) => Some(e),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SheetLayout {
    pub sheet_id: String,
    pub width: f64,
    pub height: f64,
    pub document: Document,
    /// Outlines that made it into the drawing, in sheet coordinates
    pub outlines: Vec<PositionedOutline>,
    pub skipped: Vec<SkippedPlacement>,
}

impl SheetLayout {
    /// Top-left corner of an outline on the output surface (top-left origin, Y-down).
    pub fn surface_top_left(&self, outline: &PositionedOutline) -> Point {
        to_surface(Point(outline.bbox.x_min, outline.bbox.y_max), self.height)
    }
}

/// Maps a point in sheet coordinates (bottom-left origin, Y-up) onto the output surface.
pub fn to_surface(Point(x, y): Point, sheet_height: f64) -> Point {
    Point(x, sheet_height - y)
}

/// Keeps only the last `suffix_len` characters of long identifiers, prefixed with an ellipsis.
pub fn abbreviate_label(label: &str, suffix_len: usize) -> Cow<'_, str> {
    let n_chars = label.chars().count();
    if n_chars <= suffix_len + 3 {
        return Cow::Borrowed(label);
    }
    let suffix: String = label.chars().skip(n_chars - suffix_len).collect();
    Cow::Owned(format!("...{suffix}"))
}

/// Renders a sheet and the placements on it.
///
/// All content lives in a single group which is flipped vertically, so every element is authored
/// in sheet coordinates. Placements which cannot be positioned are skipped, never aborting the sheet.
/// A sheet without finite, positive dimensions yields an inline error instead of a drawing.
pub fn render_sheet(
    sheet: &SheetDefinition,
    placements: &[&Placement],
    options: &SvgDrawOptions,
) -> SheetDrawing {
    if !sheet.has_valid_dimensions() {
        warn!(
            "sheet {} has invalid dimensions: {} x {}",
            sheet.id, sheet.width, sheet.height
        );
        return SheetDrawing::InlineError(ViewError::InvalidInput {
            sheet_id: sheet.id.clone(),
            reason: format!(
                "dimensions must be positive numbers, got {} x {}",
                sheet.width, sheet.height
            ),
        });
    }

    let (width, height) = (sheet.width, sheet.height);
    let theme = &options.theme;

    let sheet_rect = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("class", "svg-sheet")
        .add(Title::new(format!("sheet {}: {width} x {height}", sheet.id)));

    let mut flip_group = Group::new()
        .set("id", format!("sheet_{}", sheet.id))
        .set("transform", format!("translate(0, {height}) scale(1, -1)"))
        .add(sheet_rect);

    let mut outlines = vec![];
    let mut skipped = vec![];

    for placement in placements {
        let outline = match position_outline(placement) {
            Ok(outline) => outline,
            Err(reason) => {
                warn!(
                    "skipping placement of part {} on sheet {}: {reason}",
                    placement.part_id, sheet.id
                );
                skipped.push(SkippedPlacement {
                    part_id: placement.part_id.clone(),
                    reason,
                });
                continue;
            }
        };

        flip_group = flip_group.add(
            svg_util::data_to_path(
                outline.path.clone(),
                "svg-part-profile",
                &[
                    ("fill", &*format!("{}", theme.part_fill)),
                    ("stroke", &*format!("{}", theme.part_stroke)),
                    ("stroke-width", &*format!("{}", theme.part_stroke_width)),
                    ("opacity", &*format!("{}", theme.part_opacity)),
                ],
            )
            .add(Title::new(outline.tooltip.clone())),
        );

        if options.precise_outline {
            if let Some(precise) = placement.precise_outline.as_deref().filter(|d| !d.is_empty()) {
                debug!("precise outline overlay for part {}", placement.part_id);
                flip_group = flip_group.add(svg_util::data_to_path(
                    precise.to_owned(),
                    "svg-precise-outline",
                    &[
                        ("fill", "none"),
                        ("stroke", &*format!("{}", theme.overlay_stroke)),
                        ("stroke-width", &*format!("{}", theme.overlay_stroke_width)),
                    ],
                ));
            }
        }

        if options.labels {
            let Point(lx, ly) = outline.label_anchor;
            let content = abbreviate_label(&placement.part_id, options.label_suffix_len);
            let label = Text::new(content.into_owned())
                .set("x", lx)
                .set("y", ly)
                .set("transform", format!("translate(0 {}) scale(1 -1)", 2.0 * ly))
                .set("class", "svg-part-label")
                .add(Title::new(outline.tooltip.clone()));
            flip_group = flip_group.add(label);
        }

        outlines.push(outline);
    }

    let document = Document::new()
        .set("viewBox", format!("0 0 {width} {height}"))
        .set("preserveAspectRatio", "xMidYMid meet")
        .set("width", "100%")
        .set("height", "100%")
        .set(
            "style",
            format!(
                "max-width:{width}px;max-height:{}px;display:block;margin:auto",
                options.max_display_height
            ),
        )
        .add(Style::new(theme.stylesheet()))
        .add(flip_group);

    debug!(
        "rendered sheet {}: {} outlines, {} skipped",
        sheet.id,
        outlines.len(),
        skipped.len()
    );

    SheetDrawing::Layout(SheetLayout {
        sheet_id: sheet.id.clone(),
        width,
        height,
        document,
        outlines,
        skipped,
    })
}
