use log::info;

use crate::error::ViewError;
use crate::render::SheetDrawing;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" standalone=\"no\"?>\r\n";
pub const DEFAULT_FILE_PREFIX: &str = "nesting_sheet";

/// A standalone SVG document, ready to be written to disk or downloaded.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgExport {
    pub file_name: String,
    pub content: String,
}

impl SvgExport {
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// Serializes the currently rendered drawing of the sheet at (0-based) `index`.
///
/// Fails with [`ViewError::ExportWithNoDrawing`] when nothing is rendered,
/// in which case no content is produced at all.
pub fn export_svg(
    drawing: Option<&SheetDrawing>,
    index: usize,
    prefix: &str,
) -> Result<SvgExport, ViewError> {
    let document = drawing
        .and_then(|d| d.document())
        .ok_or(ViewError::ExportWithNoDrawing)?;

    let serialized = ensure_namespace(&document.to_string());
    let export = SvgExport {
        file_name: export_file_name(prefix, index),
        content: format!("{XML_DECLARATION}{serialized}"),
    };
    info!(
        "exported sheet {} as {} ({} bytes)",
        index + 1,
        export.file_name,
        export.content.len()
    );
    Ok(export)
}

/// Injects the SVG namespace declaration into the root `<svg>` start tag if it lacks one.
///
/// Only the root start tag is inspected, text further down the document is never taken
/// for a declaration.
pub fn ensure_namespace(svg: &str) -> String {
    let Some(root) = svg.find("<svg") else {
        return svg.to_owned();
    };
    let tag_end = svg[root..].find('>').map_or(svg.len(), |i| root + i);
    let declaration = format!("xmlns=\"{SVG_NAMESPACE}\"");
    match svg[root..tag_end].contains(&declaration) {
        true => svg.to_owned(),
        false => {
            let insert_at = root + "<svg".len();
            format!("{} {declaration}{}", &svg[..insert_at], &svg[insert_at..])
        }
    }
}

/// File name for the sheet at (0-based) `index`, numbered from 1.
pub fn export_file_name(prefix: &str, index: usize) -> String {
    format!("{prefix}_{}.svg", index + 1)
}
