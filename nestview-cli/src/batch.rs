use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use nestview::entities::NestingResult;
use nestview::export::SvgExport;
use nestview::pagination::PaginationController;

use crate::config::NestViewConfig;
use crate::io;

pub const SUMMARY_FILE_NAME: &str = "summary.txt";

/// Walks every used sheet of the installed result and exports the ones that render.
///
/// Sheets which cannot be exported (e.g. an unresolved sheet definition) are skipped with a warning.
pub fn export_all_sheets(controller: &mut PaginationController) -> Vec<SvgExport> {
    let mut exports = vec![];
    for i in 0..controller.sheet_count() {
        controller.goto(i);
        match controller.export() {
            Ok(export) => exports.push(export),
            Err(e) => warn!(
                "sheet {} ({}) not exported: {e}",
                i + 1,
                controller.current_sheet_id().unwrap_or("?")
            ),
        }
    }
    exports
}

/// Installs `result`, writes every renderable sheet and the summary to `output_folder`.
/// Returns the paths of the written files.
pub fn render_all(
    result: NestingResult,
    config: &NestViewConfig,
    output_folder: &Path,
) -> Result<Vec<PathBuf>> {
    if !output_folder.exists() {
        fs::create_dir_all(output_folder).with_context(|| {
            format!("could not create output folder: {}", output_folder.display())
        })?;
    }

    let mut controller =
        PaginationController::new(config.svg_draw_options, config.file_prefix.clone());
    controller.install(result);

    let mut written = export_all_sheets(&mut controller)
        .iter()
        .map(|export| io::write_svg_export(export, output_folder))
        .collect::<Result<Vec<PathBuf>>>()?;
    let n_written = written.len();

    if let Some(summary) = &controller.view().summary {
        let summary_path = output_folder.join(SUMMARY_FILE_NAME);
        io::write_summary(summary, &summary_path)?;
        written.push(summary_path);
    }

    info!(
        "{} of {} sheets written to {}",
        n_written,
        controller.sheet_count(),
        output_folder.display()
    );
    Ok(written)
}
