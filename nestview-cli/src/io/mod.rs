use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{Level, LevelFilter, info, log, warn};
use nestview::export::SvgExport;
use nestview::io::ext_repr::{ExtNestingResult, ExtSheetDefinition};
use nestview::summary::Summary;

use crate::EPOCH;
use crate::config::NestViewConfig;

pub mod cli;

pub fn read_nesting_result(path: &Path) -> Result<ExtNestingResult> {
    let file = File::open(path)
        .with_context(|| format!("could not open nesting result file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse nesting result file: {}", path.display()))
}

pub fn read_sheet_definitions(path: &Path) -> Result<Vec<ExtSheetDefinition>> {
    let file = File::open(path)
        .with_context(|| format!("could not open sheets file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse sheets file: {}", path.display()))
}

/// Reads the config file, or falls back to the default config if none is given.
pub fn read_config(path: Option<&Path>) -> Result<NestViewConfig> {
    match path {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            Ok(NestViewConfig::default())
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")
        }
    }
}

pub fn write_svg_export(export: &SvgExport, folder: &Path) -> Result<PathBuf> {
    let path = folder.join(&export.file_name);
    fs::write(&path, export.as_bytes())
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("svg written to {:?}", canonical(&path));
    Ok(path)
}

pub fn write_summary(summary: &Summary, path: &Path) -> Result<()> {
    fs::write(path, summary.to_string())
        .with_context(|| format!("could not write summary file: {}", path.display()))?;
    info!("summary written to {:?}", canonical(path));
    Ok(())
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    log!(Level::Info, "time: {}", jiff::Timestamp::now());
    Ok(())
}
