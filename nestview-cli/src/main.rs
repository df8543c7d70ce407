use anyhow::Result;
use clap::Parser as ClapParser;
use log::info;
use nestview::io::import;
use nestview_cli::io;
use nestview_cli::io::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = io::read_config(args.config_file.as_deref())?;
    info!("Successfully parsed NestViewConfig: {config:?}");

    let ext_result = io::read_nesting_result(&args.input_file)?;
    let ext_sheets = match &args.sheets_file {
        Some(path) => Some(io::read_sheet_definitions(path)?),
        None => None,
    };
    let result = import::import_nesting_result(&ext_result, ext_sheets.as_deref())?;

    nestview_cli::batch::render_all(result, &config, &args.output_folder)?;

    Ok(())
}
