use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dxf2gcode::{convert_file, init_logging, Config, MeasurementSystem, BUILD_DATE, VERSION};
use tracing::info;

/// Compile a DXF drawing into a G-code program.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input DXF file
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the XY feed rate
    #[arg(long)]
    feedrate: Option<f64>,

    /// Override the program units (metric/mm or imperial/in)
    #[arg(long)]
    units: Option<MeasurementSystem>,

    /// Reorder entities to shorten travel between them
    #[arg(long)]
    optimize_order: bool,

    /// Skip entities that cannot be emitted instead of failing
    #[arg(long)]
    skip_unsupported: bool,

    /// Also convert entities inside block definitions
    #[arg(long)]
    include_blocks: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();
    info!(version = VERSION, build = BUILD_DATE, "dxf2gcode");

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(feedrate) = args.feedrate {
        config.machine.xy_feedrate = feedrate;
    }
    if let Some(units) = args.units {
        config.output.units = units;
    }
    config.output.optimize_order |= args.optimize_order;
    config.output.skip_unsupported |= args.skip_unsupported;

    info!(
        feedrate = config.machine.xy_feedrate,
        units = config.output.units.label(),
        "machine settings"
    );
    let program = convert_file(&args.input, config, args.include_blocks)?;
    let gcode = program.to_gcode();

    match &args.output {
        Some(path) => {
            fs::write(path, &gcode)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} ({} entities, {} skipped)",
                path.display(),
                program.emitted(),
                program.skipped()
            );
        }
        None => print!("{}", gcode),
    }

    Ok(())
}
