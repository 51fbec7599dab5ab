use crate::cli::args::Cli;
use crate::processors::{FeatureConverter, RangeChecker};
use crate::readers::StationReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::GeoJsonWriter;
use anyhow::{Context, Result};
use geojson::FeatureCollection;
use std::io;
use std::path::Path;
use tracing::{info, Level};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let collection = convert_file(&cli)?;
    GeoJsonWriter::new()
        .write_collection(collection, stdout.lock())
        .context("Failed to write GeoJSON to standard output")?;

    Ok(())
}

/// Read, check and convert the station file named on the command line.
pub fn convert_file(cli: &Cli) -> Result<FeatureCollection> {
    let progress = ProgressReporter::new_spinner("Reading stations...", cli.quiet);
    let collection = convert_path(
        &cli.input_file,
        !cli.strict,
        cli.legacy_state_properties,
        Some(&progress),
    );
    match &collection {
        Ok(c) => progress.finish_with_message(&format!(
            "Converted {} stations from {} lines",
            c.features.len(),
            progress.position()
        )),
        Err(_) => progress.finish_with_message("Conversion failed"),
    }
    collection
}

fn convert_path(
    path: &Path,
    skip_malformed: bool,
    legacy_state_properties: bool,
    progress: Option<&ProgressReporter>,
) -> Result<FeatureCollection> {
    info!("Input file: {}", path.display());

    let report = StationReader::with_skip_malformed(skip_malformed)
        .read_stations(path, progress)
        .with_context(|| format!("Failed to read station file {}", path.display()))?;
    info!("{}", report.summary());

    let checker = RangeChecker::new();
    let range_report = checker.check(&report.stations);
    info!("{}", checker.generate_summary(&range_report));

    let converter =
        FeatureConverter::new().with_legacy_state_properties(legacy_state_properties);
    Ok(converter.to_feature_collection(&report.stations))
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .ok();
}
