use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ghcn-geojson")]
#[command(about = "Convert ghcnd-stations.txt to a GeoJSON FeatureCollection")]
#[command(
    long_about = "Convert the GHCN-Daily station list to GeoJSON. The station file can be \
downloaded from https://www.ncei.noaa.gov/pub/data/ghcn/daily/ghcnd-stations.txt"
)]
#[command(version)]
pub struct Cli {
    #[arg(help = "Station file to convert (ghcnd-stations.txt)")]
    pub input_file: PathBuf,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Fail on the first line that is not 85 characters long")]
    pub strict: bool,

    #[arg(
        long,
        help = "Emit only {state} as properties for stations that have a state"
    )]
    pub legacy_state_properties: bool,

    #[arg(short, long, help = "Hide the progress spinner")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_input_file() {
        let cli = Cli::try_parse_from(["ghcn-geojson", "ghcnd-stations.txt"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("ghcnd-stations.txt"));
        assert!(!cli.verbose);
        assert!(!cli.strict);
        assert!(!cli.legacy_state_properties);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "ghcn-geojson",
            "--strict",
            "--legacy-state-properties",
            "-v",
            "-q",
            "stations.txt",
        ])
        .unwrap();
        assert!(cli.verbose && cli.strict && cli.legacy_state_properties && cli.quiet);
    }

    #[test]
    fn test_input_file_is_required() {
        assert!(Cli::try_parse_from(["ghcn-geojson"]).is_err());
    }
}
