//! Tripline - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tripline::config::loader::{MAX_UNITS_PER_ROW, MIN_UNITS_PER_ROW};

/// Tripline - terminal itinerary timeline editor
#[derive(Parser, Debug)]
#[command(name = "tripline")]
#[command(version)]
#[command(about = "Terminal itinerary timeline with reorderable segments")]
pub struct Args {
    /// Path to an itinerary JSON snapshot (`-` reads stdin; built-in sample if omitted)
    pub file: Option<PathBuf>,

    /// Open the timeline read-only (editing keys and the menu do nothing)
    #[arg(long)]
    pub read_only: bool,

    /// Layout units per terminal row
    #[arg(long, value_parser = clap::value_parser!(u16).range(i64::from(MIN_UNITS_PER_ROW)..=i64::from(MAX_UNITS_PER_ROW)))]
    pub units_per_row: Option<u16>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tripline::config::load_config_with_precedence(args.config.clone())?;
        let merged = tripline::config::merge_config(config_file);
        let with_env = tripline::config::apply_env_overrides(merged);
        tripline::config::apply_cli_overrides(with_env, args.read_only, args.units_per_row)
    };

    tripline::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let itinerary = tripline::source::detect_input_source(args.file.clone())?.load()?;
    let colors = tripline::view::ColorConfig::from_env_and_args(args.no_color);

    tripline::view::run_with_itinerary(itinerary, &config, colors)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["tripline", "--help"]);
        // Help returns Err with DisplayHelp, which is success
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let err = Args::try_parse_from(["tripline", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["tripline"]);
        assert_eq!(args.file, None);
        assert!(!args.read_only);
        assert_eq!(args.units_per_row, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["tripline", "trip.json"]);
        assert_eq!(args.file, Some(PathBuf::from("trip.json")));
    }

    #[test]
    fn test_dash_is_accepted_as_file() {
        let args = Args::parse_from(["tripline", "-"]);
        assert_eq!(args.file, Some(PathBuf::from("-")));
    }

    #[test]
    fn test_read_only_flag() {
        let args = Args::parse_from(["tripline", "--read-only"]);
        assert!(args.read_only);
    }

    #[test]
    fn test_units_per_row_flag() {
        let args = Args::parse_from(["tripline", "--units-per-row", "4"]);
        assert_eq!(args.units_per_row, Some(4));
    }

    #[test]
    fn test_units_per_row_rejects_zero() {
        let err = Args::try_parse_from(["tripline", "--units-per-row", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_units_per_row_rejects_too_large() {
        let result = Args::try_parse_from(["tripline", "--units-per-row", "65"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_flag() {
        let args = Args::parse_from(["tripline", "--config", "/tmp/tripline.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/tripline.toml")));
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["tripline", "--no-color"]);
        assert!(args.no_color);
    }
}
