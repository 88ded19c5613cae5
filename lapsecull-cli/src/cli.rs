// lapsecull-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Lapsecull: timelapse frame curation tool",
    long_about = "Selects a deterministic subset of timelapse frames by daylight, \
                  weekday, and per-day sampling density via the lapsecull-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Selects frames from a candidate filename list
    Select(SelectArgs),
    /// Reports whether the sun is currently out for a city
    Daylight(DaylightArgs),
}

#[derive(Parser, Debug)]
pub struct SelectArgs {
    /// File containing candidate filenames, one per line (defaults to stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Baseline sample rate: keep every Nth frame per day
    #[arg(long, value_name = "N", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub sample: u32,

    /// Comma-separated date ranges with denser sampling: YYYYMMDD-YYYYMMDD:RATE,...
    #[arg(long, value_name = "RANGES")]
    pub supersample_ranges: Option<String>,

    /// Keep frames captured on weekends (excluded by default)
    #[arg(long)]
    pub keep_weekends: bool,

    /// City name for daylight calculations
    #[arg(long, value_name = "CITY", default_value = lapsecull_core::DEFAULT_CITY)]
    pub city: String,
}

#[derive(Parser, Debug)]
pub struct DaylightArgs {
    /// City name for daylight calculations
    #[arg(long, value_name = "CITY", default_value = lapsecull_core::DEFAULT_CITY)]
    pub city: String,

    /// Minutes of twilight buffer around dawn and dusk
    #[arg(long, value_name = "MINUTES", default_value_t = 15)]
    pub buffer_minutes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select_defaults() {
        let cli = Cli::parse_from(["lapsecull", "select"]);
        match cli.command {
            Commands::Select(args) => {
                assert!(args.input.is_none());
                assert_eq!(args.sample, 1);
                assert!(args.supersample_ranges.is_none());
                assert!(!args.keep_weekends);
                assert_eq!(args.city, "Seattle");
            }
            _ => panic!("expected select command"),
        }
    }

    #[test]
    fn test_parse_select_full_flags() {
        let cli = Cli::parse_from([
            "lapsecull",
            "select",
            "frames.txt",
            "--sample",
            "4",
            "--supersample-ranges",
            "20240610-20240620:4",
            "--keep-weekends",
            "--city",
            "Oslo",
        ]);
        match cli.command {
            Commands::Select(args) => {
                assert_eq!(args.input, Some(PathBuf::from("frames.txt")));
                assert_eq!(args.sample, 4);
                assert_eq!(
                    args.supersample_ranges.as_deref(),
                    Some("20240610-20240620:4")
                );
                assert!(args.keep_weekends);
                assert_eq!(args.city, "Oslo");
            }
            _ => panic!("expected select command"),
        }
    }

    #[test]
    fn test_parse_select_rejects_zero_sample() {
        assert!(Cli::try_parse_from(["lapsecull", "select", "--sample", "0"]).is_err());
    }

    #[test]
    fn test_parse_daylight_defaults() {
        let cli = Cli::parse_from(["lapsecull", "daylight"]);
        match cli.command {
            Commands::Daylight(args) => {
                assert_eq!(args.city, "Seattle");
                assert_eq!(args.buffer_minutes, 15);
            }
            _ => panic!("expected daylight command"),
        }
    }
}
