// lapsecull-cli/src/main.rs
//
// Command-line interface for the lapsecull timelapse curation tool.
//
// Responsibilities:
// - Parsing user-provided arguments (see cli.rs).
// - Initializing logging (env_logger, RUST_LOG, default "info").
// - Reading the candidate filename list from a file or stdin and
//   presenting it to the core engine in sorted order.
// - Invoking the core selection logic (lapsecull_core::select_frames).
// - The `daylight` gate for capture scheduling: exit 0 when the sun is
//   out, 2 when it is not, so cron jobs can branch on it.
// - Mapping fatal errors to a red stderr message and exit code 1.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

use anyhow::Context;
use clap::Parser;
use log::info;
use owo_colors::OwoColorize;

use lapsecull_core::{CoreConfig, DaylightOracle, select_frames};

mod cli;

use cli::{Cli, Commands, DaylightArgs, SelectArgs};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Select(args) => run_select(args),
        Commands::Daylight(args) => run_daylight(args),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            process::exit(1);
        }
    }
}

/// Reads candidate filenames, runs the selection engine, and prints the
/// selected frames one per line.
fn run_select(args: SelectArgs) -> anyhow::Result<i32> {
    let mut lines = read_candidate_lines(&args)?;
    // The core engine expects its input sorted; the fixed timestamp layout
    // makes lexicographic order chronological.
    lines.sort_unstable();

    let config = CoreConfig {
        sample_rate: args.sample,
        skip_weekends: !args.keep_weekends,
        city: args.city,
        supersample_ranges: args.supersample_ranges,
        ..CoreConfig::default()
    };

    let selected = select_frames(lines, &config)?;
    info!("selected {} frame(s)", selected.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for filename in &selected {
        writeln!(out, "{filename}")?;
    }
    Ok(0)
}

/// Reports whether the sun is currently out for the configured city.
fn run_daylight(args: DaylightArgs) -> anyhow::Result<i32> {
    let oracle = DaylightOracle::for_city(&args.city)?;
    let now = chrono::Utc::now().with_timezone(&oracle.timezone());
    let (dawn, dusk) = oracle.window(now.date_naive())?;
    println!(
        "{}: dawn {} dusk {}",
        oracle.location(),
        dawn.format("%H:%M:%S %Z"),
        dusk.format("%H:%M:%S %Z")
    );

    if oracle.sun_is_out(args.buffer_minutes)? {
        println!("The sun is out");
        Ok(0)
    } else {
        println!("The sun is not out");
        Ok(2)
    }
}

fn read_candidate_lines(args: &SelectArgs) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file '{}'", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read candidate list")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}
