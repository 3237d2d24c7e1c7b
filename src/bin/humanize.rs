//! Text Humanizer command-line entry point
//!
//! Reads text from a file or stdin, humanizes it and writes the result to
//! stdout. Logging goes to stderr and is controlled with `RUST_LOG`.
//!
//! # Examples
//!
//! ```text
//! echo "Furthermore, it works." | humanize --style casual --intensity 8
//! humanize --input draft.txt --history history.jsonl --stats
//! ```

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use text_humanizer::history::{append_jsonl, format_stats};
use text_humanizer::{load_config_file, Humanizer, HumanizerConfig, Intensity};

#[derive(Debug, Parser)]
#[command(name = "humanize", version, about = "Rewrite text so it reads more naturally")]
struct Args {
    /// Communication style (Professional, Casual, Technical or a custom label)
    #[arg(short, long, default_value = "Professional")]
    style: String,

    /// Transformation intensity from 1 to 10
    #[arg(short, long, default_value_t = 5)]
    intensity: i64,

    /// Read input from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append the transformation record to this JSONL file
    #[arg(long)]
    history: Option<PathBuf>,

    /// Print summary statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Seed the random source for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("humanize: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let intensity = Intensity::new(args.intensity)?;

    let config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => HumanizerConfig::default(),
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut humanizer = Humanizer::with_config_and_rng(config, rng)?;

    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let text = strip_trailing_newline(&input);

    if text.is_empty() {
        log::warn!("No input text to transform");
    }

    let output = humanizer.humanize(text, &args.style, intensity);
    println!("{}", output);

    if let Some(path) = &args.history {
        append_jsonl(humanizer.history(), path)?;
    }

    if args.stats {
        eprintln!("{}", format_stats(&humanizer.history().stats()));
    }

    Ok(())
}

/// Drops the single line terminator that files and piped input end with.
fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
