mod assemble;
mod error;
mod intake;
mod partext;
mod pipeline;
mod pull_date;
mod rewrite;
mod rules;
mod settings;
mod utils;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use error::PullError;
use pipeline::Job;
use pull_date::{long_date, PullDate};
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "pull",
    version,
    about = "Turn the daily Federal Register SGML feed into annotated REGTEXT for e-CFR"
)]
struct Cli {
    /// Extra settings file, read after ./pull.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full run for today using the configured directories
    Set,
    /// Full run: combine fragments, then normalize and annotate
    Auto {
        /// Directory holding the feed fragments
        from: PathBuf,
        /// Output directory
        to: PathBuf,
        /// Pull date as MMDDYY (default: today)
        #[arg(short, long, value_parser = PullDate::parse)]
        date: Option<PullDate>,
    },
    /// Only combine the day's fragments into one file
    Move {
        /// Directory holding the feed fragments
        from: PathBuf,
        /// Output directory
        to: PathBuf,
        /// Pull date as MMDDYY (default: today)
        #[arg(short, long, value_parser = PullDate::parse)]
        date: Option<PullDate>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Set => {
            let from = settings
                .from_dir
                .clone()
                .context("from_dir is not configured (pull.toml or PULL_FROM_DIR)")?;
            let to = settings
                .to_dir
                .clone()
                .context("to_dir is not configured (pull.toml or PULL_TO_DIR)")?;
            auto(&from, &to, PullDate::today(), &settings)
        }
        Commands::Auto { from, to, date } => {
            auto(&from, &to, date.unwrap_or_else(PullDate::today), &settings)
        }
        Commands::Move { from, to, date } => {
            check_dirs(&from, &to)?;
            let pull = date.unwrap_or_else(PullDate::today);
            let combined = intake::move_files(&from, &to, pull)?;
            println!("*** Files Moved! Combined file is located here: {} ***", combined.display());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn auto(from: &Path, to: &Path, pull: PullDate, settings: &Settings) -> Result<()> {
    check_dirs(from, to)?;
    info!(date = %long_date(pull.date()), from = %from.display(), to = %to.display(), "starting pull");
    let outcome = pipeline::run(&Job {
        from_dir: from.to_path_buf(),
        to_dir: to.to_path_buf(),
        pull,
        keep_intermediate: settings.keep_intermediate,
    })?;
    println!("Combined fragments: {}", outcome.combined.display());
    if let Some(partext) = &outcome.intermediate {
        println!("Intermediate: {}", partext.display());
    }
    println!(
        "*** Auto Processing Completed! File is located here: {} ***",
        outcome.output.display()
    );
    Ok(())
}

fn check_dirs(from: &Path, to: &Path) -> Result<(), PullError> {
    for dir in [from, to] {
        if !dir.is_dir() {
            return Err(PullError::MissingDirectory(dir.to_path_buf()));
        }
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
