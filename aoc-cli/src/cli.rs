//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solution runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solutions", version)]
pub struct Args {
    /// Puzzle year
    #[arg(required_unless_present = "list")]
    pub year: Option<i32>,

    /// Puzzle day
    #[arg(
        required_unless_present = "list",
        value_parser = clap::value_parser!(i32).range(1..=25)
    )]
    pub day: Option<i32>,

    /// List every registered solution and exit
    #[arg(short, long)]
    pub list: bool,

    /// Cache directory for puzzle inputs
    #[arg(long, default_value = "~/.cache/aoc_solver")]
    pub cache_dir: PathBuf,

    /// Directory scanned for solution modules (defaults to the executable's directory)
    #[arg(long)]
    pub solutions_dir: Option<PathBuf>,

    /// Glob matching solution module file names
    #[arg(long, default_value = aoc_solver::DEFAULT_FILE_PATTERN)]
    pub solutions_pattern: String,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level used when AOC_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
