//! AOC CLI - Command-line interface for running Advent of Code solutions

mod cache;
mod cli;
mod config;
mod error;
mod fetcher;
mod logging;
mod output;

// Import aoc-solutions to link the solution plugins
use aoc_solutions as _;

use aoc_http_client::AocClient;
use aoc_solver::{
    Container, LinkedModules, Solution, SolutionContext, SolutionDiscovery, SolutionFactory,
    SolutionRegistry,
};
use cache::InputCache;
use clap::Parser;
use cli::Args;
use config::{Command, Config};
use error::CliError;
use fetcher::CachingFetcher;
use output::{OutputFormatter, elapsed_since};
use std::sync::Arc;
use std::time::Instant;

aoc_solver::solution_module!("aoc_solutions");

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    logging::init_logging(&config.log_level)?;

    let registry = discover(&config)?;
    let formatter = OutputFormatter::new(config.quiet);

    match config.command {
        Command::List => {
            formatter.print_list(registry);
            Ok(())
        }
        Command::Solve { year, day } => solve(registry, config, &formatter, year, day),
    }
}

/// Discover the linked solutions and install them as the process-wide registry
fn discover(config: &Config) -> Result<&'static SolutionRegistry, CliError> {
    let linked = LinkedModules::collect();
    let root = linked.get(env!("CARGO_CRATE_NAME")).ok_or_else(|| {
        CliError::Config("the executable's own solution module is not linked".to_string())
    })?;

    let mut discovery = SolutionDiscovery::new(&linked).file_pattern(config.solutions_pattern.as_str());
    if let Some(dir) = &config.solutions_dir {
        discovery = discovery.solutions_dir(dir);
    }
    let discovered = discovery.run(root)?;
    if !discovered.report.ineligible.is_empty() {
        tracing::debug!(
            solutions = ?discovered.report.ineligible,
            "solutions without a constant year and day were not registered"
        );
    }

    Ok(discovered.registry.install()?)
}

fn solve(
    registry: &'static SolutionRegistry,
    config: Config,
    formatter: &OutputFormatter,
    year: i32,
    day: i32,
) -> Result<(), CliError> {
    let context = Arc::new(SolutionContext::new());
    let fetcher = CachingFetcher::new(
        Arc::clone(&context),
        InputCache::new(config.cache_dir),
        AocClient::new()?,
        config.session,
        config::prompt_session,
    );
    let container = Container::new()
        .with_fetcher(Arc::new(fetcher))
        .with_configurator(context);

    let mut solution = SolutionFactory::new(registry)
        .create(year, day, &container)?
        .ok_or(CliError::NotFound { year, day })?;

    let start = Instant::now();
    solution.initialize()?;
    formatter.print_input(year, day, elapsed_since(start));

    let failed = [
        run_part(solution.as_ref(), formatter, 'A', |s| s.solve_a()),
        run_part(solution.as_ref(), formatter, 'B', |s| s.solve_b()),
    ]
    .into_iter()
    .filter(|solved| !solved)
    .count();

    match failed {
        0 => Ok(()),
        failed => Err(CliError::PartsFailed(failed)),
    }
}

/// Run and print one part; returns whether it produced an answer
fn run_part(
    solution: &dyn Solution,
    formatter: &OutputFormatter,
    part: char,
    solve: impl FnOnce(&dyn Solution) -> Result<i64, aoc_solver::SolveError>,
) -> bool {
    let start = Instant::now();
    let answer = solve(solution);
    let duration = elapsed_since(start);
    formatter.print_part(solution.year(), solution.day(), part, &answer, duration);
    answer.is_ok()
}
