//! Example demonstrating solution discovery and the factory
//!
//! Declares this example as a solution module, discovers the solutions it
//! links, and creates one through the dependency container with fixed input.
//!
//! Run with: cargo run --example discovery

use aoc_solver::{
    AocSolution, BaseSolution, Container, LinkedModules, Solution, SolutionBase, SolutionContext,
    SolutionDiscovery, SolutionFactory, SolveError, StaticFetcher,
};
use std::sync::Arc;

aoc_solver::solution_module!();

// ============================================================================
// Day 1: year and day are literals, so the solution is registered
// ============================================================================

#[derive(AocSolution)]
#[aoc(year = 2023, day = 1)]
pub struct LineSums {
    #[base]
    base: BaseSolution,
}

impl Solution for LineSums {
    fn solve_a(&self) -> Result<i64, SolveError> {
        self.data()?
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|_| SolveError::InvalidInput(format!("Expected integer: {}", line)))
            })
            .sum()
    }

    fn solve_b(&self) -> Result<i64, SolveError> {
        Ok(self.data()?.lines().count() as i64)
    }
}

// ============================================================================
// Day 2: the day is computed, so discovery reports it as ineligible
// ============================================================================

const OFFSET: i32 = 1;

#[derive(AocSolution)]
#[aoc(year = 2023, day = 1 + OFFSET)]
pub struct ComputedDay {
    #[base]
    base: BaseSolution,
}

impl Solution for ComputedDay {
    fn solve_a(&self) -> Result<i64, SolveError> {
        Ok(0)
    }

    fn solve_b(&self) -> Result<i64, SolveError> {
        Ok(0)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let linked = LinkedModules::collect();
    let root = linked
        .get(env!("CARGO_CRATE_NAME"))
        .ok_or("example module is not linked")?;

    let discovery = SolutionDiscovery::new(&linked).no_solutions_dir().run(root)?;

    println!("=== Registered ===");
    for descriptor in discovery.registry.all() {
        println!("  {} -> {}", descriptor.key(), descriptor.implementation().name);
    }
    println!("=== Ineligible ===");
    for name in &discovery.report.ineligible {
        println!("  {}", name);
    }

    let context = Arc::new(SolutionContext::new());
    let container = Container::new()
        .with_fetcher(Arc::new(StaticFetcher::new("1\n2\n3\n")))
        .with_configurator(context);

    let factory = SolutionFactory::new(&discovery.registry);
    let Some(mut solution) = factory.create(2023, 1, &container)? else {
        return Err("2023 day 1 is not registered".into());
    };
    solution.initialize()?;
    println!("Part A: {}", solution.solve_a()?);
    println!("Part B: {}", solution.solve_b()?);

    assert!(factory.create(2023, 2, &container)?.is_none());
    Ok(())
}
