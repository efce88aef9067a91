//! Solutions organized by year

pub mod year_2025;

#[cfg(test)]
pub(crate) mod test_support {
    use aoc_solver::{Container, FromContainer, Solution, SolutionContext, StaticFetcher};
    use std::sync::Arc;

    /// Build a solution over `input` and solve both parts
    pub fn solve<S: Solution + FromContainer>(input: &str) -> (i64, i64) {
        let container = Container::new()
            .with_fetcher(Arc::new(StaticFetcher::new(input)))
            .with_configurator(Arc::new(SolutionContext::new()));
        let mut solution = S::from_container(&container).unwrap();
        solution.initialize().unwrap();
        (solution.solve_a().unwrap(), solution.solve_b().unwrap())
    }
}
