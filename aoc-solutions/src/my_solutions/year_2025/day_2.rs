use anyhow::{Context, anyhow};
use aoc_solver::{AocSolution, BaseSolution, Solution, SolutionBase, SolveError};
use std::ops::RangeInclusive;

#[derive(AocSolution)]
#[aoc(year = 2025, day = 2)]
pub struct Solver {
    #[base]
    base: BaseSolution,
}

fn parse(input: &str) -> Result<Vec<RangeInclusive<u64>>, SolveError> {
    input.trim()
        .split(',')
        .filter(|range| !range.trim().is_empty())
        .map(|range| -> Result<RangeInclusive<u64>, anyhow::Error> {
            let (lo, hi) = range.trim()
                .split_once('-')
                .ok_or_else(|| anyhow!("range `{range}` is missing '-'"))?;
            let lo = lo.parse::<u64>().with_context(|| format!("invalid range start `{lo}`"))?;
            let hi = hi.parse::<u64>().with_context(|| format!("invalid range end `{hi}`"))?;
            Ok(lo..=hi)
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SolveError::InvalidInput(format!("{e:#}")))
}

/// The ID is a digit block repeated exactly twice
fn repeated_twice(id: &[u8]) -> bool {
    let (first, second) = id.split_at(id.len() / 2);
    id.len() % 2 == 0 && first == second
}

/// The ID is a digit block repeated at least twice
fn repeated_any(id: &[u8]) -> bool {
    (1..=id.len() / 2)
        .filter(|block| id.len() % block == 0)
        .any(|block| id.chunks(block).all(|chunk| chunk == &id[..block]))
}

fn sum_matching(ranges: &[RangeInclusive<u64>], predicate: fn(&[u8]) -> bool) -> i64 {
    ranges.iter()
        .flat_map(|range| range.clone())
        .filter(|id| predicate(id.to_string().as_bytes()))
        .map(|id| id as i64)
        .sum()
}

impl Solution for Solver {
    fn solve_a(&self) -> Result<i64, SolveError> {
        Ok(sum_matching(&parse(self.data()?)?, repeated_twice))
    }

    fn solve_b(&self) -> Result<i64, SolveError> {
        Ok(sum_matching(&parse(self.data()?)?, repeated_any))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::test_support::solve;
    use proptest::prelude::*;

    const SAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124";

    #[test]
    fn test_sample() {
        assert_eq!(solve::<Solver>(SAMPLE), (1227775554, 4174379265));
    }

    #[test]
    fn test_repetition_rules() {
        assert!(repeated_twice(b"6464"));
        assert!(!repeated_twice(b"111"));
        assert!(repeated_any(b"111"));
        assert!(repeated_any(b"121212"));
        assert!(!repeated_any(b"1213"));
        assert!(!repeated_any(b"7"));
    }

    #[test]
    fn test_malformed_range() {
        assert!(matches!(parse("11-22,95"), Err(SolveError::InvalidInput(_))));
    }

    proptest! {
        #[test]
        fn doubled_blocks_match_both_rules(block in 1u64..100_000) {
            let id = format!("{block}{block}");
            prop_assert!(repeated_twice(id.as_bytes()));
            prop_assert!(repeated_any(id.as_bytes()));
        }

        #[test]
        fn exactly_twice_implies_at_least_twice(id in 1u64..10_000_000) {
            let id = id.to_string();
            prop_assert!(!repeated_twice(id.as_bytes()) || repeated_any(id.as_bytes()));
        }
    }
}
