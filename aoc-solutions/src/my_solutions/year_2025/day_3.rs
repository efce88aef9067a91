use aoc_solver::{AocSolution, BaseSolution, Solution, SolutionBase, SolveError};

#[derive(AocSolution)]
#[aoc(year = 2025, day = 3)]
pub struct Solver {
    #[base]
    base: BaseSolution,
}

fn parse(input: &str) -> Result<Vec<Vec<u8>>, SolveError> {
    input.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(line_idx, line)| {
            line.bytes()
                .map(|b| match b {
                    b'0'..=b'9' => Ok(b - b'0'),
                    _ => Err(SolveError::InvalidInput(format!(
                        "(line {}) '{}' is not a digit",
                        line_idx + 1,
                        b as char
                    ))),
                })
                .collect()
        })
        .collect()
}

/// Largest number formed by picking `n` digits of `bank` in order
///
/// Greedy: each digit is the largest one that still leaves enough digits
/// after it, taking the leftmost on ties.
fn largest_joltage(bank: &[u8], n: usize) -> Result<i64, SolveError> {
    if bank.len() < n {
        return Err(SolveError::InvalidInput(format!(
            "bank of {} batteries cannot supply {n} digits",
            bank.len()
        )));
    }

    let mut start = 0;
    let mut value = 0i64;
    for remaining in (0..n).rev() {
        let window = &bank[start..bank.len() - remaining];
        let (offset, digit) = window.iter()
            .enumerate()
            .fold((0, 0u8), |best, (i, &d)| if d > best.1 { (i, d) } else { best });
        value = value * 10 + i64::from(digit);
        start += offset + 1;
    }
    Ok(value)
}

fn total_joltage(input: &str, n: usize) -> Result<i64, SolveError> {
    parse(input)?
        .iter()
        .map(|bank| largest_joltage(bank, n))
        .sum()
}

impl Solution for Solver {
    fn solve_a(&self) -> Result<i64, SolveError> {
        total_joltage(self.data()?, 2)
    }

    fn solve_b(&self) -> Result<i64, SolveError> {
        total_joltage(self.data()?, 12)
    }
}
