use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocSolution, BaseSolution, Solution, SolutionBase, SolveError};
use std::str::FromStr;

const DIAL_SIZE: u64 = 100;
const DIAL_START: u64 = 50;

#[derive(AocSolution)]
#[aoc(year = 2025, day = 1)]
pub struct Solver {
    #[base]
    base: BaseSolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Left(u64),
    Right(u64),
}

impl FromStr for Rotation {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (direction, clicks) = line.split_at_checked(1).ok_or_else(|| anyhow!("rotation must start with a direction"))?;
        let clicks = clicks
            .parse::<u64>()
            .with_context(|| format!("invalid click count `{clicks}`"))?;
        match direction {
            "L" => Ok(Self::Left(clicks)),
            "R" => Ok(Self::Right(clicks)),
            other => bail!("direction must be 'L' or 'R', found `{other}`"),
        }
    }
}

/// Safe dial numbered `0..DIAL_SIZE`
#[derive(Debug, PartialEq, Eq)]
struct Dial {
    position: u64,
    /// Rotations that leave the dial resting on zero
    zero_rests: u64,
    /// Individual clicks that land on zero
    zero_touches: u64,
}

impl Default for Dial {
    fn default() -> Self {
        Self {
            position: DIAL_START,
            zero_rests: 0,
            zero_touches: 0,
        }
    }
}

impl Dial {
    fn spin(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::Right(clicks) => {
                self.zero_touches += (self.position + clicks) / DIAL_SIZE;
                self.position = (self.position + clicks) % DIAL_SIZE;
            }
            Rotation::Left(clicks) => {
                let to_zero = if self.position == 0 { DIAL_SIZE } else { self.position };
                if clicks >= to_zero {
                    self.zero_touches += 1 + (clicks - to_zero) / DIAL_SIZE;
                }
                self.position = (self.position + DIAL_SIZE - clicks % DIAL_SIZE) % DIAL_SIZE;
            }
        }

        if self.position == 0 {
            self.zero_rests += 1;
        }
    }
}

fn parse(input: &str) -> Result<Vec<Rotation>, SolveError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| line.trim().parse().with_context(|| format!("line {}", idx + 1)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SolveError::InvalidInput(format!("{e:#}")))
}

fn simulate(rotations: &[Rotation]) -> Dial {
    let mut dial = Dial::default();
    for &rotation in rotations {
        dial.spin(rotation);
    }
    dial
}

impl Solver {
    fn dial(&self) -> Result<Dial, SolveError> {
        Ok(simulate(&parse(self.data()?)?))
    }
}

impl Solution for Solver {
    fn solve_a(&self) -> Result<i64, SolveError> {
        Ok(self.dial()?.zero_rests as i64)
    }

    fn solve_b(&self) -> Result<i64, SolveError> {
        Ok(self.dial()?.zero_touches as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::test_support::solve;

    const SAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve::<Solver>(SAMPLE), (3, 6));
    }

    #[test]
    fn test_full_turns_touch_zero_every_time() {
        let dial = simulate(&[Rotation::Right(1000)]);
        assert_eq!((dial.position, dial.zero_rests, dial.zero_touches), (50, 0, 10));

        let dial = simulate(&[Rotation::Left(50), Rotation::Left(100)]);
        assert_eq!((dial.position, dial.zero_rests, dial.zero_touches), (0, 2, 2));
    }

    #[test]
    fn test_leaving_zero_is_not_a_touch() {
        let dial = simulate(&[Rotation::Left(50), Rotation::Left(5), Rotation::Right(5)]);
        assert_eq!((dial.position, dial.zero_rests, dial.zero_touches), (0, 2, 2));
    }

    #[test]
    fn test_invalid_direction() {
        let err = parse("L10\nX5").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
