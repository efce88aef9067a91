use aoc_solver::{AocSolution, BaseSolution, Solution, SolutionBase, SolveError};

const ROLL: u8 = b'@';
const EMPTY: u8 = b'.';
const CROWDED: usize = 4;

#[derive(AocSolution)]
#[aoc(year = 2025, day = 4)]
pub struct Solver {
    #[base]
    base: BaseSolution,
}

struct Grid {
    cells: Vec<Vec<u8>>,
}

impl Grid {
    fn parse(input: &str) -> Result<Self, SolveError> {
        let cells = input.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.as_bytes().to_vec())
            .collect::<Vec<_>>();

        if let Some(bad) = cells.iter().flatten().find(|&&c| c != ROLL && c != EMPTY) {
            return Err(SolveError::InvalidInput(format!("unexpected cell '{}'", *bad as char)));
        }
        Ok(Self { cells })
    }

    fn is_roll(&self, x: isize, y: isize) -> bool {
        usize::try_from(y).ok()
            .and_then(|y| self.cells.get(y))
            .zip(usize::try_from(x).ok())
            .and_then(|(row, x)| row.get(x))
            .is_some_and(|&c| c == ROLL)
    }

    fn neighbouring_rolls(&self, x: usize, y: usize) -> usize {
        let (x, y) = (x as isize, y as isize);
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| (dx, dy) != (0, 0))
            .filter(|&(dx, dy)| self.is_roll(x + dx, y + dy))
            .count()
    }

    /// Positions of the rolls a forklift can reach
    fn accessible(&self) -> Vec<(usize, usize)> {
        self.cells.iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &c)| (x, y, c)))
            .filter(|&(x, y, c)| c == ROLL && self.neighbouring_rolls(x, y) < CROWDED)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Repeatedly remove accessible rolls; returns how many were removed
    fn clear(&mut self) -> usize {
        let mut removed = 0;
        loop {
            let accessible = self.accessible();
            if accessible.is_empty() {
                return removed;
            }
            removed += accessible.len();
            for (x, y) in accessible {
                self.cells[y][x] = EMPTY;
            }
        }
    }
}

impl Solution for Solver {
    fn solve_a(&self) -> Result<i64, SolveError> {
        Ok(Grid::parse(self.data()?)?.accessible().len() as i64)
    }

    fn solve_b(&self) -> Result<i64, SolveError> {
        Ok(Grid::parse(self.data()?)?.clear() as i64)
    }
}
