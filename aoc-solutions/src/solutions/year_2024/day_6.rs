use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use rayon::prelude::*;

use crate::utils::coord::{Direction, Point2};
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["2024", "grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct Lab {
    obstacles: Grid<bool>,
    guard: Point2,
}

impl AocParser for Solver {
    type SharedData<'a> = Lab;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let raw = Grid::parse_with(input, |b| matches!(b, b'.' | b'#' | b'^').then_some(b))?;
        let guard = raw
            .find(|&b| b == b'^')
            .ok_or_else(|| ParseError::MissingData("guard `^`".into()))?;
        Ok(Lab {
            obstacles: raw.map(|&b| b == b'#'),
            guard,
        })
    }
}

impl Lab {
    fn blocked(&self, p: Point2, extra: Option<Point2>) -> bool {
        Some(p) == extra || self.obstacles.get(p).copied().unwrap_or(false)
    }

    /// Walk the guard until they leave the lab
    ///
    /// Returns the headings seen on each cell as bit sets, or `None` when the
    /// guard ends up in a loop.
    fn patrol(&self, extra: Option<Point2>) -> Option<Grid<u8>> {
        let mut seen = Grid::new(self.obstacles.width(), self.obstacles.height(), 0u8);
        let (mut pos, mut dir) = (self.guard, Direction::Up);

        loop {
            let bit = 1 << dir.index();
            if seen[pos] & bit != 0 {
                return None;
            }
            seen[pos] |= bit;

            let ahead = pos + dir.offset();
            if !self.obstacles.contains(ahead) {
                return Some(seen);
            }
            if self.blocked(ahead, extra) {
                dir = dir.turn_right();
            } else {
                pos = ahead;
            }
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let seen = shared
            .patrol(None)
            .ok_or_else(|| SolveError::NoSolution("guard never leaves the lab".into()))?;
        Ok(seen.iter().filter(|&(_, &mask)| mask != 0).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lab: &Lab = shared;
        let seen = lab
            .patrol(None)
            .ok_or_else(|| SolveError::NoSolution("guard never leaves the lab".into()))?;

        // only cells on the original route can change it
        let candidates: Vec<Point2> = seen
            .iter()
            .filter(|&(p, &mask)| mask != 0 && p != lab.guard)
            .map(|(p, _)| p)
            .collect();
        let loops = candidates
            .par_iter()
            .filter(|&&p| lab.patrol(Some(p)).is_none())
            .count();
        Ok(loops.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "41");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_trapped_guard() {
        let mut shared = Solver::parse(".#.\n#^#\n.#.").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
    }
}
