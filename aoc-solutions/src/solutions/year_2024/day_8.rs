use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::utils::coord::Point2;
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["2024", "grid", "geometry"])]
pub struct Solver;

#[derive(Debug)]
pub struct City {
    width: usize,
    height: usize,
    /// Antenna positions grouped by frequency
    antennas: HashMap<u8, Vec<Point2>>,
}

impl City {
    fn contains(&self, p: Point2) -> bool {
        (0..self.width as i64).contains(&p.x) && (0..self.height as i64).contains(&p.y)
    }

    /// Antinodes of every ordered antenna pair; `resonant` extends them along the whole line
    fn antinodes(&self, resonant: bool) -> HashSet<Point2> {
        let mut found = HashSet::new();
        for positions in self.antennas.values() {
            for (&a, &b) in positions.iter().tuple_combinations() {
                for (from, step) in [(b, b - a), (a, a - b)] {
                    if resonant {
                        let mut p = from;
                        while self.contains(p) {
                            found.insert(p);
                            p += step;
                        }
                    } else if self.contains(from + step) {
                        found.insert(from + step);
                    }
                }
            }
        }
        found
    }
}

impl AocParser for Solver {
    type SharedData<'a> = City;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = Grid::parse_with(input, |b| match b {
            b'.' => Some(None),
            b if b.is_ascii_alphanumeric() => Some(Some(b)),
            _ => None,
        })?;
        let antennas = map
            .iter()
            .filter_map(|(p, freq)| freq.map(|freq| (freq, p)))
            .into_group_map();
        Ok(City {
            width: map.width(),
            height: map.height(),
            antennas,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.antinodes(false).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.antinodes(true).len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "14");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "34");
    }

    #[test]
    fn test_single_antenna_has_no_antinodes() {
        let mut shared = Solver::parse("...\n.a.\n...").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "0");
    }
}
