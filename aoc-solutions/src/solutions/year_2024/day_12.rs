use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::{Direction, Point2};
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["2024", "grid", "flood-fill"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, Default)]
pub struct Region {
    area: u64,
    perimeter: u64,
    /// Equal to the number of straight sides
    corners: u64,
}

#[derive(Debug)]
pub struct Garden {
    plots: Grid<u8>,
    regions: Option<Vec<Region>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Garden;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let plots = Grid::parse_with(input, |b| b.is_ascii_uppercase().then_some(b))?;
        Ok(Garden {
            plots,
            regions: None,
        })
    }
}

impl Garden {
    fn same(&self, p: Point2, plant: u8) -> bool {
        self.plots.get(p) == Some(&plant)
    }

    /// Outer and inner corners of the region touching `p`
    fn corners_at(&self, p: Point2, plant: u8) -> u64 {
        Direction::ALL
            .into_iter()
            .filter(|&dir| {
                let (a, b) = (dir.offset(), dir.turn_right().offset());
                let side_a = self.same(p + a, plant);
                let side_b = self.same(p + b, plant);
                let diagonal = self.same(p + a + b, plant);
                (!side_a && !side_b) || (side_a && side_b && !diagonal)
            })
            .count() as u64
    }

    fn flood(&self, start: Point2, seen: &mut Grid<bool>) -> Region {
        let plant = self.plots[start];
        let mut region = Region::default();
        let mut stack = vec![start];
        seen[start] = true;
        while let Some(p) = stack.pop() {
            region.area += 1;
            region.corners += self.corners_at(p, plant);
            for n in p.neighbors4() {
                if !self.same(n, plant) {
                    region.perimeter += 1;
                } else if !seen[n] {
                    seen[n] = true;
                    stack.push(n);
                }
            }
        }
        region
    }

    fn regions(&mut self) -> &[Region] {
        if self.regions.is_none() {
            let mut seen = Grid::new(self.plots.width(), self.plots.height(), false);
            let mut regions = Vec::new();
            for p in self.plots.positions() {
                if !seen[p] {
                    regions.push(self.flood(p, &mut seen));
                }
            }
            self.regions = Some(regions);
        }
        self.regions.as_deref().unwrap_or_default()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = shared.regions().iter().map(|r| r.area * r.perimeter).sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = shared.regions().iter().map(|r| r.area * r.corners).sum();
        Ok(price.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SMALL: &str = "AAAA\nBBCD\nBBCC\nEEEC\n";

    const EXAMPLE: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    #[test]
    fn test_small() {
        let mut shared = Solver::parse(SMALL).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "140");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "80");
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1930");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1206");
    }

    #[test]
    fn test_regions_computed_once() {
        let mut shared = Solver::parse(SMALL).unwrap();
        assert!(shared.regions.is_none());
        assert_eq!(shared.regions().len(), 5);
        assert!(shared.regions.is_some());
    }
}
