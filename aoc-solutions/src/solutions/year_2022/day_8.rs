use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::{Direction, Point2};
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["2022", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| b.is_ascii_digit().then(|| b - b'0'))
    }
}

/// Trees from `from` (exclusive) to the edge, walking in `dir`
fn line_of_sight(forest: &Grid<u8>, from: Point2, dir: Direction) -> impl Iterator<Item = u8> + '_ {
    let step = dir.offset();
    std::iter::successors(Some(from + step), move |&p| Some(p + step))
        .map_while(|p| forest.get(p).copied())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let forest: &Grid<u8> = shared;
        let visible = forest
            .iter()
            .filter(|&(p, &height)| {
                Direction::ALL
                    .iter()
                    .any(|&dir| line_of_sight(forest, p, dir).all(|other| other < height))
            })
            .count();
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let forest: &Grid<u8> = shared;
        let best = forest
            .iter()
            .map(|(p, &height)| {
                Direction::ALL
                    .iter()
                    .map(|&dir| {
                        let mut seen = 0;
                        for other in line_of_sight(forest, p, dir) {
                            seen += 1;
                            if other >= height {
                                break;
                            }
                        }
                        seen
                    })
                    .product::<usize>()
            })
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("30373\n25512\n65332\n33549\n35390\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "21");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "8");
    }
}
