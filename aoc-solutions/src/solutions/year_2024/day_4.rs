use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::Point2;
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["2024", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_bytes(input)
    }
}

/// Whether `word` reads from `start` stepping by `step`
fn reads(grid: &Grid<u8>, word: &[u8], start: Point2, step: Point2) -> bool {
    word.iter()
        .enumerate()
        .all(|(i, &letter)| grid.get(start + step * i as i64) == Some(&letter))
}

/// `MAS` crossed with `MAS` around an `A`, each diagonal in either direction
fn is_x_mas(grid: &Grid<u8>, center: Point2) -> bool {
    let diagonal = |a: Point2, b: Point2| {
        matches!(
            (grid.get(center + a).copied(), grid.get(center + b).copied()),
            (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
        )
    };
    grid[center] == b'A'
        && diagonal(Point2::new(-1, -1), Point2::new(1, 1))
        && diagonal(Point2::new(1, -1), Point2::new(-1, 1))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<u8> = shared;
        let steps: Vec<Point2> = Point2::ORIGIN.neighbors8().collect();
        let count: usize = grid
            .positions()
            .map(|p| steps.iter().filter(|&&step| reads(grid, b"XMAS", p, step)).count())
            .sum();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<u8> = shared;
        let count = grid.positions().filter(|&p| is_x_mas(grid, p)).count();
        Ok(count.to_string())
    }
}
