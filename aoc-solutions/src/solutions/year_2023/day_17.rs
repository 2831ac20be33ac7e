use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::{Direction, Point2};
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 17, tags = ["2023", "pathfinding"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| (b as char).to_digit(10))
    }
}

/// Dijkstra over (position, axis of the last run); each edge is a whole
/// straight run of `min_run..=max_run` blocks followed by a turn
fn min_heat_loss(city: &Grid<u32>, min_run: i64, max_run: i64) -> Option<u32> {
    let end = Point2::new(city.width() as i64 - 1, city.height() as i64 - 1);
    // axis 0: last run was horizontal, 1: vertical
    let mut best: [Grid<u32>; 2] = [city.map(|_| u32::MAX), city.map(|_| u32::MAX)];
    let mut queue = BinaryHeap::new();
    for axis in 0..2 {
        best[axis][Point2::ORIGIN] = 0;
        queue.push(Reverse((0, Point2::ORIGIN, axis)));
    }

    while let Some(Reverse((loss, pos, axis))) = queue.pop() {
        if pos == end {
            return Some(loss);
        }
        if loss > best[axis][pos] {
            continue;
        }
        // turn onto the other axis
        let next_axis = 1 - axis;
        let dirs = if next_axis == 0 {
            [Direction::Left, Direction::Right]
        } else {
            [Direction::Up, Direction::Down]
        };
        for dir in dirs {
            let mut total = loss;
            for run in 1..=max_run {
                let next = pos + dir.offset() * run;
                let Some(&cost) = city.get(next) else {
                    break;
                };
                total += cost;
                if run >= min_run && total < best[next_axis][next] {
                    best[next_axis][next] = total;
                    queue.push(Reverse((total, next, next_axis)));
                }
            }
        }
    }
    None
}

fn solve_with(city: &Grid<u32>, min_run: i64, max_run: i64) -> Result<String, SolveError> {
    min_heat_loss(city, min_run, max_run)
        .map(|loss| loss.to_string())
        .ok_or_else(|| SolveError::NoSolution("the factory cannot be reached".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, 1, 3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, 4, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "102");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "94");
    }

    #[test]
    fn test_ultra_crucible_second_example() {
        let mut shared = Solver::parse("111111111111\n999999999991\n999999999991\n999999999991\n999999999991\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "71");
    }
}
