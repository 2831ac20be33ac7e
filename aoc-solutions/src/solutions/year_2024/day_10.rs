use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::Point2;
use crate::utils::dp_cache::{DpCache, VecBackend};
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["2024", "grid", "dp"])]
pub struct Solver;

const PEAK: u8 = 9;
/// Height of impassable `.` cells
const IMPASSABLE: u8 = u8::MAX;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'.' => Some(IMPASSABLE),
            _ => None,
        })
    }
}

/// Neighbours exactly one step higher
fn uphill(map: &Grid<u8>, p: Point2) -> impl Iterator<Item = Point2> + '_ {
    let height = map[p];
    p.neighbors4()
        .into_iter()
        .filter(move |&n| height < PEAK && map.get(n) == Some(&(height + 1)))
}

fn trailheads(map: &Grid<u8>) -> impl Iterator<Item = Point2> + '_ {
    map.iter().filter(|&(_, &h)| h == 0).map(|(p, _)| p)
}

/// Number of distinct peaks reachable from `head`
fn score(map: &Grid<u8>, head: Point2) -> usize {
    let mut seen = Grid::new(map.width(), map.height(), false);
    let mut stack = vec![head];
    let mut peaks = 0;
    seen[head] = true;
    while let Some(p) = stack.pop() {
        if map[p] == PEAK {
            peaks += 1;
            continue;
        }
        for n in uphill(map, p) {
            if !seen[n] {
                seen[n] = true;
                stack.push(n);
            }
        }
    }
    peaks
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map: &Grid<u8> = shared;
        let total: usize = trailheads(map).map(|head| score(map, head)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map: &Grid<u8> = shared;
        let width = map.width() as i64;
        let point = move |i: &usize| Point2::new(*i as i64 % width, *i as i64 / width);
        let index = move |p: Point2| (p.y * width + p.x) as usize;

        // distinct hiking trails from each cell to any peak
        let ratings = DpCache::new(
            VecBackend::new(),
            |i: &usize| uphill(map, point(i)).map(index).collect(),
            |i: &usize, trails: Vec<u64>| {
                if map[point(i)] == PEAK { 1 } else { trails.iter().sum() }
            },
        );
        let total: u64 = trailheads(map).map(|head| ratings.get(&index(head))).sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "36");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "81");
    }

    #[test]
    fn test_impassable_cells() {
        let mut shared = Solver::parse(
            "...0...\n...1...\n...2...\n6543456\n7.....7\n8.....8\n9.....9",
        )
        .unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
    }
}
