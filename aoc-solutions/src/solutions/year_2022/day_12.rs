use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::Point2;
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["2022", "pathfinding"])]
pub struct Solver;

#[derive(Debug)]
pub struct HeightMap {
    heights: Grid<u8>,
    start: Point2,
    end: Point2,
}

impl AocParser for Solver {
    type SharedData<'a> = HeightMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let raw = Grid::parse_with(input, |b| match b {
            b'a'..=b'z' | b'S' | b'E' => Some(b),
            _ => None,
        })?;
        let start = raw
            .find(|&b| b == b'S')
            .ok_or_else(|| ParseError::MissingData("start `S`".into()))?;
        let end = raw
            .find(|&b| b == b'E')
            .ok_or_else(|| ParseError::MissingData("end `E`".into()))?;
        let heights = raw.map(|&b| match b {
            b'S' => 0,
            b'E' => 25,
            b => b - b'a',
        });
        Ok(HeightMap { heights, start, end })
    }
}

impl HeightMap {
    fn can_climb(&self, from: Point2, to: Point2) -> bool {
        self.heights[to] <= self.heights[from] + 1
    }

    /// A* from `start` to `end`, Manhattan distance as the heuristic
    fn shortest_climb(&self) -> Option<usize> {
        let mut best = Grid::new(self.heights.width(), self.heights.height(), usize::MAX);
        let mut open = BinaryHeap::new();
        best[self.start] = 0;
        open.push(Reverse((self.start.manhattan(self.end) as usize, 0usize, self.start)));

        while let Some(Reverse((_, steps, pos))) = open.pop() {
            if pos == self.end {
                return Some(steps);
            }
            if steps > best[pos] {
                continue;
            }
            for next in pos.neighbors4() {
                if !self.heights.contains(next) || !self.can_climb(pos, next) {
                    continue;
                }
                let cost = steps + 1;
                if cost < best[next] {
                    best[next] = cost;
                    open.push(Reverse((cost + next.manhattan(self.end) as usize, cost, next)));
                }
            }
        }
        None
    }

    /// BFS downhill from `end` to the nearest lowest square
    fn shortest_descent(&self) -> Option<usize> {
        let mut seen = Grid::new(self.heights.width(), self.heights.height(), false);
        let mut queue = VecDeque::from([(self.end, 0)]);
        seen[self.end] = true;

        while let Some((pos, steps)) = queue.pop_front() {
            if self.heights[pos] == 0 {
                return Some(steps);
            }
            for next in pos.neighbors4() {
                if self.heights.contains(next) && !seen[next] && self.can_climb(next, pos) {
                    seen[next] = true;
                    queue.push_back((next, steps + 1));
                }
            }
        }
        None
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .shortest_climb()
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::NoSolution("E is unreachable from S".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .shortest_descent()
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::NoSolution("no `a` square reaches E".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.start, Point2::new(0, 0));
        assert_eq!(shared.end, Point2::new(5, 2));
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "31");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "29");
    }

    #[test]
    fn test_unreachable() {
        let mut shared = Solver::parse("SzE\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
    }
}
