use std::collections::VecDeque;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::Point2;
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["2024", "pathfinding", "binary-search"])]
pub struct Solver;

/// Side length of the memory space
const SIZE: usize = 71;
/// Bytes fallen before the first walk
const FALLEN: usize = 1024;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Point2>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let (x, y) = line
                    .split_once(',')
                    .ok_or_else(|| ParseError::at_line(line_idx, "expected `X,Y`"))?;
                let coord = |s: &str| {
                    s.trim()
                        .parse::<i64>()
                        .map_err(|e| ParseError::at_line(line_idx, e))
                };
                Ok(Point2::new(coord(x)?, coord(y)?))
            })
            .collect()
    }
}

/// BFS from the top-left to the bottom-right corner of a `size` square
/// after the first `fallen` bytes have corrupted their cells
fn shortest_exit(bytes: &[Point2], size: usize, fallen: usize) -> Option<usize> {
    let mut corrupted = Grid::new(size, size, false);
    for &byte in bytes.iter().take(fallen) {
        if let Some(cell) = corrupted.get_mut(byte) {
            *cell = true;
        }
    }

    let exit = Point2::new(size as i64 - 1, size as i64 - 1);
    if corrupted.get(Point2::ORIGIN) != Some(&false) {
        return None;
    }
    let mut seen = Grid::new(size, size, false);
    let mut queue = VecDeque::from([(Point2::ORIGIN, 0)]);
    seen[Point2::ORIGIN] = true;

    while let Some((p, steps)) = queue.pop_front() {
        if p == exit {
            return Some(steps);
        }
        for n in p.neighbors4() {
            if corrupted.get(n) == Some(&false) && !seen[n] {
                seen[n] = true;
                queue.push_back((n, steps + 1));
            }
        }
    }
    None
}

/// First byte whose fall cuts the exit off, by binary search over fall counts
fn first_blocker(bytes: &[Point2], size: usize) -> Option<Point2> {
    if shortest_exit(bytes, size, bytes.len()).is_some() {
        return None;
    }
    // smallest number of fallen bytes that leaves the exit unreachable
    let (mut lo, mut hi) = (0, bytes.len());
    while lo < hi {
        let mid = (lo + hi) / 2;
        if shortest_exit(bytes, size, mid).is_some() {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo.checked_sub(1).and_then(|i| bytes.get(i)).copied()
}

fn min_steps(bytes: &[Point2], size: usize, fallen: usize) -> Result<String, SolveError> {
    shortest_exit(bytes, size, fallen)
        .map(|steps| steps.to_string())
        .ok_or_else(|| SolveError::NoSolution("exit unreachable".into()))
}

fn blocker(bytes: &[Point2], size: usize) -> Result<String, SolveError> {
    first_blocker(bytes, size)
        .map(|p| p.to_string())
        .ok_or_else(|| SolveError::NoSolution("exit never cut off".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_steps(shared, SIZE, FALLEN)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        blocker(shared, SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn test_example() {
        let bytes = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(min_steps(&bytes, 7, 12).unwrap(), "22");
        assert_eq!(blocker(&bytes, 7).unwrap(), "6,1");
    }

    #[test]
    fn test_never_blocked() {
        let bytes = Solver::parse("1,1\n").unwrap();
        assert!(matches!(blocker(&bytes, 3), Err(SolveError::NoSolution(_))));
    }
}
