use std::collections::HashSet;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::coord::{Direction, Point2};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 9, tags = ["2022", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Direction, u32)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let (dir, steps) = line
                    .trim()
                    .split_once(' ')
                    .ok_or_else(|| ParseError::at_line(line_idx, "expected `<dir> <steps>`"))?;
                let dir = match dir.as_bytes() {
                    [b] => Direction::from_byte(*b),
                    _ => None,
                }
                .ok_or_else(|| ParseError::at_line(line_idx, format!("unknown direction {:?}", dir)))?;
                let steps = steps
                    .parse()
                    .map_err(|_| ParseError::at_line(line_idx, format!("bad step count {:?}", steps)))?;
                Ok((dir, steps))
            })
            .collect()
    }
}

/// Distinct positions visited by the last of `knots` knots
fn tail_positions(moves: &[(Direction, u32)], knots: usize) -> usize {
    let mut rope = vec![Point2::ORIGIN; knots];
    let mut visited = HashSet::from([Point2::ORIGIN]);

    for &(dir, steps) in moves {
        for _ in 0..steps {
            rope[0] += dir.offset();
            for i in 1..knots {
                let gap = rope[i - 1] - rope[i];
                if gap.chebyshev(Point2::ORIGIN) <= 1 {
                    break;
                }
                rope[i] += gap.signum();
            }
            visited.insert(rope[knots - 1]);
        }
    }
    visited.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_positions(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_positions(shared, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
    }

    #[test]
    fn test_larger_example() {
        let mut shared = Solver::parse("R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "36");
    }
}
