use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["2023", "sequences"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.split_whitespace()
                    .map(|n| n.parse::<i64>().map_err(|e| ParseError::at_line(line_idx, e)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }
}

/// Next value by repeated differencing
fn extrapolate(history: &[i64]) -> i64 {
    if history.iter().all(|&v| v == 0) {
        return 0;
    }
    let diffs: Vec<i64> = history.iter().tuple_windows().map(|(a, b)| b - a).collect();
    history.last().copied().unwrap_or(0) + extrapolate(&diffs)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|h| extrapolate(h)).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: i64 = shared
            .iter()
            .map(|h| extrapolate(&h.iter().rev().copied().collect::<Vec<_>>()))
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "114");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
    }

    #[test]
    fn test_extrapolate() {
        assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), 68);
        assert_eq!(extrapolate(&[]), 0);
    }
}
