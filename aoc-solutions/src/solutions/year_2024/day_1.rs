use std::collections::HashMap;

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["2024", "sorting"])]
pub struct Solver;

/// The two location-id columns, each sorted ascending
#[derive(Debug)]
pub struct Lists {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Lists;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (mut left, mut right) = (Vec::new(), Vec::new());
        for (line_idx, line) in input.trim_end().lines().enumerate() {
            let mut ids = line.split_whitespace().map(|id| {
                id.parse::<u64>()
                    .map_err(|e| ParseError::at_line(line_idx, e))
            });
            match (ids.next(), ids.next(), ids.next()) {
                (Some(l), Some(r), None) => {
                    left.push(l?);
                    right.push(r?);
                }
                _ => return Err(ParseError::at_line(line_idx, "expected two ids")),
            }
        }
        left.sort_unstable();
        right.sort_unstable();
        Ok(Lists { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance: u64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(l, r)| l.abs_diff(*r))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<u64, u64> = HashMap::new();
        for &id in &shared.right {
            *counts.entry(id).or_default() += 1;
        }
        let similarity: u64 = shared
            .left
            .iter()
            .map(|id| id * counts.get(id).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "31");
    }

    #[test]
    fn test_odd_column_count_rejected() {
        assert!(Solver::parse("1 2\n3\n").is_err());
    }

    #[test]
    fn test_errors_name_input_line() {
        let err = Solver::parse("3   4\n4   x\n").unwrap_err();
        assert!(err.to_string().contains("(line 2)"), "{}", err);

        let err = Solver::parse("\n\n3   4\n4\n").unwrap_err();
        assert!(err.to_string().contains("(line 4)"), "{}", err);
    }
}
