use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use rayon::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["2024", "sequences"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.split_whitespace()
                    .map(|level| level.parse::<i32>().map_err(|e| ParseError::at_line(line_idx, e)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }
}

/// Strictly monotonic with every step between 1 and 3
fn is_safe(levels: impl Iterator<Item = i32> + Clone) -> bool {
    let steps = levels.tuple_windows().map(|(a, b)| b - a);
    steps.clone().all(|d| (1..=3).contains(&d)) || steps.clone().all(|d| (-3..=-1).contains(&d))
}

/// Safe once any single level is dropped
fn is_tolerable(report: &[i32]) -> bool {
    (0..report.len()).any(|skip| {
        is_safe(
            report
                .iter()
                .enumerate()
                .filter(move |&(i, _)| i != skip)
                .map(|(_, &level)| level),
        )
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe(report.iter().copied()))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .par_iter()
            .filter(|report| is_tolerable(report))
            .count();
        Ok(safe.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4");
    }

    #[test]
    fn test_dampener_drops_first_level() {
        assert!(!is_safe([9, 1, 2, 3].into_iter()));
        assert!(is_tolerable(&[9, 1, 2, 3]));
    }
}
