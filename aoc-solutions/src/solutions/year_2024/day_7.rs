use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use rayon::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["2024", "search"])]
pub struct Solver;

#[derive(Debug)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let (target, operands) = line
                    .split_once(':')
                    .ok_or_else(|| ParseError::at_line(line_idx, "expected `target: operands`"))?;
                let number = |s: &str| s.parse::<u64>().map_err(|e| ParseError::at_line(line_idx, e));
                let operands = operands
                    .split_whitespace()
                    .map(number)
                    .collect::<Result<Vec<_>, _>>()?;
                if operands.is_empty() {
                    return Err(ParseError::at_line(line_idx, "no operands"));
                }
                Ok(Equation {
                    target: number(target.trim())?,
                    operands,
                })
            })
            .collect()
    }
}

/// `target` with the decimal digits of `suffix` stripped from its end
fn strip_suffix(target: u64, suffix: u64) -> Option<u64> {
    let mut scale = 10;
    while scale <= suffix {
        scale *= 10;
    }
    (target > suffix && target % scale == suffix).then_some(target / scale)
}

/// Work backwards from the target, undoing the last operator each step
fn solvable(target: u64, operands: &[u64], concat: bool) -> bool {
    match operands {
        [] => false,
        [only] => target == *only,
        [rest @ .., last] => {
            let last = *last;
            (target >= last && solvable(target - last, rest, concat))
                || (last != 0 && target % last == 0 && solvable(target / last, rest, concat))
                || (concat && strip_suffix(target, last).is_some_and(|t| solvable(t, rest, concat)))
        }
    }
}

fn calibration(equations: &[Equation], concat: bool) -> u64 {
    equations
        .par_iter()
        .filter(|eq| solvable(eq.target, &eq.operands, concat))
        .map(|eq| eq.target)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3749");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "11387");
    }

    #[test]
    fn test_strip_suffix() {
        assert_eq!(strip_suffix(156, 6), Some(15));
        assert_eq!(strip_suffix(1510, 10), Some(15));
        assert_eq!(strip_suffix(156, 56), Some(1));
        assert_eq!(strip_suffix(56, 56), None);
        assert_eq!(strip_suffix(157, 6), None);
    }
}
