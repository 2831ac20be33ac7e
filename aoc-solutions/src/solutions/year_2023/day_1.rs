use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["2023", "string"])]
pub struct Solver;

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.trim().lines().map(str::trim).collect())
    }
}

/// Digit starting at byte `i` of `line`, if any
fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
    let rest = &line.as_bytes()[i..];
    match rest.first() {
        Some(b) if b.is_ascii_digit() => Some((b - b'0') as u32),
        _ if spelled => SPELLED
            .iter()
            .position(|word| rest.starts_with(word.as_bytes()))
            .map(|idx| idx as u32 + 1),
        _ => None,
    }
}

fn calibration(lines: &[&str], spelled: bool) -> Result<u32, SolveError> {
    let mut total = 0;
    for (idx, line) in lines.iter().enumerate() {
        let first = (0..line.len()).find_map(|i| digit_at(line, i, spelled));
        let last = (0..line.len()).rev().find_map(|i| digit_at(line, i, spelled));
        match (first, last) {
            (Some(first), Some(last)) => total += first * 10 + last,
            _ => return Err(SolveError::NoSolution(format!("line {} has no digit", idx + 1))),
        }
    }
    Ok(total)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, false)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, true)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example_part1() {
        let mut shared = Solver::parse("1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "142");
    }

    #[test]
    fn test_example_part2() {
        let input = "two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "281");
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
    }
}
