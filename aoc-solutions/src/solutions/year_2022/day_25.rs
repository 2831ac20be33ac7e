use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2022, day = 25, tags = ["2022", "number-base"])]
pub struct Solver;

fn from_snafu(text: &str) -> Option<i64> {
    text.bytes().try_fold(0i64, |acc, b| {
        let digit = match b {
            b'2' => 2,
            b'1' => 1,
            b'0' => 0,
            b'-' => -1,
            b'=' => -2,
            _ => return None,
        };
        acc.checked_mul(5)?.checked_add(digit)
    })
}

fn to_snafu(mut n: i64) -> String {
    if n == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while n != 0 {
        let (digit, carry) = match n.rem_euclid(5) {
            0 => (b'0', 0),
            1 => (b'1', 0),
            2 => (b'2', 0),
            3 => (b'=', 1),
            _ => (b'-', 1),
        };
        digits.push(digit);
        n = n.div_euclid(5) + carry;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                from_snafu(line.trim())
                    .ok_or_else(|| ParseError::at_line(line_idx, format!("not a SNAFU number: {:?}", line)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(to_snafu(shared.iter().sum()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "1=-0-2\n12111\n2=0=\n21\n2=01\n111\n20012\n112\n1=-1=\n1-12\n12\n1=\n122\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.iter().sum::<i64>(), 4890);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2=-1=0");
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }

    #[test]
    fn test_round_trip_samples() {
        for (decimal, snafu) in [(1, "1"), (3, "1="), (8, "2="), (2022, "1=11-2"), (314159265, "1121-1110-1=0")] {
            assert_eq!(to_snafu(decimal), snafu);
            assert_eq!(from_snafu(snafu), Some(decimal));
        }
    }
}
