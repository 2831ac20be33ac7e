use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["2022", "sliding-window"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stream = input.trim_end();
        if let Some((col, bad)) = stream.bytes().enumerate().find(|(_, b)| !b.is_ascii_lowercase()) {
            return Err(ParseError::at_line(
                0,
                format!("unexpected byte {:?} in column {}", bad as char, col + 1),
            ));
        }
        Ok(stream.as_bytes())
    }
}

/// Number of characters processed when the last `size` are all distinct
fn find_marker(stream: &[u8], size: usize) -> Result<usize, SolveError> {
    stream
        .windows(size)
        .position(|w| w.iter().fold(0u32, |set, b| set | 1 << (b - b'a')).count_ones() as usize == size)
        .map(|start| start + size)
        .ok_or_else(|| SolveError::NoSolution(format!("no marker of {} distinct characters", size)))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(find_marker(shared, 4)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(find_marker(shared, 14)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("mjqjpqmgbljsphdztnvjfqwrcgsmlb\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "7");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "19");
    }

    #[test]
    fn test_more_streams() {
        assert_eq!(find_marker(b"bvwbjplbgvbhsrlpgdmjqwftvncz", 4).unwrap(), 5);
        assert_eq!(find_marker(b"zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 14).unwrap(), 26);
        assert!(find_marker(b"aaaa", 4).is_err());
    }
}
