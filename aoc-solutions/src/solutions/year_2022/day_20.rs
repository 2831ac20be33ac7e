use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 20, tags = ["2022", "simulation"])]
pub struct Solver;

const DECRYPTION_KEY: i64 = 811_589_153;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let numbers = input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| line.trim().parse().map_err(|e| ParseError::at_line(line_idx, e)))
            .collect::<Result<Vec<i64>, _>>()?;
        match numbers.iter().filter(|&&n| n == 0).count() {
            1 => Ok(numbers),
            n => Err(ParseError::InvalidFormat(format!("expected exactly one 0, found {}", n))),
        }
    }
}

/// Mix `rounds` times and sum the values 1000, 2000 and 3000 after the zero
fn grove_coordinates(numbers: &[i64], key: i64, rounds: usize) -> i64 {
    let values: Vec<i64> = numbers.iter().map(|n| n * key).collect();
    let len = values.len();
    if len < 2 {
        // a lone zero never moves
        return 0;
    }
    // `order[k]` is the original index of the k-th number in the ring
    let mut order: Vec<usize> = (0..len).collect();

    for _ in 0..rounds {
        for (idx, &value) in values.iter().enumerate() {
            let Some(pos) = order.iter().position(|&o| o == idx) else {
                continue;
            };
            order.remove(pos);
            let target = (pos as i64 + value).rem_euclid(len as i64 - 1) as usize;
            order.insert(target, idx);
        }
    }

    let zero = order
        .iter()
        .position(|&o| values[o] == 0)
        .unwrap_or_default();
    [1000, 2000, 3000]
        .iter()
        .map(|offset| values[order[(zero + offset) % len]])
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(grove_coordinates(shared, 1, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(grove_coordinates(shared, DECRYPTION_KEY, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("1\n2\n-3\n3\n-2\n0\n4\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1623178306");
    }

    #[test]
    fn test_zero_required() {
        assert!(Solver::parse("1\n2\n").is_err());
    }
}
