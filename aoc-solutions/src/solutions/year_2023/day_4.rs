use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["2023", "counting"])]
pub struct Solver;

fn parse_numbers(text: &str) -> anyhow::Result<Vec<u32>> {
    text.split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad number {:?}", n)))
        .collect()
}

/// Winning numbers found on a card
fn matches(line: &str) -> anyhow::Result<usize> {
    let (_, numbers) = line.split_once(':').ok_or_else(|| anyhow!("missing `:`"))?;
    let (winning, have) = numbers.split_once('|').ok_or_else(|| anyhow!("missing `|`"))?;
    let winning = parse_numbers(winning)?;
    Ok(parse_numbers(have)?
        .iter()
        .filter(|n| winning.contains(n))
        .count())
}

impl AocParser for Solver {
    /// Matching numbers per card
    type SharedData<'a> = Vec<usize>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| matches(line).map_err(|e| ParseError::at_line(line_idx, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let points: u64 = shared
            .iter()
            .filter(|&&m| m > 0)
            .map(|&m| 1u64 << (m - 1))
            .sum();
        Ok(points.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut copies = vec![1u64; shared.len()];
        for (card, &won) in shared.iter().enumerate() {
            let end = (card + 1 + won).min(copies.len());
            for next in card + 1..end {
                copies[next] += copies[card];
            }
        }
        Ok(copies.iter().sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared, vec![4, 2, 2, 1, 0, 0]);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "30");
    }
}
